//! Asset Pipeline Use Case
//!
//! Orchestrates one build:
//! 1. Acquire the build lock
//! 2. Check the source root exists
//! 3. (debug) Compare stored and current fingerprints; stop if equal
//! 4. Clear the destination and dispatch every manifest entry
//! 5. Persist the fingerprint
//!
//! The lock guard lives for the whole call, so it is released on every
//! return path.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::domain::ports::{BuildEvent, BuildEventSink, CommandRunner, FingerprintStore, NoopEventSink};
use crate::domain::services::SourceUris;
use crate::domain::value_objects::{Environment, Fingerprint};
use crate::error::{AssetsError, AssetsResult};
use crate::infrastructure::compilers::CompileContext;
use crate::infrastructure::fs::{absolutize, recreate_dir, trim_dir};

use super::change_detector::ChangeDetector;
use super::dispatch::dispatch_manifest;
use super::options::PipelineConfig;
use super::result::{BuildOutcome, BuildReport};

/// Resolved source root
struct SourceRoot {
    /// Absolute, as configured
    path: PathBuf,
    /// Canonicalized
    real: PathBuf,
}

/// Asset pipeline - builds a manifest into a destination directory
///
/// Parameterized by its ports so tests can substitute an in-memory store
/// and a recording runner.
pub struct AssetPipeline<S, R>
where
    S: FingerprintStore,
    R: CommandRunner,
{
    config: PipelineConfig,
    store: S,
    runner: R,
    events: Arc<dyn BuildEventSink>,
}

impl<S, R> AssetPipeline<S, R>
where
    S: FingerprintStore,
    R: CommandRunner,
{
    pub fn new(config: PipelineConfig, store: S, runner: R) -> Self {
        Self {
            config,
            store,
            runner,
            events: Arc::new(NoopEventSink),
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn BuildEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Rebuild into `destination` unless nothing changed since the last
    /// successful debug build recorded in `config_file`
    pub fn build_debug(&self, config_file: &Path, destination: &Path) -> AssetsResult<BuildOutcome> {
        let guard = self.config.lock().acquire()?;
        let source = self.source_root()?;

        let detector = self.detector(&source.path);
        let stored = ChangeDetector::read_stored(&self.store, config_file)?;
        let current = detector.current_fingerprint(Some(guard.path()))?;

        if stored.as_ref() == Some(&current) {
            self.events.on_event(BuildEvent::UpToDate {
                fingerprint: current.clone(),
            });
            return Ok(BuildOutcome::Skipped {
                fingerprint: current,
            });
        }

        tracing::debug!(
            stored = stored.as_ref().map(Fingerprint::as_str),
            current = current.as_str(),
            "sources changed"
        );

        let report = self.build(Environment::Debug, &source, destination)?;
        ChangeDetector::write_stored(&self.store, config_file, &current)?;
        Ok(self.completed(current, report))
    }

    /// Always rebuild into `destination` and record a content hash of the
    /// sources in `config_file`
    pub fn build_production(&self, config_file: &Path, destination: &Path) -> AssetsResult<BuildOutcome> {
        let guard = self.config.lock().acquire()?;
        let source = self.source_root()?;

        let report = self.build(Environment::Production, &source, destination)?;

        let fingerprint = self
            .detector(&source.path)
            .content_fingerprint(Some(guard.path()))?;
        ChangeDetector::write_stored(&self.store, config_file, &fingerprint)?;
        Ok(self.completed(fingerprint, report))
    }

    /// Current debug fingerprint, without locking or persisting anything
    pub fn current_fingerprint(&self) -> AssetsResult<Fingerprint> {
        let source = self.source_root()?;
        let lock_path = self.config.lock().path().canonicalize().ok();
        self.detector(&source.path)
            .current_fingerprint(lock_path.as_deref())
    }

    fn detector<'a>(&'a self, source_root: &'a Path) -> ChangeDetector<'a> {
        ChangeDetector::new(
            &self.config.manifest,
            source_root,
            self.config.local_source_dir(),
        )
    }

    fn source_root(&self) -> AssetsResult<SourceRoot> {
        let path = absolutize(&self.config.source_dir)?;
        if !path.is_dir() {
            return Err(AssetsError::SourceMissing {
                path: self.config.source_dir.clone(),
            });
        }
        let real = path.canonicalize().map_err(|e| AssetsError::io(&path, e))?;
        Ok(SourceRoot { path, real })
    }

    fn build(
        &self,
        environment: Environment,
        source: &SourceRoot,
        destination: &Path,
    ) -> AssetsResult<BuildReport> {
        let destination = absolutize(Path::new(&trim_dir(&destination.to_string_lossy())))?;
        if source.path.starts_with(&destination) || source.real.starts_with(&destination) {
            return Err(AssetsError::io(
                &destination,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "destination directory contains the asset sources",
                ),
            ));
        }

        self.events.on_event(BuildEvent::Started {
            environment,
            source: source.path.clone(),
            destination: destination.clone(),
            entry_count: self.config.manifest.len(),
        });

        recreate_dir(&destination)?;
        if self.events.wants_detailed_events() {
            self.events.on_event(BuildEvent::DestinationCleared {
                destination: destination.clone(),
            });
        }

        let uri_root = match self.config.local_source_dir() {
            Some(local) => local.to_string(),
            None => source.real.to_string_lossy().into_owned(),
        };
        let uris = SourceUris::new(&source.path, uri_root).with_real_root(&source.real);

        let ctx = CompileContext {
            runner: &self.runner,
            source_root: &source.path,
            destination_root: &destination,
            system_bin_path: self.config.system_bin_path(),
            uris: &uris,
            want_source_map: environment.wants_source_map(),
        };

        dispatch_manifest(&self.config.manifest, environment, &ctx, self.events.as_ref())
    }

    fn completed(&self, fingerprint: Fingerprint, report: BuildReport) -> BuildOutcome {
        self.events.on_event(BuildEvent::Completed {
            built_count: report.built_count(),
            skipped_count: report.skipped_count(),
            fingerprint: fingerprint.clone(),
        });
        BuildOutcome::Built {
            fingerprint,
            report,
        }
    }
}
