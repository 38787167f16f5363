//! Compiler adapters
//!
//! One adapter per asset type. Each turns a validated [`AssetTask`] into at
//! most one external process per source file, run through the
//! [`CommandRunner`] port, and rewrites the generated source map when one
//! was requested.

mod copy;
mod less;
mod map;
mod rollup;
mod sass;
mod uglifyjs;

pub use copy::CopyCompiler;
pub use less::LessCompiler;
pub use map::{rewrite_json_map, rewrite_text_map};
pub use rollup::RollupCompiler;
pub use sass::SassCompiler;
pub use uglifyjs::UglifyJsCompiler;

use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetTask, AssetType};
use crate::domain::ports::{CommandRunner, Invocation, ProcessOutput};
use crate::domain::services::SourceUris;
use crate::error::{AssetsError, AssetsResult};
use crate::infrastructure::fs::{ensure_parent, join_relative};

/// Default `PATH` for compiler processes
pub const DEFAULT_SYSTEM_BIN_PATH: &str = "/usr/bin:/bin";

/// Everything an adapter needs besides the task itself
pub struct CompileContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub source_root: &'a Path,
    pub destination_root: &'a Path,
    pub system_bin_path: &'a str,
    pub uris: &'a SourceUris,
    pub want_source_map: bool,
}

impl CompileContext<'_> {
    /// `npx <tool>` with the configured `PATH`, run from the source root
    pub fn npx(&self, tool: &str) -> Invocation {
        Invocation::new("npx")
            .arg(tool)
            .env("PATH", self.system_bin_path)
            .current_dir(self.source_root)
    }

    /// Absolute path of a manifest source file
    pub fn source_path(&self, file: &str) -> PathBuf {
        self.source_root.join(file)
    }

    /// Absolute output path for a destination, with its parent created
    pub fn output_path(&self, destination: &str) -> AssetsResult<PathBuf> {
        let path = join_relative(self.destination_root, destination, destination)?;
        ensure_parent(&path)?;
        Ok(path)
    }

    /// Run a compiler; a non-zero exit becomes [`AssetsError::Compile`]
    pub fn execute(
        &self,
        asset_type: AssetType,
        destination: &str,
        invocation: &Invocation,
    ) -> AssetsResult<ProcessOutput> {
        let output = self
            .runner
            .run(invocation)
            .map_err(|source| AssetsError::Spawn {
                command: invocation.command_line(),
                source,
            })?;

        if !output.success {
            return Err(AssetsError::Compile {
                asset: asset_type.to_string(),
                destination: destination.to_string(),
                command: invocation.command_line(),
                output: output.output,
            });
        }
        Ok(output)
    }
}

/// Builds one kind of asset
pub trait AssetCompiler: Send + Sync {
    fn asset_type(&self) -> AssetType;

    fn compile(&self, ctx: &CompileContext<'_>, destination: &str, task: &AssetTask)
        -> AssetsResult<()>;
}

/// Get all available compilers
pub fn all_compilers() -> Vec<Box<dyn AssetCompiler>> {
    vec![
        Box::new(CopyCompiler),
        Box::new(LessCompiler),
        Box::new(SassCompiler),
        Box::new(UglifyJsCompiler),
        Box::new(RollupCompiler),
    ]
}

/// Get the compiler for an asset type
pub fn get_compiler(asset_type: AssetType) -> Box<dyn AssetCompiler> {
    match asset_type {
        AssetType::Copy => Box::new(CopyCompiler),
        AssetType::Less => Box::new(LessCompiler),
        AssetType::Sass => Box::new(SassCompiler),
        AssetType::UglifyJs => Box::new(UglifyJsCompiler),
        AssetType::Rollup => Box::new(RollupCompiler),
    }
}

/// `app.css` -> `app.css.map`
fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    name.into()
}

fn mismatched(asset_type: AssetType, destination: &str, task: &AssetTask) -> AssetsError {
    AssetsError::config(
        destination,
        format!(
            "{} compiler cannot build a {} task",
            asset_type,
            task.asset_type()
        ),
    )
}
