//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `compilers/` - one adapter per asset type, plus source map file rewriting
//! - `events/` - build event sinks (log, NDJSON)
//! - `fs/` - path resolution, tree scanning, copy and clear
//! - `lock` - the advisory build lock
//! - `process` - `CommandRunner` backed by `std::process`
//! - `remote/` - pooled SSH sessions
//! - `repositories/` - fingerprint stores

pub mod compilers;
pub mod events;
pub mod fs;
pub mod lock;
pub mod process;
pub mod remote;
pub mod repositories;

// Re-export for convenience
pub use compilers::{all_compilers, get_compiler, AssetCompiler, CompileContext};
pub use events::{JsonEventSink, LogEventSink};
pub use lock::{BuildLock, BuildLockGuard};
pub use process::SystemRunner;
pub use remote::{RemoteError, RemoteOutput, SessionKey, SessionPool};
pub use repositories::{FnFingerprintStore, MemoryFingerprintStore, TomlFingerprintStore};
