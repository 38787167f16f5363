//! File system helpers
//!
//! Path resolution, source tree scanning and copy/clear operations used by
//! the build pipeline and the compiler adapters.

mod copy;
mod paths;
mod scan;

pub use copy::{atomic_write, copy_path, recreate_dir};
pub use paths::{absolutize, ensure_parent, join_relative, trim_dir};
pub use scan::{content_fingerprint, scan_stamps};
