//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod command_runner;
pub mod fingerprint_store;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use command_runner::{shell_quote, CommandRunner, Invocation, ProcessOutput};
pub use fingerprint_store::{FingerprintStore, StoreError, StoreResult};
