//! Remote execution over pooled SSH sessions
//!
//! One OpenSSH control-master connection per [`SessionKey`]; commands and
//! uploads reuse it through the control socket. Processes are started via
//! the `CommandRunner` port.

mod pool;
mod session;

pub use pool::SessionPool;
pub use session::{RemoteError, RemoteOutput, RemoteResult, SessionKey, DEFAULT_SSH_PORT};
