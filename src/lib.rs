//! ferry: guarded file operations on a remote server over SSH.
//!
//! Each mutating operation is bracketed by existence checks: the
//! precondition must hold before the raw transport call is issued, and the
//! postcondition is verified afterwards. Violated checks surface as
//! [`AppError::ObjectNotFound`] or [`AppError::ObjectStillExists`];
//! transport failures propagate as-is.
//!
//! The transport is a port ([`RemoteFs`]); [`adapters::SshRemoteFs`] realizes
//! it over a libssh2 session. Sessions are opened and closed explicitly by
//! the caller and bracket a sequence of operations.

pub mod adapters;
pub mod domain;
pub mod interactor;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{AppError, Config, ConnectParams, ObjectKind, ServerConfig};
pub use interactor::Interactor;
pub use ports::RemoteFs;
