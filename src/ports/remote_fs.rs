//! Raw operations against the remote filesystem.
//!
//! This port is the only seam between the orchestration layer and the
//! remote side. Implementations perform single transport calls with no
//! atomicity or recovery guarantees; all pre/post state checks belong to
//! the caller.

use crate::domain::{AppError, ObjectKind};

/// Port for raw remote filesystem operations over an open session.
pub trait RemoteFs {
    /// Check whether an object of the given kind exists at `path`.
    ///
    /// Returns `Ok(false)` only when the remote reports no such object;
    /// any other transport failure surfaces as an error.
    fn exists(&self, path: &str, kind: ObjectKind) -> Result<bool, AppError>;

    /// Remove the object of the given kind at `path`.
    fn remove(&self, path: &str, kind: ObjectKind) -> Result<(), AppError>;

    /// Copy a local file to `remote_path`. A relative `remote_path` is
    /// resolved against `base_remote_path`.
    fn upload(
        &self,
        local_path: &str,
        remote_path: &str,
        base_remote_path: &str,
    ) -> Result<(), AppError>;

    /// List the entry names of the directory at `path`.
    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError>;

    /// Create a symlink in `link_dir`, named after `target`'s final
    /// component, whose contents are the `relative_target` offset.
    fn symlink_relative(
        &self,
        target: &str,
        link_dir: &str,
        relative_target: &str,
    ) -> Result<(), AppError>;

    /// Create a symlink in `link_dir`, named after `target`'s final
    /// component, pointing at the absolute `target`.
    fn symlink_absolute(&self, target: &str, link_dir: &str) -> Result<(), AppError>;
}
