//! Guarded orchestration of remote filesystem operations.
//!
//! Every mutating operation checks remote state before and after the raw
//! transport call. A violated check returns one typed error and the sequence
//! stops; when the precondition fails the mutating call is never issued.
//! Transport failures pass through untouched.

use crate::domain::{AppError, ObjectKind, remote_path};
use crate::ports::RemoteFs;

/// Runs guarded operations against a connected remote filesystem.
pub struct Interactor<T: RemoteFs> {
    transport: T,
}

impl<T: RemoteFs> Interactor<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Hand the transport back to the caller, who owns its teardown.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Delete the object of `kind` at `path`.
    ///
    /// Fails with [`AppError::ObjectNotFound`] when nothing is there to
    /// delete, and with [`AppError::ObjectStillExists`] when the object
    /// survives the removal.
    pub fn delete(&self, path: &str, kind: ObjectKind) -> Result<(), AppError> {
        if !self.transport.exists(path, kind)? {
            return Err(AppError::ObjectNotFound(path.to_string()));
        }
        self.transport.remove(path, kind)?;
        if self.transport.exists(path, kind)? {
            return Err(AppError::ObjectStillExists(path.to_string()));
        }
        Ok(())
    }

    /// Copy a local file to `remote_path` on the server.
    ///
    /// The destination must be vacant beforehand and occupied afterwards.
    pub fn upload(
        &self,
        local_path: &str,
        remote_path: &str,
        base_remote_path: &str,
    ) -> Result<(), AppError> {
        // TODO: confirm whether these two probes should use
        // ObjectKind::File; a file upload is verified with the dir kind.
        if self.transport.exists(remote_path, ObjectKind::Dir)? {
            return Err(AppError::ObjectStillExists(remote_path.to_string()));
        }
        self.transport.upload(local_path, remote_path, base_remote_path)?;
        if !self.transport.exists(remote_path, ObjectKind::Dir)? {
            return Err(AppError::ObjectNotFound(remote_path.to_string()));
        }
        Ok(())
    }

    /// List the entry names of the directory at `dir_path`, verbatim.
    pub fn list_dir(&self, dir_path: &str) -> Result<Vec<String>, AppError> {
        if !self.transport.exists(dir_path, ObjectKind::Dir)? {
            return Err(AppError::ObjectNotFound(dir_path.to_string()));
        }
        self.transport.list_dir(dir_path)
    }

    /// Link `object_name` from under `base_server_path` into `link_dir`
    /// with a relative symlink.
    pub fn link_relative(
        &self,
        base_server_path: &str,
        object_name: &str,
        link_dir: &str,
    ) -> Result<(), AppError> {
        let target = remote_path::join(base_server_path, object_name);
        let new_link = remote_path::join(link_dir, object_name);
        let offset = remote_path::relative_to(&target, link_dir);

        self.check_link_preconditions(&target, &new_link)?;
        self.transport.symlink_relative(&target, link_dir, &offset)?;
        self.check_link_postcondition(&new_link)
    }

    /// Link `object_name` from under `base_server_path` into `link_dir`
    /// with an absolute symlink.
    pub fn link_absolute(
        &self,
        base_server_path: &str,
        object_name: &str,
        link_dir: &str,
    ) -> Result<(), AppError> {
        let target = remote_path::join(base_server_path, object_name);
        let new_link = remote_path::join(link_dir, object_name);

        self.check_link_preconditions(&target, &new_link)?;
        self.transport.symlink_absolute(&target, link_dir)?;
        self.check_link_postcondition(&new_link)
    }

    /// The link target must exist and the link location must be vacant.
    fn check_link_preconditions(&self, target: &str, new_link: &str) -> Result<(), AppError> {
        if !self.transport.exists(target, ObjectKind::Dir)? {
            return Err(AppError::ObjectNotFound(target.to_string()));
        }
        if self.transport.exists(new_link, ObjectKind::Link)? {
            return Err(AppError::ObjectStillExists(new_link.to_string()));
        }
        Ok(())
    }

    /// A fresh link must resolve to a directory at its own path.
    fn check_link_postcondition(&self, new_link: &str) -> Result<(), AppError> {
        if !self.transport.exists(new_link, ObjectKind::Dir)? {
            return Err(AppError::ObjectNotFound(new_link.to_string()));
        }
        Ok(())
    }
}
