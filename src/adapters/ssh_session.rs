//! SSH-backed implementation of the `RemoteFs` port.
//!
//! One authenticated libssh2 session per adapter. SFTP carries the
//! stat/remove/list/symlink operations; uploads go over SCP. The session is
//! opened with [`SshRemoteFs::connect`] and torn down with
//! [`SshRemoteFs::disconnect`]; operations on one session must not be
//! issued concurrently.

use std::fs::File;
use std::io::{Read, Write};
use std::net::TcpStream;
use std::path::{Path, PathBuf};

use ssh2::{ErrorCode, Session, Sftp};

use crate::domain::{AppError, ConnectParams, ObjectKind, remote_path};
use crate::ports::RemoteFs;

// SSH_FX_NO_SUCH_FILE in the SFTP status codes.
const NO_SUCH_FILE: i32 = 2;

const COPY_CHUNK: usize = 16 * 1024;

/// Remote filesystem reached through an authenticated SSH session.
pub struct SshRemoteFs {
    session: Session,
    sftp: Sftp,
}

impl SshRemoteFs {
    /// Open a TCP connection, run the SSH handshake, and authenticate
    /// with a password.
    pub fn connect(params: &ConnectParams) -> Result<Self, AppError> {
        let stream = TcpStream::connect((params.host.as_str(), params.port))?;
        let mut session = Session::new()?;
        session.set_tcp_stream(stream);
        session.handshake()?;
        session.userauth_password(&params.username, &params.password)?;
        let sftp = session.sftp()?;
        Ok(Self { session, sftp })
    }

    /// Close the session. The adapter is consumed; a new `connect` is
    /// needed for further work.
    pub fn disconnect(self) -> Result<(), AppError> {
        self.session.disconnect(None, "closing", None)?;
        Ok(())
    }

    /// Where a link for `target` lands inside `link_dir`.
    fn link_location(&self, target: &str, link_dir: &str) -> Result<PathBuf, AppError> {
        let name = Path::new(target)
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidPath(target.to_string()))?;
        Ok(PathBuf::from(remote_path::join(link_dir, name)))
    }
}

impl RemoteFs for SshRemoteFs {
    fn exists(&self, path: &str, kind: ObjectKind) -> Result<bool, AppError> {
        let path = Path::new(path);
        let looked_up = match kind {
            // The probe must see the link itself, not what it points at.
            ObjectKind::Link => self.sftp.lstat(path),
            ObjectKind::File | ObjectKind::Dir => self.sftp.stat(path),
        };
        match looked_up {
            Ok(stat) => Ok(stat.perm.is_some_and(|mode| kind.matches_mode(mode))),
            Err(e) if matches!(e.code(), ErrorCode::SFTP(code) if code == NO_SUCH_FILE) => {
                Ok(false)
            }
            Err(e) => Err(AppError::from(e)),
        }
    }

    fn remove(&self, path: &str, kind: ObjectKind) -> Result<(), AppError> {
        let path = Path::new(path);
        match kind {
            ObjectKind::Dir => self.sftp.rmdir(path)?,
            ObjectKind::File | ObjectKind::Link => self.sftp.unlink(path)?,
        }
        Ok(())
    }

    fn upload(
        &self,
        local_path: &str,
        remote_path_str: &str,
        base_remote_path: &str,
    ) -> Result<(), AppError> {
        let destination = remote_path::join(base_remote_path, remote_path_str);
        let mut local = File::open(local_path)?;
        let size = local.metadata()?.len();

        let mut channel = self.session.scp_send(Path::new(&destination), 0o644, size, None)?;
        let mut buffer = [0u8; COPY_CHUNK];
        loop {
            let read = local.read(&mut buffer)?;
            if read == 0 {
                break;
            }
            channel.write_all(&buffer[..read])?;
        }
        channel.send_eof()?;
        channel.wait_eof()?;
        channel.close()?;
        channel.wait_close()?;
        Ok(())
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError> {
        let entries = self.sftp.readdir(Path::new(path))?;
        let mut names = Vec::with_capacity(entries.len());
        for (entry, _stat) in entries {
            let name = entry
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| AppError::InvalidPath(entry.display().to_string()))?;
            names.push(name.to_string());
        }
        Ok(names)
    }

    fn symlink_relative(
        &self,
        target: &str,
        link_dir: &str,
        relative_target: &str,
    ) -> Result<(), AppError> {
        let location = self.link_location(target, link_dir)?;
        // ssh2's symlink creates the link at its second argument.
        self.sftp.symlink(Path::new(relative_target), &location)?;
        Ok(())
    }

    fn symlink_absolute(&self, target: &str, link_dir: &str) -> Result<(), AppError> {
        let location = self.link_location(target, link_dir)?;
        self.sftp.symlink(Path::new(target), &location)?;
        Ok(())
    }
}
