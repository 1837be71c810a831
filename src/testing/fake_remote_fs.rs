use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::{AppError, ObjectKind};
use crate::ports::RemoteFs;

/// A transport call observed by the scripted fake, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    Exists { path: String, kind: ObjectKind },
    Remove { path: String, kind: ObjectKind },
    Upload { local_path: String, remote_path: String, base_remote_path: String },
    ListDir { path: String },
    SymlinkRelative { target: String, link_dir: String, relative_target: String },
    SymlinkAbsolute { target: String, link_dir: String },
}

/// Scripted in-memory transport for interactor tests.
///
/// Existence probes consume queued answers (defaulting to `false` when the
/// queue runs dry); every call is recorded. Mutating calls always succeed,
/// which keeps state transitions under the test's control.
#[derive(Default)]
pub struct ScriptedRemoteFs {
    exists_answers: RefCell<VecDeque<bool>>,
    entries: RefCell<Vec<String>>,
    calls: RefCell<Vec<RemoteCall>>,
}

impl ScriptedRemoteFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answers the `exists` probes will receive, in order.
    pub fn with_exists<I: IntoIterator<Item = bool>>(self, answers: I) -> Self {
        self.exists_answers.borrow_mut().extend(answers);
        self
    }

    /// Set the listing every `list_dir` call returns.
    pub fn with_entries(self, entries: &[&str]) -> Self {
        *self.entries.borrow_mut() = entries.iter().map(|e| e.to_string()).collect();
        self
    }

    /// All calls observed so far.
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: RemoteCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl RemoteFs for ScriptedRemoteFs {
    fn exists(&self, path: &str, kind: ObjectKind) -> Result<bool, AppError> {
        self.record(RemoteCall::Exists { path: path.to_string(), kind });
        Ok(self.exists_answers.borrow_mut().pop_front().unwrap_or(false))
    }

    fn remove(&self, path: &str, kind: ObjectKind) -> Result<(), AppError> {
        self.record(RemoteCall::Remove { path: path.to_string(), kind });
        Ok(())
    }

    fn upload(
        &self,
        local_path: &str,
        remote_path: &str,
        base_remote_path: &str,
    ) -> Result<(), AppError> {
        self.record(RemoteCall::Upload {
            local_path: local_path.to_string(),
            remote_path: remote_path.to_string(),
            base_remote_path: base_remote_path.to_string(),
        });
        Ok(())
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError> {
        self.record(RemoteCall::ListDir { path: path.to_string() });
        Ok(self.entries.borrow().clone())
    }

    fn symlink_relative(
        &self,
        target: &str,
        link_dir: &str,
        relative_target: &str,
    ) -> Result<(), AppError> {
        self.record(RemoteCall::SymlinkRelative {
            target: target.to_string(),
            link_dir: link_dir.to_string(),
            relative_target: relative_target.to_string(),
        });
        Ok(())
    }

    fn symlink_absolute(&self, target: &str, link_dir: &str) -> Result<(), AppError> {
        self.record(RemoteCall::SymlinkAbsolute {
            target: target.to_string(),
            link_dir: link_dir.to_string(),
        });
        Ok(())
    }
}
