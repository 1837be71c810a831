pub mod fake_remote_fs;

#[allow(unused_imports)]
pub use fake_remote_fs::RemoteCall;
#[allow(unused_imports)]
pub use fake_remote_fs::ScriptedRemoteFs;
