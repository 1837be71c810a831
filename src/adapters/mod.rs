pub mod ssh_session;

pub use ssh_session::SshRemoteFs;
