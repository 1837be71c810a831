mod remote_fs;

pub use remote_fs::RemoteFs;
