pub mod config;
pub mod error;
pub mod object_kind;
pub mod remote_path;

pub use config::{Config, ConnectParams, ServerConfig, load_config_file, parse_config_content};
pub use error::AppError;
pub use object_kind::ObjectKind;
