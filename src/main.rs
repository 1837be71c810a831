use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ferry::adapters::SshRemoteFs;
use ferry::domain::{AppError, Config, ObjectKind, load_config_file};
use ferry::interactor::Interactor;

#[derive(Parser)]
#[command(name = "ferry")]
#[command(version)]
#[command(
    about = "Guarded file operations on a remote server over SSH",
    long_about = None
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "ferry.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a local file to the server
    Up {
        /// Local file to send
        local: String,
        /// Destination path on the server
        remote: String,
    },
    /// Delete an object on the server
    Rm {
        /// Server path of the object
        path: String,
        /// Object kind: file, dir, or link
        #[arg(short, long, default_value = "file")]
        kind: String,
    },
    /// List the contents of a server directory
    Ls {
        /// Server directory to list
        path: String,
    },
    /// Link an object from the server base into the link area
    Ln {
        /// Name of the object under the server base path
        name: String,
        /// Create an absolute link instead of a relative one
        #[arg(long)]
        absolute: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config_file(&cli.config)?;

    let transport = SshRemoteFs::connect(&config.connection)?;
    let interactor = Interactor::new(transport);

    let outcome = dispatch(&interactor, &config, cli.command);

    // The session closes whether or not the operation went through.
    let teardown = interactor.into_transport().disconnect();
    outcome?;
    teardown
}

fn dispatch(
    interactor: &Interactor<SshRemoteFs>,
    config: &Config,
    command: Commands,
) -> Result<(), AppError> {
    match command {
        Commands::Up { local, remote } => {
            interactor.upload(&local, &remote, &config.server.base_server_path)?;
            println!("Uploaded {} to {}", local, remote);
            Ok(())
        }
        Commands::Rm { path, kind } => {
            let kind = ObjectKind::from_cli_name(&kind).ok_or_else(|| {
                AppError::config_error(format!(
                    "Unknown object kind '{kind}': expected file, dir, or link"
                ))
            })?;
            interactor.delete(&path, kind)?;
            println!("Deleted {}", path);
            Ok(())
        }
        Commands::Ls { path } => {
            for entry in interactor.list_dir(&path)? {
                println!("{}", entry);
            }
            Ok(())
        }
        Commands::Ln { name, absolute } => {
            let server = &config.server;
            if absolute {
                interactor.link_absolute(&server.base_server_path, &name, &server.link_base_path)?;
            } else {
                interactor.link_relative(&server.base_server_path, &name, &server.link_base_path)?;
            }
            println!("Linked {} into {}", name, server.link_base_path);
            Ok(())
        }
    }
}
