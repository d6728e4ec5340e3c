mod serve;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use compdir_core::{config, db, render};

#[derive(Parser)]
#[command(name = "compdir", version, about = "Company directory page service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the database and print the rendered HTML page to stdout
    Render {
        /// Path to the TOML config file
        #[arg(long, default_value = "compdir.toml")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to the TOML config file
        #[arg(long, default_value = "compdir.toml")]
        config: PathBuf,
        /// Port to listen on (overrides the config file)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Configuration helpers
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print a skeleton config file to stdout
    Init,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { config } => {
            cmd_render(&config);
        }
        Commands::Serve { config, port } => {
            let directory_config = load_config_or_exit(&config);
            let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
            if let Err(e) = rt.block_on(serve::start_server(directory_config, port)) {
                eprintln!("Server error: {}", e);
                process::exit(1);
            }
        }
        Commands::Config {
            command: ConfigCommands::Init,
        } => {
            print!("{}", config::generate_config_template());
        }
    }
}

/// `compdir render`: one connection, one query, one page on stdout.
///
/// Any failure is printed to stderr before exit; nothing partial reaches
/// stdout.
fn cmd_render(config_path: &Path) {
    let config = load_config_or_exit(config_path);

    let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
    match rt.block_on(db::load_companies(&config.database)) {
        Ok(records) => {
            print!("{}", render::render_page(&records));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn load_config_or_exit(path: &Path) -> config::DirectoryConfig {
    match config::read_config(path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
