mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cloudphoto_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cloudphoto")]
#[command(about = "Photo album manager for S3-compatible object storage", long_about = None)]
struct Cli {
    /// Configuration file to use instead of the per-user default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Store credentials and create the bucket
    Init,

    /// List albums, or photos in one album
    List {
        /// Album whose photos should be listed
        #[arg(short, long)]
        album: Option<String>,
    },

    /// Upload photos from a local directory into an album
    Upload {
        /// Target album name
        #[arg(short, long)]
        album: String,

        /// Directory holding the photos
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    /// Download an album's photos into a local directory
    Download {
        /// Album to download
        #[arg(short, long)]
        album: String,

        /// Directory to download into
        #[arg(short, long, default_value = ".")]
        path: PathBuf,
    },

    /// Delete one photo, or a whole album
    Delete {
        /// Album to delete from
        #[arg(short, long)]
        album: String,

        /// Photo filename; the whole album is deleted when omitted
        #[arg(long)]
        photo: Option<String>,
    },

    /// Publish the albums as a static website and print its URL
    Mksite,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cloudphoto_cli=info,cloudphoto_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };

    match cli.command {
        Commands::Init => {
            commands::init::execute(&config_path).await?;
        }
        Commands::List { album } => {
            let config = Config::load_from(&config_path)?;
            commands::list::execute(&config, album).await?;
        }
        Commands::Upload { album, path } => {
            let config = Config::load_from(&config_path)?;
            commands::upload::execute(&config, album, path).await?;
        }
        Commands::Download { album, path } => {
            let config = Config::load_from(&config_path)?;
            commands::download::execute(&config, album, path).await?;
        }
        Commands::Delete { album, photo } => {
            let config = Config::load_from(&config_path)?;
            commands::delete::execute(&config, album, photo).await?;
        }
        Commands::Mksite => {
            let config = Config::load_from(&config_path)?;
            commands::mksite::execute(&config).await?;
        }
    }

    Ok(())
}
