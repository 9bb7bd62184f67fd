//! API server configuration.

use std::path::PathBuf;

use clap::Parser;

/// Environment variable selecting the store location when no flag is given.
pub const DATA_DIR_ENV: &str = "STARCAT_DATA_DIR";

/// starcat API command line arguments.
#[derive(Debug, Parser)]
#[command(name = "starcat-api")]
#[command(about = "HTTP/REST API for the starcat data catalog")]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Directory for the catalog store. Falls back to $STARCAT_DATA_DIR,
    /// then to ./starcat.db.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Directory holding the catalog store.
    pub data_dir: PathBuf,
}

impl From<&Args> for ApiConfig {
    fn from(args: &Args) -> Self {
        let data_dir = args
            .data_dir
            .clone()
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("starcat.db"));

        Self {
            listen_addr: args.listen.clone(),
            data_dir,
        }
    }
}
