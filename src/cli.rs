use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "albumd",
    about = "Tiny in-memory album catalog served over HTTP",
    long_about = None,
    version,
)]
pub struct Args {
    /// Host or address to bind [default: localhost]
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// HTTP port to listen on [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to TOML config file (overrides default search: ./albumd.toml, ~/.config/albumd/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
