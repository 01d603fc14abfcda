use crate::types::LogLevel;
use clap::Parser;

#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file listing the cities to load (defaults to ./bikeshare.toml)
    #[arg(long)]
    pub config: Option<String>,

    /// Directory that relative city paths are resolved against
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log file; the terminal is reserved for the explorer itself
    #[arg(long, default_value = "bikeshare.log")]
    pub log_file: String,
}
