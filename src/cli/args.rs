use crate::utils::constants::DEFAULT_SETTINGS_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geolocation-plotter")]
#[command(about = "Decode packed geolocation fields from a delimited table and plot them")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, default_value = DEFAULT_SETTINGS_FILE, help = "JSON settings file")]
    pub settings: PathBuf,

    #[arg(short, long, help = "Only log at info level and above")]
    pub quiet: bool,
}

impl Cli {
    /// Default log level when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "info"
        } else {
            "debug"
        }
    }
}
