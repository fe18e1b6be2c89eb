use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the yaml config file
    #[arg(long, default_value = "config/config.yaml")]
    pub config_path: PathBuf,
}

impl Args {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
