pub mod release;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "compose-release")]
#[command(about = "Build and push versioned container images through the Docker Compose CLI", long_about = None)]
pub struct Cli {
    /// Version tag to release (e.g. 2.3.1). After a successful release the
    /// same images are rebuilt and pushed again as "latest".
    pub version: String,
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        release::run(&self.version)
    }
}
