//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Generate the OUI vendor lookup table from the IEEE MA-L registry.
#[derive(Parser, Debug)]
#[command(name = "generate_oui")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// JSON file to write.
    pub output_file: PathBuf,

    /// Local copy of oui.csv; skips the download.
    pub oui_csv: Option<PathBuf>,
}
