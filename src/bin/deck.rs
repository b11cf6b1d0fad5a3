//! Build the Humaniot Robotic Coder pitch deck.
//!
//! ```sh
//! cargo run --bin deck
//! cargo run --bin deck -- -o pitch.pptx --stamp
//! ```

use std::path::PathBuf;

use clap::Parser;
use pitchkit::deck::{DECK_OUTPUT_PATH, SaveOptions, humaniot_pitch};

/// Build the pitch deck
#[derive(Parser, Debug)]
#[command(
    name = "deck",
    about = "Build the Humaniot Robotic Coder pitch deck as a .pptx file",
    version
)]
struct Args {
    /// Output .pptx file
    #[arg(short, long, value_name = "OUTPUT", default_value = DECK_OUTPUT_PATH)]
    output: PathBuf,

    /// Record the current time as the created and modified dates
    ///
    /// Without it, repeated runs produce byte-identical files.
    #[arg(long)]
    stamp: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let options = if args.stamp {
        SaveOptions::stamped_now()
    } else {
        SaveOptions::default()
    };

    humaniot_pitch()?
        .with_save_options(options)
        .save(&args.output)?;
    Ok(())
}
