//! Render the laliAx logo to a PNG file.
//!
//! ```sh
//! cargo run --bin logo
//! cargo run --bin logo -- -o logo.png --dpi 150 --svg logo.svg --show
//! ```

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use pitchkit::logo::{Crop, LOGO_OUTPUT_PATH, RasterOptions, laliax_logo, save_png, show};

/// Render the laliAx logo
#[derive(Parser, Debug)]
#[command(
    name = "logo",
    about = "Render the laliAx logo to a PNG image",
    version
)]
struct Args {
    /// Output PNG file
    #[arg(short, long, value_name = "OUTPUT", default_value = LOGO_OUTPUT_PATH)]
    output: PathBuf,

    /// Output resolution in dots per inch
    #[arg(long, default_value_t = 300)]
    dpi: u32,

    /// Keep the whole figure instead of cropping to the drawing
    #[arg(long)]
    no_crop: bool,

    /// Extra font file for the label (can be repeated)
    #[arg(long = "font", value_name = "FILE")]
    fonts: Vec<PathBuf>,

    /// Only use the fonts given with --font
    #[arg(long)]
    no_system_fonts: bool,

    /// Also write the intermediate SVG document
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Open the written image in the platform viewer
    #[arg(long)]
    show: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut options = RasterOptions::default()
        .with_dpi(args.dpi)
        .with_system_fonts(!args.no_system_fonts);
    if args.no_crop {
        options = options.with_crop(Crop::None);
    }
    for font in &args.fonts {
        options = options.with_font_file(font);
    }

    let logo = laliax_logo();

    if let Some(svg_path) = &args.svg {
        fs::write(svg_path, logo.to_svg(&options.figure)?)?;
        info!("wrote {}", svg_path.display());
    }

    save_png(&logo, &args.output, &options)?;

    if args.show {
        show(&args.output)?;
    }
    Ok(())
}
