use std::fs;
use std::path::{Path, PathBuf};

use chromapick_cli::{format_info, format_sample, parse_point};
use chromapick_core::decoders::{self, is_supported_extension};
use chromapick_core::{sample, ClickPoint, SampledColor};
use clap::{Parser, Subcommand};
use log::debug;
use rayon::prelude::*;

#[derive(Parser)]
#[command(name = "chromapick")]
#[command(version, about = "Pixel color inspector for raster images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sample the color at one or more clicked points
    Pick {
        /// Input image file
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Display-space point to sample, repeatable
        #[arg(short, long = "point", value_name = "X,Y", required = true)]
        points: Vec<String>,

        /// Override the EXIF orientation code embedded in the file
        #[arg(long, value_name = "CODE")]
        orientation: Option<u32>,

        /// Emit a JSON array instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show image dimensions, channel layout and orientation
    Info {
        /// Input image file
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pick {
            input,
            points,
            orientation,
            json,
        } => cmd_pick(input, points, orientation, json),
        Commands::Info { input } => cmd_info(input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_pick(
    input: PathBuf,
    points: Vec<String>,
    orientation: Option<u32>,
    json: bool,
) -> Result<(), String> {
    check_extension(&input)?;

    let clicks = points
        .iter()
        .map(|p| parse_point(p))
        .collect::<Result<Vec<ClickPoint>, String>>()?;

    let mut image = decoders::decode_file(&input).map_err(|e| e.to_string())?;
    debug!(
        "decoded {}: {}x{} {:?}, exif orientation {:?}",
        input.display(),
        image.width,
        image.height,
        image.layout,
        image.orientation_code
    );
    if orientation.is_some() {
        image.orientation_code = orientation;
    }

    // Each sample is a pure function of the decoded buffer and one click, so
    // the points can be served in parallel
    let samples = clicks
        .par_iter()
        .map(|&click| sample(&image, click).map_err(|e| e.to_string()))
        .collect::<Result<Vec<SampledColor>, String>>()?;

    if json {
        let out =
            serde_json::to_string_pretty(&samples).map_err(|e| format!("JSON error: {}", e))?;
        println!("{}", out);
    } else {
        for sampled in &samples {
            println!("{}", format_sample(sampled));
        }
    }

    Ok(())
}

fn cmd_info(input: PathBuf) -> Result<(), String> {
    check_extension(&input)?;

    let file_size = fs::metadata(&input)
        .map_err(|e| format!("Failed to read {}: {}", input.display(), e))?
        .len();
    let image = decoders::decode_file(&input).map_err(|e| e.to_string())?;

    println!("{}", format_info(&image, file_size));
    Ok(())
}

fn check_extension(input: &Path) -> Result<(), String> {
    let name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("Invalid input path: {}", input.display()))?;
    if !is_supported_extension(name) {
        return Err(format!(
            "Unsupported file type: {} (expected one of: {})",
            name,
            decoders::SUPPORTED_EXTENSIONS.join(", ")
        ));
    }
    Ok(())
}
