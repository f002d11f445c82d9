//! Run the stone-wrangler pipeline on a single image and print the detected
//! stone positions as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{info, LevelFilter};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use stone_wrangler::{StoneWrangler, StoneWranglerParams};
use stone_wrangler_core::{init_with_level, FieldCalibration, RgbFrame, WorldScale};

#[derive(Parser, Debug)]
#[command(name = "stone-wrangler", about = "Locate stones in a top-down field image")]
struct Args {
    /// Input image (any format the `image` crate decodes).
    image: PathBuf,

    /// JSON file overriding the pipeline parameters.
    #[arg(long)]
    params: Option<PathBuf>,

    /// JSON file overriding the calibration landmarks and world scale.
    #[arg(long)]
    calibration: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

/// Calibration landmarks as configuration: four frame-space pixels and the
/// four matching world-space positions, plus the bird's-eye scale.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct CalibrationConfig {
    frame_points: [[f32; 2]; 4],
    world_points: [[f32; 2]; 4],
    #[serde(default)]
    scale: WorldScale,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            frame_points: [
                [629.0, 413.0],
                [935.0, 412.0],
                [1067.0, 228.0],
                [635.0, 228.0],
            ],
            world_points: [[0.0, 33.0], [8.5, 33.0], [8.5, 22.0], [0.0, 22.0]],
            scale: WorldScale::default(),
        }
    }
}

impl CalibrationConfig {
    fn build(&self) -> Result<FieldCalibration, CliError> {
        let frame: Vec<Point2<f32>> = self
            .frame_points
            .iter()
            .map(|p| Point2::new(p[0], p[1]))
            .collect();
        let world: Vec<Point2<f32>> = self
            .world_points
            .iter()
            .map(|p| Point2::new(p[0], p[1]))
            .collect();
        Ok(FieldCalibration::new(&frame, &world, self.scale)?)
    }
}

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error(transparent)]
    Calibration(#[from] stone_wrangler_core::CalibrationError),
    #[error(transparent)]
    Frame(#[from] stone_wrangler_core::FrameError),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

fn load_json<T: for<'de> Deserialize<'de>>(path: &PathBuf) -> Result<T, CliError> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.clone(),
        source,
    })
}

fn run(args: &Args) -> Result<(), CliError> {
    let calibration_cfg = match &args.calibration {
        Some(path) => load_json::<CalibrationConfig>(path)?,
        None => CalibrationConfig::default(),
    };
    let params = match &args.params {
        Some(path) => load_json::<StoneWranglerParams>(path)?,
        None => StoneWranglerParams::default(),
    };

    let wrangler = StoneWrangler::new(calibration_cfg.build()?, params);

    let rgb = image::ImageReader::open(&args.image)
        .map_err(|source| CliError::Read {
            path: args.image.clone(),
            source,
        })?
        .decode()?
        .to_rgb8();
    let frame = RgbFrame::from_raw(
        rgb.width() as usize,
        rgb.height() as usize,
        rgb.into_raw(),
    )?;

    let positions = wrangler.analyze(&frame.view())?;
    info!("{} stone(s) detected", positions.len());

    let json = serde_json::to_string_pretty(&positions)?;
    println!("{json}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = init_with_level(level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
