use clap::{Parser, Subcommand};
use serde::Serialize;
use spincube_common::AppConfig;
use spincube_cube::{Cube, render_frame};
use spincube_render::{DrawCall, RecordingSurface};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spincube-cli", about = "Headless spinning cube")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version, crate info and the default config
    Info,
    /// Render frames headlessly and print every draw call
    Frames {
        /// Number of frames to render
        #[arg(short, long, default_value = "1")]
        count: u64,
        /// Starting rotation angle in radians (defaults to 45 degrees)
        #[arg(short, long)]
        angle: Option<f64>,
        /// Emit one JSON object per frame instead of text
        #[arg(long)]
        json: bool,
    },
}

/// One rendered frame as printed by `frames --json`.
#[derive(Serialize)]
struct FrameDump {
    frame: u64,
    /// Angle the frame was drawn at.
    angle: f64,
    calls: Vec<DrawCall>,
}

fn run_frames(
    config: &AppConfig,
    count: u64,
    angle: Option<f64>,
) -> anyhow::Result<Vec<FrameDump>> {
    let mut cube = match angle {
        Some(angle) => Cube::with_angle(config.cube.center, config.cube.side, angle),
        None => Cube::new(config.cube.center, config.cube.side),
    }
    .with_color(config.display.foreground);
    let mut surface = RecordingSurface::new(config.display.width, config.display.height);

    let mut dumps = Vec::new();
    for frame in 0..count {
        let angle = cube.angle();
        render_frame(&mut cube, &mut surface, config)?;
        dumps.push(FrameDump {
            frame,
            angle,
            calls: surface.take_calls(),
        });
    }
    tracing::debug!(
        frames = surface.frames_presented(),
        final_angle = cube.angle(),
        "headless run finished"
    );
    Ok(dumps)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::default();

    match cli.command {
        Commands::Info => {
            println!("spincube-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", spincube_common::crate_info());
            println!("cube: {}", spincube_cube::crate_info());
            println!("render: {}", spincube_render::crate_info());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Frames { count, angle, json } => {
            for dump in run_frames(&config, count, angle)? {
                if json {
                    println!("{}", serde_json::to_string(&dump)?);
                } else {
                    println!("=== frame {} (angle={:.6}) ===", dump.frame, dump.angle);
                    for call in &dump.calls {
                        println!("  {call}");
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn frames_record_fourteen_calls_each() {
        let dumps = run_frames(&AppConfig::default(), 3, None).unwrap();
        assert_eq!(dumps.len(), 3);
        for dump in &dumps {
            assert_eq!(dump.calls.len(), 14);
        }
        assert_eq!(dumps[0].angle, FRAC_PI_4);
        assert!((dumps[2].angle - (FRAC_PI_4 + 0.002)).abs() < 1e-12);
    }

    #[test]
    fn explicit_angle_is_used() {
        let dumps = run_frames(&AppConfig::default(), 1, Some(0.0)).unwrap();
        let DrawCall::Line { start, end, .. } = dumps[0].calls[1] else {
            panic!("expected a line after clear");
        };
        // Unrotated front edge of a 200px cube centered at (400, 400).
        assert_eq!(start.to_array(), [300.0, 300.0]);
        assert_eq!(end.to_array(), [500.0, 300.0]);
    }

    #[test]
    fn zero_frames_is_empty() {
        assert!(run_frames(&AppConfig::default(), 0, None).unwrap().is_empty());
    }

    #[test]
    fn dump_serializes_to_json() {
        let dumps = run_frames(&AppConfig::default(), 1, None).unwrap();
        let json = serde_json::to_value(&dumps[0]).unwrap();
        assert_eq!(json["frame"], 0);
        assert_eq!(json["calls"].as_array().unwrap().len(), 14);
        assert_eq!(json["calls"][13], "Present");
    }
}
