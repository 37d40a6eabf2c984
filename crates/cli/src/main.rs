#![deny(unsafe_code)]
//! CLI binary for the wave-line background.
//!
//! Subcommands:
//! - `render` — evaluate one frame on the CPU and write a PNG
//! - `info` — print the pipeline wire contract and the line table

mod error;

use clap::{Parser, Subcommand};
use error::CliError;
use std::path::PathBuf;
use std::process;
use wavelines_core::waves::{LineSpec, LINE_COUNT};
use wavelines_core::{shaders, snapshot, Srgb, Viewport};

#[derive(Parser)]
#[command(name = "wavelines", about = "Animated wave-line background toolkit")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate one frame on the CPU and write a PNG snapshot.
    Render {
        /// Logical viewport width in CSS pixels.
        #[arg(short = 'W', long, default_value_t = 800.0)]
        width: f64,

        /// Logical viewport height in CSS pixels.
        #[arg(short = 'H', long, default_value_t = 600.0)]
        height: f64,

        /// Device pixel ratio; the PNG uses the scaled backing size.
        #[arg(long, default_value_t = 1.0)]
        dpr: f64,

        /// Animation time in seconds.
        #[arg(short, long, default_value_t = 0.0)]
        time: f32,

        /// Output file path.
        #[arg(short, long, default_value = "background.png")]
        output: PathBuf,
    },
    /// Print the uniform/attribute wire contract and the line table.
    Info,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render {
            width,
            height,
            dpr,
            time,
            output,
        } => {
            if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
                return Err(CliError::Input(
                    "width and height must be finite and positive".into(),
                ));
            }
            if !dpr.is_finite() || dpr <= 0.0 {
                return Err(CliError::Input("dpr must be finite and positive".into()));
            }
            if !time.is_finite() {
                return Err(CliError::Input("time must be finite".into()));
            }

            let viewport = Viewport::new(width, height, dpr);
            let backing = viewport.backing();
            snapshot::write_png(backing.width, backing.height, time, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "logical": { "width": width, "height": height },
                    "dpr": dpr,
                    "backing": { "width": backing.width, "height": backing.height },
                    "time": time,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {width}x{height} at dpr {dpr} ({}x{} px) t={time}s -> {}",
                    backing.width,
                    backing.height,
                    output.display()
                );
            }
        }
        Command::Info => {
            let lines: Vec<(usize, LineSpec)> =
                (0..LINE_COUNT).map(|i| (i, LineSpec::for_index(i))).collect();

            if cli.json {
                let rows: Vec<serde_json::Value> = lines
                    .iter()
                    .map(|(i, line)| {
                        serde_json::json!({
                            "index": i,
                            "speed": line.speed,
                            "frequency": line.frequency,
                            "tint": Srgb::from(line.tint),
                        })
                    })
                    .collect();
                let info = serde_json::json!({
                    "uniforms": {
                        (shaders::UNIFORM_RESOLUTION): "vec2, backing resolution in device pixels",
                        (shaders::UNIFORM_TIME): "float, seconds since construction",
                    },
                    "attributes": {
                        (shaders::ATTRIB_POSITION): "vec2, quad corners, triangle strip",
                    },
                    "lines": rows,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Uniforms:");
                println!(
                    "  {} (vec2)   backing resolution in device pixels",
                    shaders::UNIFORM_RESOLUTION
                );
                println!(
                    "  {} (float)  seconds since construction",
                    shaders::UNIFORM_TIME
                );
                println!("Attributes:");
                println!(
                    "  {} (vec2)   quad corners, triangle strip",
                    shaders::ATTRIB_POSITION
                );
                println!("Lines:");
                for (i, line) in &lines {
                    println!(
                        "  {i}: speed {:.2}  frequency {:.2}  tint {}",
                        line.speed,
                        line.frequency,
                        Srgb::from(line.tint).to_hex()
                    );
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
