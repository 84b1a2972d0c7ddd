//! Flight path inspection.
//!
//! Generates trajectories exactly as the swarm would and prints them,
//! which is handy for eyeballing curve variety and safe-zone bounds.

use anyhow::{bail, Result};
use clap::Args;
use wingbeat_core::Viewport;
use wingbeat_flight::{path, Direction, FlightConfig, FlightRng};

#[derive(Args)]
pub struct PathsArgs {
    /// How many paths to generate
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720.0)]
    pub height: f32,

    /// RNG seed
    #[arg(long, default_value_t = 7)]
    pub seed: u32,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

pub fn run(args: PathsArgs) -> Result<()> {
    let config = FlightConfig::default();
    let viewport = Viewport::new(args.width, args.height);
    let mut rng = FlightRng::new(args.seed);

    let generated: Vec<_> = (0..args.count)
        .map(|_| path::generate(&config, viewport, &mut rng))
        .collect();

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&generated)?),
        "text" => {
            for (i, p) in generated.iter().enumerate() {
                let arrow = match p.direction {
                    Direction::LeftToRight => "->",
                    Direction::RightToLeft => "<-",
                };
                println!(
                    "{i:3} {arrow} start ({:7.1}, {:6.1})  cp1 ({:7.1}, {:6.1})  cp2 ({:7.1}, {:6.1})  end ({:7.1}, {:6.1})",
                    p.start.x, p.start.y, p.cp1.x, p.cp1.y, p.cp2.x, p.cp2.y, p.end.x, p.end.y
                );
            }
        }
        other => bail!("Unknown format: {other} (expected text or json)"),
    }
    Ok(())
}
