//! Headless simulation of the flight system.
//!
//! Steps the loop at a fixed logical frame rate (or in real time with
//! `--realtime`), fires scripted UI events at their timestamps, and
//! reports swarm activity.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde_json::json;
use wingbeat_core::{ButterflyId, Viewport};
use wingbeat_flight::{FlightConfig, FlightSystem, Overlay, Placement, Visual};
use wingbeat_runtime::{GameClock, RuntimeSystem, UiEvent};

#[derive(Args)]
pub struct SimulateArgs {
    /// How long to simulate, in seconds
    #[arg(long, default_value_t = 12.0)]
    pub seconds: f64,

    /// Logical frame rate
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 720.0)]
    pub height: f32,

    /// RNG seed (same seed replays the same swarm)
    #[arg(long, default_value_t = 7)]
    pub seed: u32,

    /// Disable all spawning (accessibility preference)
    #[arg(long)]
    pub reduced_motion: bool,

    /// Path to a TOML file with a [flight] table of overrides
    #[arg(long)]
    pub config: Option<String>,

    /// Scripted UI event as `seconds:kind`, e.g. `3.0:accepted`.
    /// Kinds: began, memory_opened, reason_revealed, declined, accepted
    #[arg(long = "event")]
    pub events: Vec<String>,

    /// Print overlay node creation/removal as it happens
    #[arg(long)]
    pub trace: bool,

    /// Step with the wall clock instead of logical frames
    #[arg(long)]
    pub realtime: bool,

    /// Output format for the final summary (text or json)
    #[arg(long, default_value = "text")]
    pub format: String,
}

/// Overlay that logs node lifecycle to stdout
struct TraceOverlay {
    enabled: bool,
}

impl Overlay for TraceOverlay {
    fn insert(&mut self, id: ButterflyId, visual: &Visual) {
        if self.enabled {
            println!(
                "[overlay] + butterfly {id} ({:.0}px, opacity {:.2})",
                visual.size_px, visual.opacity
            );
        }
    }

    fn place(&mut self, _id: ButterflyId, _placement: &Placement) {}

    fn remove(&mut self, id: ButterflyId) {
        if self.enabled {
            println!("[overlay] - butterfly {id}");
        }
    }
}

pub fn run(args: SimulateArgs) -> Result<()> {
    if args.fps <= 0.0 || args.seconds < 0.0 {
        bail!("seconds must be >= 0 and fps > 0");
    }

    let mut config = load_config(args.config.as_deref())?;
    if args.reduced_motion {
        config.reduced_motion = true;
    }

    let mut script = parse_events(&args.events)?;
    script.sort_by(|a, b| a.0.total_cmp(&b.0));

    let viewport = Viewport::new(args.width, args.height);
    let mut system = FlightSystem::new(config, viewport, args.seed);
    system.attach_overlay(Box::new(TraceOverlay {
        enabled: args.trace,
    }));
    system.initialize()?;

    if args.realtime {
        run_realtime(&mut system, &script, args.seconds)?;
    } else {
        run_logical(&mut system, &script, args.seconds, args.fps)?;
    }

    system.shutdown()?;
    print_summary(&system, &args)?;
    Ok(())
}

fn run_logical(
    system: &mut FlightSystem,
    script: &[(f64, UiEvent)],
    seconds: f64,
    fps: f64,
) -> Result<()> {
    let dt = 1.0 / fps;
    let frames = (seconds * fps).ceil() as u64;
    let mut next_event = 0;

    for frame in 0..frames {
        let now = frame as f64 * dt;
        while next_event < script.len() && script[next_event].0 <= now {
            system.handle_event(script[next_event].1);
            next_event += 1;
        }
        system.update(dt)?;
    }
    Ok(())
}

fn run_realtime(
    system: &mut FlightSystem,
    script: &[(f64, UiEvent)],
    seconds: f64,
) -> Result<()> {
    let mut clock = GameClock::new();
    let mut next_event = 0;

    while clock.total_time < seconds {
        clock.tick();
        while next_event < script.len() && script[next_event].0 <= clock.total_time {
            system.handle_event(script[next_event].1);
            next_event += 1;
        }
        while clock.should_fixed_update() {
            system.fixed_update(clock.fixed_timestep)?;
            clock.consume_fixed_step();
        }
        system.update(clock.delta_time)?;
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
    Ok(())
}

fn print_summary(system: &FlightSystem, args: &SimulateArgs) -> Result<()> {
    match args.format.as_str() {
        "json" => {
            let summary = json!({
                "seconds": args.seconds,
                "seed": args.seed,
                "spawned": system.spawned_total(),
                "completed": system.completed_total(),
                "active": system.active_count(),
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        "text" => {
            println!(
                "[flight] {:.1}s simulated: {} spawned, {} completed, {} still airborne",
                args.seconds,
                system.spawned_total(),
                system.completed_total(),
                system.active_count()
            );
        }
        other => bail!("Unknown format: {other} (expected text or json)"),
    }
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<FlightConfig> {
    let Some(path) = path else {
        return Ok(FlightConfig::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let table: toml::value::Table = toml::from_str(&text).with_context(|| format!("parsing {path}"))?;
    // Accept either a [flight] table or a bare table of keys
    let flight = table
        .get("flight")
        .and_then(|v| v.as_table())
        .unwrap_or(&table);
    Ok(FlightConfig::from_toml(flight))
}

fn parse_events(specs: &[String]) -> Result<Vec<(f64, UiEvent)>> {
    specs
        .iter()
        .map(|spec| {
            let (time, kind) = spec
                .split_once(':')
                .with_context(|| format!("event `{spec}` is not in `seconds:kind` form"))?;
            let time: f64 = time
                .parse()
                .with_context(|| format!("bad timestamp in event `{spec}`"))?;
            let event = match kind {
                "began" => UiEvent::Began,
                "memory_opened" => UiEvent::MemoryOpened,
                "reason_revealed" => UiEvent::ReasonRevealed,
                "declined" => UiEvent::Declined,
                "accepted" => UiEvent::Accepted,
                other => bail!("unknown event kind `{other}`"),
            };
            Ok((time, event))
        })
        .collect()
}
