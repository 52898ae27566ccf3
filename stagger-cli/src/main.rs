use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use stagger::{EntranceState, IntSize, LayoutAnimationScope, LayoutAnimationSpec};

#[derive(Parser, Debug)]
#[command(name = "stagger", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in presets.
    Presets,
    /// Print the descriptors and durations of a spec.
    Inspect(SourceArgs),
    /// Play a hidden-to-visible entrance and print every item frame as a JSON line.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SourceArgs {
    /// Input layout animation JSON.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Built-in preset name (see `stagger presets`).
    #[arg(long)]
    preset: Option<String>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Number of children in the container.
    #[arg(long, default_value_t = 4)]
    items: usize,

    /// Frame step in milliseconds.
    #[arg(long, default_value_t = 16)]
    step: u64,

    /// Measured size of every child, as WxH.
    #[arg(long, default_value = "200x40", value_parser = parse_size)]
    size: IntSize,

    /// Stop after this much play time even if the entrance has not settled.
    #[arg(long)]
    until: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Presets => cmd_presets(),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load_spec(args: &SourceArgs) -> anyhow::Result<LayoutAnimationSpec> {
    if let Some(path) = &args.in_path {
        return LayoutAnimationSpec::from_path(path)
            .with_context(|| format!("load spec '{}'", path.display()));
    }
    let name = args.preset.as_deref().unwrap_or_default();
    stagger_std::by_name(name).with_context(|| {
        format!(
            "unknown preset '{name}' (expected one of: {})",
            stagger_std::PRESET_NAMES.join(", ")
        )
    })
}

fn parse_size(s: &str) -> Result<IntSize, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = w.trim().parse::<i32>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<i32>().map_err(|e| format!("height: {e}"))?;
    if w < 0 || h < 0 {
        return Err(format!("size must be non-negative, got '{s}'"));
    }
    Ok(IntSize::new(w, h))
}

fn cmd_presets() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    for name in stagger_std::PRESET_NAMES {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn cmd_inspect(args: SourceArgs) -> anyhow::Result<()> {
    let spec = load_spec(&args)?;
    let descriptors: Vec<_> = spec
        .graph()
        .descriptors()
        .iter()
        .map(|d| {
            serde_json::json!({
                "kind": d.kind().name(),
                "property_class": d.property_class(),
                "structural": d.is_structural(),
                "timing": d.timing(),
                "sequence_offset_millis": d.sequence_offset_millis(),
                "end_millis": d.end_millis(),
            })
        })
        .collect();
    let report = serde_json::json!({
        "initial_delay_millis": spec.initial_delay_millis(),
        "delay_millis_between_items": spec.delay_millis_between_items(),
        "graph_duration_millis": spec.graph().duration(),
        "duration_millis": spec.duration(),
        "descriptors": descriptors,
    });
    let text = serde_json::to_string_pretty(&report).context("serialize inspect report")?;
    println!("{text}");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.step > 0, "--step must be greater than zero");
    let spec = load_spec(&args.source)?;

    let mut state = EntranceState::new(false);
    state.set_visible(true);

    let mut out = std::io::stdout().lock();
    let mut now = 0u64;
    for frame_no in 0u64.. {
        let mut scope = LayoutAnimationScope::new(&spec, &mut state, now);
        let play = scope.clock().play_time_millis();
        for i in 0..args.items {
            let frame = scope.item(i).frame(args.size);
            let line = serde_json::json!({
                "frame": frame_no,
                "now_millis": now,
                "play_time_millis": play,
                "item": frame,
            });
            writeln!(out, "{line}")?;
        }
        let summary = scope.finish();
        if summary.settled {
            tracing::info!(frame = frame_no, now, "entrance settled");
            break;
        }
        if args.until.is_some_and(|until| play.unwrap_or(now) >= until) {
            tracing::info!(frame = frame_no, now, "stopped before settling");
            break;
        }
        now = now.saturating_add(args.step);
    }
    Ok(())
}
