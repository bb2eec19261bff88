use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use hamcycle::prelude::*;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod progress;
mod provenance;
mod record;
mod render;

use progress::BarProgress;
use provenance::Payload;
use record::CycleRecord;

#[derive(Parser)]
#[command(name = "hamcycle")]
#[command(about = "Hamiltonian cycles on cylindrical grids")]
struct Cmd {
    /// Log every flip attempt and debug details
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Warnings and errors only; no progress bars
    #[arg(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build a cycle, write it as JSON, plot it, and record provenance
    Generate(GenerateArgs),
    /// Load a cycle JSON and check the Hamiltonian property
    Validate {
        file: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct GenerateArgs {
    /// Grid width (even)
    width: usize,
    /// Grid height (even)
    height: usize,

    /// Number of 2x2 flip attempts after construction
    #[arg(long, default_value_t = 0)]
    flips: usize,

    /// Seed for the search builder and the mutators
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = BuilderArg::Auto)]
    builder: BuilderArg,

    /// Abort the search after this many push/pop steps
    #[arg(long)]
    max_steps: Option<u64>,

    #[arg(long, default_value = "cycle.json")]
    json: PathBuf,

    #[arg(long, default_value = "cycle.svg")]
    image: PathBuf,

    /// Skip the SVG plot
    #[arg(long)]
    no_image: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BuilderArg {
    /// Serpentine unless --seed or --flips is given
    Auto,
    Serpentine,
    Search,
}

impl From<BuilderArg> for BuilderKind {
    fn from(arg: BuilderArg) -> Self {
        match arg {
            BuilderArg::Auto => BuilderKind::Auto,
            BuilderArg::Serpentine => BuilderKind::Serpentine,
            BuilderArg::Search => BuilderKind::Search,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        Level::DEBUG
    } else if cmd.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Generate(args) => generate(args, cmd.verbose, cmd.quiet),
        Action::Validate { file } => validate(file),
        Action::Report => report(),
    }
}

fn generate(args: GenerateArgs, verbose: bool, quiet: bool) -> Result<()> {
    let cfg = GenerateCfg {
        flips: args.flips,
        seed: args.seed,
        builder: args.builder.into(),
        search: SearchCfg {
            max_steps: args.max_steps,
            ..SearchCfg::default()
        },
    };
    let builder = cfg.resolved_builder();
    tracing::info!(
        width = args.width,
        height = args.height,
        flips = args.flips,
        seed = ?args.seed,
        builder = ?builder,
        "generate"
    );
    tracing::debug!(search = ?cfg.search, "search config");

    let report = if quiet {
        generate_with_report(args.width, args.height, &cfg, &mut NoProgress)?
    } else {
        let mut bars = BarProgress::new(verbose);
        let outcome = generate_with_report(args.width, args.height, &cfg, &mut bars);
        bars.finish();
        outcome?
    };
    if report.attempts > 0 {
        tracing::info!(
            attempts = report.attempts,
            successes = report.successes,
            "flip pass done"
        );
    }

    CycleRecord::from(&report.cycle).save(&args.json)?;
    tracing::info!(path = %args.json.display(), "cycle saved");

    let mut payload = Payload::new(serde_json::json!({
        "width": args.width,
        "height": args.height,
        "flips": args.flips,
        "seed": args.seed,
        "builder": format!("{builder:?}").to_lowercase(),
        "max_steps": args.max_steps,
        "successes": report.successes
    }));
    if !args.no_image {
        render::write_svg(&report.cycle, &args.image)?;
        tracing::info!(path = %args.image.display(), "plot saved");
        payload = payload.with_output(&args.image);
    }
    let sidecar = provenance::write_sidecar(&args.json, payload)?;
    tracing::debug!(path = %sidecar.display(), "provenance written");
    Ok(())
}

fn validate(file: PathBuf) -> Result<()> {
    let record = CycleRecord::load(&file)?;
    let (width, height) = (record.width, record.height);
    match record.into_cycle() {
        Ok(cycle) => {
            tracing::info!(
                path = %file.display(),
                width,
                height,
                cells = cycle.len(),
                "valid Hamiltonian cycle"
            );
            Ok(())
        }
        Err(err) => bail!("{}: {err}", file.display()),
    }
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "hamcycle_version": hamcycle::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
