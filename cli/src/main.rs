use std::io::{self, BufRead, Write};

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use hueguess_core::{GameEngine, RandomRoundGenerator, RoundGenerator, Snapshot};
use tracing_subscriber::EnvFilter;

mod input;
mod render;
mod settings;

use input::{HELP, Line};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    config: settings::ConfigArgs,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(args.verbose.tracing_level_filter().into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = settings::load(&args.config)?;
    let seed = args.seed.unwrap_or_else(settings::clock_seed);
    let engine = GameEngine::new(config, RandomRoundGenerator::new(seed))?;
    log::debug!("seed: {}", engine.generator().seed());
    log::debug!("App started");
    run(engine, io::stdin().lock(), io::stdout().lock())
}

/// Reads lines until `quit` or end of input, redrawing after every change.
fn run<G, R, W>(mut engine: GameEngine<G>, input: R, mut out: W) -> anyhow::Result<()>
where
    G: RoundGenerator,
    R: BufRead,
    W: Write,
{
    render::render(&Snapshot::from_engine(&engine), &mut out)?;

    for line in input.lines() {
        let line = match Line::parse(&line?) {
            Ok(line) => line,
            Err(err) => {
                writeln!(out, "{err:#}")?;
                continue;
            }
        };

        let outcome = match line {
            Line::Quit => break,
            Line::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Line::Show => {
                render::render(&Snapshot::from_engine(&engine), &mut out)?;
                continue;
            }
            Line::Json => {
                serde_json::to_writer_pretty(&mut out, &Snapshot::from_engine(&engine))?;
                writeln!(out)?;
                continue;
            }
            Line::Hover(point) => {
                writeln!(out, "{:?}", engine.pointer_moved(point))?;
                continue;
            }
            Line::Key(key) => engine.key_pressed(key),
            Line::Click(point) => engine.pointer_clicked(point),
            Line::Pick(coords) => Ok(engine.select_palette(coords)),
        };

        match outcome {
            Ok(outcome) => {
                log::debug!("outcome: {:?}", outcome);
                if let Some(feedback) = outcome.feedback() {
                    writeln!(
                        out,
                        "{} exact, {} color",
                        feedback.exact, feedback.color_only
                    )?;
                }
                if outcome.ends_round() {
                    log::info!("Round over after {} attempts", engine.attempts());
                }
                if outcome.has_update() {
                    render::render(&Snapshot::from_engine(&engine), &mut out)?;
                }
            }
            Err(err) => log::error!("Command failed: {}", err),
        }
    }
    Ok(())
}
