use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mwl::constants::MWL_JSON_KEY;
use mwl::ChannelMap;

mod config;

use config::{FormatArg, RunConfig};

#[derive(Parser)]
#[command(name = "mwl-run")]
#[command(about = "Convert an HL7 radiology order message tree into a Modality Worklist entry")]
struct Cli {
    /// Message tree file (JSON or YAML), or `-` for stdin
    #[arg(env = "MWL_INPUT")]
    input: Option<PathBuf>,

    /// Input format
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Write the worklist JSON here instead of stdout
    #[arg(long, short, env = "MWL_OUTPUT")]
    output: Option<PathBuf>,
}

/// Main entry point for the worklist runner
///
/// Loads one message tree, runs the transform and emits the `mwlJson` channel value.
///
/// # Environment Variables
/// - `MWL_INPUT`: message tree path when no argument is given (default: stdin)
/// - `MWL_OUTPUT`: output path when `--output` is not given (default: stdout)
/// - `RUST_LOG`: log filter (default: `mwl=info`), logs go to stderr
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("mwl=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = RunConfig::new(cli.input, cli.format, cli.output);
    tracing::info!("++ Loading message from {:?} as {:?}", config.input(), config.format());

    let message = config.load_message()?;
    let mut channel = ChannelMap::new();
    mwl::transform(&message, &mut channel)?;

    let rendered = channel.get(MWL_JSON_KEY).unwrap_or_default();
    match config.output() {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))?;
            tracing::info!("++ Wrote worklist entry to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
