use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use format_outputs::config::Config;
use format_outputs::{Mode, Normalizer};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "format-outputs",
    about = "Strip color codes from Clang/GCC logs and cut them at the defects section"
)]
struct Cli {
    /// Result directory (one subdirectory per run in batch mode).
    dir: PathBuf,

    /// Directory layout.
    #[arg(long, value_enum, default_value_t = ModeArg::Batch)]
    mode: ModeArg,

    /// Only process this tool's log (repeatable). Defaults to every configured tool.
    #[arg(long = "tool", value_name = "NAME")]
    tools: Vec<String>,

    /// Marker text that starts the cut section.
    #[arg(long)]
    marker: Option<String>,

    /// Read configuration from this TOML file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a report of the written artifacts.
    #[arg(long, value_enum)]
    report: Option<ReportFormat>,

    /// Verbose logs on stderr (overrides RUST_LOG).
    #[arg(long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Batch,
    Single,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Batch => Mode::Batch,
            ModeArg::Single => Mode::Single,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // A missing or surplus DIR prints usage and still exits 0.
        Err(err)
            if matches!(
                err.kind(),
                ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument
            ) =>
        {
            println!("{}", Cli::command().render_usage());
            return ExitCode::SUCCESS;
        }
        Err(err) => err.exit(),
    };

    init_tracing(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load(cli.config.as_deref()).context("could not load configuration")?;
    if let Some(marker) = cli.marker {
        config.normalize.marker = marker;
        config.validate()?;
    }

    let normalizer = Normalizer::from_config(&config, cli.mode.into(), &cli.tools)?;
    tracing::debug!(
        dir = %cli.dir.display(),
        mode = %normalizer.mode(),
        tools = ?normalizer.tools(),
        "starting"
    );

    let report = normalizer.run(&cli.dir)?;

    match cli.report {
        Some(ReportFormat::Text) => print!("{}", report.render_text()),
        Some(ReportFormat::Json) => println!("{}", report.to_json()?),
        None => {}
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(filter)
        .init();
}
