mod commands;

use std::process::ExitCode;

use autofocus_core::error::AutofocusError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Score the sharpness of extracted video frames.
///
/// Frames are expected as `<name>NNNNN.<ext>`, e.g. produced by
/// `ffmpeg -i <video> frame%05d.png`.
#[derive(Parser)]
#[command(name = "autofocus", disable_help_flag = true)]
struct Cli {
    #[command(flatten)]
    analyze: commands::analyze::AnalyzeArgs,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            println!("{}", AutofocusError::InvalidArguments(e.to_string()));
            return ExitCode::FAILURE;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match commands::analyze::run(&cli.analyze) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
