use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use autofocus_core::io::results::write_results;
use autofocus_core::pipeline::config::AnalysisConfig;
use autofocus_core::pipeline::{analyse_frames_with_progress, sharpest};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Environment variable naming an optional TOML analysis config.
pub const CONFIG_ENV: &str = "AUTOFOCUS_CONFIG";

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Directory holding the extracted frame images
    pub frames_directory: PathBuf,

    /// Tab-separated result table to write
    pub result_filepath: PathBuf,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => load_config(Path::new(&path))?,
        None => AnalysisConfig::default(),
    };

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Scoring frames");

    let frames = analyse_frames_with_progress(&args.frames_directory, &config, |done, total| {
        pb.set_length(total as u64);
        pb.set_position(done as u64);
    });
    pb.finish_and_clear();
    let frames = frames?;

    if let Some(best) = sharpest(&frames) {
        info!(frame = best.number, sharpness = best.sharpness, "Sharpest frame");
    }

    write_results(&args.result_filepath, &frames)?;
    Ok(())
}

fn load_config(path: &Path) -> Result<AnalysisConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: AnalysisConfig = toml::from_str(&contents).context("Invalid analysis config")?;
    config.validate()?;
    Ok(config)
}
