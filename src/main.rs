mod analyzer;
mod cli;
mod config;
mod encoder;
mod error;
mod tracks;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::AppConfig;
use encoder::{DeviceProfile, TranscodeCommand, TranscodeParams};
use error::AppError;
use std::io;
use std::process::ExitCode;
use tracing::debug;
use tracks::TrackPrompter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = utils::init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            let code = err
                .downcast_ref::<AppError>()
                .map(AppError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref())?;
    let profile = DeviceProfile::PSP;
    let output_path = cli.output_path(profile.extension);
    debug!(
        "Converting {} -> {}",
        cli.input_file.display(),
        output_path.display()
    );

    let ffprobe = utils::require_tool(&config.tools.ffprobe)?;
    // Checked before any prompt; a dry run never launches ffmpeg
    let ffmpeg = if cli.dry_run {
        None
    } else {
        Some(utils::require_tool(&config.tools.ffmpeg)?)
    };
    let streams = analyzer::probe(&ffprobe, &cli.input_file)
        .with_context(|| format!("Failed to probe {}", cli.input_file.display()))?;
    let (audio_tracks, subtitle_tracks) = analyzer::classify(&streams);

    if audio_tracks.is_empty() {
        return Err(AppError::NoAudioTracks.into());
    }

    let stdin = io::stdin();
    let mut prompter = TrackPrompter::new(stdin.lock(), io::stdout());
    let selection = tracks::resolve_selection(
        &cli.track_request(),
        &audio_tracks,
        &subtitle_tracks,
        &mut prompter,
    )?;

    let params = TranscodeParams {
        input: &cli.input_file,
        output: &output_path,
        selection: &selection,
        subtitle_tracks: &subtitle_tracks,
        profile,
    };

    let Some(ffmpeg) = ffmpeg else {
        println!("{}", TranscodeCommand::new(&config.tools.ffmpeg, &params));
        return Ok(());
    };
    let command = TranscodeCommand::new(ffmpeg, &params);

    println!("\nRunning FFmpeg:");
    encoder::run_transcode(&command).context("FFmpeg command failed")?;
    println!("\nSuccessfully created PSP video: {}", output_path.display());
    Ok(())
}
