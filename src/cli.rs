use crate::tracks::TrackRequest;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "video2psp")]
#[command(
    version,
    about = "Convert video to PSP MP4 with user-selected audio and subtitle tracks."
)]
pub struct Cli {
    /// Path to input video.
    pub input_file: PathBuf,

    /// Path to output PSP-compatible MP4 (defaults to the input with an .mp4 extension).
    pub output_file: Option<PathBuf>,

    /// Global ffmpeg index of the audio track you want to use (e.g. 1 for '0:1').
    #[arg(long, value_name = "INDEX")]
    pub audio_track: Option<u32>,

    /// Global ffmpeg index of an embedded subtitle track to burn in (e.g. 2 for '0:2').
    #[arg(long, value_name = "INDEX")]
    pub subtitle_track: Option<u32>,

    /// Path to an external .srt/.ass file to burn into the video (overrides embedded).
    #[arg(long, value_name = "PATH")]
    pub external_subs: Option<PathBuf>,

    /// Print the ffmpeg command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn track_request(&self) -> TrackRequest {
        TrackRequest {
            audio_index: self.audio_track,
            subtitle_index: self.subtitle_track,
            external_subs: self.external_subs.clone(),
        }
    }

    /// Output path, derived from the input when not given
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input_file, extension))
    }
}

/// Replace the final extension of `input` with `extension`
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    input.with_extension(extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("movie.mkv"), "mp4"),
            PathBuf::from("movie.mp4")
        );
        assert_eq!(
            default_output_path(Path::new("a.b.mov"), "mp4"),
            PathBuf::from("a.b.mp4")
        );
        assert_eq!(
            default_output_path(Path::new("videos/clip"), "mp4"),
            PathBuf::from("videos/clip.mp4")
        );
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "video2psp",
            "movie.mkv",
            "--audio-track",
            "2",
            "--subtitle-track",
            "5",
            "--external-subs",
            "movie.srt",
        ])
        .unwrap();
        assert_eq!(cli.output_path("mp4"), PathBuf::from("movie.mp4"));

        let request = cli.track_request();
        assert_eq!(request.audio_index, Some(2));
        assert_eq!(request.subtitle_index, Some(5));
        assert_eq!(request.external_subs, Some(PathBuf::from("movie.srt")));
    }

    #[test]
    fn test_explicit_output_path() {
        let cli = Cli::try_parse_from(["video2psp", "movie.mkv", "psp/movie.mp4"]).unwrap();
        assert_eq!(cli.output_path("mp4"), PathBuf::from("psp/movie.mp4"));
        assert!(cli.audio_track.is_none());
    }

    #[test]
    fn test_rejects_non_integer_track() {
        assert!(Cli::try_parse_from(["video2psp", "movie.mkv", "--audio-track", "one"]).is_err());
    }
}
