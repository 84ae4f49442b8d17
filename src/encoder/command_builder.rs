use crate::encoder::profile::DeviceProfile;
use crate::tracks::{SelectionResult, SubtitleSource, TrackInfo, position_of};
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Inputs for building one transcode invocation
#[derive(Debug, Clone)]
pub struct TranscodeParams<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub selection: &'a SelectionResult,
    /// Subtitle tracks of `input`, in file order
    pub subtitle_tracks: &'a [TrackInfo],
    pub profile: DeviceProfile,
}

/// Fully built transcoder invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeCommand {
    pub program: PathBuf,
    /// Paths are passed through untouched, so arguments need not be UTF-8
    pub args: Vec<OsString>,
}

impl TranscodeCommand {
    pub fn new(program: impl Into<PathBuf>, params: &TranscodeParams<'_>) -> Self {
        Self {
            program: program.into(),
            args: build_ffmpeg_args(params),
        }
    }
}

impl fmt::Display for TranscodeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(|c: char| c.is_whitespace() || c == '\'') {
                write!(f, " \"{}\"", arg.replace('"', "\\\""))?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Build FFmpeg arguments for a device-compatible encode
pub fn build_ffmpeg_args(params: &TranscodeParams<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-hide_banner",
        "-loglevel",
        "error",
        "-stats",
        "-y",
        "-i",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();

    args.push(params.input.as_os_str().to_owned());
    args.extend([
        OsString::from("-map"),
        OsString::from("0:v:0"),
        OsString::from("-map"),
        OsString::from(format!("0:{}", params.selection.audio_index)),
    ]);

    args.push(OsString::from("-vf"));
    args.push(build_video_filter(params));

    args.extend(params.profile.encoding_args().into_iter().map(OsString::from));
    args.push(params.output.as_os_str().to_owned());
    args
}

/// Scale filter, followed by a subtitle burn-in filter when one applies
fn build_video_filter(params: &TranscodeParams<'_>) -> OsString {
    let mut filter = OsString::from(params.profile.scale_filter());

    match &params.selection.subtitle {
        Some(SubtitleSource::External(path)) => {
            filter.push(",subtitles=");
            filter.push(quote_filter_value(path.as_os_str()));
        }
        Some(SubtitleSource::Embedded(index)) => {
            // The subtitles filter counts subtitle streams only
            match position_of(params.subtitle_tracks, *index) {
                Some(position) => {
                    let mut source = params.input.as_os_str().to_owned();
                    source.push(format!(":si={}", position));
                    filter.push(",subtitles=");
                    filter.push(quote_filter_value(&source));
                }
                None => warn!(
                    "Could not find subtitle track 0:{} among embedded subtitles. Skipping subtitle burn-in.",
                    index
                ),
            }
        }
        None => {}
    }

    filter
}

/// Single-quote a value for an FFmpeg filter graph
fn quote_filter_value(value: &OsStr) -> OsString {
    let mut quoted = OsString::from("'");
    quoted.push(escape_quotes(value));
    quoted.push("'");
    quoted
}

#[cfg(unix)]
fn escape_quotes(value: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    let mut escaped = Vec::with_capacity(value.len());
    for &byte in value.as_bytes() {
        if byte == b'\'' {
            escaped.extend_from_slice(br"'\''");
        } else {
            escaped.push(byte);
        }
    }
    OsString::from_vec(escaped)
}

// TODO: non-UTF-8 subtitle paths are still converted lossily on Windows
#[cfg(not(unix))]
fn escape_quotes(value: &OsStr) -> OsString {
    OsString::from(value.to_string_lossy().replace('\'', r"'\''"))
}
