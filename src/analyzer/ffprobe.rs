use crate::error::AppError;
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Stream type as reported by ffprobe's `codec_type`
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecType {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
    #[default]
    #[serde(other)]
    Other,
}

/// One stream entry of the probe report
#[derive(Debug, Clone, Deserialize)]
pub struct StreamDescriptor {
    /// Global stream index within the source file
    pub index: u32,
    #[serde(default)]
    pub codec_type: CodecType,
    pub codec_name: Option<String>,
    #[serde(default)]
    pub tags: StreamTags,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StreamTags {
    pub language: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<StreamDescriptor>,
}

/// Probe all streams of `input_path` with the given ffprobe binary
pub fn probe(ffprobe: &Path, input_path: &Path) -> Result<Vec<StreamDescriptor>, AppError> {
    let tool = ffprobe.display().to_string();
    debug!("Probing {} with {}", input_path.display(), tool);

    let output = Command::new(ffprobe)
        .args(["-v", "quiet", "-print_format", "json", "-show_streams"])
        .arg(input_path)
        .output()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::tool_not_found(&tool),
            _ => AppError::Io(e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::ToolFailed {
            tool,
            message: format!("{}\nstderr: {}", output.status, stderr.trim_end()),
            code: output.status.code(),
        });
    }

    let streams = parse_streams(&String::from_utf8_lossy(&output.stdout))?;
    debug!("ffprobe reported {} streams", streams.len());
    Ok(streams)
}

/// Parse ffprobe's JSON report into stream descriptors
pub fn parse_streams(json: &str) -> Result<Vec<StreamDescriptor>, AppError> {
    let data: ProbeOutput = serde_json::from_str(json)
        .map_err(|e| AppError::malformed_output("ffprobe", e.to_string()))?;
    Ok(data.streams)
}
