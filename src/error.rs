use thiserror::Error;

/// Fatal errors that abort a conversion run
#[derive(Debug, Error)]
pub enum AppError {
    /// An external tool binary could not be located
    #[error("'{tool}' not found. Make sure FFmpeg (with ffprobe) is installed and in PATH")]
    ToolNotFound { tool: String },

    /// An external tool exited with a non-zero status
    #[error("{tool} returned a non-zero exit status: {message}")]
    ToolFailed {
        tool: String,
        message: String,
        code: Option<i32>,
    },

    /// Structured output from a tool could not be parsed
    #[error("could not parse {tool} output as JSON: {message}")]
    MalformedOutput { tool: String, message: String },

    #[error("no audio tracks found in the input file")]
    NoAudioTracks,

    #[error("stream 0:{0} is not an audio track of the input file")]
    UnknownAudioTrack(u32),

    #[error("standard input closed while waiting for a selection")]
    InputClosed,

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn tool_not_found(tool: impl Into<String>) -> Self {
        Self::ToolNotFound { tool: tool.into() }
    }

    pub fn malformed_output(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedOutput {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Process exit code for this error.
    ///
    /// A failed tool hands its own status through. A status outside 1..=255,
    /// or none at all, falls back to 1, as does every other error.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::ToolFailed {
                code: Some(code), ..
            } => u8::try_from(*code).ok().filter(|&c| c != 0).unwrap_or(1),
            _ => 1,
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
