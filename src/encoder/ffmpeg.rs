use crate::encoder::command_builder::TranscodeCommand;
use crate::error::AppError;
use std::io::ErrorKind;
use std::process::Command;
use tracing::{debug, info};

/// Run the transcoder, letting its progress stream straight to the console.
///
/// Blocks until FFmpeg exits. A non-zero exit is returned as
/// [`AppError::ToolFailed`] carrying FFmpeg's exit code.
pub fn run_transcode(command: &TranscodeCommand) -> Result<(), AppError> {
    let tool = command.program.display().to_string();
    info!("Running: {}", command);

    let status = Command::new(&command.program)
        .args(&command.args)
        .status()
        .map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::tool_not_found(&tool),
            _ => AppError::Io(e),
        })?;

    debug!("{} finished with {}", tool, status);
    if !status.success() {
        return Err(AppError::ToolFailed {
            tool,
            message: status.to_string(),
            code: status.code(),
        });
    }

    Ok(())
}
