use crate::error::AppError;
use std::path::PathBuf;
use tracing::debug;

/// Resolve a tool name or path to an executable, failing if it is missing
pub fn require_tool(name: &str) -> Result<PathBuf, AppError> {
    let path = which::which(name).map_err(|_| AppError::tool_not_found(name))?;
    debug!("Using {} at {}", name, path.display());
    Ok(path)
}
