use fraudshield_core::ShellError;
use std::path::Path;

/// Map config loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_config_error(error: &ShellError, path: &Path) -> (String, String, String) {
    match error {
        ShellError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => (
            "Config Not Found".to_string(),
            "The configuration file could not be found.".to_string(),
            format!(
                "Path: {}\n\nDefault settings will be used.",
                path.display()
            ),
        ),
        ShellError::Io(e) if e.kind() == std::io::ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        ShellError::Serialization(e) => (
            "Invalid Config".to_string(),
            "The configuration file is not valid JSON.".to_string(),
            format!("{} (line {}, column {})", path.display(), e.line(), e.column()),
        ),
        ShellError::InvalidConfig(reason) => (
            "Invalid Config".to_string(),
            "The configuration file has invalid settings.".to_string(),
            reason.clone(),
        ),
        other => (
            "Error Loading Config".to_string(),
            "Failed to load configuration file.".to_string(),
            other.to_string(),
        ),
    }
}
