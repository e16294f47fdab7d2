use crate::shared::error::WantedError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum config file size for security (1 MiB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Maximum accepted length of a URL handed to the system browser
pub const MAX_EXTERNAL_URL_LENGTH: usize = 2048;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the symlink itself is checked, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates a single URL path component such as a record uid
///
/// # Security
/// Prevents path traversal and query/fragment injection into the API URL.
/// Returns the reason as a plain string so callers can wrap it in their
/// own error type.
pub fn validate_url_component(component: &str, component_type: &str) -> std::result::Result<(), String> {
    if component.trim().is_empty() {
        return Err(format!("{} must not be empty", component_type));
    }

    if component.contains('/') || component.contains('\\') {
        return Err(format!(
            "Security: {} contains path separators which are not allowed",
            component_type
        ));
    }

    if component.contains("..") {
        return Err(format!(
            "Security: {} contains '..' which is not allowed",
            component_type
        ));
    }

    if component.contains('#') || component.contains('?') || component.contains('@') {
        return Err(format!(
            "Security: {} contains URL-unsafe characters",
            component_type
        ));
    }

    Ok(())
}

/// Validates a URL before it is handed to the system browser
///
/// Only absolute `http`/`https` URLs without whitespace or control
/// characters are accepted, so nothing but a web page can be launched.
pub fn validate_external_url(url: &str) -> Result<()> {
    let reject = |reason: &str| -> anyhow::Error {
        WantedError::SecurityError {
            target: url.to_string(),
            reason: reason.to_string(),
        }
        .into()
    };

    if url.len() > MAX_EXTERNAL_URL_LENGTH {
        return Err(reject("URL is too long"));
    }

    let lower = url.to_ascii_lowercase();
    let rest = if let Some(rest) = lower.strip_prefix("https://") {
        rest
    } else if let Some(rest) = lower.strip_prefix("http://") {
        rest
    } else {
        return Err(reject("only http and https URLs can be opened"));
    };

    if rest.is_empty() || rest.starts_with('/') {
        return Err(reject("URL has no host"));
    }

    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(reject("URL contains whitespace or control characters"));
    }

    Ok(())
}
