use crate::error::{FlaliasError, Result};
use crate::project_identity;
use directories::UserDirs;
use std::path::{Path, PathBuf};

pub fn home_dir() -> Result<PathBuf> {
    let user_dirs = UserDirs::new()
        .ok_or_else(|| FlaliasError::PathError("Could not determine user home directory".to_string()))?;
    Ok(user_dirs.home_dir().to_path_buf())
}

pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();

    if !path_str.starts_with("~") {
        return Ok(path.to_path_buf());
    }

    let home = home_dir()?;

    if path_str == "~" {
        return Ok(home);
    }

    let stripped = path_str
        .strip_prefix("~/")
        .ok_or_else(|| FlaliasError::PathError(format!("Invalid path format: {}", path_str)))?;

    Ok(home.join(stripped))
}

/// Resolve the target rc file from the optional `--file` override.
///
/// A bare file name resolves under the home directory; anything with a
/// path separator (or a `~` prefix) is treated as a path.
pub fn rc_file(file: Option<&str>) -> Result<PathBuf> {
    match file {
        None => Ok(home_dir()?.join(project_identity::DEFAULT_RC_BASENAME)),
        Some(name) if name.starts_with('~') => expand_home(Path::new(name)),
        Some(name) if name.contains('/') => Ok(PathBuf::from(name)),
        Some(name) => Ok(home_dir()?.join(name)),
    }
}
