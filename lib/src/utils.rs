use std::path::{Path, PathBuf};

pub fn get_config_dir() -> PathBuf {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("markport");
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config/markport");
    }

    #[cfg(target_os = "windows")]
    if let Ok(appdata) = std::env::var("APPDATA") {
        return PathBuf::from(appdata).join("markport");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Directory a file should be staged in before being moved to `path`
pub fn staging_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
