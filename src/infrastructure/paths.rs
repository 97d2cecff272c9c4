//! Path utilities for the Zellij sandbox, where the host's home directory
//! is reachable through `/host`.

use std::path::PathBuf;

/// Returns the plugin's data directory, holding the log file.
///
/// `/host` points at the cwd of the last focused terminal, or the folder
/// Zellij was started in, so this usually resolves to
/// `~/.local/share/zellij/repopin`.
///
/// ```
/// use repopin::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/repopin"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("repopin")
}

/// Maps `~` and `~/...` onto `/host`; other paths pass through.
///
/// ```
/// use repopin::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// assert_eq!(expand_tilde("~other/x"), "~other/x");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
