//! Paths inside the Zellij plugin sandbox.
//!
//! Zellij mounts the host filesystem under `/host`, which usually resolves to
//! the directory Zellij was started from (typically the user's home).

use std::path::PathBuf;

/// Returns the directory that holds the plugin's trace files.
///
/// # Examples
///
/// ```
/// use zbooks::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str(), Some("/host/.local/share/zellij/zbooks"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zbooks")
}

/// Expands a leading `~` to the sandbox `/host` mount, so that a
/// `theme_file "~/themes/mine.toml"` option can be read from inside Zellij.
///
/// # Examples
///
/// ```
/// use zbooks::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/mine.toml"), "/host/themes/mine.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        return "/host".to_string();
    }
    path.strip_prefix("~/")
        .map_or_else(|| path.to_string(), |rest| format!("/host/{rest}"))
}
