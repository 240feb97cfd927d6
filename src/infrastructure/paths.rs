//! Path manipulation utilities for Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`.
//! Gazette only touches the filesystem for two things: the trace export file
//! and an optional user theme file.

use std::path::PathBuf;

/// Returns the data directory for Gazette's trace files.
///
/// The directory is located at `/host/.local/share/zellij/gazette` in the Zellij
/// sandbox. `/host` points to the cwd of the last focused terminal, or the folder
/// where Zellij was started, which typically makes this
/// `~/.local/share/zellij/gazette` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("gazette")
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// Used for the `theme_file` configuration value, which users naturally write
/// relative to their home directory.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host_share() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/gazette")
        );
    }

    #[test]
    fn expands_only_leading_tilde() {
        assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }
}
