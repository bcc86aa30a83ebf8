use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "podium";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|pd| pd.config_dir().join("config.json"))
    }

    /// `$HOME/.local/state/podium`, falling back to the platform data dir
    pub fn state_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(PathBuf::from(home).join(".local").join("state").join(APP_NAME))
        } else {
            ProjectDirs::from("", "", APP_NAME).map(|pd| pd.data_local_dir().to_path_buf())
        }
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join("podium.log"))
    }

    pub fn report_history_path() -> Option<PathBuf> {
        Self::state_dir().map(|dir| dir.join("reports.csv"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_files_share_a_directory() {
        if let (Some(log), Some(history)) = (AppDirs::log_path(), AppDirs::report_history_path()) {
            assert_eq!(log.parent(), history.parent());
            assert!(log.ends_with("podium.log"));
            assert!(history.ends_with("reports.csv"));
        }
    }
}
