//! Environment constants and path utilities for taskbook.
//!
//! This module centralizes the hardcoded names and formats used throughout
//! the application, making them easier to maintain and modify.

use std::path::{Path, PathBuf};

/// Application directory name (hidden directory like .git, .vscode)
pub const APP_DIR_NAME: &str = ".taskbook";

/// Configuration file name inside the application directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration file name looked up directly in the working directory
pub const LOCAL_CONFIG_FILE_NAME: &str = "taskbook.toml";

/// The only accepted due-date input format (ISO 8601 calendar date)
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "taskbook=info";

/// Output labels shared by the display operations
pub mod labels {
    pub const USER_HEADER: &str = "Tasks for User";
    pub const LIST_HEADER: &str = "Tasks in List";
    pub const PROJECT_HEADER: &str = "Tasks in Project";
    pub const SCHEDULER_HEADER: &str = "Due Tasks:";
    pub const UPCOMING_HEADER: &str = "Upcoming Tasks:";
    pub const USERS_HEADER: &str = "Users:";
    pub const TASK_LISTS_HEADER: &str = "Task Lists:";
}

/// Build the application directory path from a base directory
pub fn app_dir_path(base: &Path) -> PathBuf {
    base.join(APP_DIR_NAME)
}

/// Build the `.taskbook/config.toml` path for a working directory
pub fn local_config_file_path(workspace_root: &Path) -> PathBuf {
    app_dir_path(workspace_root).join(CONFIG_FILE_NAME)
}

/// Build the user configuration file path (~/.taskbook/config.toml)
pub fn user_config_file_path(home_dir: &Path) -> PathBuf {
    app_dir_path(home_dir).join(CONFIG_FILE_NAME)
}
