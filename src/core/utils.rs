use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".receipt_pivot";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.receipt_pivot`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("RECEIPT_PIVOT_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path of the persisted pivot configuration inside `base`.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)
}
