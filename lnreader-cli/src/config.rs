//! Runtime configuration

use std::path::PathBuf;

/// Environment variable overriding the default data directory
pub const DATA_DIR_ENV: &str = "LNREADER_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "./lnreader_data";

/// Pick the data directory: explicit flag, then environment, then default
pub fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
