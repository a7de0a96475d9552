use std::path::PathBuf;

const ENV_DATA_DIR: &str = "DREAMFLOW_DATA_DIR";
const DB_FILE: &str = "dreamflow.db";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

pub fn data_dir_from_env() -> Option<PathBuf> {
    std::env::var(ENV_DATA_DIR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Resolve the data directory: an explicit path wins, then the environment,
/// then the current directory.
pub fn resolve_data_dir(explicit: Option<&str>) -> PathBuf {
    if let Some(dir) = explicit.map(str::trim).filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    data_dir_from_env().unwrap_or_else(|| PathBuf::from("."))
}

pub fn db_path(explicit_dir: Option<&str>) -> PathBuf {
    resolve_data_dir(explicit_dir).join(DB_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        assert_eq!(db_path(Some("/tmp/dreams")), PathBuf::from("/tmp/dreams/dreamflow.db"));
    }

    #[test]
    fn blank_explicit_dir_falls_through() {
        let path = resolve_data_dir(Some("  "));
        assert!(!path.as_os_str().is_empty());
    }
}
