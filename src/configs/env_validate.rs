use std::path::PathBuf;

const DEFAULT_STATE_FILE: &str = "theme_switcher_state.json";

lazy_static::lazy_static! {
    static ref STATE_FILE: PathBuf = resolve_state_file();
}

fn resolve_state_file() -> PathBuf {
    match std::env::var("THEME_SWITCHER_STATE_FILE") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => {
            log::warn!(
                "THEME_SWITCHER_STATE_FILE not set, using {} in the working directory",
                DEFAULT_STATE_FILE
            );
            PathBuf::from(DEFAULT_STATE_FILE)
        }
    }
}

/// The file the native build keeps its durable state in. Resolved once so
/// the same run always reads and writes the same file.
pub fn get_state_file() -> PathBuf {
    STATE_FILE.clone()
}
