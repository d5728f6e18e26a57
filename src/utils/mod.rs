use dirs::home_dir;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
    sync::Once,
};

const DEFAULT_DIR_NAME: &str = ".guilttrip";
pub const HOME_ENV: &str = "GUILTTRIP_HOME";

static TRACING_INIT: Once = Once::new();

/// Installs the global subscriber on stderr. `RUST_LOG` adds to the default
/// `guilttrip=warn` directive.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "guilttrip=warn".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init();
    });
}

/// Base directory for guiltTrip files.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_dir_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        ensure_dir(&nested).unwrap();
        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn init_tracing_can_run_twice() {
        init_tracing();
        init_tracing();
    }
}
