use std::path::PathBuf;

/// Persistence mode for draft snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersistMode {
    /// Write-through inside the mutating call
    Inline,
    /// Hand snapshots to a background `PersistWorker`
    #[default]
    Background,
}

impl std::str::FromStr for PersistMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(PersistMode::Inline),
            "background" => Ok(PersistMode::Background),
            other => Err(format!("unknown persist mode: {other}")),
        }
    }
}

/// Draft store configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | ./data | Directory holding the draft database |
/// | DRAFT_DB_FILE | order_draft.redb | Database file name inside WORK_DIR |
/// | DRAFT_STORAGE_KEY | order-draft | Key the snapshot is saved under |
/// | PERSIST_MODE | background | `inline` or `background` |
/// | LOG_LEVEL | info | Default tracing level |
/// | LOG_DIR | (unset) | Daily rolling log directory |
/// | ENVIRONMENT | development | Runtime environment |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/tmp/draft PERSIST_MODE=inline cargo run -p order-draft
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory
    pub work_dir: String,
    /// Database file name
    pub db_file: String,
    /// Snapshot key
    pub storage_key: String,
    /// Persistence mode
    pub persist_mode: PersistMode,
    /// Tracing level used when RUST_LOG is not set
    pub log_level: String,
    /// Optional log directory
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            db_file: std::env::var("DRAFT_DB_FILE").unwrap_or_else(|_| "order_draft.redb".into()),
            storage_key: std::env::var("DRAFT_STORAGE_KEY")
                .unwrap_or_else(|_| "order-draft".into()),
            persist_mode: std::env::var("PERSIST_MODE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(work_dir: impl Into<String>, persist_mode: PersistMode) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.persist_mode = persist_mode;
        config
    }

    /// Full path of the draft database
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(&self.db_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
