use crate::storage::TableKind;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub loglevel: String,
    /// Per-request deadline in milliseconds. 0 = no deadline.
    pub timeout: u64,
    pub table: TableKind,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            loglevel: "info".to_string(),
            timeout: 0,
            table: TableKind::Hash,
        }
    }
}

impl Config {
    pub fn from_args(args: &[String]) -> Self {
        let mut config = Config::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--loglevel" => {
                    if i + 1 < args.len() {
                        config.loglevel = args[i + 1].to_lowercase();
                        i += 1;
                    }
                }
                "--timeout" => {
                    if i + 1 < args.len() {
                        if let Ok(t) = args[i + 1].parse() {
                            config.timeout = t;
                        }
                        i += 1;
                    }
                }
                "--table" => {
                    if i + 1 < args.len() {
                        if let Some(kind) = TableKind::from_name(&args[i + 1]) {
                            config.table = kind;
                        }
                        i += 1;
                    }
                }
                _ => {}
            }
            i += 1;
        }
        config
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_millis(self.timeout))
    }

    /// Log level for the subscriber; falls back to INFO on unknown names.
    pub fn log_level(&self) -> tracing::Level {
        self.loglevel.parse().unwrap_or(tracing::Level::INFO)
    }
}
