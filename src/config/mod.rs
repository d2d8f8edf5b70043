use crate::errors::{AppError, AppResult};
use crate::models::role::Role;
use crate::models::session::Session;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

pub mod migrate;

/// Nominal number of members the floor holds at once.
pub const DEFAULT_FACILITY_CAPACITY: u32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_capacity")]
    pub facility_capacity: u32,
    #[serde(default = "default_operator_name")]
    pub operator_name: String,
    #[serde(default = "default_operator_role")]
    pub operator_role: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_capacity() -> u32 {
    DEFAULT_FACILITY_CAPACITY
}
fn default_operator_name() -> String {
    "Administrador".to_string()
}
fn default_operator_role() -> String {
    "admin".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            facility_capacity: default_capacity(),
            operator_name: default_operator_name(),
            operator_role: default_operator_role(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("gymattend")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".gymattend")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gymattend.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("gymattend.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Ok(cfg)
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Database path with a leading `~/` expanded.
    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    /// Operator session described by the config file.
    pub fn session(&self) -> AppResult<Session> {
        let role = Role::from_db_str(&self.operator_role).ok_or_else(|| {
            AppError::Config(format!(
                "unknown operator_role '{}' (expected admin, trainer or member)",
                self.operator_role
            ))
        })?;
        Ok(Session::new(self.operator_name.clone(), role))
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Where a `--db` override points: `~/` is expanded, and a relative
    /// name lives in the config directory, for `init` and every other
    /// command alike.
    pub fn resolve_database_override(name: &str) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => Self::resolve_database_override(&name),
            None => dir.join("gymattend.sqlite"),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
