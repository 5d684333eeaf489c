use crate::core::aggregator::DailyCap;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_user")]
    pub default_user: String,
    /// Hour ceiling per day; absent = unlimited. Trainer profiles run with 8.
    #[serde(default)]
    pub daily_cap_hours: Option<f64>,
    #[serde(default = "default_edit_window")]
    pub edit_window_days: i64,
}

fn default_user() -> String {
    env::var("USER").unwrap_or_else(|_| "me".to_string())
}

fn default_edit_window() -> i64 {
    2
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_user: default_user(),
            daily_cap_hours: None,
            edit_window_days: default_edit_window(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("opstrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".opstrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("opstrack.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("opstrack.sqlite")
    }

    pub fn daily_cap(&self) -> DailyCap {
        match self.daily_cap_hours {
            Some(h) => DailyCap::Hours(h),
            None => DailyCap::Unlimited,
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }

    /// Report missing or out-of-range fields; used by `config --check`.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.database.trim().is_empty() {
            problems.push("database path is empty".to_string());
        }
        if self.default_user.trim().is_empty() {
            problems.push("default_user is empty".to_string());
        }
        if let Some(cap) = self.daily_cap_hours {
            if cap <= 0.0 {
                problems.push(format!("daily_cap_hours must be positive (got {})", cap));
            }
        }
        if self.edit_window_days < 0 {
            problems.push(format!(
                "edit_window_days must be non-negative (got {})",
                self.edit_window_days
            ));
        }
        problems
    }
}
