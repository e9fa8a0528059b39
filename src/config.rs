use eyre::{Result, WrapErr, ensure};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "gradebook.toml";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the roster, the catalog and the submission files.
    pub data_dir: PathBuf,
    pub students_file: String,
    pub assignments_file: String,
    /// Width, in characters, of the id prefix of roster lines.
    pub id_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            students_file: String::from("students.txt"),
            assignments_file: String::from("assignments.txt"),
            id_width: 3,
        }
    }
}

impl Config {
    pub fn load(file_name: &Path) -> Result<Self> {
        let content = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("cannot load configuration file {}", file_name.display()))?;
        Self::parse(&content)
            .wrap_err_with(|| format!("cannot parse configuration file {}", file_name.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        ensure!(config.id_width > 0, "id_width must be at least 1");
        Ok(config)
    }

    /// Use `explicit` if given, else the default file if it exists, else the
    /// built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(file_name) => Self::load(file_name),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::load(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => {
                debug!("no configuration file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn students_path(&self) -> PathBuf {
        self.data_dir.join(&self.students_file)
    }

    pub fn assignments_path(&self) -> PathBuf {
        self.data_dir.join(&self.assignments_file)
    }

    /// File names of the data directory that never hold a submission.
    pub fn reserved_files(&self) -> [&str; 2] {
        [self.students_file.as_str(), self.assignments_file.as_str()]
    }
}
