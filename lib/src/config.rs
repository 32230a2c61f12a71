use crate::error::{MarkportError, Result};
use crate::import_export::ImportOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Netscape bookmark export to read
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Where the intermediate JSON document is written
    #[serde(default = "default_intermediate")]
    pub intermediate: PathBuf,

    /// Where the Raindrop.io import file is written
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Raindrop collection every bookmark is placed in
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Folder labels that never become tags
    #[serde(default = "default_ignored_labels")]
    pub ignored_labels: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            intermediate: default_intermediate(),
            output: default_output(),
            collection: default_collection(),
            ignored_labels: default_ignored_labels(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("GoogleBookmarks.html")
}

fn default_intermediate() -> PathBuf {
    PathBuf::from("intermediate.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("Raindrop-out.html")
}

fn default_collection() -> String {
    "main".to_string()
}

/// Google Bookmarks files unlabeled links under this folder
fn default_ignored_labels() -> Vec<String> {
    vec!["ラベルなし".to_string()]
}

/// On-disk configuration format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// `.toml` is TOML; `.yml`, `.yaml` or no extension is YAML
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yml") | Some("yaml") | None => Ok(ConfigFormat::Yaml),
            Some(other) => Err(MarkportError::Config(format!(
                "unsupported config file extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }
}

impl Config {
    /// Load configuration from a file path, in the format its extension names
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let contents = fs::read_to_string(path)?;
        let config: Config = match format {
            ConfigFormat::Toml => toml::from_str(&contents)?,
            ConfigFormat::Yaml => serde_yaml::from_str(&contents)?,
        };
        Ok(config)
    }

    /// Load configuration from default location (~/.config/markport/config.yml)
    /// Falls back to default config if file doesn't exist
    pub fn load() -> Self {
        let config_path = crate::utils::get_config_dir().join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!(
                        "Failed to load config from {:?}: {}; using default configuration",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path, in the format its extension names
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let contents = match ConfigFormat::from_path(path)? {
            ConfigFormat::Toml => toml::to_string(self)?,
            ConfigFormat::Yaml => serde_yaml::to_string(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, contents)?;
        Ok(())
    }

    pub fn import_options(&self) -> ImportOptions {
        ImportOptions::new(self.ignored_labels.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("GoogleBookmarks.html"));
        assert_eq!(config.intermediate, PathBuf::from("intermediate.json"));
        assert_eq!(config.output, PathBuf::from("Raindrop-out.html"));
        assert_eq!(config.collection, "main");
        assert_eq!(config.ignored_labels, vec!["ラベルなし"]);
    }

    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        let original = Config {
            collection: "Imported".to_string(),
            ignored_labels: vec!["Unsorted".to_string(), "Misc".to_string()],
            ..Config::default()
        };

        original.save_to_path(config_path).unwrap();
        let loaded = Config::load_from_path(config_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "invalid: yaml: content:").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_partial_config() {
        let temp_file = NamedTempFile::new().unwrap();
        let config_path = temp_file.path();

        fs::write(config_path, "collection: Reading\n").unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.collection, "Reading");
        assert_eq!(config.ignored_labels, default_ignored_labels());
        assert_eq!(config.output, default_output());
    }

    #[test]
    fn test_load_toml_config() {
        let temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        fs::write(
            temp_file.path(),
            "input = \"export.html\"\nignored_labels = []\n",
        )
        .unwrap();

        let config = Config::load_from_path(temp_file.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("export.html"));
        assert!(config.ignored_labels.is_empty());
        assert_eq!(config.collection, "main");
    }

    #[test]
    fn test_toml_save_and_load() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("markport.toml");
        let original = Config {
            collection: "Imported".to_string(),
            ..Config::default()
        };

        original.save_to_path(&config_path).unwrap();

        assert!(fs::read_to_string(&config_path)
            .unwrap()
            .contains("collection = \"Imported\""));
        assert_eq!(Config::load_from_path(&config_path).unwrap(), original);
    }

    #[rstest]
    #[case("config.json")]
    #[case("config.ini")]
    fn test_unsupported_extension_is_config_error(#[case] name: &str) {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join(name);
        fs::write(&config_path, "collection: Reading\n").unwrap();

        let load = Config::load_from_path(&config_path);
        assert!(matches!(load, Err(MarkportError::Config(_))));

        let save = Config::default().save_to_path(&dir.path().join("out").join(name));
        assert!(matches!(save, Err(MarkportError::Config(_))));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_import_options_follow_ignored_labels() {
        let options = Config::default().import_options();
        assert!(options.is_ignored("ラベルなし"));
        assert!(!options.is_ignored("Work"));
    }
}
