use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_REGION: &str = "ru-central1";
pub const DEFAULT_ENDPOINT: &str = "https://storage.yandexcloud.net";

/// Credentials and bucket settings persisted by `cloudphoto init`.
///
/// Every command except `init` receives a loaded `Config` explicitly;
/// nothing else reads the per-user path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub region: String,
    pub endpoint_url: String,
    pub bucket: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
}

/// On-disk layout: a single `[default]` section holding the five fields.
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    default: Config,
}

impl Config {
    /// The fixed per-user location: `<config-dir>/cloudphoto/config.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            Error::Configuration("could not determine the user configuration directory".to_string())
        })?;
        Ok(base.join("cloudphoto").join("config.toml"))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!(
                "cannot read configuration file '{}': {e}; run 'cloudphoto init' first",
                path.display()
            ))
        })?;
        let file: ConfigFile = toml::from_str(&text).map_err(|e| {
            Error::Configuration(format!(
                "configuration file '{}' is malformed: {e}",
                path.display()
            ))
        })?;
        file.default.validate()?;
        Ok(file.default)
    }

    /// Writes the configuration, creating parent directories as needed.
    /// Overwrites any previous file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = ConfigFile {
            default: self.clone(),
        };
        let text = toml::to_string_pretty(&file)
            .map_err(|e| Error::Configuration(format!("cannot serialize configuration: {e}")))?;
        fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("region", &self.region),
            ("endpoint_url", &self.endpoint_url),
            ("bucket", &self.bucket),
            ("aws_access_key_id", &self.aws_access_key_id),
            ("aws_secret_access_key", &self.aws_secret_access_key),
        ];
        for (name, value) in fields {
            if value.is_empty() {
                return Err(Error::Configuration(format!(
                    "configuration is missing required field '{name}'"
                )));
            }
        }
        Ok(())
    }

    /// The public website URL once `mksite` has run:
    /// `https://<bucket>.website.<storage-domain>`, where the storage
    /// domain is the endpoint host without its leading `storage.` label.
    pub fn website_url(&self) -> String {
        let host = self
            .endpoint_url
            .trim_start_matches("https://")
            .trim_start_matches("http://");
        let host = host.split('/').next().unwrap_or(host);
        let domain = host.strip_prefix("storage.").unwrap_or(host);
        format!("https://{}.website.{domain}", self.bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Config {
        Config {
            region: DEFAULT_REGION.to_string(),
            endpoint_url: DEFAULT_ENDPOINT.to_string(),
            bucket: "my-photos".to_string(),
            aws_access_key_id: "key-id".to_string(),
            aws_secret_access_key: "secret".to_string(),
        }
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        sample().save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();

        assert_eq!(loaded.bucket, "my-photos");
        assert_eq!(loaded.region, DEFAULT_REGION);
        assert_eq!(loaded.endpoint_url, DEFAULT_ENDPOINT);
        assert_eq!(loaded.aws_access_key_id, "key-id");
        assert_eq!(loaded.aws_secret_access_key, "secret");
    }

    #[test]
    fn save_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        sample().save_to(&path).unwrap();
        let mut updated = sample();
        updated.bucket = "other".to_string();
        updated.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap().bucket, "other");
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn empty_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let text = r#"
[default]
region = "ru-central1"
endpoint_url = "https://storage.yandexcloud.net"
bucket = ""
aws_access_key_id = "key-id"
aws_secret_access_key = "secret"
"#;
        fs::write(&path, text).unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(Error::Configuration(_))
        ));
    }

    #[test]
    fn website_url_drops_storage_label() {
        assert_eq!(
            sample().website_url(),
            "https://my-photos.website.yandexcloud.net"
        );
    }

    #[test]
    fn website_url_keeps_unrecognized_hosts() {
        let mut config = sample();
        config.endpoint_url = "http://minio.local:9000".to_string();
        assert_eq!(
            config.website_url(),
            "https://my-photos.website.minio.local:9000"
        );
    }
}
