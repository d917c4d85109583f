//! # Client configuration: API and file server locations
//!
//! The client talks to exactly one API server and downloads uploaded files from
//! the host that serves them. Both locations are held in [`ClientConfig`].
//!
//! ## Sources
//!
//! - [`ClientConfig::from_env`] reads the build-time variables `NOTES_API_URL` and
//!   `NOTES_FILE_BASE_URL` (baked in through `option_env!`, since the WASM bundle has
//!   no process environment at runtime).
//! - [`ClientConfig::from_toml`] parses a `notesshare.toml` document:
//!
//! ```toml
//! [server]
//! api_url = "https://notes.example.com/api"
//! file_base_url = "https://cdn.example.com"   # optional
//! ```
//!
//! ## Normalisation
//!
//! The API URL always ends in `/api`. A trailing slash is stripped before the
//! suffix is appended, so `https://host/` and `https://host` both become
//! `https://host/api`. When no file base is given it is derived by removing the
//! `/api` suffix from the API URL.

use serde::{Deserialize, Serialize};

/// API URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Raw `notesshare.toml` contents, before normalisation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub server: ServerSection,
}

/// `[server]` section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub file_base_url: Option<String>,
}

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    api_url: String,
    file_base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, None)
    }
}

impl ClientConfig {
    /// Build a config from an API URL and an optional file base URL.
    pub fn new(api_url: &str, file_base_url: Option<&str>) -> Self {
        let api_url = normalize_api_url(api_url);
        let file_base_url = match file_base_url {
            Some(base) if !base.trim().is_empty() => base.trim().trim_end_matches('/').to_string(),
            _ => api_url
                .strip_suffix("/api")
                .unwrap_or(&api_url)
                .to_string(),
        };
        Self {
            api_url,
            file_base_url,
        }
    }

    /// Config baked in at build time, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        Self::new(
            option_env!("NOTES_API_URL").unwrap_or(DEFAULT_API_URL),
            option_env!("NOTES_FILE_BASE_URL"),
        )
    }

    /// Parse from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let file: ConfigFile = toml::from_str(s)?;
        let api_url = file.server.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        Ok(Self::new(api_url, file.server.file_base_url.as_deref()))
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "notesshare.toml"
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn file_base_url(&self) -> &str {
        &self.file_base_url
    }

    /// Join an endpoint path (e.g. `"/notes"`) onto the API URL.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_url, path)
        } else {
            format!("{}/{}", self.api_url, path)
        }
    }

    /// Resolve a stored file URL (as returned on notes) to something a browser can open.
    ///
    /// Empty input yields `"#"`; absolute `http(s)` URLs are returned unchanged.
    pub fn build_file_url(&self, url: &str) -> String {
        if url.is_empty() {
            return "#".to_string();
        }
        if is_absolute(url) {
            return url.to_string();
        }
        if url.starts_with('/') {
            format!("{}{}", self.file_base_url, url)
        } else {
            format!("{}/{}", self.file_base_url, url)
        }
    }

    /// Resolve a bare uploaded filename (as returned on personal documents).
    pub fn upload_file_url(&self, filename: &str) -> String {
        if filename.is_empty() {
            return "#".to_string();
        }
        if is_absolute(filename) {
            return filename.to_string();
        }
        format!("{}/uploads/{}", self.file_base_url, filename)
    }
}

fn normalize_api_url(url: &str) -> String {
    let url = url.trim();
    if url.ends_with("/api") {
        return url.to_string();
    }
    format!("{}/api", url.strip_suffix('/').unwrap_or(url))
}

fn is_absolute(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_normalisation() {
        assert_eq!(
            ClientConfig::new("http://localhost:5000/api", None).api_url(),
            "http://localhost:5000/api"
        );
        assert_eq!(
            ClientConfig::new("https://notes.example.com", None).api_url(),
            "https://notes.example.com/api"
        );
        assert_eq!(
            ClientConfig::new("https://notes.example.com/", None).api_url(),
            "https://notes.example.com/api"
        );
    }

    #[test]
    fn test_file_base_derived_from_api_url() {
        let config = ClientConfig::new("https://notes.example.com/api", None);
        assert_eq!(config.file_base_url(), "https://notes.example.com");

        let config = ClientConfig::new("https://notes.example.com/api", Some("https://cdn.example.com/"));
        assert_eq!(config.file_base_url(), "https://cdn.example.com");
    }

    #[test]
    fn test_build_file_url() {
        let config = ClientConfig::default();
        assert_eq!(config.build_file_url(""), "#");
        assert_eq!(
            config.build_file_url("https://s3.example.com/a.pdf"),
            "https://s3.example.com/a.pdf"
        );
        assert_eq!(
            config.build_file_url("HTTP://S3.example.com/a.pdf"),
            "HTTP://S3.example.com/a.pdf"
        );
        assert_eq!(
            config.build_file_url("/uploads/a.pdf"),
            "http://localhost:5000/uploads/a.pdf"
        );
        assert_eq!(
            config.build_file_url("uploads/a.pdf"),
            "http://localhost:5000/uploads/a.pdf"
        );
    }

    #[test]
    fn test_upload_file_url() {
        let config = ClientConfig::default();
        assert_eq!(config.upload_file_url(""), "#");
        assert_eq!(
            config.upload_file_url("resume.pdf"),
            "http://localhost:5000/uploads/resume.pdf"
        );
        assert_eq!(
            config.upload_file_url("https://files.example.com/x.png"),
            "https://files.example.com/x.png"
        );
    }

    #[test]
    fn test_endpoint_join() {
        let config = ClientConfig::default();
        assert_eq!(config.endpoint("/notes"), "http://localhost:5000/api/notes");
        assert_eq!(config.endpoint("notes/1"), "http://localhost:5000/api/notes/1");
    }

    #[test]
    fn test_from_toml() {
        let config = ClientConfig::from_toml(
            r#"
            [server]
            api_url = "https://notes.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url(), "https://notes.example.com/api");
        assert_eq!(config.file_base_url(), "https://notes.example.com");

        // Empty document falls back to defaults
        assert_eq!(ClientConfig::from_toml("").unwrap(), ClientConfig::default());

        assert!(ClientConfig::from_toml("[server\napi_url = 1").is_err());
    }
}
