use std::{fmt, path::Path};

use serde::Deserialize;
use url::Url;

use crate::{JournalError, Result};

/// Environment variable holding the backend's base URL.
pub const URL_VAR: &str = "CUPPING_BACKEND_URL";

/// Environment variable holding the backend's public (anon) API key.
pub const ANON_KEY_VAR: &str = "CUPPING_BACKEND_ANON_KEY";

/// Environment variable naming the storage bucket for photos.
pub const BUCKET_VAR: &str = "CUPPING_STORAGE_BUCKET";

/// Bucket used when none is configured.
pub const DEFAULT_BUCKET: &str = "coffee-photos";

/// Location and credentials of the hosted backend.
///
/// The key is the public key shipped to clients, but it is still kept out of
/// `Debug` output so it does not end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct BackendConfig {
    url: Url,
    anon_key: String,
    bucket: String,
}

#[derive(Deserialize)]
struct ConfigFile {
    backend: BackendSection,
}

#[derive(Deserialize)]
struct BackendSection {
    url: String,
    anon_key: String,
    #[serde(default = "default_bucket")]
    bucket: String,
}

fn default_bucket() -> String {
    DEFAULT_BUCKET.to_owned()
}

impl BackendConfig {
    /// Creates a validated backend configuration.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Config`] if `url` is not an absolute `http` or
    /// `https` URL, if `anon_key` is blank, or if `bucket` is blank or
    /// contains a `/`.
    pub fn new(url: &str, anon_key: impl Into<String>, bucket: impl Into<String>) -> Result<Self> {
        let parsed = Url::parse(url.trim())
            .map_err(|e| JournalError::config(format!("invalid backend url `{url}`: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host().is_none() {
            return Err(JournalError::config(format!(
                "backend url `{url}` must be an http(s) address"
            )));
        }

        let anon_key = anon_key.into();
        if anon_key.trim().is_empty() {
            return Err(JournalError::config("anon key is empty"));
        }

        let bucket = bucket.into();
        if bucket.trim().is_empty() || bucket.contains('/') {
            return Err(JournalError::config(format!("invalid bucket name `{bucket}`")));
        }

        Ok(Self {
            url: parsed,
            anon_key,
            bucket,
        })
    }

    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`BackendConfig::from_lookup`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps variable names
    /// to values.
    ///
    /// The bucket falls back to [`DEFAULT_BUCKET`].
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Config`] if the URL or key variable is unset,
    /// or if the values fail [`BackendConfig::new`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| JournalError::config(format!("{name} is not set")))
        };
        let url = required(URL_VAR)?;
        let anon_key = required(ANON_KEY_VAR)?;
        let bucket = lookup(BUCKET_VAR).unwrap_or_else(default_bucket);
        Self::new(&url, anon_key, bucket)
    }

    /// Parses a TOML document with a `[backend]` table.
    ///
    /// ```toml
    /// [backend]
    /// url = "https://example.supabase.co"
    /// anon_key = "public-anon-key"
    /// bucket = "coffee-photos"  # optional
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Toml`] if the document does not parse and
    /// [`JournalError::Config`] if the values are invalid.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let BackendSection {
            url,
            anon_key,
            bucket,
        } = file.backend;
        Self::new(&url, anon_key, bucket)
    }

    /// Loads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Io`] if the file cannot be read, otherwise as
    /// [`BackendConfig::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Returns `self` with the given bucket, keeping other fields unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`JournalError::Config`] if the bucket name is invalid.
    pub fn with_bucket(self, bucket: impl Into<String>) -> Result<Self> {
        Self::new(self.url.as_str(), self.anon_key, bucket)
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Returns the public URL of object `name` in the configured bucket.
    ///
    /// # Example
    ///
    /// ```
    /// use cupping_journal::BackendConfig;
    ///
    /// let config = BackendConfig::new("https://demo.example.com", "key", "photos").unwrap();
    /// assert_eq!(
    ///     config.public_object_url("cup 1.jpg"),
    ///     "https://demo.example.com/storage/v1/object/public/photos/cup%201.jpg",
    /// );
    /// ```
    #[must_use]
    pub fn public_object_url(&self, name: &str) -> String {
        let mut url = self.url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "storage",
                "v1",
                "object",
                "public",
                self.bucket.as_str(),
                name,
            ]);
        }
        url.into()
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url.as_str())
            .field("anon_key", &"<redacted>")
            .field("bucket", &self.bucket)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{collections::HashMap, io::Write};

    use tempfile::NamedTempFile;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn reads_variables_with_default_bucket() {
        let config = BackendConfig::from_lookup(lookup(&[
            (URL_VAR, "https://abc.supabase.co"),
            (ANON_KEY_VAR, "anon"),
        ]))
        .unwrap();

        assert_eq!(config.url().as_str(), "https://abc.supabase.co/");
        assert_eq!(config.anon_key(), "anon");
        assert_eq!(config.bucket(), DEFAULT_BUCKET);
    }

    #[test]
    fn missing_variables_are_reported_by_name() {
        let err = BackendConfig::from_lookup(lookup(&[(URL_VAR, "https://abc.supabase.co")]))
            .unwrap_err();
        assert!(err.to_string().contains(ANON_KEY_VAR));
    }

    #[test]
    fn rejects_bad_values() {
        assert!(BackendConfig::new("not a url", "k", "b").is_err());
        assert!(BackendConfig::new("ftp://abc.supabase.co", "k", "b").is_err());
        assert!(BackendConfig::new("https://abc.supabase.co", " ", "b").is_err());
        assert!(BackendConfig::new("https://abc.supabase.co", "k", "a/b").is_err());
    }

    #[test]
    fn public_urls_respect_base_path() {
        let config = BackendConfig::new("http://localhost:54321/api/", "k", "photos").unwrap();
        assert_eq!(
            config.public_object_url("x.png"),
            "http://localhost:54321/api/storage/v1/object/public/photos/x.png"
        );
    }

    #[test]
    fn debug_hides_the_key() {
        let config = BackendConfig::new("https://abc.supabase.co", "secret-key", "b").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn loads_toml_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[backend]
url = "https://abc.supabase.co"
anon_key = "anon"
bucket = "review-photos"
"#
        )
        .unwrap();

        let config = BackendConfig::from_file(file.path()).unwrap();
        assert_eq!(config.bucket(), "review-photos");
    }

    #[test]
    fn toml_errors_are_typed() {
        assert!(matches!(
            BackendConfig::from_toml_str("[backend]\nurl = 3"),
            Err(JournalError::Toml(_))
        ));
        assert!(matches!(
            BackendConfig::from_toml_str("[backend]\nurl = \"nope\"\nanon_key = \"k\""),
            Err(JournalError::Config { .. })
        ));
        assert!(matches!(
            BackendConfig::from_file("/definitely/not/here.toml"),
            Err(JournalError::Io(_))
        ));
    }
}
