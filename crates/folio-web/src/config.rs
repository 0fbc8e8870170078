//! Host configuration from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Root of the static tree (`index.html`, `images/`)
    pub static_dir: PathBuf,
    /// wasm-bindgen output for `folio-ui`
    pub pkg_dir: PathBuf,
}

impl ServerConfig {
    /// Read `SERVER_PORT`, `STATIC_DIR` and `PKG_DIR`, after loading `.env` if present
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env loaded: {}", e);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid SERVER_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));
        let pkg_dir = lookup("PKG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| static_dir.join("pkg"));

        Self {
            port,
            static_dir,
            pkg_dir,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    pub fn images_dir(&self) -> PathBuf {
        self.static_dir.join("images")
    }

    /// File served for unknown image paths
    pub fn placeholder_path(&self) -> PathBuf {
        self.static_dir
            .join(folio::PLACEHOLDER_IMAGE.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.port, 3000);
        assert!(config.static_dir.ends_with("static"));
        assert_eq!(config.pkg_dir, config.static_dir.join("pkg"));
    }

    #[test]
    fn test_pkg_dir_follows_static_dir() {
        let config = config(&[("STATIC_DIR", "/srv/site"), ("SERVER_PORT", "8080")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.pkg_dir, PathBuf::from("/srv/site/pkg"));
        assert_eq!(
            config.placeholder_path(),
            PathBuf::from("/srv/site/images/placeholder.svg")
        );
    }

    #[test]
    fn test_explicit_pkg_dir_and_bad_port() {
        let config = config(&[("PKG_DIR", "/tmp/pkg"), ("SERVER_PORT", "http")]);
        assert_eq!(config.pkg_dir, PathBuf::from("/tmp/pkg"));
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
