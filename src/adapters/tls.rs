//! Trust anchor selection for the outbound webhook call.
//!
//! Resolution order: a configured bundle that exists, then the first existing
//! file among well-known platform bundle locations, then the TLS stack's own
//! root store (native plus bundled roots).

use crate::utils::error::{RelayError, Result};
use std::path::{Path, PathBuf};

/// Well-known CA bundle locations, checked in order.
pub const PLATFORM_CA_BUNDLES: &[&str] = &[
    "/etc/ssl/certs/ca-certificates.crt", // Debian, Ubuntu, Alpine
    "/etc/pki/tls/certs/ca-bundle.crt",   // Fedora, RHEL
    "/etc/ssl/cert.pem",                  // macOS, BSD
    "/opt/homebrew/etc/openssl@3/cert.pem",
];

/// 取得平台預設憑證路徑
pub fn platform_candidates() -> Vec<PathBuf> {
    PLATFORM_CA_BUNDLES.iter().map(PathBuf::from).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrustSource {
    Configured(PathBuf),
    Fallback(PathBuf),
    Platform,
}

impl TrustSource {
    pub fn bundle_path(&self) -> Option<&Path> {
        match self {
            TrustSource::Configured(path) | TrustSource::Fallback(path) => Some(path),
            TrustSource::Platform => None,
        }
    }
}

/// First match wins. A configured path that does not exist is skipped with a
/// warning.
pub fn resolve_trust(configured: Option<&Path>, candidates: &[PathBuf]) -> TrustSource {
    if let Some(path) = configured {
        if path.is_file() {
            return TrustSource::Configured(path.to_path_buf());
        }
        tracing::warn!("Configured CA bundle {} does not exist, trying fallbacks", path.display());
    }

    candidates
        .iter()
        .find(|candidate| candidate.is_file())
        .map(|candidate| TrustSource::Fallback(candidate.clone()))
        .unwrap_or(TrustSource::Platform)
}

pub async fn load_bundle(path: &Path) -> Result<Vec<reqwest::Certificate>> {
    let pem = tokio::fs::read(path).await?;
    let certificates = reqwest::Certificate::from_pem_bundle(&pem)?;
    if certificates.is_empty() {
        return Err(RelayError::InvalidConfigValueError {
            field: "ca_bundle".to_string(),
            value: path.display().to_string(),
            reason: "Bundle contains no certificates".to_string(),
        });
    }
    Ok(certificates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[test]
    fn test_configured_bundle_wins() {
        let dir = TempDir::new().unwrap();
        let configured = touch(&dir, "configured.pem");
        let fallback = touch(&dir, "fallback.pem");

        let source = resolve_trust(Some(&configured), &[fallback]);
        assert_eq!(source, TrustSource::Configured(configured));
    }

    #[test]
    fn test_first_existing_fallback_wins() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.pem");
        let second = touch(&dir, "second.pem");
        let third = touch(&dir, "third.pem");

        let source = resolve_trust(None, &[missing, second.clone(), third]);
        assert_eq!(source, TrustSource::Fallback(second));
    }

    #[test]
    fn test_missing_configured_bundle_falls_through() {
        let dir = TempDir::new().unwrap();
        let configured = dir.path().join("gone.pem");
        let fallback = touch(&dir, "fallback.pem");

        let source = resolve_trust(Some(&configured), &[fallback.clone()]);
        assert_eq!(source, TrustSource::Fallback(fallback));
    }

    #[test]
    fn test_nothing_found_uses_platform_store() {
        let dir = TempDir::new().unwrap();
        let source = resolve_trust(None, &[dir.path().join("a.pem"), dir.path().join("b.pem")]);
        assert_eq!(source, TrustSource::Platform);
        assert!(source.bundle_path().is_none());
    }

    #[test]
    fn test_directory_is_not_a_bundle() {
        let dir = TempDir::new().unwrap();
        let source = resolve_trust(Some(dir.path()), &[]);
        assert_eq!(source, TrustSource::Platform);
    }

    #[tokio::test]
    async fn test_empty_bundle_is_rejected() {
        let dir = TempDir::new().unwrap();
        let empty = touch(&dir, "empty.pem");
        assert!(load_bundle(&empty).await.is_err());
    }
}
