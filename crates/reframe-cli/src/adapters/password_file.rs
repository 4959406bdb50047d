//! Password File Owner Gate
//!
//! Checks the owner password against a local file holding a SHA-256
//! digest (`sha256:<hex>`). A legacy plaintext file is still accepted.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use reframe::ports::{ACCESS_DENIED, PASSWORD_FILE_MISSING};
use reframe::{DomainError, OwnerGate};

const HASH_PREFIX: &str = "sha256:";

/// Hex-encoded SHA-256 of a password
fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// File-backed implementation of OwnerGate
pub struct PasswordFileGate {
    path: PathBuf,
}

impl PasswordFileGate {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Trimmed file content; a missing or blank file has no credential
    fn stored_content(&self) -> Result<Option<String>, DomainError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::repository(format!("Failed to read {}: {e}", self.path.display()))
        })?;
        let content = content.trim();
        Ok((!content.is_empty()).then(|| content.to_string()))
    }

    /// Digest of the stored password
    fn stored_digest(&self) -> Result<String, DomainError> {
        let content = self
            .stored_content()?
            .ok_or_else(|| DomainError::NotFound(PASSWORD_FILE_MISSING.to_string()))?;
        let content = content.as_str();

        match content.strip_prefix(HASH_PREFIX) {
            Some(digest) => Ok(digest.trim().to_lowercase()),
            None => {
                tracing::warn!(
                    path = %self.path.display(),
                    "Owner password file is plaintext; run `reframe owner-password` to hash it"
                );
                Ok(hash_password(content))
            }
        }
    }
}

impl OwnerGate for PasswordFileGate {
    fn authorize(&self, password: &str) -> Result<(), DomainError> {
        let expected = self.stored_digest()?;

        if hash_password(password) == expected {
            tracing::info!("Owner access granted");
            Ok(())
        } else {
            tracing::warn!("Owner access denied");
            Err(DomainError::Unauthorized(ACCESS_DENIED.to_string()))
        }
    }

    fn set_password(&self, password: &str) -> Result<(), DomainError> {
        if password.is_empty() {
            return Err(DomainError::validation("Password cannot be empty."));
        }

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                DomainError::repository(format!("Failed to create {}: {e}", dir.display()))
            })?;
        }

        let body = format!("{}{}\n", HASH_PREFIX, hash_password(password));
        fs::write(&self.path, body).map_err(|e| {
            DomainError::repository(format!("Failed to write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                DomainError::repository(format!(
                    "Failed to restrict {}: {e}",
                    self.path.display()
                ))
            })?;
        }

        tracing::info!(path = %self.path.display(), "Owner password updated");
        Ok(())
    }

    fn is_configured(&self) -> bool {
        matches!(self.stored_content(), Ok(Some(_)))
    }
}
