//! Demo-account authentication and session management.
//!
//! Credentials are checked against a fixed account table using constant-time
//! comparison to mitigate timing attacks. The signed-in identity lives in
//! memory and is mirrored to a single-key JSON cache so a restart restores it.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use subtle::ConstantTimeEq;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::{Identity, Role};

/// The one password every demo account accepts.
const DEMO_PASSWORD: &str = "password";

/// Fixed demo accounts, one per role.
static DEMO_ACCOUNTS: Lazy<Vec<Identity>> = Lazy::new(|| {
    vec![
        Identity {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@hotel.com".to_string(),
            role: Role::Admin,
        },
        Identity {
            id: "2".to_string(),
            name: "Hotel Manager".to_string(),
            email: "manager@hotel.com".to_string(),
            role: Role::HotelManager,
        },
        Identity {
            id: "3".to_string(),
            name: "Receptionist".to_string(),
            email: "receptionist@hotel.com".to_string(),
            role: Role::Receptionist,
        },
        Identity {
            id: "4".to_string(),
            name: "John Guest".to_string(),
            email: "guest@hotel.com".to_string(),
            role: Role::Guest,
        },
    ]
});

/// Check a sign-in attempt against the demo-account table.
///
/// Empty fields are rejected before any lookup; the password comparison runs
/// even when the email is unknown so both failure paths take the same time.
pub fn verify_credentials(email: &str, password: &str) -> Result<Identity, AppError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation("Please fill in all fields".to_string()));
    }

    let account = DEMO_ACCOUNTS.iter().find(|a| a.email == email);
    let password_ok = constant_time_compare(password, DEMO_PASSWORD);

    match account {
        Some(identity) if password_ok => Ok(identity.clone()),
        _ => Err(AppError::InvalidCredentials(
            "Invalid email or password".to_string(),
        )),
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    // Constant-time comparison
    a_bytes.ct_eq(b_bytes).into()
}

/// Holds the current identity and its durable single-key cache.
pub struct SessionStore {
    current: RwLock<Option<Identity>>,
    cache_path: PathBuf,
}

impl SessionStore {
    /// Open the store, restoring a previously cached identity if present.
    pub fn open(cache_path: &Path) -> Self {
        let cached = read_cached_identity(cache_path);
        if let Some(identity) = &cached {
            tracing::info!(
                "Restored session for {} ({})",
                identity.email,
                identity.role.as_str()
            );
        }
        Self {
            current: RwLock::new(cached),
            cache_path: cache_path.to_path_buf(),
        }
    }

    /// The signed-in identity, if any.
    pub async fn current(&self) -> Option<Identity> {
        self.current.read().await.clone()
    }

    /// Store the identity in memory and in the durable cache.
    ///
    /// The cache is written first; a failed write leaves the previous
    /// session in place.
    pub async fn sign_in(&self, identity: Identity) -> Result<(), AppError> {
        write_cached_identity(&self.cache_path, &identity)?;
        *self.current.write().await = Some(identity);
        Ok(())
    }

    /// Clear the identity in memory and remove the cache file. Idempotent.
    pub async fn sign_out(&self) -> Result<(), AppError> {
        *self.current.write().await = None;
        match std::fs::remove_file(&self.cache_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn read_cached_identity(path: &Path) -> Option<Identity> {
    let raw = std::fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            tracing::warn!("Ignoring unreadable session cache {}: {}", path.display(), e);
            None
        }
    }
}

fn write_cached_identity(path: &Path, identity: &Identity) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(identity)?;
    std::fs::write(path, raw)?;
    Ok(())
}
