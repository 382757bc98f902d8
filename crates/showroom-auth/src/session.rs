//! Session storage and the repository that fronts it.

use crate::user::Account;
use crate::AuthError;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A logged-in session: bearer token plus the account it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Bearer token presented to the backend.
    pub token: String,
    /// The authenticated account.
    pub account: Account,
    /// Unix timestamp of login.
    pub issued_at: i64,
    /// Unix timestamp after which the session is invalid.
    pub expires_at: i64,
}

impl Session {
    /// Default session lifetime: 7 days.
    pub const DEFAULT_TTL_SECS: i64 = 7 * 24 * 60 * 60;

    /// Create a session for an account with a fresh random token.
    pub fn issue(account: Account, ttl_secs: i64) -> Self {
        let now = current_timestamp();
        Self {
            token: generate_token(),
            account,
            issued_at: now,
            expires_at: now + ttl_secs,
        }
    }

    /// Check if the session has expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp() > self.expires_at
    }

    /// Check if the session is still valid.
    pub fn is_valid(&self) -> bool {
        !self.is_expired()
    }

    /// Seconds until expiry, zero if already expired.
    pub fn time_to_expiry(&self) -> i64 {
        (self.expires_at - current_timestamp()).max(0)
    }
}

/// The single seam over wherever sessions persist.
///
/// In the browser build this sits on local storage; tests and native builds
/// use [`MemoryStore`].
pub trait SessionStore {
    /// Load the stored session, if any.
    fn load(&self) -> Result<Option<Session>, AuthError>;
    /// Persist a session, replacing any existing one.
    fn save(&self, session: &Session) -> Result<(), AuthError>;
    /// Remove the stored session.
    fn clear(&self) -> Result<(), AuthError>;
}

/// In-memory session store.
#[derive(Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Session>, AuthError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| AuthError::Store("poisoned lock".to_string()))?;
        match slot.as_deref() {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, session: &Session) -> Result<(), AuthError> {
        let raw = serde_json::to_string(session)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| AuthError::Store("poisoned lock".to_string()))?;
        *slot = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), AuthError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| AuthError::Store("poisoned lock".to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Repository fronting the session store.
///
/// Expiry validation lives inside the getters: an expired session is cleared
/// on read and reported as absent, so no caller ever sees a stale login.
pub struct SessionRepository<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionRepository<S> {
    /// Create a repository over a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The current valid session, if any.
    pub fn current_session(&self) -> Result<Option<Session>, AuthError> {
        match self.store.load()? {
            Some(session) if session.is_valid() => Ok(Some(session)),
            Some(_) => {
                self.store.clear()?;
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// The currently logged-in account, if any.
    pub fn current_user(&self) -> Result<Option<Account>, AuthError> {
        Ok(self.current_session()?.map(|s| s.account))
    }

    /// Store a fresh session for an account.
    pub fn login(&self, account: Account, ttl_secs: i64) -> Result<Session, AuthError> {
        let session = Session::issue(account, ttl_secs);
        self.store.save(&session)?;
        Ok(session)
    }

    /// Drop the stored session.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.store.clear()
    }
}

/// Generate a random bearer token.
fn generate_token() -> String {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::Rng;

    let bytes: [u8; 24] = rand::thread_rng().gen();
    format!("tok_{}", URL_SAFE_NO_PAD.encode(bytes))
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
