//! The single-slot session token and where it is kept.

use std::sync::{Arc, Mutex};

use shared_types::{resolve_identity, AppError, Identity};

/// Persistent storage for one opaque token.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<(), AppError>;
    fn remove(&self) -> Result<(), AppError>;
}

/// In-process store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| AppError::internal("token store poisoned"))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), AppError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| AppError::internal("token store poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// `window.localStorage`, keyed by the configured storage key.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserTokenStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| AppError::internal("localStorage is unavailable"))
    }
}

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()
            .ok()?
            .get_item(&self.key)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        Self::storage()?
            .set_item(&self.key, token)
            .map_err(|_| AppError::internal("could not write to localStorage"))
    }

    fn remove(&self) -> Result<(), AppError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|_| AppError::internal("could not clear localStorage"))
    }
}

/// A file named after the storage key in the local data directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileTokenStore {
    const APP_DIR: &'static str = "school-client";

    /// Store under the platform data directory, falling back to the
    /// working directory when the platform reports none.
    pub fn new(key: &str) -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| std::path::PathBuf::from("."));
        Self::at(base.join(Self::APP_DIR).join(key))
    }

    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        let token = contents.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn save(&self, token: &str) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::internal(format!("create {}: {e}", parent.display())))?;
        }
        std::fs::write(&self.path, token)
            .map_err(|e| AppError::internal(format!("write {}: {e}", self.path.display())))?;
        // The token is a bearer credential; keep it owner-only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(|e| AppError::internal(format!("chmod {}: {e}", self.path.display())))?;
        }
        Ok(())
    }

    fn remove(&self) -> Result<(), AppError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::internal(format!(
                "remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}

/// Handle to the current session, shared through context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    /// The platform's persistent store for `key`.
    pub fn persistent(key: &str) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(BrowserTokenStore::new(key))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(FileTokenStore::new(key))
        }
    }

    pub fn get(&self) -> Option<String> {
        self.store.load()
    }

    pub fn set(&self, token: &str) -> Result<(), AppError> {
        self.store.save(token)?;
        tracing::debug!("Session token stored");
        Ok(())
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.store.remove()?;
        tracing::info!("Session cleared");
        Ok(())
    }

    /// The stored token, or `NoSession`.
    pub fn token(&self) -> Result<String, AppError> {
        self.get().ok_or_else(AppError::no_session)
    }

    /// Role and user id read from the stored token.
    pub fn identity(&self) -> Result<Identity, AppError> {
        resolve_identity(self.get().as_deref())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_token", &self.get().is_some())
            .finish()
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AppErrorKind, Role};

    // header.{"role":"teacher","userId":"u7"}.signature
    const TEACHER_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.eyJyb2xlIjoidGVhY2hlciIsInVzZXJJZCI6InU3In0.sig";

    #[test]
    fn set_get_clear() {
        let session = Session::in_memory();
        assert_eq!(session.get(), None);
        session.set("abc").unwrap();
        assert_eq!(session.get().as_deref(), Some("abc"));
        session.clear().unwrap();
        assert_eq!(session.get(), None);
    }

    #[test]
    fn a_new_token_replaces_the_old_one() {
        let session = Session::in_memory();
        session.set("first").unwrap();
        session.set("second").unwrap();
        assert_eq!(session.get().as_deref(), Some("second"));
    }

    #[test]
    fn clones_share_the_slot() {
        let session = Session::in_memory();
        let other = session.clone();
        session.set("abc").unwrap();
        assert_eq!(other.get().as_deref(), Some("abc"));
        assert_eq!(session, other);
    }

    #[test]
    fn missing_token_is_no_session() {
        let session = Session::in_memory();
        assert_eq!(session.token().unwrap_err().kind, AppErrorKind::NoSession);
        assert_eq!(session.identity().unwrap_err().kind, AppErrorKind::NoSession);
    }

    #[test]
    fn identity_comes_from_the_stored_token() {
        let session = Session::in_memory();
        session.set(TEACHER_TOKEN).unwrap();
        let identity = session.identity().unwrap();
        assert_eq!(identity.role, Role::Teacher);
        assert_eq!(identity.user_id.as_deref(), Some("u7"));
    }

    #[test]
    fn garbage_token_is_treated_as_signed_out() {
        let session = Session::in_memory();
        session.set("not-a-jwt").unwrap();
        assert!(session.identity().unwrap_err().is_session_error());
    }

    #[test]
    fn file_store_round_trip() {
        let dir = std::env::temp_dir().join(format!("school-client-test-{}", std::process::id()));
        let store = FileTokenStore::at(dir.join("jwtToken"));
        assert_eq!(store.load(), None);
        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
        store.remove().unwrap();
        assert_eq!(store.load(), None);
        // Removing twice is fine.
        store.remove().unwrap();
        let _ = std::fs::remove_dir_all(dir);
    }

    #[cfg(unix)]
    #[test]
    fn file_store_keeps_the_token_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = std::env::temp_dir().join(format!("school-client-perm-{}", std::process::id()));
        let store = FileTokenStore::at(dir.join("jwtToken"));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(store.path(), "stale").unwrap();
        std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

        store.save("abc").unwrap();

        let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
        assert_eq!(store.load().as_deref(), Some("abc"));
        let _ = std::fs::remove_dir_all(dir);
    }
}
