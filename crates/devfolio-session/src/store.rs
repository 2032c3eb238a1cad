//! Session storage
//!
//! Two keys are persisted, mirroring the client storage contract: the
//! opaque auth token as a plain string and the user record as JSON. The
//! trait keeps the lifecycle testable without a real storage backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use devfolio_types::{AuthUser, Session};
use thiserror::Error;
use tracing::{debug, warn};

/// Session storage errors
#[derive(Debug, Error)]
pub enum SessionError {
    /// Underlying storage failed
    #[error("Session storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Persisted record could not be encoded/decoded
    #[error("Corrupt session record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, SessionError>;

/// Access to the persisted session
pub trait SessionStore: Send + Sync {
    /// Read the current session, `None` when no token is stored
    fn get_session(&self) -> Result<Option<Session>>;

    /// Persist a session (both keys)
    fn set_session(&self, session: &Session) -> Result<()>;

    /// Remove both keys; succeeds when nothing was stored
    fn clear_session(&self) -> Result<()>;
}

/// File-backed store keeping `token` and `user.json` under one directory
pub struct FileSessionStore {
    dir: PathBuf,
}

/// Token key file name
const TOKEN_FILE: &str = "token";
/// User key file name
const USER_FILE: &str = "user.json";

impl FileSessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default location: `~/.devfolio/session/`
    pub fn default_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".devfolio").join("session"))
    }

    fn token_path(&self) -> PathBuf {
        self.dir.join(TOKEN_FILE)
    }

    fn user_path(&self) -> PathBuf {
        self.dir.join(USER_FILE)
    }

    fn remove_if_present(path: &Path) -> Result<()> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn get_session(&self) -> Result<Option<Session>> {
        let token = match fs::read_to_string(self.token_path()) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    return Ok(None);
                }
                token
            }
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // A token without a readable user record is still a session; the
        // user half degrades to None like the original client tolerated.
        let user = match fs::read_to_string(self.user_path()) {
            Ok(raw) => match AuthUser::from_json(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Ignoring corrupt user record: {}", e);
                    None
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Some(Session::new(token, user)))
    }

    fn set_session(&self, session: &Session) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.token_path(), &session.token)?;

        match &session.user {
            Some(user) => fs::write(self.user_path(), serde_json::to_string(user)?)?,
            None => Self::remove_if_present(&self.user_path())?,
        }

        debug!("Session persisted to {}", self.dir.display());
        Ok(())
    }

    fn clear_session(&self) -> Result<()> {
        Self::remove_if_present(&self.token_path())?;
        Self::remove_if_present(&self.user_path())?;
        debug!("Session cleared from {}", self.dir.display());
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get_session(&self) -> Result<Option<Session>> {
        Ok(self.inner.lock().expect("session store poisoned").clone())
    }

    fn set_session(&self, session: &Session) -> Result<()> {
        *self.inner.lock().expect("session store poisoned") = Some(session.clone());
        Ok(())
    }

    fn clear_session(&self) -> Result<()> {
        *self.inner.lock().expect("session store poisoned") = None;
        Ok(())
    }
}
