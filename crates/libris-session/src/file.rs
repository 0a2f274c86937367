//! JSON session file with atomic replacement.
//!
//! ```text
//! { "version": 1, "session": { "user": {...}, "member": {...}, "signedInAt": "..." } }
//! ```

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, SessionError};
use crate::session::Session;
use crate::store::SessionStore;

/// Current session file schema version.
pub const SESSION_FILE_VERSION: u32 = 1;

/// Default file name inside the client's data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    session: &'a Session,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    #[serde(default)]
    session: Session,
}

/// Session persisted as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Session> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no session file, starting signed out");
                return Ok(Session::default());
            }
            Err(source) => {
                return Err(SessionError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let envelope: Envelope =
            serde_json::from_slice(&bytes).map_err(|source| SessionError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        if envelope.version > SESSION_FILE_VERSION {
            return Err(SessionError::UnsupportedVersion {
                found: envelope.version,
                max_supported: SESSION_FILE_VERSION,
            });
        }

        info!(path = %self.path.display(), "loaded session");
        Ok(envelope.session)
    }

    fn save(&self, session: &Session) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(&EnvelopeRef {
            version: SESSION_FILE_VERSION,
            session,
        })
        .map_err(SessionError::Serialization)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| SessionError::Io {
                operation: "create directory for",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|source| SessionError::Io {
            operation: "create",
            path: temp_path.clone(),
            source,
        })?;
        file.write_all(&bytes).map_err(|source| SessionError::Io {
            operation: "write",
            path: temp_path.clone(),
            source,
        })?;
        file.sync_all().map_err(|source| SessionError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source,
        })?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|source| SessionError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), "saved session");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "cleared session");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(SessionError::Io {
                operation: "remove",
                path: self.path.clone(),
                source,
            }),
        }
    }
}
