use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Stored auth session. Written after a successful sign-in and attached to
/// backend requests as the bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    pub email: String,
}

const SESSION_FILE: &str = ".recon-desk/session.json";

impl Session {
    pub fn load() -> std::io::Result<Option<Session>> {
        Self::load_from(Path::new(SESSION_FILE))
    }

    pub fn load_from(path: &Path) -> std::io::Result<Option<Session>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        // A corrupt session file behaves like no session; the user just
        // signs in again.
        Ok(serde_json::from_str(&contents).ok())
    }

    pub fn save(&self) -> std::io::Result<()> {
        self.save_to(Path::new(SESSION_FILE))
    }

    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, contents)
    }

    pub fn clear() -> std::io::Result<()> {
        let path = PathBuf::from(SESSION_FILE);
        if path.exists() {
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let session = Session {
            access_token: "token-123".to_string(),
            user_id: "u-1".to_string(),
            email: "ops@example.com".to_string(),
        };
        session.save_to(&path).unwrap();

        let loaded = Session::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.email, "ops@example.com");
        assert_eq!(loaded.access_token, "token-123");
    }

    #[test]
    fn missing_or_corrupt_file_means_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(Session::load_from(&missing).unwrap().is_none());

        let corrupt = dir.path().join("session.json");
        std::fs::write(&corrupt, "{not json").unwrap();
        assert!(Session::load_from(&corrupt).unwrap().is_none());
    }
}
