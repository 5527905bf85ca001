use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Persisted session, the CLI's local-storage analogue. Survives across
/// invocations until logout or expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
}

pub fn session_path() -> PathBuf {
    if let Ok(path) = std::env::var("TASKHUB_SESSION_FILE") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskhub")
        .join("session.json")
}

pub fn load() -> Option<Session> {
    let raw = std::fs::read_to_string(session_path()).ok()?;
    serde_json::from_str(&raw).ok()
}

pub fn save(session: &Session) -> anyhow::Result<()> {
    let path = session_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("create session directory")?;
    }
    let raw = serde_json::to_string_pretty(session)?;
    std::fs::write(&path, raw).context("write session file")?;
    Ok(())
}

pub fn clear() {
    let _ = std::fs::remove_file(session_path());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_roundtrips_through_json() {
        let session = Session {
            token: "abc.def.ghi".into(),
            email: "a@x.com".into(),
        };
        let raw = serde_json::to_string(&session).unwrap();
        let back: Session = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.token, session.token);
        assert_eq!(back.email, session.email);
    }
}
