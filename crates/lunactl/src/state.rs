//! Session state files for lunactl.
//!
//! One session file holds the latest scored entry; the responder reads it
//! back as a raw payload. Discovery chain for the state directory:
//! config override, then $LUNA_STATE_DIR, then $XDG_STATE_HOME/luna,
//! then ~/.local/state/luna.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use luna_common::SessionContext;

const SESSION_FILE: &str = "session.json";
const TRANSCRIPT_FILE: &str = "chat.jsonl";

/// Resolved location of the session and transcript files.
#[derive(Debug, Clone)]
pub struct StatePaths {
    dir: PathBuf,
}

impl StatePaths {
    /// Resolve the state directory, preferring an explicit override.
    pub fn resolve(override_dir: Option<&Path>) -> Option<Self> {
        if let Some(dir) = override_dir {
            return Some(Self {
                dir: dir.to_path_buf(),
            });
        }

        if let Ok(dir) = env::var("LUNA_STATE_DIR") {
            return Some(Self {
                dir: PathBuf::from(dir),
            });
        }

        if let Ok(xdg_state) = env::var("XDG_STATE_HOME") {
            return Some(Self {
                dir: PathBuf::from(xdg_state).join("luna"),
            });
        }

        dirs::home_dir().map(|home| Self {
            dir: home.join(".local/state/luna"),
        })
    }

    pub fn session_file(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    pub fn transcript_file(&self) -> PathBuf {
        self.dir.join(TRANSCRIPT_FILE)
    }

    /// Store the latest scored entry, replacing any previous one.
    pub fn store_session(&self, ctx: &SessionContext) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.session_file(), ctx.to_json()?)?;
        Ok(())
    }

    /// Raw payload of the latest scored entry, if any. Decoding is left to
    /// the responder so a corrupt file surfaces as its apology, not a crash.
    pub fn load_session_payload(&self) -> Option<String> {
        fs::read_to_string(self.session_file()).ok()
    }
}
