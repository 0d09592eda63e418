use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use dashmap::DashMap;
use tracing::warn;

use ipo_rs::IpoId;

/// Per-IPO "this browser already voted" flags.
pub trait VoteFlags: Send + Sync {
    fn has_voted(&self, id: &IpoId) -> bool;
    fn mark_voted(&self, id: &IpoId) -> Result<()>;
}

fn flag_key(id: &IpoId) -> String {
    format!("voted_{id}")
}

/// Process-local flags; forgotten on exit.
#[derive(Debug, Default)]
pub struct MemoryVoteFlags {
    voted: DashMap<String, bool>,
}

impl VoteFlags for MemoryVoteFlags {
    fn has_voted(&self, id: &IpoId) -> bool {
        self.voted.get(&flag_key(id)).is_some_and(|v| *v)
    }

    fn mark_voted(&self, id: &IpoId) -> Result<()> {
        self.voted.insert(flag_key(id), true);
        Ok(())
    }
}

/// Flags persisted as a JSON object (`{"voted_<id>": true}`), rewritten on
/// every mark.
#[derive(Debug)]
pub struct FileVoteFlags {
    path: PathBuf,
    voted: Mutex<BTreeMap<String, bool>>,
}

impl FileVoteFlags {
    /// Load existing flags. A missing or unreadable file starts empty.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let voted = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                warn!(path = %path.display(), "ignoring corrupt vote flags: {e}");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self {
            path,
            voted: Mutex::new(voted),
        }
    }

    fn save(&self, voted: &BTreeMap<String, bool>) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(voted)?;
        fs::write(&self.path, json)
            .with_context(|| format!("writing vote flags to {}", self.path.display()))
    }
}

impl VoteFlags for FileVoteFlags {
    fn has_voted(&self, id: &IpoId) -> bool {
        let voted = self.voted.lock().unwrap_or_else(|p| p.into_inner());
        voted.get(&flag_key(id)).copied().unwrap_or(false)
    }

    fn mark_voted(&self, id: &IpoId) -> Result<()> {
        let mut voted = self.voted.lock().unwrap_or_else(|p| p.into_inner());
        voted.insert(flag_key(id), true);
        self.save(&voted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("ipo-votes-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn memory_flags_are_per_id() {
        let flags = MemoryVoteFlags::default();
        assert!(!flags.has_voted(&IpoId::Int(1)));
        flags.mark_voted(&IpoId::Int(1)).unwrap();
        assert!(flags.has_voted(&IpoId::Int(1)));
        assert!(!flags.has_voted(&IpoId::Int(2)));
        assert!(!flags.has_voted(&IpoId::Text("1x".into())));
    }

    #[test]
    fn file_flags_survive_reopen() {
        let path = temp_path();
        {
            let flags = FileVoteFlags::open(&path);
            flags.mark_voted(&IpoId::Int(42)).unwrap();
        }
        let reopened = FileVoteFlags::open(&path);
        assert!(reopened.has_voted(&IpoId::Int(42)));
        assert!(!reopened.has_voted(&IpoId::Int(43)));

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("voted_42"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let path = temp_path();
        fs::write(&path, "not json").unwrap();
        let flags = FileVoteFlags::open(&path);
        assert!(!flags.has_voted(&IpoId::Int(1)));
        flags.mark_voted(&IpoId::Int(1)).unwrap();
        assert!(FileVoteFlags::open(&path).has_voted(&IpoId::Int(1)));
        let _ = fs::remove_file(&path);
    }
}
