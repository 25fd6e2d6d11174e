//! In-memory bug cache with optional JSON persistence.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{Bug, BugId, BugStore, Comment, Status, StoreError};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    bugs: Vec<Bug>,
}

/// Default [`BugStore`] implementation.
///
/// Bugs live in memory; when opened on a path, every successful mutation is
/// written back to that file as pretty-printed JSON.
#[derive(Debug)]
pub struct BugCache {
    bugs: Vec<Bug>,
    path: Option<PathBuf>,
    author: String,
}

impl BugCache {
    /// Create a cache that never touches the filesystem
    pub fn in_memory(author: impl Into<String>) -> Self {
        Self {
            bugs: Vec::new(),
            path: None,
            author: author.into(),
        }
    }

    /// Open the store file at `path`, starting empty if it does not exist yet
    pub fn open<P: AsRef<Path>>(path: P, author: impl Into<String>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let bugs = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                Vec::new()
            } else {
                serde_json::from_str::<StoreFile>(&content)?.bugs
            }
        } else {
            Vec::new()
        };

        log::info!("Opened bug store {} ({} bugs)", path.display(), bugs.len());

        Ok(Self {
            bugs,
            path: Some(path),
            author: author.into(),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.bugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bugs.is_empty()
    }

    fn bug_mut(&mut self, id: &BugId) -> Result<&mut Bug, StoreError> {
        self.bugs
            .iter_mut()
            .find(|bug| bug.id == *id)
            .ok_or(StoreError::NotFound(*id))
    }

    fn persist(&self) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = StoreFile {
            bugs: self.bugs.clone(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&file)?)?;
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), StoreError> {
    if title.trim().is_empty() {
        return Err(StoreError::InvalidTitle("title is empty".to_string()));
    }
    if title.contains('\n') {
        return Err(StoreError::InvalidTitle("title spans multiple lines".to_string()));
    }
    Ok(())
}

impl BugStore for BugCache {
    fn bugs(&self) -> Result<Vec<Bug>, StoreError> {
        let mut bugs = self.bugs.clone();
        bugs.sort_by(|a, b| b.edited_at.cmp(&a.edited_at));
        Ok(bugs)
    }

    fn snapshot(&self, id: &BugId) -> Result<Bug, StoreError> {
        self.bugs
            .iter()
            .find(|bug| bug.id == *id)
            .cloned()
            .ok_or(StoreError::NotFound(*id))
    }

    fn create_bug(&mut self, title: &str, message: &str) -> Result<BugId, StoreError> {
        validate_title(title)?;

        let now = Utc::now();
        let bug = Bug {
            id: BugId::new(),
            title: title.trim().to_string(),
            status: Status::Open,
            author: self.author.clone(),
            created_at: now,
            edited_at: now,
            comments: vec![Comment {
                author: self.author.clone(),
                message: message.to_string(),
                created_at: now,
            }],
        };
        let id = bug.id;
        self.bugs.push(bug);
        self.persist()?;

        log::info!("Created bug {}", id.short());
        Ok(id)
    }

    fn add_comment(&mut self, id: &BugId, message: &str) -> Result<(), StoreError> {
        if message.trim().is_empty() {
            return Err(StoreError::InvalidMessage("message is empty".to_string()));
        }

        let author = self.author.clone();
        let now = Utc::now();
        let bug = self.bug_mut(id)?;
        bug.comments.push(Comment {
            author,
            message: message.to_string(),
            created_at: now,
        });
        bug.edited_at = now;
        self.persist()?;

        log::info!("Added comment to bug {}", id.short());
        Ok(())
    }

    fn set_title(&mut self, id: &BugId, title: &str) -> Result<(), StoreError> {
        validate_title(title)?;

        let bug = self.bug_mut(id)?;
        bug.title = title.trim().to_string();
        bug.edited_at = Utc::now();
        self.persist()?;

        log::info!("Changed title of bug {}", id.short());
        Ok(())
    }
}
