//! External editor integration.
//!
//! Titles, bug descriptions and comments are composed in the user's own
//! editor. Each call blocks until the editor process exits, then returns the
//! entered text, or `None` when the user left it empty.

use crate::config::EditorConfig;
use crate::constants::DEFAULT_EDITOR;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Failed to run editor `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Editor exited with {0}")]
    Status(ExitStatus),

    #[error("Editor temp file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Title and description of a bug about to be created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BugDraft {
    pub title: String,
    pub message: String,
}

/// Blocking text input used by the editor handoff.
///
/// `Ok(None)` means the user produced no usable text. That is not an error:
/// the UI shows a notice and carries on.
pub trait Editor {
    fn bug_create_input(&mut self, title: &str, message: &str) -> Result<Option<BugDraft>, EditorError>;

    fn comment_input(&mut self) -> Result<Option<String>, EditorError>;

    fn title_input(&mut self, current: &str) -> Result<Option<String>, EditorError>;
}

const BUG_CREATE_HELP: &str = "\
# Please enter the title and comment message. The first non-empty line will be
# used as the title. Lines starting with '#' will be ignored.
# An empty title aborts the operation.
";

const COMMENT_HELP: &str = "\
# Please enter the comment message. Lines starting with '#' will be ignored,
# and an empty message aborts the operation.
";

const TITLE_HELP: &str = "\
# Please enter the new title. Only the first line will be used.
# Lines starting with '#' will be ignored, and an empty title aborts the operation.
";

/// Editor backed by an external process (`$VISUAL`, `$EDITOR`, config, `vi`)
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn from_config(config: &EditorConfig) -> Self {
        Self::new(resolve_editor_command(config))
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn edit(&self, kind: &str, template: &str) -> Result<String, EditorError> {
        let path = temp_file_path(kind);
        std::fs::write(&path, template)?;

        let result = self
            .launch(&path)
            .and_then(|()| std::fs::read_to_string(&path).map_err(EditorError::from));
        if let Err(e) = std::fs::remove_file(&path) {
            log::warn!("Failed to remove editor temp file {}: {}", path.display(), e);
        }
        result
    }

    fn launch(&self, path: &Path) -> Result<(), EditorError> {
        log::debug!("Launching editor `{}` on {}", self.command, path.display());

        let status = Command::new("sh")
            .arg("-c")
            .arg(format!("{} {}", self.command, shell_single_quote(&path.to_string_lossy())))
            .status()
            .map_err(|source| EditorError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(EditorError::Status(status));
        }
        Ok(())
    }
}

impl Editor for ExternalEditor {
    fn bug_create_input(&mut self, title: &str, message: &str) -> Result<Option<BugDraft>, EditorError> {
        let template = format!("{}\n\n{}\n\n{}", title, message, BUG_CREATE_HELP);
        let raw = self.edit("bug", &template)?;
        Ok(parse_bug_draft(&raw))
    }

    fn comment_input(&mut self) -> Result<Option<String>, EditorError> {
        let template = format!("\n\n{}", COMMENT_HELP);
        let raw = self.edit("comment", &template)?;
        Ok(parse_message(&raw))
    }

    fn title_input(&mut self, current: &str) -> Result<Option<String>, EditorError> {
        let template = format!("{}\n\n{}", current, TITLE_HELP);
        let raw = self.edit("title", &template)?;
        Ok(parse_title(&raw))
    }
}

/// Pick the editor command: `$VISUAL`, then `$EDITOR`, then config, then `vi`
pub fn resolve_editor_command(config: &EditorConfig) -> String {
    std::env::var("VISUAL")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .or_else(|| std::env::var("EDITOR").ok().filter(|value| !value.trim().is_empty()))
        .or_else(|| config.command.clone().filter(|value| !value.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Drop `#` comment lines
pub fn strip_comments(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
}

/// First non-empty line is the title, the rest (trimmed) is the message
pub fn parse_bug_draft(raw: &str) -> Option<BugDraft> {
    let text = strip_comments(raw);
    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());

    let title = lines.next()?.trim().to_string();
    let message = lines.collect::<Vec<_>>().join("\n").trim().to_string();

    Some(BugDraft { title, message })
}

pub fn parse_message(raw: &str) -> Option<String> {
    let message = strip_comments(raw).trim().to_string();
    if message.is_empty() {
        None
    } else {
        Some(message)
    }
}

pub fn parse_title(raw: &str) -> Option<String> {
    strip_comments(raw)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

fn temp_file_path(kind: &str) -> PathBuf {
    std::env::temp_dir().join(format!("bugterm-{}-{}.txt", kind, uuid::Uuid::new_v4().simple()))
}

fn shell_single_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "'\\''"))
}
