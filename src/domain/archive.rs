//! Archive (snapshot) listing and the navigation state of the version browser.

use serde::Deserialize;

/// One archive of the user's store as reported by `/store/archive-list`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Archive {
    /// Identifier used in diff and restore URLs.
    pub id: String,
    /// Human-readable archive name.
    pub archive: String,
    /// Creation timestamp as formatted by the server.
    #[serde(default)]
    pub time: Option<String>,
}

/// Result of comparing an archive against the current tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOutcome {
    /// Unified diff text, left unrendered.
    Changes(String),
    Identical,
}

impl DiffOutcome {
    /// An absent or empty diff means the archive matches the current tree.
    pub fn from_diff(diff: Option<String>) -> Self {
        match diff {
            Some(text) if !text.is_empty() => DiffOutcome::Changes(text),
            _ => DiffOutcome::Identical,
        }
    }
}

/// Selection state of the archive dropdown with its previous/next/revert buttons.
///
/// Starts on the newest (last) archive. Index `-1` stands for "nothing
/// selected", matching an empty dropdown.
#[derive(Debug, Clone)]
pub struct ArchiveSelector {
    archives: Vec<Archive>,
    index: i64,
}

impl ArchiveSelector {
    pub fn new(archives: Vec<Archive>) -> Self {
        let mut selector = Self { archives, index: -1 };
        selector.reset();
        selector
    }

    /// Jump back to the newest archive.
    pub fn reset(&mut self) {
        self.index = self.len() - 1;
    }

    pub fn archives(&self) -> &[Archive] {
        &self.archives
    }

    pub fn selected_index(&self) -> Option<usize> {
        usize::try_from(self.index).ok().filter(|i| *i < self.archives.len())
    }

    pub fn selected(&self) -> Option<&Archive> {
        self.selected_index().map(|i| &self.archives[i])
    }

    /// Select by position. Out-of-range positions clear the selection.
    pub fn select(&mut self, index: usize) -> Option<&Archive> {
        self.index = if index < self.archives.len() { index as i64 } else { -1 };
        self.selected()
    }

    /// Select by archive id.
    pub fn select_id(&mut self, id: &str) -> Option<&Archive> {
        match self.archives.iter().position(|a| a.id == id) {
            Some(index) => self.select(index),
            None => {
                self.index = -1;
                None
            }
        }
    }

    /// Step to the older archive when one exists.
    pub fn previous(&mut self) -> Option<&Archive> {
        if self.index > 0 {
            self.index -= 1;
        }
        self.selected()
    }

    /// Step to the newer archive when one exists.
    pub fn next(&mut self) -> Option<&Archive> {
        if self.index < self.len() - 1 {
            self.index += 1;
        }
        self.selected()
    }

    pub fn previous_enabled(&self) -> bool {
        self.index > 0
    }

    /// The newest archive is the current tree, so stepping onto it is
    /// disabled from the one before it.
    pub fn next_enabled(&self) -> bool {
        self.index < self.len() - 2
    }

    pub fn revert_enabled(&self) -> bool {
        self.selected().is_some()
    }

    fn len(&self) -> i64 {
        self.archives.len() as i64
    }
}
