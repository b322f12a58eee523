//! Rows of the store's directory listing.

use serde::{Deserialize, Deserializer};

use super::entry_context::EntryContext;
use super::permissions::CheckboxPermissionSet;

/// One file or directory as returned by `/store/retrieve`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileEntry {
    #[serde(deserialize_with = "text_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub is_directory: bool,
    /// Octal digits as stored by the server (`740`, `"755"`).
    #[serde(default, deserialize_with = "permission_digits")]
    pub permissions: String,
}

impl FileEntry {
    /// Leading flag of the symbolic string.
    pub fn entry_flag(&self) -> char {
        if self.is_directory { 'd' } else { '-' }
    }

    /// Listing form of the stored permissions, e.g. `drwxr-x---`.
    pub fn symbolic(&self) -> String {
        CheckboxPermissionSet::from_octal(&self.permissions).to_symbolic(self.entry_flag())
    }

    /// Whether `key` names this entry by id or by name.
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.name == key
    }

    /// Context for acting on this entry, carrying its current permissions
    /// and group.
    pub fn to_context(&self) -> EntryContext {
        let context = EntryContext::new(self.id.clone(), self.name.clone(), self.symbolic());
        match self.group.as_deref().map(str::trim).filter(|g| !g.is_empty()) {
            Some(group) => context.with_group(group),
            None => context,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Number(u64),
    Text(String),
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Number(n) => n.to_string(),
        TextOrNumber::Text(s) => s,
    })
}

/// Stored codes lose leading zeros when kept as integers (`40` is `040`).
fn permission_digits<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Number(n) => format!("{:03}", n),
        TextOrNumber::Text(s) => s.trim().to_string(),
    })
}
