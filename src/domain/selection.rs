use super::AppError;

/// Checkbox column of the file listing used for bulk deletion.
#[derive(Debug, Clone, Default)]
pub struct DeleteSelection {
    entries: Vec<(String, bool)>,
}

impl DeleteSelection {
    /// All listed names, initially unchecked.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { entries: names.into_iter().map(|n| (n.into(), false)).collect() }
    }

    /// Check or uncheck one entry. Returns `false` when the name is not listed.
    pub fn toggle(&mut self, name: &str, checked: bool) -> bool {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => {
                entry.1 = checked;
                true
            }
            None => false,
        }
    }

    /// The "select all" header checkbox.
    pub fn select_all(&mut self, checked: bool) {
        for entry in &mut self.entries {
            entry.1 = checked;
        }
    }

    /// Whether the delete button should be enabled.
    pub fn can_delete(&self) -> bool {
        self.entries.iter().any(|(_, checked)| *checked)
    }

    /// Checked names in listing order.
    pub fn selected(&self) -> Vec<String> {
        self.entries.iter().filter(|(_, checked)| *checked).map(|(n, _)| n.clone()).collect()
    }

    /// Selected names, or an error when nothing is checked.
    pub fn require_selected(&self) -> Result<Vec<String>, AppError> {
        let selected = self.selected();
        if selected.is_empty() {
            return Err(AppError::MissingInput("no files selected for deletion"));
        }
        Ok(selected)
    }

    /// Confirmation prompt shown before deleting.
    pub fn confirmation_prompt(&self) -> String {
        format!("Are you sure you want to delete {} file(s)?", self.selected().len())
    }
}
