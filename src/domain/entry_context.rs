//! Context of a right-clicked file listing entry.
//!
//! Each context-menu open produces a fresh [`EntryContext`] that the rename
//! and permission handlers receive explicitly.

use super::permissions::{OctalPermissionCode, symbolic_to_octal};
use super::AppError;

/// The listing entry a context-menu action applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryContext {
    /// Server-side file id (`data-id`).
    pub file_id: String,
    /// Name currently displayed for the entry.
    pub name: String,
    /// Symbolic permission string shown in the listing, e.g. `-rwxr-xr--`.
    pub symbolic_permissions: String,
    /// Owning group, when one is set.
    pub group: Option<String>,
}

impl EntryContext {
    pub fn new(file_id: impl Into<String>, name: impl Into<String>, symbolic: impl Into<String>) -> Self {
        Self {
            file_id: file_id.into(),
            name: name.into(),
            symbolic_permissions: symbolic.into(),
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Value that pre-populates the editable permission field.
    pub fn prefill_octal(&self) -> OctalPermissionCode {
        symbolic_to_octal(&self.symbolic_permissions)
    }

    /// Validate the edited permission form into an update request.
    ///
    /// An empty group keeps the entry's current group.
    pub fn permission_update(&self, octal: &str, group: Option<&str>) -> Result<PermissionUpdate, AppError> {
        let permissions = OctalPermissionCode::parse(octal)?;
        let group = group
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .or_else(|| self.group.clone());
        Ok(PermissionUpdate { file_id: self.file_id.clone(), permissions, group })
    }

    /// Validate a rename prompt into a request. Blank names are rejected.
    pub fn rename(&self, new_name: &str) -> Result<RenameRequest, AppError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::MissingInput("new file name"));
        }
        Ok(RenameRequest { file_id: self.file_id.clone(), new_name: new_name.to_string() })
    }
}

/// Change of permissions (and optionally group) for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionUpdate {
    pub file_id: String,
    pub permissions: OctalPermissionCode,
    pub group: Option<String>,
}

/// New display name for one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRequest {
    pub file_id: String,
    pub new_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> EntryContext {
        EntryContext::new("42", "report.pdf", "-rwxr-xr--").with_group("staff")
    }

    #[test]
    fn prefill_decodes_listing_permissions() {
        assert_eq!(entry().prefill_octal().as_str(), "754");
        assert!(entry().prefill_octal().to_checkboxes().owner.execute);
    }

    #[test]
    fn prefill_tolerates_malformed_listing() {
        let ctx = EntryContext::new("1", "x", "?r?");
        assert_eq!(ctx.prefill_octal().as_str(), "4");
    }

    #[test]
    fn permission_update_validates_code() {
        let update = entry().permission_update("640", None).unwrap();
        assert_eq!(update.file_id, "42");
        assert_eq!(update.permissions.as_str(), "640");
        assert_eq!(update.group.as_deref(), Some("staff"));

        assert!(entry().permission_update("648", None).is_err());
    }

    #[test]
    fn permission_update_overrides_group() {
        let update = entry().permission_update("700", Some(" admins ")).unwrap();
        assert_eq!(update.group.as_deref(), Some("admins"));

        let update = entry().permission_update("700", Some("  ")).unwrap();
        assert_eq!(update.group.as_deref(), Some("staff"));
    }

    #[test]
    fn rename_rejects_blank_names() {
        assert!(matches!(entry().rename("   "), Err(AppError::MissingInput(_))));
        assert_eq!(entry().rename(" final.pdf ").unwrap().new_name, "final.pdf");
    }

    #[test]
    fn contexts_are_independent() {
        let first = EntryContext::new("1", "a", "-rw-------");
        let second = EntryContext::new("2", "b", "-rwxrwxrwx");
        assert_eq!(first.rename("c").unwrap().file_id, "1");
        assert_eq!(second.prefill_octal().as_str(), "777");
        assert_eq!(first.prefill_octal().as_str(), "600");
    }
}
