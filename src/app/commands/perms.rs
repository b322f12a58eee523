//! Offline permission conversions.

use crate::domain::{
    AppError, CheckboxPermissionSet, OctalPermissionCode, PermissionTriplet, checkboxes_to_octal,
    symbolic_to_octal,
};

/// Loose rwx letters for each principal, as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct PermissionFlags {
    pub user: Option<String>,
    pub group: Option<String>,
    pub everyone: Option<String>,
}

impl PermissionFlags {
    /// Checkbox grid described by the flags. Omitted principals get nothing.
    pub fn to_checkboxes(&self) -> CheckboxPermissionSet {
        let triplet = |letters: &Option<String>| {
            letters.as_deref().map(PermissionTriplet::from_letters).unwrap_or_default()
        };
        CheckboxPermissionSet::new(triplet(&self.user), triplet(&self.group), triplet(&self.everyone))
    }

    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.group.is_none() && self.everyone.is_none()
    }
}

/// Octal code of a symbolic listing string.
pub fn octal(symbolic: &str) -> OctalPermissionCode {
    symbolic_to_octal(symbolic)
}

/// Octal code of a checkbox selection.
pub fn checkboxes(flags: &PermissionFlags) -> OctalPermissionCode {
    checkboxes_to_octal(&flags.to_checkboxes())
}

/// Symbolic string for a user-typed octal code.
pub fn symbolic(code: &str, entry_flag: char) -> Result<String, AppError> {
    let code = OctalPermissionCode::parse(code)?;
    Ok(code.to_checkboxes().to_symbolic(entry_flag))
}
