//! POSIX permission bits: symbolic strings, checkbox grids and octal codes.
//!
//! The two conversions into [`OctalPermissionCode`] are total. Any character
//! that is not the canonical letter for its slot weighs zero, so malformed or
//! short input degrades to smaller digits instead of failing.

use std::fmt;

use serde::{Serialize, Serializer};

use super::AppError;

/// Number of characters consumed after the entry-type flag.
const PERMISSION_CHARS: usize = 9;

/// One of the three rwx bits inside a triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Read,
    Write,
    Execute,
}

impl Permission {
    /// Slot order inside a triplet.
    pub const SLOTS: [Permission; 3] = [Permission::Read, Permission::Write, Permission::Execute];

    pub fn weight(self) -> u8 {
        match self {
            Permission::Read => 4,
            Permission::Write => 2,
            Permission::Execute => 1,
        }
    }

    /// Canonical letter expected at this slot of a symbolic string.
    pub fn letter(self) -> char {
        match self {
            Permission::Read => 'r',
            Permission::Write => 'w',
            Permission::Execute => 'x',
        }
    }
}

/// Owner, group or everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Principal {
    Owner,
    Group,
    Other,
}

impl Principal {
    pub const ALL: [Principal; 3] = [Principal::Owner, Principal::Group, Principal::Other];
}

/// Read/write/execute flags for one principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PermissionTriplet {
    pub read: bool,
    pub write: bool,
    pub execute: bool,
}

impl PermissionTriplet {
    pub const NONE: PermissionTriplet = PermissionTriplet { read: false, write: false, execute: false };
    pub const ALL: PermissionTriplet = PermissionTriplet { read: true, write: true, execute: true };

    pub fn new(read: bool, write: bool, execute: bool) -> Self {
        Self { read, write, execute }
    }

    pub fn get(&self, permission: Permission) -> bool {
        match permission {
            Permission::Read => self.read,
            Permission::Write => self.write,
            Permission::Execute => self.execute,
        }
    }

    pub fn set(&mut self, permission: Permission, granted: bool) {
        match permission {
            Permission::Read => self.read = granted,
            Permission::Write => self.write = granted,
            Permission::Execute => self.execute = granted,
        }
    }

    /// Sum of the weights of the granted bits, always in `0..=7`.
    pub fn digit(&self) -> u8 {
        Permission::SLOTS.iter().filter(|p| self.get(**p)).map(|p| p.weight()).sum()
    }

    /// Decode a single octal digit. Bits above 7 are masked off.
    pub fn from_digit(digit: u8) -> Self {
        let digit = digit & 0o7;
        Self {
            read: digit & Permission::Read.weight() != 0,
            write: digit & Permission::Write.weight() != 0,
            execute: digit & Permission::Execute.weight() != 0,
        }
    }

    /// Build a triplet from loose letters such as `"rw"` or `"r-x"`.
    ///
    /// Letters may appear in any order; anything other than `r`, `w` or `x`
    /// is ignored.
    pub fn from_letters(letters: &str) -> Self {
        let mut triplet = Self::NONE;
        for permission in Permission::SLOTS {
            if letters.contains(permission.letter()) {
                triplet.set(permission, true);
            }
        }
        triplet
    }

    /// Render as three canonical characters, e.g. `r-x`.
    pub fn symbolic(&self) -> String {
        Permission::SLOTS
            .iter()
            .map(|p| if self.get(*p) { p.letter() } else { '-' })
            .collect()
    }
}

/// Checkbox grid of the upload and edit forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckboxPermissionSet {
    pub owner: PermissionTriplet,
    pub group: PermissionTriplet,
    pub other: PermissionTriplet,
}

impl CheckboxPermissionSet {
    pub fn new(owner: PermissionTriplet, group: PermissionTriplet, other: PermissionTriplet) -> Self {
        Self { owner, group, other }
    }

    pub fn triplet(&self, principal: Principal) -> &PermissionTriplet {
        match principal {
            Principal::Owner => &self.owner,
            Principal::Group => &self.group,
            Principal::Other => &self.other,
        }
    }

    fn triplet_mut(&mut self, principal: Principal) -> &mut PermissionTriplet {
        match principal {
            Principal::Owner => &mut self.owner,
            Principal::Group => &mut self.group,
            Principal::Other => &mut self.other,
        }
    }

    pub fn to_octal(&self) -> OctalPermissionCode {
        checkboxes_to_octal(self)
    }

    /// Render a 10-character symbolic string using canonical letters.
    pub fn to_symbolic(&self, entry_flag: char) -> String {
        let mut symbolic = String::with_capacity(PERMISSION_CHARS + 1);
        symbolic.push(entry_flag);
        for principal in Principal::ALL {
            symbolic.push_str(&self.triplet(principal).symbolic());
        }
        symbolic
    }

    /// Pre-populate checkboxes from an octal code.
    ///
    /// Non-digit characters count as 0 and absent digits grant nothing.
    pub fn from_octal(code: &str) -> Self {
        let mut digits = code.chars().map(|c| c.to_digit(8).unwrap_or(0) as u8);
        let mut set = Self::default();
        for principal in Principal::ALL {
            *set.triplet_mut(principal) = PermissionTriplet::from_digit(digits.next().unwrap_or(0));
        }
        set
    }
}

/// Octal code such as `754`.
///
/// Values produced by the codec are not validated and may be shorter than
/// three digits for truncated symbolic input; [`OctalPermissionCode::parse`]
/// is the strict path for user-typed values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OctalPermissionCode(String);

impl OctalPermissionCode {
    /// Validate a user-supplied code: exactly three digits in `0..=7`.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let trimmed = text.trim();
        let valid = trimmed.len() == 3 && trimmed.chars().all(|c| c.is_digit(8));
        if !valid {
            return Err(AppError::InvalidPermissionCode(text.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether all three principals have a digit.
    pub fn is_complete(&self) -> bool {
        self.0.len() == 3
    }

    pub fn to_checkboxes(&self) -> CheckboxPermissionSet {
        CheckboxPermissionSet::from_octal(&self.0)
    }
}

impl fmt::Display for OctalPermissionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<OctalPermissionCode> for String {
    fn from(val: OctalPermissionCode) -> Self {
        val.0
    }
}

impl Serialize for OctalPermissionCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Convert a symbolic string like `-rwxr-xr--` into its octal code.
///
/// The first character (entry type) is always skipped and at most nine
/// characters after it are read. A slot only counts when it holds its
/// canonical letter.
pub fn symbolic_to_octal(symbolic: &str) -> OctalPermissionCode {
    let chars: Vec<char> = symbolic.chars().skip(1).take(PERMISSION_CHARS).collect();
    let code = chars.chunks(3).map(|triplet| digit_char(triplet_weight(triplet))).collect();
    OctalPermissionCode(code)
}

/// Convert the checkbox grid into its octal code.
pub fn checkboxes_to_octal(state: &CheckboxPermissionSet) -> OctalPermissionCode {
    let code = Principal::ALL.iter().map(|p| digit_char(state.triplet(*p).digit())).collect();
    OctalPermissionCode(code)
}

fn triplet_weight(triplet: &[char]) -> u8 {
    triplet
        .iter()
        .zip(Permission::SLOTS)
        .filter(|(c, permission)| **c == permission.letter())
        .map(|(_, permission)| permission.weight())
        .sum()
}

fn digit_char(value: u8) -> char {
    char::from(b'0' + value)
}
