//! Human-readable byte sizes used for quotas (`100M`, `1.5G`).

use std::fmt;

use super::AppError;

/// Quota presets offered when creating an account.
pub const QUOTA_PRESETS: [&str; 4] = ["100M", "512M", "1G", "5G"];

/// A size in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteSize(u64);

impl ByteSize {
    pub fn from_bytes(bytes: u64) -> Self {
        Self(bytes)
    }

    pub fn bytes(&self) -> u64 {
        self.0
    }

    /// Parse `<number>[suffix]` where suffix is one of `B K M G T P E`
    /// (case-insensitive, binary multiples). Fractions are truncated after
    /// scaling. A unit letter may be followed by `B` or `iB` (`100MB`,
    /// `1GiB`) and nothing else.
    pub fn parse(text: &str) -> Result<Self, AppError> {
        let trimmed = text.trim();
        let number_end = trimmed
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
            .map(|(i, _)| i)
            .unwrap_or(trimmed.len());
        let (number, rest) = trimmed.split_at(number_end);

        let value: f64 = number.parse().map_err(|_| AppError::InvalidSize(text.to_string()))?;
        if !value.is_finite() {
            return Err(AppError::InvalidSize(text.to_string()));
        }

        let mut suffix = rest.trim_start().chars();
        let multiplier = match suffix.next() {
            None => 1,
            Some(c) => {
                let multiplier =
                    suffix_multiplier(c).ok_or_else(|| AppError::InvalidSize(text.to_string()))?;
                if !valid_unit_tail(c, suffix.as_str()) {
                    return Err(AppError::InvalidSize(text.to_string()));
                }
                multiplier
            }
        };

        Ok(Self((value * multiplier as f64) as u64))
    }
}

fn valid_unit_tail(suffix: char, tail: &str) -> bool {
    tail.is_empty()
        || (!suffix.eq_ignore_ascii_case(&'b')
            && (tail.eq_ignore_ascii_case("b") || tail.eq_ignore_ascii_case("ib")))
}

fn suffix_multiplier(suffix: char) -> Option<u64> {
    let power = match suffix.to_ascii_uppercase() {
        'B' => 0,
        'K' => 1,
        'M' => 2,
        'G' => 3,
        'T' => 4,
        'P' => 5,
        'E' => 6,
        _ => return None,
    };
    Some(1024u64.pow(power))
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNITS: [&str; 7] = ["B", "K", "M", "G", "T", "P", "E"];
        let mut value = self.0 as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        if unit == 0 { write!(f, "{}B", self.0) } else { write!(f, "{:.1}{}", value, UNITS[unit]) }
    }
}
