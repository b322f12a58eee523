use std::fmt;

/// Absolute, normalized directory path inside a user's store.
///
/// Always starts with `/`, never contains `.`/`..` components or repeated
/// separators, and cannot climb above the store root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorePath(String);

impl StorePath {
    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn sanitize(raw: &str) -> Self {
        let mut parts: Vec<&str> = Vec::new();
        for component in raw.split(['/', '\\']) {
            match component {
                "" | "." => {}
                ".." => {
                    parts.pop();
                }
                other => parts.push(other),
            }
        }
        if parts.is_empty() { Self::root() } else { Self(format!("/{}", parts.join("/"))) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn join(&self, child: &str) -> Self {
        Self::sanitize(&format!("{}/{}", self.0, child))
    }
}

impl Default for StorePath {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for StorePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
