//! Generated password and its advisory warnings.

use std::fmt;

use zeroize::Zeroize;

use super::error::Warning;

/// A generated password. The buffer is wiped when dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Sized up front so no partially filled buffer is freed unwiped.
    pub(crate) fn from_chars(chars: &[char]) -> Self {
        let mut s = String::with_capacity(chars.iter().map(|c| c.len_utf8()).sum());
        for &c in chars {
            s.push(c);
        }
        Password(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.len())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Result of one successful generation.
#[derive(Debug)]
pub struct Generation {
    pub password: Password,
    pub warnings: Vec<Warning>,
}
