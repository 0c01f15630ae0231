use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid QR text: must be a non-empty string")]
    QrText,
    #[error("invalid output size: must be a positive pixel count")]
    OutputSize,
    #[error("invalid QR size: must be positive and smaller than the output size")]
    QrSize,
}

/// Text to encode, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QrText(String);
impl QrText {
    pub fn new(s: &str) -> Result<Self, ValueError> {
        let t = s.trim();
        if t.is_empty() {
            Err(ValueError::QrText)
        } else {
            Ok(Self(t.into()))
        }
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl FromStr for QrText {
    type Err = ValueError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
impl AsRef<str> for QrText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Badge overlay text: at most two characters, always uppercase. Empty means
/// no badge is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BadgeText(String);
impl BadgeText {
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// First two characters of `s`, uppercased. Characters that expand on
    /// uppercasing count per resulting character, so the two-character cap
    /// holds for any input.
    pub fn initials(s: &str) -> Self {
        Self(s.chars().flat_map(char::to_uppercase).take(2).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl AsRef<str> for BadgeText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
