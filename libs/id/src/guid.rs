//! The GUID value type and its textual forms.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::FormatError;

/// Digit counts of the hyphen-separated groups in the canonical form.
const GROUP_LENGTHS: [usize; 5] = [8, 4, 4, 4, 12];

/// Length of the canonical hyphenated form without braces.
const HYPHENATED_LEN: usize = 36;

/// Shorthand accepted by [`Guid::parse`] for the all-zero identifier.
const EMPTY_SHORTHAND: &str = "0";

// =============================================================================
// Format selectors
// =============================================================================

/// A textual form a [`Guid`] can be rendered in.
///
/// All forms are lowercase. Uppercase variants are produced by upper-casing
/// the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
    #[default]
    Hyphenated,
    /// `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`
    Braced,
    /// `{0xxxxxxxxx, 0xxxxx, 0xxxxx, {0xxx, 0xxx, 0xxx, 0xxx, 0xxx, 0xxx, 0xxx, 0xxx}}`
    Struct,
    /// `xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx`
    Simple,
}

impl Format {
    /// Maps a selector string onto a format.
    ///
    /// Unrecognized selectors fall back to [`Format::Hyphenated`]; callers
    /// rely on this, so it never fails.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        match selector {
            "braced" | "b" => Format::Braced,
            "struct" | "x" => Format::Struct,
            "no-hyphen" => Format::Simple,
            _ => Format::Hyphenated,
        }
    }

    /// Returns the canonical selector string for this format.
    #[must_use]
    pub const fn selector(&self) -> &'static str {
        match self {
            Format::Hyphenated => "hyphenated",
            Format::Braced => "braced",
            Format::Struct => "struct",
            Format::Simple => "no-hyphen",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

// =============================================================================
// Guid
// =============================================================================

/// A 128-bit globally unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Guid(Uuid);

impl Guid {
    /// The all-zero identifier.
    pub const EMPTY: Self = Self(Uuid::nil());

    /// Creates a new random (version 4) identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an identifier from its raw bytes, in stored order.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns the raw 16-byte payload.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Returns true if every byte is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }

    /// Replaces the payload with a fresh random (version 4) value.
    ///
    /// The value keeps its place in memory, so anything holding it sees the
    /// new identifier.
    pub fn regenerate(&mut self) {
        self.0 = Uuid::new_v4();
    }

    /// Parses the canonical `8-4-4-4-12` form, optionally wrapped in braces.
    ///
    /// Hex digits are case-insensitive. The literal `"0"` yields
    /// [`Guid::EMPTY`].
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        if input.is_empty() {
            return Err(FormatError::Empty);
        }

        if input == EMPTY_SHORTHAND {
            return Ok(Self::EMPTY);
        }

        let (body, offset) = match (input.starts_with('{'), input.ends_with('}')) {
            (true, true) if input.len() >= 2 => (&input[1..input.len() - 1], 1),
            (false, false) => (input, 0),
            _ => return Err(FormatError::UnbalancedBraces),
        };

        let chars: Vec<char> = body.chars().collect();
        if chars.len() != HYPHENATED_LEN {
            return Err(FormatError::InvalidLength { len: chars.len() });
        }

        let mut start = 0;
        for (index, &expected) in GROUP_LENGTHS.iter().enumerate() {
            let actual = chars[start..].iter().take_while(|&&c| c != '-').count();
            if actual != expected {
                return Err(FormatError::InvalidGroup {
                    index,
                    expected,
                    actual,
                });
            }
            start += actual + 1;
        }

        Uuid::try_parse(body).map(Self).map_err(|_| {
            chars
                .iter()
                .enumerate()
                .find(|(_, c)| **c != '-' && !c.is_ascii_hexdigit())
                .map_or(
                    FormatError::InvalidLength { len: chars.len() },
                    |(position, &found)| FormatError::InvalidDigit {
                        position: position + offset,
                        found,
                    },
                )
        })
    }

    /// Renders the identifier using a selector string.
    ///
    /// `None` and unrecognized selectors produce the hyphenated form.
    #[must_use]
    pub fn render(&self, selector: Option<&str>) -> String {
        self.format(selector.map(Format::from_selector).unwrap_or_default())
    }

    /// Renders the identifier in the given form.
    #[must_use]
    pub fn format(&self, format: Format) -> String {
        match format {
            Format::Hyphenated => self.0.hyphenated().to_string(),
            Format::Braced => format!("{{{}}}", self.0.hyphenated()),
            Format::Struct => {
                let b = self.as_bytes();
                let tail: Vec<String> = b[8..].iter().map(|byte| format!("0x{byte:02x}")).collect();
                format!(
                    "{{0x{}, 0x{}, 0x{}, {{{}}}}}",
                    hex::encode(&b[0..4]),
                    hex::encode(&b[4..6]),
                    hex::encode(&b[6..8]),
                    tail.join(", ")
                )
            }
            Format::Simple => self.0.simple().to_string(),
        }
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for Guid {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for Guid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Guid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
