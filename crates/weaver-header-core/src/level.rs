//! Heading levels and their fixed tag/icon mapping.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::{SmolStr, format_smolstr};

/// Heading rank, 1 (most prominent) through 6.
///
/// The inner value is always in `1..=6`; construct through [`HeadingLevel::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const H1: HeadingLevel = HeadingLevel(1);
    pub const H2: HeadingLevel = HeadingLevel(2);
    pub const H3: HeadingLevel = HeadingLevel(3);
    pub const H4: HeadingLevel = HeadingLevel(4);
    pub const H5: HeadingLevel = HeadingLevel(5);
    pub const H6: HeadingLevel = HeadingLevel(6);

    /// All levels in canonical ascending order.
    pub const ALL: [HeadingLevel; 6] = [
        Self::H1,
        Self::H2,
        Self::H3,
        Self::H4,
        Self::H5,
        Self::H6,
    ];

    /// Level used when neither data nor configuration name one.
    pub const DEFAULT: HeadingLevel = Self::H2;

    /// Create a level, returning None outside `1..=6`.
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    /// Create a level from any integer, returning None outside `1..=6`.
    pub fn from_i64(level: i64) -> Option<Self> {
        u8::try_from(level).ok().and_then(Self::new)
    }

    /// Match a markup tag name (`H1`..`H6`, case-insensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let digits = tag.strip_prefix(['H', 'h'])?;
        if digits.len() != 1 {
            return None;
        }
        digits.parse::<u8>().ok().and_then(Self::new)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Markup tag name, e.g. `H3`.
    pub fn tag(self) -> SmolStr {
        format_smolstr!("H{}", self.0)
    }

    /// Absolute numeric distance to another level.
    pub fn distance(self, other: HeadingLevel) -> u8 {
        self.0.abs_diff(other.0)
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H{}", self.0)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("heading level {value} is outside 1..=6"))
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

/// Reference into the host's icon set.
///
/// The core never carries icon markup; hosts resolve the key to whatever
/// asset they render (SVG, font glyph, plain label).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub SmolStr);

impl IconRef {
    /// Icon for the toolbox entry of the whole tool.
    pub fn tool() -> Self {
        Self(SmolStr::new_static("heading"))
    }

    /// Icon for a single heading level, keyed by its tag.
    pub fn for_level(level: HeadingLevel) -> Self {
        Self(level.tag())
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// A catalog entry: level with its tag and icon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelDescriptor {
    pub level: HeadingLevel,
    pub tag: SmolStr,
    pub icon: IconRef,
}

impl From<HeadingLevel> for LevelDescriptor {
    fn from(level: HeadingLevel) -> Self {
        Self {
            level,
            tag: level.tag(),
            icon: IconRef::for_level(level),
        }
    }
}
