//! The configuration-filtered set of permitted heading levels.

use serde::Serialize;
use smol_str::SmolStr;

use crate::error::HeaderError;
use crate::level::{HeadingLevel, IconRef, LevelDescriptor};

/// Ordered, canonical (ascending) list of the levels a block may use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCatalog {
    entries: Vec<LevelDescriptor>,
}

impl LevelCatalog {
    /// Catalog of all six levels.
    pub fn full() -> Self {
        Self {
            entries: HeadingLevel::ALL.into_iter().map(LevelDescriptor::from).collect(),
        }
    }

    /// Catalog restricted to `allowed`, kept in canonical order regardless of
    /// the order of `allowed`. Duplicates collapse.
    pub fn from_levels(allowed: &[HeadingLevel]) -> Self {
        Self {
            entries: HeadingLevel::ALL
                .into_iter()
                .filter(|level| allowed.contains(level))
                .map(LevelDescriptor::from)
                .collect(),
        }
    }

    /// Build from an optional restriction, as the tool configuration carries it.
    pub fn from_restriction(levels: Option<&[HeadingLevel]>) -> Self {
        match levels {
            Some(allowed) => Self::from_levels(allowed),
            None => Self::full(),
        }
    }

    /// Look up the descriptor for `level`.
    pub fn get(&self, level: HeadingLevel) -> Result<LevelDescriptor, HeaderError> {
        self.entries
            .iter()
            .find(|entry| entry.level == level)
            .cloned()
            .ok_or(HeaderError::LevelNotFound { level: level.get() })
    }

    pub fn contains(&self, level: HeadingLevel) -> bool {
        self.entries.iter().any(|entry| entry.level == level)
    }

    /// All descriptors in canonical order.
    pub fn levels(&self) -> &[LevelDescriptor] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The catalog member closest to `target`; ties go to the lower level.
    ///
    /// Returns None only for an empty catalog.
    pub fn nearest(&self, target: HeadingLevel) -> Option<HeadingLevel> {
        nearest_level(self.entries.iter().map(|entry| entry.level), target)
    }
}

impl<'a> IntoIterator for &'a LevelCatalog {
    type Item = &'a LevelDescriptor;
    type IntoIter = std::slice::Iter<'a, LevelDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Left-to-right fold picking the candidate with the smallest distance to
/// `target`. A later candidate only wins with a strictly smaller distance, so
/// ties keep whichever came first in `candidates`.
pub fn nearest_level(
    candidates: impl IntoIterator<Item = HeadingLevel>,
    target: HeadingLevel,
) -> Option<HeadingLevel> {
    candidates.into_iter().reduce(|best, candidate| {
        if candidate.distance(target) < best.distance(target) {
            candidate
        } else {
            best
        }
    })
}

/// Payload of a toolbox sub-tool entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubToolData {
    pub level: HeadingLevel,
}

/// One toolbox entry per permitted level, in the shape the host consumes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubTool {
    #[serde(rename = "type")]
    pub kind: SmolStr,
    pub data: SubToolData,
    pub icon: IconRef,
}

/// Derive toolbox sub-tools from a level restriction.
///
/// Pure: the same restriction always yields the same list.
pub fn get_sub_tools(levels: Option<&[HeadingLevel]>) -> Vec<SubTool> {
    LevelCatalog::from_restriction(levels)
        .iter()
        .map(|entry| SubTool {
            kind: entry.tag.clone(),
            data: SubToolData { level: entry.level },
            icon: entry.icon.clone(),
        })
        .collect()
}
