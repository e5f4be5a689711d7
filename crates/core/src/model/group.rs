use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::task::TaskItem;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("group name cannot be empty")]
    EmptyName,

    #[error("group {name:?} has no tasks")]
    EmptyGroup { name: String },
}

/// Error returned when a group selector value cannot be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown task group: {raw:?}")]
pub struct ParseGroupIdError {
    raw: String,
}

//
// ─── GROUP ID ──────────────────────────────────────────────────────────────────
//

/// The two fixed task groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroupId {
    /// Group A: expressions built from quotation marks.
    #[default]
    Quotes,
    /// Group B: expressions built from the `---` concatenation operator.
    Concatenation,
}

impl GroupId {
    pub const ALL: [GroupId; 2] = [GroupId::Quotes, GroupId::Concatenation];

    /// Position of the group in selector order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            GroupId::Quotes => 0,
            GroupId::Concatenation => 1,
        }
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

impl FromStr for GroupId {
    type Err = ParseGroupIdError;

    /// Accepts the selector index (`0`, `1`), the group letter, or its style name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "a" | "quotes" => Ok(GroupId::Quotes),
            "1" | "b" | "concatenation" | "---" => Ok(GroupId::Concatenation),
            _ => Err(ParseGroupIdError { raw: s.to_string() }),
        }
    }
}

//
// ─── TASK GROUP ────────────────────────────────────────────────────────────────
//

/// A named, ordered set of expressions sharing one notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    name: String,
    tasks: Vec<TaskItem>,
}

impl TaskGroup {
    /// # Errors
    ///
    /// Returns `CatalogError::EmptyName` for a blank name and
    /// `CatalogError::EmptyGroup` when no tasks are given.
    pub fn new(name: impl Into<String>, tasks: Vec<TaskItem>) -> Result<Self, CatalogError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if tasks.is_empty() {
            return Err(CatalogError::EmptyGroup { name });
        }
        Ok(Self { name, tasks })
    }

    /// Constant catalog data, known to be non-empty.
    pub(crate) fn new_unchecked(name: &str, tasks: Vec<TaskItem>) -> Self {
        Self {
            name: name.to_string(),
            tasks,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tasks(&self) -> &[TaskItem] {
        &self.tasks
    }

    /// Largest count a session can request from this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
