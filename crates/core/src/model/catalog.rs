use crate::model::group::{GroupId, TaskGroup};
use crate::model::task::TaskItem;

/// The fixed pair of task groups offered by the experiment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    quotes: TaskGroup,
    concatenation: TaskGroup,
}

impl Catalog {
    #[must_use]
    pub fn new(quotes: TaskGroup, concatenation: TaskGroup) -> Self {
        Self {
            quotes,
            concatenation,
        }
    }

    /// The embedded expressions used by the experiment.
    #[must_use]
    pub fn builtin() -> Self {
        let quotes = TaskGroup::new_unchecked(
            "Group A (Quotes)",
            vec![
                TaskItem::valid(r#"X="Hello" AND "Hello"="Hello""#),
                TaskItem::valid(r#""X"="X" AND X="X""#),
                TaskItem::valid(r#""X"="X" AND "X"="X" AND X=X"#),
                // missing closing quote
                TaskItem::invalid(r#"X="X AND X="X"#),
                TaskItem::invalid(r#""X"= AND X=X"#),
                TaskItem::invalid(r#""X"="X AND "X"="X"#),
            ],
        );
        let concatenation = TaskGroup::new_unchecked(
            "Group B (--- Concatenation)",
            vec![
                TaskItem::valid(r#"X---"Hello" = "Hello"---X"#),
                TaskItem::valid(r#"X---X = X---X AND "X"---"X" = "XX""#),
                TaskItem::invalid(r#"X---"X" AND ---X"#),
                TaskItem::invalid(r#""X"--- AND X=X"#),
                // leading operator
                TaskItem::invalid(r#"---X = X--- AND "X"="X"#),
            ],
        );
        Self::new(quotes, concatenation)
    }

    #[must_use]
    pub fn group(&self, id: GroupId) -> &TaskGroup {
        match id {
            GroupId::Quotes => &self.quotes,
            GroupId::Concatenation => &self.concatenation,
        }
    }

    /// Groups in selector order.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &TaskGroup)> {
        GroupId::ALL.into_iter().map(|id| (id, self.group(id)))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
