//
// ─── VALIDITY ──────────────────────────────────────────────────────────────────
//

/// Ground-truth label of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Validity {
    Valid,
    Invalid,
}

impl Validity {
    /// Maps the `[1]` / `[0]` notation used in the instructions.
    #[must_use]
    pub fn from_flag(flag: bool) -> Self {
        if flag { Self::Valid } else { Self::Invalid }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

//
// ─── TASK ITEM ─────────────────────────────────────────────────────────────────
//

/// One expression shown to the participant, with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    label: Validity,
    text: String,
}

impl TaskItem {
    #[must_use]
    pub fn new(label: Validity, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn valid(text: impl Into<String>) -> Self {
        Self::new(Validity::Valid, text)
    }

    #[must_use]
    pub fn invalid(text: impl Into<String>) -> Self {
        Self::new(Validity::Invalid, text)
    }

    #[must_use]
    pub fn label(&self) -> Validity {
        self.label
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether a participant answering `says_valid` judged this item correctly.
    #[must_use]
    pub fn is_correct_answer(&self, says_valid: bool) -> bool {
        self.label == Validity::from_flag(says_valid)
    }
}
