/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    /// One-based number of the trial on screen, capped at `total`.
    #[must_use]
    pub fn trial_number(&self) -> usize {
        (self.answered + 1).min(self.total)
    }
}
