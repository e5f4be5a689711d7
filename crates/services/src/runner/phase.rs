/// Screen the runner is currently on. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Explanation,
    Setup,
    Experiment,
    Results,
}
