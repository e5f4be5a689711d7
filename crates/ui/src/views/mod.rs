mod experiment;
mod explanation;
mod modal;
mod results;
mod setup;
mod shell;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use experiment::ExperimentView;
pub use explanation::ExplanationView;
pub use modal::ConfirmModal;
pub use results::ResultsView;
pub use setup::SetupView;
pub use shell::ExperimentShell;
