mod results_vm;
mod setup_vm;
mod time_fmt;
mod trial_vm;

pub use results_vm::{ResultsVm, TrialRowVm, map_results};
pub use setup_vm::{GroupOptionVm, SetupVm, map_setup};
pub use time_fmt::{format_percent, format_seconds};
pub use trial_vm::{TrialVm, map_trial};
