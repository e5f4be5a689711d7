use services::TrialRunner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupOptionVm {
    /// Selector value, parsed back with `GroupId::from_str`.
    pub value: String,
    pub name: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupVm {
    pub groups: Vec<GroupOptionVm>,
    pub selected_value: String,
    pub max_count: usize,
    pub count_prompt: String,
    pub count_input: String,
}

#[must_use]
pub fn map_setup(runner: &TrialRunner) -> SetupVm {
    let selected = runner.selected_group();
    let groups = runner
        .catalog()
        .groups()
        .map(|(id, group)| GroupOptionVm {
            value: id.to_string(),
            name: group.name().to_string(),
            selected: id == selected,
        })
        .collect();
    let max_count = runner.max_count();

    SetupVm {
        groups,
        selected_value: selected.to_string(),
        max_count,
        count_prompt: format!("Enter the number of items to go through (max {max_count}):"),
        count_input: runner.count_input().to_string(),
    }
}
