use crate::model::filter::{CategoryFilter, FilterState, StatusFilter};
use crate::model::task::Task;

/// The tasks that pass both filters, in store order
pub fn derive_view(tasks: &[Task], status: StatusFilter, category: CategoryFilter) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| status.matches(t))
        .filter(|t| category.matches(t))
        .collect()
}

/// `derive_view` with both selectors taken from a `FilterState`
pub fn derive_view_for(tasks: &[Task], filter: FilterState) -> Vec<&Task> {
    derive_view(tasks, filter.status, filter.category)
}
