mod catalog;
mod group;
mod task;

pub use catalog::Catalog;
pub use group::{CatalogError, GroupId, ParseGroupIdError, TaskGroup};
pub use task::{TaskItem, Validity};
