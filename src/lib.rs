//! Content core for a developer-portfolio site: the typed data model, the
//! immutable project repository with its query functions, and the JSON
//! snapshot the static frontend consumes.

pub mod core;
pub mod error;
pub mod export;
pub mod types;

pub use crate::core::data::{developer_info, projects, DEVELOPER, REPOSITORY};
pub use crate::core::repository::{
    AdjacentProjects, ProjectRepository, ALL_CATEGORIES, FEATURED_COUNT,
};
pub use crate::error::{DataError, Result};
pub use crate::types::{Category, DeveloperInfo, Project};
