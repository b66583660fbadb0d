mod data;
mod mock_hierarchy;

pub use data::{fast_argon2_params, MOCK_PEPPER, MOCK_PEPPER_STR};
pub use mock_hierarchy::MockHierarchy;
