pub mod types;

pub use types::{fold_case, FilterCriteria, Satellite, SearchQuery};
