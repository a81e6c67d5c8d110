pub mod apply;
pub mod criteria;
pub mod error;

pub use apply::{apply, count_in_category};
pub use criteria::FilterCriteria;
pub use error::FilterError;
