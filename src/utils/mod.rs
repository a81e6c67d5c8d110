pub mod environment;
pub mod paths;

pub use environment::{default_catalog_path, get_data_dir};
pub use paths::{format_path_with_tilde, validate_file_size};
