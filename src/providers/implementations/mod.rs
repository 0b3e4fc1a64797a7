pub mod directory_source;
pub mod json_file_source;
pub mod static_source;
pub mod timeout_source;

pub use directory_source::DirectoryDataSource;
pub use json_file_source::JsonFileDataSource;
pub use static_source::StaticDataSource;
pub use timeout_source::TimeoutDataSource;
