pub mod implementations;
pub mod trait_datasource;

pub use trait_datasource::DataSource;
