//! Errores del crate, separados por capa.
pub mod core_error;
pub mod inject_error;
pub mod source_error;

pub use core_error::CoreError;
pub use inject_error::InjectError;
pub use source_error::SourceError;
