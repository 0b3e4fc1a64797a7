//! Motor de sustitución de marcadores sobre un `AssetSet`.
//!
//! - `cache`: resoluciones por ejecución, deduplicadas por nombre.
//! - `engine`: `TemplateInjector::process`, lanza todos los assets elegibles
//!   a la vez y escribe cada uno al terminar.
//! - `report`: resumen de la ejecución.
pub mod cache;
pub mod engine;
pub mod report;

pub use cache::ResolutionCache;
pub use engine::TemplateInjector;
pub use report::InjectReport;
