//! Modelo de assets de build: registros inmutables y el conjunto ordenado
//! que el host entrega al inyector.
pub mod record;
pub mod set;

pub use record::{Asset, RawAsset};
pub use set::AssetSet;
