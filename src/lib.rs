//! AssetInject Rust Library
//!
//! Etapa de post-procesado de assets de build: busca marcadores
//! `<!-- replace="NAME" -->` en los assets HTML, resuelve cada nombre con un
//! `DataSource` asíncrono (una sola vez por ejecución) y reescribe el asset.
//!
//! - `assets`: modelo `Asset` / `AssetSet`.
//! - `marker`: escaneo y sustitución literal.
//! - `providers`: contrato `DataSource` e implementaciones.
//! - `injector`: `TemplateInjector::process`.
//! - `config`, `dist`: configuración y adaptador de directorio para la CLI.

pub mod assets;
pub mod config;
pub mod dist;
pub mod errors;
pub mod hashing;
pub mod injector;
pub mod marker;
pub mod providers;

pub use assets::{Asset, AssetSet, RawAsset};
pub use config::{InjectConfig, SourceConfig};
pub use errors::{CoreError, InjectError, SourceError};
pub use injector::{InjectReport, TemplateInjector};
pub use providers::DataSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_from_default_config_uses_demo_source() {
        let injector = TemplateInjector::from_config(&InjectConfig::default()).await.unwrap();
        assert_eq!(injector.source().name(), "static");
        let mut assets: AssetSet = [("index.html", r#"<!-- replace="footer" -->"#)].into_iter().collect();
        injector.process(&mut assets).await.unwrap();
        assert_eq!(assets.get("index.html").unwrap().content(), "<div>THIS IS FOOTER</div>");
    }
}
