//! Fuente respaldada por un archivo JSON plano `{ "nombre": "fragmento" }`.
//! El archivo se lee una sola vez al construir la fuente.
use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::errors::{CoreError, SourceError};
use crate::providers::implementations::static_source::StaticDataSource;
use crate::providers::DataSource;

#[derive(Debug, Clone)]
pub struct JsonFileDataSource {
    inner: StaticDataSource,
}

impl JsonFileDataSource {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let entries: HashMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { inner: StaticDataSource::new(entries) })
    }
}

#[async_trait]
impl DataSource for JsonFileDataSource {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn fetch(&self, key: &str) -> Result<String, SourceError> {
        self.inner.fetch(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fragments.json");
        std::fs::write(&path, r#"{ "header": "<h1>H</h1>" }"#).unwrap();
        let src = JsonFileDataSource::load(&path).await.unwrap();
        assert_eq!(src.fetch("header").await.unwrap(), "<h1>H</h1>");
        assert!(src.fetch("footer").await.is_err());
    }

    #[test]
    fn test_rejects_non_string_values() {
        let err = JsonFileDataSource::from_json_str(r#"{ "n": 1 }"#).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }
}
