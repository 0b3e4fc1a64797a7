use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::providers::DataSource;

/// Fuente en memoria. Una clave ausente es `SourceError::NotFound`.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    entries: HashMap<String, String>,
}

impl StaticDataSource {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Fragmentos por defecto cuando el host no configura ninguna fuente.
    pub fn demo() -> Self {
        [("header", "<div>THIS IS HEADER</div>"), ("footer", "<div>THIS IS FOOTER</div>")].into_iter().collect()
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticDataSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, key: &str) -> Result<String, SourceError> {
        self.entries.get(key).cloned().ok_or_else(|| SourceError::NotFound(key.to_string()))
    }
}
