//! Trait para fuentes de fragmentos.
//! Un `DataSource` resuelve el nombre de un marcador al texto que lo
//! reemplaza. El transporte (red, disco, mapa estático) es opaco para el
//! inyector; éste sólo garantiza que cada nombre distinto se pide una vez por
//! ejecución.
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::SourceError;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Nombre legible de la fuente (para logs).
    fn name(&self) -> &str;

    /// Resuelve `key` (puede ser la cadena vacía) a su texto de reemplazo.
    async fn fetch(&self, key: &str) -> Result<String, SourceError>;
}

#[async_trait]
impl<T: DataSource + ?Sized> DataSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn fetch(&self, key: &str) -> Result<String, SourceError> {
        (**self).fetch(key).await
    }
}
