//! Errores de un `DataSource`.
//!
//! `SourceError` es `Clone` porque la misma resolución en vuelo se comparte
//! entre todas las ocurrencias de un nombre (ver `injector::cache`), y cada
//! una debe poder observar el fallo.
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SourceError {
    #[error("fragmento no encontrado: {0:?}")]
    NotFound(String),
    #[error("clave inválida: {0:?}")]
    InvalidKey(String),
    #[error("timeout tras {elapsed:?} resolviendo {name:?}")]
    Timeout { name: String, elapsed: Duration },
    #[error("error de IO: {0}")]
    Io(Arc<std::io::Error>),
    #[error("error remoto: {0}")]
    Remote(String),
}

impl From<std::io::Error> for SourceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
