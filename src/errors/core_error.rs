use thiserror::Error;

use super::inject_error::InjectError;

/// Errores de nivel aplicación (CLI, carga de configuración, directorio dist).
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Error recorriendo directorio: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Inject(#[from] InjectError),
}
