use thiserror::Error;

use super::source_error::SourceError;

/// Errores de una ejecución de `TemplateInjector::process`.
#[derive(Debug, Error)]
pub enum InjectError {
    /// El `DataSource` falló para un nombre referenciado por un asset elegible.
    /// La ejecución completa se considera fallida.
    #[error("no se pudo resolver {name:?} para el asset {asset}: {source}")]
    Resolution {
        asset: String,
        name: String,
        #[source]
        source: SourceError,
    },
    #[error("error de configuración: {0}")]
    Config(String),
}

impl InjectError {
    /// Nombre del marcador que no pudo resolverse, si aplica.
    pub fn marker_name(&self) -> Option<&str> {
        match self {
            Self::Resolution { name, .. } => Some(name),
            Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_format() {
        let err = InjectError::Resolution { asset: "index.html".into(),
                                            name: "footer".into(),
                                            source: SourceError::NotFound("footer".into()) };
        assert_eq!(err.to_string(),
                   "no se pudo resolver \"footer\" para el asset index.html: fragmento no encontrado: \"footer\"");
        assert_eq!(err.marker_name(), Some("footer"));
    }

    #[test]
    fn test_config_has_no_marker() {
        let err = InjectError::Config("sin fuente".into());
        assert_eq!(err.marker_name(), None);
    }
}
