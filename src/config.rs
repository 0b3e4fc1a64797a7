//! Configuración del inyector.
//! La única opción que afecta al comportamiento es la fuente de fragmentos
//! (`source`); opcionalmente se puede limitar la duración de cada `fetch`.
//!
//! Se carga desde variables de entorno (con `.env` si existe) o desde un
//! archivo JSON:
//! - `INJECT_SOURCE`: `demo` | `json:<ruta>` | `dir:<ruta>` (por defecto `demo`).
//! - `INJECT_FETCH_TIMEOUT_MS`: milisegundos, opcional.
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::providers::implementations::{DirectoryDataSource, JsonFileDataSource, StaticDataSource, TimeoutDataSource};
use crate::providers::DataSource;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}

/// Origen de los fragmentos que reemplazan a los marcadores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SourceConfig {
    /// Fragmentos de demostración (`header`, `footer`).
    #[default]
    Demo,
    /// Mapa literal nombre -> fragmento.
    Static(HashMap<String, String>),
    /// Archivo JSON plano con el mapa.
    JsonFile(PathBuf),
    /// Directorio con un `<nombre>.html` por fragmento.
    Directory(PathBuf),
}

impl SourceConfig {
    /// Construye la fuente descrita.
    pub async fn build(&self) -> Result<Arc<dyn DataSource>, CoreError> {
        let source: Arc<dyn DataSource> = match self {
            SourceConfig::Demo => Arc::new(StaticDataSource::demo()),
            SourceConfig::Static(entries) => Arc::new(StaticDataSource::new(entries.clone())),
            SourceConfig::JsonFile(path) => Arc::new(JsonFileDataSource::load(path).await?),
            SourceConfig::Directory(root) => {
                if !root.is_dir() {
                    return Err(CoreError::Config(format!("no es un directorio: {}", root.display())));
                }
                Arc::new(DirectoryDataSource::new(root.clone()))
            }
        };
        Ok(source)
    }
}

impl FromStr for SourceConfig {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "demo" {
            return Ok(SourceConfig::Demo);
        }
        match s.split_once(':') {
            Some(("json", path)) if !path.is_empty() => Ok(SourceConfig::JsonFile(PathBuf::from(path))),
            Some(("dir", path)) if !path.is_empty() => Ok(SourceConfig::Directory(PathBuf::from(path))),
            _ => Err(CoreError::Config(format!("fuente desconocida: {s:?} (esperado demo | json:<ruta> | dir:<ruta>)"))),
        }
    }
}

impl fmt::Display for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceConfig::Demo => write!(f, "demo"),
            SourceConfig::Static(entries) => write!(f, "static({} entradas)", entries.len()),
            SourceConfig::JsonFile(path) => write!(f, "json:{}", path.display()),
            SourceConfig::Directory(path) => write!(f, "dir:{}", path.display()),
        }
    }
}

/// Configuración de una instancia de `TemplateInjector`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_ms: Option<u64>,
}

impl InjectConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let source = match env::var("INJECT_SOURCE") {
            Ok(v) => v.parse()?,
            Err(_) => SourceConfig::default(),
        };
        let fetch_timeout_ms = match env::var("INJECT_FETCH_TIMEOUT_MS") {
            Ok(v) => Some(v.trim()
                           .parse()
                           .map_err(|_| CoreError::Config(format!("INJECT_FETCH_TIMEOUT_MS inválido: {v:?}")))?),
            Err(_) => None,
        };
        Ok(Self { source, fetch_timeout_ms })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_ms.map(Duration::from_millis)
    }

    /// Fuente final, envuelta con timeout si se configuró.
    pub async fn build_source(&self) -> Result<Arc<dyn DataSource>, CoreError> {
        let source = self.source.build().await?;
        let Some(limit) = self.fetch_timeout() else {
            return Ok(source);
        };
        let limited: Arc<dyn DataSource> = Arc::new(TimeoutDataSource::new(source, limit));
        Ok(limited)
    }
}
