//! Fuente que resuelve cada nombre a un archivo `<raíz>/<nombre>.html`.
//! La clave vacía se resuelve a `<raíz>/.html`.
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;

use crate::errors::SourceError;
use crate::providers::DataSource;

#[derive(Debug, Clone)]
pub struct DirectoryDataSource {
    root: PathBuf,
}

impl DirectoryDataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn fragment_path(&self, key: &str) -> Result<PathBuf, SourceError> {
        // La clave no puede escapar de la raíz.
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(SourceError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.html")))
    }
}

#[async_trait]
impl DataSource for DirectoryDataSource {
    fn name(&self) -> &str {
        "directory"
    }

    async fn fetch(&self, key: &str) -> Result<String, SourceError> {
        let path = self.fragment_path(key)?;
        debug!("directory:fetch key={key} path={}", path.display());
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SourceError::NotFound(key.to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_fragment_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("footer.html"), "<footer/>").unwrap();
        let src = DirectoryDataSource::new(dir.path());
        assert_eq!(src.fetch("footer").await.unwrap(), "<footer/>");
        assert!(matches!(src.fetch("header").await, Err(SourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rejects_escaping_keys() {
        let src = DirectoryDataSource::new("/tmp");
        for key in ["..", "../etc/passwd", "a/b", r"a\b"] {
            assert!(matches!(src.fetch(key).await, Err(SourceError::InvalidKey(_))), "key {key:?}");
        }
    }
}
