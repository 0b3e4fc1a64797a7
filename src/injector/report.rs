use indexmap::IndexMap;
use serde::Serialize;

/// Resumen de una ejecución de `TemplateInjector::process`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InjectReport {
    /// Assets elegibles procesados.
    pub scanned: usize,
    /// Assets elegibles con al menos un marcador.
    pub rewritten: usize,
    /// Ocurrencias de marcadores sustituidas.
    pub markers: usize,
    /// Llamadas emitidas al `DataSource`.
    pub fetches: usize,
    /// sha256 del contenido escrito por asset, en el orden del `AssetSet`.
    pub fingerprints: IndexMap<String, String>,
    /// Assets `*.html` omitidos por no ser UTF-8 válido.
    pub skipped: Vec<String>,
}

impl InjectReport {
    pub(crate) fn record(&mut self, asset: &str, markers: usize, digest: String) {
        self.scanned += 1;
        if markers > 0 {
            self.rewritten += 1;
        }
        self.markers += markers;
        self.fingerprints.insert(asset.to_string(), digest);
    }

    /// Fingerprint del asset escrito, si fue procesado.
    pub fn fingerprint(&self, asset: &str) -> Option<&str> {
        self.fingerprints.get(asset).map(String::as_str)
    }
}
