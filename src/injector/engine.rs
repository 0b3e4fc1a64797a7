//! `TemplateInjector`: reescribe los assets HTML sustituyendo marcadores.
//!
//! Flujo de `process`:
//! 1. Se filtran los assets elegibles (`*.html`) y se lee su contenido.
//! 2. Todos se lanzan a la vez sobre la tarea del llamador
//!    (`FuturesUnordered`, sin `spawn`): sólo hay un hilo lógico y las
//!    suspensiones ocurren al esperar resoluciones.
//! 3. Cada asset escanea sus marcadores, espera en paralelo las resoluciones
//!    (compartidas vía `ResolutionCache`) y sustituye.
//! 4. Al terminar cada asset se escribe en el `AssetSet` y se decrementa el
//!    contador de pendientes; la ejecución acaba cuando llega a cero,
//!    independientemente del orden de iteración.
//!
//! Un fallo de resolución aborta el resto y se propaga: nunca se escribe un
//! asset con un marcador sin resolver.
use std::sync::Arc;

use futures_util::future::try_join_all;
use futures_util::stream::{FuturesUnordered, StreamExt};
use futures_util::FutureExt;
use log::{debug, info, warn};

use crate::assets::AssetSet;
use crate::config::InjectConfig;
use crate::errors::{CoreError, InjectError};
use crate::hashing::content_digest;
use crate::injector::cache::ResolutionCache;
use crate::injector::report::InjectReport;
use crate::marker::{is_eligible, scan_markers, substitute};
use crate::providers::DataSource;

pub struct TemplateInjector {
    source: Arc<dyn DataSource>,
}

/// Resultado de reescribir un asset, pendiente de escribirse en el set.
struct RewrittenAsset {
    name: String,
    content: String,
    markers: usize,
}

impl TemplateInjector {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Construye el inyector con la fuente descrita por `config`.
    pub async fn from_config(config: &InjectConfig) -> Result<Self, CoreError> {
        Ok(Self::new(config.build_source().await?))
    }

    pub fn source(&self) -> &Arc<dyn DataSource> {
        &self.source
    }

    /// Sustituye los marcadores de todos los assets elegibles de `assets`.
    ///
    /// Cada llamada usa un cache nuevo. Los assets no elegibles no se tocan,
    /// tampoco los `*.html` cuyo contenido no es UTF-8 válido.
    pub async fn process(&self, assets: &mut AssetSet) -> Result<InjectReport, InjectError> {
        let cache = ResolutionCache::new();
        let mut report = InjectReport::default();

        let mut eligible: Vec<(String, String)> = Vec::new();
        for (name, asset) in assets.iter().filter(|(name, _)| is_eligible(name)) {
            // Reescribir un asset decodificado con pérdidas destruiría sus bytes.
            if asset.is_lossy() {
                warn!("asset:skip name={name} reason=non-utf8");
                report.skipped.push(name.to_string());
                continue;
            }
            eligible.push((name.to_string(), asset.content().into_owned()));
        }
        if eligible.is_empty() {
            debug!("process:skip total={} eligible=0", assets.len());
            return Ok(report);
        }

        let mut pending = eligible.len();
        debug!("process:start total={} eligible={pending} source={}", assets.len(), self.source.name());

        let mut in_flight: FuturesUnordered<_> =
            eligible.into_iter()
                    .map(|(name, content)| rewrite_asset(&cache, &self.source, name, content))
                    .collect();

        while let Some(outcome) = in_flight.next().await {
            let done = match outcome {
                Ok(done) => done,
                Err(e) => {
                    warn!("process:abort pending={pending} err={e}");
                    return Err(e);
                }
            };
            pending -= 1;
            debug!("asset:done name={} markers={} pending={pending}", done.name, done.markers);
            report.record(&done.name, done.markers, content_digest(&done.content));
            assets.replace(&done.name, done.content);
        }

        // El reporte sigue el orden del set, no el de finalización.
        report.fingerprints.sort_by(|a, _, b, _| assets.position(a).cmp(&assets.position(b)));
        report.fetches = cache.fetches();
        info!("process:done scanned={} rewritten={} markers={} fetches={}",
              report.scanned, report.rewritten, report.markers, report.fetches);
        Ok(report)
    }
}

async fn rewrite_asset(cache: &ResolutionCache,
                       source: &Arc<dyn DataSource>,
                       name: String,
                       content: String)
                       -> Result<RewrittenAsset, InjectError> {
    let markers = scan_markers(&content);
    if markers.is_empty() {
        return Ok(RewrittenAsset { name, content, markers: 0 });
    }

    let lookups = markers.iter().map(|m| {
                                    let marker_name = m.name.clone();
                                    cache.resolve(&m.name, source).map(move |r| r.map_err(|e| (marker_name, e)))
                                });
    let values = try_join_all(lookups).await
                                      .map_err(|(marker_name, e)| InjectError::Resolution { asset: name.clone(),
                                                                                            name: marker_name,
                                                                                            source: e })?;

    let rewritten = substitute(&content, &markers, &values);
    Ok(RewrittenAsset { name, content: rewritten, markers: markers.len() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::RawAsset;
    use crate::providers::implementations::StaticDataSource;

    fn injector() -> TemplateInjector {
        TemplateInjector::new(Arc::new(StaticDataSource::demo()))
    }

    #[tokio::test]
    async fn test_empty_set_completes() {
        let mut assets = AssetSet::new();
        let report = injector().process(&mut assets).await.unwrap();
        assert_eq!(report, InjectReport::default());
    }

    #[tokio::test]
    async fn test_demo_header_footer() {
        let mut assets: AssetSet =
            [("index.html", r#"<body><!-- replace="header" --><main/><!-- replace="footer" --></body>"#)].into_iter()
                                                                                                       .collect();
        let report = injector().process(&mut assets).await.unwrap();
        assert_eq!(assets.get("index.html").unwrap().content(),
                   "<body><div>THIS IS HEADER</div><main/><div>THIS IS FOOTER</div></body>");
        assert_eq!(report.markers, 2);
        assert_eq!(report.fetches, 2);
    }

    #[tokio::test]
    async fn test_asset_without_markers_still_counted() {
        let mut assets: AssetSet = [("plain.html", "<p>hola</p>"), ("app.js", "x")].into_iter().collect();
        let report = injector().process(&mut assets).await.unwrap();
        assert_eq!(report.scanned, 1);
        assert_eq!(report.rewritten, 0);
        assert_eq!(assets.get("plain.html").unwrap().content(), "<p>hola</p>");
        assert_eq!(report.fingerprint("plain.html"), Some(content_digest("<p>hola</p>").as_str()));
    }

    #[tokio::test]
    async fn test_lossy_html_is_skipped_untouched() {
        let mut assets = AssetSet::new();
        let lossy: Arc<dyn crate::assets::Asset> =
            Arc::new(RawAsset::from_bytes(b"<p>caf\xE9</p><!-- replace=\"header\" -->"));
        assets.insert("legacy.html", Arc::clone(&lossy));
        assets.insert_text("index.html", r#"<!-- replace="header" -->"#);
        let report = injector().process(&mut assets).await.unwrap();
        assert_eq!(report.skipped, vec!["legacy.html"]);
        assert_eq!(report.scanned, 1);
        assert!(Arc::ptr_eq(&lossy, assets.get("legacy.html").unwrap()));
        assert_eq!(assets.get("index.html").unwrap().content(), "<div>THIS IS HEADER</div>");
    }

    #[tokio::test]
    async fn test_unknown_name_fails() {
        let mut assets: AssetSet = [("index.html", r#"<!-- replace="nav" -->"#)].into_iter().collect();
        let err = injector().process(&mut assets).await.unwrap_err();
        assert_eq!(err.marker_name(), Some("nav"));
        assert_eq!(assets.get("index.html").unwrap().content(), r#"<!-- replace="nav" -->"#);
    }
}
