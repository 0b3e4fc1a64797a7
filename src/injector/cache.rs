//! Cache de resoluciones de una ejecución.
//!
//! Cada nombre distinto se asocia a una única resolución compartida
//! (`Shared`): la primera ocurrencia dispara el `fetch` y todas las demás,
//! del mismo asset o de otro, esperan ese mismo resultado. Así un nombre se
//! pide al `DataSource` como máximo una vez por ejecución, aunque la primera
//! resolución siga en vuelo.
//!
//! El cache vive lo que dura un `process`; nunca es global.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use log::debug;

use crate::errors::SourceError;
use crate::providers::DataSource;

/// Resolución en vuelo (o ya terminada) de un nombre.
pub type SharedFetch = Shared<BoxFuture<'static, Result<String, SourceError>>>;

#[derive(Default)]
pub struct ResolutionCache {
    entries: DashMap<String, SharedFetch>,
    fetches: AtomicUsize,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Devuelve la resolución de `name`, iniciándola si es la primera vez.
    pub fn resolve(&self, name: &str, source: &Arc<dyn DataSource>) -> SharedFetch {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| {
                self.fetches.fetch_add(1, Ordering::Relaxed);
                debug!("cache:miss name={name:?} source={}", source.name());
                let source = Arc::clone(source);
                let key = name.to_string();
                async move { source.fetch(&key).await }.boxed().shared()
            })
            .value()
            .clone()
    }

    /// Valor ya resuelto con éxito para `name`, si existe.
    pub fn resolved(&self, name: &str) -> Option<String> {
        self.entries.get(name).and_then(|f| f.peek().and_then(|r| r.as_ref().ok().cloned()))
    }

    /// Número de llamadas emitidas al `DataSource`.
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }

    /// Número de nombres distintos vistos.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
