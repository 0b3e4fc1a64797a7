//! Conjunto de assets indexado por nombre.
//!
//! El orden de inserción se conserva (`IndexMap`), incluso cuando una entrada
//! se reemplaza: la clave mantiene su posición original.
use std::sync::Arc;

use indexmap::IndexMap;

use super::record::{Asset, RawAsset};

#[derive(Debug, Clone, Default)]
pub struct AssetSet {
    entries: IndexMap<String, Arc<dyn Asset>>,
}

impl AssetSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserta o reemplaza un asset. Devuelve el registro anterior si existía.
    pub fn insert(&mut self, name: impl Into<String>, asset: Arc<dyn Asset>) -> Option<Arc<dyn Asset>> {
        self.entries.insert(name.into(), asset)
    }

    /// Atajo para insertar texto plano como `RawAsset`.
    pub fn insert_text(&mut self, name: impl Into<String>, text: impl Into<String>) -> Option<Arc<dyn Asset>> {
        self.insert(name, Arc::new(RawAsset::new(text)))
    }

    /// Reemplaza el contenido de un asset con un nuevo registro inmutable.
    pub fn replace(&mut self, name: &str, text: String) {
        match self.entries.get_mut(name) {
            Some(slot) => *slot = Arc::new(RawAsset::new(text)),
            None => {
                self.entries.insert(name.to_string(), Arc::new(RawAsset::new(text)));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Asset>> {
        self.entries.get(name)
    }

    /// Posición de `name` en el orden de inserción.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<dyn Asset>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AssetSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AssetSet::new();
        for (k, v) in iter {
            set.insert_text(k, v);
        }
        set
    }
}
