//! Adaptador de directorio de salida (`dist/`) para usar el inyector fuera de
//! un bundler: carga todos los archivos como `AssetSet` y escribe de vuelta
//! sólo los que cambiaron.
use std::path::Path;
use std::sync::Arc;

use log::debug;
use walkdir::WalkDir;

use crate::assets::{Asset, AssetSet, RawAsset};
use crate::errors::CoreError;

/// Carga recursivamente `root`. Las claves son rutas relativas con `/`.
///
/// Los archivos que no son UTF-8 se guardan de forma lossy y quedan marcados
/// (`Asset::is_lossy`); el inyector los omite, así que nunca se reescriben.
pub fn load_dir(root: impl AsRef<Path>) -> Result<AssetSet, CoreError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(CoreError::Config(format!("directorio de salida inexistente: {}", root.display())));
    }
    let mut assets = AssetSet::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path()
                       .strip_prefix(root)
                       .map_err(|e| CoreError::Config(format!("ruta fuera de {}: {e}", root.display())))?;
        let key = rel.components()
                     .map(|c| c.as_os_str().to_string_lossy())
                     .collect::<Vec<_>>()
                     .join("/");
        let bytes = std::fs::read(entry.path())?;
        debug!("dist:load key={key} bytes={}", bytes.len());
        assets.insert(key, Arc::new(RawAsset::from_bytes(&bytes)));
    }
    Ok(assets)
}

/// Escribe en `root` los assets de `after` cuyo contenido difiere de `before`.
/// Devuelve las claves escritas, en el orden del set.
pub fn write_changed(root: impl AsRef<Path>, before: &AssetSet, after: &AssetSet) -> Result<Vec<String>, CoreError> {
    let root = root.as_ref();
    let mut written = Vec::new();
    for (name, asset) in after.iter() {
        let unchanged = match before.get(name) {
            Some(prev) => Arc::ptr_eq(prev, asset) || prev.content() == asset.content(),
            None => false,
        };
        if unchanged || asset.is_lossy() {
            continue;
        }
        let path = root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, asset.content().as_bytes())?;
        debug!("dist:write key={name} bytes={}", asset.size());
        written.push(name.to_string());
    }
    Ok(written)
}
