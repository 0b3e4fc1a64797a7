//! Reconocimiento y sustitución de marcadores `<!-- replace="NAME" -->`.
//!
//! Es el único formato que el inyector entiende. `NAME` es cualquier
//! secuencia (posiblemente vacía) sin espacios; un comentario que no cierra
//! exactamente con `" -->` simplemente no se reconoce.
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<!-- replace="(\S*?)" -->"#).expect("patrón de marcador válido"));

/// Sufijo que hace a un asset elegible para sustitución.
pub const ELIGIBLE_SUFFIX: &str = ".html";

/// Ocurrencia de un marcador dentro del contenido de un asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// Texto completo reconocido, p.ej. `<!-- replace="header" -->`.
    pub literal: String,
    /// Nombre capturado entre comillas.
    pub name: String,
    /// Posición en bytes dentro del contenido escaneado.
    pub span: Range<usize>,
}

/// `true` si el nombre del asset termina exactamente en `.html`.
pub fn is_eligible(asset_name: &str) -> bool {
    asset_name.ends_with(ELIGIBLE_SUFFIX)
}

/// Devuelve todas las ocurrencias no solapadas, en orden de aparición.
pub fn scan_markers(content: &str) -> Vec<Marker> {
    MARKER_RE.captures_iter(content)
             .filter_map(|caps| {
                 let whole = caps.get(0)?;
                 let name = caps.get(1)?;
                 Some(Marker { literal: whole.as_str().to_string(),
                               name: name.as_str().to_string(),
                               span: whole.range() })
             })
             .collect()
}

/// Sustituye cada marcador por su valor, de forma independiente.
///
/// `markers` debe venir de `scan_markers(content)` y `values[i]` corresponde a
/// `markers[i]`. Los valores se insertan tal cual: no se vuelven a escanear y
/// no se interpreta ningún carácter especial (`$`, etc.).
pub fn substitute<S: AsRef<str>>(content: &str, markers: &[Marker], values: &[S]) -> String {
    debug_assert_eq!(markers.len(), values.len());
    let extra: usize = values.iter().map(|v| v.as_ref().len()).sum();
    let mut out = String::with_capacity(content.len() + extra);
    let mut cursor = 0;
    for (marker, value) in markers.iter().zip(values) {
        out.push_str(&content[cursor..marker.span.start]);
        out.push_str(value.as_ref());
        cursor = marker.span.end;
    }
    out.push_str(&content[cursor..]);
    out
}
