//! Huellas de contenido para verificar que dos ejecuciones producen la misma
//! salida byte a byte.
use sha2::{Digest, Sha256};

/// sha256 del texto, en hexadecimal minúscula.
pub fn content_digest(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}
