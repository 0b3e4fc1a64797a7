use std::borrow::Cow;
use std::fmt;

/// Contrato de un asset producido por el build.
///
/// `size()` se deriva de `content()` en cada llamada; no se cachea.
pub trait Asset: Send + Sync + fmt::Debug {
    fn content(&self) -> Cow<'_, str>;

    fn size(&self) -> usize {
        self.content().len()
    }

    /// `true` si `content()` no refleja los bytes originales (decodificación
    /// lossy). Un asset así nunca debe reescribirse.
    fn is_lossy(&self) -> bool {
        false
    }
}

/// Asset inmutable con texto propio. Es el registro que escribe el
/// inyector para cada asset reescrito.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAsset {
    text: String,
    lossy: bool,
}

impl RawAsset {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), lossy: false }
    }

    /// Construye desde bytes arbitrarios; secuencias no UTF-8 se reemplazan
    /// y el registro queda marcado como lossy.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        match String::from_utf8_lossy(bytes) {
            Cow::Borrowed(text) => Self { text: text.to_string(), lossy: false },
            Cow::Owned(text) => Self { text, lossy: true },
        }
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

impl Asset for RawAsset {
    fn content(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }

    fn is_lossy(&self) -> bool {
        self.lossy
    }
}

impl From<String> for RawAsset {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&str> for RawAsset {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_raw_asset_size_is_byte_length() {
        let a = RawAsset::new("<p>ñ</p>");
        assert_eq!(a.content(), "<p>ñ</p>");
        assert_eq!(a.size(), "<p>ñ</p>".len());
    }

    #[test]
    fn test_from_bytes_lossy() {
        let a = RawAsset::from_bytes(&[0x61, 0xff, 0x62]);
        assert_eq!(a.content(), "a\u{fffd}b");
        assert!(a.is_lossy());
    }

    #[test]
    fn test_from_valid_utf8_bytes_is_exact() {
        let a = RawAsset::from_bytes("café".as_bytes());
        assert_eq!(a.content(), "café");
        assert!(!a.is_lossy());
        assert!(!RawAsset::new("x").is_lossy());
    }

    // Un asset cuyo contenido cambia: size() debe reflejar el contenido actual.
    #[derive(Debug)]
    struct Swappable(Mutex<String>);

    impl Asset for Swappable {
        fn content(&self) -> Cow<'_, str> {
            Cow::Owned(self.0.lock().unwrap().clone())
        }
    }

    #[test]
    fn test_size_not_cached() {
        let a = Swappable(Mutex::new("abc".into()));
        assert_eq!(a.size(), 3);
        *a.0.lock().unwrap() = "abcdef".into();
        assert_eq!(a.size(), 6);
    }
}
