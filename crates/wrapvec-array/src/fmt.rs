//! Text rendering.

use std::fmt;

use wrapvec_core::Element;

use crate::array::DynArray;

/// Renders as `{a, b, c}`.
impl<T: Element + fmt::Display> fmt::Display for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("}")
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("kind", &T::KIND)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("data", &self.as_slice())
            .finish()
    }
}

impl DynArray<u8> {
    /// The bytes as text, with invalid UTF-8 replaced by `U+FFFD`.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.as_slice()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_braced_list() {
        let array = DynArray::from_slice(&[1, 2, 3]).unwrap();
        assert_eq!(array.to_string(), "{1, 2, 3}");
    }

    #[test]
    fn display_empty() {
        let array: DynArray<f32> = DynArray::new();
        assert_eq!(array.to_string(), "{}");
    }

    #[test]
    fn display_forwards_format_spec() {
        let array = DynArray::from_slice(&[1.5f64, 2.75]).unwrap();
        assert_eq!(format!("{array:.1}"), "{1.5, 2.8}");
    }

    #[test]
    fn debug_includes_kind_and_capacity() {
        let array = DynArray::from_slice(&[7i64]).unwrap();
        let text = format!("{array:?}");
        assert!(text.contains("kind: Integer"));
        assert!(text.contains("capacity: 16"));
        assert!(text.contains("data: [7]"));
    }

    #[test]
    fn bytes_as_text() {
        let array = DynArray::from_slice(b"Hello").unwrap();
        assert_eq!(array.to_text(), "Hello");
        let broken = DynArray::from_slice(&[b'a', 0xff]).unwrap();
        assert_eq!(broken.to_text(), "a\u{fffd}");
    }
}
