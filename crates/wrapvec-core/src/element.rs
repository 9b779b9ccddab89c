//! Element kinds and the [`Element`] trait.

use std::cmp::Ordering;
use std::fmt;

/// Informational classifier for the values a container stores.
///
/// The kind is fixed per element type (it is an associated constant of
/// [`Element`]) and never changes for the lifetime of a container. It
/// selects the default ordering used by `bubble_sort` and is reported by
/// `Debug` output; it is never checked against the stored values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    /// Opaque data with no intrinsic order.
    Generic,
    /// Single characters or bytes.
    Char,
    /// Strings.
    Text,
    /// Signed or unsigned integers.
    Integer,
    /// Floating point numbers.
    Float,
    /// Raw pointers.
    Pointer,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: [ElementKind; 6] = [
        Self::Generic,
        Self::Char,
        Self::Text,
        Self::Integer,
        Self::Float,
        Self::Pointer,
    ];

    /// Whether the built-in [`Element::default_order`] impls are
    /// meaningful for this kind.
    ///
    /// Only the integer impls carry a default ordering; the other built-in
    /// impls compare as `Equal`. A user type may still override
    /// `default_order` regardless of its kind.
    pub fn is_ordered(self) -> bool {
        matches!(self, Self::Integer)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Generic => "generic",
            Self::Char => "char",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Pointer => "pointer",
        };
        f.write_str(name)
    }
}

/// A value that can be stored in a wrapvec container.
///
/// [`same`](Element::same) is the identity used by `find`, `count`,
/// `remove_duplicates`, and the set operations. `Clone` produces the owned
/// copies handed out by `read` and `pop`.
///
/// User types get the [`Generic`](ElementKind::Generic) kind, `PartialEq`
/// identity, and the "everything is equal" default ordering unless they
/// override them:
///
/// ```
/// use wrapvec_core::{Element, ElementKind};
///
/// #[derive(Clone, PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// impl Element for Point {}
///
/// assert_eq!(Point::KIND, ElementKind::Generic);
/// ```
pub trait Element: Clone + PartialEq {
    /// The informational kind of this element type.
    const KIND: ElementKind = ElementKind::Generic;

    /// Whether two elements are the same value for searching and set
    /// membership.
    ///
    /// Must be reflexive. The provided implementation is `==`. Floats
    /// override it with bitwise equality, so `NaN` finds itself and `0.0`
    /// and `-0.0` stay distinct.
    fn same(&self, other: &Self) -> bool {
        self == other
    }

    /// Default ordering between two elements.
    ///
    /// `Less` means `self` sorts before `other`. The provided
    /// implementation treats all values as mutually unordered.
    ///
    /// A user type may override this whatever its [`KIND`](Element::KIND);
    /// [`ElementKind::is_ordered`] only describes the built-in impls.
    fn default_order(&self, other: &Self) -> Ordering {
        let _ = other;
        Ordering::Equal
    }
}

macro_rules! integer_elements {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const KIND: ElementKind = ElementKind::Integer;

                fn default_order(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

integer_elements!(i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize);

impl Element for u8 {
    const KIND: ElementKind = ElementKind::Char;
}

impl Element for char {
    const KIND: ElementKind = ElementKind::Char;
}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::Float;

    fn same(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float;

    fn same(&self, other: &Self) -> bool {
        self.to_bits() == other.to_bits()
    }
}

impl Element for String {
    const KIND: ElementKind = ElementKind::Text;
}

impl Element for &'static str {
    const KIND: ElementKind = ElementKind::Text;
}

impl<U: ?Sized> Element for *const U {
    const KIND: ElementKind = ElementKind::Pointer;
}

impl<U: ?Sized> Element for *mut U {
    const KIND: ElementKind = ElementKind::Pointer;
}

impl Element for bool {}

impl Element for () {}

macro_rules! tuple_elements {
    ($(($($name:ident $idx:tt),+)),* $(,)?) => {
        $(
            impl<$($name: Element),+> Element for ($($name,)+) {
                fn same(&self, other: &Self) -> bool {
                    $(self.$idx.same(&other.$idx))&&+
                }
            }
        )*
    };
}

tuple_elements!((A 0, B 1), (A 0, B 1, C 2), (A 0, B 1, C 2, D 3));

impl<T: Element, const N: usize> Element for [T; N] {
    fn same(&self, other: &Self) -> bool {
        self.iter().zip(other).all(|(a, b)| a.same(b))
    }
}
