//! The boundary between enum sets and serializers
//!
//! Every set exposes its raw value through [`EnumSetMarker::repr`], tagged with
//! the family and width it belongs to. Serializers match on [`EnumSetRepr`]
//! and never have to guess the concrete set type.

#[cfg(feature = "serde-1")]
use serde::{Serialize, Serializer};

/// The raw value of an enum set, tagged with its family and width
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EnumSetRepr<'a> {
    Byte(u8),
    Short(u16),
    Int(u32),
    Long(u64),
    /// The token characters of a [`TokenEnumSet`](crate::TokenEnumSet)
    Tokens(&'a str),
}

impl EnumSetRepr<'_> {
    /// Returns the bitmap widened to `u64`, `None` for token strings
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            EnumSetRepr::Byte(b) => Some(b.into()),
            EnumSetRepr::Short(b) => Some(b.into()),
            EnumSetRepr::Int(b) => Some(b.into()),
            EnumSetRepr::Long(b) => Some(b),
            EnumSetRepr::Tokens(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match *self {
            EnumSetRepr::Tokens(s) => Some(s),
            _ => None,
        }
    }
}

/// Implemented by every enum set container
pub trait EnumSetMarker {
    fn repr(&self) -> EnumSetRepr<'_>;
}

#[cfg(feature = "serde-1")]
impl Serialize for EnumSetRepr<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            EnumSetRepr::Byte(b) => serializer.serialize_u8(b),
            EnumSetRepr::Short(b) => serializer.serialize_u16(b),
            EnumSetRepr::Int(b) => serializer.serialize_u32(b),
            EnumSetRepr::Long(b) => serializer.serialize_u64(b),
            EnumSetRepr::Tokens(s) => serializer.serialize_str(s),
        }
    }
}

#[test]
fn test_accessors() {
    assert_eq!(EnumSetRepr::Byte(5).as_u64(), Some(5));
    assert_eq!(EnumSetRepr::Long(u64::MAX >> 1).as_u64(), Some(u64::MAX >> 1));
    assert_eq!(EnumSetRepr::Tokens("ab").as_u64(), None);
    assert_eq!(EnumSetRepr::Tokens("ab").as_str(), Some("ab"));
    assert_eq!(EnumSetRepr::Int(1).as_str(), None);
}

#[cfg(all(test, feature = "serde-1"))]
#[test]
fn test_serialize() {
    assert_eq!(serde_json::to_string(&EnumSetRepr::Short(5)).unwrap(), "5");
    assert_eq!(
        serde_json::to_string(&EnumSetRepr::Long(1 << 62)).unwrap(),
        "4611686018427387904"
    );
    assert_eq!(
        serde_json::to_string(&EnumSetRepr::Tokens("xy")).unwrap(),
        "\"xy\""
    );
}
