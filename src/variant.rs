use core::fmt::Debug;

/// A closed, ordered list of named variants
///
/// Ordinals are `0..VARIANTS.len()` and `VARIANTS[v.ordinal()] == v` must hold.
/// Use [`enum_variants!`](crate::enum_variants) to derive it for a fieldless enum.
pub trait Variant: Copy + Eq + Debug + 'static {
    /// Every variant, in ordinal order
    const VARIANTS: &'static [Self];

    fn ordinal(self) -> usize;

    fn name(self) -> &'static str;

    #[inline]
    fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::VARIANTS.get(ordinal).copied()
    }

    /// Number of declared variants
    #[inline]
    fn count() -> usize {
        Self::VARIANTS.len()
    }
}

/// A [`Variant`] with a single character token, unique within its list
pub trait Tokenized: Variant {
    fn token(self) -> char;

    /// Resolves a token by a linear scan over the declared variants
    fn from_token(token: char) -> Option<Self> {
        Self::VARIANTS.iter().copied().find(|v| v.token() == token)
    }
}

#[cfg(test)]
crate::enum_variants! {
    enum Planet { Mercury = 'm', Venus = 'v', Earth = 'e' }
}

#[test]
fn test_ordinals() {
    for (i, p) in Planet::VARIANTS.iter().enumerate() {
        assert_eq!(p.ordinal(), i);
        assert_eq!(Planet::from_ordinal(i), Some(*p));
    }
    assert_eq!(Planet::from_ordinal(3), None);
    assert_eq!(Planet::count(), 3);
    assert_eq!(Planet::Venus.name(), "Venus");
}

#[test]
fn test_tokens() {
    assert_eq!(Planet::Earth.token(), 'e');
    assert_eq!(Planet::from_token('m'), Some(Planet::Mercury));
    assert_eq!(Planet::from_token('x'), None);
}
