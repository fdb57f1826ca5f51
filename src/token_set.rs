use crate::freeze::FreezeFlag;
use crate::repr::{EnumSetMarker, EnumSetRepr};
use crate::{EnumSetError, Freezable, Tokenized};
use alloc::string::String;
use core::fmt::{Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::str::Chars;
#[cfg(feature = "serde-1")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A set of variants of `V` stored as a string of their tokens
///
/// Tokens are kept in the order they were added, which is also the order of
/// iteration. Not meant for concurrent modification, use external locking or
/// [freeze](Freezable::freeze) the set before sharing it.
///
/// ```
/// use enum_bitset::TokenEnumSet;
///
/// enum_bitset::enum_variants! {
///     enum Axis { X = 'x', Y = 'y' }
/// }
///
/// let mut set = TokenEnumSet::<Axis>::new();
/// set.add(Axis::X).unwrap();
/// set.add(Axis::Y).unwrap();
/// assert_eq!(set.contents(), "xy");
/// set.remove(Axis::X).unwrap();
/// assert_eq!(set.contents(), "y");
/// assert_eq!(set.iter().collect::<Result<Vec<_>, _>>(), Ok(vec![Axis::Y]));
/// ```
pub struct TokenEnumSet<V> {
    contents: String,
    frozen: FreezeFlag,
    _variants: PhantomData<V>,
}

impl<V> Default for TokenEnumSet<V> {
    fn default() -> Self {
        Self::from_contents(String::new())
    }
}

/// Clones are never frozen
impl<V> Clone for TokenEnumSet<V> {
    fn clone(&self) -> Self {
        Self::from_contents(self.contents.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.contents.clone_from(&source.contents);
        self.frozen = FreezeFlag::default();
    }
}

impl<V> PartialEq for TokenEnumSet<V> {
    fn eq(&self, other: &Self) -> bool {
        self.contents == other.contents
    }
}

impl<V> Eq for TokenEnumSet<V> {}

impl<V> Hash for TokenEnumSet<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.contents.hash(state)
    }
}

impl<V> Debug for TokenEnumSet<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("TokenEnumSet").field(&self.contents).finish()
    }
}

impl<V> TokenEnumSet<V> {
    /// Creates a set from raw contents, without any validation
    ///
    /// Use [`parse`](Self::parse) to reject unknown or repeated tokens.
    pub fn from_contents(contents: impl Into<String>) -> Self {
        TokenEnumSet {
            contents: contents.into(),
            frozen: FreezeFlag::default(),
            _variants: PhantomData,
        }
    }

    /// The tokens of the members, in insertion order
    #[inline]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.contents.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    fn type_name() -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<V: Tokenized> TokenEnumSet<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the set of every declared variant, in declaration order
    pub fn full() -> Self {
        Self::from_contents(V::VARIANTS.iter().map(|v| v.token()).collect::<String>())
    }

    /// Creates a set holding `variants`, in their iteration order
    pub fn try_from_variants<I: IntoIterator<Item = V>>(variants: I) -> Result<Self, EnumSetError> {
        let mut res = Self::new();
        res.assign(variants)?;
        Ok(res)
    }

    /// Creates a set from raw contents, rejecting unknown and repeated tokens
    ///
    /// ```
    /// use enum_bitset::{EnumSetError, TokenEnumSet};
    ///
    /// enum_bitset::enum_variants! {
    ///     enum Axis { X = 'x', Y = 'y' }
    /// }
    ///
    /// assert!(TokenEnumSet::<Axis>::parse("yx").is_ok());
    /// assert_eq!(TokenEnumSet::<Axis>::parse("xz"), Err(EnumSetError::InvalidToken('z')));
    /// assert_eq!(TokenEnumSet::<Axis>::parse("xyx"), Err(EnumSetError::DuplicateToken('x')));
    /// ```
    pub fn parse(contents: &str) -> Result<Self, EnumSetError> {
        let res = Self::from_contents(contents);
        res.validate()?;
        Ok(res)
    }

    /// Checks that every character is the token of a distinct variant
    pub fn validate(&self) -> Result<(), EnumSetError> {
        for (idx, c) in self.contents.char_indices() {
            if V::from_token(c).is_none() {
                return Err(EnumSetError::InvalidToken(c));
            }
            if self.contents[..idx].contains(c) {
                return Err(EnumSetError::DuplicateToken(c));
            }
        }
        Ok(())
    }

    pub fn contains(&self, v: V) -> bool {
        self.contents.contains(v.token())
    }

    /// Adds `v` to the set, returning `true` if it wasn't already a member
    ///
    /// Adding a member which is already present succeeds even on a frozen set.
    pub fn add(&mut self, v: V) -> Result<bool, EnumSetError> {
        let token = v.token();
        if self.contents.contains(token) {
            return Ok(false);
        }
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.contents.push(token);
        Ok(true)
    }

    /// Removes `v` from the set, returning `true` if it was a member
    pub fn remove(&mut self, v: V) -> Result<bool, EnumSetError> {
        let token = v.token();
        if !self.contents.contains(token) {
            return Ok(false);
        }
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.contents.retain(|c| c != token);
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<(), EnumSetError> {
        if !self.contents.is_empty() {
            self.frozen.verify_not_frozen(Self::type_name())?;
            self.contents.clear();
        }
        Ok(())
    }

    /// Replaces the contents with `variants`, in their iteration order
    ///
    /// Not atomic: on error the variants before the failing one have been added.
    pub fn assign<I: IntoIterator<Item = V>>(&mut self, variants: I) -> Result<(), EnumSetError> {
        self.clear()?;
        for v in variants {
            self.add(v)?;
        }
        Ok(())
    }

    /// Appends the members of `other` which are missing
    pub fn unify_with(&mut self, other: &Self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        for c in other.contents.chars() {
            if !self.contents.contains(c) {
                self.contents.push(c);
            }
        }
        Ok(())
    }

    pub fn intersect_with(&mut self, other: &Self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.contents.retain(|c| other.contents.contains(c));
        Ok(())
    }

    pub fn exclude(&mut self, other: &Self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.contents.retain(|c| !other.contents.contains(c));
        Ok(())
    }

    /// Keeps the members of exactly one of `self` and `other`
    pub fn exactly_one_of(&mut self, other: &Self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        let before = self.contents.clone();
        self.contents.retain(|c| !other.contents.contains(c));
        for c in other.contents.chars() {
            if !before.contains(c) {
                self.contents.push(c);
            }
        }
        Ok(())
    }

    /// Replaces the members by every other declared variant, in declaration order
    pub fn complement(&mut self) -> Result<(), EnumSetError> {
        self.frozen.verify_not_frozen(Self::type_name())?;
        self.contents = V::VARIANTS
            .iter()
            .map(|v| v.token())
            .filter(|&t| !self.contents.contains(t))
            .collect();
        Ok(())
    }

    /// Iterate over the members in storage order
    pub fn iter(&self) -> TokenIter<'_, V> {
        TokenIter {
            chars: self.contents.chars(),
            _variants: PhantomData,
        }
    }
}

impl<V: Tokenized> Freezable for TokenEnumSet<V> {
    fn freeze(&mut self) {
        self.frozen.set(Self::type_name())
    }

    fn is_frozen(&self) -> bool {
        self.frozen.is_set()
    }
}

impl<V> EnumSetMarker for TokenEnumSet<V> {
    fn repr(&self) -> EnumSetRepr<'_> {
        EnumSetRepr::Tokens(&self.contents)
    }
}

impl<'a, V: Tokenized> IntoIterator for &'a TokenEnumSet<V> {
    type Item = Result<V, EnumSetError>;
    type IntoIter = TokenIter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the members of a [`TokenEnumSet`]
///
/// A character which is not a token of `V` is reported as
/// [`EnumSetError::InvalidToken`].
pub struct TokenIter<'a, V> {
    chars: Chars<'a>,
    _variants: PhantomData<fn() -> V>,
}

impl<V: Tokenized> TokenIter<'_, V> {
    /// Like [`Iterator::next`], but reports exhaustion as an error
    pub fn try_next(&mut self) -> Result<V, EnumSetError> {
        self.next().unwrap_or(Err(EnumSetError::EndOfSequence))
    }

    /// Members cannot be removed while iterating, this always fails
    pub fn remove(&mut self) -> Result<(), EnumSetError> {
        Err(EnumSetError::UnsupportedRemoval)
    }
}

impl<V: Tokenized> Iterator for TokenIter<'_, V> {
    type Item = Result<V, EnumSetError>;

    fn next(&mut self) -> Option<Self::Item> {
        let c = self.chars.next()?;
        Some(V::from_token(c).ok_or(EnumSetError::InvalidToken(c)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

impl<V: Tokenized> FusedIterator for TokenIter<'_, V> {}

#[cfg(feature = "serde-1")]
impl<V> Serialize for TokenEnumSet<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.repr().serialize(serializer)
    }
}

#[cfg(feature = "serde-1")]
impl<'de, V: Tokenized> Deserialize<'de> for TokenEnumSet<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let contents = String::deserialize(deserializer)?;
        Self::parse(&contents).map_err(de::Error::custom)
    }
}

#[cfg(test)]
crate::enum_variants! {
    enum Xy { X = 'x', Y = 'y' }
}

#[cfg(test)]
crate::enum_variants! {
    enum Flag { Active = 'A', Blocked = 'B', Closed = 'C', Deleted = 'D', Expired = 'E', Frozen = 'F' }
}

#[test]
fn test_add_remove() {
    let mut s = TokenEnumSet::<Xy>::new();
    assert_eq!(s.add(Xy::X), Ok(true));
    assert_eq!(s.add(Xy::Y), Ok(true));
    assert_eq!(s.add(Xy::X), Ok(false));
    assert_eq!(s.contents(), "xy");
    assert_eq!(s.len(), 2);
    assert_eq!(s.remove(Xy::X), Ok(true));
    assert_eq!(s.remove(Xy::X), Ok(false));
    assert_eq!(s.contents(), "y");
    assert!(!s.contains(Xy::X));
    assert!(s.contains(Xy::Y));
    assert_eq!(s.iter().collect::<Result<alloc::vec::Vec<_>, _>>(), Ok(alloc::vec![Xy::Y]));
}

#[test]
fn test_storage_order() {
    let s = TokenEnumSet::<Flag>::try_from_variants([Flag::Deleted, Flag::Active, Flag::Closed]).unwrap();
    assert_eq!(s.contents(), "DAC");
    let order: alloc::vec::Vec<_> = s.iter().map(Result::unwrap).collect();
    assert_eq!(order, [Flag::Deleted, Flag::Active, Flag::Closed]);
}

#[test]
fn test_freeze() {
    let mut s = TokenEnumSet::<Xy>::from_contents("x");
    s.freeze();
    assert!(s.is_frozen());
    assert_eq!(s.add(Xy::X), Ok(false));
    assert_eq!(s.remove(Xy::Y), Ok(false));
    assert!(matches!(s.add(Xy::Y), Err(EnumSetError::Frozen { .. })));
    assert!(matches!(s.remove(Xy::X), Err(EnumSetError::Frozen { .. })));
    assert!(matches!(s.clear(), Err(EnumSetError::Frozen { .. })));
    assert!(matches!(s.assign([Xy::Y]), Err(EnumSetError::Frozen { .. })));
    let other = TokenEnumSet::<Xy>::new();
    assert!(s.unify_with(&other).is_err());
    assert!(s.intersect_with(&other).is_err());
    assert!(s.exclude(&other).is_err());
    assert!(s.exactly_one_of(&other).is_err());
    assert!(s.complement().is_err());
    assert_eq!(s.contents(), "x");
    assert!(!s.clone().is_frozen());
}

#[test]
fn test_algebra() {
    let a = TokenEnumSet::<Flag>::from_contents("CAE");
    let b = TokenEnumSet::<Flag>::from_contents("BEC");

    let mut s = a.clone();
    s.unify_with(&b).unwrap();
    assert_eq!(s.contents(), "CAEB");

    let mut s = a.clone();
    s.intersect_with(&b).unwrap();
    assert_eq!(s.contents(), "CE");

    let mut s = a.clone();
    s.exclude(&b).unwrap();
    assert_eq!(s.contents(), "A");

    let mut s = a.clone();
    s.exactly_one_of(&b).unwrap();
    assert_eq!(s.contents(), "AB");

    let mut s = a;
    s.complement().unwrap();
    assert_eq!(s.contents(), "BDF");
    assert_eq!(TokenEnumSet::<Flag>::full().contents(), "ABCDEF");
}

#[test]
fn test_assign_replaces() {
    let mut s = TokenEnumSet::<Xy>::from_contents("y");
    s.assign([Xy::X]).unwrap();
    assert_eq!(s.contents(), "x");
    s.assign([Xy::Y, Xy::X, Xy::Y]).unwrap();
    assert_eq!(s.contents(), "yx");
}

#[test]
fn test_corrupted() {
    let s = TokenEnumSet::<Xy>::from_contents("xzy");
    let mut it = s.iter();
    assert_eq!(it.try_next(), Ok(Xy::X));
    assert_eq!(it.next(), Some(Err(EnumSetError::InvalidToken('z'))));
    assert_eq!(it.next(), Some(Ok(Xy::Y)));
    assert_eq!(it.remove(), Err(EnumSetError::UnsupportedRemoval));
    assert_eq!(it.next(), None);
    assert_eq!(it.try_next(), Err(EnumSetError::EndOfSequence));
    assert_eq!(s.validate(), Err(EnumSetError::InvalidToken('z')));

    let dup = TokenEnumSet::<Xy>::from_contents("xyx");
    assert_eq!(dup.validate(), Err(EnumSetError::DuplicateToken('x')));
    let mut dup = dup;
    assert_eq!(dup.remove(Xy::X), Ok(true));
    assert_eq!(dup.contents(), "y");
}

#[test]
fn test_repr() {
    let s = TokenEnumSet::<Xy>::from_contents("yx");
    assert_eq!(s.repr(), EnumSetRepr::Tokens("yx"));
}

#[cfg(all(test, feature = "serde-1"))]
#[test]
fn test_serde() {
    let s = TokenEnumSet::<Flag>::from_contents("FA");
    assert_eq!(serde_json::to_string(&s).unwrap(), "\"FA\"");
    let back: TokenEnumSet<Flag> = serde_json::from_str("\"FA\"").unwrap();
    assert_eq!(back, s);
    assert!(serde_json::from_str::<TokenEnumSet<Flag>>("\"FAZ\"").is_err());
    assert!(serde_json::from_str::<TokenEnumSet<Flag>>("\"FAF\"").is_err());
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::{IntEnumSet, Variant};
    use proptest::prelude::*;

    fn sets(bits: u8) -> (TokenEnumSet<Flag>, IntEnumSet<Flag>) {
        let variants = Flag::VARIANTS
            .iter()
            .copied()
            .filter(|v| bits & (1 << v.ordinal()) != 0);
        let mut tokens = TokenEnumSet::new();
        tokens.assign(variants.clone()).unwrap();
        let bitmap = IntEnumSet::try_from_variants(variants).unwrap();
        (tokens, bitmap)
    }

    fn same_members(tokens: &TokenEnumSet<Flag>, bitmap: &IntEnumSet<Flag>) -> bool {
        Flag::VARIANTS
            .iter()
            .all(|&v| tokens.contains(v) == bitmap.contains(v))
            && tokens.len() == bitmap.len()
    }

    proptest! {
        #[test]
        fn algebra_matches_bitmap(a in 0u8..64, b in 0u8..64) {
            let (ta, ba) = sets(a);
            let (tb, bb) = sets(b);

            let (mut t, mut m) = (ta.clone(), ba.clone());
            t.unify_with(&tb).unwrap();
            m.unify_with(&bb).unwrap();
            prop_assert!(same_members(&t, &m));

            let (mut t, mut m) = (ta.clone(), ba.clone());
            t.intersect_with(&tb).unwrap();
            m.intersect_with(&bb).unwrap();
            prop_assert!(same_members(&t, &m));

            let (mut t, mut m) = (ta.clone(), ba.clone());
            t.exclude(&tb).unwrap();
            m.exclude(&bb).unwrap();
            prop_assert!(same_members(&t, &m));

            let (mut t, mut m) = (ta.clone(), ba.clone());
            t.exactly_one_of(&tb).unwrap();
            m.exactly_one_of(&bb).unwrap();
            prop_assert!(same_members(&t, &m));
            prop_assert!(t.validate().is_ok());

            let (mut t, mut m) = (ta, ba);
            t.complement().unwrap();
            m.complement().unwrap();
            prop_assert!(same_members(&t, &m));
        }
    }
}
