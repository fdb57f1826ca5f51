use crate::EnumSetError;
use core::fmt::{Debug, Formatter};
use core::ops::Deref;

/// A one-way switch making an instance immutable
///
/// Once frozen, every mutator which would change the value fails with
/// [`EnumSetError::Frozen`]. Mutators which would leave the value unchanged
/// still succeed.
pub trait Freezable: Sized {
    /// Makes this instance immutable. Calling it again has no effect.
    fn freeze(&mut self);

    fn is_frozen(&self) -> bool;

    /// Freezes `self` and wraps it in a handle which only gives shared access
    ///
    /// ```
    /// use enum_bitset::{Freezable, ShortEnumSet};
    ///
    /// enum_bitset::enum_variants! {
    ///     enum Day { Mon, Tue }
    /// }
    ///
    /// let mut days = ShortEnumSet::<Day>::new();
    /// days.add(Day::Tue).unwrap();
    /// let days = days.into_frozen();
    /// assert!(days.contains(Day::Tue));
    /// assert!(days.is_frozen());
    /// ```
    fn into_frozen(mut self) -> Frozen<Self> {
        self.freeze();
        Frozen(self)
    }
}

/// A frozen set which cannot be mutated through this handle
///
/// Clone the inner value to obtain a mutable copy.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Frozen<S>(S);

impl<S> Frozen<S> {
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S> Deref for Frozen<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.0
    }
}

impl<S> AsRef<S> for Frozen<S> {
    fn as_ref(&self) -> &S {
        &self.0
    }
}

impl<S: Debug> Debug for Frozen<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

/// Frozen state of a set, never part of its value
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct FreezeFlag(bool);

impl FreezeFlag {
    #[inline]
    pub(crate) fn is_set(self) -> bool {
        self.0
    }

    pub(crate) fn set(&mut self, type_name: &'static str) {
        if !self.0 {
            log::trace!("freezing instance of {}", type_name);
            self.0 = true;
        }
    }

    /// Fails if mutation is no longer allowed
    #[inline]
    pub(crate) fn verify_not_frozen(self, type_name: &'static str) -> Result<(), EnumSetError> {
        if self.0 {
            log::debug!("refused mutation of frozen instance of {}", type_name);
            return Err(EnumSetError::Frozen { type_name });
        }
        Ok(())
    }
}

#[test]
fn test_flag() {
    let mut flag = FreezeFlag::default();
    assert!(flag.verify_not_frozen("Test").is_ok());
    flag.set("Test");
    flag.set("Test");
    assert!(flag.is_set());
    assert_eq!(
        flag.verify_not_frozen("Test"),
        Err(EnumSetError::Frozen { type_name: "Test" })
    );
}
