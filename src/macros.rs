/// Declare a fieldless enum implementing [`Variant`](crate::Variant), and
/// [`Tokenized`](crate::Tokenized) when every variant is given a `char` token.
///
/// # Examples
///
/// ```
/// use enum_bitset::{Tokenized, Variant};
///
/// enum_bitset::enum_variants! {
///     pub enum Color { Red, Green, Blue }
/// }
///
/// enum_bitset::enum_variants! {
///     pub enum Status { Open = 'O', Closed = 'C' }
/// }
///
/// assert_eq!(Color::Blue.ordinal(), 2);
/// assert_eq!(Color::VARIANTS.len(), 3);
/// assert_eq!(Status::Closed.token(), 'C');
/// ```
#[macro_export]
macro_rules! enum_variants {
    (@enum [$(#[$meta:meta])*] $vis:vis $name:ident [$($variant:ident),+]) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($variant,)+
        }

        impl $crate::Variant for $name {
            const VARIANTS: &'static [Self] = &[$($name::$variant,)+];

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)+
                }
            }
        }
    };
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident = $token:literal),+ $(,)? }) => {
        $crate::enum_variants!(@enum [$(#[$meta])*] $vis $name [$($variant),+]);

        impl $crate::Tokenized for $name {
            #[inline]
            fn token(self) -> char {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }
    };
    ($(#[$meta:meta])* $vis:vis enum $name:ident { $($variant:ident),+ $(,)? }) => {
        $crate::enum_variants!(@enum [$(#[$meta])*] $vis $name [$($variant),+]);
    };
}
