//! Enum sets stored as a single compact value
//!
//! [`EnumBitSet`] stores a subset of a closed list of [`Variant`]s as one bit
//! per ordinal in a `u8`, `u16`, `u32` or `u64`, and [`TokenEnumSet`] stores it
//! as a string of single character [tokens](Tokenized). Both can be
//! [frozen](Freezable), and both expose their raw value through
//! [`EnumSetMarker`] for storage and serialization.
//!
//! ```
//! use enum_bitset::{EnumSetMarker, EnumSetRepr, Freezable, LongEnumSet};
//!
//! enum_bitset::enum_variants! {
//!     pub enum Weekday { Mon, Tue, Wed, Thu, Fri, Sat, Sun }
//! }
//!
//! let mut weekend = LongEnumSet::<Weekday>::new();
//! weekend.add(Weekday::Sat)?;
//! weekend.add(Weekday::Sun)?;
//!
//! let mut workdays = weekend.clone();
//! workdays.complement()?;
//! assert_eq!(workdays.len(), 5);
//!
//! weekend.freeze();
//! assert!(weekend.add(Weekday::Mon).is_err());
//! assert_eq!(weekend.repr(), EnumSetRepr::Long(0b110_0000));
//! assert_eq!(weekend.as_string_map(), "56");
//! # Ok::<(), enum_bitset::EnumSetError>(())
//! ```
#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod alphabet;
mod bit_set;
mod error;
mod freeze;
mod repr;
mod token_set;
mod variant;
mod width;

pub use bit_set::{ByteEnumSet, EnumBitSet, IntEnumSet, Iter, LongEnumSet, ShortEnumSet};
pub use error::EnumSetError;
pub use freeze::{Freezable, Frozen};
pub use repr::{EnumSetMarker, EnumSetRepr};
pub use token_set::{TokenEnumSet, TokenIter};
pub use variant::{Tokenized, Variant};
pub use width::{Byte, Int, Long, Scalar, Short, Width};
