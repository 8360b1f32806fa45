/*! Lookup resources loaded once at startup.

Both resources are plain in-memory maps, built before filtering starts and
immutable afterwards.
!*/
mod dictionary;
mod numbers;

pub use dictionary::Dictionary;
pub use numbers::NumberMap;
