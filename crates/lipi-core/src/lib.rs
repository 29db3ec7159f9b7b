//! Phonetic romanized-to-Telugu transliteration.
//!
//! ```
//! assert_eq!(lipi_core::transliterate("ka eka"), "క ఎక");
//! ```

pub mod convert;
pub mod explain;
pub mod matcher;
pub mod table;
pub mod unicode;

pub use convert::{
    segments, segments_with, transliterate, transliterate_with, Segment, SegmentKind,
};
pub use table::{SymbolTable, TableConfigError};
