//! # iguid-id
//!
//! The GUID value type used by insert-guid.
//!
//! ## Design Principles
//!
//! - Freshly generated GUIDs are random version 4 values
//! - Parsing is strict: `8-4-4-4-12` hex groups, braces optional
//! - Rendering never fails; unknown selectors render the default form
//! - GUIDs roundtrip (parse → render → parse)
//!
//! ## Forms
//!
//! | selector | output |
//! |---|---|
//! | none | `01234567-89ab-cdef-1032-547698badcfe` |
//! | `braced` / `b` | `{01234567-89ab-cdef-1032-547698badcfe}` |
//! | `struct` / `x` | `{0x01234567, 0x89ab, 0xcdef, {0x10, 0x32, 0x54, 0x76, 0x98, 0xba, 0xdc, 0xfe}}` |
//! | `no-hyphen` | `0123456789abcdef1032547698badcfe` |

mod error;
mod guid;

pub use error::FormatError;
pub use guid::{Format, Guid};
