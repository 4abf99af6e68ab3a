//! Share-code codec
//!
//! Packs one month of progress into a short fixed-width string that can ride
//! in a URL fragment, and unpacks it again.
//!
//! # Format
//!
//! ```text
//! 3176a 271 000 000 000 0
//! ^^^^^ month YYYYMM as hex, 5 chars
//!       ^^^^^^^^^^^^^^^^^ one base-5 digit per problem, grouped 5 at a time,
//!                         each group written as zero-padded hex
//! ```
//!
//! For the standard 21-problem ladder the groups are {5,5,5,5,1} digits wide
//! and {3,3,3,3,1} hex characters long, 18 characters in total. The grouping is
//! derived from the problem count by [`ChunkLayout`].
//!
//! Decoding is positional: digit *i* belongs to the *i*-th problem of the
//! month's ladder in ascending id order. Editing a published month's ladder
//! silently re-attributes statuses in codes shared before the edit.

mod error;
mod layout;
mod progress;
mod radix;

pub use error::DecodeError;
pub use layout::{CHUNK_DIGITS, Chunk, ChunkLayout, DEFAULT_PROBLEM_COUNT, MONTH_HEX_WIDTH};
pub use progress::{DecodedProgress, ProgressCodec, ShareCode, decode_statuses, encode_statuses};
