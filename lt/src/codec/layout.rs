//! Chunk layout derived from ladder size

use super::radix;

/// Hex characters used for the packed month
pub const MONTH_HEX_WIDTH: usize = 5;

/// Base-5 digits per full chunk
pub const CHUNK_DIGITS: usize = 5;

/// Ladder size share codes are sized for by default
pub const DEFAULT_PROBLEM_COUNT: usize = 21;

/// One group of status digits and its hex rendering width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Base-5 digits in the group
    pub digits: usize,
    /// Hex characters needed for `5^digits - 1`
    pub hex_width: usize,
}

impl Chunk {
    fn new(digits: usize) -> Self {
        Self {
            digits,
            hex_width: radix::hex_width_for_base5(digits),
        }
    }
}

/// How a ladder's status digits are grouped into hex chunks
///
/// `ceil(count / 5)` chunks of five digits, the last one holding the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkLayout {
    problem_count: usize,
    chunks: Vec<Chunk>,
}

impl ChunkLayout {
    pub fn for_problem_count(problem_count: usize) -> Self {
        let full = problem_count / CHUNK_DIGITS;
        let remainder = problem_count % CHUNK_DIGITS;

        let mut chunks: Vec<Chunk> = (0..full).map(|_| Chunk::new(CHUNK_DIGITS)).collect();
        if remainder > 0 {
            chunks.push(Chunk::new(remainder));
        }

        Self { problem_count, chunks }
    }

    pub fn problem_count(&self) -> usize {
        self.problem_count
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Total share-code length in characters
    pub fn code_len(&self) -> usize {
        MONTH_HEX_WIDTH + self.chunks.iter().map(|c| c.hex_width).sum::<usize>()
    }
}

impl Default for ChunkLayout {
    fn default() -> Self {
        Self::for_problem_count(DEFAULT_PROBLEM_COUNT)
    }
}
