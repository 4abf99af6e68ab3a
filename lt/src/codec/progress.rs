//! Encoding and decoding of share codes

use tracing::debug;

use super::error::DecodeError;
use super::layout::{ChunkLayout, MONTH_HEX_WIDTH};
use super::radix;
use crate::catalog::CatalogResolver;
use crate::domain::{CompletionStatus, MonthKey, Problem, ProgressRecord};

/// A fixed-width encoded snapshot of one month's progress
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShareCode(String);

impl ShareCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShareCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ShareCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ShareCode> for String {
    fn from(code: ShareCode) -> Self {
        code.0
    }
}

/// Result of decoding a share code against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedProgress {
    pub month: MonthKey,
    /// One status per problem, ascending id
    pub statuses: Vec<CompletionStatus>,
    /// Sparse record keyed by stable key; `NotCompleted` entries are omitted
    pub record: ProgressRecord,
}

/// Encode an ordered status list for a month
///
/// The chunk layout follows `statuses.len()`.
pub fn encode_statuses(month: MonthKey, statuses: &[CompletionStatus]) -> ShareCode {
    let layout = ChunkLayout::for_problem_count(statuses.len());
    let digits: Vec<u8> = statuses.iter().map(|s| s.digit()).collect();

    let mut code = String::with_capacity(layout.code_len());
    code.push_str(&radix::to_hex(month.packed(), MONTH_HEX_WIDTH));

    let mut rest = digits.as_slice();
    for chunk in layout.chunks() {
        let (group, tail) = rest.split_at(chunk.digits);
        code.push_str(&radix::to_hex(radix::base5_value(group), chunk.hex_width));
        rest = tail;
    }

    ShareCode(code)
}

/// Decode a share code into its month and ordered statuses, without a catalog
pub fn decode_statuses(code: &str, layout: &ChunkLayout) -> Result<(MonthKey, Vec<CompletionStatus>), DecodeError> {
    let actual = code.chars().count();
    if actual != layout.code_len() {
        return Err(DecodeError::InvalidLength {
            expected: layout.code_len(),
            actual,
        });
    }
    if let Some(position) = code.chars().position(|c| !c.is_ascii_hexdigit()) {
        return Err(DecodeError::MalformedDigit {
            position,
            reason: "not a hex digit".to_string(),
        });
    }

    // All ASCII from here on, so byte offsets are character offsets
    let (month_hex, mut rest) = code.split_at(MONTH_HEX_WIDTH);
    let packed = radix::parse_hex(month_hex).ok_or_else(|| DecodeError::MalformedDigit {
        position: 0,
        reason: format!("month '{}' is not hex", month_hex),
    })?;
    let month = MonthKey::from_packed(packed)?;

    let mut statuses = Vec::with_capacity(layout.problem_count());
    let mut position = MONTH_HEX_WIDTH;
    for chunk in layout.chunks() {
        let (group, tail) = rest.split_at(chunk.hex_width);
        let value = radix::parse_hex(group).ok_or_else(|| DecodeError::MalformedDigit {
            position,
            reason: format!("chunk '{}' is not hex", group),
        })?;
        let digits = radix::base5_digits(value, chunk.digits).ok_or_else(|| DecodeError::MalformedDigit {
            position,
            reason: format!("chunk '{}' does not fit {} base-5 digits", group, chunk.digits),
        })?;
        statuses.extend(digits.into_iter().filter_map(CompletionStatus::from_digit));

        position += chunk.hex_width;
        rest = tail;
    }

    Ok((month, statuses))
}

/// Share-code codec bound to a catalog
///
/// Stateless apart from its configuration; every call is independent.
#[derive(Debug, Clone)]
pub struct ProgressCodec<R> {
    resolver: R,
    layout: ChunkLayout,
}

impl<R: CatalogResolver> ProgressCodec<R> {
    /// Codec for the standard 21-problem ladder
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            layout: ChunkLayout::default(),
        }
    }

    /// Codec for ladders of a different size
    pub fn with_problem_count(resolver: R, problem_count: usize) -> Self {
        Self {
            resolver,
            layout: ChunkLayout::for_problem_count(problem_count),
        }
    }

    pub fn layout(&self) -> &ChunkLayout {
        &self.layout
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Encode problems paired with their statuses
    ///
    /// Pairs are put in ascending id order before digitizing.
    pub fn encode(&self, month: MonthKey, problems: &[(&Problem, CompletionStatus)]) -> ShareCode {
        let mut ordered = problems.to_vec();
        ordered.sort_by_key(|(p, _)| p.id);
        let statuses: Vec<CompletionStatus> = ordered.into_iter().map(|(_, s)| s).collect();
        encode_statuses(month, &statuses)
    }

    /// Encode a record against its month's ladder
    pub fn encode_record(&self, record: &ProgressRecord) -> ShareCode {
        let ladder = self.resolver.problems_for_month(record.month());
        let code = self.encode(record.month(), &record.pair_with(&ladder));
        debug!(month = %record.month(), %code, "Encoded progress");
        code
    }

    /// Decode a share code and attach it to the month's ladder
    ///
    /// Hex is accepted in either case.
    pub fn decode(&self, code: &str) -> Result<DecodedProgress, DecodeError> {
        let (month, statuses) = decode_statuses(code, &self.layout)?;

        let ladder = self.resolver.problems_for_month(month);
        if ladder.is_empty() {
            return Err(DecodeError::UnknownMonth(month));
        }
        if ladder.len() != statuses.len() {
            return Err(DecodeError::CatalogSizeMismatch {
                month,
                expected: statuses.len(),
                actual: ladder.len(),
            });
        }

        let mut record = ProgressRecord::new(month);
        for (problem, status) in ladder.iter().zip(&statuses) {
            record.set(&problem.stable_key, *status);
        }

        debug!(%month, completed = record.len(), "Decoded share code");
        Ok(DecodedProgress {
            month,
            statuses,
            record,
        })
    }
}
