//! Decoding options.

use crate::error::{Error, Result};

/// How repeat counts are treated once they parse as integers.
///
/// A repeat count that does not parse as a non-negative integer is always
/// an error, whatever the policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RepeatPolicy {
    /// Use every count as written.
    #[default]
    PassThrough,
    /// Treat counts at or above `limit` as 1.
    ///
    /// Spreadsheet applications pad sheets with a trailing run of empty
    /// cells spanning the whole column range; when such a run carries
    /// content (a styled default value, for instance) this keeps it from
    /// being expanded a million times.
    Clamp { limit: usize },
    /// Fail with [`Error::RepeatCountTooLarge`] for counts above `limit`.
    Reject { limit: usize },
}

impl RepeatPolicy {
    /// Apply the policy to a parsed count read from `attribute`.
    pub fn apply(&self, attribute: &str, value: usize) -> Result<usize> {
        match *self {
            RepeatPolicy::PassThrough => Ok(value),
            RepeatPolicy::Clamp { limit } if value >= limit => {
                log::warn!("{}={} clamped to 1 (limit {})", attribute, value, limit);
                Ok(1)
            }
            RepeatPolicy::Clamp { .. } => Ok(value),
            RepeatPolicy::Reject { limit } if value > limit => Err(Error::RepeatCountTooLarge {
                attribute: attribute.to_string(),
                value,
                limit,
            }),
            RepeatPolicy::Reject { .. } => Ok(value),
        }
    }
}

/// What to do when two tables carry the same name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateSheetPolicy {
    /// Abort with [`Error::DuplicateSheetName`].
    #[default]
    Fail,
    /// Keep the first table, skip later ones.
    KeepFirst,
    /// Let the later table replace the earlier one.
    Replace,
}

/// Options for decoding a spreadsheet.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Treatment of row and column repeat counts
    pub repeat_policy: RepeatPolicy,

    /// Treatment of sheet name collisions
    pub duplicate_sheets: DuplicateSheetPolicy,
}

impl ParseOptions {
    /// Create new parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the repeat-count policy.
    pub fn with_repeat_policy(mut self, policy: RepeatPolicy) -> Self {
        self.repeat_policy = policy;
        self
    }

    /// Set the duplicate sheet name policy.
    pub fn with_duplicate_sheets(mut self, policy: DuplicateSheetPolicy) -> Self {
        self.duplicate_sheets = policy;
        self
    }
}
