//! Account selection parsing
//!
//! Turns operator input such as `"0-2,5"` or `"all"` into an ascending,
//! duplicate-free selection of zero-based account indices. Only syntax is checked
//! here; whether the indices exist is decided by the caller.
//!
//! The selection is held as merged inclusive intervals, so a huge range costs
//! nothing until it is expanded with [`IndexSpec::iter`].

use crate::error::{CoreError, CoreResult};

/// Keyword selecting every configured account.
const ALL_KEYWORD: &str = "all";

/// Parsed account selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSpec {
    /// Sorted, non-overlapping, non-adjacent inclusive intervals
    ranges: Vec<(usize, usize)>,
}

impl IndexSpec {
    /// Parse a selection against the number of configured accounts.
    ///
    /// `account_count` is only used to expand `all`. A range whose start is greater
    /// than its end contributes nothing.
    pub fn parse(input: &str, account_count: usize) -> CoreResult<Self> {
        if input.trim().eq_ignore_ascii_case(ALL_KEYWORD) {
            return Ok(Self {
                ranges: account_count
                    .checked_sub(1)
                    .map(|last| vec![(0, last)])
                    .unwrap_or_default(),
            });
        }

        let mut ranges = Vec::new();
        for token in input.split(',') {
            match parse_token(token.trim()) {
                Some((start, end)) if start <= end => ranges.push((start, end)),
                Some(_) => {}
                None => {
                    return Err(CoreError::InvalidIndexFormat {
                        token: token.trim().to_string(),
                    });
                }
            }
        }

        Ok(Self {
            ranges: merge(ranges),
        })
    }

    /// Selected indices in ascending order.
    ///
    /// Check [`max`](Self::max) against the account count before iterating.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranges.iter().flat_map(|&(start, end)| start..=end)
    }

    pub fn ranges(&self) -> &[(usize, usize)] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Number of selected indices (saturating).
    pub fn len(&self) -> usize {
        self.ranges
            .iter()
            .fold(0usize, |acc, &(start, end)| {
                acc.saturating_add(end - start).saturating_add(1)
            })
    }

    /// Largest selected index.
    pub fn max(&self) -> Option<usize> {
        self.ranges.last().map(|&(_, end)| end)
    }
}

/// Sort and coalesce overlapping or touching intervals.
fn merge(mut ranges: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    ranges.sort_unstable();
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1.saturating_add(1) => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// `"3"` → `(3, 3)`, `"1-4"` → `(1, 4)`.
fn parse_token(token: &str) -> Option<(usize, usize)> {
    match token.split_once('-') {
        Some((start, end)) => Some((parse_index(start)?, parse_index(end)?)),
        None => parse_index(token).map(|i| (i, i)),
    }
}

fn parse_index(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    // `usize::from_str` accepts a leading '+'
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
