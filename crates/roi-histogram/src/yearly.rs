//! Per-year release counts on a contiguous axis
//!
//! Aggregated `(year, count)` rows usually skip years with no releases.
//! A histogram over years needs every year between the first and last,
//! so gaps are filled with zero.

use roi_core::{Error, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of releases in one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

/// Gap-filled yearly counts from the first to the last year seen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyCounts {
    first_year: i32,
    counts: Vec<u64>,
    total: u64,
    max_count: u64,
}

impl YearlyCounts {
    /// Aggregate rows into a contiguous series
    ///
    /// Rows may arrive in any order; repeated years are summed. Fails with
    /// [`Error::InsufficientData`] when there are no rows.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, u64)>,
    {
        let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
        for (year, count) in rows {
            *by_year.entry(year).or_default() += count;
        }

        let (Some((&first_year, _)), Some((&last_year, _))) =
            (by_year.first_key_value(), by_year.last_key_value())
        else {
            return Err(Error::empty_input());
        };

        let counts: Vec<u64> = (first_year..=last_year)
            .map(|year| by_year.get(&year).copied().unwrap_or(0))
            .collect();
        let total = counts.iter().sum();
        let max_count = counts.iter().copied().max().unwrap_or(0);

        Ok(Self {
            first_year,
            counts,
            total,
            max_count,
        })
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn last_year(&self) -> i32 {
        self.first_year + self.counts.len() as i32 - 1
    }

    /// Number of years covered, gaps included
    pub fn span(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Counts in year order, one per year in the span
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Mean releases per year over the whole span
    pub fn average_per_year(&self) -> f64 {
        self.total as f64 / self.span() as f64
    }

    /// Iterate `(year, count)` pairs in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = YearCount> + '_ {
        self.counts
            .iter()
            .zip(self.first_year..)
            .map(|(&count, year)| YearCount { year, count })
    }

    /// One-line chart subtitle
    pub fn subtitle(&self) -> String {
        format!(
            "years={}({}-{}) total={} avg≈{:.1} max={}",
            self.span(),
            self.first_year(),
            self.last_year(),
            self.total,
            self.average_per_year(),
            self.max_count
        )
    }
}
