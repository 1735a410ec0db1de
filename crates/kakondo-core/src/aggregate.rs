//! Aggregate Computation
//!
//! Single-pass statistics for the statistic cards: total count, count per
//! status and the sum of one designated numeric field.

use std::collections::BTreeMap;

/// Records that contribute to statistic cards
pub trait Tally {
    type Status: Ord + Copy;

    fn status(&self) -> Self::Status;

    /// The summed field (members, beneficiaries); zero when not meaningful
    fn measure(&self) -> u64 {
        0
    }
}

/// Summary of a full collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregates<S: Ord> {
    pub total: usize,
    pub by_status: BTreeMap<S, usize>,
    pub sum: u64,
}

impl<S: Ord + Copy> Aggregates<S> {
    /// Count for one status, zero when no record has it
    pub fn count(&self, status: S) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

impl<S: Ord> Default for Aggregates<S> {
    fn default() -> Self {
        Self {
            total: 0,
            by_status: BTreeMap::new(),
            sum: 0,
        }
    }
}

/// Aggregate a full collection
///
/// Callers pass the unfiltered collection; see `Catalog` for the type that
/// enforces it.
pub fn aggregate<'a, T, I>(records: I) -> Aggregates<T::Status>
where
    T: Tally + 'a,
    I: IntoIterator<Item = &'a T>,
{
    records.into_iter().fold(Aggregates::default(), |mut acc, record| {
        acc.total += 1;
        *acc.by_status.entry(record.status()).or_insert(0) += 1;
        acc.sum += record.measure();
        acc
    })
}

/// Group digits by thousands for statistic cards: 86750 -> "86,750"
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    enum Phase {
        Open,
        Closed,
    }

    struct Row(Phase, u64);

    impl Tally for Row {
        type Status = Phase;
        fn status(&self) -> Phase {
            self.0
        }
        fn measure(&self) -> u64 {
            self.1
        }
    }

    #[test]
    fn test_single_pass_totals() {
        let rows = vec![Row(Phase::Open, 45), Row(Phase::Open, 38), Row(Phase::Closed, 32)];
        let stats = aggregate(&rows);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.count(Phase::Open), 2);
        assert_eq!(stats.count(Phase::Closed), 1);
        assert_eq!(stats.sum, 115);
    }

    #[test]
    fn test_empty_collection() {
        let rows: Vec<Row> = Vec::new();
        let stats = aggregate(&rows);
        assert_eq!(stats, Aggregates::default());
        assert_eq!(stats.count(Phase::Open), 0);
    }

    #[test]
    fn test_total_equals_length() {
        for n in 0..6u64 {
            let rows: Vec<Row> = (0..n).map(|i| Row(Phase::Closed, i)).collect();
            assert_eq!(aggregate(&rows).total, rows.len());
        }
    }

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(18000), "18,000");
        assert_eq!(thousands(86750), "86,750");
        assert_eq!(thousands(1234567), "1,234,567");
    }
}
