//! Category-code frequency aggregation with data-quality sampling
//!
//! Counts records per upper-cased category code. Regular codes are short
//! alphabetic identifiers (the reference dataset is > 99% `CBS`); anything
//! else is an irregular record worth eyeballing, so a bounded number of them
//! are printed in full as an inline data-quality signal.

use std::collections::BTreeMap;

use super::RecordConsumer;
use crate::app::models::LogRecord;
use crate::constants::CATEGORY_CODE_LEN;
use crate::Result;
use tracing::debug;

/// Counts upper-cased category codes and surfaces irregular samples
#[derive(Debug)]
pub struct CategoryCounter {
    counts: BTreeMap<String, u64>,
    irregular_left: u64,
}

impl CategoryCounter {
    /// Create a counter that prints at most `irregular_budget` irregular
    /// records before going quiet
    pub fn new(irregular_budget: u64) -> Self {
        Self {
            counts: BTreeMap::new(),
            irregular_left: irregular_budget,
        }
    }

    /// Whether an upper-cased code has the regular shape: exactly
    /// [`CATEGORY_CODE_LEN`] alphabetic characters
    fn is_regular(code: &str) -> bool {
        code.chars().count() == CATEGORY_CODE_LEN && code.chars().all(|c| c.is_alphabetic())
    }

    /// Accumulated category frequency table
    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    /// Remaining irregular-sample budget
    pub fn irregular_left(&self) -> u64 {
        self.irregular_left
    }
}

impl RecordConsumer for CategoryCounter {
    fn name(&self) -> &'static str {
        "Category frequencies"
    }

    fn consume(&mut self, record: &LogRecord) -> Result<()> {
        let code = record.category.to_uppercase();

        // Surface irregular records while the budget lasts; counting below
        // is unaffected once the budget is spent.
        if self.irregular_left > 0 && !Self::is_regular(&code) {
            self.irregular_left -= 1;
            debug!("Irregular category '{}' sampled", code);
            println!("{}", record.raw.trim_end_matches(['\r', '\n']));
        }

        *self.counts.entry(code).or_insert(0) += 1;
        Ok(())
    }

    fn report(&self) -> String {
        let entries: Vec<String> = self
            .counts
            .iter()
            .map(|(code, count)| format!("'{}': {}", code, count))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_category(category: &str) -> LogRecord {
        LogRecord {
            timestamp: "2016-09-28 04:30:30".to_string(),
            severity: "Info".to_string(),
            category: category.to_string(),
            body: "starting session".to_string(),
            raw: format!("2016-09-28 04:30:30 Info {} starting session\n", category),
        }
    }

    #[test]
    fn test_categories_aggregate_case_insensitively() {
        let mut counter = CategoryCounter::new(0);
        for category in ["cbs", "CBS", "Cbs"] {
            counter.consume(&record_with_category(category)).unwrap();
        }

        assert_eq!(counter.counts().get("CBS"), Some(&3));
        assert_eq!(counter.counts().len(), 1);
    }

    #[test]
    fn test_irregular_budget_decrements_and_stops() {
        let mut counter = CategoryCounter::new(2);

        counter.consume(&record_with_category("C1")).unwrap();
        assert_eq!(counter.irregular_left(), 1);

        counter.consume(&record_with_category("WEIRD")).unwrap();
        assert_eq!(counter.irregular_left(), 0);

        // budget exhausted: no longer decremented, counting continues
        counter.consume(&record_with_category("??")).unwrap();
        assert_eq!(counter.irregular_left(), 0);
        assert_eq!(counter.counts().get("??"), Some(&1));
    }

    #[test]
    fn test_regular_categories_never_touch_the_budget() {
        let mut counter = CategoryCounter::new(2);
        counter.consume(&record_with_category("CBS")).unwrap();
        counter.consume(&record_with_category("csi")).unwrap();
        assert_eq!(counter.irregular_left(), 2);
    }

    #[test]
    fn test_regular_shape() {
        assert!(CategoryCounter::is_regular("CBS"));
        assert!(!CategoryCounter::is_regular("CB"));
        assert!(!CategoryCounter::is_regular("CBSX"));
        assert!(!CategoryCounter::is_regular("CB1"));
        assert!(!CategoryCounter::is_regular(""));
    }

    #[test]
    fn test_report_renders_as_mapping() {
        let mut counter = CategoryCounter::new(0);
        counter.consume(&record_with_category("CBS")).unwrap();
        counter.consume(&record_with_category("CSI")).unwrap();
        counter.consume(&record_with_category("CBS")).unwrap();

        assert_eq!(counter.report(), "{'CBS': 2, 'CSI': 1}");
    }
}
