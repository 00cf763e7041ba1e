//! Verb frequency aggregation
//!
//! Derives a rough "verb" from each record body and counts occurrences over
//! the full stream. The derivation is a deliberately naive heuristic tuned
//! for component-style log messages ("Loaded ...", "starting session"), not
//! a linguistically correct stemmer.

use std::collections::BTreeMap;

use super::RecordConsumer;
use crate::app::models::LogRecord;
use crate::constants::NO_VERB_SENTINEL;
use crate::Result;

/// Counts derived verbs across all record bodies
#[derive(Debug, Default)]
pub struct VerbCounter {
    verbs: BTreeMap<String, u64>,
}

impl VerbCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a verb from a record body
    ///
    /// Scans the lower-cased tokens in order. The first token ending in
    /// "ing" wins immediately. Failing that, the last all-alphabetic token
    /// ending in "ed" seen during the scan is transformed by replacing the
    /// first occurrence of the substring "ed" with "ing" (not necessarily
    /// the suffix; "stopped" becomes "stopping"). If neither exists, the
    /// [`NO_VERB_SENTINEL`] is returned.
    pub fn find_verb(body: &str) -> String {
        let mut fallback: Option<String> = None;
        for word in body.to_lowercase().split_whitespace() {
            if word.ends_with("ing") {
                return word.to_string();
            }
            if word.ends_with("ed") && word.chars().all(|c| c.is_alphabetic()) {
                fallback = Some(word.replacen("ed", "ing", 1));
            }
        }
        fallback.unwrap_or_else(|| NO_VERB_SENTINEL.to_string())
    }

    /// Accumulated verb frequency table, ordered by verb
    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.verbs
    }
}

impl RecordConsumer for VerbCounter {
    fn name(&self) -> &'static str {
        "Verb frequencies"
    }

    fn consume(&mut self, record: &LogRecord) -> Result<()> {
        let verb = Self::find_verb(&record.body);
        *self.verbs.entry(verb).or_insert(0) += 1;
        Ok(())
    }

    fn report(&self) -> String {
        self.verbs
            .iter()
            .map(|(verb, count)| format!("{}: {}", verb, count))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
