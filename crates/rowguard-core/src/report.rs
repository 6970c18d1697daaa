use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use crate::results::RuleResult;

/// Per-(field header, rule name) violation counters for one run.
///
/// Counters are atomic and the map is concurrent, so rows evaluated in
/// parallel record into it without coordination.
pub struct ValidationReport {
    counters: DashMap<(String, String), AtomicUsize>,
    total_rows: AtomicUsize,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
            total_rows: AtomicUsize::new(0),
        }
    }

    pub fn record(&self, field: &str, rule: &str, violations: usize) {
        self.counters
            .entry((field.to_string(), rule.to_string()))
            .or_insert_with(|| AtomicUsize::new(0))
            .fetch_add(violations, Ordering::Relaxed);
    }

    pub fn set_total_rows(&self, total_rows: usize) {
        self.total_rows.store(total_rows, Ordering::Relaxed);
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows.load(Ordering::Relaxed)
    }

    /// Extract the breakdown, sorted by field then rule for stable output.
    pub fn to_results(&self) -> HashMap<String, Vec<RuleResult>> {
        let total_rows = self.total_rows();

        let mut sorted: Vec<((String, String), usize)> = self
            .counters
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().load(Ordering::Relaxed)))
            .collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut results: HashMap<String, Vec<RuleResult>> = HashMap::new();
        for ((field, rule), count) in sorted {
            let percentage = if total_rows > 0 {
                (count as f64 / total_rows as f64) * 100.0
            } else {
                0.0
            };
            results
                .entry(field)
                .or_default()
                .push(RuleResult::new(rule, count, percentage));
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accumulates_per_field_and_rule() {
        let report = ValidationReport::new();
        report.set_total_rows(4);
        report.record("Color", "IN_DICTIONARY", 1);
        report.record("Color", "IN_DICTIONARY", 1);
        report.record("Color", "NON_NULL", 1);

        let results = report.to_results();
        let color = &results["Color"];
        assert_eq!(color.len(), 2);
        // Sorted by rule name within the field
        assert_eq!(color[0].rule_name, "IN_DICTIONARY");
        assert_eq!(color[0].violation_count, 2);
        assert_eq!(color[0].violation_percentage, 50.0);
        assert_eq!(color[1].rule_name, "NON_NULL");
        assert_eq!(color[1].violation_count, 1);
    }

    #[test]
    fn test_zero_rows_gives_zero_percentage() {
        let report = ValidationReport::new();
        report.record("Tags", "NON_NULL", 1);

        let results = report.to_results();
        assert_eq!(results["Tags"][0].violation_percentage, 0.0);
    }
}
