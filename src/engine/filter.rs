use serde::{Deserialize, Serialize};

use crate::models::Expat;

/// Checklist filter: exact arrival date and case-insensitive name substring.
/// Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpatFilter {
    pub name: String,
    pub arrival_date: String,
}

impl ExpatFilter {
    pub fn new(name: impl Into<String>, arrival_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arrival_date: arrival_date.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.arrival_date.is_empty()
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.arrival_date.clear();
    }

    pub fn matches(&self, expat: &Expat) -> bool {
        let date_match = self.arrival_date.is_empty() || expat.arrival_date == self.arrival_date;
        let name_match = self.name.is_empty()
            || expat
                .name
                .to_lowercase()
                .contains(&self.name.to_lowercase());
        date_match && name_match
    }

    /// Matching expats in their original order
    pub fn apply<'a>(&self, expats: &'a [Expat]) -> Vec<&'a Expat> {
        expats.iter().filter(|e| self.matches(e)).collect()
    }

    /// One-line description for headers, e.g. `name~"jo" arrival=2024-07-20`
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.name.is_empty() {
            parts.push(format!("name~\"{}\"", self.name));
        }
        if !self.arrival_date.is_empty() {
            parts.push(format!("arrival={}", self.arrival_date));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

/// Order-preserving subsequence of `expats` matching both queries.
/// A malformed date query simply matches nothing.
pub fn filter_expats<'a>(expats: &'a [Expat], name_query: &str, date_query: &str) -> Vec<&'a Expat> {
    ExpatFilter::new(name_query, date_query).apply(expats)
}
