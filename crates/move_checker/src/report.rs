//! Scenario reports: per-query verdicts plus a summary, as text or JSON.

use serde::{Serialize, Serializer};
use std::fmt;

use board_core::{Coordinate, IllegalMove, MoveEffect, Piece};

/// The validator's answer for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    Legal {
        capture: Option<Piece>,
    },
    Illegal {
        #[serde(serialize_with = "display_string")]
        reason: IllegalMove,
    },
}

fn display_string<S: Serializer>(reason: &IllegalMove, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

impl Verdict {
    pub fn is_legal(self) -> bool {
        matches!(self, Verdict::Legal { .. })
    }
}

impl From<Result<MoveEffect, IllegalMove>> for Verdict {
    fn from(value: Result<MoveEffect, IllegalMove>) -> Self {
        match value {
            Ok(MoveEffect::Quiet) => Verdict::Legal { capture: None },
            Ok(MoveEffect::Capture(piece)) => Verdict::Legal {
                capture: Some(piece),
            },
            Err(reason) => Verdict::Illegal { reason },
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Legal { capture: None } => f.write_str("legal"),
            Verdict::Legal {
                capture: Some(piece),
            } => write!(f, "legal, captures {piece}"),
            Verdict::Illegal { reason } => write!(f, "illegal: {reason}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    pub from: Coordinate,
    pub to: Coordinate,
    /// Occupant of `from` at query time
    pub piece: Option<Piece>,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<bool>,
}

impl QueryResult {
    /// True when the scenario stated an expectation and the verdict disagrees.
    pub fn is_mismatch(&self) -> bool {
        self.expected
            .is_some_and(|expected| expected != self.verdict.is_legal())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub queries: usize,
    pub legal: usize,
    pub illegal: usize,
    /// Queries that carried an expectation
    pub checked: usize,
    pub mismatches: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub scenario: String,
    pub results: Vec<QueryResult>,
    pub summary: Summary,
}

impl Report {
    pub fn new(scenario: &str, results: Vec<QueryResult>) -> Self {
        let legal = results.iter().filter(|r| r.verdict.is_legal()).count();
        let summary = Summary {
            queries: results.len(),
            legal,
            illegal: results.len() - legal,
            checked: results.iter().filter(|r| r.expected.is_some()).count(),
            mismatches: results.iter().filter(|r| r.is_mismatch()).count(),
        };
        Self {
            scenario: scenario.to_string(),
            results,
            summary,
        }
    }

    /// Every stated expectation held.
    pub fn passed(&self) -> bool {
        self.summary.mismatches == 0
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Scenario: {} ===\n\n", self.scenario));
        report.push_str(&format!(
            "{:<8} {:<14} {:<48} {}\n",
            "Move", "Piece", "Verdict", "Expected"
        ));
        report.push_str(&"-".repeat(80));
        report.push('\n');

        for result in &self.results {
            let piece = result
                .piece
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            let expected = match result.expected {
                None => "",
                Some(_) if result.is_mismatch() => "MISMATCH",
                Some(_) => "ok",
            };
            report.push_str(&format!(
                "{:<8} {:<14} {:<48} {}\n",
                format!("{}-{}", result.from, result.to),
                piece,
                result.verdict.to_string(),
                expected
            ));
        }

        let s = &self.summary;
        report.push_str(&format!(
            "\n{} queries: {} legal, {} illegal; {} of {} expectations failed\n",
            s.queries, s.legal, s.illegal, s.mismatches, s.checked
        ));
        report
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
