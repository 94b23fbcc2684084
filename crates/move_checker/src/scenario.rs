//! Scenario files: a board setup plus the move queries to ask about it.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

use board_core::{Board, Coordinate, Piece, PieceKind, Side, check_move};

use crate::report::{QueryResult, Report, Verdict};

/// Errors raised while loading a scenario.
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid scenario: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unknown report format: {0:?} (expected \"text\" or \"json\")")]
    UnknownFormat(String),
}

/// Starting arrangement before `pieces` are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setup {
    #[default]
    Empty,
    Standard,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ScenarioError::UnknownFormat(s.to_string())),
        }
    }
}

/// Optional `[settings]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Tracing filter used when `RUST_LOG` is not set
    pub log_filter: String,
    pub format: ReportFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            format: ReportFormat::Text,
        }
    }
}

/// One `[[pieces]]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Placement {
    pub square: Coordinate,
    pub kind: PieceKind,
    pub side: Side,
}

/// One `[[queries]]` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Query {
    pub from: Coordinate,
    pub to: Coordinate,
    /// Expected legality, if the scenario asserts one
    pub expect: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub setup: Setup,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub pieces: Vec<Placement>,
    #[serde(default)]
    pub queries: Vec<Query>,
}

impl Scenario {
    /// Load a scenario from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut scenario = Self::from_toml(&contents)?;
        if scenario.name.is_empty() {
            scenario.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
        }
        Ok(scenario)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ScenarioError> {
        Ok(toml::from_str(contents)?)
    }

    /// The setup with every placement applied in file order.
    pub fn board(&self) -> Board {
        let mut board = match self.setup {
            Setup::Empty => Board::new(),
            Setup::Standard => Board::standard(),
        };
        for placement in &self.pieces {
            board.set(placement.square, Piece::new(placement.kind, placement.side));
        }
        board
    }

    /// Ask the validator about every query.
    pub fn run(&self) -> Report {
        let board = self.board();
        debug!(
            scenario = %self.name,
            pieces = board.piece_count(),
            queries = self.queries.len(),
            "running scenario"
        );

        let results = self
            .queries
            .iter()
            .map(|query| {
                let verdict = Verdict::from(check_move(&board, query.from, query.to));
                let result = QueryResult {
                    from: query.from,
                    to: query.to,
                    piece: board.get(query.from),
                    verdict,
                    expected: query.expect,
                };
                if result.is_mismatch() {
                    warn!(
                        from = %query.from,
                        to = %query.to,
                        expected = ?query.expect,
                        %verdict,
                        "verdict differs from expectation"
                    );
                } else {
                    debug!(from = %query.from, to = %query.to, %verdict, "query checked");
                }
                result
            })
            .collect();

        Report::new(&self.name, results)
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod scenario_tests;
