//! Parse options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Options controlling a parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseOptions {
    /// Parse in strict mode from the start. A `"use strict"` directive turns
    /// strict mode on for its body either way.
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Read options from a JSON object such as `{"strict": true}`.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The grammar production a parse starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParseEntry {
    #[default]
    Program,
    Expression,
    Type,
    Statement,
    Declaration,
}

impl ParseEntry {
    pub const ALL: [ParseEntry; 5] = [
        ParseEntry::Program,
        ParseEntry::Expression,
        ParseEntry::Type,
        ParseEntry::Statement,
        ParseEntry::Declaration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ParseEntry::Program => "program",
            ParseEntry::Expression => "expression",
            ParseEntry::Type => "type",
            ParseEntry::Statement => "statement",
            ParseEntry::Declaration => "declaration",
        }
    }
}

impl fmt::Display for ParseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParseEntry::ALL
            .into_iter()
            .find(|entry| entry.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown entry '{s}', expected one of: program, expression, type, statement, declaration"
                )
            })
    }
}
