//! Text input parsing for boolean lists, sets of lists, and operation names.
//!
//! # Grammar
//!
//! ```bnf
//! SetList   ::= List ( ";" List )*
//! List      ::= ""  |  Token ( "," Token )*
//! Token     ::= Truthy | Falsy
//! Truthy    ::= "true" | "t" | "1" | "yes"
//! Falsy     ::= "false" | "f" | "0" | "no"
//! OpList    ::= OpName ( "," OpName )*
//! OpName    ::= "AND" | "OR" | "XOR" | "NAND" | "NOR" | "MAJORITY" | "PARITY" | "ALL_EQUAL"
//! ```
//!
//! Tokens and operation names are case-insensitive and surrounding
//! whitespace is ignored. A list that is empty after trimming is the empty
//! sequence; an empty token between commas is an error.

use super::errors::{LogicError, LogicResult};
use super::models::{BooleanSequence, Operation};
use super::registry::OperationRegistry;

const TRUTHY: [&str; 4] = ["true", "t", "1", "yes"];
const FALSY: [&str; 4] = ["false", "f", "0", "no"];

pub struct InputParser;

impl InputParser {
    /// Maps one token to a boolean, or `None` if it is not a recognised literal.
    pub fn parse_boolean_token(token: &str) -> Option<bool> {
        let normalized = token.trim().to_lowercase();
        if TRUTHY.contains(&normalized.as_str()) {
            Some(true)
        } else if FALSY.contains(&normalized.as_str()) {
            Some(false)
        } else {
            None
        }
    }

    /// Parses a comma-separated list of boolean tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// use varlogic::domain::InputParser;
    ///
    /// assert_eq!(
    ///     InputParser::parse_boolean_list("true, FALSE ,T,0"),
    ///     Ok(vec![true, false, true, false])
    /// );
    /// assert_eq!(InputParser::parse_boolean_list("  "), Ok(vec![]));
    /// assert!(InputParser::parse_boolean_list("true,maybe").is_err());
    /// ```
    pub fn parse_boolean_list(text: &str) -> LogicResult<BooleanSequence> {
        Self::parse_list_in_set(text, None)
    }

    /// Parses semicolon-separated sets, each a boolean list.
    ///
    /// Errors name the 1-based set as well as the token position inside it.
    /// Empty sets are returned as empty sequences; skipping them is left to
    /// the comparison that consumes them.
    pub fn parse_boolean_sets(text: &str) -> LogicResult<Vec<BooleanSequence>> {
        text.split(';')
            .enumerate()
            .map(|(index, set)| Self::parse_list_in_set(set, Some(index + 1)))
            .collect()
    }

    /// Canonical `true,false,...` rendering, accepted back by [`Self::parse_boolean_list`].
    pub fn render_boolean_list(values: &[bool]) -> String {
        values
            .iter()
            .map(|v| if *v { "true" } else { "false" })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parses a user-supplied operation name, case-insensitively.
    pub fn parse_operation(text: &str) -> LogicResult<Operation> {
        let name = text.trim();
        OperationRegistry::lookup(&name.to_uppercase())
            .map_err(|_| LogicError::MalformedOperationName(name.to_string()))
    }

    /// Parses a comma-separated list of operation names, keeping order and duplicates.
    pub fn parse_operation_list(text: &str) -> LogicResult<Vec<Operation>> {
        text.split(',').map(Self::parse_operation).collect()
    }

    fn parse_list_in_set(text: &str, set: Option<usize>) -> LogicResult<BooleanSequence> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        text.split(',')
            .enumerate()
            .map(|(index, raw)| {
                Self::parse_boolean_token(raw).ok_or_else(|| LogicError::InvalidBooleanToken {
                    token: raw.trim().to_string(),
                    position: index + 1,
                    set,
                })
            })
            .collect()
    }
}
