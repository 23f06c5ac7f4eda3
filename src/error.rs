use thiserror::Error;

/// Errors that abort a parse. Each carries the position (character index
/// into the pattern) needed to point an end user at the problem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid quantifier '{{{spec}}}' at position {pos}: expected one or two integer fields")]
    InvalidQuantifierSpec { spec: String, pos: usize },

    #[error("quantifier '{symbol}' at position {pos} has nothing to repeat")]
    DanglingQuantifier { symbol: char, pos: usize },

    #[error("unterminated '{delimiter}' opened at position {pos}")]
    UnterminatedConstruct { delimiter: char, pos: usize },

    #[error("range '-' at position {pos} has no start character")]
    MalformedRange { pos: usize },
}
