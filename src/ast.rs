use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Literal(char),
    Group(Vec<Token>),                        // ( ... )
    GroupUncaptured(Vec<Token>),              // alternation operand, not captured
    Bracket(HashSet<char>),                   // [abc], [a-z]; membership only
    Or(Box<Token>, Box<Token>),               // a|b
    Repeat(Box<Token>, usize, Option<usize>), // {n}, {n,}, {n,m}, ?, *, +; None = no upper bound
}
