use std::collections::HashSet;
use std::mem;

use crate::ast::Token;
use crate::error::ParseError;

/// Mutable parse state for one nesting level: a cursor into the pattern and
/// the tokens produced so far at that level. One scope exists per top-level
/// call, group body, or alternation branch, and none outlives the call that
/// created it.
struct ParseScope {
    pos: usize,
    tokens: Vec<Token>,
}

impl ParseScope {
    fn new(pos: usize) -> Self {
        ParseScope {
            pos,
            tokens: Vec::new(),
        }
    }
}

/// Parses a pattern into its top-level token sequence.
pub fn parse_regex(pattern: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut scope = ParseScope::new(0);
    while scope.pos < chars.len() {
        process(&chars, &mut scope)?;
        scope.pos += 1;
    }
    Ok(scope.tokens)
}

// One dispatch step: inspect the character at the cursor and append (or
// rewrite) at most one token. Sub-routines that consume extra input leave the
// cursor on the last character they consumed, so the caller's +1 lands just
// past the construct.
fn process(pattern: &[char], scope: &mut ParseScope) -> Result<(), ParseError> {
    match pattern[scope.pos] {
        '(' => parse_group(pattern, scope),
        '[' => parse_bracket(pattern, scope),
        '|' => parse_or(pattern, scope),
        '*' | '?' | '+' => parse_repeat(pattern, scope),
        '{' => parse_repeat_bounds(pattern, scope),
        ch => {
            scope.tokens.push(Token::Literal(ch));
            Ok(())
        }
    }
}

fn parse_group(pattern: &[char], scope: &mut ParseScope) -> Result<(), ParseError> {
    let open = scope.pos;

    let mut group = ParseScope::new(open + 1);
    while group.pos < pattern.len() && pattern[group.pos] != ')' {
        process(pattern, &mut group)?;
        group.pos += 1;
    }
    if group.pos >= pattern.len() {
        return Err(ParseError::UnterminatedConstruct {
            delimiter: '(',
            pos: open,
        });
    }

    scope.tokens.push(Token::Group(group.tokens));
    // the sub-scope stopped on the ')'; pick its position up so iteration
    // resumes past the group instead of re-scanning its interior
    scope.pos = group.pos;
    Ok(())
}

fn parse_bracket(pattern: &[char], scope: &mut ParseScope) -> Result<(), ParseError> {
    let open = scope.pos;
    scope.pos += 1;

    let mut literals: Vec<char> = Vec::new();
    loop {
        if scope.pos >= pattern.len() {
            return Err(ParseError::UnterminatedConstruct {
                delimiter: '[',
                pos: open,
            });
        }
        let ch = pattern[scope.pos];
        if ch == ']' {
            break;
        }

        if ch == '-' {
            // range: replace the previous character with every character
            // from it up to the one after the '-'
            let prev = literals.pop().ok_or(ParseError::MalformedRange { pos: scope.pos })?;
            scope.pos += 1;
            if scope.pos >= pattern.len() {
                return Err(ParseError::UnterminatedConstruct {
                    delimiter: '[',
                    pos: open,
                });
            }
            let next = pattern[scope.pos];
            // yields nothing when prev > next
            literals.extend(prev..=next);
        } else {
            literals.push(ch);
        }

        scope.pos += 1;
    }

    let literals: HashSet<char> = literals.into_iter().collect();
    scope.tokens.push(Token::Bracket(literals));
    Ok(())
}

fn parse_or(pattern: &[char], scope: &mut ParseScope) -> Result<(), ParseError> {
    // the right operand is everything up to end of input or the ')' of an
    // enclosing group
    let mut rhs = ParseScope::new(scope.pos + 1);
    while rhs.pos < pattern.len() && pattern[rhs.pos] != ')' {
        process(pattern, &mut rhs)?;
        rhs.pos += 1;
    }

    // alternation binds to everything parsed so far in this scope
    let left = Token::GroupUncaptured(mem::take(&mut scope.tokens));
    let right = if matches!(rhs.tokens.as_slice(), [Token::Or(..)]) {
        // a chained alternation already reduced the branch to a single Or;
        // nest it directly so `a|b|c` leans right
        rhs.tokens.swap_remove(0)
    } else {
        Token::GroupUncaptured(rhs.tokens)
    };

    // stop on the last character the branch consumed; a terminating ')'
    // still closes the enclosing group
    scope.pos = rhs.pos - 1;
    scope.tokens = vec![Token::Or(Box::new(left), Box::new(right))];
    Ok(())
}

fn parse_repeat(pattern: &[char], scope: &mut ParseScope) -> Result<(), ParseError> {
    let symbol = pattern[scope.pos];
    let (min, max) = match symbol {
        '*' => (0, None),
        '?' => (0, Some(1)),
        _ => (1, None), // '+'
    };

    // wrap the last token so the bounds apply to it
    let prev = scope.tokens.pop().ok_or(ParseError::DanglingQuantifier {
        symbol,
        pos: scope.pos,
    })?;
    scope.tokens.push(Token::Repeat(Box::new(prev), min, max));
    Ok(())
}

fn parse_repeat_bounds(pattern: &[char], scope: &mut ParseScope) -> Result<(), ParseError> {
    let open = scope.pos;

    let mut end = open + 1;
    while end < pattern.len() && pattern[end] != '}' {
        end += 1;
    }
    if end >= pattern.len() {
        return Err(ParseError::UnterminatedConstruct {
            delimiter: '{',
            pos: open,
        });
    }

    let spec: String = pattern[open + 1..end].iter().collect();
    let invalid = || ParseError::InvalidQuantifierSpec {
        spec: spec.clone(),
        pos: open,
    };

    let fields: Vec<&str> = spec.split(',').collect();
    let (min, max) = match fields.as_slice() {
        [count] => {
            let count: usize = count.parse().map_err(|_| invalid())?;
            (count, Some(count))
        }
        [lo, hi] => {
            let min: usize = lo.parse().map_err(|_| invalid())?;
            let max = if hi.is_empty() {
                None
            } else {
                Some(hi.parse().map_err(|_| invalid())?)
            };
            (min, max)
        }
        _ => return Err(invalid()),
    };
    if let Some(max) = max {
        if min > max {
            return Err(invalid());
        }
    }

    let prev = scope.tokens.pop().ok_or(ParseError::DanglingQuantifier {
        symbol: '{',
        pos: open,
    })?;
    scope.tokens.push(Token::Repeat(Box::new(prev), min, max));
    scope.pos = end; // on the '}'
    Ok(())
}
