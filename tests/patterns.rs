use rgx_parse::{ParseError, Token, parse_regex};

fn lit(c: char) -> Token {
    Token::Literal(c)
}

fn uncaptured(tokens: Vec<Token>) -> Token {
    Token::GroupUncaptured(tokens)
}

fn or(left: Token, right: Token) -> Token {
    Token::Or(Box::new(left), Box::new(right))
}

fn repeat(inner: Token, min: usize, max: Option<usize>) -> Token {
    Token::Repeat(Box::new(inner), min, max)
}

#[test]
fn every_payload_is_reachable_from_one_pattern() {
    let tokens = parse_regex("([a-c]|d+)?e{2}").unwrap();
    assert_eq!(
        tokens,
        vec![
            repeat(
                Token::Group(vec![or(
                    uncaptured(vec![Token::Bracket("abc".chars().collect())]),
                    uncaptured(vec![repeat(lit('d'), 1, None)]),
                )]),
                0,
                Some(1),
            ),
            repeat(lit('e'), 2, Some(2)),
        ]
    );
}

#[test]
fn branches_keep_their_operand_order() {
    let tokens = parse_regex("ab|cd").unwrap();
    let Token::Or(left, right) = &tokens[0] else {
        panic!("expected an alternation, got {tokens:?}");
    };
    assert_eq!(**left, uncaptured(vec![lit('a'), lit('b')]));
    assert_eq!(**right, uncaptured(vec![lit('c'), lit('d')]));
}

#[test]
fn reparsing_yields_an_identical_tree() {
    let pattern = "(a|b)*c{1,3}[x-z]";
    assert_eq!(parse_regex(pattern), parse_regex(pattern));
}

#[test]
fn invalid_quantifier_names_the_offending_text() {
    let err = parse_regex("a{1,2,3}").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidQuantifierSpec {
            spec: "1,2,3".to_string(),
            pos: 1,
        }
    );
    assert!(err.to_string().contains("1,2,3"), "got: {err}");
}

#[test]
fn errors_carry_positions_for_reporting() {
    let err = parse_regex("ab(cd").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnterminatedConstruct {
            delimiter: '(',
            pos: 2,
        }
    );
    assert!(err.to_string().contains("position 2"), "got: {err}");

    let err = parse_regex("x[-a]").unwrap_err();
    assert_eq!(err, ParseError::MalformedRange { pos: 2 });

    let err = parse_regex("xy*z*w{2,1}").unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidQuantifierSpec {
            spec: "2,1".to_string(),
            pos: 6,
        }
    );
}
