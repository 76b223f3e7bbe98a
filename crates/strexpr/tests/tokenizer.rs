//! Integration tests for the tokenizer.

use strexpr::{EvalError, Token, TokenKind, Tokenizer};

fn atom(text: &str) -> Token {
    Token::new(TokenKind::Atom, text)
}

fn operator(text: &str) -> Token {
    Token::new(TokenKind::Operator, text)
}

fn function(text: &str) -> Token {
    Token::new(TokenKind::Function, text)
}

fn left_bracket() -> Token {
    Token::new(TokenKind::LeftBracket, "(")
}

fn right_bracket() -> Token {
    Token::new(TokenKind::RightBracket, ")")
}

fn comma() -> Token {
    Token::new(TokenKind::Comma, ",")
}

// =============================================================================
// Operator Recognition
// =============================================================================

#[test]
fn one_operator_with_spaces() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_operator("+").unwrap();

    let tokens = tokenizer.tokenize("A + B").unwrap();
    assert_eq!(tokens, vec![atom("A"), operator("+"), atom("B")]);
}

#[test]
fn one_operator_without_spaces() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_operator("+").unwrap();

    let tokens = tokenizer.tokenize("A+B").unwrap();
    assert_eq!(tokens, vec![atom("A"), operator("+"), atom("B")]);
}

#[test]
fn two_operators_without_spaces() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_operator("+").unwrap();

    let tokens = tokenizer.tokenize("A+B+C").unwrap();
    assert_eq!(
        tokens,
        vec![atom("A"), operator("+"), atom("B"), operator("+"), atom("C")]
    );
}

#[test]
fn distinct_operators_mixed_spacing() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_operator("!").unwrap();
    tokenizer.add_operator("+").unwrap();

    let tokens = tokenizer.tokenize("!A + B").unwrap();
    assert_eq!(
        tokens,
        vec![operator("!"), atom("A"), operator("+"), atom("B")]
    );
}

#[test]
fn operator_is_substring_of_another() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_operator("!").unwrap();
    tokenizer.add_operator("!=").unwrap();

    // Longest registered name wins the split.
    let tokens = tokenizer.tokenize("A!=!B").unwrap();
    assert_eq!(
        tokens,
        vec![atom("A"), operator("!="), operator("!"), atom("B")]
    );
}

#[test]
fn expression_without_registered_operators_stays_atomic() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("A+B").unwrap();
    assert_eq!(tokens, vec![atom("A+B")]);
}

#[test]
fn dangling_operators_tokenize_fine() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_operator("+").unwrap();

    // Structure is the converter's and evaluator's concern.
    let tokens = tokenizer.tokenize("+ + +").unwrap();
    assert_eq!(tokens, vec![operator("+"), operator("+"), operator("+")]);
}

// =============================================================================
// Function Recognition
// =============================================================================

#[test]
fn function_without_arguments() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_function("FUN").unwrap();

    let tokens = tokenizer.tokenize("FUN()").unwrap();
    assert_eq!(tokens, vec![function("FUN"), left_bracket(), right_bracket()]);
}

#[test]
fn function_with_arguments() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_function("FUN").unwrap();

    let tokens = tokenizer.tokenize("FUN(Arg1, Arg2)").unwrap();
    assert_eq!(
        tokens,
        vec![
            function("FUN"),
            left_bracket(),
            atom("Arg1"),
            comma(),
            atom("Arg2"),
            right_bracket(),
        ]
    );
}

#[test]
fn nested_functions() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_function("FUN1").unwrap();
    tokenizer.add_function("FUN2").unwrap();

    let tokens = tokenizer.tokenize("FUN1(FUN2(Arg1), Arg2)").unwrap();
    assert_eq!(
        tokens,
        vec![
            function("FUN1"),
            left_bracket(),
            function("FUN2"),
            left_bracket(),
            atom("Arg1"),
            right_bracket(),
            comma(),
            atom("Arg2"),
            right_bracket(),
        ]
    );
}

#[test]
fn function_split_out_of_expression() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_function("FUN").unwrap();
    tokenizer.add_operator("+").unwrap();

    // The operator split re-classifies the leading piece as a function.
    let tokens = tokenizer.tokenize("FUN+A").unwrap();
    assert_eq!(tokens, vec![function("FUN"), operator("+"), atom("A")]);
}

// =============================================================================
// Brackets
// =============================================================================

#[test]
fn nested_brackets() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("((A))").unwrap();
    assert_eq!(
        tokens,
        vec![
            left_bracket(),
            left_bracket(),
            atom("A"),
            right_bracket(),
            right_bracket(),
        ]
    );
}

#[test]
fn unpaired_brackets_tokenize_fine() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("A ( B").unwrap();
    assert_eq!(tokens, vec![atom("A"), left_bracket(), atom("B")]);
}

// =============================================================================
// Quoted Literals
// =============================================================================

#[test]
fn quoted_comma_is_not_a_separator() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("\"A,B\"").unwrap();
    assert_eq!(tokens, vec![atom("A,B")]);
}

#[test]
fn quoted_operator_name_is_an_atom() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_operator("+").unwrap();

    let tokens = tokenizer.tokenize("\"A\" + \"+\"").unwrap();
    assert_eq!(tokens, vec![atom("A"), operator("+"), atom("+")]);
}

#[test]
fn quoted_function_name_is_an_atom() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_function("FUN").unwrap();

    let tokens = tokenizer.tokenize("\"FUN\"").unwrap();
    assert_eq!(tokens, vec![atom("FUN")]);
}

#[test]
fn escaped_quote_inside_literal() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize(r#""A\"B""#).unwrap();
    assert_eq!(tokens, vec![atom("A\"B")]);
}

#[test]
fn empty_quoted_literal_is_an_empty_atom() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("\"\"").unwrap();
    assert_eq!(tokens, vec![atom("")]);
}

#[test]
fn quoted_literal_keeps_inner_blanks() {
    let tokenizer = Tokenizer::new();

    let tokens = tokenizer.tokenize("\"  A  B  \"").unwrap();
    assert_eq!(tokens, vec![atom("  A  B  ")]);
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn duplicate_operator_name_is_rejected() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_operator("+").unwrap();

    let result = tokenizer.add_operator("+");
    assert_eq!(
        result,
        Err(EvalError::DuplicateName {
            name: "+".to_string()
        })
    );
}

#[test]
fn duplicate_function_name_is_rejected() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_function("FUN").unwrap();

    let result = tokenizer.add_function("FUN");
    assert_eq!(
        result,
        Err(EvalError::DuplicateName {
            name: "FUN".to_string()
        })
    );
}

#[test]
fn uniqueness_spans_functions_and_operators() {
    let mut tokenizer = Tokenizer::new();
    tokenizer.add_function("NAME").unwrap();
    assert!(tokenizer.add_operator("NAME").is_err());

    let mut tokenizer = Tokenizer::new();
    tokenizer.add_operator("NAME").unwrap();
    assert!(tokenizer.add_function("NAME").is_err());
}
