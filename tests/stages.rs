use rpncalc::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::eval_postfix,
        lexer::{Number, Token, render, tokenize},
        operator::Operator,
        postfix::to_postfix,
    },
    to_postfix_string,
};

fn postfix(src: &str) -> String {
    to_postfix_string(src).unwrap_or_else(|e| panic!("'{src}' failed: {e}"))
}

#[test]
fn tokenizer_emits_tokens_in_source_order() {
    let tokens = tokenize("12.5*(3-1)%2").unwrap();
    assert_eq!(tokens,
               vec![Token::from(12.5),
                    Token::Operator(Operator::Mul),
                    Token::LeftParen,
                    Token::from(3.0),
                    Token::Operator(Operator::Sub),
                    Token::from(1.0),
                    Token::RightParen,
                    Token::Operator(Operator::Rem),
                    Token::from(2.0)]);
}

#[test]
fn tokenizer_skips_whitespace() {
    assert!(tokenize(" \t\n").unwrap().is_empty());
    assert_eq!(tokenize(" 1 +  2 ").unwrap().len(), 3);
}

#[test]
fn tokens_rejoin_to_source_without_whitespace() {
    let sources = ["1 + 2", "(10 - 4) * 3 % 7", "  8/ ( 2 )", "-3*-4", "100", "007+1.50", "2 3*4"];
    for src in sources {
        let tokens = tokenize(src).unwrap();
        let stripped: String = src.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(render(&tokens, ""), stripped);
    }
}

#[test]
fn tokenizer_reports_invalid_character_position() {
    assert_eq!(tokenize("12 + a").unwrap_err(),
               ParseError::InvalidCharacter { character: 'a',
                                              position:  5, });
    assert_eq!(tokenize("1×2").unwrap_err(),
               ParseError::InvalidCharacter { character: '×',
                                              position:  1, });
}

#[test]
fn tokenizer_reports_malformed_number() {
    assert_eq!(tokenize("3 + 1.2.3").unwrap_err(),
               ParseError::MalformedNumber { literal:  "1.2.3".to_string(),
                                             position: 4, });
    assert_eq!(tokenize("2*.5").unwrap_err(),
               ParseError::MalformedNumber { literal:  ".5".to_string(),
                                             position: 2, });
    assert_eq!(tokenize("1 .+1").unwrap_err(),
               ParseError::MalformedNumber { literal:  "1.".to_string(),
                                             position: 0, });
}

#[test]
fn tokenizer_joins_digits_across_whitespace() {
    let tokens = tokenize("1 2. 5 + 3").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(render(&tokens, " "), "12.5 + 3");
    assert_eq!(tokens[0], Token::Number(Number::parse("12.5").unwrap()));
}

#[test]
fn number_literal_shape() {
    assert_eq!(Number::parse("42").map(|n| n.value()), Some(42.0));
    assert_eq!(Number::parse("0.25").map(|n| n.value()), Some(0.25));
    for text in ["", ".", "1.", ".5", "1.2.3", "1e5"] {
        assert!(Number::parse(text).is_none(), "'{text}' should not be a number");
    }
}

#[test]
fn converter_orders_by_precedence() {
    assert_eq!(postfix("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(postfix("1-2+3"), "1 2 - 3 +");
    assert_eq!(postfix("8/4%3*2"), "8 4 / 3 % 2 *");
    assert_eq!(postfix("1+2*3-4"), "1 2 3 * + 4 -");
}

#[test]
fn converter_reads_unary_minus() {
    assert_eq!(postfix("-5%2"), "5 neg 2 %");
    assert_eq!(postfix("3*-4"), "3 4 neg *");
    assert_eq!(postfix("(-2)"), "2 neg");
    assert_eq!(postfix("--2"), "2 neg neg");
    assert_eq!(postfix("1-2"), "1 2 -");
}

#[test]
fn converter_passes_empty_input() {
    assert!(to_postfix(&[]).unwrap().is_empty());
}

#[test]
fn converter_rejects_unbalanced_parentheses() {
    let open = tokenize("(1+2").unwrap();
    assert_eq!(to_postfix(&open).unwrap_err(),
               ParseError::MismatchedParenthesis { unmatched: '(' });

    let close = tokenize("1+2)").unwrap();
    assert_eq!(to_postfix(&close).unwrap_err(),
               ParseError::MismatchedParenthesis { unmatched: ')' });
}

#[test]
fn evaluator_keeps_operand_order() {
    let postfix = [Token::from(2.0), Token::from(8.0), Token::Operator(Operator::Div)];
    assert_eq!(eval_postfix(&postfix).unwrap(), 0.25);

    let postfix = [Token::from(2.0), Token::from(8.0), Token::Operator(Operator::Sub)];
    assert_eq!(eval_postfix(&postfix).unwrap(), -6.0);
}

#[test]
fn evaluator_reports_underflow() {
    let postfix = [Token::from(2.0), Token::Operator(Operator::Add)];
    assert_eq!(eval_postfix(&postfix).unwrap_err(),
               RuntimeError::StackUnderflow { operator: Operator::Add });

    let postfix = [Token::Operator(Operator::Neg)];
    assert_eq!(eval_postfix(&postfix).unwrap_err(),
               RuntimeError::StackUnderflow { operator: Operator::Neg });
}

#[test]
fn evaluator_requires_a_single_result() {
    assert_eq!(eval_postfix(&[]).unwrap_err(),
               RuntimeError::MalformedExpression { operands: 0 });

    let postfix = [Token::from(1.0), Token::from(2.0), Token::from(3.0)];
    assert_eq!(eval_postfix(&postfix).unwrap_err(),
               RuntimeError::MalformedExpression { operands: 3 });

    assert_eq!(eval_postfix(&postfix).unwrap_err().to_string(),
               "Error: Malformed expression, 3 values left over.");
}

#[test]
fn evaluator_rejects_parentheses() {
    let postfix = [Token::from(1.0), Token::LeftParen];
    assert_eq!(eval_postfix(&postfix).unwrap_err(),
               RuntimeError::MalformedExpression { operands: 1 });
}

#[test]
fn operator_table() {
    assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    assert_eq!(Operator::Mul.precedence(), Operator::Rem.precedence());
    assert!(Operator::Div.precedence() > Operator::Sub.precedence());
    assert!(Operator::Neg.precedence() > Operator::Mul.precedence());
    assert_eq!(Operator::Neg.arity(), 1);
    assert_eq!(Operator::Rem.arity(), 2);
}
