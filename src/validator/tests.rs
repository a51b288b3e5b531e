use crate::expression::{Expression, ExpressionError, Operator};
use crate::hand::Hand;
use crate::solver::Solver;
use crate::validator::constants::MAX_NESTING;
use crate::validator::{
    ErrorKind, MalformedError, Token, ValidationError, Verdict, check, check_cards,
    check_characters, check_parentheses, classify, evaluate, extract_numbers, outcome, parse,
    tokenize,
};

fn hand(ranks: [u8; 4]) -> Hand {
    Hand::new(ranks).unwrap_or(Hand::FALLBACK)
}

#[test]
fn test_correct_answer() {
    let result = check("(1+2+3)*4", &hand([1, 2, 3, 4]));
    assert_eq!(result, Ok(Verdict::Correct(24.0)));
}

#[test]
fn test_whitespace_is_ignored() {
    let result = check(" ( 1 + 2 + 3 )\t* 4\n", &hand([4, 3, 2, 1]));
    assert_eq!(result, Ok(Verdict::Correct(24.0)));
}

#[test]
fn test_empty_input() {
    let h = hand([1, 2, 3, 4]);
    assert_eq!(evaluate("", &h), Err(ValidationError::EmptyInput));
    assert_eq!(evaluate("  \t ", &h), Err(ValidationError::EmptyInput));
}

#[test]
fn test_invalid_characters_rejected() {
    let h = hand([1, 2, 3, 4]);
    assert_eq!(
        evaluate("(1+2+3)*a", &h),
        Err(ValidationError::InvalidCharacters('a'))
    );
    assert_eq!(
        evaluate("1+2;3*4", &h),
        Err(ValidationError::InvalidCharacters(';'))
    );
    assert_eq!(
        evaluate("1+2+3*4.0", &h),
        Err(ValidationError::InvalidCharacters('.'))
    );
    assert_eq!(
        evaluate("2^3*1*4", &h),
        Err(ValidationError::InvalidCharacters('^'))
    );
}

#[test]
fn test_invalid_characters_checked_before_anything_else() {
    // Also unbalanced and using the wrong cards, but characters fail first
    let h = hand([1, 2, 3, 4]);
    assert_eq!(
        evaluate("exit(1", &h),
        Err(ValidationError::InvalidCharacters('e'))
    );
}

#[test]
fn test_unbalanced_parentheses_rejected() {
    let h = hand([1, 2, 3, 4]);
    assert_eq!(
        evaluate("(1+2*3", &h),
        Err(ValidationError::UnbalancedParentheses)
    );
    assert_eq!(
        evaluate("1+2)*3", &h),
        Err(ValidationError::UnbalancedParentheses)
    );
    assert_eq!(
        evaluate(")1+2+3+4(", &h),
        Err(ValidationError::UnbalancedParentheses)
    );
}

#[test]
fn test_check_parentheses_depth() {
    assert!(check_parentheses("((1+2)*(3+4))").is_ok());
    assert!(check_parentheses("1+2").is_ok());
    assert!(check_parentheses(")(").is_err());
    assert!(check_parentheses("(()").is_err());
}

#[test]
fn test_multiset_card_usage() {
    let h = hand([3, 3, 8, 8]);
    assert!(check_cards("8/(3-8/3)", &h).is_ok());
    assert!(check_cards("3+3+8+8", &h).is_ok());
    assert!(check_cards("8*8*3*3", &h).is_ok());

    let result = evaluate("8/(3-8/8)", &h);
    assert_eq!(
        result,
        Err(ValidationError::WrongCardsUsed {
            found: vec!["8".into(), "3".into(), "8".into(), "8".into()],
        })
    );
}

#[test]
fn test_wrong_card_counts() {
    let h = hand([1, 2, 3, 4]);
    for text in ["1+2+3", "1+2+3+4+4", "1+2+3+5", "12+3+4", "(1+2)*3*4*0"] {
        let result = evaluate(text, &h);
        assert!(
            matches!(result, Err(ValidationError::WrongCardsUsed { .. })),
            "{} gave {:?}",
            text,
            result
        );
    }
}

#[test]
fn test_huge_number_is_wrong_cards() {
    let h = hand([1, 2, 3, 4]);
    let result = evaluate("99999999999999999999+2+3+4", &h);
    assert!(matches!(result, Err(ValidationError::WrongCardsUsed { .. })));
}

#[test]
fn test_extract_numbers() {
    assert_eq!(extract_numbers("(10+2)*13-1"), vec!["10", "2", "13", "1"]);
    assert_eq!(extract_numbers("+-*/()"), Vec::<&str>::new());
}

#[test]
fn test_malformed_expressions() {
    let h = hand([1, 2, 3, 4]);
    let cases = [
        ("1+2+3*4+", MalformedError::UnexpectedEnd),
        ("1++2+3*4", MalformedError::UnexpectedToken("+".into())),
        ("1*/2+3+4", MalformedError::UnexpectedToken("/".into())),
        ("-1+2+3*4", MalformedError::UnexpectedToken("-".into())),
        ("(1)(2)+3+4", MalformedError::UnexpectedToken("(".into())),
        ("()1+2+3+4", MalformedError::UnexpectedToken(")".into())),
        ("(1+2+3)4", MalformedError::UnexpectedToken("4".into())),
    ];
    for (text, expected) in cases {
        assert_eq!(
            evaluate(text, &h),
            Err(ValidationError::MalformedExpression(expected)),
            "{}",
            text
        );
    }
}

#[test]
fn test_division_by_zero_is_malformed() {
    let h = hand([1, 2, 2, 3]);
    let result = evaluate("1/(2-2)+3", &h);
    assert_eq!(
        result,
        Err(ValidationError::MalformedExpression(
            MalformedError::Evaluation(ExpressionError::DivisionByZero)
        ))
    );
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::MalformedExpression);
    }
}

#[test]
fn test_wrong_result_carries_value() {
    let h = hand([3, 3, 8, 8]);
    assert_eq!(check("3*8-3*8", &h), Ok(Verdict::WrongResult(0.0)));
    assert_eq!(check("3+3+8+8", &h), Ok(Verdict::WrongResult(22.0)));
}

#[test]
fn test_precedence_and_grouping() {
    let h = hand([2, 3, 4, 6]);
    assert_eq!(evaluate("2+3*4-6", &h), Ok(8.0));
    assert_eq!(evaluate("(2+3)*(6-4)", &h), Ok(10.0));
    assert_eq!(evaluate("6/3/2*4", &h), Ok(4.0));
    assert_eq!(evaluate("6-4-3+2", &h), Ok(1.0));
}

#[test]
fn test_fractional_answer_within_tolerance() {
    let result = check("8/(3-8/3)", &hand([3, 3, 8, 8]));
    assert!(matches!(result, Ok(Verdict::Correct(_))));

    let result = check("(5-1/5)*5", &hand([5, 1, 5, 5]));
    assert!(matches!(result, Ok(Verdict::Correct(_))));
}

#[test]
fn test_tolerance_boundary() {
    assert_eq!(classify(23.99995), Verdict::Correct(23.99995));
    assert_eq!(classify(23.999), Verdict::WrongResult(23.999));
    assert_eq!(classify(24.0), Verdict::Correct(24.0));
    assert!(!classify(-24.0).is_correct());
}

#[test]
fn test_revalidation_is_idempotent() {
    let h = hand([3, 3, 8, 8]);
    for text in ["8/(3-8/3)", "3+3+8+8", "8/(3-8/8)", "(3+3", "8*8*x"] {
        assert_eq!(check(text, &h), check(text, &h), "{}", text);
    }
}

#[test]
fn test_outcome_shapes() {
    let h = hand([1, 2, 3, 4]);

    let ok = outcome("(1+2+3)*4", &h);
    assert!(ok.is_ok());
    assert_eq!(ok.value, Some(24.0));

    let wrong = outcome("1+2+3+4", &h);
    assert_eq!(wrong.kind, Some(ErrorKind::WrongResult));
    assert_eq!(wrong.value, Some(10.0));

    let cards = outcome("1+1+1+1", &h);
    assert_eq!(cards.kind, Some(ErrorKind::WrongCardsUsed));
    assert_eq!(cards.value, None);

    assert_eq!(outcome("", &h).kind, Some(ErrorKind::EmptyInput));
    assert_eq!(outcome("1+x", &h).kind, Some(ErrorKind::InvalidCharacters));
    assert_eq!(outcome("(1", &h).kind, Some(ErrorKind::UnbalancedParentheses));
    assert_eq!(
        outcome("1+2+3+4*", &h).kind,
        Some(ErrorKind::MalformedExpression)
    );
}

#[test]
fn test_error_messages() {
    let err = ValidationError::WrongCardsUsed {
        found: vec!["3".into(), "8".into(), "8".into(), "8".into()],
    };
    assert_eq!(
        err.to_string(),
        "Use each dealt card exactly once, found [3, 8, 8, 8]"
    );
    assert_eq!(
        ValidationError::MalformedExpression(MalformedError::UnexpectedEnd).to_string(),
        "Malformed expression: expression ends too early"
    );
}

#[test]
fn test_check_characters_whitelist() {
    assert!(check_characters("0123456789+-*/()").is_ok());
    assert_eq!(
        check_characters("1 + 2"),
        Err(ValidationError::InvalidCharacters(' '))
    );
}

#[test]
fn test_tokenize_and_parse() {
    let tokens = tokenize("12*(3-1)");
    assert_eq!(
        tokens,
        Ok(vec![
            Token::Number(12.0),
            Token::Operator(Operator::Mul),
            Token::LeftParen,
            Token::Number(3.0),
            Token::Operator(Operator::Sub),
            Token::Number(1.0),
            Token::RightParen,
        ])
    );

    if let Ok(tokens) = tokens {
        let expr = parse(&tokens);
        assert!(matches!(expr, Ok(Expression::Mul(_, _))));
        if let Ok(expr) = expr {
            assert_eq!(expr.to_string(), "12 * (3 - 1)");
        }
    }
}

#[test]
fn test_parse_is_left_associative() {
    if let Ok(tokens) = tokenize("8-4-2") {
        let value = parse(&tokens).map(|expr| expr.evaluate());
        assert_eq!(value, Ok(Ok(2.0)));
    }
}

#[test]
fn test_solver_answers_validate() {
    let solver = Solver::new();
    for ranks in [
        [1, 2, 3, 4],
        [3, 3, 8, 8],
        [1, 5, 5, 5],
        [4, 4, 10, 10],
        [6, 2, 9, 3],
        [13, 12, 11, 1],
    ] {
        let h = hand(ranks);
        if let Some(solution) = solver.solve(&h) {
            let text = solution.to_string();
            let result = check(&text, &h);
            assert!(
                matches!(result, Ok(Verdict::Correct(_))),
                "{} for {:?} gave {:?}",
                text,
                ranks,
                result
            );
        }
    }
}

fn nested(depth: usize) -> String {
    format!("{}1{}+2+3+4", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_deep_nesting_is_malformed_not_a_crash() {
    let h = hand([1, 2, 3, 4]);
    for depth in [MAX_NESTING + 1, 5_000, 200_000] {
        assert_eq!(
            evaluate(&nested(depth), &h),
            Err(ValidationError::MalformedExpression(MalformedError::TooDeep(
                MAX_NESTING
            ))),
            "depth {}",
            depth
        );
    }
}

#[test]
fn test_nesting_up_to_limit_is_accepted() {
    let h = hand([1, 2, 3, 4]);
    assert_eq!(evaluate(&nested(MAX_NESTING), &h), Ok(10.0));
}

#[test]
fn test_tokenize_rejects_oversized_literal() {
    assert_eq!(
        tokenize("99999999999+1"),
        Err(MalformedError::UnexpectedToken("99999999999".into()))
    );
}
