use numeval::{
    calculate_expression,
    calculator::{parser::core::calculate, tokenizer::tokenize},
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
                                                       panic!("Failed to read {path:?}: {e}")
                                                   });

        for (i, block) in extract_numeval_blocks(&content).into_iter().enumerate() {
            for line in block.lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                count += 1;

                let (expression, expected) =
                    line.split_once("=>")
                        .unwrap_or_else(|| panic!("Example {} in {:?} has no '=>': {}", i + 1, path, line));
                let expected: f64 = expected.trim()
                                            .parse()
                                            .unwrap_or_else(|e| panic!("Bad expected value in {path:?}: {line}\nError: {e}"));

                match calculate_expression(expression) {
                    Ok(value) => assert!(value == expected,
                                         "Example in {path:?} evaluated to {value}:\n{line}"),
                    Err(e) => panic!("Example in {:?} failed:\n{}\nError: {}", path, line, e),
                }
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_numeval_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```numeval") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_value(src: &str, expected: f64) {
    match calculate_expression(src) {
        Ok(value) => assert!(value == expected,
                             "Expression '{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn assert_error(src: &str, message: &str) {
    match calculate_expression(src) {
        Ok(value) => panic!("Expression '{src}' evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.to_string(), message, "Expression '{src}' failed differently"),
    }
}

#[test]
fn addition_and_subtraction() {
    assert_value("2 + 3", 5.0);
    assert_value("8 - 5", 3.0);
    assert_value("1 + 2 + 3 + 4", 10.0);
}

#[test]
fn multiplication_and_division() {
    assert_value("7 * 9", 63.0);
    assert_value("10 / 2", 5.0);
    assert_value("5 / 2.5", 2.0);
}

#[test]
fn same_precedence_chains_evaluate_left_to_right() {
    assert_value("10 - 5 - 2", 3.0);
    assert_value("2 * 6 / 3", 4.0);
    assert_value("100 / 10 / 2", 5.0);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_value("2 + 3 * 4", 14.0);
    assert_value("2 * 3 + 4", 10.0);
    assert_value("(2 + 3) * 4", 20.0);
    assert_value("2 * (3 + 4) - 5 / 2.5", 12.0);
}

#[test]
fn unary_signs() {
    assert_value("-5", -5.0);
    assert_value("+5", 5.0);
    assert_value("- - 5", 5.0);
    assert_value("--5", 5.0);
    assert_value("-(2 + 3)", -5.0);
    // Unary binds tighter than binary, so only the 2 is negated.
    assert_value("-2 * 3", -6.0);
}

#[test]
fn division_by_zero_at_any_nesting_depth() {
    assert_error("5 / 0", "Division by zero");
    assert_error("2 + 5 / 0", "Division by zero");
    assert_error("1 / (3 - 3)", "Division by zero");
    assert_error("1 / (2 * (1 - 1))", "Division by zero");
}

#[test]
fn empty_and_whitespace_input() {
    assert_error("", "Empty expression");
    assert_error("   \t \n ", "Empty expression");
}

#[test]
fn missing_closing_parenthesis() {
    assert_error("(2 + 3", "Missing closing parenthesis");
    assert_error("((1 + 2) * 3", "Missing closing parenthesis");
}

#[test]
fn unexpected_end_of_expression() {
    assert_error("2 +", "Unexpected end of expression");
    assert_error("4 * ", "Unexpected end of expression");
}

#[test]
fn malformed_literals_are_invalid_tokens() {
    assert_error("2.5.5", "Invalid token: 2.5.5");
    assert_error("2 + 3.4.5", "Invalid token: 3.4.5");
    assert_error(".", "Invalid token: .");
}

#[test]
fn trailing_tokens_are_unexpected() {
    assert_error("(2 + 3) 4", "Unexpected token: 4");
    assert_error("2 3", "Unexpected token: 3");
    assert_error("1 + 2)", "Unexpected token: )");
}

#[test]
fn unknown_characters_become_single_tokens() {
    assert_eq!(tokenize("2 @ 3"), vec!["2", "@", "3"]);
    assert_eq!(tokenize("abc"), vec!["a", "b", "c"]);
    // The parser rejects them one character at a time.
    assert_error("2 + ab", "Invalid token: a");
}

#[test]
fn token_sequence_scenarios() {
    assert_eq!(calculate(["2", "+", "3"]), Ok(5.0));
    assert_eq!(calculate(["(", "2", "+", "3", ")", "*", "4"]), Ok(20.0));
    assert_eq!(calculate(["5", "/", "0"]).unwrap_err().to_string(),
               "Division by zero");
    assert_eq!(calculate(["(", "2", "+", "3"]).unwrap_err().to_string(),
               "Missing closing parenthesis");
    assert_eq!(calculate(["2", "+"]).unwrap_err().to_string(),
               "Unexpected end of expression");
    assert_eq!(calculate(["2", "3"]).unwrap_err().to_string(),
               "Unexpected token: 3");
}

#[test]
fn empty_sequence_and_single_number() {
    let empty: [&str; 0] = [];
    assert_eq!(calculate(empty).unwrap_err().to_string(), "Empty expression");
    assert_eq!(calculate(["42.5"]), Ok(42.5));
}

#[test]
fn non_finite_literals_are_rejected() {
    assert_eq!(calculate(["inf"]).unwrap_err().to_string(), "Invalid token: inf");
    assert_eq!(calculate(["NaN"]).unwrap_err().to_string(), "Invalid token: NaN");
}

#[test]
fn tokenizer_round_trip() {
    let source = "2 * (3 + 4) - 5 / 2.5";
    let tokens = tokenize(source);

    assert_eq!(tokens,
               vec!["2", "*", "(", "3", "+", "4", ")", "-", "5", "/", "2.5"]);
    assert_eq!(calculate(tokens.iter().map(String::as_str)),
               calculate_expression(source));
}

#[test]
fn facade_percentage_example() {
    assert_value("(20 / 100) * 150", 30.0);
}

#[test]
fn repeated_evaluation_is_idempotent() {
    let tokens = tokenize("2 * (3 + 4) - 5 / 2.5");
    let first = calculate(tokens.iter().map(String::as_str));

    for _ in 0..3 {
        assert_eq!(calculate(tokens.iter().map(String::as_str)), first);
        assert_eq!(calculate_expression("2 * (3 + 4) - 5 / 2.5"), first);
    }
}

#[test]
fn arithmetic_is_plain_ieee_double() {
    let value = calculate_expression("0.1 + 0.2").unwrap();
    assert_eq!(value, 0.1 + 0.2);
    // The usual binary representation error is not corrected away.
    assert!(value != 0.3);
}
