use std::fmt;

use log::debug;

use crate::expression::Operator;
use crate::validator::errors::MalformedError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => write!(f, "("),
            Token::RightParen => write!(f, ")"),
        }
    }
}

/// Split whitelisted text into tokens. Whitespace is skipped.
///
/// # Errors
///
/// Returns an error for any character outside digits, operators and
/// parentheses. An integer literal that does not fit in `u32` is reported
/// as an unexpected token.
pub fn tokenize(text: &str) -> Result<Vec<Token>, MalformedError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '(' => tokens.push(Token::LeftParen),
            ')' => tokens.push(Token::RightParen),
            c if c.is_ascii_digit() => {
                let mut literal = String::from(c);
                while let Some(&next) = chars.peek()
                    && next.is_ascii_digit()
                {
                    literal.push(next);
                    chars.next();
                }
                let value = literal
                    .parse::<u32>()
                    .map_err(|_| MalformedError::UnexpectedToken(literal.clone()))?;
                tokens.push(Token::Number(f64::from(value)));
            }
            c => match Operator::from_symbol(c) {
                Some(op) => tokens.push(Token::Operator(op)),
                None => return Err(MalformedError::UnexpectedToken(c.to_string())),
            },
        }
    }

    debug!("Tokenized '{}' into {} token(s)", text, tokens.len());
    Ok(tokens)
}
