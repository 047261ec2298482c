use super::{lex::is_int_literal, Error};

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    Integer(i64),
    Word(String),
}

impl Token {
    /// Numeric-looking words that overflow i64 are an error, never a name.
    pub fn classify(word: &str) -> Result<Token, Error> {
        if is_int_literal(word) {
            match word.parse::<i64>() {
                Ok(n) => Ok(Token::Integer(n)),
                Err(_) => Err(error!(OutOfRange; word)),
            }
        } else {
            Ok(Token::Word(word.to_string()))
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Integer(n) => write!(f, "{}", n),
            Token::Word(s) => write!(f, "{}", s),
        }
    }
}
