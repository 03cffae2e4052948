use crate::decimal::Decimal;
use decimal_literal_syntax::{pad_end_with, Endless, Lookahead, Token};
use log::{debug, trace};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum Error<E> {
    #[error("expected closing parenthesis, found {0}")]
    ExpectedCloseParen(String),
    #[error("expected number, value, or parenthesis, found {0}")]
    ExpectedPrimary(String),
    #[error("unexpected token after expression: {0}")]
    TrailingInput(String),
    #[error("template has {fragments} text fragments but {values} values")]
    TemplateArity { fragments: usize, values: usize },
    #[error("numeric error: {0}")]
    Numeric(#[source] E),
}

// AddSub   := MulDiv (('+' | '-') AddSub)?
// MulDiv   := Unary  (('*' | '/') MulDiv)?
// Unary    := ('+' | '-')* Primary
// Primary  := Number | Value | '(' AddSub ')'
//
// The binary rules recurse into themselves for the right operand instead of
// looping, so chains of the same precedence group to the right:
// 1 - 2 - 3 is 1 - (2 - 3).
struct Evaluator<S: Endless> {
    tokens: Lookahead<S>,
}

impl<D, S> Evaluator<S>
where
    D: Decimal,
    S: Endless<Item = Token<D>>,
{
    fn add_sub(&mut self) -> Result<D, Error<D::Error>> {
        let lhs = self.mul_div()?;
        match self.tokens.peek() {
            Token::Plus => {
                self.tokens.advance();
                Ok(lhs.add(self.add_sub()?))
            }
            Token::Minus => {
                self.tokens.advance();
                Ok(lhs.subtract(self.add_sub()?))
            }
            _ => Ok(lhs),
        }
    }

    fn mul_div(&mut self) -> Result<D, Error<D::Error>> {
        let lhs = self.unary()?;
        match self.tokens.peek() {
            Token::Mul => {
                self.tokens.advance();
                Ok(lhs.multiply(self.mul_div()?))
            }
            Token::Div => {
                self.tokens.advance();
                lhs.divide(self.mul_div()?).map_err(Error::Numeric)
            }
            _ => Ok(lhs),
        }
    }

    fn unary(&mut self) -> Result<D, Error<D::Error>> {
        match self.tokens.peek() {
            Token::Plus => {
                self.tokens.advance();
                self.unary()
            }
            Token::Minus => {
                self.tokens.advance();
                let operand = self.unary()?;
                let negative_one = D::from_literal("-1").map_err(Error::Numeric)?;
                Ok(operand.multiply(negative_one))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<D, Error<D::Error>> {
        let token = self.tokens.advance();
        trace!("primary {}", token);
        match token {
            Token::Number(literal) => D::from_literal(&literal).map_err(Error::Numeric),
            Token::Value(value) => Ok(value),
            Token::LParen => {
                let inner = self.add_sub()?;
                match self.tokens.advance() {
                    Token::RParen => Ok(inner),
                    token => Err(Error::ExpectedCloseParen(token.to_string())),
                }
            }
            token => Err(Error::ExpectedPrimary(token.to_string())),
        }
    }
}

/// Evaluates one complete expression.
///
/// The whole token sequence must form a single expression: anything left over
/// after it is an error, as is running out of tokens in the middle of one.
pub fn evaluate<D, I>(tokens: I) -> Result<D, Error<D::Error>>
where
    D: Decimal,
    I: IntoIterator<Item = Token<D>>,
{
    let mut evaluator = Evaluator {
        tokens: Lookahead::new(pad_end_with(tokens, || Token::EndOfInput)),
    };
    let result = evaluator.add_sub()?;
    match evaluator.tokens.advance() {
        Token::EndOfInput => {
            debug!("evaluated expression");
            Ok(result)
        }
        token => Err(Error::TrailingInput(token.to_string())),
    }
}
