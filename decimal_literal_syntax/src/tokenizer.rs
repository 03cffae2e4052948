use crate::helpers::*;
use crate::token::Token;
use log::trace;
use nom::{
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{anychar, char, one_of},
    combinator::map,
    IResult,
};
use std::iter::FusedIterator;
use std::marker::PhantomData;

fn is_numeric_literal_character(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

// The shape of the literal is not checked here: "1.2.3" and "." are both
// numeric literals as far as the tokenizer cares. The numeric backend decides
// whether they mean anything.
fn numeric_literal<V>(i: &str) -> IResult<&str, Option<Token<V>>> {
    map(take_while1(is_numeric_literal_character), |s: &str| {
        Some(Token::Number(s.to_string()))
    })(i)
}

fn unrecognized<V>(i: &str) -> IResult<&str, Option<Token<V>>> {
    map(anychar, |c| {
        trace!("skipping unrecognized character {:?}", c);
        None
    })(i)
}

fn lexeme<V>(i: &str) -> IResult<&str, Option<Token<V>>> {
    use Token::*;
    alt((
        numeric_literal::<V>,
        skip(one_of(" \t\n\r")),
        emit(char('('), || LParen),
        emit(char(')'), || RParen),
        emit(char('*'), || Mul),
        emit(char('+'), || Plus),
        emit(char('-'), || Minus),
        emit(char('/'), || Div),
        unrecognized::<V>,
    ))(i)
}

#[derive(Debug, Clone)]
pub struct Tokenizer<'a, V> {
    remaining: &'a str,
    value: PhantomData<fn() -> V>,
}

impl<'a, V> Iterator for Tokenizer<'a, V> {
    type Item = Token<V>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.remaining.is_empty() {
            // `unrecognized` accepts any character, so this only fails on
            // empty input.
            let Ok((remaining, token)) = lexeme(self.remaining) else {
                break;
            };
            self.remaining = remaining;
            if token.is_some() {
                return token;
            }
        }
        self.remaining = "";
        None
    }
}

impl<'a, V> FusedIterator for Tokenizer<'a, V> {}

pub fn tokenize<V>(source: &str) -> Tokenizer<'_, V> {
    Tokenizer {
        remaining: source,
        value: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test(input: &str) -> String {
        tokenize::<()>(input)
            .map(|t| format!("{}", t))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn operators() {
        k9::snapshot!(test("1+2"), "1 + 2");
        k9::snapshot!(test("(1*2)/3-4"), "( 1 * 2 ) / 3 - 4");
        k9::snapshot!(test("--5"), "- - 5");
    }

    #[test]
    fn whitespace() {
        k9::snapshot!(test(" 1 + 2 "), "1 + 2");
        k9::snapshot!(test("1\t+\n2\r\n"), "1 + 2");
        k9::snapshot!(test("12 34"), "12 34");
        assert_eq!(tokenize::<()>("  \t\n").next(), None);
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(
            tokenize::<()>("0.1+20").collect::<Vec<_>>(),
            vec![
                Token::Number("0.1".to_string()),
                Token::Plus,
                Token::Number("20".to_string()),
            ]
        );
        k9::snapshot!(test("1.2.3"), "1.2.3");
        k9::snapshot!(test("."), ".");
        k9::snapshot!(test(".5*5."), ".5 * 5.");
    }

    #[test]
    fn literal_at_end_of_input() {
        assert_eq!(
            tokenize::<()>("(7)8").last(),
            Some(Token::Number("8".to_string()))
        );
    }

    #[test]
    fn unrecognized_characters_are_dropped() {
        k9::snapshot!(test("1 % 2"), "1 2");
        k9::snapshot!(test("1e5"), "1 5");
        k9::snapshot!(test("x = 1,000"), "1 000");
        k9::snapshot!(test("€2 × 3"), "2 3");
    }

    #[test]
    fn never_produces_sentinels() {
        assert!(tokenize::<()>("(1 + 2) * 3 / -4").all(|t| !t.is_end()));
    }

    #[test]
    fn exhausted_stays_exhausted() {
        let mut tokens = tokenize::<()>("1");
        assert_eq!(tokens.next(), Some(Token::Number("1".to_string())));
        assert_eq!(tokens.next(), None);
        assert_eq!(tokens.next(), None);
    }
}
