use nom::{IResult, Parser};

// Lexeme parsers return `Option<T>`: `Some` for a token, `None` for input
// that is consumed without producing anything.

pub(super) fn emit<I, O, E, F, T>(
    mut parser: F,
    build: fn() -> T,
) -> impl FnMut(I) -> IResult<I, Option<T>, E>
where
    F: Parser<I, O, E>,
{
    move |input: I| {
        let (input, _) = parser.parse(input)?;
        Ok((input, Some(build())))
    }
}

pub(super) fn skip<I, O, E, F, T>(mut parser: F) -> impl FnMut(I) -> IResult<I, Option<T>, E>
where
    F: Parser<I, O, E>,
{
    move |input: I| {
        let (input, _) = parser.parse(input)?;
        Ok((input, None))
    }
}
