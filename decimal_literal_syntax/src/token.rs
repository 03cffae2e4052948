use std::fmt;

// `V` is whatever numeric type the caller evaluates with. The tokenizer never
// produces `Value` or `EndOfInput`; those come from spliced operands and from
// padding the stream.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Token<V> {
    Plus,
    Minus,
    Mul,
    Div,
    LParen,
    RParen,
    Number(String),
    Value(V),
    EndOfInput,
}

impl<V> Token<V> {
    pub fn is_end(&self) -> bool {
        matches!(self, Token::EndOfInput)
    }
}

impl<V> fmt::Display for Token<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Token::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Mul => write!(f, "*"),
            Div => write!(f, "/"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Number(s) => write!(f, "{}", s),
            Value(_) => write!(f, "value"),
            EndOfInput => write!(f, "end of input"),
        }
    }
}
