mod helpers;
pub mod stream;
pub mod token;
pub mod tokenizer;

pub use stream::{interleave, pad_end, pad_end_with, Endless, Interleave, Lookahead, PadEnd};
pub use token::Token;
pub use tokenizer::{tokenize, Tokenizer};
