//! Exact decimal arithmetic expressions.
//!
//! An expression like `"0.1 + 0.2 * (3 - 1)"` is tokenized, then evaluated
//! over any type implementing [`Decimal`], so the numeric backend alone
//! decides precision and rounding. Operands that are already computed can be
//! spliced between text fragments with [`evaluate_template`] or the
//! [`decimal!`] macro.
//!
//! Chains of the same precedence group to the right: `1 - 2 - 3` is
//! `1 - (2 - 3)`.

pub mod decimal;
pub mod eval;
pub mod rational;
pub mod template;

pub use decimal::Decimal;
pub use decimal_literal_syntax::Token;
pub use eval::{evaluate, Error};
pub use rational::{LiteralError, RugDecimal};
pub use template::{evaluate_format, evaluate_str, evaluate_template};
