use crate::decimal::Decimal;
use crate::eval::{evaluate, Error};
use decimal_literal_syntax::{interleave, tokenize, Token};

const PLACEHOLDER: &str = "{}";

pub fn evaluate_str<D: Decimal>(source: &str) -> Result<D, Error<D::Error>> {
    evaluate(tokenize(source))
}

/// Evaluates text fragments with pre-computed values spliced between them.
///
/// `fragments[0] values[0] fragments[1] values[1] ... fragments[n]`, so there
/// must be exactly one more fragment than there are values. Each value acts
/// like a parenthesized operand: it is never re-parsed.
pub fn evaluate_template<D: Decimal>(
    fragments: &[&str],
    values: Vec<D>,
) -> Result<D, Error<D::Error>> {
    if fragments.len() != values.len() + 1 {
        return Err(Error::TemplateArity {
            fragments: fragments.len(),
            values: values.len(),
        });
    }
    let parts = fragments.iter().map(|fragment| tokenize(fragment));
    let operands = values.into_iter().map(Token::Value);
    evaluate(interleave(parts, operands))
}

/// Like [`evaluate_template`], with the fragments separated by `{}`
/// placeholders in a single string.
pub fn evaluate_format<D: Decimal>(
    template: &str,
    values: Vec<D>,
) -> Result<D, Error<D::Error>> {
    let fragments = template.split(PLACEHOLDER).collect::<Vec<_>>();
    evaluate_template(&fragments, values)
}

/// Evaluates a `{}` template with the given values.
///
/// ```ignore
/// let tax: RugDecimal = decimal!("0.2")?;
/// let total: RugDecimal = decimal!("19.99 * (1 + {})", tax)?;
/// ```
#[macro_export]
macro_rules! decimal {
    ($template:expr $(, $value:expr)* $(,)?) => {
        $crate::evaluate_format($template, vec![$($value),*])
    };
}
