/// The numeric capability the evaluator is generic over.
///
/// Operations consume their operands and return a new value; nothing is
/// modified in place. Implementations are free to choose their own precision
/// and rounding; the evaluator only ever calls these five methods.
pub trait Decimal: Sized {
    type Error: std::error::Error + 'static;

    /// Builds a value from decimal literal text such as `"0.1"` or `"-1"`.
    ///
    /// The text is passed through exactly as it appeared in the expression,
    /// so malformed literals like `"1.2.3"` end up here too.
    fn from_literal(literal: &str) -> Result<Self, Self::Error>;

    fn add(self, rhs: Self) -> Self;

    fn subtract(self, rhs: Self) -> Self;

    fn multiply(self, rhs: Self) -> Self;

    fn divide(self, rhs: Self) -> Result<Self, Self::Error>;
}
