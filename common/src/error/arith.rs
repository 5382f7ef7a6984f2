use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    // Factorial is only defined for non-negative input
    #[error("Invalid argument: factorial is undefined for negative input {0}")]
    InvalidArgument(i64),

    // Result does not fit the requested integer width
    #[error("Integer overflow: {n}! does not fit in {bits} bits")]
    Overflow { n: i64, bits: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ArithmeticError::InvalidArgument(-3).to_string(),
            "Invalid argument: factorial is undefined for negative input -3"
        );
        assert_eq!(
            ArithmeticError::Overflow { n: 21, bits: 64 }.to_string(),
            "Integer overflow: 21! does not fit in 64 bits"
        );
    }
}
