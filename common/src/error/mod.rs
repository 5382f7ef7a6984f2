mod arith;

pub use arith::ArithmeticError;
