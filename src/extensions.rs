//! Extensions
//!
//! `ExampleProtocol` adopted by built-in numeric types, and an extension trait
//! that adds `absolute_value` to `f64`.

use crate::protocols::ExampleProtocol;

impl ExampleProtocol for i32 {
    fn simple_description(&self) -> String {
        format!("The number {}", self)
    }

    // Wraps past i32::MAX instead of panicking.
    fn adjust(&mut self) {
        *self = self.wrapping_add(42);
    }
}

impl ExampleProtocol for f64 {
    // `{:?}` keeps the trailing `.0` on whole numbers. Exponents and NaN
    // print as `1e16` and `NaN`.
    fn simple_description(&self) -> String {
        format!("The number {:?}", self)
    }

    fn adjust(&mut self) {
        *self = self.round();
    }
}

pub trait AbsoluteValue {
    fn absolute_value(&self) -> Self;
}

impl AbsoluteValue for f64 {
    fn absolute_value(&self) -> f64 {
        self.abs()
    }
}
