//! The closed set of reduction operations.

use std::fmt;

use crate::element::Element;
use crate::error::{ReduceError, ReduceResult};

/// Binary operation folded over a vector by every combine kernel.
///
/// Each operation carries an identity element (0 for `Add`, 1 for `Mul`) and
/// a combining rule that all kernel variants apply identically for a given
/// element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombineOp {
    Add,
    Mul,
}

impl CombineOp {
    pub const ALL: [CombineOp; 2] = [CombineOp::Add, CombineOp::Mul];

    /// The value that leaves the operation's result unchanged.
    #[inline(always)]
    pub fn identity<T: Element>(self) -> T {
        match self {
            CombineOp::Add => T::zero(),
            CombineOp::Mul => T::one(),
        }
    }

    /// Applies the combining rule.
    #[inline(always)]
    pub fn apply<T: Element>(self, a: T, b: T) -> T {
        match self {
            CombineOp::Add => a.add(b),
            CombineOp::Mul => a.mul(b),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CombineOp::Add => '+',
            CombineOp::Mul => '*',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CombineOp::Add => "add",
            CombineOp::Mul => "mul",
        }
    }

    /// Resolves an operation from its symbol. Anything outside `{'+', '*'}`
    /// is a configuration error, never a silent default.
    pub fn from_symbol(symbol: char) -> ReduceResult<Self> {
        match symbol {
            '+' => Ok(CombineOp::Add),
            '*' => Ok(CombineOp::Mul),
            other => Err(ReduceError::UnknownOperation(other)),
        }
    }
}

impl fmt::Display for CombineOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReduceError;

    #[test]
    fn test_identity_values() {
        assert_eq!(CombineOp::Add.identity::<i32>(), 0);
        assert_eq!(CombineOp::Mul.identity::<i32>(), 1);
        assert_eq!(CombineOp::Add.identity::<f32>(), 0.0);
        assert_eq!(CombineOp::Mul.identity::<f32>(), 1.0);
    }

    #[test]
    fn test_apply() {
        assert_eq!(CombineOp::Add.apply(3, 4), 7);
        assert_eq!(CombineOp::Mul.apply(3, 4), 12);
        assert_eq!(CombineOp::Add.apply(1.5_f64, 0.25), 1.75);
        assert_eq!(CombineOp::Mul.apply(1.5_f64, 2.0), 3.0);
    }

    #[test]
    fn test_from_symbol() {
        assert_eq!(CombineOp::from_symbol('+').unwrap(), CombineOp::Add);
        assert_eq!(CombineOp::from_symbol('*').unwrap(), CombineOp::Mul);
        assert!(matches!(
            CombineOp::from_symbol('-'),
            Err(ReduceError::UnknownOperation('-'))
        ));
    }

    #[test]
    fn test_labels_round_trip() {
        for op in CombineOp::ALL {
            assert_eq!(CombineOp::from_symbol(op.symbol()).unwrap(), op);
        }
    }
}
