//! Arithmetic helpers.

use std::ops::Add;

/// Base addend used alongside [`add`].
pub const BASE_VALUE: i64 = 20;

/// Sum of `a` and `b` under the type's own `Add`.
pub fn add<T: Add<Output = T>>(a: T, b: T) -> T { a + b }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_base_value() {
        assert_eq!(add(1, BASE_VALUE), 21);
    }

    #[test]
    fn test_add_floats() {
        assert_eq!(add(0.5_f64, 1.25), 1.75);
    }

    #[test]
    fn test_add_negative() {
        assert_eq!(add(-BASE_VALUE, BASE_VALUE), 0);
    }
}
