//! Factorial of a non-negative integer.
//!
//! Results are arbitrary precision: `21!` already exceeds `u64`. The product
//! is accumulated iteratively so memory stays flat and deep inputs cannot
//! overflow the stack.

use num_bigint::BigUint;
use serde_json::Value;

use crate::error::FactorialError;
use crate::json_type_name;

/// Computes `n!`.
///
/// Returns [`FactorialError::Negative`] for `n < 0`. `0!` and `1!` are 1.
pub fn factorial(n: i64) -> Result<BigUint, FactorialError> {
    let n = u64::try_from(n).map_err(|_| FactorialError::Negative(n))?;
    Ok(factorial_unsigned(n))
}

/// Computes the factorial of a dynamically typed value.
///
/// Only integral JSON numbers are accepted. Floats (including `5.0`),
/// strings, arrays, objects, `null` and booleans are rejected with
/// [`FactorialError::NotAnInteger`].
pub fn factorial_of(value: &Value) -> Result<BigUint, FactorialError> {
    let Value::Number(number) = value else {
        return Err(FactorialError::NotAnInteger {
            found: json_type_name(value),
        });
    };
    if let Some(n) = number.as_i64() {
        return factorial(n);
    }
    match number.as_u64() {
        Some(n) => Ok(factorial_unsigned(n)),
        None => Err(FactorialError::NotAnInteger { found: "float" }),
    }
}

fn factorial_unsigned(n: u64) -> BigUint {
    (2..=n).fold(BigUint::from(1u32), |acc, i| acc * i)
}
