// src/integer_math/perfect_square.rs

use num::{BigInt, One, Signed, Zero};

pub struct PerfectSquare;

impl PerfectSquare {
    /// Returns true iff n is the square of an integer.
    ///
    /// Binary search for x with x^2 <= n < (x+1)^2, narrowing [x, y] while
    /// x + 1 < y on the midpoint-squared comparison. Negative values are
    /// never squares; zero is.
    pub fn is_square(n: &BigInt) -> bool {
        if n.is_negative() {
            return false;
        }
        if n.is_zero() {
            return true;
        }

        let mut x = BigInt::one();
        let mut y = n.clone();
        while &x + 1 < y {
            let mid: BigInt = (&x + &y) >> 1;
            if &mid * &mid < *n {
                x = mid;
            } else {
                y = mid;
            }
        }

        let x_plus_one = &x + 1;
        *n == &x * &x || *n == &x_plus_one * &x_plus_one
    }
}
