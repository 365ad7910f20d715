// src/integer_math/jacobi.rs

use num::{BigInt, Integer, One, Zero};

pub struct Jacobi;

impl Jacobi {
    /// Jacobi symbol (a/n) for odd n >= 1: returns 1, -1, or 0 when gcd(a, n) > 1.
    ///
    /// Iterative reduction by quadratic reciprocity: strip factors of 2 from a
    /// (the sign flips when n mod 8 is 3 or 5), swap a and n (the sign flips
    /// when both are 3 mod 4), reduce a mod n, repeat until a reaches 0.
    pub fn symbol(a: &BigInt, n: &BigInt) -> i32 {
        if n < &BigInt::one() || n.is_even() {
            panic!("Parameter 'n' must be an odd positive integer, but you have supplied: {}", n);
        }

        let mut a = a.mod_floor(n);
        let mut n = n.clone();
        let mut result = 1;

        while !a.is_zero() {
            while a.is_even() {
                a >>= 1;
                let n_mod_8 = &n % 8;
                if n_mod_8 == BigInt::from(3) || n_mod_8 == BigInt::from(5) {
                    result = -result;
                }
            }

            std::mem::swap(&mut a, &mut n);

            if &a % 4 == BigInt::from(3) && &n % 4 == BigInt::from(3) {
                result = -result;
            }
            a = a.mod_floor(&n);
        }

        // Each cycle strictly shrinks n, so this is reached for every input.
        if n.is_one() {
            result
        } else {
            0
        }
    }
}
