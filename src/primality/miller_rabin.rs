// src/primality/miller_rabin.rs

use num::{BigInt, Integer, One};

pub struct MillerRabin;

impl MillerRabin {
    /// Strong probable prime test to base 2.
    ///
    /// This is the Miller-Rabin stage of the Baillie-PSW pipeline. A false
    /// return proves n composite; a true return makes n a base-2 strong
    /// probable prime.
    ///
    /// Precondition: n is odd and n > 1 (the caller has already disposed of
    /// even and trivial candidates).
    pub fn is_strong_probable_prime_base2(n: &BigInt) -> bool {
        Self::is_strong_probable_prime(n, &BigInt::from(2))
    }

    /// Strong probable prime test to an arbitrary base.
    ///
    /// Writes n - 1 = 2^s * d with d odd, computes base^d mod n, and then
    /// squares up to s - 1 times looking for n - 1. Exposed so callers can
    /// run the same per-base algorithm over a wider witness set than the
    /// single base the orchestrator uses.
    pub fn is_strong_probable_prime(n: &BigInt, base: &BigInt) -> bool {
        debug_assert!(n > &BigInt::one(), "candidate must exceed 1, got {}", n);
        debug_assert!(n.is_odd(), "candidate must be odd, got {}", n);

        let two = BigInt::from(2);
        let n_minus_one = n - BigInt::one();

        let mut d = n_minus_one.clone();
        let mut s = 0u64;
        while d.is_even() {
            d /= 2;
            s += 1;
        }

        let mut x = base.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            return true;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                return true;
            }
            if x.is_one() {
                // A nontrivial square root of 1 was passed on the way here.
                return false;
            }
        }

        false
    }

    /// Conjunction of the strong test over a set of witness bases.
    pub fn passes_bases(n: &BigInt, bases: &[u64]) -> bool {
        bases
            .iter()
            .all(|&base| Self::is_strong_probable_prime(n, &BigInt::from(base)))
    }
}
