// src/integer_math/small_primes.rs

use lazy_static::lazy_static;
use num::BigInt;

/// Every prime through 101.
///
/// Dividing a candidate by this table up front serves two purposes: it
/// disposes of most composites cheaply, and it guarantees the later
/// discriminant search cannot stall on a candidate with a tiny factor.
pub const SMALL_PRIMES: [u32; 26] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101,
];

lazy_static! {
    /// The table above as ready-made `BigInt`s for the trial-division stage.
    pub static ref SMALL_PRIME_TABLE: Vec<BigInt> =
        SMALL_PRIMES.iter().map(|&p| BigInt::from(p)).collect();
}
