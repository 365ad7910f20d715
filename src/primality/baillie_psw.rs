// src/primality/baillie_psw.rs

use log::debug;
use num::{BigInt, One, Zero};
use serde::{Deserialize, Serialize};

use crate::integer_math::small_primes::SMALL_PRIME_TABLE;
use crate::primality::lucas::{Discriminant, Lucas, LucasParameters};
use crate::primality::miller_rabin::MillerRabin;

/// How a candidate left the pipeline. Produced once per call, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// n < 2, including negative inputs.
    CompositeTrivial,
    /// A prime at most 101 divides n (and n is not that prime).
    CompositeByTrialDivision,
    /// n failed the base-2 strong probable prime test.
    CompositeByMillerRabin,
    /// The discriminant search terminated without a usable D: n is a
    /// perfect square, or a probe exposed a shared factor.
    CompositeByDegenerateJacobi,
    /// n failed the Lucas probable prime test.
    CompositeByLucas,
    /// Every stage passed. No composite with this property is known.
    ProbablePrime,
}

impl Classification {
    pub fn is_probable_prime(&self) -> bool {
        matches!(self, Classification::ProbablePrime)
    }
}

pub struct BailliePsw;

impl BailliePsw {
    /// The Baillie-PSW probable prime predicate.
    ///
    /// Deterministic and total: negative inputs and 0/1 report false, and
    /// every call with the same n returns the same answer. A true result
    /// means no stage could prove n composite; no false positive is known
    /// and none is believed to exist.
    pub fn is_probable_prime(n: &BigInt) -> bool {
        Self::classify(n).is_probable_prime()
    }

    /// Runs the full pipeline and reports which stage settled the candidate.
    ///
    /// Stages run in a fixed order and short-circuit on the first proof of
    /// compositeness: trivial bounds, trial division by the primes through
    /// 101, the base-2 strong Miller-Rabin test, discriminant selection, and
    /// finally the standard Lucas probable prime test.
    pub fn classify(n: &BigInt) -> Classification {
        if n <= &BigInt::one() {
            return Classification::CompositeTrivial;
        }

        for p in SMALL_PRIME_TABLE.iter() {
            if (n % p).is_zero() {
                return if n == p {
                    Classification::ProbablePrime
                } else {
                    Classification::CompositeByTrialDivision
                };
            }
        }

        if !MillerRabin::is_strong_probable_prime_base2(n) {
            debug!("{} rejected by Miller-Rabin base 2", n);
            return Classification::CompositeByMillerRabin;
        }

        // Past this point n is odd with no prime factor at or below 101,
        // which the discriminant search depends on.
        let d = match Lucas::choose_discriminant(n) {
            Discriminant::Found(d) => d,
            Discriminant::PerfectSquare | Discriminant::SharedFactor(_) => {
                debug!("{} rejected by degenerate Jacobi symbol", n);
                return Classification::CompositeByDegenerateJacobi;
            }
        };

        let params = LucasParameters::from_discriminant(d);
        if Lucas::is_probable_prime(n, &params) {
            Classification::ProbablePrime
        } else {
            debug!("{} rejected by the Lucas stage", n);
            Classification::CompositeByLucas
        }
    }
}
