// src/primality/lucas.rs

use log::trace;
use num::{BigInt, Integer, One, Signed, Zero};

use crate::integer_math::jacobi::Jacobi;
use crate::integer_math::perfect_square::PerfectSquare;

/// Outcome of the discriminant search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discriminant {
    /// A discriminant D with Jacobi(D, n) = -1. P = 1 and Q = (1 - D)/4
    /// follow from it.
    Found(BigInt),
    /// n is a perfect square, so Jacobi(D, n) can never be -1 and the search
    /// would run forever. A square above 1 is composite outright.
    PerfectSquare,
    /// A probe value shares a factor with n (Jacobi symbol 0), which exposes
    /// n as composite without running the sequence test.
    SharedFactor(BigInt),
}

/// Lucas sequence parameters (D, P, Q) with P = 1 and Q = (1 - D)/4.
///
/// D is selected so that D = 1 mod 4, making Q exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LucasParameters {
    pub d: BigInt,
    pub p: BigInt,
    pub q: BigInt,
}

impl LucasParameters {
    pub fn from_discriminant(d: BigInt) -> Self {
        debug_assert!(
            ((BigInt::one() - &d) % BigInt::from(4)).is_zero(),
            "discriminant must be 1 mod 4, got {}",
            d
        );
        let q = (BigInt::one() - &d) / 4;
        LucasParameters {
            d,
            p: BigInt::one(),
            q,
        }
    }
}

pub struct Lucas;

impl Lucas {
    /// Selects a discriminant D with Jacobi(D, n) = -1 for an odd n with no
    /// prime factor below 103.
    ///
    /// Probes D = 5, -7, 9, -11, 13, ... (alternating sign, magnitude
    /// growing by 2) until the symbol is no longer positive. When the probe
    /// reaches -15, n is additionally checked for being a perfect square:
    /// squares keep every remaining symbol at 0 or 1, so the search must
    /// bail out rather than loop forever. The probe order is fixed: the
    /// published termination results assume exactly this sequence.
    pub fn choose_discriminant(n: &BigInt) -> Discriminant {
        let mut d = BigInt::from(5);

        loop {
            match Jacobi::symbol(&d, n) {
                -1 => {
                    trace!("discriminant {} selected for {}", d, n);
                    return Discriminant::Found(d);
                }
                0 => return Discriminant::SharedFactor(d),
                _ => {}
            }

            // 5 -> -7 -> 9 -> -11 -> ...
            d = if d.is_positive() {
                -(d + BigInt::from(2))
            } else {
                -(d - BigInt::from(2))
            };

            if d == BigInt::from(-15) && PerfectSquare::is_square(n) {
                trace!("{} is a perfect square; abandoning discriminant search", n);
                return Discriminant::PerfectSquare;
            }
        }
    }

    /// Lucas sequence terms (U_k mod n, V_k mod n) for odd n.
    ///
    /// Binary ladder over the bits of k, most significant first with the
    /// leading 1 consumed by the initial state (U_1, V_1) = (1, P). Each bit
    /// doubles the subscript; a set bit additionally advances it by one.
    /// Cost is O(log k) modular multiplications of n-sized operands, which
    /// makes this the hot path of the whole crate.
    pub fn terms(k: &BigInt, n: &BigInt, p: &BigInt, d: &BigInt) -> (BigInt, BigInt) {
        debug_assert!(n.is_odd(), "modulus must be odd, got {}", n);
        debug_assert!(!k.is_zero(), "subscript must be positive");

        let mut u = BigInt::one();
        let mut v = p.clone();

        for i in (0..k.bits() - 1).rev() {
            // (U, V) at subscript j becomes subscript 2j.
            let doubled_u = (&u * &v).mod_floor(n);
            let doubled_v = Self::halve_mod(&(&v * &v + d * &u * &u), n);
            u = doubled_u;
            v = doubled_v;

            if k.bit(i) {
                // Advance 2j to 2j + 1.
                let advanced_u = Self::halve_mod(&(p * &u + &v), n);
                let advanced_v = Self::halve_mod(&(d * &u + p * &v), n);
                u = advanced_u;
                v = advanced_v;
            }
        }

        (u, v)
    }

    /// Standard Lucas probable prime test: n divides U_{n+1}.
    ///
    /// Requires n odd. Cheaper than the strong variant, and the stage the
    /// orchestrator runs.
    pub fn is_probable_prime(n: &BigInt, params: &LucasParameters) -> bool {
        debug_assert!(n.is_odd(), "candidate must be odd, got {}", n);

        let k = n + 1;
        let (u, _v) = Self::terms(&k, n, &params.p, &params.d);
        u.is_zero()
    }

    /// Strong Lucas probable prime test.
    ///
    /// Writes n + 1 = 2^s * d' with d' odd and accepts when U_{d'} = 0 or
    /// when V at some doubling step reaches 0. Admits strictly fewer
    /// composites than the standard variant at the price of extra modular
    /// multiplications; kept as an independently usable stage.
    pub fn is_strong_probable_prime(n: &BigInt, params: &LucasParameters) -> bool {
        debug_assert!(n.is_odd(), "candidate must be odd, got {}", n);

        let two = BigInt::from(2);

        let mut k = n + BigInt::one();
        let mut s = 0u64;
        while k.is_even() {
            k >>= 1;
            s += 1;
        }

        let (u, v) = Self::terms(&k, n, &params.p, &params.d);
        if u.is_zero() {
            return true;
        }

        let mut v = v;
        let mut q_power = params.q.mod_floor(n).modpow(&k, n);
        for _ in 0..s {
            if v.is_zero() {
                return true;
            }
            v = (&v * &v - &q_power * BigInt::from(2)).mod_floor(n);
            q_power = q_power.modpow(&two, n);
        }

        false
    }

    /// Halves x modulo odd n without a modular inverse: odd x picks up one
    /// copy of n first to become even.
    fn halve_mod(x: &BigInt, n: &BigInt) -> BigInt {
        let x = x.mod_floor(n);
        if x.is_odd() {
            (x + n) >> 1
        } else {
            x >> 1
        }
    }
}
