// tests/common/mod.rs
//
// Reference prime generators for cross-checking the predicate. These are
// test plumbing: the library itself never sieves.

/// Plain sieve of Eratosthenes: primality flags for [0, limit).
pub fn sieve(limit: usize) -> Vec<bool> {
    let mut flags = vec![true; limit.max(2)];
    flags[0] = false;
    flags[1] = false;

    let mut p = 2;
    while p * p < flags.len() {
        if flags[p] {
            let mut multiple = p * p;
            while multiple < flags.len() {
                flags[multiple] = false;
                multiple += p;
            }
        }
        p += 1;
    }

    flags.truncate(limit);
    flags
}

/// Primality flags for [low, low + width) via a segmented sieve.
///
/// Base primes are taken up to sqrt(low + width), so windows near 10^15
/// still fit comfortably in u64.
#[allow(dead_code)]
pub fn segmented_sieve(low: u64, width: usize) -> Vec<bool> {
    let high = low + width as u64;
    let bound = (high as f64).sqrt() as u64 + 2;
    let base = sieve(bound as usize + 1);

    let mut flags = vec![true; width];
    for (p, &p_is_prime) in base.iter().enumerate().skip(2) {
        if !p_is_prime {
            continue;
        }
        let p = p as u64;
        let mut multiple = low.div_ceil(p) * p;
        if multiple < p * p {
            multiple = p * p;
        }
        while multiple < high {
            flags[(multiple - low) as usize] = false;
            multiple += p;
        }
    }

    // 0 and 1 are not prime, but no base prime strikes them out.
    for value in 0..2u64 {
        if value >= low && value < high {
            flags[(value - low) as usize] = false;
        }
    }

    flags
}
