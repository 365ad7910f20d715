// src/core/scan.rs

use log::{debug, info};
use num::BigInt;
use rayon::prelude::*;

use crate::core::cancellation_token::CancellationToken;
use crate::primality::baillie_psw::{BailliePsw, Classification};

pub struct ScanRange;

impl ScanRange {
    /// Classifies every integer in [start, stop) in ascending order.
    ///
    /// The token is checked between candidates only; a cancelled scan
    /// returns the classifications gathered so far.
    pub fn classify_range(
        start: &BigInt,
        stop: &BigInt,
        token: &CancellationToken,
    ) -> Vec<(BigInt, Classification)> {
        let mut results = Vec::new();
        let mut candidate = start.clone();

        while &candidate < stop {
            if token.is_cancellation_requested() {
                info!("Scan cancelled at {}", candidate);
                break;
            }
            let classification = BailliePsw::classify(&candidate);
            results.push((candidate.clone(), classification));
            candidate += 1;
        }

        results
    }

    /// Collects the probable primes in [start, stop), fanning the candidates
    /// out over the rayon pool in fixed-size chunks.
    ///
    /// Candidates are independent and the predicate shares no mutable state,
    /// so chunks run with zero synchronization; output order stays ascending
    /// because chunk results are collected in order. Cancellation is honored
    /// at chunk granularity.
    pub fn probable_primes_in_range(
        start: &BigInt,
        stop: &BigInt,
        chunk_size: usize,
        token: &CancellationToken,
    ) -> Vec<BigInt> {
        let candidates = Self::candidates(start, stop);
        debug!(
            "Scanning {} candidates in chunks of {}",
            candidates.len(),
            chunk_size
        );

        candidates
            .par_chunks(chunk_size.max(1))
            .flat_map(|chunk| {
                if token.is_cancellation_requested() {
                    return Vec::new();
                }
                chunk
                    .iter()
                    .filter(|candidate| BailliePsw::is_probable_prime(candidate))
                    .cloned()
                    .collect()
            })
            .collect()
    }

    fn candidates(start: &BigInt, stop: &BigInt) -> Vec<BigInt> {
        let mut result = Vec::new();
        let mut current = start.clone();
        while &current < stop {
            result.push(current.clone());
            current += 1;
        }
        result
    }
}
