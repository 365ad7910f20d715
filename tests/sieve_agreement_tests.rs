// tests/sieve_agreement_tests.rs

use bpsw::primality::baillie_psw::BailliePsw;
use env_logger::Env;
use num::BigInt;

mod common;

#[test]
fn test_agreement_with_sieve_to_twenty_thousand() {
    let flags = common::sieve(20_000);
    for (n, &expected) in flags.iter().enumerate() {
        assert_eq!(
            BailliePsw::is_probable_prime(&BigInt::from(n)),
            expected,
            "disagreement with the sieve at {}",
            n
        );
    }
}

#[test]
fn test_sieve_primes_are_accepted() {
    let flags = common::sieve(50_000);
    for (n, &is_prime) in flags.iter().enumerate() {
        if is_prime {
            assert!(
                BailliePsw::is_probable_prime(&BigInt::from(n)),
                "prime {} rejected",
                n
            );
        }
    }
}

#[test]
fn test_agreement_with_segmented_sieve_small_windows() {
    for exp in 7..=9u32 {
        let low = 10u64.pow(exp);
        let width = 2_000;
        let flags = common::segmented_sieve(low, width);
        for (offset, &expected) in flags.iter().enumerate() {
            let n = low + offset as u64;
            assert_eq!(
                BailliePsw::is_probable_prime(&BigInt::from(n)),
                expected,
                "disagreement with the segmented sieve at {}",
                n
            );
        }
    }
}

#[test]
#[ignore] // exhaustive ground truth to one million; several minutes
fn test_agreement_with_sieve_to_one_million() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();

    let flags = common::sieve(1_000_000);
    for (n, &expected) in flags.iter().enumerate() {
        assert_eq!(
            BailliePsw::is_probable_prime(&BigInt::from(n)),
            expected,
            "disagreement with the sieve at {}",
            n
        );
    }
}

#[test]
#[ignore] // million-wide windows at 10^7 through 10^15; hours
fn test_agreement_with_segmented_sieve_full_windows() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();

    for exp in 7..=15u32 {
        let low = 10u64.pow(exp);
        let width = 1_000_000;
        let flags = common::segmented_sieve(low, width);
        for (offset, &expected) in flags.iter().enumerate() {
            let n = low + offset as u64;
            assert_eq!(
                BailliePsw::is_probable_prime(&BigInt::from(n)),
                expected,
                "disagreement with the segmented sieve at {}",
                n
            );
        }
        log::info!("window at 10^{} agrees", exp);
    }
}
