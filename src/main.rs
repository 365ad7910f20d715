// src/main.rs

use bpsw::config::ScanConfig;
use bpsw::core::cancellation_token::CancellationToken;
use bpsw::core::scan::ScanRange;
use bpsw::primality::baillie_psw::BailliePsw;
use env_logger::Env;
use log::info;
use num::BigInt;
use std::str::FromStr;

fn main() {
    let config = ScanConfig::load().unwrap_or_else(|_| ScanConfig::default());

    // Initialize the logger
    let env = Env::default()
        .filter_or("BPSW_LOG_LEVEL", config.log_level.clone())
        .write_style_or("BPSW_LOG_STYLE", "always");
    env_logger::Builder::from_env(env).init();

    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .expect("failed to size the rayon pool");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("usage: bpsw NUMBER [NUMBER ...]");
        eprintln!("       bpsw scan START STOP");
        std::process::exit(2);
    }

    if args[0] == "scan" {
        if args.len() != 3 {
            eprintln!("usage: bpsw scan START STOP");
            std::process::exit(2);
        }
        let start = parse_integer(&args[1]);
        let stop = parse_integer(&args[2]);

        let token = CancellationToken::new();
        let handler_token = token.clone();
        ctrlc::set_handler(move || handler_token.cancel())
            .expect("failed to install the Ctrl-C handler");

        let threads = config.threads.unwrap_or_else(num_cpus::get);
        info!(
            "Scanning [{}, {}) for probable primes on {} threads",
            start, stop, threads
        );
        let primes = ScanRange::probable_primes_in_range(&start, &stop, config.chunk_size, &token);
        for prime in &primes {
            println!("{}", prime);
        }
        info!("Found {} probable primes", primes.len());
    } else {
        for arg in &args {
            let n = parse_integer(arg);
            println!("{} {:?}", n, BailliePsw::classify(&n));
        }
    }
}

fn parse_integer(text: &str) -> BigInt {
    BigInt::from_str(text).unwrap_or_else(|_| {
        eprintln!("not a decimal integer: {}", text);
        std::process::exit(2);
    })
}
