// src/primality/mod.rs

pub mod baillie_psw;
pub mod lucas;
pub mod miller_rabin;

// Re-export main types for convenience
pub use baillie_psw::{BailliePsw, Classification};
pub use lucas::{Discriminant, Lucas, LucasParameters};
pub use miller_rabin::MillerRabin;
