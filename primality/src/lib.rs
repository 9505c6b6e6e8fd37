//! Trial-division primality testing
//!
//! The core of this crate is a single total predicate, [is_prime], which answers whether a signed
//! integer is prime. The same check is available as a method on every primitive integer type via
//! [IsPrime], and as a stateless service object via [PrimalityChecker].
//!
//! ```rust
//! use primality::{IsPrime, PrimalityChecker, is_prime};
//!
//! assert!(is_prime(29));
//! assert!(!is_prime(-5));
//! assert!(97u8.is_prime());
//! assert_eq!(PrimalityChecker.check(4).to_string(), "4 is not prime");
//! ```
//!
//! The `is-prime` binary in this package is a thin command-line driver over the same predicate,
//! which can also read the integers to check from a TOML [Inputs] file.

mod checker;
mod inputs;

pub use self::{
    checker::{IsPrime, PrimalityChecker, Verdict, is_prime},
    inputs::{Inputs, InputsError},
};
