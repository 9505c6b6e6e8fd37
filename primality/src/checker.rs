use core::fmt;

/// Returns true if `n` is prime
///
/// Every integer has an answer: anything less than or equal to 1 (which includes all negative
/// numbers) is not prime. Otherwise, candidate divisors from 2 up to and including the integer
/// square root of `n` are tried in order, stopping at the first one that divides `n` evenly.
#[inline]
pub fn is_prime(n: i64) -> bool {
    IsPrime::is_prime(n)
}

/// Primality testing for primitive integer types
///
/// The check is performed in the width of the implementing type, so e.g. `u64::MAX.is_prime()`
/// and `i64::MAX.is_prime()` are both well-defined.
pub trait IsPrime: Copy {
    /// Returns true if `self` is prime
    fn is_prime(self) -> bool;
}

macro_rules! impl_is_prime {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IsPrime for $ty {
                fn is_prime(self) -> bool {
                    if self <= 1 {
                        return false;
                    }
                    // `divisor <= self / divisor` is `divisor * divisor <= self` without the
                    // multiplication, so the bound cannot overflow near `<$ty>::MAX`.
                    let mut divisor: $ty = 2;
                    while divisor <= self / divisor {
                        if self % divisor == 0 {
                            log::trace!(
                                target: "primality",
                                "{} is divisible by {}",
                                self,
                                divisor
                            );
                            return false;
                        }
                        divisor += 1;
                    }
                    true
                }
            }
        )*
    };
}

impl_is_prime!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// The outcome of checking a single integer for primality
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Verdict {
    /// The integer that was checked
    pub n: i64,
    /// Whether `n` is prime
    pub prime: bool,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prime {
            write!(f, "{} is prime", self.n)
        } else {
            write!(f, "{} is not prime", self.n)
        }
    }
}

/// A stateless primality service
///
/// This carries no configuration, it exists for callers that prefer to hold a checker value rather
/// than call [is_prime] directly. Any number of checkers may be used concurrently.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct PrimalityChecker;

impl PrimalityChecker {
    pub const fn new() -> Self {
        Self
    }

    /// Returns true if `n` is prime, see [is_prime]
    #[inline]
    pub fn is_prime(&self, n: i64) -> bool {
        is_prime(n)
    }

    /// Check `n`, returning a [Verdict] suitable for display
    pub fn check(&self, n: i64) -> Verdict {
        Verdict {
            n,
            prime: self.is_prime(n),
        }
    }

    /// Check each of `numbers` in order
    pub fn check_all<I>(&self, numbers: I) -> impl Iterator<Item = Verdict> + use<I>
    where
        I: IntoIterator<Item = i64>,
    {
        let checker = *self;
        numbers.into_iter().map(move |n| checker.check(n))
    }
}
