//! # Prime Search
//!
//! Trial-division primality and strict nearest-prime lookup.
//!
//! "Prime" here means: no integer in `[2, n - 1]` divides `n`. Under that
//! definition `0` and `1` count as prime, and the lookups honour it, so the
//! largest prime below `2` is `1` and the largest prime below `1` is `0`.
//!
//! [`is_prime`] bounds the divisor scan at `sqrt(n)`, which answers every
//! input exactly like the exhaustive scan in [`is_prime_exhaustive`].

/// Direction of a prime search, a query, or a relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards larger values.
    Up,
    /// Towards smaller values.
    Down,
}

impl Direction {
    /// Maps the `test_up` flag used by the counting operations.
    #[inline]
    #[must_use]
    pub const fn from_up_flag(up: bool) -> Self {
        if up {
            Self::Up
        } else {
            Self::Down
        }
    }

    /// Takes one step from `value`, or `None` at the edge of the `u32` range.
    #[inline]
    #[must_use]
    pub const fn step(self, value: u32) -> Option<u32> {
        match self {
            Self::Up => value.checked_add(1),
            Self::Down => value.checked_sub(1),
        }
    }

    /// Moves `value` by `offset`, clamped to the `u32` range.
    #[inline]
    #[must_use]
    pub const fn offset(self, value: u32, offset: u32) -> u32 {
        match self {
            Self::Up => value.saturating_add(offset),
            Self::Down => value.saturating_sub(offset),
        }
    }

    /// Returns a lowercase name for log output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// Returns true if no integer in `[2, n - 1]` divides `n`.
#[must_use]
pub fn is_prime(n: u32) -> bool {
    let n = u64::from(n);
    let mut divisor = 2u64;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Linear-cost reference scan over every candidate divisor in `[2, n - 1]`.
///
/// Kept for cross-checking and benchmarking [`is_prime`].
#[must_use]
pub fn is_prime_exhaustive(n: u32) -> bool {
    (2..n).all(|divisor| n % divisor != 0)
}

/// Finds the nearest prime strictly beyond `start` in `direction`.
///
/// Returns `None` if the search runs off either end of the `u32` range, which
/// only happens going down from `0` or going up past the largest `u32` prime.
#[must_use]
pub fn find_prime(start: u32, direction: Direction) -> Option<u32> {
    let mut candidate = direction.step(start)?;
    while !is_prime(candidate) {
        candidate = direction.step(candidate)?;
    }
    Some(candidate)
}
