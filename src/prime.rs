//! Prime sizing helpers for the table capacity.
//!
//! The backing array length is kept prime so that linear probe sequences
//! visit every slot before cycling. Both helpers are stateless and used only
//! when picking a capacity.

/// Returns `true` if `n` is prime, by trial division up to the square root.
#[allow(clippy::arithmetic_side_effects)]
pub(crate) fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut divisor = 3usize;
    while let Some(square) = divisor.checked_mul(divisor) {
        if square > n {
            break;
        }
        if n % divisor == 0 {
            return false;
        }
        divisor = divisor.saturating_add(2);
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`.
pub(crate) fn next_prime(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }

    // Bump even candidates to the next odd number, then walk odd numbers.
    let mut candidate = if n % 2 == 0 { n.saturating_add(1) } else { n };
    while !is_prime(candidate) {
        candidate = candidate.saturating_add(2);
    }
    candidate
}
