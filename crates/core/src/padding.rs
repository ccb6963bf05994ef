//! Search for transform-friendly padded sizes.
//!
//! Fast transforms factor a composite length into small-prime passes, so a
//! grid axis is padded up to the next integer of the form
//! `2^i * 3^j * 5^k * 7^l`. The search is a bounded brute-force enumeration
//! of exponent combinations; the ranges are tiny (≤ ~60 for base 2 even at
//! absurd sizes) so this is cheap and, being pure integer arithmetic,
//! exactly reproducible.

/// Smallest 7-smooth integer `>= min_size`.
///
/// When `must_be_even` is set the factor 2 appears at least once, which the
/// real-input transform requires on its halved axis. `min_size` of 0 or 1
/// yields 1 (or 2 when evenness is required).
pub fn find_padded_size(min_size: usize, must_be_even: bool) -> usize {
    let min_exp2 = usize::from(must_be_even);

    let max_exp2 = exponent_bound(2, min_size).max(min_exp2);
    let max_exp3 = exponent_bound(3, min_size);
    let max_exp5 = exponent_bound(5, min_size);
    let max_exp7 = exponent_bound(7, min_size);

    // 2^max_exp2 is always >= min_size (and even when required), so the
    // search space is never empty.
    let mut best = pow_u128(2, max_exp2);

    for i in min_exp2..=max_exp2 {
        let p2 = pow_u128(2, i);
        for j in 0..=max_exp3 {
            let p3 = p2 * pow_u128(3, j);
            if p3 > best {
                break;
            }
            for k in 0..=max_exp5 {
                let p5 = p3 * pow_u128(5, k);
                if p5 > best {
                    break;
                }
                for l in 0..=max_exp7 {
                    let candidate = p5 * pow_u128(7, l);
                    if candidate > best {
                        break;
                    }
                    if candidate >= min_size as u128 {
                        best = candidate;
                    }
                }
            }
        }
    }

    best as usize
}

/// Smallest `e` with `prime^e >= n`, computed without floating point.
fn exponent_bound(prime: u128, n: usize) -> usize {
    let n = n as u128;
    let mut e = 0;
    let mut power = 1u128;
    while power < n {
        power *= prime;
        e += 1;
    }
    e
}

fn pow_u128(base: u128, exp: usize) -> u128 {
    base.pow(exp as u32)
}
