//! Perplexity metric and its convergence test
//!
//! Perplexity is the base-2 entropy of the rank distribution, exponentiated.
//! It summarizes how spread the distribution is and serves purely as a
//! convergence signal, never as a ranking input.

/// Compute the perplexity of a rank distribution: `2^(-Σ r·log2(r))`
///
/// All ranks must be strictly positive. The update rule guarantees this:
/// every node receives at least the teleport term each round.
pub fn perplexity(scores: &[f64]) -> f64 {
    let neg_entropy: f64 = scores.iter().map(|&r| r * r.log2()).sum();
    2f64.powf(-neg_entropy)
}

/// Decide whether a perplexity trace has converged
///
/// Requires at least 4 recorded values. Convergence holds when every
/// consecutive pair `(earlier, later)` among the last 4 entries keeps the
/// same units digit (`floor` then mod 10) and drops by no more than 1.0.
/// The digit check tolerates slow residual drift; the drop bound rejects
/// coincidental digit matches with large swings (e.g. 101, 91, 71, 31).
pub fn has_converged(trace: &[f64]) -> bool {
    if trace.len() < 4 {
        return false;
    }
    trace[trace.len() - 4..].windows(2).all(|pair| {
        let (earlier, later) = (pair[0], pair[1]);
        units_digit(earlier) == units_digit(later) && earlier - later <= 1.0
    })
}

fn units_digit(p: f64) -> i64 {
    (p as i64) % 10
}
