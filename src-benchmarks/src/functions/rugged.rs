//! Rugged test functions
//!
//! Plateaus, deception and constraint penalties. These separate optimizers
//! that merely hill-climb from ones that keep exploring.

/// Low-autocorrelation binary sequences (LABS) merit factor
/// Bits map to a +/-1 sequence s; with C_k the aperiodic autocorrelation at
/// shift k and E = sum of C_k^2, the fitness is the merit factor n^2 / (2E).
/// Best values are only known from tables; n=32 reaches 8.
pub fn labs(bits: &[u8]) -> f64 {
    let n = bits.len();
    let s: Vec<f64> = bits.iter().map(|&b| 2.0 * b as f64 - 1.0).collect();
    let mut energy = 0.0;
    for k in 1..n {
        let c_k: f64 = (0..n - k).map(|i| s[i] * s[i + k]).sum();
        energy += c_k * c_k;
    }
    // C_{n-1} is a single +/-1 product, so energy >= 1 for n >= 2
    (n * n) as f64 / (2.0 * energy)
}

/// N-Queens as a penalized placement problem on a k*k board (n = k*k)
/// Bit r*k + c places a queen on row r, column c. Fitness is the number of
/// queens minus k times the excess (count above one) on every row, column
/// and diagonal in both directions.
/// Global maximum: f(x) = k for every k with a conflict-free placement.
pub fn n_queens(bits: &[u8]) -> f64 {
    let n = bits.len();
    let k = (n as f64).sqrt().round() as usize;
    debug_assert_eq!(k * k, n);

    let mut rows = vec![0i64; k];
    let mut cols = vec![0i64; k];
    // r - c + (k-1) in 0..2k-1 and r + c in 0..2k-1
    let mut diag = vec![0i64; 2 * k - 1];
    let mut anti = vec![0i64; 2 * k - 1];
    let mut queens = 0i64;

    for r in 0..k {
        for c in 0..k {
            if bits[r * k + c] == 1 {
                queens += 1;
                rows[r] += 1;
                cols[c] += 1;
                diag[r + k - 1 - c] += 1;
                anti[r + c] += 1;
            }
        }
    }

    let excess = |counts: &[i64]| -> i64 { counts.iter().map(|&c| (c - 1).max(0)).sum() };
    let conflicts = excess(&rows) + excess(&cols) + excess(&diag) + excess(&anti);
    (queens - k as i64 * conflicts) as f64
}

const TRAP_BLOCK: usize = 5;

/// Concatenated deceptive traps on blocks of 5 bits
/// Each block scores its size u-count of 5 only at all-ones and otherwise
/// rewards zeros (4 - u), pulling hill-climbers away from the optimum. A
/// trailing partial block of m bits is scored the same way on m.
/// Global maximum: f(x) = n at x = (1, 1, ..., 1)
pub fn concatenated_trap(bits: &[u8]) -> f64 {
    let mut total = 0.0;
    for block in bits.chunks(TRAP_BLOCK) {
        let m = block.len();
        let u: usize = block.iter().map(|&b| b as usize).sum();
        total += if u == m { m as f64 } else { (m - 1 - u) as f64 };
    }
    total
}
