//! Reed-Solomon forward error correction over GF(2^8)
//!
//! Systematic codewords: message symbols followed by parity symbols, at most
//! 255 symbols total. Syndromes are evaluations at alpha^0..alpha^(p-1), and
//! decoding runs the full algebraic chain: Berlekamp-Massey for the error
//! locator, Chien search for positions, Forney's formula for magnitudes, and
//! a mandatory syndrome re-check after correction.

use crate::constants::MAX_BLOCK_SIZE;
use crate::error::PacketError;
use crate::{gf256, poly};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use tracing::debug;

/// Forward error correction strength
///
/// Each level maps to a fixed parity symbol count; bounded-distance decoding
/// corrects up to half that many symbol errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FecLevel {
    /// No parity symbols
    #[default]
    None,
    /// 16 parity symbols, corrects up to 8 errors
    Low,
    /// 32 parity symbols, corrects up to 16 errors
    Medium,
    /// 64 parity symbols, corrects up to 32 errors
    High,
}

impl FecLevel {
    /// Number of parity symbols appended at this level
    pub const fn parity_bytes(self) -> usize {
        match self {
            FecLevel::None => 0,
            FecLevel::Low => 16,
            FecLevel::Medium => 32,
            FecLevel::High => 64,
        }
    }

    /// Maximum number of correctable symbol errors (parity / 2)
    pub const fn max_correctable(self) -> usize {
        self.parity_bytes() / 2
    }

    /// Wire code carried in the header
    pub const fn code(self) -> u8 {
        match self {
            FecLevel::None => 0,
            FecLevel::Low => 1,
            FecLevel::Medium => 2,
            FecLevel::High => 3,
        }
    }

    /// Parse a wire code
    pub fn from_code(code: u8) -> Result<Self, PacketError> {
        match code {
            0 => Ok(FecLevel::None),
            1 => Ok(FecLevel::Low),
            2 => Ok(FecLevel::Medium),
            3 => Ok(FecLevel::High),
            other => Err(PacketError::UnknownFec(other)),
        }
    }
}

/// Generator polynomials for the three parity counts, built once
static GENERATORS: OnceLock<[Vec<u8>; 3]> = OnceLock::new();

/// Generator polynomial g(x) = prod_{i=0}^{parity-1} (x - alpha^i),
/// highest degree first and monic
fn build_generator(parity: usize) -> Vec<u8> {
    let mut g = vec![1u8];
    for i in 0..parity {
        // (x - alpha^i) == (x + alpha^i) in GF(2^8)
        g = poly::mul(&g, &[1, gf256::alpha_pow(i)]);
    }
    g
}

fn generator(level: FecLevel) -> &'static [u8] {
    let cached = GENERATORS.get_or_init(|| {
        [
            build_generator(FecLevel::Low.parity_bytes()),
            build_generator(FecLevel::Medium.parity_bytes()),
            build_generator(FecLevel::High.parity_bytes()),
        ]
    });
    match level {
        FecLevel::None => &[],
        FecLevel::Low => &cached[0],
        FecLevel::Medium => &cached[1],
        FecLevel::High => &cached[2],
    }
}

/// Encode a message, appending the level's parity symbols
///
/// Parity is the remainder of message * x^p divided by the generator
/// polynomial, computed with a shift-register-style loop.
pub fn encode(message: &[u8], level: FecLevel) -> Result<Vec<u8>, PacketError> {
    let parity = level.parity_bytes();
    if parity == 0 {
        return Ok(message.to_vec());
    }
    if message.len() + parity > MAX_BLOCK_SIZE {
        return Err(PacketError::BlockTooLarge {
            len: message.len(),
            parity,
        });
    }

    let gen = generator(level);
    let mut buf = vec![0u8; message.len() + parity];
    buf[..message.len()].copy_from_slice(message);

    for i in 0..message.len() {
        let coef = buf[i];
        if coef != 0 {
            // gen[0] is the monic leading 1, skip it
            for j in 1..=parity {
                buf[i + j] ^= gf256::mul(gen[j], coef);
            }
        }
    }

    let mut codeword = message.to_vec();
    codeword.extend_from_slice(&buf[message.len()..]);
    Ok(codeword)
}

/// Decode a codeword, correcting up to `level.max_correctable()` symbol
/// errors, and strip the parity symbols
pub fn decode(block: &[u8], level: FecLevel) -> Result<Vec<u8>, PacketError> {
    let parity = level.parity_bytes();
    if parity == 0 {
        return Ok(block.to_vec());
    }
    if block.len() < parity {
        return Err(PacketError::BodyTooShort {
            len: block.len(),
            parity,
        });
    }
    if block.len() > MAX_BLOCK_SIZE {
        return Err(PacketError::BlockTooLarge {
            len: block.len() - parity,
            parity,
        });
    }

    let synd = syndromes(block, parity);
    if synd.iter().all(|&s| s == 0) {
        // Clean path: strip parity
        return Ok(block[..block.len() - parity].to_vec());
    }

    let corrected = correct(block, level, &synd)?;
    Ok(corrected[..corrected.len() - parity].to_vec())
}

/// Syndromes S_i = block evaluated at alpha^i for i in 0..parity
fn syndromes(block: &[u8], parity: usize) -> Vec<u8> {
    (0..parity)
        .map(|i| poly::eval(block, gf256::alpha_pow(i)))
        .collect()
}

/// Locate and correct errors in a block with known-dirty syndromes
fn correct(block: &[u8], level: FecLevel, synd: &[u8]) -> Result<Vec<u8>, PacketError> {
    let n = block.len();
    let parity = level.parity_bytes();

    // Error locator polynomial, ascending coefficients, sigma[0] == 1
    let sigma = berlekamp_massey(synd)?;
    let degree = sigma.len() - 1;
    let max = level.max_correctable();
    if degree > max {
        return Err(PacketError::TooManyErrors { degree, max });
    }

    // Chien search over byte offsets: offset j holds an error iff
    // Lambda(X_j^-1) == 0 with X_j = alpha^(n-1-j)
    let sigma_hi: Vec<u8> = sigma.iter().rev().copied().collect();
    let mut positions = Vec::with_capacity(degree);
    for j in 0..n {
        let x_inv = gf256::inv(gf256::alpha_pow(n - 1 - j));
        if poly::eval(&sigma_hi, x_inv) == 0 {
            positions.push(j);
        }
    }
    if positions.len() != degree {
        return Err(PacketError::LocatorMismatch {
            found: positions.len(),
            expected: degree,
        });
    }

    // Error evaluator Omega(x) = S(x) * Lambda(x) mod x^parity
    let synd_hi: Vec<u8> = synd.iter().rev().copied().collect();
    let product = poly::mul(&synd_hi, &sigma_hi);
    let omega_hi = if product.len() > parity {
        product[product.len() - parity..].to_vec()
    } else {
        product
    };

    // Forney's formula: magnitude = X_j * Omega(X_j^-1) / Lambda'(X_j^-1)
    let mut corrected = block.to_vec();
    for &j in &positions {
        let x_j = gf256::alpha_pow(n - 1 - j);
        let x_inv = gf256::inv(x_j);

        let omega_val = poly::eval(&omega_hi, x_inv);

        // Formal derivative: only odd-degree terms of sigma survive
        let mut sigma_prime = 0u8;
        for k in (1..sigma.len()).step_by(2) {
            sigma_prime ^= gf256::mul(sigma[k], gf256::pow(x_inv, k - 1));
        }
        if sigma_prime == 0 {
            return Err(PacketError::VerificationFailed);
        }

        let magnitude = gf256::div(gf256::mul(x_j, omega_val), sigma_prime)?;
        corrected[j] ^= magnitude;
    }

    // Mandatory re-check: the only guard against a silently wrong correction
    if syndromes(&corrected, parity).iter().any(|&s| s != 0) {
        return Err(PacketError::VerificationFailed);
    }

    debug!(
        corrected = positions.len(),
        block_len = n,
        "corrected symbol errors"
    );
    Ok(corrected)
}

/// Berlekamp-Massey over the syndrome sequence
///
/// Returns the error locator with ascending coefficients and constant term 1.
fn berlekamp_massey(synd: &[u8]) -> Result<Vec<u8>, PacketError> {
    let parity = synd.len();

    let mut c = vec![0u8; parity + 1];
    c[0] = 1;
    let mut b = vec![0u8; parity + 1];
    b[0] = 1;

    let mut l: usize = 0;
    let mut m: usize = 1;
    let mut prev_d: u8 = 1;

    for n in 0..parity {
        let mut d = synd[n];
        for i in 1..=l {
            d ^= gf256::mul(c[i], synd[n - i]);
        }

        if d == 0 {
            m += 1;
        } else if 2 * l <= n {
            let t = c.clone();
            let coeff = gf256::div(d, prev_d)?;
            for i in 0..=parity {
                if i + m <= parity {
                    c[i + m] ^= gf256::mul(coeff, b[i]);
                }
            }
            l = n + 1 - l;
            b = t;
            prev_d = d;
            m = 1;
        } else {
            let coeff = gf256::div(d, prev_d)?;
            for i in 0..=parity {
                if i + m <= parity {
                    c[i + m] ^= gf256::mul(coeff, b[i]);
                }
            }
            m += 1;
        }
    }

    let degree = c.iter().rposition(|&x| x != 0).unwrap_or(0);
    c.truncate(degree + 1);
    Ok(c)
}
