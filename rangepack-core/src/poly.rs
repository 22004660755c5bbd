//! Polynomial algebra over GF(2^8)
//!
//! Polynomials are coefficient slices with the highest-degree coefficient
//! first. Addition in the field is XOR, so there is no carry anywhere and no
//! failure mode for well-formed input.

use crate::gf256;

/// Multiply two polynomials (convolution with GF multiply-accumulate)
pub fn mul(a: &[u8], b: &[u8]) -> Vec<u8> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0u8; a.len() + b.len() - 1];
    for (i, &ca) in a.iter().enumerate() {
        if ca == 0 {
            continue;
        }
        for (j, &cb) in b.iter().enumerate() {
            out[i + j] ^= gf256::mul(ca, cb);
        }
    }
    out
}

/// Evaluate a polynomial at a point using Horner's rule
pub fn eval(p: &[u8], x: u8) -> u8 {
    let mut acc = 0u8;
    for &coeff in p {
        acc = gf256::mul(acc, x) ^ coeff;
    }
    acc
}

/// Multiply every coefficient by a scalar
pub fn scale(p: &[u8], s: u8) -> Vec<u8> {
    p.iter().map(|&c| gf256::mul(c, s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_by_one() {
        let p = [3, 0, 7, 1];
        assert_eq!(mul(&p, &[1]), p.to_vec());
        assert_eq!(mul(&[1], &p), p.to_vec());
    }

    #[test]
    fn test_mul_degree() {
        // (x + 1)(x + 2) = x^2 + 3x + 2 in GF(2^8)
        let product = mul(&[1, 1], &[1, 2]);
        assert_eq!(product, vec![1, 3, 2]);
    }

    #[test]
    fn test_mul_empty() {
        assert!(mul(&[], &[1, 2]).is_empty());
        assert!(mul(&[1, 2], &[]).is_empty());
    }

    #[test]
    fn test_eval_constant_and_roots() {
        assert_eq!(eval(&[5], 123), 5);
        // x + a has the root a (XOR is the field's subtraction)
        let a = 0x53;
        assert_eq!(eval(&[1, a], a), 0);
        assert_eq!(eval(&[], 17), 0);
    }

    #[test]
    fn test_eval_matches_pointwise_product() {
        // eval(p*q, x) == eval(p, x) * eval(q, x)
        let p = [2, 9, 0, 4];
        let q = [1, 7, 7];
        let pq = mul(&p, &q);
        for x in [0u8, 1, 2, 0x1D, 0x80, 0xFF] {
            assert_eq!(eval(&pq, x), gf256::mul(eval(&p, x), eval(&q, x)));
        }
    }

    #[test]
    fn test_scale() {
        let p = [1, 2, 3];
        assert_eq!(scale(&p, 0), vec![0, 0, 0]);
        assert_eq!(scale(&p, 1), p.to_vec());
        let s = 0x1D;
        let scaled = scale(&p, s);
        for x in [1u8, 2, 3, 0xAB] {
            assert_eq!(eval(&scaled, x), gf256::mul(eval(&p, x), s));
        }
    }
}
