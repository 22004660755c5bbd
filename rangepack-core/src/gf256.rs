//! GF(2^8) arithmetic over compile-time exponent/log tables
//!
//! All field operations reduce with the primitive polynomial
//! x^8 + x^4 + x^3 + x^2 + 1 (0x11D). The exponent table is doubled to 512
//! entries so the sum of two log indices never needs a modulo.

use crate::error::PacketError;

/// Primitive polynomial for GF(2^8): x^8 + x^4 + x^3 + x^2 + 1
pub const PRIMITIVE_POLY: u16 = 0x11D;

const fn build_tables() -> ([u8; 512], [u8; 256]) {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];

    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    // Second copy so exp[log a + log b] needs no reduction
    while i < 512 {
        exp[i] = exp[i - 255];
        i += 1;
    }

    (exp, log)
}

const TABLES: ([u8; 512], [u8; 256]) = build_tables();
const EXP: [u8; 512] = TABLES.0;
const LOG: [u8; 256] = TABLES.1;

/// alpha^i for any non-negative exponent
pub fn alpha_pow(i: usize) -> u8 {
    EXP[i % 255]
}

/// Discrete log of a nonzero element
///
/// `log(0)` is undefined; callers must never pass zero.
pub fn log(a: u8) -> usize {
    debug_assert!(a != 0, "log of zero in GF(2^8)");
    LOG[a as usize] as usize
}

/// Field multiplication
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    EXP[LOG[a as usize] as usize + LOG[b as usize] as usize]
}

/// Field division, failing on a zero divisor
pub fn div(a: u8, b: u8) -> Result<u8, PacketError> {
    if b == 0 {
        return Err(PacketError::DivisionByZero);
    }
    if a == 0 {
        return Ok(0);
    }
    let idx = LOG[a as usize] as usize + 255 - LOG[b as usize] as usize;
    Ok(EXP[idx])
}

/// Field exponentiation a^n
pub fn pow(a: u8, n: usize) -> u8 {
    if n == 0 {
        return 1;
    }
    if a == 0 {
        return 0;
    }
    EXP[(LOG[a as usize] as usize * n) % 255]
}

/// Multiplicative inverse of a nonzero element
///
/// Undefined for zero; callers must never pass zero.
pub fn inv(a: u8) -> u8 {
    debug_assert!(a != 0, "inverse of zero in GF(2^8)");
    EXP[255 - LOG[a as usize] as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_cycle() {
        assert_eq!(alpha_pow(0), 1);
        assert_eq!(alpha_pow(1), 2);
        // x^8 reduced by the primitive polynomial
        assert_eq!(alpha_pow(8), 0x1D);
        // Multiplicative order of the field is 255
        assert_eq!(alpha_pow(255), 1);
    }

    #[test]
    fn test_mul_identities() {
        for a in 0..=255u8 {
            assert_eq!(mul(a, 0), 0);
            assert_eq!(mul(0, a), 0);
            assert_eq!(mul(a, 1), a);
            assert_eq!(mul(1, a), a);
        }
    }

    #[test]
    fn test_mul_div_consistency() {
        // divide(multiply(a,b), b) == a for all nonzero a, b
        for a in 1..=255u8 {
            for b in 1..=255u8 {
                assert_eq!(div(mul(a, b), b).unwrap(), a);
            }
        }
    }

    #[test]
    fn test_inverse() {
        for a in 1..=255u8 {
            assert_eq!(mul(a, inv(a)), 1);
        }
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(div(7, 0), Err(PacketError::DivisionByZero));
    }

    #[test]
    fn test_pow() {
        assert_eq!(pow(0, 0), 1);
        assert_eq!(pow(0, 5), 0);
        assert_eq!(pow(2, 8), 0x1D);
        for a in 1..=255u8 {
            assert_eq!(pow(a, 1), a);
            assert_eq!(pow(a, 2), mul(a, a));
            assert_eq!(pow(a, 255), 1);
        }
    }
}
