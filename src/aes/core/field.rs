//! Byte arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.

/// Field addition (and subtraction) is XOR.
#[inline(always)]
pub(crate) fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Multiplication by `x` ({02}). The high bit shifted out selects the reduction byte 0x1b.
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub(crate) fn xtime(a: u8) -> u8 {
    (a << 1) ^ (0x1B & (0u8).wrapping_sub((a >> 7) & 1))
}

/// General field multiplication by repeated doubling of `a` over the bits of `b`, LSB first.
#[inline(always)]
pub(crate) fn multiply(a: u8, b: u8) -> u8 {
    let mut product = 0u8;
    let mut running = a;
    for bit in 0..8 {
        if (b >> bit) & 1 == 1 {
            product = add(product, running);
        }
        running = xtime(running);
    }
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(0x57, 0x83), 0xd4);
        assert_eq!(add(0xd4, 0x83), 0x57);
    }

    #[test]
    fn test_xtime() {
        // chain from FIPS-197 section 4.2.1
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0xae), 0x47);
        assert_eq!(xtime(0x47), 0x8e);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn test_multiply() {
        assert_eq!(multiply(0x57, 0x13), 0xfe);
        assert_eq!(multiply(0x57, 0x83), 0xc1);
        assert_eq!(multiply(0x13, 0x57), 0xfe);
    }

    #[test]
    fn multiply_identities() {
        for a in 0..=255u8 {
            assert_eq!(multiply(a, 0x00), 0x00);
            assert_eq!(multiply(a, 0x01), a);
            assert_eq!(multiply(a, 0x02), xtime(a));
            assert_eq!(multiply(a, 0x03), xtime(a) ^ a);
        }
    }
}
