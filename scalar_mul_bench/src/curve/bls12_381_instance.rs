//! G1 of BLS12-381 as implemented by the zkcrypto `bls12_381` crate.
//!
//! This library only multiplies by elements of the scalar field, so integers
//! are first reduced modulo the group order. For points of the prime order
//! subgroup this gives the same result as multiplying by the integer itself.
use bls12_381::{G1Projective, Scalar};
use ff::PrimeField;
use group::{Curve, Group};
use num_bigint::BigUint;
use std::sync::OnceLock;

use super::{group_order, CurveError, EllipticCurvePoint};

#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub struct ZkG1(G1Projective);

/// Flag bits in the first byte of an encoded point.
const FLAG_MASK: u8 = 0b1110_0000;

fn cached_group_order() -> &'static BigUint {
    static ORDER: OnceLock<BigUint> = OnceLock::new();
    ORDER.get_or_init(group_order)
}

/// Reduce an integer modulo the group order and convert it to a scalar.
pub fn scalar_from_biguint(n: &BigUint) -> Scalar {
    let reduced = n % cached_group_order();
    let mut repr = [0u8; 32];
    let bytes = reduced.to_bytes_le();
    repr[..bytes.len()].copy_from_slice(&bytes);
    Option::from(Scalar::from_repr(repr)).expect("A value reduced modulo r is a valid scalar.")
}

impl EllipticCurvePoint for ZkG1 {
    type Scalar = Scalar;

    const NAME: &'static str = "zkcrypto (bls12_381)";

    /// Uses the generator constant shipped with the library.
    fn generator() -> Result<Self, CurveError> { Ok(ZkG1(<G1Projective as Group>::generator())) }

    fn prepare_scalar(n: &BigUint) -> Self::Scalar { scalar_from_biguint(n) }

    #[inline(always)]
    fn scalar_multiply(&self, scalar: &Self::Scalar) -> Self { ZkG1(self.0 * scalar) }

    #[inline(always)]
    fn scalar_multiply_into(&self, scalar: &Self::Scalar, dest: &mut Self) {
        dest.0 = self.0 * scalar;
    }

    fn is_identity(&self) -> bool { bool::from(self.0.is_identity()) }

    fn affine_coordinates(&self) -> Option<(BigUint, BigUint)> {
        let affine = self.0.to_affine();
        if bool::from(affine.is_identity()) {
            return None;
        }
        // Big endian x followed by big endian y, flags in the top three bits.
        let mut encoded = affine.to_uncompressed();
        encoded[0] &= !FLAG_MASK;
        let x = BigUint::from_bytes_be(&encoded[..48]);
        let y = BigUint::from_bytes_be(&encoded[48..]);
        Some((x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::tests::*;
    use num_traits::Zero;

    #[test]
    fn test_generator() { check_generator::<ZkG1>() }

    #[test]
    fn test_small_multiple() { check_small_multiple::<ZkG1>() }

    #[test]
    fn test_group_order() { check_order::<ZkG1>() }

    #[test]
    fn test_chain() { check_chain::<ZkG1>() }

    #[test]
    fn test_scalar_reduction() {
        assert_eq!(scalar_from_biguint(&BigUint::zero()), Scalar::zero());
        assert_eq!(scalar_from_biguint(cached_group_order()), Scalar::zero());
        assert_eq!(scalar_from_biguint(&(group_order() + 7u8)), Scalar::from(7u64));
        assert_eq!(scalar_from_biguint(&BigUint::from(u64::MAX)), Scalar::from(u64::MAX));
    }
}
