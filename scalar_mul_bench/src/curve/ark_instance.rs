//! G1 of BLS12-381 as implemented by the arkworks libraries.
//!
//! The generator is built from its decimal affine coordinates, with the
//! Jacobian `z` coordinate set to one. Scalars are applied as full integers,
//! as little endian `u64` limbs, without reduction modulo the group order.
use ark_bls12_381::{Fq, G1Projective};
use ark_ec::{AffineRepr, CurveGroup, Group};
use ark_ff::{Field, PrimeField};
use ark_std::Zero;
use core::fmt;
use num_bigint::BigUint;
use std::str::FromStr;

use super::{CurveError, EllipticCurvePoint, G1_GENERATOR_X, G1_GENERATOR_Y};

#[derive(PartialEq, Eq, Copy, Clone, fmt::Debug)]
pub struct ArkG1(G1Projective);

/// Parse a base field element, rejecting anything that is not a canonical
/// representative.
fn fq_from_decimal(literal: &str) -> Result<Fq, CurveError> {
    let not_in_field = || CurveError::NotInField(literal.to_owned());
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_in_field());
    }
    let value = BigUint::from_str(literal).map_err(|_| not_in_field())?;
    let modulus: BigUint = Fq::MODULUS.into();
    if value >= modulus {
        return Err(not_in_field());
    }
    Ok(Fq::from(value))
}

impl ArkG1 {
    /// Build a point from decimal affine coordinates. The coordinates are not
    /// checked to lie on the curve.
    pub fn from_decimal_coordinates(x: &str, y: &str) -> Result<Self, CurveError> {
        let x = fq_from_decimal(x)?;
        let y = fq_from_decimal(y)?;
        Ok(ArkG1(G1Projective::new_unchecked(x, y, Fq::ONE)))
    }

    pub fn into_ark(self) -> G1Projective { self.0 }
}

impl From<G1Projective> for ArkG1 {
    fn from(value: G1Projective) -> Self { ArkG1(value) }
}

impl EllipticCurvePoint for ArkG1 {
    type Scalar = Vec<u64>;

    const NAME: &'static str = "arkworks (ark-bls12-381)";

    fn generator() -> Result<Self, CurveError> {
        Self::from_decimal_coordinates(G1_GENERATOR_X, G1_GENERATOR_Y)
    }

    fn prepare_scalar(n: &BigUint) -> Self::Scalar { n.to_u64_digits() }

    #[inline(always)]
    fn scalar_multiply(&self, scalar: &Self::Scalar) -> Self { ArkG1(self.0.mul_bigint(scalar)) }

    fn is_identity(&self) -> bool { self.0.is_zero() }

    fn affine_coordinates(&self) -> Option<(BigUint, BigUint)> {
        let affine = self.0.into_affine();
        affine.xy().map(|(x, y)| ((*x).into(), (*y).into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::tests::*;

    #[test]
    fn test_generator() {
        check_generator::<ArkG1>();
        assert_eq!(ArkG1::generator().unwrap().into_ark(), G1Projective::generator());
    }

    #[test]
    fn test_small_multiple() { check_small_multiple::<ArkG1>() }

    #[test]
    fn test_group_order() { check_order::<ArkG1>() }

    #[test]
    fn test_chain() { check_chain::<ArkG1>() }

    #[test]
    fn test_prepared_scalar_limbs() {
        assert!(ArkG1::prepare_scalar(&BigUint::from(0u8)).is_empty());
        let n = (BigUint::from(3u8) << 64) + 5u8;
        assert_eq!(ArkG1::prepare_scalar(&n), vec![5, 3]);
    }

    #[test]
    fn test_bad_coordinates() {
        let p = "4002409555221667393417789825735904156556882819939007885332058136124031650490837864442687629129015664037894272559787";
        assert!(matches!(
            ArkG1::from_decimal_coordinates(p, G1_GENERATOR_Y),
            Err(CurveError::NotInField(_))
        ));
        assert!(ArkG1::from_decimal_coordinates(G1_GENERATOR_X, "12x").is_err());
        assert!(ArkG1::from_decimal_coordinates("", G1_GENERATOR_Y).is_err());
    }

    #[test]
    fn test_matches_native_multiplication() {
        let g = G1Projective::generator();
        let s = ark_bls12_381::Fr::from(123456789u64);
        let native: G1Projective = g * s;
        let ours = ArkG1::from(g).multiply_by_integer(&BigUint::from(123456789u64));
        assert_eq!(ours.into_ark(), native);
    }
}
