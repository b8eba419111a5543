//! The point abstraction the benchmark driver is written against, and its
//! implementations for the BLS12-381 libraries under comparison.
pub mod ark_instance;
pub mod bls12_381_instance;

use num_bigint::BigUint;
use std::fmt::Debug;
use thiserror::Error;

/// Affine x coordinate of the standard BLS12-381 G1 generator, base 10.
pub const G1_GENERATOR_X: &str = "3685416753713387016781088315183077757961620795782546409894578378688607592378376318836054947676345821548104185464507";
/// Affine y coordinate of the standard BLS12-381 G1 generator, base 10.
pub const G1_GENERATOR_Y: &str = "1339506544944476473020471379941921221584933875938349620426543736416511423956333506472724655353366534992391756441569";

/// Order `r` of the BLS12-381 G1 subgroup, big endian hex.
pub const GROUP_ORDER_HEX: &str =
    "73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001";

#[derive(Error, Debug)]
pub enum CurveError {
    #[error("{0} is not a field element.")]
    NotInField(String),
}

/// The group order as an integer.
pub fn group_order() -> BigUint {
    BigUint::parse_bytes(GROUP_ORDER_HEX.as_bytes(), 16)
        .expect("The group order constant is valid hex.")
}

/// A point of the G1 group of some library. This is the only capability the
/// benchmark needs: build the generator and multiply by an integer.
pub trait EllipticCurvePoint: Clone + Debug + Sized {
    /// Multiplier in the form the library consumes it.
    type Scalar: Clone + Debug;

    /// Label used in reports.
    const NAME: &'static str;

    /// The standard G1 generator, in this library's native representation.
    fn generator() -> Result<Self, CurveError>;

    /// Convert an integer to [`EllipticCurvePoint::Scalar`]. Done once per
    /// scalar, outside of any timed section.
    fn prepare_scalar(n: &BigUint) -> Self::Scalar;

    #[must_use]
    /// Compute `scalar * self`.
    fn scalar_multiply(&self, scalar: &Self::Scalar) -> Self;

    /// Compute `scalar * self` and write it into `dest`.
    fn scalar_multiply_into(&self, scalar: &Self::Scalar, dest: &mut Self) {
        *dest = self.scalar_multiply(scalar);
    }

    #[must_use]
    /// Compute `n * self` for an integer `n`.
    fn multiply_by_integer(&self, n: &BigUint) -> Self {
        self.scalar_multiply(&Self::prepare_scalar(n))
    }

    fn is_identity(&self) -> bool;

    /// Affine `(x, y)`, or `None` for the point at infinity. Used to compare
    /// results across libraries.
    fn affine_coordinates(&self) -> Option<(BigUint, BigUint)>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{ark_instance::ArkG1, bls12_381_instance::ZkG1, *};
    use crate::scalars::ScalarSet;
    use num_traits::Zero;
    use std::str::FromStr;

    /// `[5]G`, computed independently.
    const FIVE_G_X: &str = "2601793266141653880357945339922727723793268013331457916525213050197274797722760296318099993752923714935161798464476";
    const FIVE_G_Y: &str = "3498096627312022583321348410616510759186251088555060790999813363211667535344132702692445545590448314959259020805858";

    /// The generator multiplied in turn by the first three built-in scalars.
    const CHAIN3_X: &str = "1160152551640559826461017694720711514850856776495599382485817777464629696405629307053617280009742892291500265273887";
    const CHAIN3_Y: &str = "3138098628520825029706734289610531207650700875417582732818436669918091537125487325574106418114176186901182409362606";

    fn coords(x: &str, y: &str) -> Option<(BigUint, BigUint)> {
        Some((BigUint::from_str(x).unwrap(), BigUint::from_str(y).unwrap()))
    }

    pub(crate) fn check_generator<P: EllipticCurvePoint>() {
        let g = P::generator().expect("Generator should be constructible.");
        assert!(!g.is_identity());
        assert_eq!(
            g.affine_coordinates(),
            coords(G1_GENERATOR_X, G1_GENERATOR_Y),
            "{} generator has the wrong coordinates.",
            P::NAME
        );
    }

    pub(crate) fn check_small_multiple<P: EllipticCurvePoint>() {
        let g = P::generator().unwrap();
        let p = g.multiply_by_integer(&BigUint::from(5u8));
        assert_eq!(p.affine_coordinates(), coords(FIVE_G_X, FIVE_G_Y), "{}", P::NAME);
        let mut dest = P::generator().unwrap();
        g.scalar_multiply_into(&P::prepare_scalar(&BigUint::from(5u8)), &mut dest);
        assert_eq!(dest.affine_coordinates(), p.affine_coordinates(), "{}", P::NAME);
    }

    pub(crate) fn check_order<P: EllipticCurvePoint>() {
        let g = P::generator().unwrap();
        assert!(g.multiply_by_integer(&group_order()).is_identity(), "{}", P::NAME);
        assert!(g.multiply_by_integer(&BigUint::zero()).is_identity(), "{}", P::NAME);
        assert_eq!(g.multiply_by_integer(&BigUint::zero()).affine_coordinates(), None);
        // r + 1 wraps around to the generator.
        let wrapped = g.multiply_by_integer(&(group_order() + 1u8));
        assert_eq!(wrapped.affine_coordinates(), g.affine_coordinates(), "{}", P::NAME);
    }

    pub(crate) fn check_chain<P: EllipticCurvePoint>() {
        let scalars = ScalarSet::bench_data().unwrap();
        let mut p = P::generator().unwrap();
        for s in scalars.iter().take(3) {
            p = p.multiply_by_integer(s);
        }
        assert_eq!(p.affine_coordinates(), coords(CHAIN3_X, CHAIN3_Y), "{}", P::NAME);
    }

    #[test]
    fn test_group_order() {
        assert_eq!(
            group_order(),
            BigUint::from_str(
                "52435875175126190479447740508185965837690552500527637822603658699938581184513"
            )
            .unwrap()
        );
    }

    #[test]
    fn test_backends_agree_on_random_scalars() {
        use rand::{rngs::SmallRng, Rng, SeedableRng};
        let mut rng = SmallRng::seed_from_u64(0x5dbe6259);
        let mut a = ArkG1::generator().unwrap();
        let mut z = ZkG1::generator().unwrap();
        for _ in 0..20 {
            // 384 bit scalars, well above the group order.
            let mut bytes = [0u8; 48];
            rng.fill(&mut bytes[..]);
            let s = BigUint::from_bytes_le(&bytes);
            a = a.multiply_by_integer(&s);
            z = z.multiply_by_integer(&s);
            assert_eq!(a.affine_coordinates(), z.affine_coordinates());
        }
    }
}
