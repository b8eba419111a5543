//! Loading of the scalars the benchmark multiplies by.
//!
//! Scalars are given as base-10 literals and kept as arbitrary precision
//! integers, in input order. They are not reduced modulo the group order
//! here; reduction, if any, is left to the individual backends.

use num_bigint::BigUint;
use std::{io::Read, path::Path, str::FromStr};
use thiserror::Error;

/// Number of scalars in the built-in benchmark data set.
pub const BENCH_SCALAR_COUNT: usize = 1000;

/// Built-in data set, one decimal literal per line.
const BENCH_DATA: &str = include_str!("../data/bench_scalars.txt");

#[derive(Debug, Error)]
pub enum ScalarLoadError {
    #[error("No scalars were provided.")]
    Empty,
    #[error("Scalar {index} is not a base-10 numeral: {literal:?}")]
    InvalidDecimal { index: usize, literal: String },
    #[error("Could not read scalars: {0}")]
    Io(#[from] std::io::Error),
}

/// An ordered, non-empty sequence of scalars, immutable after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarSet {
    scalars: Vec<BigUint>,
}

/// Parse a single literal. Only plain ASCII digits are accepted, leading zeros
/// included. `BigUint::from_str` on its own would also take a `+` sign and
/// `_` separators.
fn parse_decimal(index: usize, literal: &str) -> Result<BigUint, ScalarLoadError> {
    let invalid = || ScalarLoadError::InvalidDecimal {
        index,
        literal: literal.to_owned(),
    };
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    BigUint::from_str(literal).map_err(|_| invalid())
}

impl ScalarSet {
    /// Parse the given literals base 10, keeping their order.
    pub fn from_decimal_strs<I, S>(literals: I) -> Result<Self, ScalarLoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>, {
        let scalars = literals
            .into_iter()
            .enumerate()
            .map(|(i, s)| parse_decimal(i, s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        if scalars.is_empty() {
            return Err(ScalarLoadError::Empty);
        }
        Ok(Self { scalars })
    }

    /// Read whitespace separated literals.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, ScalarLoadError> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Self::from_decimal_strs(contents.split_whitespace())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScalarLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// The built-in data set of [`BENCH_SCALAR_COUNT`] scalars.
    pub fn bench_data() -> Result<Self, ScalarLoadError> {
        Self::from_decimal_strs(BENCH_DATA.lines())
    }

    pub fn len(&self) -> usize { self.scalars.len() }

    /// Always false for a successfully loaded set.
    pub fn is_empty(&self) -> bool { self.scalars.is_empty() }

    pub fn get(&self, index: usize) -> Option<&BigUint> { self.scalars.get(index) }

    /// The scalar used by iteration `i` of a benchmark loop, i.e., the one at
    /// `i mod len`.
    pub fn cyclic(&self, i: usize) -> &BigUint { &self.scalars[i % self.scalars.len()] }

    pub fn iter(&self) -> impl Iterator<Item = &BigUint> { self.scalars.iter() }

    pub fn to_decimal_strings(&self) -> Vec<String> {
        self.scalars.iter().map(|s| s.to_str_radix(10)).collect()
    }
}
