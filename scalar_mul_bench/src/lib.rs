#![doc = include_str!("../README.md")]
pub mod curve;
pub mod cycles;
pub mod driver;
pub mod scalars;

pub use curve::{ark_instance::ArkG1, bls12_381_instance::ZkG1, CurveError, EllipticCurvePoint};
pub use cycles::{CycleCounter, Tsc};
pub use driver::{
    cross_check, run_all, run_backend, Backend, BaseMode, BenchConfig, BenchError, BenchReport,
    DEFAULT_ITERATIONS,
};
pub use scalars::{ScalarLoadError, ScalarSet, BENCH_SCALAR_COUNT};
