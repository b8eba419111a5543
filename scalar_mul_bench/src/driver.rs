//! The timed benchmark loop.
//!
//! Each backend run owns its point accumulator and its running totals, and
//! returns them as a [`BenchReport`]. Runs are strictly sequential.
use crate::{
    curve::{ark_instance::ArkG1, bls12_381_instance::ZkG1, CurveError, EllipticCurvePoint},
    cycles::CycleCounter,
    scalars::ScalarSet,
};
use log::{debug, info};
use serde::Serialize;
use std::{
    fmt,
    str::FromStr,
    time::{Duration, Instant},
};
use thiserror::Error;

/// Number of multiplications per backend unless configured otherwise.
pub const DEFAULT_ITERATIONS: usize = 1000;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("The number of iterations must be positive.")]
    ZeroIterations,
    #[error("Could not construct the generator: {0}")]
    Curve(#[from] CurveError),
    #[error("{first} and {second} ended on different points.")]
    BackendMismatch { first: String, second: String },
    #[error("Unknown {what} '{value}'.")]
    UnknownOption { what: &'static str, value: String },
}

/// What each iteration multiplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BaseMode {
    /// The result of iteration `i` is the base of iteration `i + 1`.
    #[default]
    Chained,
    /// Every iteration multiplies the generator, into a scratch point.
    Fixed,
}

impl FromStr for BaseMode {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chained" => Ok(BaseMode::Chained),
            "fixed" => Ok(BaseMode::Fixed),
            _ => Err(BenchError::UnknownOption {
                what:  "base mode",
                value: s.to_owned(),
            }),
        }
    }
}

/// The libraries that can be benchmarked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// `ark-bls12-381`.
    Ark,
    /// zkcrypto's `bls12_381`.
    Zk,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Ark, Backend::Zk];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Ark => ArkG1::NAME,
            Backend::Zk => ZkG1::NAME,
        }
    }
}

impl FromStr for Backend {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ark" | "arkworks" => Ok(Backend::Ark),
            "zk" | "zkcrypto" => Ok(Backend::Zk),
            _ => Err(BenchError::UnknownOption {
                what:  "backend",
                value: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub iterations: usize,
    pub base_mode:  BaseMode,
    /// Backends to run, in this order.
    pub backends:   Vec<Backend>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            base_mode:  BaseMode::default(),
            backends:   Backend::ALL.to_vec(),
        }
    }
}

/// Totals and means of one backend run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchReport {
    pub backend:          &'static str,
    pub base_mode:        BaseMode,
    pub iterations:       usize,
    pub total_duration:   Duration,
    pub total_cycles:     u64,
    pub average_duration: Duration,
    pub average_cycles:   u64,
    /// Affine coordinates, base 10, of the last computed point. `None` for
    /// the point at infinity.
    pub final_point:      Option<(String, String)>,
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Duration: {:?}", self.average_duration)?;
        write!(f, "Average Cycle: {}", self.average_cycles)
    }
}

/// Mean of `total` over `n` samples, truncated to whole nanoseconds.
fn mean_duration(total: Duration, n: usize) -> Duration {
    let nanos = total.as_nanos() / n as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}

/// Run `config.iterations` timed multiplications with the point type `P`.
/// Iteration `i` uses the scalar at `i mod scalars.len()`. Scalars are
/// converted to the library's own type before timing starts.
pub fn run_backend<P: EllipticCurvePoint, C: CycleCounter>(
    scalars: &ScalarSet,
    config: &BenchConfig,
    counter: &mut C,
) -> Result<BenchReport, BenchError> {
    if config.iterations == 0 {
        return Err(BenchError::ZeroIterations);
    }
    info!(
        "Running {} {:?} multiplications on {}.",
        config.iterations,
        config.base_mode,
        P::NAME
    );
    let generator = P::generator()?;
    let prepared: Vec<P::Scalar> = scalars.iter().map(P::prepare_scalar).collect();
    let mut point = generator.clone();
    let mut total_duration = Duration::ZERO;
    let mut total_cycles = 0u64;
    for i in 0..config.iterations {
        let scalar = &prepared[i % prepared.len()];
        let start = Instant::now();
        let start_cycles = counter.start();
        match config.base_mode {
            BaseMode::Chained => point = point.scalar_multiply(scalar),
            BaseMode::Fixed => generator.scalar_multiply_into(scalar, &mut point),
        }
        let end_cycles = counter.end();
        total_duration += start.elapsed();
        total_cycles = total_cycles.wrapping_add(end_cycles.wrapping_sub(start_cycles));
        std::hint::black_box(&point);
    }
    info!("Finished {}.", P::NAME);
    debug!(
        "{}: total duration {:?}, total cycles {}.",
        P::NAME,
        total_duration,
        total_cycles
    );
    let final_point = point
        .affine_coordinates()
        .map(|(x, y)| (x.to_str_radix(10), y.to_str_radix(10)));
    Ok(BenchReport {
        backend: P::NAME,
        base_mode: config.base_mode,
        iterations: config.iterations,
        total_duration,
        total_cycles,
        average_duration: mean_duration(total_duration, config.iterations),
        average_cycles: total_cycles / config.iterations as u64,
        final_point,
    })
}

/// Run every configured backend, one after the other, in the configured order.
pub fn run_all<C: CycleCounter>(
    scalars: &ScalarSet,
    config: &BenchConfig,
    counter: &mut C,
) -> Result<Vec<BenchReport>, BenchError> {
    config
        .backends
        .iter()
        .map(|backend| match backend {
            Backend::Ark => run_backend::<ArkG1, _>(scalars, config, counter),
            Backend::Zk => run_backend::<ZkG1, _>(scalars, config, counter),
        })
        .collect()
}

/// Check that all reports that ran the same workload ended on the same point.
/// Only meaningful for real curve backends.
pub fn cross_check(reports: &[BenchReport]) -> Result<(), BenchError> {
    for (i, a) in reports.iter().enumerate() {
        for b in &reports[i + 1..] {
            let same_workload = a.base_mode == b.base_mode && a.iterations == b.iterations;
            if same_workload && a.final_point != b.final_point {
                return Err(BenchError::BackendMismatch {
                    first:  a.backend.to_owned(),
                    second: b.backend.to_owned(),
                });
            }
        }
    }
    Ok(())
}
