use anyhow::Context;
use log::{info, warn};
use scalar_mul_bench::{
    cross_check, run_all, Backend, BaseMode, BenchConfig, ScalarSet, Tsc, DEFAULT_ITERATIONS,
};
use std::{fs::File, io::BufWriter, path::PathBuf};
use structopt::{clap::AppSettings, StructOpt};

/// Structure used to receive the correct command line arguments.
#[derive(Debug, StructOpt)]
#[structopt(about = "Compare BLS12-381 G1 scalar multiplication across libraries.")]
struct ScalarMulBenchConfiguration {
    #[structopt(
        long = "scalars",
        help = "File with whitespace separated decimal scalars. The built-in data set of 1000 \
                scalars is used if not given.",
        env = "BENCH_SCALARS"
    )]
    scalars_file: Option<PathBuf>,
    #[structopt(
        long = "iterations",
        help = "Number of multiplications per library. Defaults to 1000.",
        env = "BENCH_ITERATIONS"
    )]
    iterations:   Option<usize>,
    #[structopt(
        long = "backend",
        help = "Library to benchmark, 'ark' or 'zk'. Can be repeated; libraries run in the \
                given order. Defaults to all of them."
    )]
    backends:     Vec<Backend>,
    #[structopt(
        long = "base-mode",
        help = "'chained' feeds each result into the next multiplication, 'fixed' always \
                multiplies the generator.",
        default_value = "chained"
    )]
    base_mode:    BaseMode,
    #[structopt(
        long = "verify",
        help = "Fail if the libraries do not end on the same point."
    )]
    verify:       bool,
    #[structopt(long = "json-out", help = "Also write the reports to this file as JSON.")]
    json_out:     Option<PathBuf>,
}

impl ScalarMulBenchConfiguration {
    fn bench_config(&self) -> BenchConfig {
        BenchConfig {
            iterations: self.iterations.unwrap_or(DEFAULT_ITERATIONS),
            base_mode:  self.base_mode,
            backends:   if self.backends.is_empty() {
                Backend::ALL.to_vec()
            } else {
                self.backends.clone()
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let app = ScalarMulBenchConfiguration::clap().global_setting(AppSettings::ColoredHelp);
    let matches = app.get_matches();
    let opt = ScalarMulBenchConfiguration::from_clap(&matches);

    let scalars = match &opt.scalars_file {
        Some(path) => ScalarSet::from_file(path)
            .with_context(|| format!("Could not load scalars from {}.", path.display()))?,
        None => ScalarSet::bench_data().context("Could not load the built-in scalars.")?,
    };
    info!("Loaded {} scalars.", scalars.len());
    if !Tsc::SUPPORTED {
        warn!("No cycle counter on this target, cycle averages will be 0.");
    }

    let config = opt.bench_config();
    let names: Vec<&str> = config.backends.iter().map(|b| b.name()).collect();
    info!("Benchmarking, in order: {}.", names.join(", "));
    let mut counter = Tsc;
    let reports = run_all(&scalars, &config, &mut counter)?;
    for report in &reports {
        println!("{}", report);
    }

    if let Some(path) = &opt.json_out {
        let file = File::create(path)
            .with_context(|| format!("Could not create {}.", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &reports)
            .context("Could not write the JSON report.")?;
        info!("Reports written to {}.", path.display());
    }

    match cross_check(&reports) {
        Ok(()) if reports.len() > 1 => info!("All libraries ended on the same point."),
        Ok(()) => {}
        Err(e) if opt.verify => return Err(e.into()),
        Err(e) => warn!("{}", e),
    }
    Ok(())
}
