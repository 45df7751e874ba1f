//! Timing several algorithms on the same input and checking that they agree.
//!
//! Every algorithm in this crate is a pure function of `n`, so running them
//! side by side needs no coordination beyond collecting the results.

use crate::algorithm::Algorithm;
use crate::error::{check_argument, Error};
use log::{debug, info};
use std::error;
use std::fmt::{self, Display};
use std::result;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// How [`compare`] schedules the algorithms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// One after another on the calling thread.
    Sequential,
    /// Each algorithm on its own rayon task. Without the `parallel` feature
    /// this behaves like `Sequential`.
    #[default]
    Parallel,
}

/// How long one algorithm took.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Timing {
    /// The algorithm that ran.
    pub algorithm: Algorithm,
    /// Wall-clock time spent computing, excluding validation of the other
    /// results.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "elapsed_ms", serialize_with = "serialize_millis")
    )]
    pub elapsed: Duration,
    /// Number of decimal digits produced.
    pub digits: usize,
}

#[cfg(feature = "serde")]
fn serialize_millis<S>(elapsed: &Duration, serializer: S) -> result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// The agreed value of `n!` and the time every algorithm took to get there.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    n: u64,
    #[cfg_attr(feature = "serde", serde(skip))]
    value: String,
    timings: Vec<Timing>,
}

impl Report {
    /// The input all algorithms were run on.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// The decimal value of `n!` every algorithm agreed on.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Timings in the order the algorithms were requested.
    pub fn timings(&self) -> &[Timing] {
        &self.timings
    }

    /// The quickest algorithm.
    pub fn fastest(&self) -> Option<&Timing> {
        self.timings.iter().min_by_key(|timing| timing.elapsed)
    }
}

impl Display for Report {
    /// One `name: millis ms` line per algorithm.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for timing in &self.timings {
            writeln!(
                f,
                "{}: {} ms",
                timing.algorithm,
                timing.elapsed.as_millis()
            )?;
        }
        Ok(())
    }
}

/// Why a comparison did not produce a [`Report`].
#[derive(Debug)]
pub enum CompareError {
    /// `n` was rejected before any algorithm ran.
    Argument(Error),
    /// Two algorithms produced different values.
    Mismatch {
        /// The first algorithm to finish, whose value the others are held to.
        expected: Algorithm,
        /// The algorithm that disagreed with it.
        found: Algorithm,
    },
    /// There was nothing to compare.
    Empty,
}

impl Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CompareError::Argument(err) => Display::fmt(err, f),
            CompareError::Mismatch { expected, found } => {
                write!(f, "`{}` disagrees with `{}`", found, expected)
            }
            CompareError::Empty => f.write_str("no algorithms to compare"),
        }
    }
}

impl error::Error for CompareError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            CompareError::Argument(err) => Some(err),
            CompareError::Mismatch { .. } | CompareError::Empty => None,
        }
    }
}

impl From<Error> for CompareError {
    fn from(err: Error) -> Self {
        CompareError::Argument(err)
    }
}

struct Run {
    algorithm: Algorithm,
    elapsed: Duration,
    output: crate::Result<String>,
}

fn run(algorithm: Algorithm, n: i64) -> Run {
    let start = Instant::now();
    let output = algorithm.compute(n);
    let elapsed = start.elapsed();
    debug!("{}: {}! in {:?}", algorithm, n, elapsed);
    Run {
        algorithm,
        elapsed,
        output,
    }
}

#[cfg(feature = "parallel")]
fn run_all(n: i64, algorithms: &[Algorithm], mode: Mode) -> Vec<Run> {
    match mode {
        Mode::Sequential => algorithms.iter().map(|&a| run(a, n)).collect(),
        Mode::Parallel => algorithms.par_iter().map(|&a| run(a, n)).collect(),
    }
}

#[cfg(not(feature = "parallel"))]
fn run_all(n: i64, algorithms: &[Algorithm], mode: Mode) -> Vec<Run> {
    if mode == Mode::Parallel {
        debug!("built without the `parallel` feature, running sequentially");
    }
    algorithms.iter().map(|&a| run(a, n)).collect()
}

/// Checks every output against the first one and collects the timings.
fn collate(n: u64, runs: Vec<Run>) -> result::Result<Report, CompareError> {
    let mut expected: Option<(Algorithm, String)> = None;
    let mut timings = Vec::with_capacity(runs.len());

    for run in runs {
        let output = run.output?;
        timings.push(Timing {
            algorithm: run.algorithm,
            elapsed: run.elapsed,
            digits: output.len(),
        });
        match &expected {
            None => expected = Some((run.algorithm, output)),
            Some((first, value)) => {
                if *value != output {
                    return Err(CompareError::Mismatch {
                        expected: *first,
                        found: run.algorithm,
                    });
                }
            }
        }
    }

    match expected {
        Some((_, value)) => Ok(Report { n, value, timings }),
        None => Err(CompareError::Empty),
    }
}

/// Runs each of `algorithms` once on `n`, timing them and checking that
/// they all produce the same value.
///
/// ```
/// use bigfact::{compare, Algorithm, Mode};
///
/// let report = compare(25, &Algorithm::ALL, Mode::Sequential).unwrap();
/// assert_eq!(report.value(), "15511210043330985984000000");
/// assert_eq!(report.timings().len(), 5);
/// ```
pub fn compare(
    n: i64,
    algorithms: &[Algorithm],
    mode: Mode,
) -> result::Result<Report, CompareError> {
    if algorithms.is_empty() {
        return Err(CompareError::Empty);
    }
    let checked = check_argument(n)?;

    info!(
        "computing {}! with {} algorithm(s), {:?}",
        n,
        algorithms.len(),
        mode
    );
    let report = collate(checked, run_all(n, algorithms, mode))?;
    if let Some(fastest) = report.fastest() {
        debug!("fastest for {}!: {}", n, fastest.algorithm);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake(algorithm: Algorithm, output: &str) -> Run {
        Run {
            algorithm,
            elapsed: Duration::from_millis(3),
            output: Ok(output.to_owned()),
        }
    }

    #[test]
    fn collate_test() {
        let runs = vec![
            fake(Algorithm::LongMultiplication, "120"),
            fake(Algorithm::Prime, "120"),
        ];
        let report = collate(5, runs).unwrap();
        assert_eq!(report.n(), 5);
        assert_eq!(report.value(), "120");
        assert_eq!(report.timings().len(), 2);
        assert_eq!(report.timings()[1].algorithm, Algorithm::Prime);
        assert_eq!(report.timings()[1].digits, 3);
        assert_eq!(report.to_string(), "long-multiplication: 3 ms\nprime: 3 ms\n");
    }

    #[test]
    fn mismatch_test() {
        let runs = vec![
            fake(Algorithm::LongMultiplication, "120"),
            fake(Algorithm::BinarySplit, "120"),
            fake(Algorithm::Moessner, "121"),
        ];
        match collate(5, runs) {
            Err(CompareError::Mismatch { expected, found }) => {
                assert_eq!(expected, Algorithm::LongMultiplication);
                assert_eq!(found, Algorithm::Moessner);
            }
            other => panic!("expected a mismatch, got {:?}", other),
        }
    }

    #[test]
    fn fastest_test() {
        let mut slow = fake(Algorithm::Moessner, "6");
        slow.elapsed = Duration::from_secs(1);
        let report = collate(3, vec![slow, fake(Algorithm::Prime, "6")]).unwrap();
        assert_eq!(report.fastest().unwrap().algorithm, Algorithm::Prime);
    }

    #[test]
    fn error_test() {
        let err = compare(-2, &Algorithm::ALL, Mode::Sequential).unwrap_err();
        assert_eq!(err.to_string(), "factorial: n has to be >= 0, but was -2");
        assert!(error::Error::source(&err).is_some());

        let err = compare(5, &[], Mode::Parallel).unwrap_err();
        assert_eq!(err.to_string(), "no algorithms to compare");

        let err = CompareError::Mismatch {
            expected: Algorithm::Prime,
            found: Algorithm::Moessner,
        };
        assert_eq!(err.to_string(), "`moessner` disagrees with `prime`");
        assert!(error::Error::source(&err).is_none());
    }

    #[test]
    fn compare_test() {
        for mode in [Mode::Sequential, Mode::Parallel] {
            let report = compare(40, &Algorithm::ALL, mode).unwrap();
            assert_eq!(
                report.value(),
                "815915283247897734345611269596115894272000000000"
            );
            let order: Vec<Algorithm> = report.timings().iter().map(|t| t.algorithm).collect();
            assert_eq!(order, Algorithm::ALL);
            assert!(report.timings().iter().all(|t| t.digits == 48));
        }
    }
}
