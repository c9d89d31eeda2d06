//! Plot-data sampling for isotherm models.
//!
//! Samples a model's `Qe` at evenly spaced concentrations, maps each sample
//! through a pair of caller-supplied linearization transforms, and writes
//! the result as a two-column scientific-notation text file, the input
//! format expected by the usual external plotting tools.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use isorb_core::{Isotherm, IsothermError};

/// A scale transform applied to each sample, receiving `(qe, ce)`.
///
/// Linearized isotherm plots are built from transforms of both quantities,
/// e.g. `ln(1 + 1/Ce)²` on one axis against `−ln(Qe)` on the other.
pub type ScaleFn<'a> = &'a dyn Fn(f64, f64) -> f64;

/// Errors that can occur while sampling or writing plot data.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid sampling: {reason}")]
    InvalidSampling { reason: &'static str },

    #[error(transparent)]
    Isotherm(#[from] IsothermError),

    #[error("failed to write plot data")]
    Io(#[from] io::Error),
}

/// How to sample a model over a concentration range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    /// Number of evenly spaced sample points.
    pub points: usize,
    /// First sampled concentration.
    pub start: f64,
    /// Last sampled concentration.
    pub end: f64,
    /// Temperature forwarded to every evaluation.
    pub temperature: f64,
}

impl Sampling {
    /// Validates the point count and range.
    ///
    /// # Errors
    ///
    /// Returns an error message if fewer than two points are requested or
    /// the range is non-finite or reversed.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.points < 2 {
            return Err("at least two sample points are required");
        }
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err("sample range must be finite");
        }
        if self.start >= self.end {
            return Err("sample range must be increasing");
        }
        Ok(())
    }
}

/// Samples the model over the range and applies both scale transforms.
///
/// Spacing is `(end − start) / (points − 1)` and the range endpoints are
/// both sampled, yielding `points` rows of `[scaled_x, scaled_y]`.
///
/// # Errors
///
/// Returns an error if the sampling is invalid or any evaluation leaves the
/// model's domain.
pub fn sample_series(
    model: &dyn Isotherm,
    scale_x: ScaleFn<'_>,
    scale_y: ScaleFn<'_>,
    sampling: &Sampling,
) -> Result<Vec<[f64; 2]>, PlotError> {
    sampling
        .validate()
        .map_err(|reason| PlotError::InvalidSampling { reason })?;

    let spacing = (sampling.end - sampling.start) / (sampling.points - 1) as f64;
    let cutoff = sampling.end - 0.5 * spacing;
    let mut ce = sampling.start - spacing;
    let mut rows = Vec::with_capacity(sampling.points);

    loop {
        ce += spacing;
        let qe = model.qe(ce, sampling.temperature)?;
        rows.push([scale_x(qe, ce), scale_y(qe, ce)]);

        if ce >= cutoff {
            break;
        }
    }

    Ok(rows)
}

/// Samples the model and writes the series to a file.
///
/// One row per sample: both scaled values in scientific notation, separated
/// by whitespace, newline-terminated, no header.
///
/// # Errors
///
/// Same contract as [`sample_series`], plus any I/O failure.
pub fn write_series(
    model: &dyn Isotherm,
    path: impl AsRef<Path>,
    scale_x: ScaleFn<'_>,
    scale_y: ScaleFn<'_>,
    sampling: &Sampling,
) -> Result<(), PlotError> {
    let rows = sample_series(model, scale_x, scale_y, sampling)?;

    let mut output = BufWriter::new(File::create(path)?);
    for [x, y] in rows {
        writeln!(output, "{x:>15.6e} {y:>15.6e}")?;
    }
    output.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use approx::assert_relative_eq;

    use isorb_core::{CoefficientInfo, Coefficients, ErrorKind, ModelKind};

    /// Linear test model: `Qe = K1·Ce`, requiring `Ce > 0`.
    #[derive(Debug, Clone)]
    struct MockLinear {
        coefficients: Coefficients<1>,
    }

    impl MockLinear {
        fn new(k1: f64) -> Self {
            Self {
                coefficients: Coefficients::new([k1]),
            }
        }
    }

    impl Isotherm for MockLinear {
        fn kind(&self) -> ModelKind {
            ModelKind::Henry
        }

        fn qe(&self, ce: f64, _temperature: f64) -> Result<f64, IsothermError> {
            if ce <= 0.0 {
                return Err(IsothermError::new(ErrorKind::CeNotPositive, "MockLinear"));
            }
            Ok(self.coefficients.get(0) * ce)
        }

        fn coefficients(&self) -> &[f64] {
            self.coefficients.as_slice()
        }

        fn coefficient_info(&self) -> &'static [CoefficientInfo] {
            const INFO: [CoefficientInfo; 1] = [CoefficientInfo::new("K1", "slope")];
            &INFO
        }

        fn boxed_clone(&self) -> Box<dyn Isotherm> {
            Box::new(self.clone())
        }
    }

    fn identity_x() -> impl Fn(f64, f64) -> f64 {
        |_qe, ce| ce
    }

    fn identity_y() -> impl Fn(f64, f64) -> f64 {
        |qe, _ce| qe
    }

    #[test]
    fn samples_the_requested_number_of_points() {
        let model = MockLinear::new(3.0);
        let sampling = Sampling {
            points: 11,
            start: 1.0,
            end: 2.0,
            temperature: 0.0,
        };

        let rows = sample_series(&model, &identity_x(), &identity_y(), &sampling).unwrap();

        assert_eq!(rows.len(), 11);
        assert_relative_eq!(rows[0][0], 1.0, max_relative = 1e-12);
        assert_relative_eq!(rows[0][1], 3.0, max_relative = 1e-12);
        assert_relative_eq!(rows[10][0], 2.0, max_relative = 1e-12);
        assert_relative_eq!(rows[10][1], 6.0, max_relative = 1e-12);
    }

    #[test]
    fn applies_both_scale_transforms() {
        let model = MockLinear::new(2.0);
        let sampling = Sampling {
            points: 2,
            start: 1.0,
            end: 3.0,
            temperature: 0.0,
        };

        let scale_x = |_qe: f64, ce: f64| ce * ce;
        let scale_y = |qe: f64, _ce: f64| qe.ln();
        let rows = sample_series(&model, &scale_x, &scale_y, &sampling).unwrap();

        assert_relative_eq!(rows[0][0], 1.0);
        assert_relative_eq!(rows[0][1], 2.0_f64.ln());
        assert_relative_eq!(rows[1][0], 9.0);
        assert_relative_eq!(rows[1][1], 6.0_f64.ln());
    }

    #[test]
    fn rejects_degenerate_sampling() {
        let model = MockLinear::new(1.0);

        let too_few = Sampling {
            points: 1,
            start: 1.0,
            end: 2.0,
            temperature: 0.0,
        };
        assert!(matches!(
            sample_series(&model, &identity_x(), &identity_y(), &too_few),
            Err(PlotError::InvalidSampling { .. })
        ));

        let reversed = Sampling {
            points: 10,
            start: 2.0,
            end: 1.0,
            temperature: 0.0,
        };
        assert!(matches!(
            sample_series(&model, &identity_x(), &identity_y(), &reversed),
            Err(PlotError::InvalidSampling { .. })
        ));
    }

    #[test]
    fn propagates_domain_errors_from_the_model() {
        let model = MockLinear::new(1.0);
        let sampling = Sampling {
            points: 5,
            start: -1.0,
            end: 1.0,
            temperature: 0.0,
        };

        let result = sample_series(&model, &identity_x(), &identity_y(), &sampling);
        assert!(matches!(result, Err(PlotError::Isotherm(_))));
    }

    #[test]
    fn writes_one_row_per_sample() {
        let model = MockLinear::new(3.0);
        let sampling = Sampling {
            points: 5,
            start: 1.0,
            end: 5.0,
            temperature: 0.0,
        };
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("series.dat");

        write_series(&model, &path, &identity_x(), &identity_y(), &sampling).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);

        // Each row holds two parseable scientific-notation columns.
        for (i, line) in lines.iter().enumerate() {
            let fields: Vec<f64> = line
                .split_whitespace()
                .map(|field| field.parse().unwrap())
                .collect();
            assert_eq!(fields.len(), 2);
            assert_relative_eq!(fields[0], 1.0 + i as f64, max_relative = 1e-5);
            assert_relative_eq!(fields[1], 3.0 * (1.0 + i as f64), max_relative = 1e-5);
        }
        assert!(contents.ends_with('\n'));
    }
}
