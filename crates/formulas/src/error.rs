//! Error taxonomy shared by every formula, plus the input guards that raise it.

use phys_symbolic::SolveError;
use thiserror::Error;

/// Reasons a formula declines to produce a value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormulaError {
    /// The input combination lies outside the formula's physical domain.
    #[error("{formula}: {reason}")]
    DomainViolation {
        formula: &'static str,
        reason: String,
    },
    /// A denominator evaluates to exactly zero.
    #[error("{formula}: {quantity} is zero, the result is singular")]
    SingularValue {
        formula: &'static str,
        quantity: &'static str,
    },
    /// A caller-supplied value is outside its accepted range.
    #[error("{parameter} = {value} is out of range (expected {expected})")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl FormulaError {
    /// True for errors the presentation layer shows as a warning instead of a value.
    pub fn is_domain_or_singular(&self) -> bool {
        matches!(
            self,
            FormulaError::DomainViolation { .. } | FormulaError::SingularValue { .. }
        )
    }

    pub(crate) fn domain(formula: &'static str, reason: impl Into<String>) -> Self {
        FormulaError::DomainViolation {
            formula,
            reason: reason.into(),
        }
    }
}

impl From<SolveError> for FormulaError {
    fn from(err: SolveError) -> Self {
        match err {
            SolveError::ZeroGravity => FormulaError::SingularValue {
                formula: "projectile motion",
                quantity: "gravity",
            },
            SolveError::InvalidInput { name, value } => FormulaError::OutOfRange {
                parameter: name,
                value,
                expected: "a finite non-negative value",
            },
        }
    }
}

pub(crate) fn finite(parameter: &'static str, value: f64) -> Result<f64, FormulaError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FormulaError::OutOfRange {
            parameter,
            value,
            expected: "a finite value",
        })
    }
}

pub(crate) fn non_negative(parameter: &'static str, value: f64) -> Result<f64, FormulaError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(FormulaError::OutOfRange {
            parameter,
            value,
            expected: ">= 0",
        })
    }
}

pub(crate) fn positive(parameter: &'static str, value: f64) -> Result<f64, FormulaError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FormulaError::OutOfRange {
            parameter,
            value,
            expected: "> 0",
        })
    }
}

/// A quantity that divides and must be strictly positive.
pub(crate) fn denominator(
    formula: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64, FormulaError> {
    if value == 0.0 {
        return Err(FormulaError::SingularValue {
            formula,
            quantity: parameter,
        });
    }
    positive(parameter, value)
}

/// A signed quantity that divides and must be non-zero.
pub(crate) fn nonzero(
    formula: &'static str,
    parameter: &'static str,
    value: f64,
) -> Result<f64, FormulaError> {
    finite(parameter, value)?;
    if value == 0.0 {
        return Err(FormulaError::SingularValue {
            formula,
            quantity: parameter,
        });
    }
    Ok(value)
}

pub(crate) fn point_count(points: usize) -> Result<usize, FormulaError> {
    if points == 0 {
        return Err(FormulaError::OutOfRange {
            parameter: "points",
            value: 0.0,
            expected: "at least one sample",
        });
    }
    Ok(points)
}
