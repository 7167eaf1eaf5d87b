use crate::testing::{Alternative, TTestType, TestResult};

pub mod nonparametric;

pub mod parametric;

pub mod proportion;

/// Two-sample comparisons as methods on the first sample.
///
/// Both tests are total over slices: degenerate inputs (too few observations,
/// zero variance) produce a null result rather than an error.
pub trait TwoSampleTests {
    fn t_test(
        &self,
        other: &Self,
        test_type: TTestType,
        alternative: Alternative,
    ) -> TestResult<f64>;

    fn mann_whitney(&self, other: &Self, alternative: Alternative) -> TestResult<f64>;
}

impl TwoSampleTests for [f64] {
    fn t_test(
        &self,
        other: &Self,
        test_type: TTestType,
        alternative: Alternative,
    ) -> TestResult<f64> {
        parametric::t_test(self, other, test_type, alternative)
    }

    fn mann_whitney(&self, other: &Self, alternative: Alternative) -> TestResult<f64> {
        nonparametric::mann_whitney(self, other, alternative)
    }
}
