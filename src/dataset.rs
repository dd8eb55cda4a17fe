//! Data structures and methods for dealing with datasets.

/// A single labeled example within a dataset, mapping an input vector to a
/// target output vector.
#[derive(Debug, Clone)]
pub struct LabeledExample<const M: usize, const N: usize> {
    /// The input features.
    pub inputs: [f64; M],
    /// The expected outputs.
    pub targets: [f64; N],
}

/// A per-feature scaling that maps a raw record into a bounded range by
/// dividing each feature by a fixed constant.
#[derive(Debug, Clone, Copy)]
pub struct FeatureScaling<const M: usize> {
    divisors: [f64; M],
}

impl<const M: usize> FeatureScaling<M> {
    /// Create a scaling from one divisor per feature.
    pub fn new(divisors: [f64; M]) -> Self {
        Self { divisors }
    }

    /// Scale a raw record, returning the normalized feature vector.
    pub fn apply(&self, raw: &[f64; M]) -> [f64; M] {
        let mut scaled = [0.0; M];
        for (out, (x, d)) in scaled.iter_mut().zip(raw.iter().zip(&self.divisors)) {
            *out = x / d;
        }
        scaled
    }
}
