use ndarray::Array1;

use crate::profile::FrequencyProfile;

// The reference profile's key order defines the vector positions; a key the
// query never saw contributes 0.0. Making the alignment explicit here keeps
// the default-fill behavior testable instead of relying on map iteration.
pub(crate) fn aligned_vectors(
    reference: &FrequencyProfile,
    query: &FrequencyProfile,
) -> (Array1<f64>, Array1<f64>) {
    let mut reference_values = Vec::with_capacity(reference.len());
    let mut query_values = Vec::with_capacity(reference.len());
    for (ngram, frequency) in reference.iter() {
        reference_values.push(frequency);
        query_values.push(query.frequency(ngram).unwrap_or(0.0));
    }
    (Array1::from(reference_values), Array1::from(query_values))
}

// Product-moment correlation of two equal-length vectors. Returns NaN when
// undefined: empty or mismatched vectors, or either vector constant.
pub(crate) fn pearson_correlation(x: &Array1<f64>, y: &Array1<f64>) -> f64 {
    let len = x.len();
    if len == 0 || len != y.len() {
        return f64::NAN;
    }
    let n = len as f64;
    let mean_x = x.sum() / n;
    let mean_y = y.sum() / n;
    let dx = x - mean_x;
    let dy = y - mean_y;
    let covariance = dx.dot(&dy);
    let denominator = (dx.dot(&dx) * dy.dot(&dy)).sqrt();
    if denominator <= f64::EPSILON {
        return f64::NAN;
    }
    covariance / denominator
}
