//! Mapper trait

/// A scalar transfer function from one modality's range into another's
pub trait Mapper: Send + Sync {
    /// Short label used in debug output
    fn label(&self) -> &str;

    /// Map an input value to an output value
    fn map(&self, input: f64) -> f64;

    /// Map every value of a slice
    fn map_all(&self, inputs: &[f64]) -> Vec<f64> {
        inputs.iter().map(|&v| self.map(v)).collect()
    }
}
