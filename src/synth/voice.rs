//! Voice trait for continuously sounding generators

/// A sustained tone whose pitch and level glide between targets
pub trait Voice: Send + Sync {
    /// Glide toward a new pitch and level
    fn retarget(&mut self, frequency: f64, amplitude: f64);

    /// Fade to silence
    fn release(&mut self);

    /// False once a released voice has fully faded
    fn is_sounding(&self) -> bool;

    /// Pitch the voice is heading toward, in Hz
    fn frequency(&self) -> f64;

    /// Level the voice is heading toward
    fn amplitude(&self) -> f64;

    /// Generate the next sample
    fn process(&mut self) -> f64;
}
