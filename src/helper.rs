pub fn decibels(x: f64) -> f64 {
    10. * x.log10()
}

// Converts a dB power-gain quantity to a linear field amplitude ratio.
pub fn db_to_amplitude(db: f64) -> f64 {
    10f64.powf(db / 20.)
}
