use nalgebra::Vector3;
use ndarray::Array1;
use num::complex::Complex64;

use crate::field::{ElectricField, Field, FieldType, ThetaPhi};

pub mod gaussian;
pub mod nr;

pub use gaussian::GaussianAntennaModel;
pub use nr::NrAntennaModel;

// Phase of every sample the closed-form models produce.
pub const DEFAULT_PHASE: f64 = 0.;

// The half power beam width pair shared by the closed-form models, in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Beamwidth {
    pub vertical: f64,
    pub horizontal: f64,
}

// A parametric antenna gain pattern over the unit sphere.
// Evaluation is pure: a model never validates its inputs, so degenerate
// parameters (zero beam width) propagate as IEEE-754 specials.
pub trait AntennaModel {
    fn evaluate_angle(&self, angle: ThetaPhi) -> Complex64;
    fn vertical_half_power_beam_width(&self) -> f64;
    fn horizontal_half_power_beam_width(&self) -> f64;

    fn evaluate_vec(&self, vec: Vector3<f64>) -> Complex64 {
        self.evaluate_angle(ThetaPhi::from_vector(vec))
    }
}

pub trait AntennaModelHelper {
    fn evaluate_field(&self, angles: &[ThetaPhi]) -> Field;
}

impl<T: AntennaModel> AntennaModelHelper for T {
    // Evaluates the model at each direction, in input order, packaging the
    // results as a far-field relative gain channel.
    fn evaluate_field(&self, angles: &[ThetaPhi]) -> Field {
        let samples: Array1<Complex64> = angles.iter().map(|&a| self.evaluate_angle(a)).collect();
        Field::new(
            FieldType::FarField,
            angles.to_vec(),
            ElectricField::RelativeGain,
            samples,
        )
    }
}
