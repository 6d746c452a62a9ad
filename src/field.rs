use nalgebra::Vector3;
use ndarray::Array1;
use num::complex::Complex64;

// A direction on the unit sphere in the antenna's local frame.
// Theta is measured from the positive z axis, phi from the positive x axis in
// the xy plane. Angles are stored in radians; boresight sits at theta = 90
// degrees, phi = 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThetaPhi {
    theta: f64,
    phi: f64,
}

impl ThetaPhi {
    pub fn from_radians(theta: f64, phi: f64) -> ThetaPhi {
        ThetaPhi { theta, phi }
    }

    pub fn from_degrees(theta: f64, phi: f64) -> ThetaPhi {
        ThetaPhi::from_radians(theta.to_radians(), phi.to_radians())
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    pub fn theta_degrees(&self) -> f64 {
        self.theta.to_degrees()
    }

    pub fn phi_degrees(&self) -> f64 {
        self.phi.to_degrees()
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(
            self.theta.sin() * self.phi.cos(),
            self.theta.sin() * self.phi.sin(),
            self.theta.cos(),
        )
    }

    pub fn from_vector(vec: Vector3<f64>) -> ThetaPhi {
        let theta = f64::acos(vec[2] / vec.magnitude());
        let phi = f64::atan2(vec[1], vec[0]);
        ThetaPhi { theta, phi }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    FarField,
    NearField,
}

// Names the quantity a sample sequence holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElectricField {
    Theta,
    Phi,
    RelativeGain,
}

// An ordered sequence of directions paired one to one with an ordered channel
// of complex samples.
#[derive(Clone, Debug)]
pub struct Field {
    field_type: FieldType,
    theta_phi_list: Vec<ThetaPhi>,
    electric_field: ElectricField,
    samples: Array1<Complex64>,
}

impl Field {
    pub fn new(
        field_type: FieldType,
        theta_phi_list: Vec<ThetaPhi>,
        electric_field: ElectricField,
        samples: Array1<Complex64>,
    ) -> Field {
        assert!(theta_phi_list.len() == samples.len());
        Field {
            field_type,
            theta_phi_list,
            electric_field,
            samples,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn theta_phi_list(&self) -> &[ThetaPhi] {
        &self.theta_phi_list
    }

    pub fn electric_field(&self) -> ElectricField {
        self.electric_field
    }

    pub fn samples(&self) -> &Array1<Complex64> {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.theta_phi_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta_phi_list.is_empty()
    }
}
