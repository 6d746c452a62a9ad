use num::complex::Complex64;

use crate::{
    field::ThetaPhi,
    model::{AntennaModel, Beamwidth, DEFAULT_PHASE},
};

pub const DEFAULT_VERTICAL_HALF_POWER_BEAM_WIDTH: f64 = 10.;
pub const DEFAULT_HORIZONTAL_HALF_POWER_BEAM_WIDTH: f64 = 10.;

// Antenna pattern approximated by a separable gaussian roll-off in each
// angular axis, peaking at boresight (theta = 90 degrees, phi = 0).
#[derive(Clone, Copy, Debug)]
pub struct GaussianAntennaModel {
    beamwidth: Beamwidth,
}

impl GaussianAntennaModel {
    pub fn builder() -> Builder {
        Builder {
            beamwidth: Beamwidth {
                vertical: DEFAULT_VERTICAL_HALF_POWER_BEAM_WIDTH,
                horizontal: DEFAULT_HORIZONTAL_HALF_POWER_BEAM_WIDTH,
            },
        }
    }
}

impl AntennaModel for GaussianAntennaModel {
    fn evaluate_angle(&self, angle: ThetaPhi) -> Complex64 {
        // Scaled so the gain drops to half power at half the beam width off
        // axis.
        let k = -2. * f64::ln(2.);
        let r = f64::exp(k * (angle.phi_degrees() / self.beamwidth.horizontal).powi(2))
            * f64::exp(k * ((angle.theta_degrees() - 90.) / self.beamwidth.vertical).powi(2));
        Complex64::from_polar(r, DEFAULT_PHASE)
    }

    fn vertical_half_power_beam_width(&self) -> f64 {
        self.beamwidth.vertical
    }

    fn horizontal_half_power_beam_width(&self) -> f64 {
        self.beamwidth.horizontal
    }
}

pub struct Builder {
    beamwidth: Beamwidth,
}

impl Builder {
    pub fn vertical_half_power_beam_width(mut self, hpbw: f64) -> Builder {
        self.beamwidth.vertical = hpbw;
        self
    }

    pub fn horizontal_half_power_beam_width(mut self, hpbw: f64) -> Builder {
        self.beamwidth.horizontal = hpbw;
        self
    }

    pub fn build(self) -> GaussianAntennaModel {
        GaussianAntennaModel {
            beamwidth: self.beamwidth,
        }
    }
}
