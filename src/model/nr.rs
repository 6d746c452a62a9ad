use num::complex::Complex64;

use crate::{
    field::ThetaPhi,
    helper::db_to_amplitude,
    model::{AntennaModel, Beamwidth, DEFAULT_PHASE},
};

// Defaults as described in 3GPP TR 38.901 Table 7.3-1.
pub const DEFAULT_VERTICAL_HALF_POWER_BEAM_WIDTH: f64 = 65.;
pub const DEFAULT_HORIZONTAL_HALF_POWER_BEAM_WIDTH: f64 = 65.;
pub const DEFAULT_VERTICAL_SIDELOBE_ATTENUATION: f64 = 30.;
pub const DEFAULT_MAXIMUM_GAIN: f64 = 8.;
pub const DEFAULT_MAXIMUM_ATTENUATION: f64 = 30.;

// Polarization models as described in 3GPP TR 38.901 chapter 7.3.2.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolarizationModel {
    // Figure 7.3-4 and 7.3-5.
    Model2,
    // Figure 7.3-3.
    Model1,
}

impl PolarizationModel {
    pub fn model_value(&self) -> i32 {
        match self {
            PolarizationModel::Model2 => 2,
            PolarizationModel::Model1 => 1,
        }
    }
}

// Antenna pattern described in 3GPP TR 38.901 chapter 7.3: a quadratic
// attenuation in each angular axis, each clamped to its own floor, with the
// combined attenuation clamped once more against the maximum attenuation.
#[derive(Clone, Copy, Debug)]
pub struct NrAntennaModel {
    beamwidth: Beamwidth,
    vertical_sidelobe_attenuation: f64,
    maximum_gain: f64,
    maximum_attenuation: f64,
    polarization_model: PolarizationModel,
    polarization_slant_angle: f64,
}

impl NrAntennaModel {
    pub fn builder() -> Builder {
        Builder {
            beamwidth: Beamwidth {
                vertical: DEFAULT_VERTICAL_HALF_POWER_BEAM_WIDTH,
                horizontal: DEFAULT_HORIZONTAL_HALF_POWER_BEAM_WIDTH,
            },
            vertical_sidelobe_attenuation: DEFAULT_VERTICAL_SIDELOBE_ATTENUATION,
            maximum_gain: DEFAULT_MAXIMUM_GAIN,
            maximum_attenuation: DEFAULT_MAXIMUM_ATTENUATION,
            polarization_model: PolarizationModel::Model2,
            polarization_slant_angle: 0.,
        }
    }

    pub fn vertical_sidelobe_attenuation(&self) -> f64 {
        self.vertical_sidelobe_attenuation
    }

    pub fn maximum_gain(&self) -> f64 {
        self.maximum_gain
    }

    pub fn maximum_attenuation(&self) -> f64 {
        self.maximum_attenuation
    }

    // Selector only. The closed-form pattern above carries no polarization
    // decomposition; these describe how a caller intends to split the field.
    pub fn polarization_model(&self) -> PolarizationModel {
        self.polarization_model
    }

    pub fn polarization_slant_angle(&self) -> f64 {
        self.polarization_slant_angle
    }
}

// Per-axis attenuation, equations 7.3-1 and 7.3-2: quadratic in the off-axis
// angle, clamped to the given floor. Returned negated, as a negative dB gain.
fn attenuation(angle_deg: f64, hpbw: f64, floor: f64) -> f64 {
    let a = 12. * (angle_deg / hpbw).powi(2);
    clamp_negate(a, floor)
}

fn clamp_negate(value: f64, floor: f64) -> f64 {
    if value > floor {
        -floor
    } else {
        -value
    }
}

impl AntennaModel for NrAntennaModel {
    fn evaluate_angle(&self, angle: ThetaPhi) -> Complex64 {
        let A_v = attenuation(
            angle.theta_degrees() - 90.,
            self.beamwidth.vertical,
            self.vertical_sidelobe_attenuation,
        );
        let A_h = attenuation(
            angle.phi_degrees(),
            self.beamwidth.horizontal,
            self.maximum_attenuation,
        );
        // Equation 7.3-3; the summed attenuation is clamped once more.
        let r = db_to_amplitude(
            self.maximum_gain + clamp_negate(-(A_v + A_h), self.maximum_attenuation),
        );
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
    vertical_sidelobe_attenuation: f64,
    maximum_gain: f64,
    maximum_attenuation: f64,
    polarization_model: PolarizationModel,
    polarization_slant_angle: f64,
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

    pub fn vertical_sidelobe_attenuation(mut self, attenuation: f64) -> Builder {
        self.vertical_sidelobe_attenuation = attenuation;
        self
    }

    pub fn maximum_gain(mut self, gain: f64) -> Builder {
        self.maximum_gain = gain;
        self
    }

    pub fn maximum_attenuation(mut self, attenuation: f64) -> Builder {
        self.maximum_attenuation = attenuation;
        self
    }

    pub fn polarization_model(mut self, model: PolarizationModel) -> Builder {
        self.polarization_model = model;
        self
    }

    pub fn polarization_slant_angle(mut self, angle: f64) -> Builder {
        self.polarization_slant_angle = angle;
        self
    }

    pub fn build(self) -> NrAntennaModel {
        NrAntennaModel {
            beamwidth: self.beamwidth,
            vertical_sidelobe_attenuation: self.vertical_sidelobe_attenuation,
            maximum_gain: self.maximum_gain,
            maximum_attenuation: self.maximum_attenuation,
            polarization_model: self.polarization_model,
            polarization_slant_angle: self.polarization_slant_angle,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_builder_defaults() {
        let model = NrAntennaModel::builder().build();
        assert_eq!(
            model.vertical_half_power_beam_width(),
            DEFAULT_VERTICAL_HALF_POWER_BEAM_WIDTH
        );
        assert_eq!(
            model.horizontal_half_power_beam_width(),
            DEFAULT_HORIZONTAL_HALF_POWER_BEAM_WIDTH
        );
        assert_eq!(
            model.vertical_sidelobe_attenuation(),
            DEFAULT_VERTICAL_SIDELOBE_ATTENUATION
        );
        assert_eq!(model.maximum_gain(), DEFAULT_MAXIMUM_GAIN);
        assert_eq!(model.maximum_attenuation(), DEFAULT_MAXIMUM_ATTENUATION);
    }

    #[test]
    fn test_builder_overrides() {
        let model = NrAntennaModel::builder()
            .vertical_half_power_beam_width(30.)
            .horizontal_half_power_beam_width(50.)
            .vertical_sidelobe_attenuation(60.)
            .maximum_gain(20.)
            .maximum_attenuation(70.)
            .polarization_model(PolarizationModel::Model1)
            .polarization_slant_angle(45f64.to_radians())
            .build();
        assert_eq!(model.vertical_half_power_beam_width(), 30.);
        assert_eq!(model.horizontal_half_power_beam_width(), 50.);
        assert_eq!(model.vertical_sidelobe_attenuation(), 60.);
        assert_eq!(model.maximum_gain(), 20.);
        assert_eq!(model.maximum_attenuation(), 70.);
        assert_eq!(model.polarization_model(), PolarizationModel::Model1);
        assert_relative_eq!(model.polarization_slant_angle(), 45f64.to_radians());
    }

    #[test]
    fn test_polarization_model_values() {
        assert_eq!(PolarizationModel::Model1.model_value(), 1);
        assert_eq!(PolarizationModel::Model2.model_value(), 2);
    }

    #[test]
    fn test_boresight_gain_is_unity_without_maximum_gain() {
        let model = NrAntennaModel::builder().maximum_gain(0.).build();
        let gain = model.evaluate_angle(ThetaPhi::from_degrees(90., 0.));
        assert_eq!(gain.re, 1.);
        assert_eq!(gain.im, 0.);
    }

    #[test]
    fn test_boresight_gain_is_maximum_gain() {
        let model = NrAntennaModel::builder().build();
        let gain = model.evaluate_angle(ThetaPhi::from_degrees(90., 0.));
        assert_relative_eq!(gain.norm(), db_to_amplitude(DEFAULT_MAXIMUM_GAIN));
    }

    #[test]
    fn test_quadratic_roll_off_within_floors() {
        // Half a beam width off axis vertically: 12 * (32.5 / 65)^2 = 3 dB
        // of attenuation, well under both floors.
        let model = NrAntennaModel::builder().build();
        let gain = model.evaluate_angle(ThetaPhi::from_degrees(122.5, 0.));
        assert_relative_eq!(gain.norm(), db_to_amplitude(8. - 3.), epsilon = 1e-12);

        // Same off-axis angle horizontally gives the same attenuation.
        let gain = model.evaluate_angle(ThetaPhi::from_degrees(90., 32.5));
        assert_relative_eq!(gain.norm(), db_to_amplitude(8. - 3.), epsilon = 1e-12);

        // Off axis in both, the attenuations add.
        let gain = model.evaluate_angle(ThetaPhi::from_degrees(122.5, 32.5));
        assert_relative_eq!(gain.norm(), db_to_amplitude(8. - 6.), epsilon = 1e-12);
    }

    #[test]
    fn test_horizontal_attenuation_clamps_at_floor() {
        // 12 * (180 / 65)^2 = 92 dB raw, clamped to the 30 dB maximum.
        let model = NrAntennaModel::builder().build();
        let gain = model.evaluate_angle(ThetaPhi::from_degrees(90., 180.));
        assert_relative_eq!(gain.norm(), db_to_amplitude(8. - 30.), epsilon = 1e-12);
    }

    #[test]
    fn test_combined_attenuation_clamps_at_maximum() {
        // Vertical axis alone: 12 * (90 / 65)^2 = 23.0 dB, under the 30 dB
        // sidelobe floor. Combined with the clamped horizontal 30 dB the sum
        // is 53 dB, clamped back to the 30 dB maximum.
        let model = NrAntennaModel::builder().build();
        let gain = model.evaluate_angle(ThetaPhi::from_degrees(180., 180.));
        assert_relative_eq!(gain.norm(), db_to_amplitude(8. - 30.), epsilon = 1e-12);
    }

    #[test]
    fn test_attenuation_sub_formula() {
        assert_relative_eq!(attenuation(32.5, 65., 30.), -3.);
        assert_relative_eq!(attenuation(-32.5, 65., 30.), -3.);
        assert_relative_eq!(attenuation(180., 65., 30.), -30.);
        assert_relative_eq!(attenuation(0., 65., 30.), 0.);
    }
}
