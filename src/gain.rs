//! ADS1x15 programmable gain amplifier ranges
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.

// Multipliers are compared with a tolerance so that a computed 2/3 still matches.
const MULTIPLIER_TOLERANCE: f32 = 1e-4;

/// The gain settings of the programmable gain amplifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Gain {
    TwoThirds,
    One,
    Two,
    Four,
    Eight,
    Sixteen,
}

impl Gain {
    /// All supported gains, ordered by increasing multiplier.
    pub const ALL: [Gain; 6] = [
        Gain::TwoThirds,
        Gain::One,
        Gain::Two,
        Gain::Four,
        Gain::Eight,
        Gain::Sixteen,
    ];

    /// The gain multiplier applied to the input signal.
    pub fn multiplier(&self) -> f32 {
        match self {
            Gain::TwoThirds => 2.0 / 3.0,
            Gain::One => 1.0,
            Gain::Two => 2.0,
            Gain::Four => 4.0,
            Gain::Eight => 8.0,
            Gain::Sixteen => 16.0,
        }
    }

    /// Get the full-scale input range of the ADC at this gain.
    ///
    /// # Returns
    /// The voltage corresponding to a full-scale positive code.
    pub fn full_scale(&self) -> f32 {
        match self {
            Gain::TwoThirds => 6.144,
            Gain::One => 4.096,
            Gain::Two => 2.048,
            Gain::Four => 1.024,
            Gain::Eight => 0.512,
            Gain::Sixteen => 0.256,
        }
    }

    /// Find the gain setting for a multiplier.
    ///
    /// # Args
    /// * `multiplier` - The gain multiplier reported by the ADC.
    ///
    /// # Returns
    /// The gain, or `None` if the multiplier is not a supported setting.
    pub fn from_multiplier(multiplier: f32) -> Option<Self> {
        Self::ALL.iter().copied().find(|gain| {
            let delta = gain.multiplier() - multiplier;
            delta < MULTIPLIER_TOLERANCE && delta > -MULTIPLIER_TOLERANCE
        })
    }
}

impl TryFrom<f32> for Gain {
    type Error = ();

    fn try_from(multiplier: f32) -> Result<Self, ()> {
        Gain::from_multiplier(multiplier).ok_or(())
    }
}
