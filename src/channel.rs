//! ADS1x15 input multiplexer selection
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.

/// The (positive, negative) pin pairs the input multiplexer can measure differentially.
///
/// # Note
/// The index of a pair in this table is the channel code the ADC expects for it.
pub const DIFFERENTIAL_PAIRS: [(u8, u8); 4] = [(0, 1), (0, 3), (1, 3), (2, 3)];

/// A resolved input multiplexer selection.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Selector {
    code: u8,
    differential: bool,
}

impl Selector {
    /// Select a single pin measured against ground.
    ///
    /// # Args
    /// * `pin` - The analog input pin. Passed to the ADC unchanged.
    pub const fn single_ended(pin: u8) -> Self {
        Self {
            code: pin,
            differential: false,
        }
    }

    /// Select the difference between two pins.
    ///
    /// # Args
    /// * `positive` - The pin on the positive side of the measurement.
    /// * `negative` - The pin on the negative side of the measurement.
    ///
    /// # Returns
    /// The selection, or `None` if the pair is not in [DIFFERENTIAL_PAIRS].
    pub const fn differential(positive: u8, negative: u8) -> Option<Self> {
        let code = match (positive, negative) {
            (0, 1) => 0,
            (0, 3) => 1,
            (1, 3) => 2,
            (2, 3) => 3,
            _ => return None,
        };

        Some(Self {
            code,
            differential: true,
        })
    }

    /// Select a pin, or a pin pair when a negative pin is provided.
    pub const fn new(positive: u8, negative: Option<u8>) -> Option<Self> {
        match negative {
            Some(negative) => Self::differential(positive, negative),
            None => Some(Self::single_ended(positive)),
        }
    }

    /// The channel code passed to the ADC.
    pub const fn code(&self) -> u8 {
        self.code
    }

    pub const fn is_differential(&self) -> bool {
        self.differential
    }
}
