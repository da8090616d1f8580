//! Error type definitions for ADS1x15 analog inputs
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.

use crate::channel::DIFFERENTIAL_PAIRS;

/// An enumeration of possible errors when reading an analog input.
///
/// # Note
/// `E` is the error type of the underlying ADC driver. Those errors are never inspected, only
/// carried back to the caller.
#[derive(Debug, Copy, Clone, PartialEq, serde::Serialize)]
pub enum Error<E> {
    /// A negative pin was requested that does not form a supported differential pair.
    InvalidConfiguration,

    /// The ADC reported a gain that has no full-scale reference voltage.
    UnsupportedGain,

    /// The ADC reported a resolution that cannot be normalized to 16 bits.
    InvalidResolution,

    /// The ADC driver failed to perform the conversion.
    Adc(E),
}

impl<E> Error<E> {
    /// Convert the ADC error type while keeping the error kind.
    ///
    /// # Args
    /// * `f` - The conversion applied to an `Adc` error.
    pub fn map_adc<F>(self, f: impl FnOnce(E) -> F) -> Error<F> {
        match self {
            Error::InvalidConfiguration => Error::InvalidConfiguration,
            Error::UnsupportedGain => Error::UnsupportedGain,
            Error::InvalidResolution => Error::InvalidResolution,
            Error::Adc(e) => Error::Adc(f(e)),
        }
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidConfiguration => {
                write!(f, "Differential channels must be one of: [")?;
                for (idx, (positive, negative)) in DIFFERENTIAL_PAIRS.iter().enumerate() {
                    if idx != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "({}, {})", positive, negative)?;
                }
                write!(f, "]")
            }
            Error::UnsupportedGain => write!(f, "Gain has no full-scale reference voltage"),
            Error::InvalidResolution => write!(f, "ADC resolution cannot be normalized"),
            Error::Adc(e) => write!(f, "ADC error: {:?}", e),
        }
    }
}
