//! Analog inputs for the ADS1x15 analog-to-digital converter family.
//!
//! An [AnalogIn] exposes one pin, or one supported pin pair, of an ADS1x15 as a 16-bit value and
//! as a voltage. Conversions themselves are performed by the ADC driver through the [Ads1x15]
//! trait.
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.
#![cfg_attr(not(test), no_std)]
#![deny(warnings)]

pub mod adc;
pub mod analog_in;
pub mod channel;
mod error;
pub mod gain;
pub mod settings;

pub use adc::{Ads1x15, SharedError};
pub use analog_in::{AnalogIn, Status};
pub use channel::{Selector, DIFFERENTIAL_PAIRS};
pub use error::Error;
pub use gain::Gain;
pub use settings::PinSettings;
