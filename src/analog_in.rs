//! Single-ended and differential analog inputs of an ADS1x15
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.
use core::fmt::Write;

use heapless::String;

use crate::{adc::Ads1x15, channel::Selector, gain::Gain, settings::PinSettings, Error};

/// The code of a full-scale positive conversion once normalized to 16 bits.
const FULL_SCALE_CODE: f32 = 32767.0;

/// The capacity of a rendered status summary.
pub const SUMMARY_CAPACITY: usize = 96;

/// An analog input pin (or pin pair) of an ADS1x15.
///
/// # Note
/// Every measurement performs a fresh conversion through the ADC driver. The pin selection is
/// fixed at construction.
#[derive(Debug)]
pub struct AnalogIn<A> {
    adc: A,
    selector: Selector,
    positive: u8,
    negative: Option<u8>,
}

impl<A> AnalogIn<A>
where
    A: Ads1x15,
{
    /// Construct an analog input.
    ///
    /// # Args
    /// * `adc` - The ADC driver (or a shared handle to it) performing conversions.
    /// * `positive` - The measured pin.
    /// * `negative` - The reference pin for differential measurements. `None` measures `positive`
    ///   against ground.
    ///
    /// # Returns
    /// The input, or `Error::InvalidConfiguration` if `(positive, negative)` is not a supported
    /// differential pair.
    pub fn new(adc: A, positive: u8, negative: Option<u8>) -> Result<Self, Error<A::Error>> {
        let selector = Selector::new(positive, negative).ok_or(Error::InvalidConfiguration)?;

        log::debug!(
            "AIN{} mapped to channel {} (differential: {})",
            positive,
            selector.code(),
            selector.is_differential()
        );

        Ok(Self {
            adc,
            selector,
            positive,
            negative,
        })
    }

    /// Construct an analog input from pin settings.
    pub fn from_settings(adc: A, settings: &PinSettings) -> Result<Self, Error<A::Error>> {
        Self::new(adc, settings.positive, settings.negative)
    }

    /// The channel code passed to the ADC.
    pub fn selector(&self) -> u8 {
        self.selector.code()
    }

    /// Specified true if the input measures a pin pair.
    pub fn is_differential(&self) -> bool {
        self.selector.is_differential()
    }

    /// The measured pin.
    pub fn positive_pin(&self) -> u8 {
        self.positive
    }

    /// The reference pin of a differential input.
    pub fn negative_pin(&self) -> Option<u8> {
        self.negative
    }

    /// Give back the ADC handle.
    pub fn release(self) -> A {
        self.adc
    }

    /// Measure the input as a 16-bit code.
    ///
    /// # Note
    /// Lower resolution conversions are shifted up with the low bits left as zero. The shift is
    /// arithmetic, so differential conversions keep their sign.
    ///
    /// # Returns
    /// The normalized conversion. Single-ended measurements lie within 0 to 65535.
    pub fn value(&mut self) -> Result<i32, Error<A::Error>> {
        let raw = self
            .adc
            .read(self.selector.code(), self.selector.is_differential())
            .map_err(Error::Adc)?;
        let bits = self.adc.bits().map_err(Error::Adc)?;

        log::trace!("AIN{}: {} ({} bits)", self.positive, raw, bits);

        normalize(raw, bits).ok_or(Error::InvalidResolution)
    }

    /// Measure the input voltage.
    ///
    /// # Returns
    /// The analog measurement in volts, scaled by the currently configured gain.
    pub fn voltage(&mut self) -> Result<f32, Error<A::Error>> {
        let value = self.value()?;

        let multiplier = self.adc.gain().map_err(Error::Adc)?;
        let gain = Gain::from_multiplier(multiplier).ok_or_else(|| {
            log::warn!("No reference voltage for gain {}", multiplier);
            Error::UnsupportedGain
        })?;

        Ok(value as f32 * gain.full_scale() / FULL_SCALE_CODE)
    }

    /// Take a measurement for display.
    ///
    /// # Note
    /// The value and voltage are derived from two separate conversions.
    pub fn status(&mut self) -> Result<Status, Error<A::Error>> {
        Ok(Status {
            positive: self.positive,
            negative: self.negative,
            voltage: self.voltage()?,
            value: self.value()?,
            differential: self.is_differential(),
        })
    }

    /// Render a human readable summary of the input.
    pub fn summary(&mut self) -> Result<String<SUMMARY_CAPACITY>, Error<A::Error>> {
        let status = self.status()?;

        let mut summary = String::new();
        if write!(&mut summary, "{}", status).is_err() {
            log::warn!("Status summary truncated");
        }

        Ok(summary)
    }
}

/// Normalize a conversion of `bits` resolution to a 16-bit code.
fn normalize(raw: i32, bits: u8) -> Option<i32> {
    match bits {
        1..=16 => Some(raw << (16 - bits)),
        17..=31 => Some(raw >> (bits - 16)),
        _ => None,
    }
}

/// A single measurement of an analog input.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Status {
    pub positive: u8,
    pub negative: Option<u8>,
    pub voltage: f32,
    pub value: i32,
    pub differential: bool,
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.negative {
            Some(negative) if self.differential => {
                write!(f, "AIN{}P->{}N", self.positive, negative)?
            }
            _ => write!(f, "AIN{}", self.positive)?,
        }

        write!(
            f,
            "( voltage: {:.4}v, value:{:5}/65535, is_differential: {} )",
            self.voltage,
            self.value,
            if self.differential { "True" } else { "False" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::DIFFERENTIAL_PAIRS;

    #[derive(Debug, PartialEq)]
    struct BusError;

    #[derive(Debug)]
    struct FakeAdc {
        bits: u8,
        gain: f32,
        raw: i32,
        fail: bool,
        reads: std::vec::Vec<(u8, bool)>,
    }

    impl FakeAdc {
        fn new(bits: u8, gain: f32, raw: i32) -> Self {
            Self {
                bits,
                gain,
                raw,
                fail: false,
                reads: std::vec::Vec::new(),
            }
        }
    }

    impl Ads1x15 for FakeAdc {
        type Error = BusError;

        fn read(&mut self, selector: u8, differential: bool) -> Result<i32, BusError> {
            self.reads.push((selector, differential));
            if self.fail {
                return Err(BusError);
            }
            Ok(self.raw)
        }

        fn bits(&self) -> Result<u8, BusError> {
            Ok(self.bits)
        }

        fn gain(&self) -> Result<f32, BusError> {
            Ok(self.gain)
        }
    }

    #[test]
    fn differential_pairs_resolve() {
        for (code, (positive, negative)) in DIFFERENTIAL_PAIRS.iter().enumerate() {
            let input =
                AnalogIn::new(FakeAdc::new(16, 1.0, 0), *positive, Some(*negative)).unwrap();
            assert!(input.is_differential());
            assert_eq!(input.selector() as usize, code);
        }
    }

    #[test]
    fn unsupported_pair_fails() {
        let result = AnalogIn::new(FakeAdc::new(16, 1.0, 0), 2, Some(1));
        assert_eq!(result.unwrap_err(), Error::InvalidConfiguration);
    }

    #[test]
    fn single_ended_selector() {
        let input = AnalogIn::new(FakeAdc::new(16, 1.0, 0), 0, None).unwrap();
        assert!(!input.is_differential());
        assert_eq!(input.selector(), 0);
        assert_eq!(input.negative_pin(), None);
    }

    #[test]
    fn value_at_native_resolution() {
        let mut input = AnalogIn::new(FakeAdc::new(16, 1.0, 1000), 0, None).unwrap();
        assert_eq!(input.value(), Ok(1000));
    }

    #[test]
    fn value_is_shifted_to_16_bits() {
        let mut input = AnalogIn::new(FakeAdc::new(12, 1.0, 1000), 0, None).unwrap();
        assert_eq!(input.value(), Ok(16000));
    }

    #[test]
    fn wide_conversions_drop_low_bits() {
        let mut input = AnalogIn::new(FakeAdc::new(18, 1.0, 4003), 0, None).unwrap();
        assert_eq!(input.value(), Ok(1000));
    }

    #[test]
    fn resolution_range_ends() {
        assert_eq!(normalize(1, 1), Some(1 << 15));
        assert_eq!(normalize(-1, 1), Some(-32768));
        assert_eq!(normalize(1000, 16), Some(1000));
        assert_eq!(normalize(1001, 17), Some(500));
        assert_eq!(normalize(-1001, 17), Some(-501));
        assert_eq!(normalize(1 << 30, 31), Some(1 << 15));
        assert_eq!(normalize(5, 0), None);
        assert_eq!(normalize(5, 32), None);
    }

    #[test]
    fn negative_differential_keeps_sign() {
        let mut input = AnalogIn::new(FakeAdc::new(12, 1.0, -1000), 0, Some(1)).unwrap();
        assert_eq!(input.value(), Ok(-16000));

        let voltage = input.voltage().unwrap();
        assert!(voltage < 0.0);
        assert!((voltage + 16000.0 * 4.096 / 32767.0).abs() < 1e-6);
    }

    #[test]
    fn reads_use_resolved_selector() {
        let mut input = AnalogIn::new(FakeAdc::new(16, 1.0, 0), 1, Some(3)).unwrap();
        input.value().unwrap();
        input.voltage().unwrap();
        assert_eq!(input.release().reads, vec![(2, true), (2, true)]);
    }

    #[test]
    fn invalid_resolution() {
        let mut input = AnalogIn::new(FakeAdc::new(0, 1.0, 5), 0, None).unwrap();
        assert_eq!(input.value(), Err(Error::InvalidResolution));

        let mut input = AnalogIn::new(FakeAdc::new(32, 1.0, 5), 0, None).unwrap();
        assert_eq!(input.value(), Err(Error::InvalidResolution));
    }

    #[test]
    fn full_scale_voltage() {
        let mut input = AnalogIn::new(FakeAdc::new(16, 1.0, 32767), 0, None).unwrap();
        let voltage = input.voltage().unwrap();
        assert!((voltage - 4.096).abs() < 1e-5);
    }

    #[test]
    fn zero_is_zero_volts_at_every_gain() {
        for gain in Gain::ALL {
            let mut input =
                AnalogIn::new(FakeAdc::new(16, gain.multiplier(), 0), 0, None).unwrap();
            assert_eq!(input.voltage(), Ok(0.0));
        }
    }

    #[test]
    fn two_thirds_gain() {
        let mut input = AnalogIn::new(FakeAdc::new(16, 2.0 / 3.0, 32767), 0, None).unwrap();
        let voltage = input.voltage().unwrap();
        assert!((voltage - 6.144).abs() < 1e-5);
    }

    #[test]
    fn unsupported_gain() {
        let mut input = AnalogIn::new(FakeAdc::new(16, 3.0, 100), 0, None).unwrap();
        assert_eq!(input.voltage(), Err(Error::UnsupportedGain));
    }

    #[test]
    fn adc_errors_propagate() {
        let mut adc = FakeAdc::new(16, 1.0, 100);
        adc.fail = true;

        let mut input = AnalogIn::new(adc, 0, None).unwrap();
        assert_eq!(input.value(), Err(Error::Adc(BusError)));
        assert_eq!(input.voltage(), Err(Error::Adc(BusError)));
        assert!(input.summary().is_err());
    }

    #[test]
    fn single_ended_summary() {
        let mut input = AnalogIn::new(FakeAdc::new(16, 1.0, 0), 0, None).unwrap();
        assert_eq!(
            input.summary().unwrap().as_str(),
            "AIN0( voltage: 0.0000v, value:    0/65535, is_differential: False )"
        );
    }

    #[test]
    fn differential_summary() {
        let mut input = AnalogIn::new(FakeAdc::new(12, 1.0, 1000), 2, Some(3)).unwrap();
        assert_eq!(
            input.summary().unwrap().as_str(),
            "AIN2P->3N( voltage: 2.0001v, value:16000/65535, is_differential: True )"
        );
    }

    #[test]
    fn status_snapshot() {
        let mut input = AnalogIn::new(FakeAdc::new(16, 16.0, 32767), 3, None).unwrap();
        let status = input.status().unwrap();
        assert_eq!(status.value, 32767);
        assert!(!status.differential);
        assert_eq!(
            format!("{}", status),
            "AIN3( voltage: 0.2560v, value:32767/65535, is_differential: False )"
        );
    }

    #[test]
    fn from_settings() {
        let settings = PinSettings::differential(0, 3);
        let input = AnalogIn::from_settings(FakeAdc::new(16, 1.0, 0), &settings).unwrap();
        assert_eq!(input.selector(), 1);
        assert_eq!(input.positive_pin(), 0);
        assert_eq!(input.negative_pin(), Some(3));
    }
}
