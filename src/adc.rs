//! Interface to the ADS1x15 conversion driver
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.
use core::cell::RefCell;

/// The capabilities an ADS1x15 driver provides to analog inputs.
///
/// # Note
/// The driver owns the bus, the register configuration and the conversion sequencing. Analog
/// inputs only request conversions and inspect the current resolution and gain.
pub trait Ads1x15 {
    /// Errors that occur while accessing the driver (bus failures, timeouts).
    type Error;

    /// Perform a single blocking conversion.
    ///
    /// # Args
    /// * `selector` - The input multiplexer channel code.
    /// * `differential` - Specified true if `selector` is a differential channel code.
    ///
    /// # Returns
    /// The conversion result in native ADC counts.
    fn read(&mut self, selector: u8, differential: bool) -> Result<i32, Self::Error>;

    /// The native resolution of conversions in bits.
    fn bits(&self) -> Result<u8, Self::Error>;

    /// The currently configured gain multiplier.
    fn gain(&self) -> Result<f32, Self::Error>;
}

impl<T: Ads1x15 + ?Sized> Ads1x15 for &mut T {
    type Error = T::Error;

    fn read(&mut self, selector: u8, differential: bool) -> Result<i32, Self::Error> {
        (**self).read(selector, differential)
    }

    fn bits(&self) -> Result<u8, Self::Error> {
        (**self).bits()
    }

    fn gain(&self) -> Result<f32, Self::Error> {
        (**self).gain()
    }
}

/// Errors of a driver shared through a `RefCell`.
#[derive(Debug, Copy, Clone, PartialEq, serde::Serialize)]
pub enum SharedError<E> {
    /// The driver is already borrowed elsewhere.
    Busy,

    /// The driver itself failed.
    Driver(E),
}

// A shared driver is borrowed only for the duration of each call. Multiple analog inputs may
// hold the same `&RefCell` as long as they are used from a single context.
impl<T: Ads1x15> Ads1x15 for &RefCell<T> {
    type Error = SharedError<T::Error>;

    fn read(&mut self, selector: u8, differential: bool) -> Result<i32, Self::Error> {
        self.try_borrow_mut()
            .map_err(|_| SharedError::Busy)?
            .read(selector, differential)
            .map_err(SharedError::Driver)
    }

    fn bits(&self) -> Result<u8, Self::Error> {
        self.try_borrow()
            .map_err(|_| SharedError::Busy)?
            .bits()
            .map_err(SharedError::Driver)
    }

    fn gain(&self) -> Result<f32, Self::Error> {
        self.try_borrow()
            .map_err(|_| SharedError::Busy)?
            .gain()
            .map_err(SharedError::Driver)
    }
}
