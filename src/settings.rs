//! Analog input pin settings
//!
//! # Copyright
//! Copyright (C) 2020 QUARTIQ GmbH - All Rights Reserved
//! Unauthorized usage, editing, or copying is strictly prohibited.
//! Proprietary and confidential.
use serde::{Deserialize, Serialize};

use crate::channel::Selector;

/// Represents the pins an analog input measures.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinSettings {
    pub positive: u8,

    /// Omitted for single-ended measurements.
    #[serde(default)]
    pub negative: Option<u8>,
}

impl PinSettings {
    /// Construct settings for a single-ended measurement.
    pub fn single_ended(pin: u8) -> Self {
        Self {
            positive: pin,
            negative: None,
        }
    }

    /// Construct settings for a differential measurement.
    pub fn differential(positive: u8, negative: u8) -> Self {
        Self {
            positive,
            negative: Some(negative),
        }
    }

    /// Parse settings from a JSON payload such as `{"positive":0,"negative":1}`.
    ///
    /// # Args
    /// * `data` - The serialized settings.
    ///
    /// # Returns
    /// The settings if deserialization was successful. The pins are not validated.
    pub fn from_json(data: &[u8]) -> Result<Self, serde_json_core::de::Error> {
        let (settings, _) = serde_json_core::from_slice(data)?;
        Ok(settings)
    }

    /// Resolve the multiplexer selection for these settings.
    ///
    /// # Returns
    /// The selection, or `None` if the pins do not form a supported differential pair.
    pub fn selector(&self) -> Option<Selector> {
        Selector::new(self.positive, self.negative)
    }
}
