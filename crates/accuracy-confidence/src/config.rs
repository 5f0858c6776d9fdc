//! Configuration for multi-level reports and charts

use crate::{chart::Palette, types::ConfidenceLevel};
use accuracy_core::{Error, Result};

/// Confidence levels evaluated next to the requested one
pub const DEFAULT_ADDITIONAL_LEVELS: [f64; 4] = [0.90, 0.95, 0.98, 0.99];

/// Decimals shown in text lines and chart labels
pub const DEFAULT_PRECISION: usize = 2;

/// Upper limit on the decimals a report renders
pub const MAX_PRECISION: usize = 10;

/// Presentation settings of [`crate::report::estimate_interval_report`]
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    additional_levels: Vec<ConfidenceLevel>,
    palette: Palette,
    precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            additional_levels: vec![
                ConfidenceLevel::NINETY,
                ConfidenceLevel::NINETY_FIVE,
                ConfidenceLevel::NINETY_EIGHT,
                ConfidenceLevel::NINETY_NINE,
            ],
            palette: Palette::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl ReportConfig {
    /// Replace the additional levels; each must be a valid confidence level
    pub fn with_additional_levels(mut self, levels: &[f64]) -> Result<Self> {
        self.additional_levels = levels
            .iter()
            .map(|&level| ConfidenceLevel::new(level))
            .collect::<Result<_>>()?;
        Ok(self)
    }

    pub fn with_palette(mut self, palette: Palette) -> Result<Self> {
        if palette.is_empty() {
            return Err(Error::InvalidConfig(
                "palette needs at least one colour".to_string(),
            ));
        }
        self.palette = palette;
        Ok(self)
    }

    pub fn with_precision(mut self, precision: usize) -> Result<Self> {
        if precision > MAX_PRECISION {
            return Err(Error::InvalidConfig(format!(
                "precision should be at most {MAX_PRECISION} decimals, not {precision}"
            )));
        }
        self.precision = precision;
        Ok(self)
    }

    pub fn additional_levels(&self) -> &[ConfidenceLevel] {
        &self.additional_levels
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn precision(&self) -> usize {
        self.precision
    }
}
