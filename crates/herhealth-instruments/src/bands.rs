use serde::{Deserialize, Serialize};
use ts_rs::TS;

use herhealth_core::models::assessment::SeverityLevel;

use crate::error::InstrumentError;

/// One category band. `upper_bound` is exclusive; `None` marks the
/// catch-all that closes the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub upper_bound: Option<u8>,
    pub label: String,
    pub severity: SeverityLevel,
    /// Interpretation shown with the result.
    pub summary: String,
}

impl Band {
    pub fn below(
        upper_bound: u8,
        label: impl Into<String>,
        severity: SeverityLevel,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            upper_bound: Some(upper_bound),
            label: label.into(),
            severity,
            summary: summary.into(),
        }
    }

    pub fn otherwise(
        label: impl Into<String>,
        severity: SeverityLevel,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            upper_bound: None,
            label: label.into(),
            severity,
            summary: summary.into(),
        }
    }

    fn accepts(&self, score: u8) -> bool {
        self.upper_bound.is_none_or(|bound| score < bound)
    }
}

/// Ordered bands terminated by a catch-all. Bands partition `[0, 100]`:
/// band `i` accepts `[bound(i-1), bound(i))` and the catch-all takes the rest.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct BandTable {
    bands: Vec<Band>,
}

impl BandTable {
    pub fn new(bands: Vec<Band>) -> Result<Self, InstrumentError> {
        let (last, bounded) = bands.split_last().ok_or(InstrumentError::EmptyBandTable)?;
        if last.upper_bound.is_some() {
            return Err(InstrumentError::MissingCatchAll);
        }

        let mut previous = 0u8;
        for band in bounded {
            let bound = band.upper_bound.ok_or(InstrumentError::MisplacedCatchAll)?;
            if !(1..=100).contains(&bound) {
                return Err(InstrumentError::BoundOutOfRange(bound));
            }
            if bound <= previous {
                return Err(InstrumentError::UnorderedBands(bound));
            }
            previous = bound;
        }

        Ok(Self { bands })
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// First band whose bound exceeds `score`, else the catch-all.
    pub fn classify(&self, score: u8) -> &Band {
        self.bands
            .iter()
            .find(|band| band.accepts(score))
            .unwrap_or_else(|| self.catch_all())
    }

    fn catch_all(&self) -> &Band {
        // `new` guarantees a non-empty table ending in the catch-all.
        &self.bands[self.bands.len() - 1]
    }
}
