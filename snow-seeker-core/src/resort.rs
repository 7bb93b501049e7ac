//! The resort record and the display values derived from it.

use serde::{Deserialize, Serialize};

use crate::Facility;

/// A ski resort as stored in the catalog dataset.
///
/// Identity is `id`: it is unique across the catalog, stable across runs,
/// and used as the favorites storage key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resort {
    pub id: String,
    pub name: String,
    /// Display name of the country; also the flag asset key.
    pub country: String,
    pub description: String,
    pub image_credit: String,
    /// Price band, rendered as that many `$` signs.
    pub price: u32,
    /// Size band: 1 small, 2 average, 3 and up large.
    pub size: u32,
    /// Snow depth in centimetres.
    pub snow_depth: u32,
    /// Elevation in metres.
    pub elevation: u32,
    pub runs: u32,
    /// Raw facility names, unvalidated.
    #[serde(default)]
    pub facilities: Vec<String>,
}

impl Resort {
    /// Facility descriptors in dataset order, one per raw name.
    pub fn facility_types(&self) -> Vec<Facility> {
        Facility::resolve_all(&self.facilities)
    }

    /// `"{name}, {country}"`, the detail view title.
    pub fn title(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    pub fn size_label(&self) -> &'static str {
        match self.size {
            1 => "Small",
            2 => "Average",
            _ => "Large",
        }
    }

    pub fn price_label(&self) -> String {
        "$".repeat(self.price as usize)
    }

    pub fn elevation_label(&self) -> String {
        format!("{}m", self.elevation)
    }

    pub fn snow_depth_label(&self) -> String {
        format!("{}cm", self.snow_depth)
    }

    pub fn runs_label(&self) -> String {
        format!("{} runs", self.runs)
    }

    /// Asset key of the resort's hero image.
    pub fn image_asset(&self) -> &str {
        &self.id
    }

    /// Asset key of the country flag.
    pub fn flag_asset(&self) -> &str {
        &self.country
    }
}
