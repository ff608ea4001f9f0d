use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::repository::Record;
use crate::validation::{ensure_valid, BodyShape, FieldKind, FieldSpec, FieldViolation, Violations};

pub const ADDRESS_MIN: usize = 5;
pub const ADDRESS_MAX: usize = 255;
pub const NAME_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Location {
    const KIND: &'static str = "location";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLocation {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BodyShape for CreateLocation {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("address", FieldKind::Text),
        FieldSpec::required("latitude", FieldKind::Number),
        FieldSpec::required("longitude", FieldKind::Number),
        FieldSpec::optional("name", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Text),
    ];
}

impl CreateLocation {
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut v = Violations::new();
        v.text("address", &self.address, ADDRESS_MIN, ADDRESS_MAX);
        v.range("latitude", self.latitude, -90.0, 90.0);
        v.range("longitude", self.longitude, -180.0, 180.0);
        v.optional_text("name", self.name.as_deref(), NAME_MAX);
        v.optional_text("description", self.description.as_deref(), DESCRIPTION_MAX);
        v.into_vec()
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        ensure_valid(self.violations())
    }
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLocation {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BodyShape for UpdateLocation {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("address", FieldKind::Text),
        FieldSpec::optional("latitude", FieldKind::Number),
        FieldSpec::optional("longitude", FieldKind::Number),
        FieldSpec::optional("name", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Text),
    ];
}

impl UpdateLocation {
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut v = Violations::new();
        if let Some(address) = &self.address {
            v.text("address", address, ADDRESS_MIN, ADDRESS_MAX);
        }
        if let Some(lat) = self.latitude {
            v.range("latitude", lat, -90.0, 90.0);
        }
        if let Some(lng) = self.longitude {
            v.range("longitude", lng, -180.0, 180.0);
        }
        v.optional_text("name", self.name.as_deref(), NAME_MAX);
        v.optional_text("description", self.description.as_deref(), DESCRIPTION_MAX);
        v.into_vec()
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        ensure_valid(self.violations())
    }

    /// Merge supplied fields into `target`. Never touches `id` or `created_at`.
    pub fn apply(self, target: &mut Location) {
        if let Some(address) = self.address {
            target.address = address;
        }
        if let Some(lat) = self.latitude {
            target.latitude = lat;
        }
        if let Some(lng) = self.longitude {
            target.longitude = lng;
        }
        if let Some(name) = self.name {
            target.name = Some(name);
        }
        if let Some(description) = self.description {
            target.description = Some(description);
        }
    }
}
