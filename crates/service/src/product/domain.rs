use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::repository::Record;
use crate::validation::{ensure_valid, BodyShape, FieldKind, FieldSpec, FieldViolation, Violations};

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 255;
pub const IMAGE_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 2000;

/// A sellable item. `image` is mandatory, `description` optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub image: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Product {
    const KIND: &'static str = "product";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    pub name: String,
    pub price: f64,
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl BodyShape for CreateProduct {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("price", FieldKind::Number),
        FieldSpec::required("image", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Text),
    ];
}

impl CreateProduct {
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut v = Violations::new();
        v.text("name", &self.name, NAME_MIN, NAME_MAX);
        v.positive("price", self.price, None);
        v.text("image", &self.image, 1, IMAGE_MAX);
        v.optional_text("description", self.description.as_deref(), DESCRIPTION_MAX);
        v.into_vec()
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        ensure_valid(self.violations())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BodyShape for UpdateProduct {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("name", FieldKind::Text),
        FieldSpec::optional("price", FieldKind::Number),
        FieldSpec::optional("image", FieldKind::Text),
        FieldSpec::optional("description", FieldKind::Text),
    ];
}

impl UpdateProduct {
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut v = Violations::new();
        if let Some(name) = &self.name {
            v.text("name", name, NAME_MIN, NAME_MAX);
        }
        if let Some(price) = self.price {
            v.positive("price", price, None);
        }
        if let Some(image) = &self.image {
            v.text("image", image, 1, IMAGE_MAX);
        }
        v.optional_text("description", self.description.as_deref(), DESCRIPTION_MAX);
        v.into_vec()
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        ensure_valid(self.violations())
    }

    pub fn apply(self, target: &mut Product) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(price) = self.price {
            target.price = price;
        }
        if let Some(image) = self.image {
            target.image = image;
        }
        if let Some(description) = self.description {
            target.description = Some(description);
        }
    }
}
