use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::repository::Record;
use crate::validation::{ensure_valid, BodyShape, FieldKind, FieldSpec, FieldViolation, Violations};

pub const NAME_MAX: usize = 255;
pub const IMAGE_URL_MAX: usize = 255;
pub const DESCRIPTION_MAX: usize = 500;
pub const PRICE_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pizza {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub price: f64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Pizza {
    const KIND: &'static str = "pizza";

    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePizza {
    pub name: String,
    pub image_url: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl BodyShape for CreatePizza {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("name", FieldKind::Text),
        FieldSpec::required("imageUrl", FieldKind::Text),
        FieldSpec::required("price", FieldKind::Number),
        FieldSpec::optional("description", FieldKind::Text),
    ];
}

impl CreatePizza {
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut v = Violations::new();
        v.text("name", &self.name, 1, NAME_MAX);
        v.text("imageUrl", &self.image_url, 1, IMAGE_URL_MAX);
        v.positive("price", self.price, Some(PRICE_MAX));
        v.optional_text("description", self.description.as_deref(), DESCRIPTION_MAX);
        v.into_vec()
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        ensure_valid(self.violations())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePizza {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl BodyShape for UpdatePizza {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::optional("name", FieldKind::Text),
        FieldSpec::optional("imageUrl", FieldKind::Text),
        FieldSpec::optional("price", FieldKind::Number),
        FieldSpec::optional("description", FieldKind::Text),
    ];
}

impl UpdatePizza {
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut v = Violations::new();
        if let Some(name) = &self.name {
            v.text("name", name, 1, NAME_MAX);
        }
        if let Some(url) = &self.image_url {
            v.text("imageUrl", url, 1, IMAGE_URL_MAX);
        }
        if let Some(price) = self.price {
            v.positive("price", price, Some(PRICE_MAX));
        }
        v.optional_text("description", self.description.as_deref(), DESCRIPTION_MAX);
        v.into_vec()
    }

    pub fn validate(&self) -> Result<(), ServiceError> {
        ensure_valid(self.violations())
    }

    pub fn apply(self, target: &mut Pizza) {
        if let Some(name) = self.name {
            target.name = name;
        }
        if let Some(url) = self.image_url {
            target.image_url = url;
        }
        if let Some(price) = self.price {
            target.price = price;
        }
        if let Some(description) = self.description {
            target.description = Some(description);
        }
    }
}
