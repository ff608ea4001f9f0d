//! Landing page content.
//!
//! The page is read-only: a hero block, the current promotions and customer
//! testimonials. Content is either the built-in set or a JSON document on disk.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::ServiceError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u32,
    pub author: String,
    pub testimonial: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingPageContent {
    pub hero: HeroSection,
    pub promotions: Vec<Promotion>,
    pub testimonials: Vec<Testimonial>,
}

#[async_trait]
pub trait LandingPageProvider: Send + Sync {
    async fn get_landing_page_data(&self) -> Result<LandingPageContent, ServiceError>;
}

/// Built-in content shipped with the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLandingPage;

impl StaticLandingPage {
    pub fn hero_section() -> HeroSection {
        HeroSection {
            title: "A Melhor Pizza da Cidade".into(),
            description: "Ingredientes frescos e sabor inigualável.".into(),
            image_url: "https://exemplo.com/pizza-destaque.jpg".into(),
        }
    }

    pub fn promotions() -> Vec<Promotion> {
        vec![
            Promotion {
                id: 1,
                title: "Pizza Grande + Refrigerante".into(),
                description: "Aproveite nossa pizza grande com um refrigerante gelado.".into(),
                image_url: "https://exemplo.com/pizza-promocao1.jpg".into(),
                price: 49.90,
            },
            Promotion {
                id: 2,
                title: "Pizza Média com Borda Recheada".into(),
                description: "Experimente nossa deliciosa pizza média com borda recheada.".into(),
                image_url: "https://exemplo.com/pizza-promocao2.jpg".into(),
                price: 39.90,
            },
        ]
    }

    pub fn testimonials() -> Vec<Testimonial> {
        vec![
            Testimonial {
                id: 1,
                author: "João Silva".into(),
                testimonial: "A melhor pizza que já comi! Recomendo a todos.".into(),
                image_url: "https://exemplo.com/joao-silva.jpg".into(),
            },
            Testimonial {
                id: 2,
                author: "Maria Oliveira".into(),
                testimonial: "Pizza deliciosa e entrega rápida. Ótimo atendimento!".into(),
                image_url: "https://exemplo.com/maria-oliveira.jpg".into(),
            },
        ]
    }

    pub fn content() -> LandingPageContent {
        LandingPageContent {
            hero: Self::hero_section(),
            promotions: Self::promotions(),
            testimonials: Self::testimonials(),
        }
    }
}

#[async_trait]
impl LandingPageProvider for StaticLandingPage {
    async fn get_landing_page_data(&self) -> Result<LandingPageContent, ServiceError> {
        Ok(Self::content())
    }
}

/// Content read from a JSON file on every request, so edits apply without a restart.
#[derive(Debug, Clone)]
pub struct FileLandingPage {
    path: PathBuf,
}

impl FileLandingPage {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LandingPageProvider for FileLandingPage {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn get_landing_page_data(&self) -> Result<LandingPageContent, ServiceError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ServiceError::Internal(format!("cannot read {}: {}", self.path.display(), e)))?;
        let content: LandingPageContent = serde_json::from_slice(&bytes)
            .map_err(|e| ServiceError::Internal(format!("invalid landing page document: {}", e)))?;
        debug!(promotions = content.promotions.len(), testimonials = content.testimonials.len(), "landing page loaded");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("{}_{}.json", name, uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn static_content_has_all_sections() -> Result<(), anyhow::Error> {
        let data = StaticLandingPage.get_landing_page_data().await?;
        assert_eq!(data.hero.title, "A Melhor Pizza da Cidade");
        assert_eq!(data.promotions.len(), 2);
        assert_eq!(data.promotions[0].price, 49.90);
        assert_eq!(data.testimonials.len(), 2);
        assert_eq!(data.testimonials[1].author, "Maria Oliveira");
        Ok(())
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(StaticLandingPage::content()).unwrap();
        assert!(json["hero"]["imageUrl"].is_string());
        assert!(json["promotions"][0]["imageUrl"].is_string());
        assert_eq!(json["testimonials"][0]["id"], 1);
    }

    #[tokio::test]
    async fn file_provider_reads_document() -> Result<(), anyhow::Error> {
        let path = temp_path("landing_page");
        let mut content = StaticLandingPage::content();
        content.hero.title = "Noite da Pizza".into();
        content.promotions.truncate(1);
        tokio::fs::write(&path, serde_json::to_vec(&content)?).await?;

        let loaded = FileLandingPage::new(&path).get_landing_page_data().await?;
        assert_eq!(loaded, content);

        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }

    #[tokio::test]
    async fn file_provider_faults_are_internal() -> Result<(), anyhow::Error> {
        let missing = FileLandingPage::new(temp_path("missing_landing_page"));
        assert!(matches!(missing.get_landing_page_data().await, Err(ServiceError::Internal(_))));

        let path = temp_path("broken_landing_page");
        tokio::fs::write(&path, b"{\"hero\": 1}").await?;
        let broken = FileLandingPage::new(&path);
        assert!(matches!(broken.get_landing_page_data().await, Err(ServiceError::Internal(_))));
        let _ = tokio::fs::remove_file(&path).await;
        Ok(())
    }
}
