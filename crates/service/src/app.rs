//! Wiring of the services behind one cloneable handle.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::landing_page::{LandingPageProvider, StaticLandingPage};
use crate::location::seaorm::SeaOrmLocationRepository;
use crate::location::{Location, LocationService};
use crate::pizza::seaorm::SeaOrmPizzaRepository;
use crate::pizza::{Pizza, PizzaService};
use crate::product::seaorm::SeaOrmProductRepository;
use crate::product::{Product, ProductService};
use crate::storage::memory_store::MemoryRepository;

#[derive(Clone)]
pub struct AppServices {
    pub landing_page: Arc<dyn LandingPageProvider>,
    pub locations: LocationService,
    pub pizzas: PizzaService,
    pub products: ProductService,
}

impl AppServices {
    /// Process-local collections; contents are lost on restart.
    pub fn in_memory() -> Self {
        Self {
            landing_page: Arc::new(StaticLandingPage),
            locations: LocationService::new(Arc::new(MemoryRepository::<Location>::new())),
            pizzas: PizzaService::new(Arc::new(MemoryRepository::<Pizza>::new())),
            products: ProductService::new(Arc::new(MemoryRepository::<Product>::new())),
        }
    }

    /// Tables in a migrated database.
    pub fn with_database(db: DatabaseConnection) -> Self {
        Self {
            landing_page: Arc::new(StaticLandingPage),
            locations: LocationService::new(Arc::new(SeaOrmLocationRepository { db: db.clone() })),
            pizzas: PizzaService::new(Arc::new(SeaOrmPizzaRepository { db: db.clone() })),
            products: ProductService::new(Arc::new(SeaOrmProductRepository { db })),
        }
    }

    pub fn with_landing_page(mut self, provider: Arc<dyn LandingPageProvider>) -> Self {
        self.landing_page = provider;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landing_page::FileLandingPage;
    use crate::pizza::CreatePizza;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn in_memory_services_are_independent() -> Result<(), anyhow::Error> {
        let a = AppServices::in_memory();
        let b = AppServices::in_memory();
        a.pizzas
            .create(CreatePizza {
                name: "Margherita".into(),
                image_url: "http://x/m.jpg".into(),
                price: 12.99,
                description: None,
            })
            .await?;
        assert_eq!(a.pizzas.find_all().await?.len(), 1);
        assert!(b.pizzas.find_all().await?.is_empty());

        let cloned = a.clone();
        assert_eq!(cloned.pizzas.find_all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn landing_page_can_be_swapped() {
        let services = AppServices::in_memory()
            .with_landing_page(Arc::new(FileLandingPage::new("/nonexistent/landing.json")));
        assert!(services.landing_page.get_landing_page_data().await.is_err());
    }

    #[tokio::test]
    async fn database_services_start_empty() -> Result<(), anyhow::Error> {
        let services = AppServices::with_database(get_db().await?);
        assert!(services.locations.find_all().await?.is_empty());
        assert!(services.pizzas.find_all().await?.is_empty());
        assert!(services.products.find_all().await?.is_empty());
        let page = services.landing_page.get_landing_page_data().await?;
        assert_eq!(page.promotions.len(), 2);
        Ok(())
    }
}
