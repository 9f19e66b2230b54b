use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Storage handle for the cupcake resource. Handlers receive this as an
/// injected dependency so tests can substitute an in-memory implementation.
#[async_trait]
pub trait CupcakeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<models::cupcake::Model>, ServiceError>;
    async fn create(&self, flavor: &str, size: &str, rating: f64, image: Option<&str>) -> Result<models::cupcake::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<models::cupcake::Model>, ServiceError>;
    async fn update(&self, id: i32, flavor: Option<&str>, size: Option<&str>, rating: Option<f64>, image: Option<&str>) -> Result<models::cupcake::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCupcakeRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CupcakeRepository for SeaOrmCupcakeRepository {
    async fn list(&self) -> Result<Vec<models::cupcake::Model>, ServiceError> {
        crate::cupcake_service::list_cupcakes(&self.db).await
    }

    async fn create(&self, flavor: &str, size: &str, rating: f64, image: Option<&str>) -> Result<models::cupcake::Model, ServiceError> {
        crate::cupcake_service::create_cupcake(&self.db, flavor, size, rating, image).await
    }

    async fn get(&self, id: i32) -> Result<Option<models::cupcake::Model>, ServiceError> {
        crate::cupcake_service::get_cupcake(&self.db, id).await
    }

    async fn update(&self, id: i32, flavor: Option<&str>, size: Option<&str>, rating: Option<f64>, image: Option<&str>) -> Result<models::cupcake::Model, ServiceError> {
        crate::cupcake_service::update_cupcake(&self.db, id, flavor, size, rating, image).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::cupcake_service::delete_cupcake(&self.db, id).await
    }
}
