use std::collections::BTreeMap;

use async_trait::async_trait;
use models::cupcake::{self, DEFAULT_IMAGE_URL};
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::repository::CupcakeRepository;

#[derive(Default)]
struct Inner {
    next_id: i32,
    rows: BTreeMap<i32, cupcake::Model>,
}

/// In-memory repository with the same observable semantics as the SeaORM
/// implementation. Ids are assigned from a monotonic counter and never reused,
/// even after a delete.
#[derive(Default)]
pub struct InMemoryCupcakeRepository {
    inner: RwLock<Inner>,
}

impl InMemoryCupcakeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CupcakeRepository for InMemoryCupcakeRepository {
    async fn list(&self) -> Result<Vec<cupcake::Model>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn create(&self, flavor: &str, size: &str, rating: f64, image: Option<&str>) -> Result<cupcake::Model, ServiceError> {
        cupcake::validate_flavor(flavor)?;
        cupcake::validate_size(size)?;
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = inner.next_id;
        let row = cupcake::Model {
            id,
            flavor: flavor.to_string(),
            size: size.to_string(),
            rating,
            image: image.unwrap_or(DEFAULT_IMAGE_URL).to_string(),
        };
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn get(&self, id: i32) -> Result<Option<cupcake::Model>, ServiceError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, flavor: Option<&str>, size: Option<&str>, rating: Option<f64>, image: Option<&str>) -> Result<cupcake::Model, ServiceError> {
        if let Some(f) = flavor { cupcake::validate_flavor(f)?; }
        if let Some(s) = size { cupcake::validate_size(s)?; }
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&id) else { return Err(ServiceError::not_found("cupcake")); };
        if let Some(f) = flavor { row.flavor = f.to_string(); }
        if let Some(s) = size { row.size = s.to_string(); }
        if let Some(r) = rating { row.rating = r; }
        if let Some(i) = image { row.image = i.to_string(); }
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_unique_and_never_reused() -> Result<(), anyhow::Error> {
        let repo = InMemoryCupcakeRepository::new();
        let a = repo.create("Chocolate", "Large", 9.5, None).await?;
        let b = repo.create("Vanilla", "Small", 8.0, None).await?;
        assert_ne!(a.id, b.id);

        repo.delete(a.id).await?;
        let c = repo.create("Lemon", "Medium", 7.5, None).await?;
        assert_ne!(c.id, a.id);
        assert_ne!(c.id, b.id);
        Ok(())
    }

    #[tokio::test]
    async fn create_defaults_image_when_absent() -> Result<(), anyhow::Error> {
        let repo = InMemoryCupcakeRepository::new();
        let plain = repo.create("Chocolate", "Large", 9.5, None).await?;
        assert_eq!(plain.image, DEFAULT_IMAGE_URL);

        let pictured = repo.create("Lemon", "Small", 7.0, Some("https://example.com/l.png")).await?;
        assert_eq!(pictured.image, "https://example.com/l.png");
        Ok(())
    }

    #[tokio::test]
    async fn get_after_create_returns_equal_record() -> Result<(), anyhow::Error> {
        let repo = InMemoryCupcakeRepository::new();
        let created = repo.create("Chocolate", "Large", 9.5, None).await?;
        let fetched = repo.get(created.id).await?.unwrap();
        assert_eq!(fetched, created);
        Ok(())
    }

    #[tokio::test]
    async fn update_touches_only_provided_fields() -> Result<(), anyhow::Error> {
        let repo = InMemoryCupcakeRepository::new();
        let created = repo.create("Chocolate", "Large", 9.5, None).await?;

        let updated = repo.update(created.id, None, None, Some(10.0), None).await?;
        assert_eq!(updated.rating, 10.0);
        assert_eq!(updated.flavor, created.flavor);
        assert_eq!(updated.size, created.size);
        assert_eq!(updated.image, created.image);

        let renamed = repo.update(created.id, Some("Mocha"), None, None, None).await?;
        assert_eq!(renamed.flavor, "Mocha");
        assert_eq!(renamed.rating, 10.0);
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_gone() -> Result<(), anyhow::Error> {
        let repo = InMemoryCupcakeRepository::new();
        let created = repo.create("Chocolate", "Large", 9.5, None).await?;
        assert!(repo.delete(created.id).await?);
        assert!(repo.get(created.id).await?.is_none());
        assert!(!repo.delete(created.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() -> Result<(), anyhow::Error> {
        let repo = InMemoryCupcakeRepository::new();
        assert!(repo.get(42).await?.is_none());
        assert!(!repo.delete(42).await?);
        let res = repo.update(42, Some("Mocha"), None, None, None).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn list_returns_storage_order() -> Result<(), anyhow::Error> {
        let repo = InMemoryCupcakeRepository::new();
        let a = repo.create("Chocolate", "Large", 9.5, None).await?;
        let b = repo.create("Vanilla", "Small", 8.0, None).await?;
        let all = repo.list().await?;
        assert_eq!(all.iter().map(|m| m.id).collect::<Vec<_>>(), vec![a.id, b.id]);
        Ok(())
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() -> Result<(), anyhow::Error> {
        let repo = InMemoryCupcakeRepository::new();
        assert!(matches!(
            repo.create(" ", "Large", 9.5, None).await,
            Err(ServiceError::Model(_))
        ));
        let created = repo.create("Chocolate", "Large", 9.5, None).await?;
        assert!(matches!(
            repo.update(created.id, Some(""), None, None, None).await,
            Err(ServiceError::Model(_))
        ));
        Ok(())
    }
}
