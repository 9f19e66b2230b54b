use models::cupcake::{self, Entity as CupcakeEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use tracing::debug;

use crate::errors::ServiceError;

/// List all cupcakes in storage order.
pub async fn list_cupcakes(db: &DatabaseConnection) -> Result<Vec<cupcake::Model>, ServiceError> {
    let rows = CupcakeEntity::find().all(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(rows)
}

/// Create a cupcake after validation; the image falls back to the placeholder.
pub async fn create_cupcake(
    db: &DatabaseConnection,
    flavor: &str,
    size: &str,
    rating: f64,
    image: Option<&str>,
) -> Result<cupcake::Model, ServiceError> {
    // validations are in models::cupcake
    let created = cupcake::create(db, flavor, size, rating, image).await?;
    debug!(id = created.id, "cupcake row inserted");
    Ok(created)
}

/// Get a cupcake by id.
pub async fn get_cupcake(db: &DatabaseConnection, id: i32) -> Result<Option<cupcake::Model>, ServiceError> {
    let found = CupcakeEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(found)
}

/// Partial update: fields left as `None` keep their stored value.
pub async fn update_cupcake(
    db: &DatabaseConnection,
    id: i32,
    flavor: Option<&str>,
    size: Option<&str>,
    rating: Option<f64>,
    image: Option<&str>,
) -> Result<cupcake::Model, ServiceError> {
    let current = CupcakeEntity::find_by_id(id).one(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    let Some(existing) = current else { return Err(ServiceError::not_found("cupcake")); };
    let mut am: cupcake::ActiveModel = existing.into();
    if let Some(f) = flavor { cupcake::validate_flavor(f)?; am.flavor = Set(f.to_string()); }
    if let Some(s) = size { cupcake::validate_size(s)?; am.size = Set(s.to_string()); }
    if let Some(r) = rating { am.rating = Set(r); }
    if let Some(i) = image { am.image = Set(i.to_string()); }
    let updated = am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(updated)
}

/// Delete a cupcake; returns true if a row was removed.
pub async fn delete_cupcake(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = CupcakeEntity::delete_by_id(id).exec(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::cupcake::DEFAULT_IMAGE_URL;

    #[tokio::test]
    async fn cupcake_crud_service() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };

        let a = create_cupcake(&db, "Chocolate", "Large", 9.5, None).await?;
        assert_eq!(a.image, DEFAULT_IMAGE_URL);
        let found = get_cupcake(&db, a.id).await?.unwrap();
        assert_eq!(found, a);

        let updated = update_cupcake(&db, a.id, None, None, Some(10.0), None).await?;
        assert_eq!(updated.rating, 10.0);
        assert_eq!(updated.flavor, "Chocolate");
        assert_eq!(updated.size, "Large");
        assert_eq!(updated.image, DEFAULT_IMAGE_URL);

        let list_all = list_cupcakes(&db).await?;
        assert!(list_all.iter().any(|x| x.id == a.id));

        let deleted = delete_cupcake(&db, a.id).await?;
        assert!(deleted);
        let after = get_cupcake(&db, a.id).await?;
        assert!(after.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn update_missing_cupcake_is_not_found() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()); };

        let res = update_cupcake(&db, i32::MAX, Some("Mocha"), None, None, None).await;
        assert!(matches!(res, Err(ServiceError::NotFound(_))));

        let deleted = delete_cupcake(&db, i32::MAX).await?;
        assert!(!deleted);

        Ok(())
    }
}
