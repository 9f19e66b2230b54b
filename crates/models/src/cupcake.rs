use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Placeholder image applied when a create payload carries no `image`.
pub const DEFAULT_IMAGE_URL: &str = "https://tinyurl.com/demo-cupcake";

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cupcake")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub flavor: String,
    pub size: String,
    pub rating: f64,
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_flavor(flavor: &str) -> Result<(), errors::ModelError> {
    if flavor.trim().is_empty() {
        return Err(errors::ModelError::Validation("flavor required".into()));
    }
    Ok(())
}

pub fn validate_size(size: &str) -> Result<(), errors::ModelError> {
    if size.trim().is_empty() {
        return Err(errors::ModelError::Validation("size required".into()));
    }
    Ok(())
}

pub async fn create(
    db: &DatabaseConnection,
    flavor: &str,
    size: &str,
    rating: f64,
    image: Option<&str>,
) -> Result<Model, errors::ModelError> {
    validate_flavor(flavor)?;
    validate_size(size)?;
    let am = ActiveModel {
        flavor: Set(flavor.to_string()),
        size: Set(size.to_string()),
        rating: Set(rating),
        image: Set(image.unwrap_or(DEFAULT_IMAGE_URL).to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
