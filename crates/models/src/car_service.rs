//! Service catalog entries ("Oil change", "Engine repair", ...).

use sea_orm::{entity::prelude::*, DatabaseConnection, FromQueryResult, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub service_id: String,
    pub title: String,
    pub img: String,
    pub price: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Projection served by the single-service endpoint (no description).
#[derive(Clone, Debug, PartialEq, FromQueryResult, Serialize, Deserialize)]
pub struct Summary {
    pub id: Uuid,
    pub service_id: String,
    pub title: String,
    pub price: String,
    pub img: String,
}

impl From<Model> for Summary {
    fn from(m: Model) -> Self {
        Self { id: m.id, service_id: m.service_id, title: m.title, price: m.price, img: m.img }
    }
}

/// Catalog entry to insert. The HTTP surface is read-only; operators seed
/// the catalog through [`create`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewService {
    pub service_id: String,
    pub title: String,
    pub img: String,
    pub price: String,
    #[serde(default)]
    pub description: String,
}

pub fn validate_price(p: &str) -> Result<(), errors::ModelError> {
    match p.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(()),
        _ => Err(errors::ModelError::Validation(format!("invalid price `{p}`"))),
    }
}

impl NewService {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.service_id.trim().is_empty() {
            return Err(errors::ModelError::Validation("service_id required".into()));
        }
        if self.title.trim().is_empty() {
            return Err(errors::ModelError::Validation("title required".into()));
        }
        validate_price(&self.price)
    }
}

/// Seeding entry point for the catalog; no route calls it.
pub async fn create(db: &DatabaseConnection, input: NewService) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        service_id: Set(input.service_id),
        title: Set(input.title),
        img: Set(input.img),
        price: Set(input.price.trim().to_string()),
        description: Set(input.description),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Whole catalog ordered by catalog code.
pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_asc(Column::ServiceId)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find_summary(db: &DatabaseConnection, id: Uuid) -> Result<Option<Summary>, errors::ModelError> {
    Entity::find_by_id(id)
        .select_only()
        .columns([Column::Id, Column::ServiceId, Column::Title, Column::Price, Column::Img])
        .into_model::<Summary>()
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}
