//! Booking orders placed by customers; `email` is the owner.

use chrono::Utc;
use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::car_service::validate_price;
use crate::errors;

pub const DEFAULT_STATUS: &str = "pending";
const MAX_STATUS_LEN: usize = 32;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_name: String,
    pub email: String,
    pub service_id: String,
    pub service: String,
    pub date: Date,
    pub price: String,
    pub img: Option<String>,
    pub status: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Booking as submitted by the checkout form.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewBooking {
    pub customer_name: String,
    pub email: String,
    pub service_id: String,
    pub service: String,
    pub date: Date,
    pub price: String,
    #[serde(default)]
    pub img: Option<String>,
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(errors::ModelError::Validation("invalid email".into())),
    }
}

/// Trim and bound a status value; the value itself is free-form.
pub fn normalize_status(status: &str) -> Result<String, errors::ModelError> {
    let s = status.trim();
    if s.is_empty() {
        return Err(errors::ModelError::Validation("status required".into()));
    }
    if s.chars().count() > MAX_STATUS_LEN {
        return Err(errors::ModelError::Validation(format!("status longer than {MAX_STATUS_LEN} characters")));
    }
    Ok(s.to_string())
}

impl NewBooking {
    pub fn validate(&self) -> Result<(), errors::ModelError> {
        if self.customer_name.trim().is_empty() {
            return Err(errors::ModelError::Validation("customer_name required".into()));
        }
        validate_email(&self.email)?;
        if self.service_id.trim().is_empty() || self.service.trim().is_empty() {
            return Err(errors::ModelError::Validation("service and service_id required".into()));
        }
        validate_price(&self.price)
    }

    /// Build the stored row; status starts as [`DEFAULT_STATUS`].
    pub fn into_model(self, id: Uuid, now: DateTimeWithTimeZone) -> Model {
        Model {
            id,
            customer_name: self.customer_name.trim().to_string(),
            email: self.email.trim().to_string(),
            service_id: self.service_id,
            service: self.service,
            date: self.date,
            price: self.price.trim().to_string(),
            img: self.img,
            status: DEFAULT_STATUS.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

pub async fn create(db: &DatabaseConnection, input: NewBooking) -> Result<Model, errors::ModelError> {
    input.validate()?;
    let m = input.into_model(Uuid::new_v4(), Utc::now().into());
    let am = ActiveModel {
        id: Set(m.id),
        customer_name: Set(m.customer_name),
        email: Set(m.email),
        service_id: Set(m.service_id),
        service: Set(m.service),
        date: Set(m.date),
        price: Set(m.price),
        img: Set(m.img),
        status: Set(m.status),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn find(db: &DatabaseConnection, id: Uuid) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All bookings, or only those owned by `email`; newest first.
pub async fn list(db: &DatabaseConnection, email: Option<&str>) -> Result<Vec<Model>, errors::ModelError> {
    let mut finder = Entity::find();
    if let Some(email) = email {
        finder = finder.filter(Column::Email.eq(email.to_string()));
    }
    finder
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn set_status(db: &DatabaseConnection, id: Uuid, status: &str) -> Result<Model, errors::ModelError> {
    let status = normalize_status(status)?;
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?
        .ok_or(errors::ModelError::NotFound("booking"))?
        .into();
    found.status = Set(status);
    found.updated_at = Set(Utc::now().into());
    found.update(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
