use anyhow::Result;
use chrono::NaiveDate;
use sea_orm::EntityTrait;
use uuid::Uuid;

use super::test_db;
use crate::{booking, car_service, errors::ModelError};

fn unique_email() -> String {
    format!("crud_{}@example.com", Uuid::new_v4())
}

#[tokio::test]
async fn test_service_create_and_summary() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };

    let code = Uuid::new_v4().simple().to_string()[..12].to_string();
    let created = car_service::create(
        &db,
        car_service::NewService {
            service_id: code.clone(),
            title: "Battery Charge".into(),
            img: "https://example.com/battery.jpg".into(),
            price: "20.00".into(),
            description: "Charge and test".into(),
        },
    )
    .await?;

    let summary = car_service::find_summary(&db, created.id).await?.expect("summary");
    assert_eq!(summary.service_id, code);
    assert_eq!(summary.price, "20.00");

    let missing = car_service::find_summary(&db, Uuid::new_v4()).await?;
    assert!(missing.is_none());

    car_service::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_booking_crud_by_owner() -> Result<()> {
    let Some(db) = test_db().await? else { return Ok(()) };

    let email = unique_email();
    let other = unique_email();
    let input = |owner: &str| booking::NewBooking {
        customer_name: "Owner".into(),
        email: owner.to_string(),
        service_id: "01".into(),
        service: "Full Car Repair".into(),
        date: NaiveDate::from_ymd_opt(2024, 7, 1).expect("date"),
        price: "200.00".into(),
        img: None,
    };

    let mine = booking::create(&db, input(&email)).await?;
    let theirs = booking::create(&db, input(&other)).await?;
    assert_eq!(mine.status, booking::DEFAULT_STATUS);

    let listed = booking::list(&db, Some(&email)).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, mine.id);

    let updated = booking::set_status(&db, mine.id, "confirm").await?;
    assert_eq!(updated.status, "confirm");
    assert!(updated.updated_at >= mine.updated_at);

    match booking::set_status(&db, Uuid::new_v4(), "confirm").await {
        Err(ModelError::NotFound(_)) => {}
        other => panic!("expected NotFound, got {other:?}"),
    }

    assert!(booking::hard_delete(&db, mine.id).await?);
    assert!(!booking::hard_delete(&db, mine.id).await?);
    assert!(booking::hard_delete(&db, theirs.id).await?);
    Ok(())
}
