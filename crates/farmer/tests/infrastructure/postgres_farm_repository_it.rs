// crates/farmer/tests/infrastructure/postgres_farm_repository_it.rs

use serde_json::{json, Value};
use farmer::domain::entities::FarmRecord;
use farmer::domain::repositories::FarmRepository;
use farmer::domain::value_objects::FarmerId;
use farmer::infrastructure::postgres::repositories::PostgresFarmRepository;

fn farm(body: Value) -> FarmRecord {
    FarmRecord::from_payload(body.as_object().cloned().unwrap()).unwrap()
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_farm_second_registration_replaces_first() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresFarmRepository::new(pool.clone());

    repo.put(&farm(json!({ "farmerID": "uid-1", "crops": ["coffee"], "irrigated": true })))
        .await
        .unwrap();
    repo.put(&farm(json!({ "farmerID": "uid-1", "crops": ["maize"] })))
        .await
        .unwrap();

    let found = repo
        .get(&FarmerId::try_new("uid-1").unwrap())
        .await
        .unwrap()
        .expect("Should find farm");
    assert_eq!(
        Value::Object(found.into_document()),
        json!({ "farmerID": "uid-1", "crops": ["maize"] })
    );

    // Une seule ligne par agriculteur
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM farms")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_farm_without_farmer_profile_is_accepted() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresFarmRepository::new(pool);

    let result = repo.put(&farm(json!({ "farmerID": "orphan", "size_ha": 1 }))).await;

    assert!(result.is_ok());
}
