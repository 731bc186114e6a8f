// crates/farmer/tests/infrastructure/postgres_farmer_repository_it.rs

use serde_json::json;
use farmer::domain::entities::FarmerProfile;
use farmer::domain::repositories::FarmerRepository;
use farmer::domain::value_objects::{DistrictName, FarmerId, PhoneNumber};
use farmer::infrastructure::postgres::repositories::PostgresFarmerRepository;

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_farmer_profile_put_and_get() {
    // 1. Base jetable + schéma
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresFarmerRepository::new(pool);

    let profile = FarmerProfile::register(
        json!({ "name": "Amina", "gender": "female", "latitude": 0.3 })
            .as_object()
            .cloned()
            .unwrap(),
        &PhoneNumber::normalize("0712345678"),
        FarmerId::try_new("uid-1").unwrap(),
        &DistrictName::from_raw("Kampala"),
    );

    // 2. Écriture puis relecture
    repo.put(&profile).await.unwrap();
    let found = repo
        .get(profile.farmer_id())
        .await
        .unwrap()
        .expect("Should find profile");

    // 3. Vérification (l'ordre des clés JSONB n'est pas garanti, l'égalité de Map l'ignore)
    assert_eq!(found, profile);
    assert_eq!(found.field("district_name"), Some(&json!("Kampala")));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_farmer_profile_put_overwrites_whole_document() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresFarmerRepository::new(pool);
    let id = FarmerId::try_new("uid-2").unwrap();

    let first = FarmerProfile::restore(
        id.clone(),
        json!({ "farmerID": "uid-2", "avatar": "a.png" }).as_object().cloned().unwrap(),
    );
    let second = FarmerProfile::restore(
        id.clone(),
        json!({ "farmerID": "uid-2", "name": "Okello" }).as_object().cloned().unwrap(),
    );

    repo.put(&first).await.unwrap();
    repo.put(&second).await.unwrap();

    let found = repo.get(&id).await.unwrap().unwrap();
    assert_eq!(found.field("avatar"), None);
    assert_eq!(found.field("name"), Some(&json!("Okello")));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_missing_farmer_profile_is_none() {
    let (pool, _c) = crate::common::setup_postgres_test_db().await;
    let repo = PostgresFarmerRepository::new(pool);

    let found = repo.get(&FarmerId::try_new("nobody").unwrap()).await.unwrap();

    assert!(found.is_none());
}
