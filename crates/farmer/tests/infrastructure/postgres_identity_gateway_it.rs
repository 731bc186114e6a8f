// crates/farmer/tests/infrastructure/postgres_identity_gateway_it.rs

use std::sync::Arc;
use farmer::domain::ports::IdentityGateway;
use farmer::domain::value_objects::PhoneNumber;
use farmer::infrastructure::identity::{CustomTokenSigner, PostgresIdentityGateway};
use shared_kernel::clock::{Clock, SystemClock};
use shared_kernel::errors::DomainError;

async fn get_gateway() -> (
    PostgresIdentityGateway,
    CustomTokenSigner,
    testcontainers::ContainerAsync<testcontainers_modules::postgres::Postgres>,
) {
    let (pool, container) = crate::common::setup_postgres_test_db().await;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let gateway = PostgresIdentityGateway::new(
        pool,
        CustomTokenSigner::new("it-secret", 3600, clock.clone()),
        clock.clone(),
    );
    // Même secret : sert à vérifier les jetons émis
    let verifier = CustomTokenSigner::new("it-secret", 3600, clock);
    (gateway, verifier, container)
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_identity_lifecycle() {
    let (gateway, verifier, _c) = get_gateway().await;
    let phone = PhoneNumber::normalize("0712345678");

    // 1. Création
    let uid = gateway.create_identity(&phone).await.unwrap();

    // 2. Recherche par numéro
    let record = gateway
        .find_by_phone_number(&phone)
        .await
        .unwrap()
        .expect("Should find identity");
    assert_eq!(record.uid, uid);
    assert_eq!(record.phone_number.as_str(), "+256712345678");

    // 3. Jeton vérifiable
    let token = gateway.issue_token(&uid).await.unwrap();
    let claims = verifier.verify(token.as_str()).unwrap();
    assert_eq!(claims.uid, uid.as_str());
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_duplicate_phone_number_is_already_exists() {
    let (gateway, _verifier, _c) = get_gateway().await;
    let phone = PhoneNumber::normalize("0712345678");

    gateway.create_identity(&phone).await.unwrap();
    let err = gateway.create_identity(&phone).await.unwrap_err();

    assert!(matches!(
        err,
        DomainError::AlreadyExists { entity: "Identity", field: "phone_number", .. }
    ));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_malformed_phone_number_is_rejected_by_provider() {
    let (gateway, _verifier, _c) = get_gateway().await;

    let err = gateway
        .create_identity(&PhoneNumber::normalize("712345678"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Validation { field: "phone_number", .. }));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn test_unknown_phone_number_is_none() {
    let (gateway, _verifier, _c) = get_gateway().await;

    let found = gateway
        .find_by_phone_number(&PhoneNumber::from_raw("+256799999999"))
        .await
        .unwrap();

    assert!(found.is_none());
}
