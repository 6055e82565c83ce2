use aqua_core::{
    setup_schema, AquaError, CoefficientStore, DbCoefficientStore, UserRepository,
};
use aqua_types::Coefficients;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

async fn create_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");
    setup_schema(&db).await.expect("Failed to create schema");
    db
}

#[tokio::test]
async fn test_lookup_unknown_node_is_none() {
    let store = DbCoefficientStore::new(create_test_db().await);
    assert_eq!(store.lookup("missing").await.unwrap(), None);
}

#[tokio::test]
async fn test_create_then_lookup() {
    let store = DbCoefficientStore::new(create_test_db().await);
    let row = store.create("N1", "1,2,3").await.unwrap();
    assert_eq!(row.model_name, "N1");
    assert_eq!(row.coefficients, "1,2,3");

    let c = store.lookup("N1").await.unwrap();
    assert_eq!(c, Some(Coefficients::new(1.0, 2.0, 3.0)));
    // 精确匹配
    assert_eq!(store.lookup("n1").await.unwrap(), None);
}

#[tokio::test]
async fn test_create_duplicate_and_invalid() {
    let store = DbCoefficientStore::new(create_test_db().await);
    store.create("N1", "1,2,3").await.unwrap();

    assert!(matches!(
        store.create("N1", "4,5,6").await,
        Err(AquaError::AlreadyExists(_))
    ));
    assert!(matches!(
        store.create("N2", "4,5").await,
        Err(AquaError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_update_list_delete() {
    let store = DbCoefficientStore::new(create_test_db().await);
    for i in 0..5 {
        store.create(&format!("N{}", i), "1,2,3").await.unwrap();
    }

    let updated = store.update("N2", "0.5, 0.25, 1").await.unwrap();
    assert_eq!(updated.coefficients, "0.5, 0.25, 1");
    assert_eq!(
        store.lookup("N2").await.unwrap(),
        Some(Coefficients::new(0.5, 0.25, 1.0))
    );

    let page = store.list(1, 2).await.unwrap();
    let names: Vec<_> = page.iter().map(|r| r.model_name.as_str()).collect();
    assert_eq!(names, vec!["N1", "N2"]);

    let deleted = store.delete("N3").await.unwrap();
    assert_eq!(deleted.model_name, "N3");
    assert!(matches!(store.get("N3").await, Err(AquaError::NotFound(_))));
    assert!(matches!(store.delete("N3").await, Err(AquaError::NotFound(_))));
    assert!(matches!(
        store.update("N3", "1,2,3").await,
        Err(AquaError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_malformed_stored_row_is_reported() {
    use aqua_core::entity::model_coefficients;

    let db = create_test_db().await;
    model_coefficients::ActiveModel {
        model_name: Set("legacy".to_string()),
        coefficients: Set("1;2;3".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let store = DbCoefficientStore::new(db);
    assert!(matches!(
        store.lookup("legacy").await,
        Err(AquaError::MalformedCoefficients { .. })
    ));
}

#[tokio::test]
async fn test_ensure_user_is_idempotent() {
    let repo = UserRepository::new(create_test_db().await);
    let first = repo.ensure_user("admin", "hash-a").await.unwrap();
    let second = repo.ensure_user("admin", "hash-b").await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.hashed_password, "hash-a");
    assert!(second.is_active);
    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
}
