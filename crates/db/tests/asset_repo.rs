//! Integration tests for the asset repository.
//!
//! Each test gets a fresh, fully migrated SQLite database:
//! - Create then read back by id and by name
//! - Unique name constraint, sequential and concurrent
//! - Stable listing order

use inventory_db::models::asset::CreateAsset;
use inventory_db::repositories::AssetRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_asset(name: &str, asset_type: &str, asset_class: &str) -> CreateAsset {
    CreateAsset {
        name: name.to_string(),
        asset_type: asset_type.to_string(),
        asset_class: asset_class.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Bootstrap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_health_check(pool: SqlitePool) {
    inventory_db::health_check(&pool).await.unwrap();
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_assigns_id_and_round_trips(pool: SqlitePool) {
    let created = AssetRepo::create(&pool, &new_asset("correct", "antenna", "yagi"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.name, "correct");
    assert_eq!(created.asset_type, "antenna");
    assert_eq!(created.asset_class, "yagi");

    let by_id = AssetRepo::find_by_id(&pool, created.id).await.unwrap();
    assert_eq!(by_id.as_ref(), Some(&created));

    let by_name = AssetRepo::find_by_name(&pool, "correct").await.unwrap();
    assert_eq!(by_name, Some(created));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_ids_are_distinct(pool: SqlitePool) {
    let a = AssetRepo::create(&pool, &new_asset("dove-1", "satellite", "dove"))
        .await
        .unwrap();
    let b = AssetRepo::create(&pool, &new_asset("dove-2", "satellite", "dove"))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_missing_returns_none(pool: SqlitePool) {
    assert!(AssetRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(AssetRepo::find_by_name(&pool, "nope").await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_by_name_is_exact(pool: SqlitePool) {
    AssetRepo::create(&pool, &new_asset("dish-main", "antenna", "dish"))
        .await
        .unwrap();
    assert!(AssetRepo::find_by_name(&pool, "dish").await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_name_is_unique_violation(pool: SqlitePool) {
    AssetRepo::create(&pool, &new_asset("correct", "antenna", "yagi"))
        .await
        .unwrap();

    let err = AssetRepo::create(&pool, &new_asset("correct", "satellite", "dove"))
        .await
        .unwrap_err();
    assert!(inventory_db::is_unique_violation(&err), "got {err:?}");

    assert_eq!(AssetRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_concurrent_duplicate_creates_exactly_one(pool: SqlitePool) {
    let input = new_asset("racer", "antenna", "dish");
    let (first, second) = tokio::join!(
        AssetRepo::create(&pool, &input),
        AssetRepo::create(&pool, &input),
    );

    let results = [first, second];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1);

    let failure = results.iter().find_map(|r| r.as_ref().err()).unwrap();
    assert!(inventory_db::is_unique_violation(failure), "got {failure:?}");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_other_errors_are_not_unique_violations(pool: SqlitePool) {
    let err = sqlx::query("SELECT * FROM no_such_table")
        .execute(&pool)
        .await
        .unwrap_err();
    assert!(!inventory_db::is_unique_violation(&err));
    assert!(!inventory_db::is_unique_violation(&sqlx::Error::RowNotFound));
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_empty(pool: SqlitePool) {
    assert!(AssetRepo::list(&pool).await.unwrap().is_empty());
    assert!(AssetRepo::list_names(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_in_insertion_order_and_stable(pool: SqlitePool) {
    for name in ["zulu", "alpha", "mike"] {
        AssetRepo::create(&pool, &new_asset(name, "antenna", "yagi"))
            .await
            .unwrap();
    }

    let first = AssetRepo::list(&pool).await.unwrap();
    let names: Vec<_> = first.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["zulu", "alpha", "mike"]);

    let second = AssetRepo::list(&pool).await.unwrap();
    assert_eq!(first, second);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_names(pool: SqlitePool) {
    AssetRepo::create(&pool, &new_asset("dove-1", "satellite", "dove"))
        .await
        .unwrap();
    AssetRepo::create(&pool, &new_asset("eye-1", "satellite", "rapideye"))
        .await
        .unwrap();

    let names = AssetRepo::list_names(&pool).await.unwrap();
    assert_eq!(names.len(), 2);
    assert!(names.contains("dove-1"));
    assert!(names.contains("eye-1"));
}
