//! CRUD round-trips against a real MongoDB instance.
//!
//! Requires `MONGODB_URL`; each run uses a throwaway database that is dropped
//! at the end. Skipped when the variable is absent or `SKIP_DB_TESTS` is set.

use mongodb::bson::oid::ObjectId;

use models::dog::{CreateDogInput, UpdateDogInput};
use service::dog::{DogStore, MongoDogStore};

async fn setup_store() -> anyhow::Result<Option<(mongodb::Database, MongoDogStore)>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(None);
    }
    let url = match std::env::var("MONGODB_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("MONGODB_URL missing; skipping mongo integration tests");
            return Ok(None);
        }
    };
    let db_name = format!("adopdog_test_{}", ObjectId::new().to_hex());
    let db = models::db::connect(&url, &db_name).await?;
    let store = MongoDogStore::new(&db);
    Ok(Some((db, store)))
}

fn rex() -> CreateDogInput {
    CreateDogInput {
        name: Some("Rex".into()),
        age: Some(3.0),
        gender: Some("male".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn mongo_full_record_lifecycle() -> anyhow::Result<()> {
    let Some((db, store)) = setup_store().await? else { return Ok(()) };

    let created = store.create(rex()).await?;
    let id = created.id.expect("store assigned an id").to_hex();
    assert_eq!(id.len(), 24);

    let fetched = store.get(&id).await?.expect("round-trip");
    assert_eq!(fetched, created);

    let updated = store
        .update(&id, UpdateDogInput { weight: Some(20.0), ..Default::default() })
        .await?
        .expect("record exists");
    assert_eq!(updated.weight, Some(20.0));
    assert_eq!(updated.name, "Rex");

    let deleted = store.delete(&id).await?.expect("record existed");
    assert_eq!(deleted, updated);
    assert_eq!(store.get(&id).await?, None);

    db.drop().await.ok();
    Ok(())
}

#[tokio::test]
async fn mongo_rejects_malformed_id_without_round_trip() -> anyhow::Result<()> {
    let Some((db, store)) = setup_store().await? else { return Ok(()) };

    let err = store.get("not-an-id").await.unwrap_err();
    assert!(matches!(err, service::errors::ServiceError::InvalidId(_)));

    let missing = ObjectId::new().to_hex();
    assert_eq!(store.get(&missing).await?, None);
    assert_eq!(store.delete(&missing).await?, None);

    db.drop().await.ok();
    Ok(())
}
