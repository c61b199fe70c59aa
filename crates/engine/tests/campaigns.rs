use chrono::Utc;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};

use engine::{CampaignCmd, CampaignStatus, Engine, EngineError};
use migration::MigratorTrait;
use uuid::Uuid;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn test_db_path() -> std::path::PathBuf {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_dbs");
    std::fs::create_dir_all(&root).unwrap();
    root.join(format!("campaigns_{}.db", Uuid::new_v4()))
}

fn spring_sale() -> CampaignCmd {
    CampaignCmd::new("Spring Sale", 500.0, CampaignStatus::Active)
}

#[tokio::test]
async fn new_campaign_assigns_id_and_created_at() {
    let (engine, _db) = engine_with_db().await;
    let before = Utc::now();

    let first = engine.new_campaign(spring_sale()).await.unwrap();
    let second = engine.new_campaign(spring_sale()).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "Spring Sale");
    assert_eq!(first.budget, 500.0);
    assert_eq!(first.status, CampaignStatus::Active);
    // creation time is truncated to microseconds
    assert!(first.created_at >= before - chrono::Duration::microseconds(1));
    assert!(second.created_at >= first.created_at);
}

#[tokio::test]
async fn created_campaign_is_listed_unchanged() {
    let (engine, _db) = engine_with_db().await;

    let created = engine
        .new_campaign(CampaignCmd::new("Clearance", -20.25, CampaignStatus::Paused))
        .await
        .unwrap();

    let campaigns = engine.campaigns().await.unwrap();
    assert_eq!(campaigns, vec![created.clone()]);

    let fetched = engine.campaign(&created.id.to_string()).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_replaces_mutable_fields_only() {
    let (engine, _db) = engine_with_db().await;
    let created = engine.new_campaign(spring_sale()).await.unwrap();

    let updated = engine
        .update_campaign(
            &created.id.to_string(),
            CampaignCmd::new("Summer Sale", 750.0, CampaignStatus::Paused),
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.created_at_rfc3339(), created.created_at_rfc3339());
    assert_eq!(updated.name, "Summer Sale");
    assert_eq!(updated.budget, 750.0);
    assert_eq!(updated.status, CampaignStatus::Paused);

    let campaigns = engine.campaigns().await.unwrap();
    assert_eq!(campaigns, vec![updated]);
}

#[tokio::test]
async fn update_allows_any_status_change() {
    let (engine, _db) = engine_with_db().await;
    let created = engine.new_campaign(spring_sale()).await.unwrap();
    let id = created.id.to_string();

    for status in [
        CampaignStatus::Paused,
        CampaignStatus::Paused,
        CampaignStatus::Active,
    ] {
        let updated = engine
            .update_campaign(&id, CampaignCmd::new("Spring Sale", 0.0, status))
            .await
            .unwrap();
        assert_eq!(updated.status, status);
    }
}

#[tokio::test]
async fn update_missing_campaign_is_not_found() {
    let (engine, _db) = engine_with_db().await;
    let created = engine.new_campaign(spring_sale()).await.unwrap();

    let err = engine
        .update_campaign("does-not-exist", spring_sale())
        .await
        .unwrap_err();

    assert_eq!(err, EngineError::CampaignNotFound("does-not-exist".to_string()));
    assert_eq!(engine.campaigns().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn delete_removes_campaign() {
    let (engine, _db) = engine_with_db().await;
    let kept = engine.new_campaign(spring_sale()).await.unwrap();
    let removed = engine
        .new_campaign(CampaignCmd::new("Black Friday", 1200.0, CampaignStatus::Paused))
        .await
        .unwrap();

    engine
        .delete_campaign(&removed.id.to_string())
        .await
        .unwrap();

    assert_eq!(engine.campaigns().await.unwrap(), vec![kept]);
    let err = engine
        .campaign(&removed.id.to_string())
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::CampaignNotFound(removed.id.to_string()));
}

#[tokio::test]
async fn delete_missing_campaign_is_not_found() {
    let (engine, _db) = engine_with_db().await;
    let created = engine.new_campaign(spring_sale()).await.unwrap();
    let missing = Uuid::new_v4().to_string();

    let err = engine.delete_campaign(&missing).await.unwrap_err();

    assert_eq!(err, EngineError::CampaignNotFound(missing));
    assert_eq!(engine.campaigns().await.unwrap(), vec![created]);
}

#[tokio::test]
async fn corrupted_row_is_reported() {
    let (engine, db) = engine_with_db().await;
    let backend = db.get_database_backend();
    db.execute(Statement::from_sql_and_values(
        backend,
        r#"INSERT INTO campaigns (id, name, budget, status, "createdAt") VALUES (?, ?, ?, ?, ?)"#,
        vec![
            Uuid::new_v4().to_string().into(),
            "Legacy".into(),
            1.0f64.into(),
            "archived".into(),
            "2026-10-16T09:30:00.000000+00:00".into(),
        ],
    ))
    .await
    .unwrap();

    let err = engine.campaigns().await.unwrap_err();
    assert!(matches!(err, EngineError::InvalidRecord(_)));
}

#[tokio::test]
async fn campaigns_survive_reconnect() {
    let path = test_db_path();
    let url = format!("sqlite:{}?mode=rwc", path.display());

    let created = {
        let db = Database::connect(&url).await.unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        let engine = Engine::builder().database(db.clone()).build().await.unwrap();
        let created = engine.new_campaign(spring_sale()).await.unwrap();
        db.close().await.unwrap();
        created
    };

    let db = Database::connect(&url).await.unwrap();
    // bootstrap must be idempotent on an existing table
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder().database(db.clone()).build().await.unwrap();

    assert_eq!(engine.campaigns().await.unwrap(), vec![created]);

    db.close().await.unwrap();
    let _ = std::fs::remove_file(path);
}
