use crate::domain::{
    member::entity::{member, member_town},
    party::entity::{party, party_apply, party_comment, party_like, party_tag},
    post::entity::{category, comment, post, post_image},
    town::entity::town,
};
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema, Statement};
use std::env;
use tracing::info;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    info!("Successfully connected to the database.");

    // Check if schema update is enabled
    let should_update_schema = env::var("DB_SCHEMA_UPDATE")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid DB_SCHEMA_UPDATE value, defaulting to false. Use 'true' or 'false'."
            );
            false
        });

    if should_update_schema {
        // Auto-create tables (Schema Sync)
        create_tables(&db).await?;
    } else {
        info!("Skipping database schema synchronization (DB_SCHEMA_UPDATE is not true).");
    }

    Ok(db)
}

pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Starting database schema synchronization...");

    // List of entities to create
    // Order matters for foreign keys! (Parent first, then Child)

    // 1. Independent Entities
    create_table_if_not_exists(db, &schema, member::Entity).await?;
    create_table_if_not_exists(db, &schema, town::Entity).await?;
    create_table_if_not_exists(db, &schema, category::Entity).await?;

    // 2. Dependent Entities (Level 1)
    create_table_if_not_exists(db, &schema, member_town::Entity).await?;
    create_table_if_not_exists(db, &schema, party::Entity).await?;
    create_table_if_not_exists(db, &schema, post::Entity).await?;

    // 3. Dependent Entities (Level 2)
    create_table_if_not_exists(db, &schema, party_tag::Entity).await?;
    create_table_if_not_exists(db, &schema, party_apply::Entity).await?;
    create_table_if_not_exists(db, &schema, party_comment::Entity).await?;
    create_table_if_not_exists(db, &schema, party_like::Entity).await?;
    create_table_if_not_exists(db, &schema, post_image::Entity).await?;
    create_table_if_not_exists(db, &schema, comment::Entity).await?;

    // 중복 신청/관심 등록은 서비스 계층에서 먼저 걸러지지만,
    // 동시 요청 경쟁에 대비해 DB 수준에서도 막는다.
    create_unique_index_if_not_exists(
        db,
        "uq_party_apply_party_target",
        "party_apply",
        &["party_id", "target_member_id"],
    )
    .await?;
    create_unique_index_if_not_exists(
        db,
        "uq_party_like_party_member",
        "party_like",
        &["party_id", "member_id"],
    )
    .await?;

    info!("Database schema synchronization completed.");
    Ok(())
}

async fn create_unique_index_if_not_exists(
    db: &DatabaseConnection,
    index_name: &str,
    table_name: &str,
    columns: &[&str],
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let cols = columns.join(", ");
    let sql = format!(
        "CREATE UNIQUE INDEX {} ON {} ({})",
        index_name, table_name, cols
    );
    let stmt = Statement::from_string(backend, sql);
    match db.execute(stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            // Ignore duplicate index errors for idempotency.
            let err_str = e.to_string().to_lowercase();
            if err_str.contains("duplicate")
                || err_str.contains("already exists")
                || err_str.contains("exists")
            {
                Ok(())
            } else {
                tracing::error!("Failed to create unique index {}: {}", index_name, e);
                Err(e)
            }
        }
    }
}

async fn create_table_if_not_exists<E>(
    db: &DatabaseConnection,
    schema: &Schema,
    entity: E,
) -> Result<(), DbErr>
where
    E: sea_orm::EntityTrait,
{
    let backend = db.get_database_backend();
    let create_stmt: Statement =
        backend.build(schema.create_table_from_entity(entity).if_not_exists());

    match db.execute(create_stmt).await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!("Failed to create table: {}", e);
            Err(e)
        }
    }
}
