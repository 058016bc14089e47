use crate::storage::entity::{app, batch, host, result, workunit};
use log::info;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr, Schema,
    Statement,
};
use std::time::Duration;

pub async fn establish_connection(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(db_url.to_owned());
    opt.max_connections(10)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(8))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;
    let builder = db.get_database_backend();

    if builder == DatabaseBackend::Sqlite {
        db.execute(Statement::from_string(
            builder,
            "PRAGMA journal_mode=WAL;".to_string(),
        ))
        .await?;
    }

    // Create tables (if not exist). On the production MySQL database the
    // tables already exist; this matters for local SQLite runs and tests.
    let schema = Schema::new(builder);

    let stmt = builder.build(schema.create_table_from_entity(app::Entity).if_not_exists());
    db.execute(stmt).await?;

    let stmt = builder.build(
        schema
            .create_table_from_entity(host::Entity)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    let stmt = builder.build(
        schema
            .create_table_from_entity(batch::Entity)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    let stmt = builder.build(
        schema
            .create_table_from_entity(workunit::Entity)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    let stmt = builder.build(
        schema
            .create_table_from_entity(result::Entity)
            .if_not_exists(),
    );
    db.execute(stmt).await?;

    if builder == DatabaseBackend::Sqlite {
        for ddl in [
            "CREATE INDEX IF NOT EXISTS idx_results_batch ON results(batch_id);",
            "CREATE INDEX IF NOT EXISTS idx_results_workunit ON results(workunit_id);",
            "CREATE INDEX IF NOT EXISTS idx_workunits_batch ON workunits(batch_id);",
        ] {
            db.execute(Statement::from_string(builder, ddl.to_string()))
                .await?;
        }
    }

    info!("database connection established, schema verified");

    Ok(db)
}
