use anyhow::Context;
use batch_accel::accel::BatchAccelerator;
use batch_accel::config::ProjectConfig;
use batch_accel::storage;
use log::info;
use std::sync::Arc;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    // Progress lines go to stdout for cron log capture.
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .filter_module("sqlx", log::LevelFilter::Error)
        .filter_module("sea_orm", log::LevelFilter::Error)
        .init();

    dotenv::dotenv().ok();

    let config = ProjectConfig::from_env().context("reading project configuration")?;
    let db = storage::establish_connection(&config.database_url)
        .await
        .context("connecting to project database")?;
    let db = Arc::new(db);

    let summary = BatchAccelerator::new(db, config)
        .run()
        .await
        .context("acceleration pass failed")?;

    info!(
        "pass finished: {} batches examined, {} accelerated, {} completed, {} reset; {} workunits boosted, {} replicas requested, {} result priorities raised",
        summary.batches_examined,
        summary.batches_accelerated,
        summary.batches_completed,
        summary.batches_reset,
        summary.workunits_boosted,
        summary.replicas_requested,
        summary.results_boosted
    );

    Ok(())
}
