//! Seeding helpers shared by the integration tests. Every test runs against
//! a fresh in-memory SQLite database bootstrapped by the crate's own
//! connection setup.
#![allow(dead_code)]

use batch_accel::storage::entity::{app, batch, host, result, workunit};
use batch_accel::storage::establish_connection;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub async fn setup_db() -> DatabaseConnection {
    establish_connection("sqlite::memory:")
        .await
        .expect("in-memory database")
}

pub async fn insert_app(db: &DatabaseConnection, id: i32, accelerable: bool) {
    app::ActiveModel {
        id: Set(id),
        name: Set(format!("app-{}", id)),
        accelerable: Set(accelerable),
        created_at: Set(0),
    }
    .insert(db)
    .await
    .expect("insert app");
}

pub async fn insert_host(db: &DatabaseConnection, id: i32, low_turnaround: bool) {
    host::ActiveModel {
        id: Set(id),
        domain_name: Set(format!("host-{}.example.org", id)),
        low_turnaround: Set(low_turnaround),
        created_at: Set(0),
    }
    .insert(db)
    .await
    .expect("insert host");
}

pub async fn insert_batch(
    db: &DatabaseConnection,
    id: i32,
    app_id: i32,
    state: i32,
    create_time: i64,
    expire_time: i64,
) {
    batch::ActiveModel {
        id: Set(id),
        app_id: Set(app_id),
        name: Set(format!("batch-{}", id)),
        state: Set(state),
        fraction_done: Set(0.0),
        expire_time: Set(expire_time),
        create_time: Set(create_time),
        completed_time: Set(None),
    }
    .insert(db)
    .await
    .expect("insert batch");
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_workunit(
    db: &DatabaseConnection,
    id: i32,
    batch_id: i32,
    priority: i32,
    target_nresults: i32,
    max_total_results: i32,
    error_mask: i32,
    canonical_result_id: i32,
) {
    workunit::ActiveModel {
        id: Set(id),
        batch_id: Set(batch_id),
        name: Set(format!("wu-{}", id)),
        priority: Set(priority),
        target_nresults: Set(target_nresults),
        max_total_results: Set(max_total_results),
        error_mask: Set(error_mask),
        canonical_result_id: Set(canonical_result_id),
        transition_time: Set(0),
    }
    .insert(db)
    .await
    .expect("insert workunit");
}

#[allow(clippy::too_many_arguments)]
pub async fn insert_result(
    db: &DatabaseConnection,
    id: i32,
    workunit_id: i32,
    batch_id: i32,
    host_id: i32,
    server_state: i32,
    outcome: i32,
    priority: i32,
    sent_time: i64,
    received_time: i64,
) {
    result::ActiveModel {
        id: Set(id),
        workunit_id: Set(workunit_id),
        batch_id: Set(batch_id),
        host_id: Set(host_id),
        server_state: Set(server_state),
        outcome: Set(outcome),
        priority: Set(priority),
        sent_time: Set(sent_time),
        received_time: Set(received_time),
    }
    .insert(db)
    .await
    .expect("insert result");
}
