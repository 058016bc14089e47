use crate::accel::classifier::TurnaroundClassifier;
use crate::accel::model::{
    PassSummary, BOOST_PRIORITY, RESULT_SERVER_STATE_IN_PROGRESS, RESULT_SERVER_STATE_UNSENT,
};
use crate::config::ProjectConfig;
use crate::storage::entity::{batch, workunit};
use crate::storage::repository::{
    AppRepository, BatchRepository, ResultRepository, WorkunitRepository,
};
use chrono::Utc;
use log::{debug, info};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Speeds up completion of nearly-done batches of accelerable apps by raising
/// priorities and requesting extra replicas; normalizes priorities for
/// everything else.
///
/// Every pass re-derives the host/app classification first, so the outcome is
/// a function of current database state only. Repeated passes over unchanged
/// state converge: priorities are already at their targets and the replica
/// guard sees the still-pending `target_nresults` bump, so the second pass
/// writes nothing.
pub struct BatchAccelerator {
    db: Arc<DatabaseConnection>,
    config: ProjectConfig,
}

impl BatchAccelerator {
    pub fn new(db: Arc<DatabaseConnection>, config: ProjectConfig) -> Self {
        Self { db, config }
    }

    pub async fn run(&self) -> Result<PassSummary, sea_orm::DbErr> {
        let db = self.db.as_ref();

        // Fresh classification before acting, always.
        let classifier = TurnaroundClassifier::new(self.db.clone()).run().await?;
        let mut summary = PassSummary {
            classifier,
            ..Default::default()
        };

        let accelerable = AppRepository::accelerable_ids(db).await?;
        let batches = BatchRepository::in_progress(db).await?;
        let now = Utc::now().timestamp();

        for b in &batches {
            summary.batches_examined += 1;

            let workunits = WorkunitRepository::for_batch(db, b.id).await?;
            if workunits.is_empty() {
                continue;
            }
            let done = workunits
                .iter()
                .filter(|wu| wu.canonical_result_id != 0)
                .count();
            let fraction_done = done as f64 / workunits.len() as f64;
            BatchRepository::set_fraction_done(db, b.id, fraction_done).await?;

            if done == workunits.len() {
                info!(
                    "batch {} ({}): all {} workunits validated, marking complete",
                    b.id,
                    b.name,
                    workunits.len()
                );
                BatchRepository::mark_complete(db, b.id, now).await?;
                summary.batches_completed += 1;
                continue;
            }
            if fraction_done < self.config.min_frac_done {
                debug!(
                    "batch {} ({}): {}/{} done ({:.2}), below threshold {:.2}",
                    b.id,
                    b.name,
                    done,
                    workunits.len(),
                    fraction_done,
                    self.config.min_frac_done
                );
                continue;
            }

            if accelerable.contains(&b.app_id) {
                if b.expire_time == 0 {
                    info!(
                        "batch {} ({}): no turnaround median yet, not accelerating",
                        b.id, b.name
                    );
                    continue;
                }
                if self.accelerate_batch(b, &workunits, now, &mut summary).await? {
                    summary.batches_accelerated += 1;
                }
            } else {
                let wu_reset = WorkunitRepository::reset_priorities(db, b.id).await?;
                let res_reset = ResultRepository::reset_priorities(db, b.id).await?;
                if wu_reset + res_reset > 0 {
                    info!(
                        "batch {} ({}): app {} not accelerable, reset {} workunit and {} result priorities",
                        b.id, b.name, b.app_id, wu_reset, res_reset
                    );
                    summary.batches_reset += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Per outstanding workunit, at most one of: boost an existing unsent
    /// replica, or request a new one. An in-progress replica younger than the
    /// batch's median turnaround also suppresses replication.
    async fn accelerate_batch(
        &self,
        b: &batch::Model,
        workunits: &[workunit::Model],
        now: i64,
        summary: &mut PassSummary,
    ) -> Result<bool, sea_orm::DbErr> {
        let db = self.db.as_ref();
        let mut touched = false;

        for wu in workunits {
            if wu.canonical_result_id != 0 || wu.error_mask != 0 {
                continue;
            }

            let results = ResultRepository::for_workunit(db, wu.id).await?;
            // Request a replica only when the hard cap leaves room and the
            // transitioner does not already owe one from a previous pass.
            let mut add_replica = results.len() < wu.max_total_results as usize
                && results.len() >= wu.target_nresults as usize;

            for r in &results {
                match r.server_state {
                    RESULT_SERVER_STATE_UNSENT => {
                        if r.priority < BOOST_PRIORITY {
                            ResultRepository::raise_priority(db, r.id, BOOST_PRIORITY).await?;
                            summary.results_boosted += 1;
                            touched = true;
                        }
                        add_replica = false;
                    }
                    RESULT_SERVER_STATE_IN_PROGRESS => {
                        if now - r.sent_time < b.expire_time {
                            add_replica = false;
                        }
                    }
                    _ => {}
                }
            }

            let raise_priority = wu.priority == 0;
            if add_replica || raise_priority {
                WorkunitRepository::apply_boost(db, wu.id, add_replica, raise_priority, now)
                    .await?;
                if add_replica {
                    debug!("workunit {} ({}): requesting one more replica", wu.id, wu.name);
                    summary.replicas_requested += 1;
                }
                if raise_priority {
                    summary.workunits_boosted += 1;
                }
                touched = true;
            }
        }

        Ok(touched)
    }
}
