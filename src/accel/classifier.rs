use crate::accel::model::{
    ClassifierSummary, NttAccum, CLASSIFY_WINDOW_SECS, LOW_TURNAROUND_MEAN_NTT,
    MIN_APP_HOSTS, MIN_APP_LTT_FRACTION, MIN_MEDIAN_SAMPLES, NO_REPLY_NTT_PENALTY,
};
use crate::storage::repository::{
    AppRepository, BatchRepository, HostRepository, ResultRepository,
};
use chrono::Utc;
use log::{debug, info};
use sea_orm::DatabaseConnection;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Derives, from recently completed work, which hosts are fast relative to
/// their peers and which apps have enough fast hosts to be worth
/// accelerating.
///
/// Classification is stateless: flags are computed into fresh in-memory maps
/// each pass and then persisted reset-then-set, so no stale flag survives a
/// run in which the host or app contributed nothing.
pub struct TurnaroundClassifier {
    db: Arc<DatabaseConnection>,
}

impl TurnaroundClassifier {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn run(&self) -> Result<ClassifierSummary, sea_orm::DbErr> {
        let db = self.db.as_ref();
        let mut summary = ClassifierSummary::default();

        let cutoff = Utc::now().timestamp() - CLASSIFY_WINDOW_SECS;
        let batches = BatchRepository::recent_classifiable(db, cutoff).await?;

        let mut host_ntt: HashMap<i32, NttAccum> = HashMap::new();
        let mut app_hosts: HashMap<i32, HashSet<i32>> = HashMap::new();

        for batch in &batches {
            summary.batches_scanned += 1;

            let successes = ResultRepository::successes_for_batch(db, batch.id).await?;
            if successes.len() < MIN_MEDIAN_SAMPLES {
                debug!(
                    "batch {} ({}): {} successful results, below the {} sample floor",
                    batch.id,
                    batch.name,
                    successes.len(),
                    MIN_MEDIAN_SAMPLES
                );
                BatchRepository::set_expire_time(db, batch.id, 0).await?;
                continue;
            }

            let mut turnarounds: Vec<i64> = successes
                .iter()
                .map(|r| r.received_time - r.sent_time)
                .collect();
            turnarounds.sort_unstable();
            let median = midpoint_median(&turnarounds);
            if median <= 0 {
                // Degenerate timestamps; the NTT ratio would be meaningless.
                BatchRepository::set_expire_time(db, batch.id, 0).await?;
                continue;
            }

            let hosts = app_hosts.entry(batch.app_id).or_default();
            for r in &successes {
                let ntt = (r.received_time - r.sent_time) as f64 / median as f64;
                host_ntt.entry(r.host_id).or_default().add(ntt);
                hosts.insert(r.host_id);
            }

            let no_replies = ResultRepository::no_replies_for_batch(db, batch.id).await?;
            for r in &no_replies {
                host_ntt
                    .entry(r.host_id)
                    .or_default()
                    .add(NO_REPLY_NTT_PENALTY);
                hosts.insert(r.host_id);
            }

            BatchRepository::set_expire_time(db, batch.id, median).await?;
            summary.batches_with_median += 1;
            debug!(
                "batch {} ({}): median turnaround {}s over {} results, {} no-replies",
                batch.id,
                batch.name,
                median,
                successes.len(),
                no_replies.len()
            );
        }

        let low_turnaround: HashSet<i32> = host_ntt
            .iter()
            .filter(|(_, acc)| acc.mean() < LOW_TURNAROUND_MEAN_NTT)
            .map(|(id, _)| *id)
            .collect();

        HostRepository::clear_low_turnaround(db).await?;
        let ltt_ids: Vec<i32> = low_turnaround.iter().copied().collect();
        HostRepository::mark_low_turnaround(db, &ltt_ids).await?;

        let mut accelerable: Vec<i32> = Vec::new();
        for (app_id, hosts) in &app_hosts {
            if hosts.len() <= MIN_APP_HOSTS {
                continue;
            }
            let fast = hosts.iter().filter(|h| low_turnaround.contains(h)).count();
            if fast as f64 / hosts.len() as f64 > MIN_APP_LTT_FRACTION {
                accelerable.push(*app_id);
            }
        }
        AppRepository::clear_accelerable(db).await?;
        AppRepository::mark_accelerable(db, &accelerable).await?;

        summary.hosts_sampled = host_ntt.len();
        summary.low_turnaround_hosts = low_turnaround.len();
        summary.accelerable_apps = accelerable.len();
        info!(
            "classifier: {} batches scanned, {} with a median, {}/{} hosts low-turnaround, {} apps accelerable",
            summary.batches_scanned,
            summary.batches_with_median,
            summary.low_turnaround_hosts,
            summary.hosts_sampled,
            summary.accelerable_apps
        );

        Ok(summary)
    }
}

/// Element at index n/2 of the sorted samples. For even n this picks one of
/// the two middle elements instead of averaging them; kept deliberately so
/// stored medians match what earlier tooling wrote.
fn midpoint_median(sorted: &[i64]) -> i64 {
    sorted[sorted.len() / 2]
}
