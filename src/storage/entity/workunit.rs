use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workunits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub batch_id: i32,
    pub name: String,
    pub priority: i32,
    /// Replica count the transitioner is asked to maintain.
    pub target_nresults: i32,
    /// Hard cap on replicas across the workunit's lifetime.
    pub max_total_results: i32,
    pub error_mask: i32,
    pub canonical_result_id: i32, // 0 = not validated yet
    pub transition_time: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
