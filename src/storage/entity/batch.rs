use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub app_id: i32,
    pub name: String,
    pub state: i32, // INIT/IN_PROGRESS/COMPLETE/ABORTED/RETIRED, see accel::model
    pub fraction_done: f64,
    /// Median turnaround (seconds) over the batch's successful results.
    /// 0 means no or insufficient turnaround data this pass.
    pub expire_time: i64,
    pub create_time: i64,
    #[sea_orm(nullable)]
    pub completed_time: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
