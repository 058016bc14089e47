use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "results")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub workunit_id: i32,
    pub batch_id: i32,
    pub host_id: i32,
    pub server_state: i32, // UNSENT/IN_PROGRESS/OVER, see accel::model
    pub outcome: i32,      // UNDEFINED/SUCCESS/FAILURE/NO_REPLY
    pub priority: i32,
    pub sent_time: i64,
    pub received_time: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
