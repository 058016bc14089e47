use crate::accel::model::{
    RESULT_OUTCOME_NO_REPLY, RESULT_OUTCOME_SUCCESS, RESULT_SERVER_STATE_OVER,
};
use crate::storage::entity::result::{self, Entity as ResultRow};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

pub struct ResultRepository;

impl ResultRepository {
    pub async fn successes_for_batch(
        db: &DatabaseConnection,
        batch_id: i32,
    ) -> Result<Vec<result::Model>, sea_orm::DbErr> {
        ResultRow::find()
            .filter(result::Column::BatchId.eq(batch_id))
            .filter(result::Column::ServerState.eq(RESULT_SERVER_STATE_OVER))
            .filter(result::Column::Outcome.eq(RESULT_OUTCOME_SUCCESS))
            .all(db)
            .await
    }

    pub async fn no_replies_for_batch(
        db: &DatabaseConnection,
        batch_id: i32,
    ) -> Result<Vec<result::Model>, sea_orm::DbErr> {
        ResultRow::find()
            .filter(result::Column::BatchId.eq(batch_id))
            .filter(result::Column::ServerState.eq(RESULT_SERVER_STATE_OVER))
            .filter(result::Column::Outcome.eq(RESULT_OUTCOME_NO_REPLY))
            .all(db)
            .await
    }

    pub async fn for_workunit(
        db: &DatabaseConnection,
        workunit_id: i32,
    ) -> Result<Vec<result::Model>, sea_orm::DbErr> {
        ResultRow::find()
            .filter(result::Column::WorkunitId.eq(workunit_id))
            .order_by_asc(result::Column::Id)
            .all(db)
            .await
    }

    pub async fn raise_priority(
        db: &DatabaseConnection,
        id: i32,
        priority: i32,
    ) -> Result<(), sea_orm::DbErr> {
        ResultRow::update_many()
            .col_expr(result::Column::Priority, Expr::value(priority))
            .filter(result::Column::Id.eq(id))
            .exec(db)
            .await?;
        Ok(())
    }

    /// Undo any prior acceleration for a batch.
    pub async fn reset_priorities(
        db: &DatabaseConnection,
        batch_id: i32,
    ) -> Result<u64, sea_orm::DbErr> {
        let res = ResultRow::update_many()
            .col_expr(result::Column::Priority, Expr::value(0))
            .filter(result::Column::BatchId.eq(batch_id))
            .filter(result::Column::Priority.ne(0))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
