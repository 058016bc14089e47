use crate::storage::entity::app::{self, Entity as App};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::collections::HashSet;

pub struct AppRepository;

impl AppRepository {
    /// Reset-then-set semantics: the classifier clears every flag before
    /// applying the fresh classification, so no stale flag survives a pass.
    pub async fn clear_accelerable(db: &DatabaseConnection) -> Result<u64, sea_orm::DbErr> {
        let res = App::update_many()
            .col_expr(app::Column::Accelerable, Expr::value(false))
            .filter(app::Column::Accelerable.eq(true))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn mark_accelerable(
        db: &DatabaseConnection,
        app_ids: &[i32],
    ) -> Result<u64, sea_orm::DbErr> {
        if app_ids.is_empty() {
            return Ok(0);
        }
        let res = App::update_many()
            .col_expr(app::Column::Accelerable, Expr::value(true))
            .filter(app::Column::Id.is_in(app_ids.to_vec()))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    pub async fn accelerable_ids(db: &DatabaseConnection) -> Result<HashSet<i32>, sea_orm::DbErr> {
        let rows = App::find()
            .filter(app::Column::Accelerable.eq(true))
            .all(db)
            .await?;
        Ok(rows.into_iter().map(|a| a.id).collect())
    }
}
