use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Primary key type shared by tasks and their completion records.
pub type TaskId = i32;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(1024))", nullable)]
    pub title: Option<String>,
    pub due_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::done::Entity")]
    Done,
}

impl Related<super::done::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Done.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
