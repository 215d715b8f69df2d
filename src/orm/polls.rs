//! SeaORM Entity for polls table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "polls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub is_active: bool,
    pub pub_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::poll_choices::Entity")]
    PollChoices,
}

impl Related<super::poll_choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PollChoices.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
