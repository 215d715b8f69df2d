//! SeaORM Entity for artist_genders junction table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "artist_genders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub artist_id: i32,
    pub gender_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::artists::Entity",
        from = "Column::ArtistId",
        to = "super::artists::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Artist,
    #[sea_orm(
        belongs_to = "super::genders::Entity",
        from = "Column::GenderId",
        to = "super::genders::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Gender,
}

impl Related<super::artists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Artist.def()
    }
}

impl Related<super::genders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Gender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
