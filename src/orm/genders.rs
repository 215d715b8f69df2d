//! SeaORM Entity for genders table

use sea_orm::entity::prelude::*;

/// Musical gender used to classify artists.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "genders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artist_genders::Entity")]
    ArtistGenders,
}

impl Related<super::artist_genders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistGenders.def()
    }
}

impl Related<super::artists::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_genders::Relation::Artist.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_genders::Relation::Gender.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
