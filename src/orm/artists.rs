//! SeaORM Entity for artists table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "artists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub slug: String,
    /// Reference into external file storage; never dereferenced here.
    pub image: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::songs::Entity")]
    Songs,
    #[sea_orm(has_many = "super::artist_genders::Entity")]
    ArtistGenders,
}

impl Related<super::songs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Songs.def()
    }
}

impl Related<super::artist_genders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ArtistGenders.def()
    }
}

impl Related<super::genders::Entity> for Entity {
    fn to() -> RelationDef {
        super::artist_genders::Relation::Gender.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::artist_genders::Relation::Artist.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
