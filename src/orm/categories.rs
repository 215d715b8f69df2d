//! SeaORM Entity for categories table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(unique)]
    pub slug: String,
}

impl Model {
    /// Presentation path for this category, e.g. `/categories/rock`.
    pub fn public_path(&self) -> String {
        format!("/categories/{}", self.slug)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entry_categories::Entity")]
    EntryCategories,
}

impl Related<super::entry_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntryCategories.def()
    }
}

impl Related<super::entries::Entity> for Entity {
    fn to() -> RelationDef {
        super::entry_categories::Relation::Entry.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::entry_categories::Relation::Category.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
