//! SeaORM Entity for entries table
//!
//! Entries are the weblog posts. The markdown sources (`body`, `excerpt`)
//! are authoritative; the `body_html` and `excerpt_html` columns are derived
//! by the save hook below and must never be written by anything else.

use crate::markdown;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, ConnectionTrait, Set};

/// Publication status of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[derive(Default)]
pub enum EntryStatus {
    /// Publicly visible
    #[default]
    #[sea_orm(num_value = 1)]
    Live,
    /// Work in progress, not listed
    #[sea_orm(num_value = 2)]
    Draft,
    /// Withdrawn from listings but kept in storage
    #[sea_orm(num_value = 3)]
    Hidden,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Unique per publish day, enforced by an expression index the schema
    /// setup installs (see `db::create_schema`).
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub body: String,
    pub pub_date: DateTime,
    /// Reference into external file storage; never dereferenced here.
    pub image: String,
    pub video: String,
    /// Reference into the external identity store; no FK on purpose.
    pub author_id: i32,
    pub enable_comments: bool,
    pub featured: bool,
    #[sea_orm(column_type = "Text")]
    pub excerpt_html: String,
    #[sea_orm(column_type = "Text")]
    pub body_html: String,
    pub status: EntryStatus,
    /// Free-form label set; parsed by the external tagging subsystem.
    pub tags: String,
}

impl Model {
    /// Presentation path for this entry: lower-cased year/month/day segments
    /// followed by the slug, e.g. `2024/mar/05/hello`.
    pub fn public_path(&self) -> String {
        format!(
            "{}/{}",
            self.pub_date.format("%Y/%b/%d").to_string().to_lowercase(),
            self.slug
        )
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

impl Related<super::categories::Entity> for Entity {
    fn to() -> RelationDef {
        super::entry_categories::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::entry_categories::Relation::Entry.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// Re-render the stored HTML before every insert or update.
    ///
    /// `body_html` tracks `body` unconditionally, empty body included. An
    /// empty excerpt leaves any previously rendered `excerpt_html` in place;
    /// callers that clear an excerpt must clear `excerpt_html` themselves.
    /// Storage failures propagate unchanged.
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(ref body) = self.body {
            self.body_html = Set(markdown::render(body));
        }
        if let ActiveValue::Set(ref excerpt) = self.excerpt {
            if !excerpt.is_empty() {
                self.excerpt_html = Set(markdown::render(excerpt));
            }
        }
        Ok(self)
    }
}
