//! Weblog entry data access
//!
//! Typed create/read/update/delete operations over the `entries` table and
//! its category join rows. Markdown rendering itself lives in the entity's
//! save hook, so every write path below picks it up automatically.

use crate::orm::{categories, entries, entry_categories};
use anyhow::{anyhow, Result};
use chrono::Utc;
use sea_orm::{entity::*, query::*, DatabaseConnection, TransactionTrait};
use validator::Validate;

/// Caller-supplied state for an entry.
///
/// Used for both creation and full-state updates, mirroring how the site
/// edits entries: the form always carries every field.
#[derive(Debug, Clone, Validate)]
pub struct NewEntry {
    #[validate(length(min = 1, max = 250))]
    pub title: String,
    #[validate(length(min = 1, max = 250))]
    pub slug: String,
    pub excerpt: String,
    pub body: String,
    /// Defaults to the current time at creation when not supplied. On
    /// update, `None` keeps the stored publish date.
    pub pub_date: Option<chrono::NaiveDateTime>,
    pub image: String,
    #[validate(length(max = 250))]
    pub video: String,
    pub author_id: i32,
    pub enable_comments: bool,
    pub featured: bool,
    pub status: entries::EntryStatus,
    pub tags: String,
}

impl Default for NewEntry {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            body: String::new(),
            pub_date: None,
            image: String::new(),
            video: String::new(),
            author_id: 0,
            enable_comments: true,
            featured: false,
            status: entries::EntryStatus::Live,
            tags: String::new(),
        }
    }
}

pub async fn create_entry(db: &DatabaseConnection, entry: NewEntry) -> Result<entries::Model> {
    entry.validate()?;

    let model = entries::ActiveModel {
        title: Set(entry.title),
        slug: Set(entry.slug),
        excerpt: Set(entry.excerpt),
        body: Set(entry.body),
        pub_date: Set(entry.pub_date.unwrap_or_else(|| Utc::now().naive_utc())),
        image: Set(entry.image),
        video: Set(entry.video),
        author_id: Set(entry.author_id),
        enable_comments: Set(entry.enable_comments),
        featured: Set(entry.featured),
        // Overwritten by the save hook whenever the sources are non-empty.
        excerpt_html: Set(String::new()),
        body_html: Set(String::new()),
        status: Set(entry.status),
        tags: Set(entry.tags),
        ..Default::default()
    }
    .insert(db)
    .await?;

    log::debug!("Created entry {} ({})", model.id, model.slug);
    Ok(model)
}

/// Full-state update of an existing entry. The save hook re-renders
/// `body_html`, and `excerpt_html` when the new excerpt is non-empty.
pub async fn update_entry(
    db: &DatabaseConnection,
    id: i32,
    entry: NewEntry,
) -> Result<entries::Model> {
    entry.validate()?;

    let current = entries::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| anyhow!("no such entry: {}", id))?;

    let mut active: entries::ActiveModel = current.into();
    active.title = Set(entry.title);
    active.slug = Set(entry.slug);
    active.excerpt = Set(entry.excerpt);
    active.body = Set(entry.body);
    if let Some(pub_date) = entry.pub_date {
        active.pub_date = Set(pub_date);
    }
    active.image = Set(entry.image);
    active.video = Set(entry.video);
    active.author_id = Set(entry.author_id);
    active.enable_comments = Set(entry.enable_comments);
    active.featured = Set(entry.featured);
    active.status = Set(entry.status);
    active.tags = Set(entry.tags);

    let model = active.update(db).await?;
    log::debug!("Updated entry {} ({})", model.id, model.slug);
    Ok(model)
}

pub async fn get_entry(db: &DatabaseConnection, id: i32) -> Result<Option<entries::Model>> {
    Ok(entries::Entity::find_by_id(id).one(db).await?)
}

pub async fn delete_entry(db: &DatabaseConnection, id: i32) -> Result<u64> {
    let result = entries::Entity::delete_by_id(id).exec(db).await?;
    log::debug!("Deleted entry {}", id);
    Ok(result.rows_affected)
}

/// Live entries, newest first. The public listing query.
pub async fn live_entries(db: &DatabaseConnection) -> Result<Vec<entries::Model>> {
    Ok(entries::Entity::find()
        .filter(entries::Column::Status.eq(entries::EntryStatus::Live))
        .order_by_desc(entries::Column::PubDate)
        .all(db)
        .await?)
}

/// Replace the entry's category set with the given category ids.
///
/// Runs in a transaction; a failed insert rolls the delete back, keeping the
/// prior links.
pub async fn set_categories(
    db: &DatabaseConnection,
    entry_id: i32,
    category_ids: &[i32],
) -> Result<()> {
    let txn = db.begin().await?;

    entry_categories::Entity::delete_many()
        .filter(entry_categories::Column::EntryId.eq(entry_id))
        .exec(&txn)
        .await?;

    for &category_id in category_ids {
        entry_categories::ActiveModel {
            entry_id: Set(entry_id),
            category_id: Set(category_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;

    log::debug!(
        "Set {} categories on entry {}",
        category_ids.len(),
        entry_id
    );
    Ok(())
}

pub async fn categories_for_entry(
    db: &DatabaseConnection,
    entry: &entries::Model,
) -> Result<Vec<categories::Model>> {
    Ok(entry.find_related(categories::Entity).all(db).await?)
}
