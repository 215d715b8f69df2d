//! Taxonomy data access: categories and genders
//!
//! Pure classification records. Categories label entries; genders classify
//! artists. Neither has behavior beyond field constraints.

use crate::orm::{categories, genders};
use anyhow::Result;
use sea_orm::{entity::*, query::*, DatabaseConnection};
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct NewCategory {
    #[validate(length(min = 1, max = 250))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1, max = 250))]
    pub slug: String,
}

pub async fn create_category(
    db: &DatabaseConnection,
    category: NewCategory,
) -> Result<categories::Model> {
    category.validate()?;

    let model = categories::ActiveModel {
        title: Set(category.title),
        description: Set(category.description),
        slug: Set(category.slug),
        ..Default::default()
    }
    .insert(db)
    .await?;

    log::debug!("Created category {} ({})", model.id, model.slug);
    Ok(model)
}

pub async fn category_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<categories::Model>> {
    Ok(categories::Entity::find()
        .filter(categories::Column::Slug.eq(slug))
        .one(db)
        .await?)
}

pub async fn categories(db: &DatabaseConnection) -> Result<Vec<categories::Model>> {
    Ok(categories::Entity::find()
        .order_by_asc(categories::Column::Title)
        .all(db)
        .await?)
}

pub async fn delete_category(db: &DatabaseConnection, id: i32) -> Result<u64> {
    let result = categories::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

#[derive(Debug, Clone, Validate)]
pub struct NewGender {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 250))]
    pub slug: String,
    #[validate(length(max = 150))]
    pub description: String,
}

pub async fn create_gender(db: &DatabaseConnection, gender: NewGender) -> Result<genders::Model> {
    gender.validate()?;

    let model = genders::ActiveModel {
        name: Set(gender.name),
        slug: Set(gender.slug),
        description: Set(gender.description),
        ..Default::default()
    }
    .insert(db)
    .await?;

    log::debug!("Created gender {} ({})", model.id, model.slug);
    Ok(model)
}

pub async fn genders(db: &DatabaseConnection) -> Result<Vec<genders::Model>> {
    Ok(genders::Entity::find()
        .order_by_asc(genders::Column::Name)
        .all(db)
        .await?)
}

pub async fn delete_gender(db: &DatabaseConnection, id: i32) -> Result<u64> {
    let result = genders::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
