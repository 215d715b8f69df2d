//! Music catalog data access: artists, songs, records
//!
//! Structural records only. Audio and image columns hold references into
//! external file storage.

use crate::orm::{artist_genders, artists, genders, records, songs};
use anyhow::Result;
use sea_orm::{entity::*, query::*, DatabaseConnection, TransactionTrait};
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct NewArtist {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 250))]
    pub slug: String,
    pub image: String,
}

pub async fn create_artist(db: &DatabaseConnection, artist: NewArtist) -> Result<artists::Model> {
    artist.validate()?;

    let model = artists::ActiveModel {
        name: Set(artist.name),
        slug: Set(artist.slug),
        image: Set(artist.image),
        ..Default::default()
    }
    .insert(db)
    .await?;

    log::debug!("Created artist {} ({})", model.id, model.slug);
    Ok(model)
}

pub async fn artist_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<artists::Model>> {
    Ok(artists::Entity::find()
        .filter(artists::Column::Slug.eq(slug))
        .one(db)
        .await?)
}

pub async fn artists(db: &DatabaseConnection) -> Result<Vec<artists::Model>> {
    Ok(artists::Entity::find()
        .order_by_asc(artists::Column::Name)
        .all(db)
        .await?)
}

/// Deleting an artist cascades to its songs and gender links.
pub async fn delete_artist(db: &DatabaseConnection, id: i32) -> Result<u64> {
    let result = artists::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

/// Replace the artist's gender set with the given gender ids.
///
/// Runs in a transaction; a failed insert rolls the delete back, keeping the
/// prior links.
pub async fn set_genders(
    db: &DatabaseConnection,
    artist_id: i32,
    gender_ids: &[i32],
) -> Result<()> {
    let txn = db.begin().await?;

    artist_genders::Entity::delete_many()
        .filter(artist_genders::Column::ArtistId.eq(artist_id))
        .exec(&txn)
        .await?;

    for &gender_id in gender_ids {
        artist_genders::ActiveModel {
            artist_id: Set(artist_id),
            gender_id: Set(gender_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(())
}

pub async fn genders_for_artist(
    db: &DatabaseConnection,
    artist: &artists::Model,
) -> Result<Vec<genders::Model>> {
    Ok(artist.find_related(genders::Entity).all(db).await?)
}

#[derive(Debug, Clone, Validate)]
pub struct NewSong {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    pub mp3: Option<String>,
    pub artist_id: i32,
}

pub async fn create_song(db: &DatabaseConnection, song: NewSong) -> Result<songs::Model> {
    song.validate()?;

    let model = songs::ActiveModel {
        title: Set(song.title),
        mp3: Set(song.mp3),
        artist_id: Set(song.artist_id),
        ..Default::default()
    }
    .insert(db)
    .await?;

    log::debug!("Created song {} for artist {}", model.id, model.artist_id);
    Ok(model)
}

pub async fn songs_for_artist(
    db: &DatabaseConnection,
    artist_id: i32,
) -> Result<Vec<songs::Model>> {
    Ok(songs::Entity::find()
        .filter(songs::Column::ArtistId.eq(artist_id))
        .order_by_asc(songs::Column::Title)
        .all(db)
        .await?)
}

pub async fn delete_song(db: &DatabaseConnection, id: i32) -> Result<u64> {
    let result = songs::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

#[derive(Debug, Clone, Validate)]
pub struct NewRecord {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
}

pub async fn create_record(db: &DatabaseConnection, record: NewRecord) -> Result<records::Model> {
    record.validate()?;

    let model = records::ActiveModel {
        title: Set(record.title),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(model)
}

pub async fn records(db: &DatabaseConnection) -> Result<Vec<records::Model>> {
    Ok(records::Entity::find()
        .order_by_asc(records::Column::Title)
        .all(db)
        .await?)
}

pub async fn delete_record(db: &DatabaseConnection, id: i32) -> Result<u64> {
    let result = records::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
