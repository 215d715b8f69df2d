//! Poll data access
//!
//! Polls and their choices are plain records. Vote counting is owned by
//! external request handlers; this layer only stores the counter.

use crate::orm::{poll_choices, polls};
use anyhow::Result;
use sea_orm::{entity::*, query::*, DatabaseConnection};
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct NewPoll {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    pub is_active: bool,
    pub pub_date: chrono::NaiveDate,
}

pub async fn create_poll(db: &DatabaseConnection, poll: NewPoll) -> Result<polls::Model> {
    poll.validate()?;

    let model = polls::ActiveModel {
        title: Set(poll.title),
        is_active: Set(poll.is_active),
        pub_date: Set(poll.pub_date),
        ..Default::default()
    }
    .insert(db)
    .await?;

    log::debug!("Created poll {} ({})", model.id, model.title);
    Ok(model)
}

#[derive(Debug, Clone, Validate)]
pub struct NewPollChoice {
    #[validate(length(min = 1, max = 100))]
    pub choice: String,
    pub poll_id: i32,
    /// Defaults to 0 when not supplied.
    #[validate(range(min = 0))]
    pub votes: Option<i32>,
}

pub async fn add_choice(
    db: &DatabaseConnection,
    choice: NewPollChoice,
) -> Result<poll_choices::Model> {
    choice.validate()?;

    let model = poll_choices::ActiveModel {
        choice: Set(choice.choice),
        poll_id: Set(choice.poll_id),
        votes: Set(choice.votes.unwrap_or(0)),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(model)
}

pub async fn choices_for_poll(
    db: &DatabaseConnection,
    poll_id: i32,
) -> Result<Vec<poll_choices::Model>> {
    Ok(poll_choices::Entity::find()
        .filter(poll_choices::Column::PollId.eq(poll_id))
        .order_by_asc(poll_choices::Column::Id)
        .all(db)
        .await?)
}

/// Active polls, newest first.
pub async fn active_polls(db: &DatabaseConnection) -> Result<Vec<polls::Model>> {
    Ok(polls::Entity::find()
        .filter(polls::Column::IsActive.eq(true))
        .order_by_desc(polls::Column::PubDate)
        .all(db)
        .await?)
}

/// Deleting a poll cascades to its choices.
pub async fn delete_poll(db: &DatabaseConnection, id: i32) -> Result<u64> {
    let result = polls::Entity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}
