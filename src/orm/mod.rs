pub mod artist_genders;
pub mod artists;
pub mod categories;
pub mod entries;
pub mod entry_categories;
pub mod genders;
pub mod poll_choices;
pub mod polls;
pub mod records;
pub mod songs;
