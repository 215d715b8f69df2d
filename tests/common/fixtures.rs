//! Test fixtures for creating test data
#![allow(dead_code)]

use backbeat::entries::NewEntry;
use backbeat::taxonomy::NewCategory;
use chrono::{NaiveDate, NaiveDateTime};

/// Entry fixture with sensible defaults for the fields under test.
pub fn new_entry(title: &str, slug: &str, body: &str) -> NewEntry {
    NewEntry {
        title: title.to_owned(),
        slug: slug.to_owned(),
        body: body.to_owned(),
        author_id: 1,
        ..NewEntry::default()
    }
}

pub fn new_category(title: &str, slug: &str) -> NewCategory {
    NewCategory {
        title: title.to_owned(),
        description: format!("Entries about {}", title),
        slug: slug.to_owned(),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).expect("valid time")
}
