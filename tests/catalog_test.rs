//! Artist, song, and record integration tests

mod common;

use backbeat::catalog::{
    artist_by_slug, artists, create_artist, create_record, create_song, delete_artist,
    genders_for_artist, records, set_genders, songs_for_artist, NewArtist, NewRecord, NewSong,
};
use backbeat::orm::songs;
use backbeat::taxonomy::{create_gender, NewGender};
use common::database::setup_test_database;
use sea_orm::entity::*;

fn new_artist(name: &str, slug: &str) -> NewArtist {
    NewArtist {
        name: name.to_owned(),
        slug: slug.to_owned(),
        image: format!("media/{}.jpg", slug),
    }
}

#[tokio::test]
async fn test_artist_with_songs() {
    let db = setup_test_database().await;

    let artist = create_artist(&db, new_artist("The Sandpipers", "the-sandpipers"))
        .await
        .expect("Failed to create artist");

    create_song(
        &db,
        NewSong {
            title: "Shore Leave".to_owned(),
            mp3: Some("media/shore-leave.mp3".to_owned()),
            artist_id: artist.id,
        },
    )
    .await
    .unwrap();
    create_song(
        &db,
        NewSong {
            title: "Driftwood".to_owned(),
            mp3: None, // audio not uploaded yet
            artist_id: artist.id,
        },
    )
    .await
    .unwrap();

    let songs = songs_for_artist(&db, artist.id).await.unwrap();
    assert_eq!(songs.len(), 2);
    assert_eq!(songs[0].title, "Driftwood");
    assert!(songs[0].mp3.is_none());
    assert_eq!(songs[1].mp3.as_deref(), Some("media/shore-leave.mp3"));
}

#[tokio::test]
async fn test_delete_artist_cascades_to_songs() {
    let db = setup_test_database().await;

    let artist = create_artist(&db, new_artist("The Sandpipers", "the-sandpipers"))
        .await
        .unwrap();
    create_song(
        &db,
        NewSong {
            title: "Shore Leave".to_owned(),
            mp3: None,
            artist_id: artist.id,
        },
    )
    .await
    .unwrap();

    delete_artist(&db, artist.id).await.unwrap();

    assert!(artist_by_slug(&db, "the-sandpipers").await.unwrap().is_none());
    let orphans = songs::Entity::find().all(&db).await.unwrap();
    assert!(orphans.is_empty(), "songs should cascade with their artist");
}

#[tokio::test]
async fn test_artist_genders_roundtrip() {
    let db = setup_test_database().await;

    let artist = create_artist(&db, new_artist("Lua Nueva", "lua-nueva")).await.unwrap();
    let salsa = create_gender(
        &db,
        NewGender {
            name: "Salsa".to_owned(),
            slug: "salsa".to_owned(),
            description: String::new(),
        },
    )
    .await
    .unwrap();
    let bolero = create_gender(
        &db,
        NewGender {
            name: "Bolero".to_owned(),
            slug: "bolero".to_owned(),
            description: String::new(),
        },
    )
    .await
    .unwrap();

    set_genders(&db, artist.id, &[salsa.id, bolero.id]).await.unwrap();
    let linked = genders_for_artist(&db, &artist).await.unwrap();
    assert_eq!(linked.len(), 2);

    set_genders(&db, artist.id, &[bolero.id]).await.unwrap();
    let linked = genders_for_artist(&db, &artist).await.unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].name, "Bolero");
}

/// Replacing the gender set is all-or-nothing: if one of the new links
/// cannot be inserted, the previous links survive.
#[tokio::test]
async fn test_failed_set_genders_keeps_prior_links() {
    let db = setup_test_database().await;

    let artist = create_artist(&db, new_artist("Lua Nueva", "lua-nueva")).await.unwrap();
    let salsa = create_gender(
        &db,
        NewGender {
            name: "Salsa".to_owned(),
            slug: "salsa".to_owned(),
            description: String::new(),
        },
    )
    .await
    .unwrap();
    set_genders(&db, artist.id, &[salsa.id]).await.unwrap();

    // Second id does not exist, so the insert violates the FK.
    let result = set_genders(&db, artist.id, &[salsa.id, salsa.id + 1000]).await;
    assert!(result.is_err(), "unknown gender id should fail");

    let linked = genders_for_artist(&db, &artist).await.unwrap();
    assert_eq!(linked.len(), 1, "prior links should survive the failed replace");
    assert_eq!(linked[0].name, "Salsa");
}

#[tokio::test]
async fn test_records_require_title() {
    let db = setup_test_database().await;

    assert!(
        create_record(&db, NewRecord { title: String::new() }).await.is_err(),
        "empty title should fail validation"
    );

    create_record(
        &db,
        NewRecord {
            title: "Night Sessions".to_owned(),
        },
    )
    .await
    .unwrap();

    let all = records(&db).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].title, "Night Sessions");
}

#[tokio::test]
async fn test_artists_listed_by_name() {
    let db = setup_test_database().await;

    create_artist(&db, new_artist("Zebra Crossing", "zebra-crossing")).await.unwrap();
    create_artist(&db, new_artist("Amber Lane", "amber-lane")).await.unwrap();

    let all = artists(&db).await.unwrap();
    let names: Vec<&str> = all.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Amber Lane", "Zebra Crossing"]);
}
