// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{export_page, TestWiki};
use wikicards::application::pipeline::{Pipeline, PipelineError, RunOptions};
use wikicards::domain::models::country::Field;

fn only(country: &str) -> RunOptions {
    RunOptions {
        country: Some(country.to_string()),
        position: 0,
    }
}

#[tokio::test]
async fn test_full_run_writes_list_and_cards() {
    let wiki = TestWiki::start().await;
    wiki.mount_world().await;
    wiki.write_location("Chad", "Central Africa, landlocked.");
    wiki.write_location("The_Bahamas", "The Lucayan Archipelago.");

    let pipeline = Pipeline::from_settings(&wiki.settings).unwrap();
    let summary = pipeline.run(&RunOptions::default()).await.unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.processed, 2);

    let list = std::fs::read_to_string(&wiki.settings.output.country_list_path).unwrap();
    assert_eq!(list, "Chad\nThe Bahamas");

    assert_eq!(
        wiki.read("Chad_location.md"),
        "Where in the world is **Chad**?\n<!--question-->\nCentral Africa, landlocked.\n\n![Map of Chad](images/Chad_(orthographic_projection).svg)"
    );
    assert_eq!(
        wiki.read("Chad.md"),
        "Which country is this?\n\n![Map of a country](images/Chad_(orthographic_projection).svg)\n<!--question-->\n**Chad**"
    );
    assert_eq!(
        wiki.read("capitals/Chad.md"),
        "What is the capital of **Chad**?\n<!--question-->\nN'Djamena"
    );
    assert!(wiki.read("flags/Chad.md").contains("![Flag of Chad](images/Flag_of_Chad.svg)"));

    let root = wiki.root();
    assert!(root.join("images/Chad_(orthographic_projection).svg").exists());
    assert!(root.join("flags/images/Flag_of_Chad.svg").exists());

    // Map came from the fallback field, capital from the link display text
    assert!(root
        .join("images/The_Bahamas_on_the_globe_(Americas_centered).svg")
        .exists());
    assert_eq!(
        wiki.read("capitals/The_Bahamas.md"),
        "What is the capital of **The Bahamas**?\n<!--question-->\nNassau"
    );
}

#[tokio::test]
async fn test_single_country_follows_redirect() {
    let wiki = TestWiki::start().await;
    wiki.mount_world().await;
    wiki.write_location("The_Bahamas", "The Lucayan Archipelago.");

    let pipeline = Pipeline::from_settings(&wiki.settings).unwrap();
    let record = pipeline.process_country("Bahamas").await.unwrap();
    assert_eq!(record.name, "Bahamas");
    assert_eq!(record.capital, "Nassau");

    // Files are keyed by the canonical article title
    assert_eq!(
        wiki.read("The_Bahamas.md"),
        "Which country is this?\n\n![Map of a country](images/The_Bahamas_on_the_globe_(Americas_centered).svg)\n<!--question-->\n**Bahamas**"
    );
    assert!(!wiki.root().join("Bahamas.md").exists());
}

#[tokio::test]
async fn test_single_country_run_skips_list_file() {
    let wiki = TestWiki::start().await;
    wiki.mount_world().await;
    wiki.write_location("Chad", "Central Africa.");

    let pipeline = Pipeline::from_settings(&wiki.settings).unwrap();
    let summary = pipeline.run(&only("Chad")).await.unwrap();
    assert_eq!(summary.processed, 1);
    assert!(!std::path::Path::new(&wiki.settings.output.country_list_path).exists());
    assert!(wiki.root().join("Chad.md").exists());
}

#[tokio::test]
async fn test_position_skips_sorted_prefix() {
    let wiki = TestWiki::start().await;
    wiki.mount_world().await;
    wiki.write_location("The_Bahamas", "The Lucayan Archipelago.");

    let pipeline = Pipeline::from_settings(&wiki.settings).unwrap();
    let summary = pipeline
        .run(&RunOptions {
            country: None,
            position: 1,
        })
        .await
        .unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.processed, 1);
    assert!(wiki.root().join("The_Bahamas.md").exists());
    assert!(!wiki.root().join("Chad.md").exists());
}

#[tokio::test]
async fn test_position_past_end_is_empty_run() {
    let wiki = TestWiki::start().await;
    wiki.mount_world().await;

    let pipeline = Pipeline::from_settings(&wiki.settings).unwrap();
    let summary = pipeline
        .run(&RunOptions {
            country: None,
            position: 5,
        })
        .await
        .unwrap();
    assert_eq!(summary.processed, 0);
    // The list is still written before the offset is applied
    assert!(std::path::Path::new(&wiki.settings.output.country_list_path).exists());
}

#[tokio::test]
async fn test_configured_override_wins_over_article() {
    let mut wiki = TestWiki::start().await;
    wiki.mount_world().await;
    wiki.mount_media("/commons/6/6a/Chad_override_map.svg").await;
    wiki.write_location("Chad", "Central Africa.");
    wiki.settings
        .overrides
        .map
        .insert("Chad".to_string(), "Chad_override_map.svg".to_string());
    wiki.settings
        .overrides
        .capital
        .insert("Chad".to_string(), "N'Djamena *(override)*".to_string());

    let pipeline = Pipeline::from_settings(&wiki.settings).unwrap();
    pipeline.process_country("Chad").await.unwrap();

    assert!(wiki.root().join("images/Chad_override_map.svg").exists());
    assert!(!wiki
        .root()
        .join("images/Chad_(orthographic_projection).svg")
        .exists());
    assert!(wiki.read("capitals/Chad.md").ends_with("N'Djamena *(override)*"));
}

#[tokio::test]
async fn test_extraction_failure_aborts_without_output() {
    let wiki = TestWiki::start().await;
    wiki.mount_world().await;
    wiki.mount_page(
        "Atlantis",
        export_page("Atlantis", None, "{{Infobox country\n| capital = [[Poseidonia]]\n}}\n"),
    )
    .await;
    wiki.write_location("Atlantis", "Under the sea.");

    let pipeline = Pipeline::from_settings(&wiki.settings).unwrap();
    let err = pipeline.run(&only("Atlantis")).await.unwrap_err();
    match &err {
        PipelineError::Extraction(e) => {
            assert_eq!(e.field, Field::ImageMap);
            assert_eq!(e.country, "Atlantis");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.to_string(), "Atlantis image map failed");
    assert!(!wiki.root().join("Atlantis.md").exists());
    assert!(!wiki.root().join("capitals/Atlantis.md").exists());
}

#[tokio::test]
async fn test_missing_answer_aborts_before_cards() {
    let wiki = TestWiki::start().await;
    wiki.mount_world().await;

    let pipeline = Pipeline::from_settings(&wiki.settings).unwrap();
    let err = pipeline.run(&only("Chad")).await.unwrap_err();
    assert!(matches!(err, PipelineError::Answer(_)));
    assert!(err.to_string().starts_with("missing"));
    assert!(!wiki.root().join("Chad.md").exists());
}

#[tokio::test]
async fn test_unknown_article_aborts_run() {
    let wiki = TestWiki::start().await;
    wiki.mount_world().await;

    let pipeline = Pipeline::from_settings(&wiki.settings).unwrap();
    let err = pipeline.run(&only("Lemuria")).await.unwrap_err();
    assert!(matches!(err, PipelineError::Resolve(_)));
}

#[tokio::test]
async fn test_second_run_is_served_from_cache() {
    let wiki = TestWiki::start().await;
    wiki.mount_world().await;
    wiki.write_location("Chad", "Central Africa.");
    wiki.write_location("The_Bahamas", "The Lucayan Archipelago.");

    Pipeline::from_settings(&wiki.settings)
        .unwrap()
        .run(&RunOptions::default())
        .await
        .unwrap();
    let first = wiki.requests().await;
    // seed + Chad + The_Bahamas + four media files
    assert_eq!(first, 7);
    let chad = wiki.read("Chad.md");
    let answer = wiki.read("Chad_location.md");

    Pipeline::from_settings(&wiki.settings)
        .unwrap()
        .run(&RunOptions::default())
        .await
        .unwrap();
    assert_eq!(wiki.requests().await, first);
    assert_eq!(wiki.read("Chad.md"), chad);
    assert_eq!(wiki.read("Chad_location.md"), answer);
}

#[tokio::test]
async fn test_invalid_base_url_rejected_at_startup() {
    let mut wiki = TestWiki::start().await;
    wiki.settings.wiki.upload_base_url = "not a url".to_string();

    let err = Pipeline::from_settings(&wiki.settings).err().unwrap();
    assert!(matches!(err, PipelineError::InvalidUrl { .. }));
}
