// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios for the feed state machine, exercised through the
//! public crate API the way the application drives it.

use iced_gallery::config::{self, Config};
use iced_gallery::feed::{Applied, Feed, Phase, ScrollSentinel};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::provider::{Photo, PhotoUrls, PhotoUser, ProfileImage};
use tempfile::tempdir;

const PAGE_SIZE: u32 = 12;

fn photo(id: &str) -> Photo {
    Photo {
        id: id.to_string(),
        urls: PhotoUrls {
            raw: format!("https://images.example/{id}?raw"),
            full: format!("https://images.example/{id}?full"),
            regular: format!("https://images.example/{id}?regular"),
            small: format!("https://images.example/{id}?small"),
            thumb: format!("https://images.example/{id}?thumb"),
        },
        alt_description: None,
        user: PhotoUser {
            name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            profile_image: ProfileImage {
                small: "https://images.example/ada?s".to_string(),
                medium: "https://images.example/ada?m".to_string(),
                large: "https://images.example/ada?l".to_string(),
            },
        },
        likes: 0,
        created_at: "2024-05-01T12:00:00Z".parse().expect("valid timestamp"),
        width: 4000,
        height: 3000,
    }
}

fn photos(first_id: u32, count: u32) -> Vec<Photo> {
    (first_id..first_id + count)
        .map(|n| photo(&n.to_string()))
        .collect()
}

/// Browsing session: initial page, one load-more with upstream overlap, then
/// the stream runs dry.
#[test]
fn browse_paginate_and_exhaust() {
    let (mut feed, plan) = Feed::new(PAGE_SIZE);
    assert_eq!(feed.phase(), Phase::InitialLoading);

    feed.apply(&plan.tag, photos(1, PAGE_SIZE));
    assert_eq!(feed.items().len(), 12);
    assert_eq!(feed.phase(), Phase::Idle);
    assert_eq!(feed.cursor(), 1);

    // Page 2 overlaps page 1 by three photos.
    let plan = feed.load_more().expect("idle feed accepts load_more");
    let mut page2 = photos(10, 3);
    page2.extend(photos(13, 9));
    let applied = feed.apply(&plan.tag, page2);
    assert_eq!(applied, Applied::Appended { added: 9 });
    assert_eq!(feed.items().len(), 21);
    assert_eq!(feed.cursor(), 2);

    // Page 3 is empty: the feed freezes until the query changes.
    let plan = feed.load_more().expect("idle feed accepts load_more");
    feed.apply(&plan.tag, Vec::new());
    assert_eq!(feed.phase(), Phase::Exhausted);
    assert!(feed.load_more().is_none());
}

/// A query change while a browse fetch is in flight: the late browse
/// response must not leak into the search results.
#[test]
fn query_change_discards_in_flight_browse_response() {
    let (mut feed, initial) = Feed::new(PAGE_SIZE);
    feed.apply(&initial.tag, photos(1, PAGE_SIZE));

    let stale = feed.load_more().expect("idle feed accepts load_more");
    let fresh = feed.set_query("mountain");

    // The browse page 2 arrives after the switch to searching.
    assert_eq!(feed.apply(&stale.tag, photos(13, PAGE_SIZE)), Applied::Stale);
    assert!(feed.items().is_empty());

    feed.apply(&fresh.tag, photos(300, PAGE_SIZE));
    assert_eq!(feed.items().len(), 12);
    assert!(feed.items().iter().all(|p| p.id.parse::<u32>().unwrap() >= 300));
    assert_eq!(feed.cursor(), 1);
}

/// Double scroll trigger while a fetch is in flight issues exactly one fetch.
#[test]
fn sentinel_and_phase_gate_suppress_duplicate_fetches() {
    let (mut feed, initial) = Feed::new(PAGE_SIZE);
    feed.apply(&initial.tag, photos(1, PAGE_SIZE));

    let mut sentinel = ScrollSentinel::default();
    let mut fetches = 0;

    // Two intersection events in close succession.
    for offset in [0.95_f32, 0.99] {
        if sentinel.observe(offset) && feed.load_more().is_some() {
            fetches += 1;
        }
    }
    assert_eq!(fetches, 1);

    // Even a re-armed sentinel cannot get past the phase gate mid-flight.
    sentinel.rearm();
    if sentinel.observe(1.0) && feed.load_more().is_some() {
        fetches += 1;
    }
    assert_eq!(fetches, 1);
    assert_eq!(feed.phase(), Phase::LoadingMore);
}

/// Clearing the search goes back to browsing mode from scratch.
#[test]
fn clearing_search_restarts_browsing() {
    let (mut feed, _) = Feed::new(PAGE_SIZE);
    let search = feed.set_query("ocean");
    feed.apply(&search.tag, photos(500, 3));
    assert_eq!(feed.phase(), Phase::Exhausted);

    let browse = feed.set_query("");
    assert_eq!(browse.tag.page, 1);
    assert_eq!(feed.phase(), Phase::InitialLoading);
    assert!(feed.query().is_empty());

    feed.apply(&browse.tag, photos(1, PAGE_SIZE));
    assert_eq!(feed.items().len(), 12);
    assert_eq!(feed.phase(), Phase::Idle);
}

/// A failed page fetch ends pagination like an empty page; the next query
/// change recovers.
#[test]
fn transport_failure_is_recoverable_via_query_change() {
    let (mut feed, initial) = Feed::new(PAGE_SIZE);
    feed.apply(&initial.tag, photos(1, PAGE_SIZE));

    let plan = feed.load_more().expect("idle feed accepts load_more");
    feed.apply_error(&plan.tag);
    assert_eq!(feed.phase(), Phase::Exhausted);
    assert_eq!(feed.items().len(), 12);

    let retry = feed.set_query("");
    feed.apply(&retry.tag, photos(1, PAGE_SIZE));
    assert_eq!(feed.phase(), Phase::Idle);
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let initial = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
}
