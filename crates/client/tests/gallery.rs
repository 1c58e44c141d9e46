//! Gallery loader behaviour against a stubbed backend.

mod common;

use std::sync::atomic::Ordering;
use std::time::Duration;

use assert_matches::assert_matches;
use common::{record, ListReply, StubBackend};
use folio_client::gallery::{Gallery, LoadOutcome, LOAD_ERROR_MESSAGE};
use folio_core::gallery::{ImageSource, Placeholders};
use folio_core::load_state::LoadState;
use folio_core::projects::ProjectRecord;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn load_reconciles_fetched_records() {
    let backend = StubBackend::new(ListReply::Records(vec![
        ProjectRecord {
            image_url: Some("/project1.jpg".to_string()),
            ..record(20, "A")
        },
        ProjectRecord {
            image_url: Some("/project1.jpg".to_string()),
            ..record(10, "B")
        },
        record(30, "C"),
    ]));
    let mut gallery = Gallery::default();

    let outcome = gallery.load(&backend, &CancellationToken::new()).await;

    assert_eq!(outcome, LoadOutcome::Loaded(3));
    let cards: Vec<_> = gallery
        .projects()
        .iter()
        .map(|p| (p.record.title.as_str(), p.display_image.as_deref()))
        .collect();
    assert_eq!(
        cards,
        [
            ("B", Some("/project1.jpg")),
            ("A", Some("/project2.jpg")),
            ("C", Some("/project3.jpg")),
        ]
    );
    assert_eq!(gallery.records().len(), 3);
}

#[tokio::test]
async fn api_error_sets_generic_message() {
    let backend = StubBackend::new(ListReply::Error {
        status: 500,
        message: "An internal error occurred",
    });
    let mut gallery = Gallery::default();

    let outcome = gallery.load(&backend, &CancellationToken::new()).await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(gallery.state().error(), Some(LOAD_ERROR_MESSAGE));
    assert!(gallery.projects().is_empty());
}

#[tokio::test]
async fn cancelling_during_fetch_returns_to_idle() {
    let backend = StubBackend::new(ListReply::Hang);
    let mut gallery = Gallery::default();
    let cancel = CancellationToken::new();

    let canceller = {
        let cancel = cancel.clone();
        async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            cancel.cancel();
        }
    };
    let (outcome, ()) = tokio::join!(gallery.load(&backend, &cancel), canceller);

    assert_eq!(outcome, LoadOutcome::Cancelled);
    assert_matches!(gallery.state(), LoadState::Idle);
    assert_eq!(backend.list_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn response_after_cancellation_is_not_committed() {
    let cancel = CancellationToken::new();
    let backend = StubBackend::new(ListReply::CancelThenReturn(
        cancel.clone(),
        vec![record(1, "Late")],
    ));
    let mut gallery = Gallery::default();

    let outcome = gallery.load(&backend, &cancel).await;

    assert_eq!(outcome, LoadOutcome::Cancelled);
    assert_matches!(gallery.state(), LoadState::Idle);
    assert!(gallery.records().is_empty());
}

#[tokio::test]
async fn already_cancelled_token_skips_commit() {
    let backend = StubBackend::new(ListReply::Records(vec![record(1, "A")]));
    let mut gallery = Gallery::default();
    let cancel = CancellationToken::new();
    cancel.cancel();

    assert_eq!(gallery.load(&backend, &cancel).await, LoadOutcome::Cancelled);
    assert!(gallery.projects().is_empty());
}

#[tokio::test]
async fn reload_replaces_previous_result() {
    let backend = StubBackend::new(ListReply::Records(vec![record(1, "A"), record(2, "B")]));
    let mut gallery = Gallery::default();
    let cancel = CancellationToken::new();

    gallery.load(&backend, &cancel).await;
    gallery.load(&backend, &cancel).await;

    assert_eq!(gallery.projects().len(), 2);
    assert_eq!(backend.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn created_record_is_prepended_and_deduplicated() {
    let backend = StubBackend::new(ListReply::Records(vec![record(1, "Seed"), record(7, "Mine")]));
    let mut gallery = Gallery::new(Placeholders::default());
    gallery.load(&backend, &CancellationToken::new()).await;

    gallery.insert_created(record(7, "Mine"));
    gallery.insert_created(ProjectRecord {
        image_url: Some("https://cdn.example.com/new.png".to_string()),
        ..record(8, "New")
    });

    let titles: Vec<_> = gallery
        .projects()
        .iter()
        .map(|p| p.record.title.as_str())
        .collect();
    assert_eq!(titles, ["Seed", "Mine", "New"]);

    let new = &gallery.projects()[2];
    assert_eq!(new.image_source, ImageSource::Authored);
    assert_eq!(gallery.records().len(), 4);
}

#[tokio::test]
async fn insert_before_first_load_only_buffers_record() {
    let mut gallery = Gallery::default();
    gallery.insert_created(record(5, "Early"));

    assert!(gallery.projects().is_empty());
    assert_eq!(gallery.records().len(), 1);
}
