//! Chapter loading and navigation with fixture files.

use pacer::chapters::{next_boundary, previous_boundary, ChapterError};
use pacer::player::{Command, Outcome, Session};
use pacer::{
    ChapterNavigator, Chapters, MemoryStore, PlaybackSink, RateController, RatePolicy,
    SimulatedPlayback,
};

use super::helpers::fixture;

#[test]
fn text_and_json_fixtures_agree() {
    let text = Chapters::load(&fixture("chapters.txt")).unwrap();
    let json = Chapters::load(&fixture("chapters.json")).unwrap();

    assert_eq!(text.boundaries(), &[10.0, 60.0, 180.0]);
    assert_eq!(text, json);
}

#[test]
fn unsorted_fixture_is_rejected() {
    let err = Chapters::load(&fixture("unsorted.txt")).unwrap_err();
    assert!(matches!(err, ChapterError::NotIncreasing { index: 1, .. }));
}

#[test]
fn navigation_on_fixture_boundaries() {
    let chapters = Chapters::load(&fixture("chapters.txt")).unwrap();
    let b = chapters.boundaries();

    assert_eq!(previous_boundary(b, 3.0), 0.0);
    assert_eq!(previous_boundary(b, 65.0), 60.0);
    assert_eq!(previous_boundary(b, 62.0), 10.0);
    assert_eq!(next_boundary(b, 15.0), 60.0);
}

#[test]
fn tail_of_list_is_total() {
    let chapters = Chapters::load(&fixture("chapters.txt")).unwrap();
    let b = chapters.boundaries();

    assert_eq!(previous_boundary(b, 400.0), 180.0);
    assert_eq!(next_boundary(b, 400.0), 400.0);
}

#[test]
fn walking_forward_visits_every_chapter() {
    let chapters = Chapters::load(&fixture("chapters.txt")).unwrap();
    let controller = RateController::load(
        MemoryStore::new(),
        SimulatedPlayback::new(600.0),
        RatePolicy::default(),
    );
    let mut session = Session::new(controller, chapters, ChapterNavigator::default());

    let mut visited = Vec::new();
    for _ in 0..4 {
        if let Outcome::Seeked(t) = session.execute(Command::NextChapter) {
            visited.push(t);
        }
    }

    // The last press has nowhere to go and leaves the position alone.
    assert_eq!(visited, vec![10.0, 60.0, 180.0, 180.0]);
    assert_eq!(session.playback().current_time(), 180.0);
    assert_eq!(session.current_chapter_label(), Some("Deep dive"));
}

#[test]
fn walking_backward_snaps_through_chapters() {
    let chapters = Chapters::load(&fixture("chapters.txt")).unwrap();
    let controller = RateController::load(
        MemoryStore::new(),
        SimulatedPlayback::new(600.0),
        RatePolicy::default(),
    );
    let mut session = Session::new(controller, chapters, ChapterNavigator::default());
    session.playback_mut().set_current_time(200.0);

    let mut visited = Vec::new();
    for _ in 0..4 {
        if let Outcome::Seeked(t) = session.execute(Command::PreviousChapter) {
            visited.push(t);
        }
    }

    // 200 -> 180 (restart), 180 -> 60 (snap back), 60 -> 10 (snap back),
    // 10 -> 10 (first chapter keeps its own start).
    assert_eq!(visited, vec![180.0, 60.0, 10.0, 10.0]);
}
