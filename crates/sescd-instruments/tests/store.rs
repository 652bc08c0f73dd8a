use sescd_core::{Score, Segment, Variable};
use sescd_instruments::error::InstrumentError;
use sescd_instruments::scoring::ScoreEntry;
use sescd_instruments::store::ScoreStore;

fn score(v: i64) -> Score {
    Score::new(v).unwrap()
}

fn entry(segment: &str, variable: &str, value: i64) -> ScoreEntry {
    ScoreEntry {
        segment: segment.to_string(),
        variable: variable.to_string(),
        value,
    }
}

#[test]
fn reset_all_is_idempotent() {
    let mut store = ScoreStore::new();
    store.set_score(Segment::Ileum, Variable::UlcerSize, score(3));
    store.set_score(Segment::Rectum, Variable::Stenosis, score(1));

    store.reset_all();
    let once = (store.matrix().clone(), store.aggregate().clone());
    store.reset_all();

    assert_eq!(store.matrix(), &once.0);
    assert_eq!(store.aggregate(), &once.1);
    assert_eq!(store.matrix().rated_cells(), 0);
}

#[test]
fn set_then_clear_matches_never_set() {
    let pristine = ScoreStore::new();
    let mut store = ScoreStore::new();

    store.set_score(Segment::Transverse, Variable::AffectedSurface, score(2));
    store.clear_score(Segment::Transverse, Variable::AffectedSurface);

    assert_eq!(store.aggregate(), pristine.aggregate());
    assert_eq!(store.get(Segment::Transverse, Variable::AffectedSurface), None);
}

#[test]
fn set_score_overwrites_unconditionally() {
    let mut store = ScoreStore::new();
    store.set_score(Segment::Ileum, Variable::UlcerSize, score(3));
    store.set_score(Segment::Ileum, Variable::UlcerSize, score(1));
    assert_eq!(store.get(Segment::Ileum, Variable::UlcerSize), Some(score(1)));
    assert_eq!(store.aggregate().ses_cd_total, 1);
}

#[test]
fn every_mutation_bumps_revision() {
    let mut store = ScoreStore::new();
    let start = store.revision();
    store.set_score(Segment::Ileum, Variable::UlcerSize, score(1));
    store.clear_score(Segment::Ileum, Variable::UlcerSize);
    store.reset_all();
    assert_eq!(store.revision(), start + 3);
}

#[test]
fn toggle_clears_when_same_value_selected() {
    let mut store = ScoreStore::new();
    store.toggle(Segment::LeftColon, Variable::Stenosis, score(2));
    assert_eq!(store.get(Segment::LeftColon, Variable::Stenosis), Some(score(2)));

    store.toggle(Segment::LeftColon, Variable::Stenosis, score(1));
    assert_eq!(store.get(Segment::LeftColon, Variable::Stenosis), Some(score(1)));

    store.toggle(Segment::LeftColon, Variable::Stenosis, score(1));
    assert_eq!(store.get(Segment::LeftColon, Variable::Stenosis), None);
}

#[test]
fn apply_entries_writes_all_valid_entries() {
    let mut store = ScoreStore::new();
    let written = store
        .apply_entries(&[
            entry("rectum", "ulcer-size", 2),
            entry("ileum", "stenosis", 0),
        ])
        .unwrap();

    assert_eq!(written, 2);
    assert_eq!(store.aggregate().mm_ses_cd_total, 10.0);
    assert_eq!(store.get(Segment::Ileum, Variable::Stenosis), Some(score(0)));
}

#[test]
fn apply_entries_writes_nothing_when_any_entry_is_invalid() {
    let mut store = ScoreStore::new();
    let err = store
        .apply_entries(&[entry("rectum", "ulcer-size", 2), entry("rectum", "stenosis", 9)])
        .unwrap_err();

    match err {
        InstrumentError::InvalidEntries(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].value, 9);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.matrix().rated_cells(), 0);
}
