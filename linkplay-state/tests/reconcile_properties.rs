//! Property and table tests for decode + reconcile
//!
//! These drive the public API end to end: a raw JSON payload goes through
//! `StatusDecoder::decode` and then `StateReconciler::apply_at`.

use std::cell::Cell;

use chrono::{DateTime, TimeZone, Utc};
use linkplay_api::{Command, Source};
use linkplay_state::{
    DecodeError, Enricher, EnrichmentError, PlayerState, StateReconciler, StatusDecoder,
    TrackTags,
};
use proptest::prelude::*;
use rstest::rstest;

// ============================================================================
// Helpers
// ============================================================================

#[derive(Default)]
struct CountingEnricher {
    calls: Cell<usize>,
}

impl Enricher for CountingEnricher {
    fn enrich_from_file(&self, _uri: &str) -> Result<TrackTags, EnrichmentError> {
        self.calls.set(self.calls.get() + 1);
        Ok(TrackTags {
            title: Some("From Tags".to_string()),
            artist: Some("Tag Artist".to_string()),
            album: None,
        })
    }

    fn cover_art_enabled(&self) -> bool {
        false
    }

    fn enrich_cover_art(&self, _artist: &str, _title: &str) -> Option<String> {
        None
    }
}

fn payload(vol: &str, totlen: &str, mode: &str, title: &str, artist: &str, uri: &str) -> String {
    serde_json::json!({
        "vol": vol,
        "mute": "0",
        "curpos": "1000",
        "totlen": totlen,
        "status": "play",
        "mode": mode,
        "eq": "0",
        "loop": "0",
        "Title": hex::encode(title),
        "Artist": hex::encode(artist),
        "iuri": hex::encode(uri),
    })
    .to_string()
}

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).unwrap()
}

fn reconcile(reconciler: &StateReconciler<CountingEnricher>, previous: &PlayerState, raw: &str) -> PlayerState {
    let status = StatusDecoder::decode(raw).expect("payload decodes");
    reconciler.apply_at(previous, &status, at(0))
}

// ============================================================================
// Tables
// ============================================================================

#[rstest]
#[case("0", Source::WiFi)]
#[case("10", Source::WiFi)]
#[case("31", Source::WiFi)]
#[case("40", Source::LineIn)]
#[case("41", Source::Bluetooth)]
#[case("43", Source::Optical)]
#[case("99", Source::WiFi)]
#[case("", Source::WiFi)]
fn test_source_mapping(#[case] mode: &str, #[case] expected: Source) {
    let reconciler = StateReconciler::new(CountingEnricher::default());
    let state = reconcile(
        &reconciler,
        &PlayerState::new(),
        &payload("10", "1000", mode, "t", "a", ""),
    );
    assert_eq!(state.source(), Some(expected));
}

#[rstest]
#[case("not json")]
#[case("{\"vol\": ")]
fn test_garbage_is_not_json(#[case] raw: &str) {
    assert!(matches!(StatusDecoder::decode(raw), Err(DecodeError::NotJson(_))));
}

#[rstest]
#[case("{\"Title\": \"4\"}", "Title")]
#[case("{\"Artist\": \"xyz0\"}", "Artist")]
#[case("{\"iuri\": \"g0\"}", "iuri")]
fn test_bad_hex_names_field(#[case] raw: &str, #[case] field: &'static str) {
    assert_eq!(StatusDecoder::decode(raw), Err(DecodeError::BadHexField(field)));
}

#[test]
fn test_duration_change_is_a_new_track() {
    let reconciler = StateReconciler::new(CountingEnricher::default());
    let uri = "http://nas/foo.mp3";

    let first = reconcile(&reconciler, &PlayerState::new(), &payload("10", "180000", "10", "Foo", "A", uri));
    assert_eq!(reconciler.enricher().calls.get(), 1);

    let same = reconcile(&reconciler, &first, &payload("10", "180500", "10", "Foo", "A", uri));
    assert_eq!(reconciler.enricher().calls.get(), 1);
    assert_eq!(same.media_title(), Some("From Tags"));

    reconcile(&reconciler, &same, &payload("10", "181000", "10", "Foo", "A", uri));
    assert_eq!(reconciler.enricher().calls.get(), 2);
}

#[test]
fn test_title_change_is_a_new_track() {
    let reconciler = StateReconciler::new(CountingEnricher::default());
    let first = reconcile(&reconciler, &PlayerState::new(), &payload("10", "180000", "10", "Foo", "A", ""));
    let next = reconcile(&reconciler, &first, &payload("10", "180000", "10", "Bar", "A", ""));
    assert_eq!(next.media_title(), Some("Bar"));
}

#[test]
fn test_radio_with_mp3_uri() {
    let reconciler = StateReconciler::new(CountingEnricher::default());
    let state = reconcile(
        &reconciler,
        &PlayerState::new(),
        &payload("10", "0", "10", "Live", "Station", "http://radio/live.mp3"),
    );
    assert_eq!(state.media_album(), Some(""));
    assert_eq!(state.media_image_url(), None);
    assert_eq!(reconciler.enricher().calls.get(), 0);
}

// ============================================================================
// Properties
// ============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,24}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Re-applying an identical status changes nothing but the refresh time
    #[test]
    fn prop_apply_is_idempotent(
        vol in 0u8..=100,
        totlen in 0u64..600_000,
        mode in prop::sample::select(vec!["0", "10", "31", "40", "41", "43", "99"]),
        title in text_strategy(),
        artist in text_strategy(),
        mp3 in any::<bool>(),
    ) {
        let reconciler = StateReconciler::new(CountingEnricher::default());
        let uri = if mp3 { "http://nas/x.mp3" } else { "http://radio/x" };
        let raw = payload(&vol.to_string(), &totlen.to_string(), mode, &title, &artist, uri);
        let status = StatusDecoder::decode(&raw).unwrap();

        let once = reconciler.apply_at(&PlayerState::new(), &status, at(1));
        let twice = reconciler.apply_at(&once, &status, at(2));

        prop_assert_eq!(twice.position_updated_at(), Some(at(2)));
        let twice = reconciler.apply_at(&once, &status, at(1));
        prop_assert_eq!(once, twice);
    }

    /// The Spotify placeholder wins over every other classification
    #[test]
    fn prop_unknown_unknown_is_spotify(
        totlen in prop::sample::select(vec!["0", "1000", "250000"]),
        mp3 in any::<bool>(),
    ) {
        let reconciler = StateReconciler::new(CountingEnricher::default());
        let uri = if mp3 { "http://nas/x.mp3" } else { "" };
        let raw = payload("20", totlen, "10", "Unknown", "Unknown", uri);
        let state = reconcile(&reconciler, &PlayerState::new(), &raw);

        prop_assert_eq!(state.media_title(), Some("Spotify"));
        prop_assert_eq!(state.media_artist(), Some("Spotify"));
        prop_assert_eq!(reconciler.enricher().calls.get(), 0);
    }

    /// A volume sent as a fraction comes back as the rounded level
    #[test]
    fn prop_volume_round_trip(level in 0.0f64..=1.0) {
        let volume = match Command::set_volume_fraction(level).unwrap() {
            Command::SetVolume(volume) => volume,
            other => panic!("unexpected command {:?}", other),
        };

        let reconciler = StateReconciler::new(CountingEnricher::default());
        let raw = payload(&volume.to_string(), "1000", "10", "t", "a", "");
        let state = reconcile(&reconciler, &PlayerState::new(), &raw);

        let expected = (level * 100.0).round() / 100.0;
        let actual = state.volume_level().unwrap();
        prop_assert!((actual - expected).abs() < 1e-9);
    }

    /// Seconds are truncated, never rounded
    #[test]
    fn prop_millis_truncate(curpos in 0u64..10_000_000, totlen in 0u64..10_000_000) {
        let raw = serde_json::json!({
            "curpos": curpos.to_string(),
            "totlen": totlen.to_string(),
        })
        .to_string();
        let reconciler = StateReconciler::new(CountingEnricher::default());
        let state = reconcile(&reconciler, &PlayerState::new(), &raw);

        prop_assert_eq!(state.seek_position(), Some(curpos / 1000));
        prop_assert_eq!(state.duration(), Some(totlen / 1000));
    }
}
