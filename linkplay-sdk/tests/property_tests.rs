//! Property-based tests for service routing
//!
//! These tests use proptest to check the service layer over many inputs
//! without contacting any device.

use linkplay_sdk::{DeviceId, DeviceRegistry, SdkError, ServiceCall, ServiceKind, ServiceRequest};
use proptest::prelude::*;
use rstest::rstest;

// ============================================================================
// Strategies
// ============================================================================

fn device_id_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}"
}

// ============================================================================
// Tables
// ============================================================================

#[rstest]
#[case(r#"{"service": "turn_off"}"#, ServiceCall::TurnOff)]
#[case(r#"{"service": "volume_set", "volume_level": 0.25}"#, ServiceCall::VolumeSet { volume_level: 0.25 })]
#[case(r#"{"service": "volume_mute", "is_volume_muted": true}"#, ServiceCall::VolumeMute { is_volume_muted: true })]
#[case(r#"{"service": "media_next_track"}"#, ServiceCall::MediaNextTrack)]
#[case(r#"{"service": "media_seek", "seek_position": 75}"#, ServiceCall::MediaSeek { seek_position: 75.0 })]
#[case(r#"{"service": "media_seek", "seek_position": 90.5}"#, ServiceCall::MediaSeek { seek_position: 90.5 })]
#[case(r#"{"service": "select_source", "source": "Optical"}"#, ServiceCall::SelectSource { source: "Optical".to_string() })]
#[case(r#"{"service": "select_sound_mode", "sound_mode": "Pop"}"#, ServiceCall::SelectSoundMode { sound_mode: "Pop".to_string() })]
#[case(r#"{"service": "shuffle_set", "shuffle": false}"#, ServiceCall::ShuffleSet { shuffle: false })]
#[case(r#"{"service": "linkplay_preset_button", "preset": 12}"#, ServiceCall::PresetButton { preset: 12 })]
fn test_service_calls_deserialize(#[case] json: &str, #[case] expected: ServiceCall) {
    let call: ServiceCall = serde_json::from_str(json).unwrap();
    assert_eq!(call.kind().name(), serde_json::from_str::<serde_json::Value>(json).unwrap()["service"]);
    assert_eq!(call, expected);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every target of a request gets exactly one result, in order
    #[test]
    fn prop_dispatch_reports_each_target(
        ids in prop::collection::vec(device_id_strategy(), 0..8),
        preset in 0u32..1000,
    ) {
        let registry: DeviceRegistry = DeviceRegistry::new();
        let targets: Vec<DeviceId> = ids.iter().map(|id| DeviceId::new(id.as_str())).collect();

        let results = registry.press_preset(&targets, preset);

        prop_assert_eq!(results.len(), targets.len());
        for ((id, result), target) in results.iter().zip(&targets) {
            prop_assert_eq!(id, target);
            let not_found = matches!(result, Err(SdkError::DeviceNotFound(missing)) if missing == target.as_str());
            prop_assert!(not_found);
        }
    }

    /// The preset service accepts any non-negative index and any target list
    #[test]
    fn prop_preset_request_parses(
        ids in prop::collection::vec(device_id_strategy(), 0..5),
        preset in any::<u32>(),
    ) {
        let json = serde_json::json!({
            "service": "linkplay_preset_button",
            "entity_id": &ids,
            "preset": preset,
        });
        let request: ServiceRequest = serde_json::from_value(json).unwrap();

        prop_assert_eq!(request.call.kind(), ServiceKind::PresetButton);
        prop_assert_eq!(request.call, ServiceCall::PresetButton { preset });
        prop_assert_eq!(request.targets.len(), ids.len());
    }
}
