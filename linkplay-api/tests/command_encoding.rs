//! Wire-format tests for every device command

use linkplay_api::{Command, SoundMode, Source};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(Command::GetPlayerStatus, "getPlayerStatus")]
#[case(Command::PowerOff, "getShutdown")]
#[case(Command::SetVolume(35), "setPlayerCmd:vol:35")]
#[case(Command::Mute(true), "setPlayerCmd:mute:1")]
#[case(Command::Mute(false), "setPlayerCmd:mute:0")]
#[case(Command::Play, "setPlayerCmd:play")]
#[case(Command::Pause, "setPlayerCmd:pause")]
#[case(Command::Next, "setPlayerCmd:next")]
#[case(Command::Previous, "setPlayerCmd:prev")]
#[case(Command::Seek(95), "setPlayerCmd:seek:95")]
#[case(
    Command::PlayUri("http://radio.example/stream.mp3".to_string()),
    "setPlayerCmd:play:http://radio.example/stream.mp3"
)]
#[case(Command::SelectSource(Source::MicroSD), "setPlayerCmd:switchmode:udisk")]
#[case(Command::SelectSource(Source::Bluetooth), "setPlayerCmd:switchmode:bluetooth")]
#[case(Command::SelectSource(Source::WiFi), "setPlayerCmd:switchmode:wifi")]
#[case(Command::SelectSource(Source::LineIn), "setPlayerCmd:switchmode:line-in")]
#[case(Command::SelectSource(Source::Optical), "setPlayerCmd:switchmode:optical")]
#[case(Command::SelectSoundMode(SoundMode::Normal), "setPlayerCmd:equalizer:0")]
#[case(Command::SelectSoundMode(SoundMode::Vocal), "setPlayerCmd:equalizer:4")]
#[case(Command::SetShuffle(true), "setPlayerCmd:loopmode:2")]
#[case(Command::SetShuffle(false), "setPlayerCmd:loopmode:0")]
#[case(Command::PresetButton(5), "IOSimuKeyIn:005")]
#[case(Command::PresetButton(12), "IOSimuKeyIn:012")]
#[case(Command::PresetButton(123), "IOSimuKeyIn:123")]
fn test_command_wire_format(#[case] command: Command, #[case] expected: &str) {
    assert_eq!(command.encode(), expected);
    assert_eq!(command.to_string(), expected);
}

#[rstest]
#[case("Normal", "0")]
#[case("Classic", "1")]
#[case("Pop", "2")]
#[case("Jazz", "3")]
#[case("Vocal", "4")]
fn test_sound_mode_name_to_wire_id(#[case] name: &str, #[case] id: &str) {
    let command = Command::select_sound_mode(name).unwrap();
    assert_eq!(command.encode(), format!("setPlayerCmd:equalizer:{}", id));
}

#[rstest]
#[case(0.0, "setPlayerCmd:seek:0")]
#[case(90.5, "setPlayerCmd:seek:90")]
#[case(90.99, "setPlayerCmd:seek:90")]
#[case(3600.0, "setPlayerCmd:seek:3600")]
fn test_fractional_seek_positions(#[case] position: f64, #[case] expected: &str) {
    assert_eq!(Command::seek_seconds(position).unwrap().encode(), expected);
}

proptest! {
    /// Volume fractions always encode to the rounded percentage, clamped to 0..=100
    #[test]
    fn prop_volume_fraction_rounds_to_nearest(level in -1.0f64..2.0) {
        let command = Command::set_volume_fraction(level).unwrap();
        let expected = (level * 100.0).round().clamp(0.0, 100.0) as u8;
        prop_assert_eq!(command.encode(), format!("setPlayerCmd:vol:{}", expected));
    }

    /// Preset indices are always rendered with at least three digits
    #[test]
    fn prop_preset_is_zero_padded(preset in 0u32..1000) {
        let encoded = Command::PresetButton(preset).encode();
        let digits = encoded.strip_prefix("IOSimuKeyIn:").unwrap();
        prop_assert_eq!(digits.len(), 3);
        prop_assert_eq!(digits.parse::<u32>().unwrap(), preset);
    }
}
