//! Poll a LinkPlay device and print what it is playing
//!
//! ```text
//! LINKPLAY_LOG_MODE=development cargo run -p linkplay-sdk --example poll_device -- 192.168.1.20
//! ```

use std::thread;
use std::time::Duration;

use linkplay_sdk::{logging, DeviceConfig, LinkPlayDevice, RefreshOutcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging_from_env()?;

    let host = std::env::args()
        .nth(1)
        .ok_or("usage: poll_device <host> [lastfm-api-key]")?;
    let mut config = DeviceConfig::new(host);
    if let Some(key) = std::env::args().nth(2) {
        config = config.with_lastfm_api_key(key);
    }

    let mut device = LinkPlayDevice::connect(config)?;
    println!("Connected to {} ({})", device.name(), device.host());

    loop {
        match device.refresh() {
            Ok(RefreshOutcome::Updated) => println!(
                "{:?} | {} - {} | {}s / {}s | vol {:.0}%",
                device.state(),
                device.media_artist().unwrap_or("?"),
                device.media_title().unwrap_or("?"),
                device.media_position().unwrap_or(0),
                device.media_duration().unwrap_or(0),
                device.volume_level().unwrap_or(0.0) * 100.0,
            ),
            Ok(RefreshOutcome::Malformed(e)) => eprintln!("Skipped update: {}", e),
            Err(e) => eprintln!("Device unreachable: {}", e),
        }
        thread::sleep(Duration::from_secs(5));
    }
}
