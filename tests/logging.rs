use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use keygen::{GenerationConfig, PIN_LENGTH, generate, generate_pin};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(level: Level, f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn presets_log_pool_construction() {
    let logs = capture(Level::DEBUG, || {
        generate_pin(PIN_LENGTH);
    });

    assert!(logs.contains("built character pool"), "{logs}");
    assert!(logs.contains("size=10"), "{logs}");
}

#[test]
fn config_and_preset_paths_log_the_same_pool_event() {
    let logs = capture(Level::DEBUG, || {
        generate(&GenerationConfig::none(6).numbers(true)).unwrap();
        generate_pin(PIN_LENGTH);
    });

    assert_eq!(logs.matches("built character pool").count(), 2, "{logs}");
}

#[test]
fn empty_selection_is_quiet_at_warn() {
    let logs = capture(Level::WARN, || {
        assert!(generate(&GenerationConfig::none(5)).is_err());
    });

    assert!(logs.is_empty(), "{logs}");
}
