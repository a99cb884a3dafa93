//! Logging around text decoding.
//!
//! A rejected text form is reported at `warn`, whatever stage rejected it.

use std::io;
use std::sync::{Arc, Mutex};

use keysuite_crypto::{Address, PrivateKey, PublicKey};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

/// Runs `f` with a subscriber that only records `warn` and above.
fn warnings_during(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_bad_base64_warns() {
    let logs = warnings_during(|| {
        assert!("not base64!".parse::<PublicKey>().is_err());
    });
    assert!(logs.contains("WARN"), "logs: {logs}");
    assert!(logs.contains("rejected text form"), "logs: {logs}");
    assert!(logs.contains("PublicKey"), "logs: {logs}");
}

#[test]
fn test_wrong_length_warns() {
    let logs = warnings_during(|| {
        assert!("AAAA".parse::<Address>().is_err());
    });
    assert!(logs.contains("rejected text form"), "logs: {logs}");
    assert!(logs.contains("Address"), "logs: {logs}");
}

#[test]
fn test_accepted_text_is_quiet() {
    let text = PrivateKey::random().public_key().to_string();
    let logs = warnings_during(|| {
        assert!(text.parse::<PublicKey>().is_ok());
    });
    assert!(logs.is_empty(), "logs: {logs}");
}
