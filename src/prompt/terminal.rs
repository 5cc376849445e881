//! Terminal setup, teardown, and the key reader thread.
//!
//! The prompt runs inline, so only raw mode and cursor visibility are
//! touched; there is no alternate screen to enter or leave. [RawModeGuard]
//! restores the terminal on drop, which also covers early returns and
//! panics that unwind.
//!
//! Key reading happens on its own thread so the event loop can block on a
//! channel instead of polling. The thread exits when the shutdown flag is
//! raised or the receiving side goes away.

use crossbeam_channel::{Receiver, unbounded};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Puts the terminal into raw mode with a hidden cursor and undoes both on
/// drop.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), Hide)?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), Show);
    }
}

/// Spawns the key reader thread and returns its output channel.
///
/// Non-key events (resize, mouse) are consumed and dropped. Read errors end
/// the thread; the closed channel then surfaces as an interrupt in the event
/// loop.
pub fn spawn_key_reader(shutdown: Arc<AtomicBool>) -> Receiver<KeyEvent> {
    let (tx, rx) = unbounded::<KeyEvent>();

    thread::spawn(move || {
        while !shutdown.load(Ordering::SeqCst) {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if tx.send(key).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => break,
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_thread_stops_on_shutdown() {
        let shutdown = Arc::new(AtomicBool::new(true));
        let rx = spawn_key_reader(Arc::clone(&shutdown));

        // Flag was up before the first poll; the sender drops promptly and
        // the channel reports disconnection instead of blocking.
        let result = rx.recv_timeout(Duration::from_secs(1));
        assert!(result.is_err());
    }
}
