use std::time::Duration;

use tokio::sync::mpsc;

use crate::app_core::DomainEvent;
use crate::ports::TimerPort;

/// Thread-backed timer: sleeps on a named worker thread, then pushes the
/// event into the kernel channel. The receiver side decides staleness.
pub struct ThreadTimer;

impl TimerPort for ThreadTimer {
    fn schedule(&self, delay: Duration, ev: DomainEvent, tx: mpsc::Sender<DomainEvent>) {
        let spawn_res = std::thread::Builder::new()
            .name("launchpad-timer".into())
            .spawn(move || {
                std::thread::sleep(delay);
                if tx.blocking_send(ev).is_err() {
                    tracing::debug!("timer fired after the kernel was dropped");
                }
            });

        if let Err(e) = spawn_res {
            tracing::error!("Failed to start timer thread: {e}");
        }
    }
}
