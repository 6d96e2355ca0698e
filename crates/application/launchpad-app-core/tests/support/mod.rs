#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use launchpad_app_core::{
    AppKernel, AppStore, DomainEvent, StaticFixtures, TimerPort,
};
use tokio::sync::mpsc;

/// Captures scheduled one-shots instead of sleeping, so tests drive timer
/// completions by hand through the kernel channel.
#[derive(Clone, Default)]
pub struct RecordingTimer {
    scheduled: Arc<Mutex<Vec<(Duration, DomainEvent)>>>,
}

impl RecordingTimer {
    pub fn drain(&self) -> Vec<(Duration, DomainEvent)> {
        std::mem::take(&mut self.scheduled.lock().unwrap())
    }
}

impl TimerPort for RecordingTimer {
    fn schedule(&self, delay: Duration, ev: DomainEvent, _tx: mpsc::Sender<DomainEvent>) {
        self.scheduled.lock().unwrap().push((delay, ev));
    }
}

pub type TestKernel = AppKernel<StaticFixtures, RecordingTimer>;

pub fn test_kernel() -> (TestKernel, RecordingTimer) {
    let timer = RecordingTimer::default();
    let kernel = AppKernel::new(AppStore::default(), StaticFixtures, timer.clone());
    (kernel, timer)
}

/// Feeds a recorded completion back through the kernel, as the thread timer
/// would after its delay.
pub fn deliver(kernel: &mut TestKernel, ev: DomainEvent) {
    kernel.sender().try_send(ev).expect("kernel channel full");
    kernel.tick();
}
