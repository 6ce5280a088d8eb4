// Scheduler service
// Fixed-cadence refresh loop feeding every visible surface from one clock

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::models::booking::BookingWindow;
use crate::models::glance::GlanceSnapshot;
use crate::services::timeline::glance_snapshot;

/// Fixed refresh cadence.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Source of the shared "now".
///
/// Exactly one clock feeds the scheduler; surfaces receive its reading inside
/// each snapshot instead of consulting wall-clock time themselves.
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Wall-clock time.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Callback invoked once per tick with the freshly computed snapshot.
pub type TickObserver = Box<dyn Fn(&GlanceSnapshot) + Send + 'static>;

/// Owns the single repeating refresh timer for all glance surfaces.
///
/// Lifecycle is Idle → Running (on `start`) → Idle (on `stop`); the host calls
/// these from its attach/detach hooks. Each tick reads the clock once,
/// recomputes the snapshot from absolute time, and fans it out to every
/// observer, so a missed tick leaves no residual drift.
pub struct RefreshScheduler {
    clock: Arc<dyn Clock>,
    window: Arc<Mutex<BookingWindow>>,
    observers: Arc<Mutex<Vec<TickObserver>>>,
    running: Arc<AtomicBool>,
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    /// Scheduler over the system clock at the fixed 1-second cadence.
    pub fn new(window: BookingWindow) -> Self {
        Self::with_clock(window, Arc::new(SystemClock), TICK_PERIOD)
    }

    /// Scheduler with an injected clock and cadence.
    pub fn with_clock(window: BookingWindow, clock: Arc<dyn Clock>, period: Duration) -> Self {
        Self {
            clock,
            window: Arc::new(Mutex::new(window)),
            observers: Arc::new(Mutex::new(Vec::new())),
            running: Arc::new(AtomicBool::new(false)),
            period,
            handle: None,
        }
    }

    /// Register a surface's redraw callback.
    pub fn subscribe(&self, observer: TickObserver) {
        self.observers.lock().unwrap().push(observer);
    }

    /// Replace the booking window when the host pushes a state change.
    pub fn update_window(&self, window: BookingWindow) {
        *self.window.lock().unwrap() = window;
        log::info!("booking window updated, ends {}", window.end());
    }

    /// Compute one snapshot immediately, outside the timer.
    ///
    /// Used for the initial paint on attach and by hosts that drive their own
    /// cadence.
    pub fn snapshot_now(&self) -> GlanceSnapshot {
        let window = *self.window.lock().unwrap();
        glance_snapshot(self.clock.now(), &window)
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Start ticking. Idempotent while already running.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }
        log::info!("refresh scheduler started, period {:?}", self.period);

        let clock = Arc::clone(&self.clock);
        let window = Arc::clone(&self.window);
        let observers = Arc::clone(&self.observers);
        let running = Arc::clone(&self.running);
        let period = self.period;

        self.handle = Some(std::thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                let current = *window.lock().unwrap();
                let snapshot = glance_snapshot(clock.now(), &current);
                for observer in observers.lock().unwrap().iter() {
                    observer(&snapshot);
                }
                std::thread::sleep(period);
            }
        }));
    }

    /// Stop ticking and join the timer thread. Idempotent while idle.
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("refresh timer thread panicked");
            }
        }
        log::info!("refresh scheduler stopped");
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::mpsc;

    fn local(h: u32, mi: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 14, h, mi, s).unwrap()
    }

    fn window() -> BookingWindow {
        BookingWindow::new(local(14, 0, 0), local(15, 0, 0)).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        let scheduler = RefreshScheduler::new(window());
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_snapshot_now_uses_injected_clock() {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(local(14, 23, 10));

        let scheduler =
            RefreshScheduler::with_clock(window(), Arc::new(clock), TICK_PERIOD);
        let snapshot = scheduler.snapshot_now();
        assert_eq!(snapshot.now, local(14, 23, 10));
        assert_eq!(snapshot.countdown_target, local(15, 0, 0));
    }

    #[test]
    fn test_observers_receive_ticks_while_running() {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(local(14, 23, 10));

        let mut scheduler = RefreshScheduler::with_clock(
            window(),
            Arc::new(clock),
            Duration::from_millis(5),
        );
        let (tx, rx) = mpsc::channel();
        scheduler.subscribe(Box::new(move |snapshot| {
            let _ = tx.send(*snapshot);
        }));

        scheduler.start();
        assert!(scheduler.is_running());
        let first = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        let second = rx.recv_timeout(Duration::from_secs(1)).unwrap();
        scheduler.stop();
        assert!(!scheduler.is_running());

        assert_eq!(first.countdown_target, local(15, 0, 0));
        assert_eq!(second, first);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(local(14, 23, 10));

        let mut scheduler = RefreshScheduler::with_clock(
            window(),
            Arc::new(clock),
            Duration::from_millis(5),
        );
        scheduler.start();
        scheduler.start();
        assert!(scheduler.is_running());
        scheduler.stop();
    }

    #[test]
    fn test_stop_without_start_is_a_no_op() {
        let mut scheduler = RefreshScheduler::new(window());
        scheduler.stop();
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_window_update_reaches_next_snapshot() {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(local(14, 23, 10));

        let scheduler =
            RefreshScheduler::with_clock(window(), Arc::new(clock), TICK_PERIOD);
        let extended =
            BookingWindow::new(local(14, 0, 0), local(16, 0, 0)).unwrap();
        scheduler.update_window(extended);

        assert_eq!(scheduler.snapshot_now().countdown_target, local(16, 0, 0));
    }
}
