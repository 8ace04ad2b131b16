use super::Debouncer;
use std::time::{Duration, Instant};

const QUIET: Duration = Duration::from_millis(500);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_idle_timer_never_fires() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(QUIET);

    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire(start + ms(10_000)));
}

#[test]
fn test_fires_once_after_quiet_period() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(QUIET);
    debouncer.notify(start);

    assert!(!debouncer.fire(start + ms(499)));
    assert!(debouncer.fire(start + ms(500)));
    assert!(!debouncer.fire(start + ms(501)));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_burst_collapses_into_one_pass() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(QUIET);

    for offset in [0, 100, 200, 300] {
        debouncer.notify(start + ms(offset));
        assert!(!debouncer.fire(start + ms(offset)));
    }

    // The deadline follows the last notification, not the first.
    assert!(!debouncer.fire(start + ms(600)));
    assert!(debouncer.fire(start + ms(800)));
    assert!(!debouncer.fire(start + ms(2_000)));
}

#[test]
fn test_notification_after_firing_arms_a_new_pass() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(QUIET);

    debouncer.notify(start);
    assert!(debouncer.fire(start + ms(500)));

    debouncer.notify(start + ms(700));
    assert!(debouncer.is_pending());
    assert!(debouncer.fire(start + ms(1_200)));
}

#[test]
fn test_cancel_drops_pending_pass() {
    let start = Instant::now();
    let mut debouncer = Debouncer::new(QUIET);

    debouncer.notify(start);
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    assert!(!debouncer.fire(start + ms(1_000)));
}
