// Host-side tests for the resize debouncer.

use drift_core::Debouncer;
use instant::Instant;
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn idle_debouncer_never_fires() {
    let mut debounce = Debouncer::new(ms(100));
    let now = Instant::now();
    assert!(!debounce.is_pending());
    assert!(!debounce.fire(now));
    assert!(!debounce.fire(now + ms(1000)));
}

#[test]
fn burst_collapses_to_a_single_fire() {
    // Five triggers inside 50ms with a 100ms delay: exactly one fire,
    // after the stream goes quiet.
    let mut debounce = Debouncer::new(ms(100));
    let t0 = Instant::now();
    for i in 0..5 {
        debounce.trigger(t0 + ms(i * 10));
    }
    assert!(debounce.is_pending());

    // Quiet period measured from the last trigger at t0+40.
    assert!(!debounce.fire(t0 + ms(100)));
    assert!(!debounce.fire(t0 + ms(139)));
    assert!(debounce.fire(t0 + ms(141)));
    assert!(!debounce.is_pending());
    assert!(!debounce.fire(t0 + ms(142)));
}

#[test]
fn retrigger_pushes_the_deadline_out() {
    let mut debounce = Debouncer::new(ms(100));
    let t0 = Instant::now();
    debounce.trigger(t0);
    debounce.trigger(t0 + ms(90));
    assert!(!debounce.fire(t0 + ms(110)));
    assert!(debounce.fire(t0 + ms(190)));
}

#[test]
fn each_burst_fires_independently() {
    let mut debounce = Debouncer::new(ms(100));
    let t0 = Instant::now();

    debounce.trigger(t0);
    assert!(debounce.fire(t0 + ms(100)));

    debounce.trigger(t0 + ms(500));
    assert!(!debounce.fire(t0 + ms(550)));
    assert!(debounce.fire(t0 + ms(600)));
}
