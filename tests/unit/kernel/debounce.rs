use super::*;

const DELAY: Duration = Duration::from_millis(500);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn returns_previous_value_until_quiet_period_elapses() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(String::new(), DELAY);

    assert!(d.set("a".to_string(), t0));
    assert_eq!(d.settled(), "");
    assert_eq!(d.poll(t0 + ms(499)), None);
    assert_eq!(d.settled(), "");

    assert_eq!(d.poll(t0 + ms(500)), Some("a".to_string()));
    assert_eq!(d.settled(), "a");
    assert!(!d.is_pending());
}

#[test]
fn burst_settles_once_with_last_value() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(String::new(), DELAY);

    let mut settlements = Vec::new();
    let mut now = t0;
    for (i, value) in ["T", "Te", "Tes", "Test"].iter().enumerate() {
        now = t0 + ms(100 * i as u64);
        d.set(value.to_string(), now);
        if let Some(v) = d.poll(now) {
            settlements.push(v);
        }
    }
    let last_input = now;

    for step in 1..=20 {
        if let Some(v) = d.poll(last_input + ms(step * 50)) {
            settlements.push(v);
        }
    }

    assert_eq!(settlements, vec!["Test".to_string()]);
    assert_eq!(d.deadline(), None);
}

#[test]
fn new_value_restarts_the_wait() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(0u32, DELAY);

    d.set(1, t0);
    d.set(2, t0 + ms(400));
    assert_eq!(d.deadline(), Some(t0 + ms(900)));
    assert_eq!(d.poll(t0 + ms(600)), None);
    assert_eq!(d.poll(t0 + ms(900)), Some(2));
}

#[test]
fn unchanged_input_does_not_reschedule() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(String::new(), DELAY);

    assert!(d.set("x".to_string(), t0));
    assert!(!d.set("x".to_string(), t0 + ms(300)));
    assert_eq!(d.deadline(), Some(t0 + ms(500)));
}

#[test]
fn returning_to_settled_value_settles_silently() {
    let t0 = Instant::now();
    let mut d = Debouncer::new("abc".to_string(), DELAY);

    d.set("abcd".to_string(), t0);
    d.set("abc".to_string(), t0 + ms(100));
    assert_eq!(d.poll(t0 + ms(600)), None);
    assert!(!d.is_pending());
    assert_eq!(d.settled(), "abc");
}

#[test]
fn cancel_prevents_settlement() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(String::new(), DELAY);

    d.set("gone".to_string(), t0);
    assert!(d.cancel());
    assert!(!d.cancel());
    assert_eq!(d.poll(t0 + ms(10_000)), None);
    assert_eq!(d.settled(), "");
}

#[test]
fn reset_forces_value_without_emitting() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(String::new(), DELAY);

    d.set("query".to_string(), t0);
    d.reset(String::new());
    assert_eq!(d.latest(), "");
    assert_eq!(d.settled(), "");
    assert_eq!(d.poll(t0 + ms(1_000)), None);
}

#[test]
fn zero_delay_settles_on_first_poll() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(String::new(), Duration::ZERO);

    d.set("now".to_string(), t0);
    assert_eq!(d.poll(t0), Some("now".to_string()));
}

#[test]
fn default_delay_is_half_a_second() {
    assert_eq!(DEFAULT_DEBOUNCE_DELAY, ms(500));
}
