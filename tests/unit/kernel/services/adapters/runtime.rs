use super::*;
use crate::kernel::services::ports::lookup_fn;
use crate::kernel::SimpleItem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(2);

fn echo_lookup() -> Arc<dyn Lookup<SimpleItem>> {
    lookup_fn(|query: String| async move { Ok(vec![SimpleItem::new(1, query)]) })
}

#[test]
fn test_start_delivers_result_tagged_with_request_id() {
    let (tx, rx) = mpsc::channel();
    let mut runtime = LookupRuntime::new(echo_lookup(), tx).unwrap();

    runtime.start(7, "Test".to_string());
    let msg = rx.recv_timeout(WAIT).unwrap();

    assert_eq!(msg.request_id, 7);
    let items = msg.outcome.unwrap();
    assert_eq!(items, vec![SimpleItem::new(1, "Test")]);

    runtime.complete(7);
    assert_eq!(runtime.pending(), 0);
}

#[test]
fn test_lookup_error_is_forwarded() {
    let lookup: Arc<dyn Lookup<SimpleItem>> =
        lookup_fn(|_query: String| async move { Err(LookupError::msg("boom")) });
    let (tx, rx) = mpsc::channel();
    let mut runtime = LookupRuntime::new(lookup, tx).unwrap();

    runtime.start(0, "x".to_string());
    let msg = rx.recv_timeout(WAIT).unwrap();

    assert_eq!(msg.request_id, 0);
    assert_eq!(msg.outcome.unwrap_err().to_string(), "boom");
}

#[test]
fn test_panicking_lookup_reports_task_error() {
    let lookup: Arc<dyn Lookup<SimpleItem>> = lookup_fn(|query: String| async move {
        if !query.is_empty() {
            panic!("lookup exploded");
        }
        Ok(Vec::new())
    });
    let (tx, rx) = mpsc::channel();
    let mut runtime = LookupRuntime::new(lookup, tx).unwrap();

    runtime.start(3, "x".to_string());
    let msg = rx.recv_timeout(WAIT).unwrap();

    assert_eq!(msg.request_id, 3);
    assert!(matches!(msg.outcome, Err(LookupError::Task(_))));
}

#[test]
fn test_cancel_suppresses_result() {
    let lookup = lookup_fn(|query: String| async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(vec![SimpleItem::new(1, query)])
    });
    let (tx, rx) = mpsc::channel();
    let mut runtime = LookupRuntime::new(lookup, tx).unwrap();

    runtime.start(1, "slow".to_string());
    assert_eq!(runtime.pending(), 1);
    assert!(runtime.cancel(1));
    assert!(!runtime.cancel(1));
    assert_eq!(runtime.pending(), 0);

    assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
}

#[test]
fn test_cancel_unknown_request_is_noop() {
    let (tx, _rx) = mpsc::channel();
    let mut runtime = LookupRuntime::new(echo_lookup(), tx).unwrap();
    assert!(!runtime.cancel(42));
}

#[test]
fn test_lookup_runs_once_per_start() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let lookup = lookup_fn(move |query: String| {
        counter.fetch_add(1, Ordering::SeqCst);
        async move { Ok(vec![SimpleItem::new(1, query)]) }
    });
    let (tx, rx) = mpsc::channel();
    let mut runtime = LookupRuntime::new(lookup, tx).unwrap();

    runtime.start(0, "a".to_string());
    runtime.start(1, "ab".to_string());

    let mut ids = vec![
        rx.recv_timeout(WAIT).unwrap().request_id,
        rx.recv_timeout(WAIT).unwrap().request_id,
    ];
    ids.sort();
    assert_eq!(ids, vec![0, 1]);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_cancel_all_drops_every_pending_lookup() {
    let lookup = lookup_fn(|query: String| async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        Ok(vec![SimpleItem::new(1, query)])
    });
    let (tx, rx) = mpsc::channel();
    let mut runtime = LookupRuntime::new(lookup, tx).unwrap();

    runtime.start(0, "a".to_string());
    runtime.start(1, "b".to_string());
    runtime.cancel_all();

    assert_eq!(runtime.pending(), 0);
    assert!(rx.recv_timeout(Duration::from_millis(500)).is_err());
}
