//! Custom assertions

use graph_engine::{ErrorKind, Result};

/// Assert `actual` is within `eps` of `expected`
pub fn assert_close(actual: f64, expected: f64, eps: f64) {
    assert!(
        (actual - expected).abs() <= eps,
        "expected {} ± {}, got {}",
        expected,
        eps,
        actual
    );
}

/// Assert the ranks sum to 1 within `eps`
pub fn assert_rank_sum<'a>(ranks: impl IntoIterator<Item = &'a f64>, eps: f64) {
    let total: f64 = ranks.into_iter().sum();
    assert_close(total, 1.0, eps);
}

/// Assert a call failed with the given error kind
pub fn assert_error_kind<T: std::fmt::Debug>(result: Result<T>, kind: ErrorKind) {
    match result {
        Ok(value) => panic!("expected {} error, got Ok({:?})", kind, value),
        Err(err) => assert_eq!(err.kind(), kind, "unexpected error: {}", err),
    }
}
