//! Assertion predicates
//!
//! Every predicate returns an [`AssertionResult`]; none of them panic to signal
//! an unmet expectation. Attach a custom message with
//! [`AssertionResult::with_message`]:
//!
//! ```
//! use verdict::assertions::assert_equal;
//!
//! let result = assert_equal(4, 2 + 3).with_message("addition");
//! assert_eq!(result.message(), Some("addition: expected 4, but got 5"));
//! ```

use crate::assertion::AssertionResult;
use crate::error::AbnormalTermination;
use crate::isolation::{catch, catch_async};
use regex::Regex;
use std::fmt;
use std::future::Future;

// =====================
// Equality Assertions
// =====================

/// Success iff `expected == actual`
pub fn assert_equal<T: PartialEq + fmt::Debug>(expected: T, actual: T) -> AssertionResult {
    AssertionResult::check(expected == actual, || {
        format!("expected {:?}, but got {:?}", expected, actual)
    })
}

/// Success iff `unexpected != actual`
pub fn assert_not_equal<T: PartialEq + fmt::Debug>(unexpected: T, actual: T) -> AssertionResult {
    AssertionResult::check(unexpected != actual, || {
        format!("expected a value other than {:?}", unexpected)
    })
}

/// Equality with explicit capabilities instead of `PartialEq` and `Debug`
pub fn assert_equal_by<T, E, S>(expected: T, actual: T, eq: E, show: S) -> AssertionResult
where
    E: FnOnce(&T, &T) -> bool,
    S: Fn(&T) -> String,
{
    if eq(&expected, &actual) {
        AssertionResult::Success
    } else {
        AssertionResult::Failure(format!(
            "expected {}, but got {}",
            show(&expected),
            show(&actual)
        ))
    }
}

// =====================
// Boolean Assertions
// =====================

/// Success iff `cond` is true
pub fn assert(cond: bool) -> AssertionResult {
    AssertionResult::check(cond, || "expected condition to be true".to_string())
}

/// Success iff `cond` is false
pub fn refute(cond: bool) -> AssertionResult {
    AssertionResult::check(!cond, || "expected condition to be false".to_string())
}

/// Alias for [`assert`]
pub fn assert_true(cond: bool) -> AssertionResult {
    assert(cond)
}

/// Alias for [`refute`]
pub fn assert_false(cond: bool) -> AssertionResult {
    refute(cond)
}

// =====================
// Option Assertions
// =====================

/// Success iff the option is `Some`
pub fn assert_some<T>(opt: &Option<T>) -> AssertionResult {
    AssertionResult::check(opt.is_some(), || "expected Some, but got None".to_string())
}

/// Success iff the option is `None`
pub fn assert_none<T: fmt::Debug>(opt: &Option<T>) -> AssertionResult {
    match opt {
        None => AssertionResult::Success,
        Some(value) => {
            AssertionResult::Failure(format!("expected None, but got Some({:?})", value))
        }
    }
}

// =====================
// Collection Assertions
// =====================

/// Success iff the sequence has no elements
pub fn assert_empty<T: fmt::Debug>(seq: &[T]) -> AssertionResult {
    AssertionResult::check(seq.is_empty(), || {
        format!(
            "expected an empty sequence, but it has {} element(s): {:?}",
            seq.len(),
            seq
        )
    })
}

/// Success iff some element of `seq` equals `elem`
pub fn assert_contains<T: PartialEq + fmt::Debug>(seq: &[T], elem: &T) -> AssertionResult {
    AssertionResult::check(seq.contains(elem), || {
        format!("expected {:?} to contain {:?}", seq, elem)
    })
}

/// Success iff the sequence has exactly `len` elements
pub fn assert_len<T>(seq: &[T], len: usize) -> AssertionResult {
    AssertionResult::check(seq.len() == len, || {
        format!("expected length {}, but got {}", len, seq.len())
    })
}

// =====================
// Range Assertions
// =====================

/// Success iff `lo <= value <= hi`
///
/// Both bounds are inclusive. Incomparable values (NaN) fail.
pub fn assert_in_range<T: PartialOrd + fmt::Debug>(value: T, lo: T, hi: T) -> AssertionResult {
    AssertionResult::check(lo <= value && value <= hi, || {
        format!("expected {:?} to be in range [{:?}, {:?}]", value, lo, hi)
    })
}

// =====================
// Result Assertions
// =====================

/// Success iff the result is `Ok`
pub fn assert_ok<T, E: fmt::Debug>(result: &Result<T, E>) -> AssertionResult {
    match result {
        Ok(_) => AssertionResult::Success,
        Err(e) => AssertionResult::Failure(format!("expected Ok, but got Err({:?})", e)),
    }
}

/// Success iff the result is `Err`
pub fn assert_error<T: fmt::Debug, E>(result: &Result<T, E>) -> AssertionResult {
    match result {
        Ok(value) => AssertionResult::Failure(format!("expected Err, but got Ok({:?})", value)),
        Err(_) => AssertionResult::Success,
    }
}

// =====================
// String Assertions
// =====================

/// Success iff `text` matches the regex `pattern`
///
/// An invalid pattern is reported as a failure.
pub fn assert_matches(text: &str, pattern: &str) -> AssertionResult {
    match Regex::new(pattern) {
        Ok(regex) => AssertionResult::check(regex.is_match(text), || {
            format!("expected {:?} to match pattern {:?}", text, pattern)
        }),
        Err(e) => AssertionResult::Failure(format!("invalid regex pattern {:?}: {}", pattern, e)),
    }
}

// =====================
// Effectful Assertions
// =====================

/// Runs `action`; success iff it panics or returns `Err`
pub fn assert_throws<F, T, E>(action: F) -> AssertionResult
where
    F: FnOnce() -> Result<T, E>,
{
    match catch(action) {
        Ok(Ok(_)) => AssertionResult::failure("expected action to fail, but it completed normally"),
        Ok(Err(_)) | Err(_) => AssertionResult::Success,
    }
}

/// Runs `action`; success iff it returns `Ok` without panicking
pub fn assert_succeeds<F, T, E>(action: F) -> AssertionResult
where
    F: FnOnce() -> Result<T, E>,
    E: Into<anyhow::Error>,
{
    match catch(action) {
        Ok(Ok(_)) => AssertionResult::Success,
        Ok(Err(e)) => failed_to_complete(AbnormalTermination::from_error(e)),
        Err(termination) => failed_to_complete(termination),
    }
}

/// Runs `action`; success iff it panics
pub fn assert_panics<F, T>(action: F) -> AssertionResult
where
    F: FnOnce() -> T,
{
    match catch(action) {
        Ok(_) => AssertionResult::failure("expected action to panic, but it completed normally"),
        Err(_) => AssertionResult::Success,
    }
}

/// Awaits `fut`; success iff it panics or resolves to `Err`
pub async fn assert_throws_async<Fut, T, E>(fut: Fut) -> AssertionResult
where
    Fut: Future<Output = Result<T, E>>,
{
    match catch_async(fut).await {
        Ok(Ok(_)) => AssertionResult::failure("expected future to fail, but it completed normally"),
        Ok(Err(_)) | Err(_) => AssertionResult::Success,
    }
}

/// Awaits `fut`; success iff it resolves to `Ok` without panicking
pub async fn assert_succeeds_async<Fut, T, E>(fut: Fut) -> AssertionResult
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<anyhow::Error>,
{
    match catch_async(fut).await {
        Ok(Ok(_)) => AssertionResult::Success,
        Ok(Err(e)) => failed_to_complete(AbnormalTermination::from_error(e)),
        Err(termination) => failed_to_complete(termination),
    }
}

fn failed_to_complete(termination: AbnormalTermination) -> AssertionResult {
    AssertionResult::Failure(format!(
        "expected action to succeed, but it {}",
        match &termination {
            AbnormalTermination::Panicked(msg) => format!("panicked: {}", msg),
            AbnormalTermination::Error(msg) => format!("failed: {}", msg),
        }
    ))
}
