//! Panic hook handling of the harness
//!
//! Kept in its own test binary: the panic hook is process-wide, and tests in
//! other binaries panic on purpose.

use std::panic;
use std::sync::atomic::{AtomicUsize, Ordering};
use verdict::assertions::assert_equal;
use verdict::harness::run_with_writer;
use verdict::isolation::PanicHookGuard;
use verdict::{AssertionResult, ColorMode, Outcome, RunConfig, TestSuite};

static HITS: AtomicUsize = AtomicUsize::new(0);

fn install_counting_hook() {
    panic::set_hook(Box::new(|_| {
        HITS.fetch_add(1, Ordering::SeqCst);
    }));
}

fn panic_caught() {
    let _ = panic::catch_unwind(|| -> i32 { panic!("outside a run") });
}

#[test]
fn test_silenced_panics_restore_previous_hook() {
    install_counting_hook();
    panic_caught();
    assert_eq!(HITS.load(Ordering::SeqCst), 1);

    // Default config silences panics during the run
    let suites = [TestSuite::empty("Crashing")
        .add_test("explodes", || -> AssertionResult { panic!("x") })
        .add_test("still runs", || assert_equal(1, 1))];
    let config = RunConfig::default().with_color(ColorMode::Never);
    let mut buf = Vec::new();
    let report = run_with_writer(&suites, &config, &mut buf).unwrap();

    assert_eq!(
        report.suites[0].records[0].outcome,
        Outcome::Errored("panicked: x".to_string())
    );
    assert_eq!(report.suites[0].records[1].outcome, Outcome::Passed);
    assert_eq!(HITS.load(Ordering::SeqCst), 1);
    assert_eq!(PanicHookGuard::depth(), 0);

    // Counting hook is back after the run
    panic_caught();
    assert_eq!(HITS.load(Ordering::SeqCst), 2);

    // Nested guards only restore when the outermost one is dropped
    let outer = PanicHookGuard::install();
    let inner = PanicHookGuard::install();
    assert_eq!(PanicHookGuard::depth(), 2);
    drop(inner);
    panic_caught();
    assert_eq!(HITS.load(Ordering::SeqCst), 2);
    drop(outer);
    assert_eq!(PanicHookGuard::depth(), 0);
    panic_caught();
    assert_eq!(HITS.load(Ordering::SeqCst), 3);

    // Keeping panic output leaves the hook alone
    let quiet = config.keep_panic_output();
    run_with_writer(&suites, &quiet, &mut Vec::new()).unwrap();
    assert_eq!(HITS.load(Ordering::SeqCst), 4);

    let _ = panic::take_hook();
}
