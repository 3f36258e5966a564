//! End-to-end behavior of running suites, reporting and exit statuses

use std::cell::Cell;
use std::rc::Rc;
use verdict::assertions::{
    assert_contains, assert_empty, assert_equal, assert_in_range, assert_succeeds, assert_throws,
};
use verdict::harness::run_with_writer;
use verdict::{
    AssertionResult, ColorMode, Outcome, RunConfig, RunMode, RunSummary, TestRunner, TestSuite,
};

fn config(mode: RunMode) -> RunConfig {
    RunConfig::default()
        .with_mode(mode)
        .with_color(ColorMode::Never)
        .keep_panic_output()
}

fn run(suites: &[TestSuite], mode: RunMode) -> (verdict::RunReport, String) {
    let mut buf = Vec::new();
    let report = run_with_writer(suites, &config(mode), &mut buf).expect("harness failed");
    (report, String::from_utf8(buf).expect("report is utf-8"))
}

fn math_suite() -> TestSuite {
    TestSuite::empty("Math")
        .add_test("2+2=4", || assert_equal(4, 2 + 2))
        .add_test("2+2=5", || assert_equal(4, 5))
        .add_test("noop", || AssertionResult::Success)
}

#[test]
fn test_math_scenario() {
    let (report, text) = run(&[math_suite()], RunMode::ExitCode);

    let outcomes: Vec<_> = report.suites[0]
        .records
        .iter()
        .map(|r| r.outcome.clone())
        .collect();
    assert_eq!(outcomes[0], Outcome::Passed);
    assert_eq!(
        outcomes[1],
        Outcome::Failed("expected 4, but got 5".to_string())
    );
    assert_eq!(outcomes[2], Outcome::Passed);

    let summary = report.summary();
    assert_eq!(
        summary,
        RunSummary {
            total: 3,
            passed: 2,
            failed: 1
        }
    );
    assert_eq!(RunMode::ExitCode.exit_status(&summary), 1);
    assert!(text.contains("Total: 3  Passed: 2  Failed: 1"));
    assert!(text.contains("FAILED"));
}

#[test]
fn test_empty_suite_scenario() {
    let (report, text) = run(&[TestSuite::empty("Empty")], RunMode::ExitCode);

    assert_eq!(report.summary(), RunSummary::default());
    assert_eq!(RunMode::ExitCode.exit_status(&report.summary()), 0);
    assert!(text.contains("Empty"));
    assert!(text.ends_with("PASSED\n"));
}

#[test]
fn test_always_success_still_reports_failures() {
    let (report, text) = run(&[math_suite()], RunMode::AlwaysSuccess);

    assert_eq!(RunMode::AlwaysSuccess.exit_status(&report.summary()), 0);
    assert!(text.contains("✗ 2+2=5"));
    assert!(text.ends_with("FAILED\n"));
}

#[test]
fn test_isolation_across_tests_and_suites() {
    let executed = Rc::new(Cell::new(0));
    let counter = |executed: &Rc<Cell<i32>>| {
        let executed = executed.clone();
        move || executed.set(executed.get() + 1)
    };

    let first = TestSuite::empty("First")
        .add_test("crashes", || -> AssertionResult { panic!("unexpected state") })
        .add_test("counts", counter(&executed))
        .add_test("io error", || -> std::io::Result<()> {
            std::fs::read("/definitely/not/here/verdict.txt").map(|_| ())
        })
        .add_test("counts again", counter(&executed));
    let second = TestSuite::empty("Second").add_test("counts", counter(&executed));

    let (report, text) = run(&[first, second], RunMode::ExitCode);

    assert_eq!(executed.get(), 3);
    assert_eq!(report.suites.len(), 2);
    assert_eq!(
        report.suites[0].records[0].outcome,
        Outcome::Errored("panicked: unexpected state".to_string())
    );
    assert!(matches!(report.suites[0].records[2].outcome, Outcome::Errored(_)));
    assert_eq!(
        report.summary(),
        RunSummary {
            total: 5,
            passed: 3,
            failed: 2
        }
    );
    assert!(text.contains("! crashes\n      panicked: unexpected state"));
}

#[test]
fn test_n_tests_k_failures() {
    let suite = (0..10).fold(TestSuite::empty("Range"), |suite, i| {
        suite.add_test(format!("value {}", i), move || assert_in_range(i, 0, 6))
    });

    let result = TestRunner::new().unwrap().run_suite(&suite);

    assert_eq!(result.records.len(), 10);
    for (i, record) in result.records.iter().enumerate() {
        assert_eq!(record.description, format!("value {}", i));
    }
    assert_eq!(result.summary().passed, 7);
    assert_eq!(result.summary().failed, 3);
}

#[test]
fn test_duplicate_descriptions_reported_independently() {
    let suite = TestSuite::empty("Dupes")
        .add_test("same", || ())
        .add_test("same", || assert_equal(1, 2));

    let (report, text) = run(&[suite], RunMode::ExitCode);
    assert_eq!(report.suites[0].records.len(), 2);
    assert!(text.contains("✓ same"));
    assert!(text.contains("✗ same"));
}

#[test]
fn test_effectful_assertions_inside_tests() {
    let suite = TestSuite::empty("Effects")
        .add_test("throws", || assert_throws(|| "nan".parse::<u8>()))
        .add_test("succeeds", || assert_succeeds(|| "7".parse::<u8>()))
        .add_test("collections", || {
            assert_contains(&[1, 2, 3], &3).and(assert_empty::<i32>(&[]))
        })
        .add_async_test("async io", || async {
            tokio::task::yield_now().await;
            assert_equal("ok", "ok")
        });

    let (report, _) = run(&[suite], RunMode::ExitCode);
    assert!(report.summary().all_passed());
    assert_eq!(report.summary().total, 4);
}

#[test]
fn test_report_serializes() {
    let (report, _) = run(&[math_suite()], RunMode::ExitCode);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["suites"][0]["name"], "Math");
    assert_eq!(json["suites"][0]["records"][0]["outcome"], "Passed");
    assert_eq!(
        json["suites"][0]["records"][1]["outcome"]["Failed"],
        "expected 4, but got 5"
    );
}
