//! Demo: a small run with a passing, a failing and a crashing suite
//!
//! Run with `cargo run -p verdict --example demo`; set `RUST_LOG=verdict=debug`
//! to see per-test logging. Pass `--interactive` to always exit with status 0.

use std::collections::HashMap;
use std::process::ExitCode;

use verdict::assertions::{
    assert_contains, assert_equal, assert_in_range, assert_none, assert_ok, assert_some,
    assert_throws,
};
use verdict::{harness, RunConfig, TestSuite};

/// Initialize logging based on log level
fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok(); // Ignore error if already initialized
}

fn math() -> TestSuite {
    TestSuite::empty("Math")
        .add_test("2+2=4", || assert_equal(4, 2 + 2))
        .add_test("2+2=5", || assert_equal(4, 2 + 3).with_message("arithmetic"))
        .add_test("boundary is inclusive", || assert_in_range(10, 1, 10))
}

fn collections() -> TestSuite {
    TestSuite::empty("Collections")
        .add_test("lookup", || {
            let ages: HashMap<&str, u32> = [("alice", 30), ("bob", 25)].into_iter().collect();
            assert_some(&ages.get("alice")).and(assert_none(&ages.get("carol")))
        })
        .add_test("contains", || assert_contains(&["a", "b"], &"b"))
        .add_test("out of bounds", || {
            let items = vec![1, 2, 3];
            assert_equal(4, items[3])
        })
}

fn parsing() -> TestSuite {
    TestSuite::empty("Parsing")
        .add_test("valid number", || assert_ok(&"42".parse::<i32>()))
        .add_test("invalid number", || assert_throws(|| "4x2".parse::<i32>()))
        .add_test("config file", || -> anyhow::Result<()> {
            let _raw = std::fs::read_to_string("demo-config.toml")?;
            Ok(())
        })
        .add_async_test("async lookup", || async {
            tokio::task::yield_now().await;
            assert_equal("verdict", "verdict")
        })
}

fn main() -> Result<ExitCode, verdict::VerdictError> {
    init_logging("warn");

    let config = if std::env::args().any(|a| a == "--interactive") {
        RunConfig::interactive()
    } else {
        RunConfig::default()
    };

    harness::run_main(&[math(), collections(), parsing()], &config)
}
