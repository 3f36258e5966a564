//! Tests and test suites
//!
//! A [`TestSuite`] is built by accumulation:
//!
//! ```
//! use verdict::assertions::assert_equal;
//! use verdict::TestSuite;
//!
//! let suite = TestSuite::empty("Math")
//!     .add_test("2+2=4", || assert_equal(4, 2 + 2))
//!     .add_test("parses", || -> anyhow::Result<_> {
//!         let n: i32 = "42".parse()?;
//!         Ok(assert_equal(42, n))
//!     });
//!
//! assert_eq!(suite.len(), 2);
//! ```

use crate::assertion::AssertionResult;
use crate::error::AbnormalTermination;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Value a test action may return
///
/// `Err` from a fallible action is an abnormal termination, not an
/// assertion failure: the test is recorded as errored.
pub trait IntoAssertion {
    /// Convert into an assertion result, or the reason the action did not complete
    fn into_assertion(self) -> Result<AssertionResult, AbnormalTermination>;
}

impl IntoAssertion for AssertionResult {
    fn into_assertion(self) -> Result<AssertionResult, AbnormalTermination> {
        Ok(self)
    }
}

/// A test that returns nothing passes unless it panics
impl IntoAssertion for () {
    fn into_assertion(self) -> Result<AssertionResult, AbnormalTermination> {
        Ok(AssertionResult::Success)
    }
}

impl<E> IntoAssertion for Result<AssertionResult, E>
where
    E: Into<anyhow::Error>,
{
    fn into_assertion(self) -> Result<AssertionResult, AbnormalTermination> {
        self.map_err(AbnormalTermination::from_error)
    }
}

impl<E> IntoAssertion for Result<(), E>
where
    E: Into<anyhow::Error>,
{
    fn into_assertion(self) -> Result<AssertionResult, AbnormalTermination> {
        self.map(|()| AssertionResult::Success)
            .map_err(AbnormalTermination::from_error)
    }
}

type SyncAction = Arc<dyn Fn() -> Result<AssertionResult, AbnormalTermination>>;
type AsyncAction =
    Arc<dyn Fn() -> LocalBoxFuture<'static, Result<AssertionResult, AbnormalTermination>>>;

/// Effect of a test
#[derive(Clone)]
pub enum TestAction {
    /// Runs to completion on the calling thread
    Sync(SyncAction),
    /// Driven to completion by the runner's async runtime
    Async(AsyncAction),
}

impl fmt::Debug for TestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestAction::Sync(_) => write!(f, "TestAction::Sync"),
            TestAction::Async(_) => write!(f, "TestAction::Async"),
        }
    }
}

/// A named effectful unit of work
#[derive(Debug, Clone)]
pub struct Test {
    description: String,
    action: TestAction,
}

impl Test {
    /// Create a synchronous test
    pub fn new<F, R>(description: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> R + 'static,
        R: IntoAssertion,
    {
        Self {
            description: description.into(),
            action: TestAction::Sync(Arc::new(move || action().into_assertion())),
        }
    }

    /// Create an asynchronous test
    pub fn new_async<F, Fut, R>(description: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = R> + 'static,
        R: IntoAssertion,
    {
        Self {
            description: description.into(),
            action: TestAction::Async(Arc::new(move || {
                let fut = action();
                async move { fut.await.into_assertion() }.boxed_local()
            })),
        }
    }

    /// Test description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Test action
    pub fn action(&self) -> &TestAction {
        &self.action
    }
}

/// Ordered, named collection of tests
///
/// Cloning gives an independent snapshot: adding to one copy never changes
/// another. Tests cannot be removed or reordered.
#[derive(Debug, Clone)]
pub struct TestSuite {
    name: String,
    tests: Vec<Test>,
}

impl TestSuite {
    /// Create a suite with no tests
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
        }
    }

    /// Append a synchronous test after all existing ones
    pub fn add_test<F, R>(self, description: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> R + 'static,
        R: IntoAssertion,
    {
        self.push(Test::new(description, action))
    }

    /// Append an asynchronous test after all existing ones
    pub fn add_async_test<F, Fut, R>(self, description: impl Into<String>, action: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = R> + 'static,
        R: IntoAssertion,
    {
        self.push(Test::new_async(description, action))
    }

    /// Append an already constructed test
    pub fn push(mut self, test: Test) -> Self {
        self.tests.push(test);
        self
    }

    /// Suite name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tests in declaration order
    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    /// Number of tests
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Check if the suite has no tests
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}
