//! Catch-and-convert boundary
//!
//! Every test action runs inside [`catch`] (or [`catch_async`]), which turns a
//! panic into an [`AbnormalTermination`] value instead of unwinding further.
//! `assert_throws` and friends use the same boundary for their nested catch.

use crate::error::AbnormalTermination;
use futures::FutureExt;
use parking_lot::Mutex;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Run `f`, converting a panic into `AbnormalTermination::Panicked`
pub fn catch<F, T>(f: F) -> Result<T, AbnormalTermination>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(AbnormalTermination::from_panic)
}

/// Await `fut`, converting a panic during any poll into `AbnormalTermination::Panicked`
pub async fn catch_async<Fut>(fut: Fut) -> Result<Fut::Output, AbnormalTermination>
where
    Fut: Future,
{
    AssertUnwindSafe(fut)
        .catch_unwind()
        .await
        .map_err(AbnormalTermination::from_panic)
}

/// Routes panic messages to `tracing` while alive, then restores the previous hook
///
/// The panic hook is process-wide. Guards nest: the first one installed
/// saves the previous hook and the last one dropped puts it back, so
/// overlapping runs on different threads cannot leave the tracing hook
/// behind. If the last guard is dropped while its thread is unwinding, the
/// previous hook stays saved and is restored by the next guard's drop.
pub struct PanicHookGuard {
    _private: (),
}

struct HookState {
    depth: usize,
    previous: Option<PanicHook>,
}

static HOOK_STATE: Mutex<HookState> = parking_lot::const_mutex(HookState {
    depth: 0,
    previous: None,
});

impl PanicHookGuard {
    /// Install the tracing hook
    pub fn install() -> Self {
        let mut state = HOOK_STATE.lock();
        if state.depth == 0 && state.previous.is_none() {
            state.previous = Some(panic::take_hook());
            panic::set_hook(Box::new(|info| {
                tracing::debug!(target: "verdict::panic", "{}", info);
            }));
        }
        state.depth += 1;
        Self { _private: () }
    }

    /// Number of guards currently alive
    pub fn depth() -> usize {
        HOOK_STATE.lock().depth
    }
}

impl Drop for PanicHookGuard {
    fn drop(&mut self) {
        let mut state = HOOK_STATE.lock();
        state.depth -= 1;
        // set_hook panics when called from a panicking thread
        if state.depth > 0 || std::thread::panicking() {
            return;
        }
        if let Some(previous) = state.previous.take() {
            panic::set_hook(previous);
        }
    }
}

impl std::fmt::Debug for PanicHookGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanicHookGuard").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_returns_value() {
        assert_eq!(catch(|| 2 + 2), Ok(4));
    }

    #[test]
    fn test_catch_converts_panic() {
        let result = catch(|| -> i32 { panic!("kaboom") });
        assert_eq!(result, Err(AbnormalTermination::Panicked("kaboom".to_string())));
    }

    #[test]
    fn test_catch_formatted_panic() {
        let items: Vec<i32> = Vec::new();
        let result = catch(|| items[3]);
        let err = result.unwrap_err();
        assert!(err.is_panic());
        assert!(err.to_string().contains("index out of bounds"));
    }

    async fn fails_after_yield() {
        tokio::task::yield_now().await;
        panic!("late failure");
    }

    #[tokio::test]
    async fn test_catch_async() {
        assert_eq!(catch_async(async { "done" }).await, Ok("done"));

        let result = catch_async(fails_after_yield()).await;
        assert_eq!(
            result,
            Err(AbnormalTermination::Panicked("late failure".to_string()))
        );
    }
}
