// Compute-once storage for lazily derived instance fields.
// Each memoized field on a type is declared as its own named `Memo<T>` slot.

use std::cell::OnceCell;
use std::future::Future;

use tracing::debug;

/// A named slot holding at most one computed value.
///
/// The slot starts empty. The first successful computation stores its result,
/// and every later access returns a reference to that same value without
/// running the computation again. Presence is tracked by the slot itself, so
/// `0`, `false`, `None` or an empty collection are cached like any other value.
///
/// A failed computation stores nothing; the next access runs it again.
///
/// The slot is not `Sync`. A computation that re-enters its own slot may run
/// more than once; the first value stored wins.
#[derive(Debug)]
pub struct Memo<T> {
    name: &'static str,
    slot: OnceCell<T>,
}

impl<T> Memo<T> {
    /// Create an empty slot. `name` identifies the computation in logs.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether a value has been stored.
    pub fn is_cached(&self) -> bool {
        self.slot.get().is_some()
    }

    /// The stored value, without computing anything.
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Return the stored value, computing and storing it on first access.
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        if let Some(value) = self.cached() {
            return value;
        }
        let value = init();
        self.store(value)
    }

    /// Like [`Memo::get_or_init`] for a fallible computation.
    ///
    /// An error is returned to the caller as-is and leaves the slot empty.
    pub fn get_or_try_init<E, F>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.cached() {
            return Ok(value);
        }
        let value = init()?;
        Ok(self.store(value))
    }

    /// Like [`Memo::get_or_try_init`] for a computation that returns a future.
    pub async fn get_or_try_init_async<E, F, Fut>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.cached() {
            return Ok(value);
        }
        let value = init().await?;
        Ok(self.store(value))
    }

    fn cached(&self) -> Option<&T> {
        let value = self.slot.get();
        if value.is_some() {
            debug!(memo = self.name, "memo hit");
        } else {
            debug!(memo = self.name, "memo miss, computing");
        }
        value
    }

    fn store(&self, value: T) -> &T {
        // If the computation re-entered and filled the slot, keep the earlier value.
        self.slot.get_or_init(|| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Test fixture with one memoized field backed by a counting computation.
    struct Counter {
        calls: Cell<u32>,
        answer: Memo<u32>,
    }

    impl Counter {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
                answer: Memo::new("answer"),
            }
        }

        fn compute(&self) -> u32 {
            self.calls.set(self.calls.get() + 1);
            42
        }

        fn answer(&self) -> &u32 {
            self.answer.get_or_init(|| self.compute())
        }
    }

    #[test]
    fn test_computes_once() {
        let counter = Counter::new();
        assert!(!counter.answer.is_cached());

        let first = counter.answer();
        let second = counter.answer();

        assert_eq!(*first, 42);
        assert_eq!(*second, 42);
        assert!(std::ptr::eq(first, second));
        assert_eq!(counter.calls.get(), 1);
        assert!(counter.answer.is_cached());
    }

    #[test]
    fn test_many_accesses_run_side_effect_once() {
        let counter = Counter::new();
        for _ in 0..100 {
            assert_eq!(*counter.answer(), 42);
        }
        assert_eq!(counter.calls.get(), 1);
    }

    #[test]
    fn test_instances_are_independent() {
        let a = Counter::new();
        let b = Counter::new();

        a.answer();
        a.answer();
        assert_eq!(a.calls.get(), 1);
        assert_eq!(b.calls.get(), 0);
        assert!(!b.answer.is_cached());

        b.answer();
        assert_eq!(b.calls.get(), 1);
    }

    #[test]
    fn test_ignores_changed_source_after_first_access() {
        let source = Cell::new(1);
        let memo = Memo::new("source");

        assert_eq!(*memo.get_or_init(|| source.get()), 1);
        source.set(2);
        assert_eq!(*memo.get_or_init(|| source.get()), 1);
    }

    #[test]
    fn test_falsy_values_are_cached() {
        let calls = Cell::new(0);

        let zero = Memo::new("zero");
        let empty: Memo<Vec<u8>> = Memo::new("empty");
        let none: Memo<Option<u8>> = Memo::new("none");

        for _ in 0..3 {
            zero.get_or_init(|| {
                calls.set(calls.get() + 1);
                0
            });
            empty.get_or_init(|| {
                calls.set(calls.get() + 1);
                Vec::new()
            });
            none.get_or_init(|| {
                calls.set(calls.get() + 1);
                None
            });
        }

        assert_eq!(calls.get(), 3);
        assert_eq!(zero.get(), Some(&0));
        assert_eq!(empty.get(), Some(&Vec::new()));
        assert_eq!(none.get(), Some(&None));
    }

    #[test]
    fn test_failure_is_not_cached() {
        let attempts = Cell::new(0);
        let memo = Memo::new("flaky");

        let flaky = || {
            attempts.set(attempts.get() + 1);
            if attempts.get() == 1 {
                Err("boom")
            } else {
                Ok(7)
            }
        };

        assert_eq!(memo.get_or_try_init(flaky), Err("boom"));
        assert!(!memo.is_cached());

        assert_eq!(memo.get_or_try_init(flaky), Ok(&7));
        assert_eq!(memo.get_or_try_init(flaky), Ok(&7));
        assert_eq!(attempts.get(), 2);
    }

    #[test]
    fn test_reentrant_init_keeps_first_value() {
        let memo = Memo::new("reentrant");
        let value = memo.get_or_init(|| {
            memo.get_or_init(|| 1);
            2
        });
        assert_eq!(*value, 1);
    }

    #[test]
    fn test_name() {
        let memo: Memo<()> = Memo::new("org_info");
        assert_eq!(memo.name(), "org_info");
        assert!(memo.get().is_none());
    }

    #[tokio::test]
    async fn test_async_init_runs_once() {
        let calls = Cell::new(0);
        let calls_ref = &calls;
        let memo = Memo::new("async");

        for _ in 0..5 {
            let value = memo
                .get_or_try_init_async(|| async move {
                    calls_ref.set(calls_ref.get() + 1);
                    Ok::<_, String>("payload".to_string())
                })
                .await
                .unwrap();
            assert_eq!(value, "payload");
        }

        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_async_failure_is_retried() {
        let calls = Cell::new(0);
        let calls_ref = &calls;
        let memo: Memo<u8> = Memo::new("async_flaky");

        let result = memo
            .get_or_try_init_async(|| async move {
                calls_ref.set(calls_ref.get() + 1);
                Err::<u8, _>("unavailable")
            })
            .await;
        assert_eq!(result, Err("unavailable"));

        let result = memo
            .get_or_try_init_async(|| async move {
                calls_ref.set(calls_ref.get() + 1);
                Ok::<_, &str>(3)
            })
            .await;
        assert_eq!(result, Ok(&3));
        assert_eq!(calls.get(), 2);
    }
}
