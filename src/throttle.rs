use std::future::Future;
use std::time::Duration;

/// Minimum spacing between consecutive API requests. The Stack Exchange API
/// enforces an unpublished rate ceiling; 66 ms keeps a burst under ~15/sec.
pub const DEFAULT_SPACING: Duration = Duration::from_millis(66);

/// Run `tasks` strictly one at a time, in order, sleeping `spacing` between
/// consecutive tasks (no sleep after the last).
///
/// Each task is a closure producing the request future, so a request is not
/// even constructed before its predecessor has resolved. Results come back in
/// task order. A failing task aborts the remainder of the sequence.
pub async fn run_spaced<T, E, F, Fut>(
    tasks: impl IntoIterator<Item = F>,
    spacing: Duration,
) -> Result<Vec<T>, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut tasks = tasks.into_iter().peekable();
    let mut results = Vec::new();
    while let Some(task) = tasks.next() {
        results.push(task().await?);
        if tasks.peek().is_some() {
            tokio::time::sleep(spacing).await;
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tokio::time::{Instant, sleep};

    #[tokio::test(start_paused = true)]
    async fn spaces_consecutive_tasks() {
        let start = Instant::now();
        let results = run_spaced(
            (0..3u32).map(|i| move || async move { Ok::<_, ()>(i) }),
            Duration::from_millis(66),
        )
        .await
        .unwrap();

        assert_eq!(results, vec![0, 1, 2]);
        assert_eq!(start.elapsed(), Duration::from_millis(132));
    }

    #[tokio::test(start_paused = true)]
    async fn single_task_incurs_no_delay() {
        let start = Instant::now();
        let results = run_spaced([|| async { Ok::<_, ()>(7u32) }], Duration::from_millis(66))
            .await
            .unwrap();

        assert_eq!(results, vec![7]);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test]
    async fn no_tasks_returns_empty_list() {
        let tasks: [fn() -> std::future::Ready<Result<u32, ()>>; 0] = [];
        let results = run_spaced(tasks, DEFAULT_SPACING).await.unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn tasks_never_overlap_despite_varying_latency() {
        let in_flight = Arc::new(AtomicUsize::new(0));
        let tasks = (0..4u64).map(|i| {
            let in_flight = Arc::clone(&in_flight);
            move || async move {
                assert_eq!(
                    in_flight.fetch_add(1, Ordering::SeqCst),
                    0,
                    "task {i} started while another was running"
                );
                // Later tasks finish faster; order must still hold.
                sleep(Duration::from_millis(40 - 10 * i)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
                Ok::<_, ()>(i)
            }
        });

        let results = run_spaced(tasks, Duration::from_millis(5)).await.unwrap();
        assert_eq!(results, vec![0, 1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn failure_aborts_remaining_tasks() {
        let started = Arc::new(Mutex::new(Vec::new()));
        let tasks = (0..3usize).map(|i| {
            let started = Arc::clone(&started);
            move || async move {
                started.lock().unwrap().push(i);
                if i == 1 { Err("boom") } else { Ok(i) }
            }
        });

        let err = run_spaced(tasks, Duration::from_millis(66)).await.unwrap_err();
        assert_eq!(err, "boom");
        assert_eq!(*started.lock().unwrap(), vec![0, 1]);
    }
}
