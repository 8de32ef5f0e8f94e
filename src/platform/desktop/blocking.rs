use std::time::Instant;

/// Runs a blocking store or file operation on the UI thread and records how
/// long it took. Neither cancellation nor timeouts apply.
pub fn run_blocking<F, T>(label: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let started = Instant::now();
    let result = f();
    tracing::debug!(
        operation = label,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "blocking call finished"
    );
    result
}
