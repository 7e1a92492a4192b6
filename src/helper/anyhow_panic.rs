use log::error;

/// Unwraps a result like normal except it calls [`anyhow_panic`] to log the error chain first.
/// Used where an error means host and shader state can no longer be trusted.
#[inline]
#[track_caller]
pub fn anyhow_unwrap<T, E>(result: Result<T, E>, failed_to: &str) -> T
where
    E: Into<anyhow::Error>,
{
    match result {
        Ok(x) => x,
        Err(e) => anyhow_panic(&e.into(), failed_to),
    }
}

/// Logs the error and source(s) then panics
#[inline]
#[track_caller]
pub fn anyhow_panic(error: &anyhow::Error, failed_to: &str) -> ! {
    // log error
    log_anyhow_error_and_sources(error, failed_to);
    // panic
    panic!("failed to {} while: {error:?}", failed_to);
}

pub fn log_anyhow_error_and_sources(error: &anyhow::Error, failed_to: &str) {
    error!("failed to {} while: {}", failed_to, error);
    if let Some(source) = error.source() {
        error!("error message stack:");
        log_error_sources(source, 0);
    }
}

#[inline]
#[track_caller]
pub fn log_error_sources(e: &dyn std::error::Error, depth: usize) {
    error!("\t{}: {}", depth, e);
    if let Some(source) = e.source() {
        log_error_sources(source, depth + 1);
    }
}

// ~~ Tests ~~

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::more_errors::SceneError;

    #[test]
    fn unwrap_passes_ok_through() {
        let value = anyhow_unwrap(Ok::<usize, SceneError>(7), "read value");
        assert_eq!(value, 7);
    }

    #[test]
    #[should_panic(expected = "failed to add primitive")]
    fn unwrap_panics_on_scene_error() {
        let result: Result<usize, SceneError> = Err(SceneError::CapacityExceeded { capacity: 32 });
        anyhow_unwrap(result, "add primitive");
    }
}
