//! Timers for scheduled UI transitions.

use std::time::Duration;

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// CSS `transition` value for an opacity fade of `ms` milliseconds.
pub fn opacity_transition(ms: u64) -> String {
    let duration = Duration::from_millis(ms);
    format!("opacity {}ms ease", duration.as_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_matches_fade_duration() {
        assert_eq!(opacity_transition(200), "opacity 200ms ease");
    }
}
