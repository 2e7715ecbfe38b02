use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Runs `action` under a spinner on stderr. On success the spinner is left
/// with the line produced by `summary`; on failure it is cleared so the error
/// message stands alone.
pub fn with_spinner<T, F, S>(message: &str, summary: S, action: F) -> Result<T>
where
    F: FnOnce(&ProgressBar) -> Result<T>,
    S: FnOnce(&T) -> String,
{
    let spinner = ProgressBar::new_spinner();
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("/|\\- "),
    );
    spinner.set_message(message.to_string());

    let result = action(&spinner);
    match &result {
        Ok(value) => spinner.finish_with_message(summary(value)),
        Err(_) => spinner.finish_and_clear(),
    }
    result
}
