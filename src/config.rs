//! Environment-driven defaults.

use std::sync::OnceLock;

/// Name of the variable read by [`ErrorContext::from_env`].
///
/// [`ErrorContext::from_env`]: crate::ErrorContext::from_env
pub const REPORT_ENV_VAR: &str = "ERRSLOT_REPORT";

#[derive(Debug)]
pub(crate) struct EnvOptions {
    pub(crate) report: bool,
}

impl EnvOptions {
    pub(crate) fn get() -> &'static Self {
        static ERRSLOT_FLAGS: OnceLock<EnvOptions> = OnceLock::new();

        ERRSLOT_FLAGS.get_or_init(|| {
            let report = std::env::var_os(REPORT_ENV_VAR)
                .is_some_and(|value| is_enabled(&value.to_string_lossy()));
            EnvOptions { report }
        })
    }
}

fn is_enabled(value: &str) -> bool {
    let value = value.trim();
    ["1", "true", "on", "yes"]
        .iter()
        .any(|enabled| value.eq_ignore_ascii_case(enabled))
}
