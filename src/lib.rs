// create-order-patch - rewrites the create_order method of the order service
// so stored orders carry product names

pub mod config;
pub mod diff;
pub mod error;
pub mod patch;
pub mod utils;

pub use error::{PatchError, Result};
pub use patch::{patch, PatchOutcome, PatchReport, SourcePatcher, SUCCESS_MESSAGE};

use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging on stderr.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects `debug` over `warn`.
/// Calling this more than once is harmless.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the confirmation and diffs only
    let initialized = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(verbose)
        .without_time()
        .try_init()
        .is_ok();

    if initialized {
        debug!("Initializing create-order-patch v{}", version());
    }
}
