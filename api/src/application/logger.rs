use tracing_subscriber::{EnvFilter, fmt};

use crate::args::LogArgs;

/// Install the global subscriber. `RUST_LOG` wins over `--log-filter` when set.
pub fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_filter));

    let builder = fmt().with_env_filter(filter).with_target(true);

    let result = if args.log_json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {e}");
    }
}
