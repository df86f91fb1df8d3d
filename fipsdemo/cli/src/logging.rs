use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/**
    Environment variable holding a `tracing` filter directive.
*/
pub const LOG_ENV: &str = "FIPSDEMO_LOG";

/**
    Install a stderr `fmt` subscriber.

    `-v` flags take precedence over `FIPSDEMO_LOG`, which takes precedence
    over the `info` default. Stdout is left to command output.
*/
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
