/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    /// Default filter directive when `RUST_LOG` is unset, e.g. `info` or `debug`.
    pub level: String,
    pub json_format: bool,
}
