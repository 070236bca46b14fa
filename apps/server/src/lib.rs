/// Listen address settings, parsed from flags or the environment with [`clap`].
///
/// [`clap`]: https://docs.rs/clap
pub mod config;

/// The HTTP server: `GET /` greets, `GET /health` reports liveness
///
/// Each route lives in its own module under `routes/`.
pub mod http;
