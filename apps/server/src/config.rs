use std::net::{SocketAddr, ToSocketAddrs};

use anyhow::Context;

/// The configuration parameters for the application
///
/// These can either loaded from command-line, or pulled from environment variables.
///
/// Environment variables are preferred.
///
/// For development convenience, these can also be read from a `.env` file in the working
/// directory where the application is started.
///
/// See `.env.example` in the repository root for details
#[derive(clap::Parser, Debug, Clone)]
#[clap(name = "greeter", version, about)]
pub struct Config {
    /// Host name or IP address to listen on
    #[clap(long, env, default_value = "127.0.0.1")]
    pub address: String,

    /// TCP port to listen on, `0` picks a free one
    #[clap(long, env, default_value_t = 8000)]
    pub port: u16,
}

impl Config {
    /// Resolves `address:port`, taking the first address the lookup yields.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        (self.address.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("failed to resolve address {:?}", self.address))?
            .next()
            .with_context(|| format!("address {:?} resolved to nothing", self.address))
    }
}
