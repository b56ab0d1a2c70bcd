//! Listener settings for the POS API.

use clap::Args;

/// Where the API listens for point-of-sale clients.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind; `0.0.0.0` accepts tills on the local network
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// TCP port to bind
    #[arg(short, long, env = "SERVER_PORT", default_value_t = 8698)]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port` as handed to the TCP listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Listener {
        #[command(flatten)]
        server: ServerRuntimeConfig,
    }

    #[test]
    fn short_flags_set_bind_address() -> TestResult {
        let listener = Listener::try_parse_from(["kasir-json", "-H", "127.0.0.1", "-p", "9100"])?;

        assert_eq!(listener.server.socket_addr(), "127.0.0.1:9100");

        Ok(())
    }
}
