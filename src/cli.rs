use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "tennis-gateway backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the gateway server
    Serve {
        /// Port number (optional, defaults to 8080)
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
        /// Interface to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_uses_default_port_and_host() {
        let cli = Cli::try_parse_from(["tennis_gateway", "serve"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Serve {
                port: 8080,
                host: "0.0.0.0".to_string()
            }
        );
    }

    #[test]
    fn serve_accepts_short_port_flag() {
        let cli = Cli::try_parse_from(["tennis_gateway", "serve", "-p", "9000"]).unwrap();
        match cli.command {
            Command::Serve { port, .. } => assert_eq!(port, 9000),
        }
    }
}
