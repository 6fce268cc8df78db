use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod serve;
pub mod topics;

#[derive(Subcommand)]
enum Command {
    /// Run the API server for the chat widget
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Start a tutoring session in the terminal
    Chat {},
    /// List the topics offered by the topic picker
    Topics {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, port).await?;
        }
        Some(Command::Chat {}) => {
            chat::run().await?;
        }
        Some(Command::Topics {}) => {
            topics::run();
        }
        None => {}
    }

    Ok(())
}
