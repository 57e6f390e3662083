use clap::Parser;
use cmdrelay::banner;
use cmdrelay::config::ClientConfig;
use cmdrelay::dispatcher::CommandDispatcher;
use cmdrelay::origin::Origin;
use std::io::{self, BufRead, Write};

/// Command-line arguments for the client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the execution service (overrides CMDRELAY_ORIGIN)
    #[arg(short, long)]
    origin: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Print the startup banner
    banner::print_banner();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load .env if present; the origin can also come from the flag below
    if let Err(e) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {}", e);
    }

    let args = Args::parse();
    let origin = match args.origin {
        Some(origin) => Origin::new(origin),
        None => {
            ClientConfig::from_env()
                .expect("Failed to load client configuration from environment")
                .origin
        }
    };

    println!("🔗 Execution service at {}", origin);
    println!("Type a command to run it, :cwd for the working directory, :clear to clear, :quit to exit.");

    let dispatcher = CommandDispatcher::new(origin);
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        match line.trim() {
            ":quit" | ":q" => break,
            ":clear" => {
                dispatcher.clear();
                println!("(cleared)");
            }
            ":cwd" => {
                dispatcher.query_current_dir().await;
                println!("{}", dispatcher.current_dir_output().snapshot());
            }
            command => {
                dispatcher.execute(command).await;
                println!("{}", dispatcher.output().snapshot());
            }
        }
    }

    Ok(())
}
