use anyhow::Context;
use badsec_http::{BadsecClient, ClientOptions, DEFAULT_HOST, DEFAULT_PORT};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Retrieve the NOC user list from a BADSEC server.
#[derive(Debug, Parser)]
#[command(name = "noclist", version)]
struct Args {
    /// Server host.
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Server port.
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Total attempts per request before giving up.
    #[arg(long, default_value_t = 3)]
    retries: u32,

    /// Print the list as a JSON array instead of one id per line.
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    // Log to stderr so stdout carries only the id list.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,badsec_http=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(Args::parse()).await {
        eprintln!("noclist error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let client = BadsecClient::new(args.host, args.port).with_options(ClientOptions {
        allowed_retries: args.retries,
        ..ClientOptions::default()
    });

    let token = client
        .auth_token()
        .await
        .context("failed to fetch auth token")?;
    let ids = client
        .user_ids(&token)
        .await
        .context("failed to fetch user list")?;

    if args.json {
        println!("{}", serde_json::to_string(&ids)?);
    } else {
        for id in &ids {
            println!("{id}");
        }
    }

    Ok(())
}
