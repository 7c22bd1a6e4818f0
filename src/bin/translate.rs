use alfred_workflows::application::translate;
use alfred_workflows::infrastructure::config::load_config;
use alfred_workflows::infrastructure::logging;
use alfred_workflows::infrastructure::network::http::create_client;
use alfred_workflows::interfaces::alfred::{join_args, Response};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "translate")]
#[command(about = "Concurrent multi-provider translation for Alfred.")]
#[command(version)]
struct Cli {
    /// Services config file (default: config.yaml next to the executable)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Text to translate
    #[arg(num_args = 0..)]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let query = join_args(&cli.query);

    let client = create_client()?;
    let items = translate::run(&client, &config, &query).await;

    Response::new(items).print()?;
    Ok(())
}
