use clap::Parser;
use subwalk::cli::{self, Config};

#[tokio::main]
async fn main() {
    let config = Config::parse();
    config.init_logging();
    if let Err(err) = cli::run(config).await {
        cli::die(1, &err.to_string());
    }
}
