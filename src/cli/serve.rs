//! `todo serve` command implementation

use anyhow::Result;
use clap::Args;
use std::net::SocketAddr;

use crate::session::Config;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on (defaults to server.listen from the config file)
    #[arg(short, long, env = "TODO_GARDEN_LISTEN")]
    pub listen: Option<SocketAddr>,
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(listen) = args.listen {
        config.server.listen = listen;
    }
    crate::server::serve(config).await
}
