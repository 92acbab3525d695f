use std::io;

use anyhow::Context;
use tokio::runtime::Builder;

use slacktell::cli::{usage, Cli};
use slacktell::config::{resolve, Defaults};
use slacktell::{init_logging, SlackWebhook};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_normalized();
    init_logging(cli.verbose);

    let request = match resolve(&cli, Defaults::from_env(), &mut io::stdin()) {
        Ok(req) => req,
        Err(err) if err.is_usage() => {
            eprintln!("{err}\n");
            eprint!("{}", usage());
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let rt = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Starting async runtime")?;
    let hook = SlackWebhook::new(&request.endpoint);
    rt.block_on(hook.push(&request))?;
    Ok(())
}
