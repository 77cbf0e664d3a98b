use log::debug;
use simple_logger::SimpleLogger;

use crate::config::Config;

mod cli;
mod config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse(std::env::args_os())?;

    SimpleLogger::new().with_level(config.log_level).init()?;
    debug!("running {:?}", config.command);

    println!("{}", config.command.run()?);

    Ok(())
}
