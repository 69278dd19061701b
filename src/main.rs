mod args;
mod cmd;
mod concordance;
mod error;
mod highlight;
mod logging;
mod output;
mod query;
mod scanner;
mod tokenizer;

fn main() -> anyhow::Result<()> {
    let config = args::Config::new()?;
    logging::init(config.verbose);
    log::debug!("Running {} with output format {}", config.cmd, config.output_format);
    config.cmd.run(&config)?;
    Ok(())
}
