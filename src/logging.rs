use log::LevelFilter;

// Logs go to stderr so stdout only carries the concordance.
// RUST_LOG is honoured; --verbose forces debug.
pub fn init(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(LevelFilter::Warn);
    builder.parse_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}
