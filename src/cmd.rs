use crate::args::Config;
use crate::concordance::Concordance;
use crate::error::{self, ConcordanceError, Result};
use crate::output;
use crate::scanner;
use log::{info, warn};
use std::fmt::{self, Display, Formatter};
use std::io::Write;

#[derive(Debug)]
pub enum Cmd {
    Concordance,
    ListTargets,
}

impl Cmd {
    pub fn run(&self, config: &Config) -> Result<()> {
        match self {
            Cmd::Concordance => run_concordance(config),
            Cmd::ListTargets => run_list_targets(config),
        }
    }
}

impl Display for Cmd {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Cmd::Concordance => write!(f, "concordance"),
            Cmd::ListTargets => write!(f, "list-targets"),
        }
    }
}

fn run_concordance(config: &Config) -> Result<()> {
    let target_line = config.target.ok_or(ConcordanceError::MissingTarget)?;
    info!("Scanning {} for marker line {}", config.control_file, target_line);
    let control = error::read_to_string(&config.control_file)?;
    let target = match scanner::find_target(&control, target_line)? {
        Some(target) => target,
        None => {
            // Not an error, the run just prints nothing
            info!("No marker line at line {}", target_line);
            return Ok(());
        }
    };
    if target.query.is_empty() {
        warn!("Marker line {} has an empty query, no windows will match", target.line);
    }
    let concordance = Concordance::load(&target, config.options.per_line)?;
    output::output_concordance(config, &concordance)
}

// <line>\t<path>\t<query words>, one marker per row
fn run_list_targets(config: &Config) -> Result<()> {
    let control = error::read_to_string(&config.control_file)?;
    let markers = scanner::markers(&control);
    info!("Found {} marker lines in {}", markers.len(), config.control_file);
    let mut writer = output::open_writer(&config.output)?;
    for marker in markers {
        writeln!(
            writer,
            "{}\t{}\t{}",
            marker.line,
            marker.path.unwrap_or_default(),
            marker.query.sorted_words().join(" ")
        )?;
    }
    writer.flush()?;
    Ok(())
}
