use clap::Parser;
use crate::cmd::Cmd;
use crate::error::{ConcordanceError, Result};
use crate::output::Output;
use std::fmt::{self, Display, Formatter};

#[derive(Parser, Debug)]
#[command(name = "concordance-tool", about = "Print keyword-in-context windows for queries in a control file")]
struct Args {
    /// Control file: query lines interleaved with numbered marker lines ("12. path/to/corpus.txt")
    control_file: String,
    /// Line number (1-based, blank lines included) of the marker line to process.
    /// Required with 'concordance'
    target: Option<usize>,
    /// Command to run: Available commands:
    /// 'concordance', 'list-targets' (Default: 'concordance')
    #[clap(short = 'c', long = "command")]
    command: Option<String>,
    /// Output. File to write output to. Defaults to stdout.
    #[clap(short = 'o', long = "output")]
    output: Option<String>,
    /// Output format. Available formats: 'text', 'json', 'csv' ('list-targets' only supports 'text')
    /// [Defaults to 'text']
    #[clap(short = 'F', long = "output-format")]
    output_format: Option<String>,
    /// Print verbose (debug) logging to stderr
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
    /// Options. Extra options for the concordance command:
    /// 'no-color' (no dimming escape codes), 'per-line' (one preview per corpus line)
    #[clap(short = 'O', long = "option")]
    options: Vec<String>,
}

#[derive(Debug)]
pub struct Config {
    pub cmd: Cmd,
    pub control_file: String,
    pub target: Option<usize>,
    pub output: Output,
    pub output_format: OutputFormat,
    pub verbose: bool,
    pub options: ConfigOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOptions {
    pub color: bool,
    pub per_line: bool,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        ConfigOptions {
            color: true,
            per_line: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    CSV,
}

impl TryFrom<&str> for OutputFormat {
    type Error = ConcordanceError;

    fn try_from(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::CSV),
            _ => Err(ConcordanceError::UnknownOutputFormat(s.to_string())),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::CSV => write!(f, "csv"),
        }
    }
}

impl Config {
    pub fn new() -> Result<Config> {
        Config::from_args(Args::parse())
    }

    fn from_args(args: Args) -> Result<Config> {
        let options = parse_options(&args)?;
        parse_command(args, options)
    }
}

fn parse_options(args: &Args) -> Result<ConfigOptions> {
    let mut options = ConfigOptions::default();
    for option in &args.options {
        match option.as_str() {
            "no-color" => options.color = false,
            "per-line" => options.per_line = true,
            _ => return Err(ConcordanceError::UnknownOption(option.clone())),
        }
    }
    Ok(options)
}

fn parse_command(args: Args, options: ConfigOptions) -> Result<Config> {
    let command = args.command.clone().unwrap_or("concordance".to_string());
    let cmd = match command.as_str() {
        "concordance" => Cmd::Concordance,
        "list-targets" => Cmd::ListTargets,
        _ => return Err(ConcordanceError::UnknownCommand(command)),
    };
    // concordance needs a target, list-targets ignores it
    if let Cmd::Concordance = cmd {
        if args.target.is_none() {
            return Err(ConcordanceError::MissingTarget);
        }
    }
    let output = match args.output {
        Some(filename) => Output::File(filename),
        None => Output::Stdout,
    };
    let output_format = match &args.output_format {
        Some(format) => OutputFormat::try_from(format.as_str())?,
        None => OutputFormat::Text,
    };
    // list-targets always writes tab separated text rows
    if let (Cmd::ListTargets, OutputFormat::Json | OutputFormat::CSV) = (&cmd, output_format) {
        return Err(ConcordanceError::UnsupportedOutputFormat {
            command: cmd.to_string(),
            format: output_format.to_string(),
        });
    }
    Ok(Config {
        cmd,
        control_file: args.control_file,
        target: args.target,
        output,
        output_format,
        verbose: args.verbose,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(argv: &[&str]) -> Result<Config> {
        let args = Args::try_parse_from(argv).unwrap();
        Config::from_args(args)
    }

    #[test]
    fn positional_arguments() {
        let config = config(&["concordance-tool", "control.txt", "12"]).unwrap();
        assert_eq!(config.control_file, "control.txt");
        assert_eq!(config.target, Some(12));
        assert!(matches!(config.cmd, Cmd::Concordance));
        assert_eq!(config.output, Output::Stdout);
        assert_eq!(config.output_format, OutputFormat::Text);
        assert_eq!(config.options, ConfigOptions::default());
    }

    #[test]
    fn non_integer_target_is_rejected() {
        assert!(Args::try_parse_from(["concordance-tool", "control.txt", "twelve"]).is_err());
    }

    #[test]
    fn concordance_requires_target() {
        assert!(matches!(config(&["concordance-tool", "control.txt"]), Err(ConcordanceError::MissingTarget)));
    }

    #[test]
    fn list_targets_needs_no_target() {
        let config = config(&["concordance-tool", "-c", "list-targets", "control.txt"]).unwrap();
        assert!(matches!(config.cmd, Cmd::ListTargets));
        assert_eq!(config.target, None);
    }

    #[test]
    fn list_targets_only_writes_text() {
        let result = config(&["concordance-tool", "-c", "list-targets", "-F", "json", "control.txt"]);
        match result {
            Err(ConcordanceError::UnsupportedOutputFormat { command, format }) => {
                assert_eq!(command, "list-targets");
                assert_eq!(format, "json");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            config(&["concordance-tool", "-c", "list-targets", "-F", "csv", "control.txt"]),
            Err(ConcordanceError::UnsupportedOutputFormat { .. })
        ));
        let config = config(&["concordance-tool", "-c", "list-targets", "-F", "text", "control.txt"]).unwrap();
        assert_eq!(config.output_format, OutputFormat::Text);
    }

    #[test]
    fn options_and_formats() {
        let config = config(&[
            "concordance-tool", "-O", "no-color", "-O", "per-line", "-F", "csv", "-o", "out/kwic.tsv", "control.txt", "3",
        ]).unwrap();
        assert!(!config.options.color);
        assert!(config.options.per_line);
        assert_eq!(config.output_format, OutputFormat::CSV);
        assert_eq!(config.output, Output::File("out/kwic.tsv".to_string()));
    }

    #[test]
    fn unknown_values_are_errors() {
        assert!(matches!(config(&["concordance-tool", "-O", "sparkles", "c.txt", "1"]), Err(ConcordanceError::UnknownOption(_))));
        assert!(matches!(config(&["concordance-tool", "-F", "xlsx", "c.txt", "1"]), Err(ConcordanceError::UnknownOutputFormat(_))));
        assert!(matches!(config(&["concordance-tool", "-c", "match", "c.txt", "1"]), Err(ConcordanceError::UnknownCommand(_))));
    }
}
