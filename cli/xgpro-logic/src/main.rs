//! xgpro-logic — convert XGecu logic IC test files to and from text.

mod commands;
mod config;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use xgpro_bridge::SourceFormat;
use xgpro_lgc::LoadMode;
use xgpro_observe::ViewKind;

use config::Config;

#[derive(Parser)]
#[command(
    name = "xgpro-logic",
    version,
    about = "Convert XGecu TL866II/T48 logic IC test files (.lgc)"
)]
struct Cli {
    /// Configuration file (default: nearest xgpro.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log progress to stderr (honours RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Suppress all logging
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe an .lgc file to stdout
    Describe {
        /// Input .lgc file
        path: PathBuf,
        #[command(flatten)]
        format: DescribeFormat,
        /// Reject files whose magic, checksum, or offset table is inconsistent
        #[arg(long)]
        strict: bool,
    },
    /// Create an .lgc file from a TOML or JSON source
    Lgc {
        /// Input source file
        path: PathBuf,
        /// Output path of the created .lgc file
        output: PathBuf,
        /// Format of the input file (toml, json)
        #[arg(short = 'f', long = "format")]
        format: Option<String>,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct DescribeFormat {
    /// Output as TOML
    #[arg(long)]
    toml: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
    /// Output as XML
    #[arg(long)]
    xml: bool,
    /// Output view by name (dump, toml, json, xml)
    #[arg(long)]
    view: Option<String>,
}

impl DescribeFormat {
    fn selected(&self) -> Result<Option<ViewKind>> {
        if self.toml {
            return Ok(Some(ViewKind::Toml));
        }
        if self.json {
            return Ok(Some(ViewKind::Json));
        }
        if self.xml {
            return Ok(Some(ViewKind::Xml));
        }
        match &self.view {
            Some(name) => Ok(Some(ViewKind::parse(name)?)),
            None => Ok(None),
        }
    }
}

fn init_tracing(cli: &Cli) {
    // Off unless --verbose, so stdout views stay clean; --quiet always wins.
    let filter = if cli.verbose && !cli.quiet {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, config_path) = config::resolve(cli.config.as_deref(), &cwd)?;
    if let Some(path) = &config_path {
        debug!(path = %path.display(), "using configuration");
    }

    match cli.command {
        Commands::Describe {
            path,
            format,
            strict,
        } => {
            let view = describe_view(&format, &config)?;
            let mode = LoadMode::from_strict(strict || config.load.strict);
            commands::describe::run(&path, view, mode)
        }

        Commands::Lgc {
            path,
            output,
            format,
        } => {
            let format = source_format(format.as_deref(), &config, &path)?;
            commands::create::run(&path, &output, format)
        }
    }
}

/// Flags first, then the configured default, then the dump listing.
fn describe_view(format: &DescribeFormat, config: &Config) -> Result<ViewKind> {
    if let Some(view) = format.selected()? {
        return Ok(view);
    }
    match &config.describe.view {
        Some(name) => Ok(ViewKind::parse(name)?),
        None => Ok(ViewKind::Dump),
    }
}

/// `-f` first, then the configured default, then the file extension, then
/// TOML.
fn source_format(flag: Option<&str>, config: &Config, input: &Path) -> Result<SourceFormat> {
    if let Some(name) = flag {
        return SourceFormat::parse(name)
            .ok_or_else(|| anyhow::anyhow!("unknown input format '{name}' (expected toml or json)"));
    }
    Ok(config
        .create
        .format
        .or_else(|| SourceFormat::from_path(input))
        .unwrap_or(SourceFormat::Toml))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_flags() -> DescribeFormat {
        DescribeFormat {
            toml: false,
            json: false,
            xml: false,
            view: None,
        }
    }

    #[test]
    fn cli_parses_describe() {
        let cli = Cli::try_parse_from(["xgpro-logic", "describe", "a.lgc", "--xml", "--strict"]).unwrap();
        match cli.command {
            Commands::Describe { path, format, strict } => {
                assert_eq!(path, PathBuf::from("a.lgc"));
                assert!(strict);
                assert_eq!(format.selected().unwrap(), Some(ViewKind::Xml));
            }
            _ => panic!("expected describe"),
        }
    }

    #[test]
    fn describe_formats_are_exclusive() {
        assert!(Cli::try_parse_from(["xgpro-logic", "describe", "a.lgc", "--toml", "--json"]).is_err());
    }

    #[test]
    fn cli_parses_lgc() {
        let cli = Cli::try_parse_from(["xgpro-logic", "lgc", "in.json", "out.lgc", "-f", "json"]).unwrap();
        match cli.command {
            Commands::Lgc { path, output, format } => {
                assert_eq!(path, PathBuf::from("in.json"));
                assert_eq!(output, PathBuf::from("out.lgc"));
                assert_eq!(format.as_deref(), Some("json"));
            }
            _ => panic!("expected lgc"),
        }
    }

    #[test]
    fn view_precedence() {
        let mut config = Config::default();
        assert_eq!(describe_view(&no_flags(), &config).unwrap(), ViewKind::Dump);

        config.describe.view = Some("json".to_string());
        assert_eq!(describe_view(&no_flags(), &config).unwrap(), ViewKind::Json);

        let mut flags = no_flags();
        flags.toml = true;
        assert_eq!(describe_view(&flags, &config).unwrap(), ViewKind::Toml);

        config.describe.view = Some("yaml".to_string());
        assert!(describe_view(&no_flags(), &config).is_err());
    }

    #[test]
    fn source_format_precedence() {
        let mut config = Config::default();
        let json_input = Path::new("logic.json");
        let bare_input = Path::new("logic");

        assert_eq!(source_format(None, &config, bare_input).unwrap(), SourceFormat::Toml);
        assert_eq!(source_format(None, &config, json_input).unwrap(), SourceFormat::Json);

        config.create.format = Some(SourceFormat::Toml);
        assert_eq!(source_format(None, &config, json_input).unwrap(), SourceFormat::Toml);
        assert_eq!(
            source_format(Some("json"), &config, bare_input).unwrap(),
            SourceFormat::Json
        );
        assert!(source_format(Some("xml"), &config, bare_input).is_err());
    }
}
