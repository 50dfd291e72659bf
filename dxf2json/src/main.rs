use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dxf_reader::{Drawing, DuplicatePolicy, ParseOptions};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Converts a text DXF or SLI mesh file to JSON.
#[derive(Parser)]
#[command(
    name = "dxf2json",
    version,
    about = "Converts a text DXF or SLI mesh file to JSON"
)]
struct Cli {
    /// Path to the .dxf or .sli file
    input: PathBuf,

    /// Where to write the JSON; defaults to the input path with `.json` appended
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Keep the first occurrence of a repeated group code instead of the last
    #[arg(long)]
    first_wins: bool,

    /// Do not report entity kinds that are kept only as raw pairs
    #[arg(long)]
    no_unsupported_warnings: bool,

    /// Log more detail to stderr; repeat for more
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            duplicate_scalars: if self.first_wins {
                DuplicatePolicy::FirstWins
            } else {
                DuplicatePolicy::LastWins
            },
            report_unsupported_entities: !self.no_unsupported_warnings,
        }
    }
    fn is_sli(&self) -> bool {
        self.input
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("sli"))
    }
    fn output_path(&self) -> PathBuf {
        match self.output {
            Some(ref output) => output.clone(),
            None => {
                let mut json_path = self.input.clone().into_os_string();
                json_path.push(".json");
                PathBuf::from(json_path)
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;

    let drawing = if cli.is_sli() {
        let text = std::fs::read_to_string(&cli.input)
            .with_context(|| format!("unable to read {}", cli.input.display()))?;
        Drawing::parse_sli_with_options(&text, &cli.parse_options())
    } else {
        Drawing::load_file_with_options(&cli.input, &cli.parse_options())
    }
    .with_context(|| format!("unable to convert {}", cli.input.display()))?;
    for warning in &drawing.warnings {
        warn!("{}", warning);
    }

    let json = drawing.to_json_string(cli.pretty)?;
    let json_path = cli.output_path();
    let file = File::create(&json_path)
        .with_context(|| format!("unable to create {}", json_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes())?;
    writer.flush()?;

    info!(
        input = %cli.input.display(),
        output = %json_path.display(),
        sections = drawing.sections.len(),
        "converted drawing"
    );
    Ok(())
}
