use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use logsift::modsec::DEFAULT_MODSEC_TAGS;
use logsift::{
    load_lines, ErrorLogPipeline, ModSecParser, OutputFormat, PipelineConfig, ProcessingStats,
    TagSelector,
};

#[derive(Parser)]
#[command(name = "logsift")]
#[command(about = "Summarize PHP error logs and ModSecurity alerts")]
#[command(version)]
struct Cli {
    /// Debug mode - log processing steps and final statistics to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse www-error.log data
    #[command(name = "wwwerror")]
    WwwError(WwwErrorArgs),
    /// Parse ModSecurity alerts from an Apache error log
    #[command(name = "modsec")]
    ModSec(ModSecArgs),
}

#[derive(Args)]
struct WwwErrorArgs {
    /// The www-error.log to parse (default: stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Comma separated list of log pieces to keep: date, error, error-level,
    /// error-message, error-value, file, file-name, file-line. Wins over
    /// --exclude-tags when a piece is in both.
    #[arg(long)]
    include_tags: Option<String>,

    /// Comma separated list of log pieces to drop
    #[arg(long)]
    exclude_tags: Option<String>,

    /// Sort the records alphabetically by their remaining fields
    #[arg(short = 's', long)]
    sort: bool,

    /// Collapse adjacent duplicate records, like uniq
    #[arg(short = 'u', long)]
    uniq: bool,

    /// Prefix each record with its count and order by it, like uniq -c (needs --uniq)
    #[arg(short = 'c', long)]
    count_uniq: bool,

    /// Replace the spaces in the error message
    #[arg(short = 'r', long)]
    replace_spaces: bool,

    /// Character used by --replace-spaces
    #[arg(long, value_name = "CHAR", default_value = "+")]
    replace_spaces_character: char,

    /// Output format
    #[arg(short = 'F', long = "output-format", value_enum, default_value = "text")]
    output_format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,
}

#[derive(Args)]
struct ModSecArgs {
    /// The Apache error log to parse (default: stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Comma separated list of ModSecurity tags to print
    #[arg(long, default_value = DEFAULT_MODSEC_TAGS)]
    tags: String,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match cli.command {
        Command::WwwError(args) => run_wwwerror(args, cli.debug),
        Command::ModSec(args) => run_modsec(args),
    };

    if let Err(e) = result {
        eprintln!("logsift: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_wwwerror(args: WwwErrorArgs, debug: bool) -> anyhow::Result<()> {
    let (selector, unknown_tags) = TagSelector::from_lists(
        args.include_tags.as_deref().unwrap_or_default(),
        args.exclude_tags.as_deref().unwrap_or_default(),
    );
    for tag in &unknown_tags {
        eprintln!("logsift: warning: unknown tag '{}' ignored", tag);
    }

    let config = PipelineConfig {
        selector,
        sort: args.sort,
        uniq: args.uniq,
        count_uniq: args.count_uniq,
        replace_spaces: args.replace_spaces.then_some(args.replace_spaces_character),
        output_format: args.output_format,
    };
    let pipeline = ErrorLogPipeline::new(config);
    for warning in pipeline.warnings() {
        eprintln!("logsift: warning: {}", warning);
    }

    let lines = load_lines(args.file.as_deref())?;
    info!(lines = lines.len(), "input loaded");

    let report = pipeline.process(&lines);
    write_lines(&report.lines, args.output_file.as_ref())?;

    if debug {
        print_stats(&report.stats);
    }

    Ok(())
}

fn run_modsec(args: ModSecArgs) -> anyhow::Result<()> {
    let parser = ModSecParser::new(&args.tags)?;
    let lines = load_lines(args.file.as_deref())?;
    let output = parser.process(&lines);
    write_lines(&output, args.output_file.as_ref())
}

fn write_lines(lines: &[String], output_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let mut output: Box<dyn Write> = if let Some(output_path) = output_file {
        let file = File::create(output_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create output file '{}': {}",
                output_path.display(),
                e
            )
        })?;
        Box::new(io::BufWriter::new(file))
    } else {
        Box::new(io::BufWriter::new(io::stdout()))
    };

    for line in lines {
        if let Err(e) = writeln!(output, "{}", line) {
            if e.kind() == io::ErrorKind::BrokenPipe {
                debug!("output closed early");
                return Ok(());
            }
            return Err(e.into());
        }
    }

    match output.flush() {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e.into()),
        _ => Ok(()),
    }
}

fn print_stats(stats: &ProcessingStats) {
    eprintln!("Final statistics:");
    eprintln!("  Lines processed: {}", stats.lines_processed);
    eprintln!("  Records output: {}", stats.records_output);
    eprintln!("  Duplicates collapsed: {}", stats.duplicates_collapsed);
    eprintln!("  Processing time: {:?}", stats.processing_time);
}
