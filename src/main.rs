use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use hashdiff::areas::session::Session;
use hashdiff::artifacts::core::logging;
use hashdiff::artifacts::diff::change_filter::ChangeFilter;
use hashdiff::artifacts::hash::generator::{DEFAULT_HASH_COUNT, DEFAULT_HASH_LENGTH, HashGenerator};
use hashdiff::artifacts::hash::hash_list::HashListSource;
use hashdiff::commands::porcelain::compare::{CompareFormat, CompareOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hashdiff",
    version = "0.1.0",
    about = "Compare two lists of file content hashes",
    long_about = "This tool compares the content hashes of two versions of a set of files \
    and reports which hashes were added, which were removed and which are unchanged. \
    Hash lists are plain text files with one hash per line; use - to read one of them from stdin.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity (repeatable)")]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Report added, removed and unchanged hashes",
        long_about = "This command compares the old hash list against the new one and prints a report. \
        Unchanged hashes are hidden unless the filter selects them."
    )]
    Compare {
        #[arg(index = 1, help = "The old hash list")]
        old: PathBuf,
        #[arg(index = 2, help = "The new hash list")]
        new: PathBuf,
        #[arg(
            long,
            env = "HASHDIFF_FORMAT",
            default_value_t = CompareFormat::Long,
            help = "Output format: short, long or json"
        )]
        format: CompareFormat,
        #[arg(
            long,
            default_value = "AR",
            value_parser = parse_change_filter,
            help = "Categories to show: A (added), R (removed), U (unchanged)"
        )]
        filter: ChangeFilter,
        #[arg(long, help = "Append a count of each category")]
        stat: bool,
        #[arg(long, help = "Disable colored output")]
        no_color: bool,
    },
    #[command(
        name = "classify",
        about = "Print every hash with its change type as JSON",
        long_about = "This command flattens the comparison of two hash lists into \
        hash and change type records for consumption by other tools."
    )]
    Classify {
        #[arg(index = 1, help = "The old hash list")]
        old: PathBuf,
        #[arg(index = 2, help = "The new hash list")]
        new: PathBuf,
        #[arg(
            long,
            default_value = "ARU",
            value_parser = parse_change_filter,
            help = "Categories to emit: A (added), R (removed), U (unchanged)"
        )]
        filter: ChangeFilter,
        #[arg(long, help = "Print one compact JSON object per line")]
        lines: bool,
    },
    #[command(
        name = "generate",
        about = "Generate a random hash list",
        long_about = "This command prints random hashes made of uppercase letters, one per line. \
        It is meant for producing sample input."
    )]
    Generate {
        #[arg(short, long, default_value_t = DEFAULT_HASH_COUNT, help = "Number of hashes")]
        count: usize,
        #[arg(short, long, default_value_t = DEFAULT_HASH_LENGTH, help = "Characters per hash")]
        length: usize,
    },
}

fn parse_change_filter(value: &str) -> Result<ChangeFilter> {
    ChangeFilter::try_from(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let session = Session::new(Box::new(std::io::stdout()));

    match &cli.command {
        Commands::Compare {
            old,
            new,
            format,
            filter,
            stat,
            no_color,
        } => {
            if *no_color {
                colored::control::set_override(false);
            }

            let options = CompareOptions::new(*format, *filter, *stat);
            session.compare(
                &HashListSource::from(old.as_path()),
                &HashListSource::from(new.as_path()),
                options,
            )?
        }
        Commands::Classify {
            old,
            new,
            filter,
            lines,
        } => session.classify(
            &HashListSource::from(old.as_path()),
            &HashListSource::from(new.as_path()),
            *filter,
            *lines,
        )?,
        Commands::Generate { count, length } => {
            session.generate(HashGenerator::new(*count, *length))?
        }
    }

    Ok(())
}
