//! sonotag
//!
//! # What this program is
//! A small command-line front-end for the `sonotag` core: point it at audio
//! files (or folders), and it reports which tag blocks each file carries,
//! which one it reads from, and the tags found there.
//!
//! # Output modes
//! - default: human-readable summary plus the selected block's properties
//! - `--tag-types`: just the list of blocks present per file
//! - `--machine`: the STX/ETX record protocol, one record per file
//!
//! # Tag assignments
//! `--set key=value` assignments are parsed and validated against the tag
//! schema, then reported with the block they would be written to.
//! Nothing is written to disk.
//!
//! # Failure model
//! Every failure is per file (or per assignment): it is logged, the run
//! continues, and the exit status reports that something went wrong.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use sonotag::core::policy::PolicySelector;
use sonotag::core::{record, schema, scan_paths};
use sonotag::{FileRecord, TagDefinition, TagFormatPolicy, TagImpl, parse_assignments};

#[derive(Debug, Parser)]
#[command(name = "sonotag", version, about = "Inspect tag blocks in audio files")]
struct Cli {
    /// Audio files or folders to scan
    paths: Vec<PathBuf>,

    /// Emit machine-readable records (ETX key STX value)
    #[arg(short, long)]
    machine: bool,

    /// Only list the tag blocks present in each file
    #[arg(short, long)]
    tag_types: bool,

    /// Read precedence override, e.g. `mp3=apetag,id3v2`
    #[arg(long = "read-order", value_name = "TYPE=IMPL[,IMPL...]")]
    read_order: Vec<PolicySelector>,

    /// Write target override, e.g. `mp3=apetag`
    #[arg(long = "write-type", value_name = "TYPE=IMPL")]
    write_type: Vec<PolicySelector>,

    /// Tag assignment to validate, e.g. `artist=Radiohead`
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Print the supported tag names and exit
    #[arg(long)]
    list_tags: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// `Ok(false)` = finished, but at least one file/assignment failed.
fn run(cli: &Cli) -> sonotag::Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list_tags {
        for name in schema::tag_names() {
            writeln!(out, "{name}")?;
        }
        return Ok(true);
    }

    let mut ok = true;

    let mut policy = TagFormatPolicy::default();
    for sel in &cli.read_order {
        if let Err(e) = policy.apply_read(sel) {
            error!("{e}");
            ok = false;
        }
    }
    for sel in &cli.write_type {
        if let Err(e) = policy.apply_write(sel) {
            error!("{e}");
            ok = false;
        }
    }

    let (defs, errors) = parse_assignments(&cli.set);
    for e in &errors {
        error!("{e}");
    }
    ok &= errors.is_empty();

    let (paths, scan_errors) = scan_paths(&cli.paths);
    for e in &scan_errors {
        error!("{e}");
    }
    ok &= scan_errors.is_empty();

    for path in paths {
        let name = path.to_string_lossy().into_owned();
        let file = match FileRecord::open_with(name, &policy) {
            Ok(f) => f,
            Err(e) => {
                error!("{e}");
                ok = false;
                continue;
            }
        };

        if cli.machine {
            record::write_record(&mut out, &file)?;
        } else if cli.tag_types {
            writeln!(out, "{}: {}", file.name(), file.tags_present_summary())?;
        } else {
            print_human(&mut out, &file, &defs)?;
        }
    }

    out.flush()?;
    Ok(ok)
}

fn print_human<W: Write>(out: &mut W, file: &FileRecord, defs: &[TagDefinition]) -> io::Result<()> {
    write!(out, "{}: {}", file.name(), file.file_type())?;
    if file.is_multitag() {
        write!(out, ", tags: {}", file.tags_present_summary())?;
        if !file.selected_impl().is_none() {
            write!(out, " (reading {})", file.selected_impl())?;
        }
    }
    writeln!(out)?;

    match file.read_tag_properties() {
        Ok(props) => {
            for (key, values) in &props {
                for value in values {
                    writeln!(out, "    {key}: {value}")?;
                }
            }
        }
        Err(e) => writeln!(out, "    ({e})")?,
    }

    if !defs.is_empty() {
        let target = match file.write_impl() {
            TagImpl::None => "file tags".to_string(),
            tag_impl => tag_impl.to_string(),
        };
        for def in defs {
            writeln!(out, "    set {} = {} -> {target}", def.key, def.value)?;
        }
    }

    Ok(())
}
