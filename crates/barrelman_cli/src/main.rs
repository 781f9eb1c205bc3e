//! `barrelman` command line entry point.
//!
//! # Responsibility
//! - Run a family's complex reader against a SQLite file.
//! - Emit either the binary result-set stream or JSON lines.

use barrelman_core::db::schema_version;
use barrelman_core::families::{
    AisMessageFamily, BooleanTimeseriesFamily, CameraCommandFamily, DeviceFamily, PropertyFamily,
    TimeseriesFamily,
};
use barrelman_core::{
    default_log_level, init_logging, open_db, BinaryWriter, ComplexFamily, FamilyName, Guid,
    ObjectStore,
};
use clap::{Args, Parser, Subcommand};
use log::info;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type CliResult<T> = Result<T, Box<dyn Error>>;

#[derive(Debug, Parser)]
#[command(name = "barrelman")]
#[command(about = "Read table-per-hierarchy entity families through complex data readers")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    logging: LoggingArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct LoggingArgs {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "BARRELMAN_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logging is off when unset
    #[arg(long, global = true, value_name = "DIR", env = "BARRELMAN_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the supported families with their base views and schema versions
    Families,
    /// Write a family's result set as `(true, record)* false`
    Dump {
        #[arg(long, value_name = "FILE")]
        db: PathBuf,
        #[arg(long, value_parser = parse_family)]
        family: FamilyName,
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
    /// Print a family's data objects as JSON lines
    Show {
        #[arg(long, value_name = "FILE")]
        db: PathBuf,
        #[arg(long, value_parser = parse_family)]
        family: FamilyName,
        /// Only print the object with this id
        #[arg(long)]
        id: Option<Guid>,
    },
}

fn parse_family(raw: &str) -> Result<FamilyName, String> {
    FamilyName::parse(raw).ok_or_else(|| {
        let known = FamilyName::ALL
            .iter()
            .map(|family| family.name())
            .collect::<Vec<_>>()
            .join(", ");
        format!("unknown family `{raw}`; expected one of {known}")
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    if let Some(log_dir) = &cli.logging.log_dir {
        let level = cli
            .logging
            .log_level
            .as_deref()
            .unwrap_or_else(|| default_log_level());
        init_logging(level, log_dir)?;
    }

    match cli.command {
        Command::Families => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for family in FamilyName::ALL {
                let version = schema_version(family).unwrap_or_default();
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    family.name(),
                    family.base_view_name(),
                    version
                )?;
            }
            Ok(())
        }
        Command::Dump { db, family, out } => {
            let count = dump(&db, family, &out)?;
            info!(
                "event=cli_dump module=cli status=ok family={} records={}",
                family, count
            );
            println!("wrote {count} {family} records to {}", out.display());
            Ok(())
        }
        Command::Show { db, family, id } => show(&db, family, id),
    }
}

fn dump(db: &Path, family: FamilyName, out: &Path) -> CliResult<usize> {
    let conn = open_db(db)?;
    let store = ObjectStore::new(&conn);
    let mut writer = BinaryWriter::new(BufWriter::new(File::create(out)?));
    let count = match family {
        FamilyName::BooleanTimeseries => {
            store.write_all::<BooleanTimeseriesFamily, _>(&mut writer)?
        }
        FamilyName::CameraCommand => store.write_all::<CameraCommandFamily, _>(&mut writer)?,
        FamilyName::Device => store.write_all::<DeviceFamily, _>(&mut writer)?,
        FamilyName::Property => store.write_all::<PropertyFamily, _>(&mut writer)?,
        FamilyName::AisMessage => store.write_all::<AisMessageFamily, _>(&mut writer)?,
        FamilyName::Timeseries => store.write_all::<TimeseriesFamily, _>(&mut writer)?,
    };
    writer.flush()?;
    Ok(count)
}

fn show(db: &Path, family: FamilyName, id: Option<Guid>) -> CliResult<()> {
    let conn = open_db(db)?;
    let store = ObjectStore::new(&conn);
    match family {
        FamilyName::BooleanTimeseries => print_objects::<BooleanTimeseriesFamily>(&store, id),
        FamilyName::CameraCommand => print_objects::<CameraCommandFamily>(&store, id),
        FamilyName::Device => print_objects::<DeviceFamily>(&store, id),
        FamilyName::Property => print_objects::<PropertyFamily>(&store, id),
        FamilyName::AisMessage => print_objects::<AisMessageFamily>(&store, id),
        FamilyName::Timeseries => print_objects::<TimeseriesFamily>(&store, id),
    }
}

fn print_objects<F: ComplexFamily>(store: &ObjectStore<'_>, id: Option<Guid>) -> CliResult<()> {
    let objects = match id {
        Some(id) => store.get::<F>(id)?.into_iter().collect(),
        None => store.list::<F>()?,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for object in &objects {
        serde_json::to_writer(&mut out, object)?;
        writeln!(out)?;
    }
    Ok(())
}
