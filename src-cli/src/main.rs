use drumchart_domain_chart::{
    convert, import_midi_path, read_song_metadata_path, ChartError, ChartImportError,
    ConvertOptions, MidiImportError,
};
use drumchart_infra_storage_fs::FsStorage;
use drumchart_ports::storage::{SettingsDto, StorageError, StoragePort};
use std::fs;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "Usage: drumchart <input.mid> [--[no-]cymbalflip] [--[no-]strict] [--meta <song.chart>] [-o <output.chart>] [--save-settings]";

#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("midi import failed: {0}")]
    Midi(#[from] MidiImportError),
    #[error("metadata import failed: {0}")]
    Meta(#[from] ChartImportError),
    #[error("conversion failed: {0}")]
    Chart(#[from] ChartError),
    #[error("settings: {0}")]
    Storage(#[from] StorageError),
    #[error("error writing to '{path}': {message}")]
    Write { path: String, message: String },
}

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    meta: Option<PathBuf>,
    cymbal_flip: Option<bool>,
    strict: Option<bool>,
    save_settings: bool,
}

impl CliArgs {
    /// Flags given on the command line win over stored settings.
    fn effective_settings(&self, stored: &SettingsDto) -> SettingsDto {
        SettingsDto {
            cymbal_flip: self.cymbal_flip.unwrap_or(stored.cymbal_flip),
            strict: self.strict.unwrap_or(stored.strict),
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs, CliError> {
    let mut parsed = CliArgs::default();
    let mut input: Option<PathBuf> = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--cymbalflip" => parsed.cymbal_flip = Some(true),
            "--no-cymbalflip" => parsed.cymbal_flip = Some(false),
            "--strict" => parsed.strict = Some(true),
            "--no-strict" => parsed.strict = Some(false),
            "--save-settings" => parsed.save_settings = true,
            "--meta" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::Usage("--meta needs a chart file".to_string()))?;
                parsed.meta = Some(PathBuf::from(value));
            }
            "-o" | "--output" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::Usage(format!("{arg} needs an output path")))?;
                parsed.output = Some(PathBuf::from(value));
            }
            flag if flag.starts_with('-') => {
                return Err(CliError::Usage(format!("unknown option '{flag}'")));
            }
            path => {
                if input.is_some() {
                    return Err(CliError::Usage(format!("unexpected argument '{path}'")));
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    parsed.input = input.ok_or_else(|| CliError::Usage("missing input file".to_string()))?;
    Ok(parsed)
}

fn run(args: CliArgs) -> Result<(), CliError> {
    let storage = FsStorage::default();
    let stored = storage.load_settings().unwrap_or_else(|err| {
        log::warn!("ignoring unreadable settings: {err}");
        SettingsDto::default()
    });
    let settings = args.effective_settings(&stored);
    if args.save_settings {
        storage.save_settings(&settings)?;
        log::info!("saved settings to {}", storage.settings_path().display());
    }

    let stream = import_midi_path(&args.input)?;
    let meta = args
        .meta
        .as_deref()
        .map(read_song_metadata_path)
        .transpose()?;

    let conversion = convert(&stream, meta.as_ref(), &ConvertOptions::from(&settings))?;
    if !conversion.warnings.is_empty() {
        log::info!("{} cymbal/pad overlaps reported", conversion.warnings.len());
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &conversion.document).map_err(|e| CliError::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            log::info!("wrote chart to {}", path.display());
        }
        None => println!("{}", conversion.document),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("{USAGE}");
            process::exit(2);
        }
    };

    if let Err(e) = run(parsed) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
