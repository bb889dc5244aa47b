use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use kotoba::dict::{Dictionary, Entry};
use kotoba::kana::RomajiStyle;
use kotoba::output::{OutputMode, PresentOptions, write_entries};
use kotoba::query::{Extent, Field, SearchRequest, generate, guess};
use kotoba::utils::{AppConfig, BackgroundSetting, OutputModeSetting, Toggle};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;
use termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

/// Exit status when no condition matched
const EXIT_NOT_FOUND: u8 = 1;
/// Exit status for usage errors and unavailable dictionaries
const EXIT_FAILURE: u8 = 2;

#[derive(Parser)]
#[command(name = "kotoba")]
#[command(about = "Japanese dictionary lookup that guesses how to match your query")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Text to look for
    #[arg(value_name = "QUERY")]
    query: Vec<String>,

    /// Match on kanji
    #[arg(short = 'k', long, group = "field")]
    kanji: bool,

    /// Match on reading (kana or rōmaji)
    #[arg(short = 'r', long, group = "field")]
    reading: bool,

    /// Match on glosses (English meaning)
    #[arg(short = 'g', long, visible_alias = "meaning", group = "field")]
    gloss: bool,

    /// How much of the field the query must match
    #[arg(short = 'e', long, value_enum, default_value = "auto")]
    extent: ExtentArg,

    /// Same as --extent=whole
    #[arg(short = 'w', long, group = "extent_flag")]
    whole: bool,

    /// Same as --extent=beginning
    #[arg(short = 'b', long, group = "extent_flag")]
    beginning: bool,

    /// Same as --extent=word
    #[arg(long, group = "extent_flag")]
    word: bool,

    /// Same as --extent=partial
    #[arg(short = 'p', long, group = "extent_flag")]
    partial: bool,

    /// Regular expression search
    #[arg(short = 'x', long)]
    regexp: bool,

    /// Distinguish uppercase from lowercase (default: only if the query has uppercase)
    #[arg(long, visible_alias = "sensitive")]
    case_sensitive: bool,

    /// Restrict to frequent words (EDICT "(P)")
    #[arg(short = 'f', long, short_alias = 'P')]
    frequent: bool,

    /// Output layout
    #[arg(long, value_enum)]
    output_mode: Option<OutputModeArg>,

    /// Same as --output-mode=tab
    #[arg(short = 't', long, visible_alias = "tsv", group = "mode_flag")]
    tab: bool,

    /// Same as --output-mode=human
    #[arg(long, group = "mode_flag")]
    human: bool,

    /// Colorize output
    #[arg(long, value_enum)]
    color: Option<ToggleArg>,

    /// Same as --color=yes
    #[arg(short = 'c')]
    force_color: bool,

    /// Colour scheme for dark or light terminals (auto reads $BACKGROUND)
    #[arg(long, visible_alias = "bg", value_enum)]
    background: Option<BackgroundArg>,

    /// Show readings in Hepburn rōmaji
    #[arg(long, visible_alias = "oh", group = "romaji")]
    out_hepburn: bool,

    /// Show readings in Kunrei rōmaji
    #[arg(long, visible_alias = "ok", group = "romaji")]
    out_kunrei: bool,

    /// Dictionary file to use
    #[arg(long, value_name = "PATH")]
    dict: Option<PathBuf>,

    /// Print the generated search conditions (JSON) to stderr
    #[arg(long)]
    explain: bool,

    /// Log each search condition as it is tried
    #[arg(short, long)]
    verbose: bool,

    /// Show version
    #[arg(long)]
    version: bool,

    /// List all abbreviations
    #[arg(long)]
    list_abbrevs: bool,

    /// Print the meaning of an abbreviation
    #[arg(short = 'a', long, value_name = "ABBREV")]
    abbrev: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ExtentArg {
    Whole,
    Beginning,
    Word,
    Partial,
    Auto,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputModeArg {
    Human,
    Tab,
    Auto,
}

#[derive(Clone, Copy, ValueEnum)]
enum ToggleArg {
    Yes,
    No,
    Auto,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackgroundArg {
    Dark,
    Light,
    Auto,
}

impl Cli {
    fn field(&self) -> Option<Field> {
        if self.kanji {
            Some(Field::Kanji)
        } else if self.reading {
            Some(Field::Reading)
        } else if self.gloss {
            Some(Field::Gloss)
        } else {
            None
        }
    }

    fn extent(&self) -> Option<Extent> {
        if self.whole {
            return Some(Extent::Whole);
        }
        if self.beginning {
            return Some(Extent::Beginning);
        }
        if self.word {
            return Some(Extent::Word);
        }
        if self.partial {
            return Some(Extent::Partial);
        }
        match self.extent {
            ExtentArg::Whole => Some(Extent::Whole),
            ExtentArg::Beginning => Some(Extent::Beginning),
            ExtentArg::Word => Some(Extent::Word),
            ExtentArg::Partial => Some(Extent::Partial),
            ExtentArg::Auto => None,
        }
    }

    fn output_mode(&self, config: &AppConfig) -> OutputMode {
        let setting = if self.human {
            OutputModeSetting::Human
        } else if self.tab {
            OutputModeSetting::Tab
        } else {
            match self.output_mode {
                Some(OutputModeArg::Human) => OutputModeSetting::Human,
                Some(OutputModeArg::Tab) => OutputModeSetting::Tab,
                Some(OutputModeArg::Auto) => OutputModeSetting::Auto,
                None => config.output_mode,
            }
        };

        match setting {
            OutputModeSetting::Human => OutputMode::Human,
            OutputModeSetting::Tab => OutputMode::Tab,
            OutputModeSetting::Auto if io::stdout().is_terminal() => OutputMode::Human,
            OutputModeSetting::Auto => OutputMode::Tab,
        }
    }

    fn use_color(&self, config: &AppConfig) -> bool {
        let setting = if self.force_color {
            Toggle::Yes
        } else {
            match self.color {
                Some(ToggleArg::Yes) => Toggle::Yes,
                Some(ToggleArg::No) => Toggle::No,
                Some(ToggleArg::Auto) => Toggle::Auto,
                None => config.color,
            }
        };

        match setting {
            Toggle::Yes => true,
            Toggle::No => false,
            Toggle::Auto => io::stdout().is_terminal(),
        }
    }

    fn background(&self, config: &AppConfig) -> BackgroundSetting {
        match self.background {
            Some(BackgroundArg::Dark) => BackgroundSetting::Dark,
            Some(BackgroundArg::Light) => BackgroundSetting::Light,
            Some(BackgroundArg::Auto) => BackgroundSetting::Auto,
            None => config.background,
        }
    }

    fn romaji(&self) -> Option<RomajiStyle> {
        if self.out_hepburn {
            Some(RomajiStyle::Hepburn)
        } else if self.out_kunrei {
            Some(RomajiStyle::Kunrei)
        } else {
            None
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("kotoba: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("KOTOBA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load()?;
    let dict_path = match &cli.dict {
        Some(path) => path.clone(),
        None => config.dictionary_path()?,
    };

    if cli.version {
        println!("kotoba {}", kotoba::VERSION);
        // dictionary version is a bonus; its absence is not an error here
        if let Ok(dict) = Dictionary::open(&dict_path) {
            println!("dictionary {} ({} entries)", dict.version(), dict.len());
        }
        return Ok(ExitCode::SUCCESS);
    }

    let query = cli.query.join(" ");
    let lookup_abbrev = cli.list_abbrevs || cli.abbrev.is_some();
    if !lookup_abbrev && query.trim().is_empty() {
        Cli::command().print_help()?;
        return Ok(ExitCode::from(EXIT_FAILURE));
    }

    let dict = Dictionary::open(&dict_path).context(
        "a dictionary file is required; pass --dict PATH or set \"dictionary\" in config.json",
    )?;

    if cli.list_abbrevs {
        for (abbrev, meaning) in dict.abbreviations() {
            println!("{}\t{}", abbrev, meaning);
        }
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(abbrev) = &cli.abbrev {
        match dict.abbreviation(abbrev) {
            Some(meaning) => println!("{}\t{}", abbrev, meaning),
            None => println!("Not found!"),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let request = SearchRequest {
        query,
        field: cli.field(),
        extent: cli.extent(),
        regexp: cli.regexp,
        case_sensitive: cli.case_sensitive.then_some(true),
        frequent_only: cli.frequent,
    };

    let conditions = generate(&request)?;
    if cli.explain {
        eprintln!("{}", serde_json::to_string_pretty(&conditions)?);
    }

    let outcome = guess(&dict, &conditions)?;
    let Some(condition) = &outcome.condition else {
        eprintln!("Not found");
        return Ok(ExitCode::from(EXIT_NOT_FOUND));
    };

    let entries: Vec<&Entry> = outcome
        .entries
        .iter()
        .filter_map(|&id| dict.fetch(id))
        .collect();

    let options = PresentOptions {
        mode: cli.output_mode(&config),
        background: cli.background(&config).resolve(),
        romaji: cli.romaji(),
    };
    let choice = if cli.use_color(&config) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };

    let mut stdout = StandardStream::stdout(choice);
    write_entries(&mut stdout, &entries, condition, &options)?;

    Ok(ExitCode::SUCCESS)
}
