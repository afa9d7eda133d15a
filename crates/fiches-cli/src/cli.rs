use clap::{Args, Parser, Subcommand, ValueEnum};
use fiches::core::puzzles::cloze::GapMode;
use fiches::workflows::WorksheetKind;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "fiches - build French vocabulary worksheets (word searches, puzzles, drills, cloze texts) as .docx files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Options shared by every command that reads the library or writes a worksheet.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// Seed for all random choices; the same seed reproduces the same worksheet.
    #[arg(long, global = true, value_name = "INT")]
    pub seed: Option<u64>,

    /// Root of the vocabulary library. Defaults to the configured data path.
    #[arg(long, global = true, value_name = "DIR")]
    pub library: Option<PathBuf>,

    /// A .docx file whose styles and content precede the worksheet.
    #[arg(long, global = true, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S word-search.grid-size=15
    #[arg(short = 'S', long = "set", global = true, value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a vocabulary worksheet (word search, puzzle, word snake, matching or list).
    Vocab(VocabArgs),
    /// Build a conjugation drill or a conjugation table.
    Verbs(VerbsArgs),
    /// Build a differentiated cloze worksheet from a text with [bracketed] words.
    Cloze(ClozeArgs),
    /// List the books, chapters, dictionaries, contexts and verbs of the library.
    Library,
    /// Manage the default location of the vocabulary library.
    Data(DataArgs),
}

/// Layout overrides shared by the worksheet commands.
#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Override the body font size, in points.
    #[arg(long, value_name = "PT")]
    pub font_size: Option<f32>,

    /// Override the table row height, in centimetres.
    #[arg(long, value_name = "CM")]
    pub row_height: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    WordSearch,
    Scramble,
    WordSnake,
    Matching,
    VocabList,
}

impl From<KindArg> for WorksheetKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::WordSearch => WorksheetKind::WordSearch,
            KindArg::Scramble => WorksheetKind::Scramble,
            KindArg::WordSnake => WorksheetKind::WordSnake,
            KindArg::Matching => WorksheetKind::Matching,
            KindArg::VocabList => WorksheetKind::VocabList,
        }
    }
}

/// Arguments for the `vocab` subcommand.
#[derive(Args, Debug, Clone)]
pub struct VocabArgs {
    /// Worksheet to build.
    #[arg(short, long, value_enum, default_value = "word-search")]
    pub kind: KindArg,

    // --- Sources ---
    /// A vocabulary JSON file to take words from. Can be used multiple times.
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Book of the library to take a chapter from.
    #[arg(long, requires = "chapter")]
    pub book: Option<String>,

    /// Chapter of `--book`.
    #[arg(long, requires = "book")]
    pub chapter: Option<String>,

    /// Word list of the chapter; every list of the chapter when omitted. Can be used multiple times.
    #[arg(long = "chapter-file", value_name = "NAME", requires = "chapter")]
    pub chapter_files: Vec<String>,

    /// A context of the library to take words from.
    #[arg(long, value_name = "NAME")]
    pub context: Option<String>,

    /// Keep only context words found in the first N learning-status snapshots.
    #[arg(long, value_name = "N", requires = "context", value_parser = clap::value_parser!(u8).range(1..=10))]
    pub status: Option<u8>,

    /// Add every dictionary word containing TERM. Can be used multiple times.
    #[arg(short, long = "search", value_name = "TERM")]
    pub search: Vec<String>,

    /// Dictionary searched by `--search`.
    #[arg(short, long, value_name = "NAME")]
    pub dictionary: Option<String>,

    /// Restrict the worksheet to these words, in this order. Can be used multiple times.
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    // --- Output ---
    /// Output path; defaults to the worksheet's usual file name.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Overrides ---
    /// Override the word-search grid size.
    #[arg(long, value_name = "INT")]
    pub grid_size: Option<usize>,

    /// Override the number of placement attempts per word.
    #[arg(long, value_name = "INT")]
    pub max_attempts: Option<usize>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Arguments for the `verbs` subcommand.
#[derive(Args, Debug, Clone)]
pub struct VerbsArgs {
    /// Verb to draw from; every verb when omitted. Can be used multiple times.
    #[arg(long = "verb", value_name = "INFINITIVE")]
    pub verbs: Vec<String>,

    /// A conjugation JSON file to read instead of the library's verbs. Can be used multiple times.
    #[arg(short, long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// First tense of the drill; defaults to the first tense of the first verb.
    #[arg(long, value_name = "NAME", requires = "tense2")]
    pub tense1: Option<String>,

    /// Second tense of the drill; defaults to the second tense of the first verb.
    #[arg(long, value_name = "NAME", requires = "tense1")]
    pub tense2: Option<String>,

    /// Number of exercises (1-100).
    #[arg(short, long, value_name = "INT")]
    pub rows: Option<usize>,

    /// Build the pronoun table instead of the two-tense drill.
    #[arg(long, conflicts_with_all = ["tense1", "tense2"])]
    pub table: bool,

    /// Output path; defaults to the worksheet's usual file name.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapModeArg {
    Blanks,
    FirstLetter,
    Translated,
}

impl From<GapModeArg> for GapMode {
    fn from(mode: GapModeArg) -> Self {
        match mode {
            GapModeArg::Blanks => GapMode::Blanks,
            GapModeArg::FirstLetter => GapMode::FirstLetter,
            GapModeArg::Translated => GapMode::Translated,
        }
    }
}

/// Arguments for the `cloze` subcommand.
#[derive(Args, Debug, Clone)]
pub struct ClozeArgs {
    /// Text file with the words to blank marked as [word].
    #[arg(short, long, required = true, value_name = "PATH")]
    pub text: PathBuf,

    /// Dictionary used to translate the word box; the first dictionary of the library by default.
    #[arg(short, long, value_name = "NAME")]
    pub dictionary: Option<String>,

    /// Gap mode to include; all three when omitted. Can be used multiple times.
    #[arg(short, long = "mode", value_enum)]
    pub modes: Vec<GapModeArg>,

    /// Title prefix of every section.
    #[arg(long, default_value = fiches::workflows::cloze::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Output path; defaults to the worksheet's usual file name.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Arguments for the `data` subcommand.
#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(subcommand)]
    pub command: DataCommands,
}

/// Available commands for library location management.
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Show the absolute path to the default vocabulary library.
    Path,
    /// Set a custom absolute path for the default vocabulary library.
    SetPath {
        /// The directory holding the vocabulary library.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the library path to its default, OS-specific location.
    ResetPath,
}
