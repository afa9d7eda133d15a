use crate::cli::{ClozeArgs, SettingsArgs};
use crate::commands::load_app_config;
use crate::config::ConfigOverrides;
use crate::error::{CliError, Result};
use crate::utils::output::{output_path, write_worksheet};
use crate::utils::progress::CliProgressHandler;
use fiches::core::io::json::LoadError;
use fiches::core::io::library::VocabularyLibrary;
use fiches::core::models::vocab::VocabEntry;
use fiches::core::puzzles::cloze::GapMode;
use fiches::engine::progress::ProgressReporter;
use fiches::engine::random::rng_from_seed;
use fiches::workflows::{self, cloze};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: ClozeArgs, settings: &SettingsArgs, quiet: bool) -> Result<()> {
    let overrides = ConfigOverrides::default().with_layout(&args.layout);
    let app = load_app_config(settings, &overrides)?;

    let text = read_text(&args.text)?;
    let modes = gap_modes(&args);
    let dictionary = translation_dictionary(&modes, args.dictionary.as_deref(), &app.library)?;

    let handler = CliProgressHandler::for_output(quiet);
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    let mut rng = rng_from_seed(app.worksheet.seed);

    let document = reporter.phase("Layout", || {
        cloze::build(&text, &dictionary, &modes, &args.prefix, &app.worksheet, &mut rng)
    })?;
    let bytes = reporter.phase("Rendering", || {
        workflows::render(&document, app.template.as_deref())
    })?;

    let output = output_path(args.output.as_deref(), cloze::FILE_NAME);
    write_worksheet(&output, &bytes)?;
    println!(
        "✓ Cloze worksheet with {} section(s) written to {}",
        modes.len(),
        output.display()
    );
    Ok(())
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| {
        CliError::Load(LoadError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })
    })
}

fn gap_modes(args: &ClozeArgs) -> Vec<GapMode> {
    if args.modes.is_empty() {
        GapMode::ALL.to_vec()
    } else {
        args.modes.iter().copied().map(GapMode::from).collect()
    }
}

/// Loads a dictionary only when a translated word box is requested.
fn translation_dictionary(
    modes: &[GapMode],
    name: Option<&str>,
    library: &VocabularyLibrary,
) -> Result<Vec<VocabEntry>> {
    if !modes.contains(&GapMode::Translated) {
        debug!("No translated word box requested; skipping dictionary.");
        return Ok(Vec::new());
    }
    let name = match name {
        Some(name) => name.to_string(),
        None => library.default_dictionary()?,
    };
    let dictionary = library.load_dictionary(&name)?;
    info!("Translating the word box with '{}' ({} entries).", name, dictionary.len());
    Ok(dictionary)
}
