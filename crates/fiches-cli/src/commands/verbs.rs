use crate::cli::{SettingsArgs, VerbsArgs};
use crate::commands::load_app_config;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::utils::output::{output_path, write_worksheet};
use crate::utils::progress::CliProgressHandler;
use fiches::core::io::json::load_conjugations;
use fiches::core::io::library::VocabularyLibrary;
use fiches::core::models::conjugation::ConjugationTable;
use fiches::engine::document::Document;
use fiches::engine::error::WorksheetError;
use fiches::engine::progress::{Progress, ProgressReporter};
use fiches::engine::random::rng_from_seed;
use fiches::workflows::{self, conjugation};
use std::path::PathBuf;
use tracing::info;

pub fn run(args: VerbsArgs, settings: &SettingsArgs, quiet: bool) -> Result<()> {
    let overrides = ConfigOverrides {
        drill_rows: args.rows,
        ..ConfigOverrides::default()
    }
    .with_layout(&args.layout);
    let app = load_app_config(settings, &overrides)?;

    let table = load_table(&args.files, &app.library)?;
    info!("Conjugation table holds {} verbs.", table.len());

    let handler = CliProgressHandler::for_output(quiet);
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    let mut rng = rng_from_seed(app.worksheet.seed);

    let document = reporter.phase("Layout", || -> std::result::Result<Document, WorksheetError> {
        if args.table {
            conjugation::build_table_sheet(&table, &args.verbs, &app.worksheet, &mut rng)
        } else {
            let request = conjugation::DrillRequest {
                verbs: args.verbs.clone(),
                tenses: args.tense1.clone().zip(args.tense2.clone()),
            };
            conjugation::build_drill_sheet(&table, &request, &app.worksheet, &mut rng)
        }
    })?;
    let bytes = reporter.phase("Rendering", || {
        workflows::render(&document, app.template.as_deref())
    })?;

    let default_name = if args.table {
        conjugation::TABLE_FILE_NAME
    } else {
        conjugation::DRILL_FILE_NAME
    };
    let output = output_path(args.output.as_deref(), default_name);
    write_worksheet(&output, &bytes)?;
    reporter.report(Progress::Message(format!("{} ready", output.display())));

    println!(
        "✓ Conjugation {} with {} rows written to {}",
        if args.table { "table" } else { "drill" },
        app.worksheet.drill_rows,
        output.display()
    );
    Ok(())
}

/// The verbs from `files` merged in order, or the library's verb directory when none are given.
fn load_table(files: &[PathBuf], library: &VocabularyLibrary) -> Result<ConjugationTable> {
    if files.is_empty() {
        return Ok(library.load_verbs()?);
    }
    let mut table = ConjugationTable::new();
    for file in files {
        table.merge(load_conjugations(file)?);
    }
    Ok(table)
}
