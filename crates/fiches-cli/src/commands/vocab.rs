use crate::cli::{SettingsArgs, VocabArgs};
use crate::commands::load_app_config;
use crate::config::ConfigOverrides;
use crate::error::{CliError, Result};
use crate::utils::output::{output_path, write_worksheet};
use crate::utils::progress::CliProgressHandler;
use fiches::core::io::json::load_vocabulary;
use fiches::core::io::library::{MERGED_DICTIONARY, VocabularyLibrary};
use fiches::core::models::vocab::VocabEntry;
use fiches::core::selection::{VocabSelection, filter_by_status};
use fiches::engine::error::WorksheetError;
use fiches::engine::progress::ProgressReporter;
use fiches::workflows::{self, WorksheetKind};
use tracing::{debug, info};

pub fn run(args: VocabArgs, settings: &SettingsArgs, quiet: bool) -> Result<()> {
    let overrides = ConfigOverrides {
        grid_size: args.grid_size,
        max_attempts: args.max_attempts,
        ..ConfigOverrides::default()
    }
    .with_layout(&args.layout);
    let app = load_app_config(settings, &overrides)?;

    let entries = collect_entries(&args, &app.library)?;
    let kind = WorksheetKind::from(args.kind);

    let handler = CliProgressHandler::for_output(quiet);
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    let bytes = workflows::generate_vocabulary_sheet(
        kind,
        &entries,
        &app.worksheet,
        app.template.as_deref(),
        &reporter,
    )?;

    let output = output_path(args.output.as_deref(), kind.file_name());
    write_worksheet(&output, &bytes)?;
    println!(
        "✓ {} worksheet with {} words written to {}",
        kind,
        entries.len(),
        output.display()
    );
    Ok(())
}

/// Gathers the words named by the source flags and applies the `--word` restriction.
///
/// Files, chapter lists and the context form the base list; dictionary search results are
/// appended after it.
pub(crate) fn collect_entries(
    args: &VocabArgs,
    library: &VocabularyLibrary,
) -> Result<Vec<VocabEntry>> {
    let mut selection = VocabSelection::new();
    let mut has_source = false;

    for file in &args.files {
        selection.extend_base(load_vocabulary(file)?);
        has_source = true;
    }

    if let (Some(book), Some(chapter)) = (&args.book, &args.chapter) {
        let files = if args.chapter_files.is_empty() {
            library.chapter_files(book, chapter)?
        } else {
            args.chapter_files.clone()
        };
        for file in &files {
            debug!("Loading chapter list '{}' of {}/{}", file, book, chapter);
            selection.extend_base(library.load_chapter_file(book, chapter, file)?);
        }
        has_source = true;
    }

    if let Some(context) = &args.context {
        let entries = library.load_context(context)?;
        let entries = match args.status {
            Some(count) => {
                let status = library.load_learning_status(usize::from(count))?;
                let kept = filter_by_status(&entries, &status);
                info!(
                    "Learning status keeps {} of {} context words.",
                    kept.len(),
                    entries.len()
                );
                kept
            }
            None => entries,
        };
        selection.extend_base(entries);
        has_source = true;
    }

    if !args.search.is_empty() {
        let name = match &args.dictionary {
            Some(name) => name.clone(),
            None if args.context.is_some() => MERGED_DICTIONARY.to_string(),
            None => library.default_dictionary()?,
        };
        let dictionary = library.load_dictionary(&name)?;
        for term in &args.search {
            let found = selection.add_search_results(&dictionary, term);
            info!("Search '{}' in '{}' matched {} words.", term, name, found);
        }
        has_source = true;
    }

    if !has_source {
        return Err(CliError::Argument(
            "No vocabulary source given. Use --file, --book/--chapter, --context or --search."
                .to_string(),
        ));
    }

    selection
        .pick(&args.words)
        .map_err(|e| CliError::from(WorksheetError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use std::path::Path;
    use tempfile::{TempDir, tempdir};

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn library() -> TempDir {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(
            &root.join("Vokabeln/Découvertes 1/Unité 2/A.json"),
            r#"[{"word": "le chat", "translation": "die Katze"}, {"word": "le chien", "translation": "der Hund"}]"#,
        );
        write(
            &root.join("Vokabeln/Découvertes 1/Unité 2/B.json"),
            r#"{"la souris": "die Maus", "le chat": "der Kater"}"#,
        );
        write(
            &root.join("Vokabeln/vocabs_all/zusammengeführt.json"),
            r#"[{"word": "la chambre", "translation": "das Zimmer"}, {"word": "le chapeau", "translation": "der Hut"}]"#,
        );
        write(
            &root.join("Kontexte/Ferien.json"),
            r#"[{"word": "la plage", "translation": "der Strand"}, {"word": "la mer", "translation": "das Meer"}]"#,
        );
        write(
            &root.join("Kontexte/Vokabeln/1.json"),
            r#"[{"word": "La Plage", "translation": "der Strand"}]"#,
        );
        dir
    }

    fn vocab_args(extra: &[&str]) -> VocabArgs {
        let mut argv = vec!["fiches", "vocab"];
        argv.extend_from_slice(extra);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Vocab(args) => args,
            other => panic!("expected vocab, got {other:?}"),
        }
    }

    #[test]
    fn chapter_lists_merge_with_last_translation_winning() {
        let dir = library();
        let lib = VocabularyLibrary::new(dir.path());
        let args = vocab_args(&["--book", "Découvertes 1", "--chapter", "Unité 2"]);

        let entries = collect_entries(&args, &lib).unwrap();
        let words: Vec<_> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["le chat", "le chien", "la souris"]);
        assert_eq!(entries[0].translation, "der Kater");
    }

    #[test]
    fn context_with_status_and_search_in_merged_dictionary() {
        let dir = library();
        let lib = VocabularyLibrary::new(dir.path());
        let args = vocab_args(&["--context", "Ferien", "--status", "2", "--search", "CHA"]);

        let entries = collect_entries(&args, &lib).unwrap();
        let words: Vec<_> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["la plage", "la chambre", "le chapeau"]);
    }

    #[test]
    fn word_restriction_orders_and_validates() {
        let dir = library();
        let lib = VocabularyLibrary::new(dir.path());

        let args = vocab_args(&[
            "--book", "Découvertes 1", "--chapter", "Unité 2", "--chapter-file", "A",
            "--word", "le chien", "--word", "le chat",
        ]);
        let entries = collect_entries(&args, &lib).unwrap();
        assert_eq!(entries[0].word, "le chien");
        assert_eq!(entries[1].translation, "die Katze");

        let args = vocab_args(&["--context", "Ferien", "--word", "le soleil"]);
        assert!(matches!(
            collect_entries(&args, &lib),
            Err(CliError::Worksheet(WorksheetError::Selection(_)))
        ));
    }

    #[test]
    fn missing_source_or_file_is_an_error() {
        let dir = library();
        let lib = VocabularyLibrary::new(dir.path());

        assert!(matches!(
            collect_entries(&vocab_args(&[]), &lib),
            Err(CliError::Argument(_))
        ));
        let missing = dir.path().join("absent.json");
        let args = vocab_args(&["--file", missing.to_str().unwrap()]);
        assert!(matches!(collect_entries(&args, &lib), Err(CliError::Load(_))));
    }
}
