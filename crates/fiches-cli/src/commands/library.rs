use crate::cli::SettingsArgs;
use crate::commands::load_app_config;
use crate::config::ConfigOverrides;
use crate::error::Result;
use fiches::core::io::json::LoadError;
use fiches::core::io::library::VocabularyLibrary;
use tracing::warn;

pub fn run(settings: &SettingsArgs) -> Result<()> {
    let app = load_app_config(settings, &ConfigOverrides::default())?;
    print!("{}", describe(&app.library));
    Ok(())
}

/// Human-readable overview of a library. Sections that cannot be read are reported inline.
pub fn describe(library: &VocabularyLibrary) -> String {
    let mut out = format!("Library: {}\n", library.root().display());

    out.push_str("\nBooks:\n");
    match library.books() {
        Ok(books) if books.is_empty() => out.push_str("  (none)\n"),
        Ok(books) => {
            for book in books {
                out.push_str(&format!("  {}\n", book));
                for chapter in listing(library.chapters(&book)) {
                    let files = listing(library.chapter_files(&book, &chapter));
                    out.push_str(&format!("    {}: {}\n", chapter, files.join(", ")));
                }
            }
        }
        Err(e) => out.push_str(&unavailable(&e)),
    }

    section(&mut out, "Dictionaries", library.dictionaries());
    section(&mut out, "Contexts", library.contexts());

    out.push_str("\nVerbs:\n");
    match library.load_verbs() {
        Ok(table) => {
            let names: Vec<&str> = table.infinitives().collect();
            out.push_str(&format!("  {} verbs: {}\n", names.len(), names.join(", ")));
            let tenses = table.tense_names();
            if !tenses.is_empty() {
                out.push_str(&format!("  tenses: {}\n", tenses.join(", ")));
            }
        }
        Err(e) => out.push_str(&unavailable(&e)),
    }

    match library.template_path() {
        Some(path) => out.push_str(&format!("\nTemplate: {}\n", path.display())),
        None => out.push_str("\nTemplate: (none)\n"),
    }
    out
}

fn listing(result: std::result::Result<Vec<String>, LoadError>) -> Vec<String> {
    result.unwrap_or_else(|e| {
        warn!("{}", e);
        Vec::new()
    })
}

fn section(out: &mut String, title: &str, names: std::result::Result<Vec<String>, LoadError>) {
    out.push_str(&format!("\n{}:\n", title));
    match names {
        Ok(names) if names.is_empty() => out.push_str("  (none)\n"),
        Ok(names) => {
            for name in names {
                out.push_str(&format!("  {}\n", name));
            }
        }
        Err(e) => out.push_str(&unavailable(&e)),
    }
}

fn unavailable(error: &LoadError) -> String {
    format!("  (unavailable: {})\n", error)
}
