//! Translation commands: sync, prune and coverage

use super::{load_document, render_json, write_document};
use crate::cli::error::CliError;
use crate::config::EngineConfig;
use crate::translations::{
    TranslationSyncStats, prune_translations, sync_and_prune_with_stats, sync_translations,
    translation_coverage,
};
use std::path::PathBuf;

/// Arguments for the sync command
#[derive(Debug, Clone)]
pub struct SyncArgs {
    pub input: String,
    pub output: Option<PathBuf>,
    /// Prune even when the configuration says not to
    pub prune: bool,
}

/// Handle the sync command
pub fn handle_sync(args: &SyncArgs, config: &EngineConfig) -> Result<(), CliError> {
    let doc = load_document(&args.input, config)?;

    let (synced, stats) = if args.prune || config.translations.prune_after_sync {
        sync_and_prune_with_stats(&doc)
    } else {
        let synced = sync_translations(&doc);
        let stats = TranslationSyncStats {
            added: count_entries(&synced) - count_entries(&doc),
            removed: 0,
        };
        (synced, stats)
    };

    write_document(&synced, args.output.as_deref(), config)?;
    eprintln!(
        "Added {} and removed {} translation entries",
        stats.added, stats.removed
    );
    Ok(())
}

/// Handle the prune command
pub fn handle_prune(
    input: &str,
    output: Option<PathBuf>,
    config: &EngineConfig,
) -> Result<(), CliError> {
    let doc = load_document(input, config)?;
    let pruned = prune_translations(&doc);
    write_document(&pruned, output.as_deref(), config)?;
    eprintln!(
        "Removed {} translation entries",
        count_entries(&doc) - count_entries(&pruned)
    );
    Ok(())
}

/// Handle the coverage command
pub fn handle_coverage(input: &str, config: &EngineConfig) -> Result<(), CliError> {
    let doc = load_document(input, config)?;
    let coverage = translation_coverage(&doc);
    println!("{}", render_json(&coverage, config)?);
    for language in &coverage {
        eprintln!(
            "{}: {:.0}% ({} of {} keys missing)",
            language.language,
            language.percent(),
            language.missing.len(),
            language.total
        );
    }
    Ok(())
}

fn count_entries(doc: &crate::models::Document) -> usize {
    doc.intl.iter().map(|(_, dictionary)| dictionary.len()).sum()
}
