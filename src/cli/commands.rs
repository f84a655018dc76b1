// src/cli/commands.rs

use crate::cli::display::{show_counts, show_entries};
use crate::cli::error::{CliError, CliResult};
use crate::domain::aggregation::CountField;
use crate::domain::entry::{AiModel, Category};
use crate::domain::filter::FilterCriteria;
use crate::domain::tag::Tag;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::json::{write_entries_as_json, JsonEntryView};
use crossterm::style::Stylize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

/// Parse a comma-separated list of labels into a set
fn parse_label_set<T: FromStr>(input: Option<&str>, what: &str) -> CliResult<Option<HashSet<T>>>
where
    T: std::hash::Hash + Eq,
    T::Err: std::fmt::Display,
{
    match input {
        None => Ok(None),
        Some(s) => {
            let mut set = HashSet::new();
            for label in s.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                let value = label.parse::<T>().map_err(|e| {
                    CliError::InvalidInput(format!("Invalid {} '{}': {}", what, label, e))
                })?;
                set.insert(value);
            }
            Ok(if set.is_empty() { None } else { Some(set) })
        }
    }
}

/// Build filter criteria from the shared search/export arguments
fn build_criteria(
    term: Option<String>,
    categories: Option<String>,
    models: Option<String>,
) -> CliResult<FilterCriteria> {
    let mut criteria = FilterCriteria::new();

    if let Some(term) = term {
        criteria = criteria.with_term(term);
    }
    if let Some(categories) = parse_label_set::<Category>(categories.as_deref(), "category")? {
        criteria = criteria.with_categories(categories);
    }
    if let Some(models) = parse_label_set::<AiModel>(models.as_deref(), "model")? {
        criteria = criteria.with_models(models);
    }

    Ok(criteria)
}

#[instrument(skip(services), level = "debug")]
pub fn add(
    services: &ServiceContainer,
    prompt: String,
    link: String,
    tags: Option<String>,
    category: String,
    model: String,
) -> CliResult<()> {
    let tags = Tag::parse_tag_option(tags.as_deref())
        .map_err(|e| CliError::InvalidInput(format!("Invalid tags: {}", e)))?;
    let category = category
        .parse::<Category>()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let model = model
        .parse::<AiModel>()
        .map_err(|e| CliError::InvalidInput(e.to_string()))?;

    match services
        .entry_service
        .add_entry(&prompt, &link, tags.as_ref(), category, model)?
    {
        Some(entry) => {
            eprintln!(
                "Added entry {}",
                entry.id.map_or("?".to_string(), |id| id.to_string()).blue()
            );
        }
        None => {
            // Blank submission is a silent no-op
        }
    }

    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn search(
    services: &ServiceContainer,
    term: Option<String>,
    categories: Option<String>,
    models: Option<String>,
    is_json: bool,
) -> CliResult<()> {
    let criteria = build_criteria(term, categories, models)?;
    let entries = services.entry_service.filter_entries(&criteria)?;

    if is_json {
        let views = JsonEntryView::from_domain_collection(&entries);
        write_entries_as_json(&views)?;
    } else {
        show_entries(&entries);
    }

    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn stats(services: &ServiceContainer) -> CliResult<()> {
    let by_category = services.entry_service.count_entries_by(CountField::Category)?;
    let by_model = services.entry_service.count_entries_by(CountField::AiModel)?;

    show_counts("Entries by category", &by_category);
    println!();
    show_counts("Entries by model", &by_model);

    Ok(())
}

#[instrument(skip(services), level = "debug")]
pub fn export(
    services: &ServiceContainer,
    term: Option<String>,
    categories: Option<String>,
    models: Option<String>,
    output: &Path,
) -> CliResult<()> {
    let criteria = build_criteria(term, categories, models)?;
    let entries = services.entry_service.filter_entries(&criteria)?;

    if output == Path::new("-") {
        let mut stdout = std::io::stdout();
        services.entry_service.export_csv(&entries, &mut stdout)?;
        stdout.flush()?;
    } else {
        let mut file = File::create(output)
            .map_err(|e| CliError::CommandFailed(format!("Cannot create {:?}: {}", output, e)))?;
        services.entry_service.export_csv(&entries, &mut file)?;
        eprintln!("Exported {} entries to {}", entries.len(), output.display());
    }

    Ok(())
}
