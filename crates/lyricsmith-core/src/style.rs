//! Style prompt composition

use crate::catalog::{Catalog, EntryKind};
use crate::tags::clean_prompt_tags;

/// Borrowed view of the selections that feed the style prompt
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleSelection<'a> {
    pub producer: Option<&'a str>,
    pub vocalist: Option<&'a str>,
    pub custom_style: &'a str,
    pub rhyme_scheme: Option<&'a str>,
}

/// Build the style string from the current selections.
///
/// Sections always appear as producer, vocalist, custom text, rhyme scheme.
/// Unselected or empty sections are skipped, so the result never carries a
/// stray separator.
pub fn compose_style(catalog: &Catalog, selection: &StyleSelection<'_>) -> String {
    let mut sections = Vec::with_capacity(4);

    if let Some(section) = cleaned_detail(catalog, EntryKind::Producer, selection.producer) {
        sections.push(section);
    }

    if let Some(section) = cleaned_detail(catalog, EntryKind::Vocalist, selection.vocalist) {
        sections.push(section);
    }

    let custom = selection.custom_style.trim();
    if !custom.is_empty() {
        sections.push(custom.to_string());
    }

    if let Some(section) = cleaned_detail(catalog, EntryKind::RhymeScheme, selection.rhyme_scheme)
    {
        sections.push(section);
    }

    sections.join(", ")
}

fn cleaned_detail(catalog: &Catalog, kind: EntryKind, name: Option<&str>) -> Option<String> {
    let name = name.filter(|n| !n.is_empty())?;
    let Some(detail) = catalog.lookup(kind, name) else {
        tracing::debug!(%kind, name, "no catalog entry, skipping style section");
        return None;
    };
    let cleaned = clean_prompt_tags(detail);
    (!cleaned.is_empty()).then_some(cleaned)
}
