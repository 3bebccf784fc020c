//! Building selection state from configuration and flags

use lyricsmith_config::DefaultSelections;
use lyricsmith_core::{SelectionState, StudioError};
use std::path::Path;

use crate::commands::SelectionArgs;

/// Configured defaults first, then command-line flags on top
pub fn build_state(
    defaults: &DefaultSelections,
    args: &SelectionArgs,
) -> Result<SelectionState, StudioError> {
    let mut state = SelectionState::new();
    apply_defaults(&mut state, defaults)?;
    apply_args(&mut state, args)?;
    Ok(state)
}

pub fn apply_defaults(
    state: &mut SelectionState,
    defaults: &DefaultSelections,
) -> Result<(), StudioError> {
    if let Some(vocalist) = defaults.vocalist.as_deref() {
        state.select_vocalist(Some(vocalist))?;
    }
    if let Some(producer) = defaults.producer.as_deref() {
        state.select_producer(Some(producer))?;
    }
    if let Some(rhyme) = defaults.rhyme_scheme.as_deref() {
        state.select_rhyme_scheme(Some(rhyme))?;
    }
    if let Some(custom) = defaults.custom_style.as_deref() {
        state.set_custom_style(custom);
    }
    Ok(())
}

fn apply_args(state: &mut SelectionState, args: &SelectionArgs) -> Result<(), StudioError> {
    if let Some(topic) = args.topic.as_deref() {
        state.set_topic_text(topic);
    }
    if let Some(name) = args.pick_topic.as_deref() {
        state.select_topic(name)?;
    }
    if let Some(path) = args.file.as_deref() {
        state.attach_file(file_label(path));
    }
    if let Some(vocalist) = args.vocalist.as_deref() {
        state.select_vocalist(Some(vocalist))?;
    }
    if let Some(producer) = args.producer.as_deref() {
        state.select_producer(Some(producer))?;
    }
    if let Some(rhyme) = args.rhyme.as_deref() {
        state.select_rhyme_scheme(Some(rhyme))?;
    }
    if let Some(custom) = args.custom.as_deref() {
        state.set_custom_style(custom);
    }
    Ok(())
}

/// The name shown for an inspiration file; contents are never read
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
