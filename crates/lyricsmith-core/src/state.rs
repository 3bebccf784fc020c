//! Selection state
//!
//! [`SelectionState`] is the single owner of everything the user can change:
//! topic, persona choices, custom style, lyrics, the busy flag and the copy
//! indicators. Every update goes through a method here; generation works on a
//! [`GenerationRequest`] snapshot and hands its outcome back through
//! [`SelectionState::finish_generation`].

use std::time::Instant;

use crate::catalog::{Catalog, EntryKind};
use crate::copy::{master_prompt, CopyIndicators, CopyTarget};
use crate::error::StudioError;
use crate::request::GenerationRequest;
use crate::style::{compose_style, StyleSelection};

/// Prefix used when an uploaded file becomes the topic
pub const FILE_TOPIC_PREFIX: &str = "Analysis of: ";

#[derive(Debug, Clone)]
pub struct SelectionState {
    catalog: &'static Catalog,
    topic: String,
    selected_topic: Option<String>,
    uploaded_file: Option<String>,
    vocalist: Option<String>,
    producer: Option<String>,
    rhyme_scheme: Option<String>,
    custom_style: String,
    lyrics: String,
    generating: bool,
    indicators: CopyIndicators,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin())
    }

    pub fn with_catalog(catalog: &'static Catalog) -> Self {
        Self {
            catalog,
            topic: String::new(),
            selected_topic: None,
            uploaded_file: None,
            vocalist: None,
            producer: None,
            rhyme_scheme: None,
            custom_style: String::new(),
            lyrics: String::new(),
            generating: false,
            indicators: CopyIndicators::default(),
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn selected_topic(&self) -> Option<&str> {
        self.selected_topic.as_deref()
    }

    /// Catalog description for the current topic text, if it names a topic
    pub fn topic_description(&self) -> Option<&'static str> {
        self.catalog.topic(&self.topic)
    }

    pub fn uploaded_file(&self) -> Option<&str> {
        self.uploaded_file.as_deref()
    }

    pub fn vocalist(&self) -> Option<&str> {
        self.vocalist.as_deref()
    }

    pub fn producer(&self) -> Option<&str> {
        self.producer.as_deref()
    }

    pub fn rhyme_scheme(&self) -> Option<&str> {
        self.rhyme_scheme.as_deref()
    }

    pub fn custom_style(&self) -> &str {
        &self.custom_style
    }

    pub fn lyrics(&self) -> &str {
        &self.lyrics
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Pick a curated topic. The name is copied into the topic text; an empty
    /// name only clears the curated choice.
    pub fn select_topic(&mut self, name: &str) -> Result<(), StudioError> {
        if name.is_empty() {
            self.selected_topic = None;
            return Ok(());
        }
        let name = self.validated(EntryKind::Topic, Some(name))?;
        self.topic = name.clone().unwrap_or_default();
        self.selected_topic = name;
        Ok(())
    }

    /// Free-typed topic text
    pub fn set_topic_text(&mut self, text: impl Into<String>) {
        self.topic = text.into();
        self.selected_topic = None;
    }

    /// Use an uploaded file as inspiration. Only its name is kept.
    pub fn attach_file(&mut self, file_name: impl Into<String>) {
        let file_name = file_name.into();
        self.topic = format!("{}{}", FILE_TOPIC_PREFIX, file_name);
        self.uploaded_file = Some(file_name);
        self.selected_topic = None;
    }

    /// Detach the file. The topic text it produced stays editable.
    pub fn clear_file(&mut self) {
        self.uploaded_file = None;
    }

    pub fn select_vocalist(&mut self, name: Option<&str>) -> Result<(), StudioError> {
        self.vocalist = self.validated(EntryKind::Vocalist, name)?;
        Ok(())
    }

    pub fn select_producer(&mut self, name: Option<&str>) -> Result<(), StudioError> {
        self.producer = self.validated(EntryKind::Producer, name)?;
        Ok(())
    }

    pub fn select_rhyme_scheme(&mut self, name: Option<&str>) -> Result<(), StudioError> {
        self.rhyme_scheme = self.validated(EntryKind::RhymeScheme, name)?;
        Ok(())
    }

    pub fn set_custom_style(&mut self, text: impl Into<String>) {
        self.custom_style = text.into();
    }

    pub fn set_lyrics(&mut self, text: impl Into<String>) {
        self.lyrics = text.into();
    }

    /// Clear every field, indicators and busy flag included
    pub fn reset(&mut self) {
        *self = Self::with_catalog(self.catalog);
    }

    /// The style prompt for the current selections
    pub fn style_prompt(&self) -> String {
        compose_style(
            self.catalog,
            &StyleSelection {
                producer: self.producer(),
                vocalist: self.vocalist(),
                custom_style: &self.custom_style,
                rhyme_scheme: self.rhyme_scheme(),
            },
        )
    }

    /// Snapshot the selections without touching the busy flag
    pub fn request_snapshot(&self) -> Result<GenerationRequest, StudioError> {
        let vocalist = match self.vocalist.as_deref() {
            Some(v) if !self.topic.trim().is_empty() => v,
            _ => return Err(StudioError::MissingSelection),
        };

        let custom_style = self.custom_style.trim();

        Ok(GenerationRequest {
            topic: self.topic.clone(),
            topic_description: self.topic_description().map(str::to_string),
            vocalist: vocalist.to_string(),
            vocalist_detail: self.catalog.vocalist(vocalist).map(str::to_string),
            producer: self.producer.clone(),
            producer_detail: self
                .producer()
                .and_then(|p| self.catalog.producer(p))
                .map(str::to_string),
            rhyme_scheme: self.rhyme_scheme.clone(),
            rhyme_scheme_detail: self
                .rhyme_scheme()
                .and_then(|r| self.catalog.rhyme_scheme(r))
                .map(str::to_string),
            custom_style: (!custom_style.is_empty()).then(|| custom_style.to_string()),
        })
    }

    /// Mark the state busy and snapshot the request.
    ///
    /// Fails without side effects while another generation is outstanding or
    /// when the topic or vocalist is missing.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, StudioError> {
        if self.generating {
            return Err(StudioError::GenerationInProgress);
        }
        let request = self.request_snapshot()?;
        self.generating = true;
        tracing::debug!(topic = %request.topic, vocalist = %request.vocalist, "generation started");
        Ok(request)
    }

    /// Clear the busy flag and apply the outcome. Failures leave the lyrics
    /// untouched and are handed back to the caller.
    pub fn finish_generation<E>(&mut self, result: Result<String, E>) -> Result<(), E> {
        self.generating = false;
        let lyrics = result?;
        self.lyrics = lyrics;
        Ok(())
    }

    /// Produce the payload for `target` and light its indicator
    pub fn copy(&mut self, target: CopyTarget, now: Instant) -> Result<String, StudioError> {
        let payload = match target {
            CopyTarget::Style => self.style_prompt(),
            CopyTarget::Lyrics | CopyTarget::All if self.lyrics.is_empty() => {
                return Err(StudioError::NothingToCopy(target));
            }
            CopyTarget::Lyrics => self.lyrics.clone(),
            CopyTarget::All => master_prompt(&self.style_prompt(), &self.lyrics),
        };
        self.indicators.mark(target, now);
        Ok(payload)
    }

    pub fn is_copied(&self, target: CopyTarget, now: Instant) -> bool {
        self.indicators.is_copied(target, now)
    }

    fn validated(&self, kind: EntryKind, name: Option<&str>) -> Result<Option<String>, StudioError> {
        match name.filter(|n| !n.is_empty()) {
            None => Ok(None),
            Some(n) if self.catalog.lookup(kind, n).is_some() => Ok(Some(n.to_string())),
            Some(n) => Err(StudioError::UnknownEntry {
                kind,
                name: n.to_string(),
            }),
        }
    }
}
