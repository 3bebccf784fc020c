//! Studio error types

use thiserror::Error;

use crate::catalog::EntryKind;
use crate::copy::CopyTarget;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudioError {
    #[error("Please define a topic and select a vocalist persona.")]
    MissingSelection,

    #[error("a generation is already in progress")]
    GenerationInProgress,

    #[error("unknown {kind}: {name}")]
    UnknownEntry { kind: EntryKind, name: String },

    #[error("nothing to copy for {0}: lyrics are empty")]
    NothingToCopy(CopyTarget),
}
