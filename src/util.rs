//! Shared utility modules used across caduceus components.

pub mod levenshtein;
