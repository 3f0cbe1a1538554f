//! Id resolution for command-line arguments
//!
//! Ids are UUIDs; typing them in full is tedious, so any unambiguous
//! prefix of at least four characters is accepted as well.

use std::fmt::Display;
use std::str::FromStr;

use crate::domain::value_objects::EntityKind;
use crate::error::{ResiError, ResiResult};

const MIN_PREFIX: usize = 4;

/// Resolve `input` against the ids that exist.
///
/// A full id is returned as-is when it exists. Otherwise `input` must
/// be the prefix of exactly one candidate.
pub fn resolve_id<I>(kind: EntityKind, input: &str, candidates: impl IntoIterator<Item = I>) -> ResiResult<I>
where
    I: Copy + Eq + Display + FromStr,
{
    let input = input.trim().to_lowercase();
    let candidates: Vec<I> = candidates.into_iter().collect();

    if let Ok(full) = input.parse::<I>() {
        return candidates
            .into_iter()
            .find(|c| *c == full)
            .ok_or_else(|| ResiError::not_found(kind, &input));
    }

    if input.len() < MIN_PREFIX {
        return Err(ResiError::invalid(
            "id",
            format!("'{}' is too short; give at least {} characters", input, MIN_PREFIX),
        ));
    }

    let mut matches = candidates
        .into_iter()
        .filter(|c| c.to_string().starts_with(&input));
    match (matches.next(), matches.next()) {
        (Some(id), None) => Ok(id),
        (None, _) => Err(ResiError::not_found(kind, &input)),
        (Some(_), Some(_)) => Err(ResiError::invalid(
            "id",
            format!("'{}' matches more than one {}", input, kind),
        )),
    }
}
