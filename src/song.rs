// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song records.
//!
//! A record carries the two naming fields plus the play count that
//! ranks it. The list stores shared handles to these records; it never
//! copies or mutates them.

use serde::{Deserialize, Serialize};

/// A song record with its ranking field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Performing artist
    pub artist: String,
    /// Song title
    pub title: String,
    /// Play count, the primary ranking field
    pub plays: u64,
}

impl Song {
    /// Create a new song record
    pub fn new(artist: impl Into<String>, title: impl Into<String>, plays: u64) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
            plays,
        }
    }
}
