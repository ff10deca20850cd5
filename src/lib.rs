// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Ordered song list.
//!
//! A singly linked list of song records kept from most to least played,
//! with alphabetical tie-breaking among equal play counts. The
//! interesting part is [`SongList::add_inorder`]; the remaining
//! operations are plain splicing around it.
//!
//! Records are owned by the caller and shared into the list through
//! [`std::rc::Rc`] handles. The list never copies or mutates a record,
//! and detaching a node hands it back to the caller intact.

pub mod list;
pub mod song;

pub use list::{Iter, Node, SongList};
pub use song::Song;
