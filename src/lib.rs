//! # Phonebook (`phonebook`)
//!
//! ## Purpose
//!
//! `phonebook` is the core of a small user-directory service: a fixed,
//! in-memory collection of user records and a prioritized search over it.
//! Callers supply any subset of four optional, string-valued criteria and
//! get back matching records ranked by which criterion matched. The HTTP
//! surface lives in the companion `phonebook-server` crate and only forwards
//! query parameters in and search results out.
//!
//! ## Core Types
//!
//! - [`UserRecord`]: one directory entry (`id`, `name`, `age`, `occupation`).
//! - [`SearchCriteria`]: the four optional filters; empty strings count as
//!   absent, and `age` is kept as a string so parsing can degrade per record.
//! - [`MatchPriority`]: rank of a hit, tied to the criterion that produced
//!   it (`Id` beats `Name` beats `Age` beats `Occupation`).
//! - [`SearchHit`]: a matched record plus its priority.
//! - [`Directory`]: the read-only record collection handed to the engine.
//! - [`SearchError`]: `NotFound` when nothing matches; zero matches is a
//!   distinguished signal, never an empty list.
//!
//! ## Example Usage
//!
//! ```
//! use phonebook::{Directory, SearchCriteria};
//!
//! let directory = Directory::builtin();
//! let criteria = SearchCriteria {
//!     name: Some("ali".into()),
//!     ..Default::default()
//! };
//!
//! let hits = directory.search(&criteria).expect("search");
//! for hit in hits {
//!     println!("{} ({:?})", hit.user.name, hit.priority);
//! }
//! ```

pub mod directory;
pub mod engine;
pub mod types;

pub use crate::directory::Directory;
pub use crate::engine::search;
pub use crate::types::{MatchPriority, SearchCriteria, SearchError, SearchHit, UserRecord};
