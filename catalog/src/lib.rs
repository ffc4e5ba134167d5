//! Shared domain model for the ProbY problem/solution catalog.
//!
//! This crate owns everything the UI needs that is not rendering: the record
//! shapes, the fixture data shown on each page, the catalog filters, the
//! login/submission form flows, and the key-value store contract used to
//! persist the `user` and `problems` blobs. It has no browser or server
//! dependencies so `client` can run it in WASM and tests can run it natively.

pub mod display;
pub mod filter;
pub mod fixtures;
pub mod login;
pub mod model;
pub mod notice;
pub mod store;
pub mod submission;

pub use filter::{CategoryFilter, LocationFilter, MemberQuery, ProblemQuery, SolutionQuery, SolutionView, TypeFilter};
pub use model::{Category, Problem, ProblemStatus, Solution, SolutionStatus, SolutionType};
pub use notice::{Notice, NoticeVariant, PendingFeature};
pub use store::{KeyValueStore, MemoryStore, StoreError};
