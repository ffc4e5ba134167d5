//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (filter criteria, form drafts,
//! tab selection) and delegates rendering details to `components`. Catalog
//! data and rules come from the `catalog` crate.

pub mod admin;
pub mod dashboard;
pub mod explore;
pub mod login;
pub mod problem_details;
pub mod profile;
pub mod solutions;
pub mod submit;
