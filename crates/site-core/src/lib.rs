//! # site-core
//!
//! Pure logic behind the restaurant-operations marketing site: the ROI
//! calculator on the pricing page and the template catalog used for design
//! review.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  roi       RawRoiInputs ─validate─▶ RoiInputs ─calculate─▶   │
//! │            RoiOutputs ─summary─▶ RoiSummary                  │
//! ├──────────────────────────────────────────────────────────────┤
//! │  catalog   Catalog<R, P> ─filter─▶ ─sort─▶ Vec<&Entry>       │
//! │                          └─count_by_category─▶ tab counts    │
//! ├──────────────────────────────────────────────────────────────┤
//! │  content   per-industry copy passed into sections            │
//! │  plans     published subscription tiers                      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here performs I/O or logs; rendering and analytics belong to the
//! caller.

pub mod catalog;
pub mod content;
pub mod error;
pub mod plans;
pub mod roi;

pub use catalog::{Catalog, CatalogEntry, CatalogQuery, Category, CategoryFilter, SortKey};
pub use content::{Industry, IndustryContent};
pub use error::{Result, SiteError};
pub use plans::{plans, Plan};
pub use roi::{calculate, validate, RawRoiInputs, RoiInputs, RoiOutputs};
