//! docscrape — pull human-authored documentation out of generated
//! API-reference HTML pages.
//!
//! Reference generators emit one HTML page per class with a well-known
//! layout: a `Class Foo` / `Interface Foo` heading, a summary block, and one
//! anchored section per method. This crate locates those regions with literal
//! string markers (no HTML parsing) and hands back cleaned fragments: class
//! summary, method summary, per-parameter descriptions, return description.
//!
//! The entry point is [`DocProvider`], which resolves a type descriptor to a
//! resource path, loads the page once through a [`ResourceLoader`], and
//! memoizes extracted bundles per class and per operation. Every failure —
//! missing page, missing marker, malformed region — degrades to `None`;
//! callers never see an error.

mod cache;
mod descriptor;
mod dialect;
mod extract;
mod loader;
mod provider;

pub use descriptor::{OperationDescriptor, OperationKey, TypeDescriptor};
pub use dialect::{TagDialect, LEGACY_VERSION};
pub use loader::{DirLoader, ResourceLoader};
pub use provider::DocProvider;
