//! Two-level memoization for extracted documentation.
//!
//! Resource path → class bundle, operation key → method bundle. Both levels
//! are insert-if-absent: racing builders may each run the full extraction,
//! the first insert is retained and handed to everyone. That is safe because
//! extraction is a pure function of immutable text, so the discarded value
//! was equal anyway. Entries are never replaced or evicted; the
//! documentation source is assumed static for the life of the process.

use crate::descriptor::OperationKey;
use dashmap::DashMap;
use std::sync::Arc;

/// Extracted documentation for one class page.
#[derive(Debug)]
pub struct ClassDocs {
    /// The whole raw page, kept for on-demand method extraction.
    raw: String,
    summary: Option<String>,
    methods: DashMap<OperationKey, Arc<MethodDocs>>,
}

impl ClassDocs {
    pub fn new(raw: String, summary: Option<String>) -> Self {
        ClassDocs {
            raw,
            summary,
            methods: DashMap::new(),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn method(&self, key: &OperationKey) -> Option<Arc<MethodDocs>> {
        self.methods.get(key).map(|entry| Arc::clone(&entry))
    }

    /// Insert-if-absent; returns the retained bundle, which is `docs` unless
    /// a racing insert landed first.
    pub fn insert_method(&self, key: OperationKey, docs: MethodDocs) -> Arc<MethodDocs> {
        let entry = self.methods.entry(key).or_insert_with(|| Arc::new(docs));
        Arc::clone(&entry)
    }
}

/// Extracted documentation for one operation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDocs {
    pub summary: Option<String>,
    pub param_docs: Vec<String>,
    pub return_doc: Option<String>,
}

/// The process-wide class-level cache, keyed by documentation resource path.
#[derive(Debug, Default)]
pub struct DocCache {
    classes: DashMap<String, Arc<ClassDocs>>,
}

impl DocCache {
    pub fn new() -> Self {
        DocCache::default()
    }

    pub fn class(&self, resource_path: &str) -> Option<Arc<ClassDocs>> {
        self.classes
            .get(resource_path)
            .map(|entry| Arc::clone(&entry))
    }

    /// Insert-if-absent; returns the retained bundle.
    pub fn insert_class(&self, resource_path: String, docs: ClassDocs) -> Arc<ClassDocs> {
        let entry = self
            .classes
            .entry(resource_path)
            .or_insert_with(|| Arc::new(docs));
        Arc::clone(&entry)
    }
}
