//! The public provider — descriptor in, documentation fragment out.
//!
//! Wires the resource loader, the marker dialect, and the two-level cache
//! together. Every failure on the way — unresolvable page, load error,
//! missing marker — degrades to `None`; nothing is retried eagerly, but a
//! failed attempt stores no cache entry, so a later query attempts the load
//! again.

use crate::cache::{ClassDocs, DocCache, MethodDocs};
use crate::descriptor::{OperationDescriptor, TypeDescriptor};
use crate::dialect::TagDialect;
use crate::extract;
use crate::loader::ResourceLoader;
use std::sync::Arc;
use tracing::debug;

pub struct DocProvider {
    loader: Box<dyn ResourceLoader>,
    dialect: TagDialect,
    cache: DocCache,
}

impl DocProvider {
    /// Provider for pages produced by a current-generation generator.
    pub fn new(loader: Box<dyn ResourceLoader>) -> Self {
        DocProvider {
            loader,
            dialect: TagDialect::modern(),
            cache: DocCache::new(),
        }
    }

    /// Provider for pages produced by the given generator version.
    ///
    /// The dialect is fixed for the life of the provider; pages built by a
    /// different generator version need a separate provider instance.
    pub fn with_generator_version(loader: Box<dyn ResourceLoader>, version: &str) -> Self {
        DocProvider {
            loader,
            dialect: TagDialect::resolve(version),
            cache: DocCache::new(),
        }
    }

    /// The class-level summary paragraph.
    pub fn class_doc(&self, class: &TypeDescriptor) -> Option<String> {
        self.class_docs(class)
            .and_then(|docs| docs.summary().map(str::to_string))
    }

    /// The summary paragraph of one operation.
    pub fn method_doc(
        &self,
        class: &TypeDescriptor,
        operation: &OperationDescriptor,
    ) -> Option<String> {
        self.method_docs(class, operation)
            .and_then(|docs| docs.summary.clone())
    }

    /// The `Returns:` description of one operation.
    pub fn method_response_doc(
        &self,
        class: &TypeDescriptor,
        operation: &OperationDescriptor,
    ) -> Option<String> {
        self.method_docs(class, operation)
            .and_then(|docs| docs.return_doc.clone())
    }

    /// The description of one parameter, by position. Positions follow the
    /// source order of the `Parameters:` list, not declared names; an index
    /// past the extracted list is absence.
    pub fn method_param_doc(
        &self,
        class: &TypeDescriptor,
        operation: &OperationDescriptor,
        param_index: usize,
    ) -> Option<String> {
        self.method_docs(class, operation)
            .and_then(|docs| docs.param_docs.get(param_index).cloned())
    }

    /// Fetch or build the class bundle. Cached only when the page loaded and
    /// its `Class`/`Interface` heading was found.
    fn class_docs(&self, class: &TypeDescriptor) -> Option<Arc<ClassDocs>> {
        let documented = documented_type(class);
        let resource = format!("{}.html", documented.qualified_name.replace('.', "/"));
        if let Some(docs) = self.cache.class(&resource) {
            return Some(docs);
        }
        let raw = match self.loader.load(&resource) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(resource = %resource, "documentation page not found");
                return None;
            }
            Err(err) => {
                debug!(resource = %resource, error = %err, "documentation page failed to load");
                return None;
            }
        };
        let block_end =
            extract::locate_class_block(&raw, &documented.simple_name, documented.is_interface)?;
        let summary = extract::extract_delimited(
            &raw,
            self.dialect.class_info_tag,
            extract::METHOD_SUMMARY,
            block_end,
        );
        Some(self.cache.insert_class(resource, ClassDocs::new(raw, summary)))
    }

    /// Fetch or build the method bundle. Cached only when an anchor matching
    /// the operation's name and arity was found.
    fn method_docs(
        &self,
        class: &TypeDescriptor,
        operation: &OperationDescriptor,
    ) -> Option<Arc<MethodDocs>> {
        let class_docs = self.class_docs(class)?;
        let key = operation.key();
        if let Some(docs) = class_docs.method(&key) {
            return Some(docs);
        }

        let anchor_end = extract::locate_operation_anchor(
            class_docs.raw(),
            self.dialect.oper_link,
            &operation.name,
            operation.param_types.len(),
        )?;
        let section = &class_docs.raw()[anchor_end..];

        let summary = extract::extract_delimited(
            section,
            self.dialect.oper_info_tag,
            self.dialect.oper_link,
            0,
        );
        let mut param_docs = Vec::new();
        let mut return_doc = None;
        // Parameters/Returns are only filled in under a non-empty summary;
        // without one the section is most likely inherited boilerplate.
        if summary.as_deref().is_some_and(|s| !s.is_empty()) {
            return_doc = extract::extract_return_doc(
                section,
                self.dialect.response_tag,
                self.dialect.oper_link,
            );
            param_docs = self.parameter_docs(section);
        }

        let docs = MethodDocs {
            summary,
            param_docs,
            return_doc,
        };
        Some(class_docs.insert_method(key, docs))
    }

    /// Delimit the `Parameters:` region of a section and extract from it.
    /// The region runs to the `Returns:` heading when one follows, else to
    /// the end of the section, and must precede the next operation anchor.
    fn parameter_docs(&self, section: &str) -> Vec<String> {
        let next_op = section.find(self.dialect.oper_link);
        let Some(params_idx) = section.find(extract::PARAMETERS_HEADING) else {
            return Vec::new();
        };
        if next_op.is_some_and(|op| params_idx > op) {
            return Vec::new();
        }
        let returns_idx = section
            .get(self.dialect.oper_link.len()..)
            .and_then(|rest| rest.find(extract::RETURNS_HEADING))
            .map(|idx| idx + self.dialect.oper_link.len());
        let region_end = match returns_idx {
            Some(idx) if idx >= params_idx => idx,
            // Returns: before Parameters: is malformed; run to the end
            Some(_) => section.len(),
            None => section.len(),
        };
        extract::extract_parameter_docs(&section[params_idx..region_end], self.dialect.code_close_tag)
    }
}

/// The type the generated page was written for: the type itself when it
/// carries the route marker, else its direct superclass when that does, else
/// the first directly implemented interface that does, else the type itself.
fn documented_type(class: &TypeDescriptor) -> &TypeDescriptor {
    if class.has_route_marker {
        return class;
    }
    if let Some(superclass) = class.superclass.as_deref() {
        if superclass.has_route_marker {
            return superclass;
        }
    }
    class
        .interfaces
        .iter()
        .find(|itf| itf.has_route_marker)
        .unwrap_or(class)
}
