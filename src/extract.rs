//! Marker-based extraction over raw documentation text.
//!
//! Every function here is pure: text in, markers in, fragment out. There is
//! no HTML model — regions are delimited by literal substrings and the next
//! `<` character. A marker that is missing, or a region with no terminating
//! boundary, yields `None`; the caller treats both identically.

/// Section headings that do not vary between generator dialects.
pub const METHOD_SUMMARY: &str = "Method Summary";
pub const RETURNS_HEADING: &str = "Returns:";
pub const PARAMETERS_HEADING: &str = "Parameters:";

/// Locate the `Class Foo` / `Interface Foo` heading for a type.
///
/// Returns the end offset of the first occurrence, i.e. where scanning for
/// the class summary should start.
pub fn locate_class_block(text: &str, simple_name: &str, is_interface: bool) -> Option<usize> {
    let qualifier = if is_interface { "Interface" } else { "Class" };
    let marker = format!("{} {}", qualifier, simple_name);
    text.find(&marker).map(|idx| idx + marker.len())
}

/// Extract the trimmed text between `tag` and the next `<`, scanning from
/// `from`.
///
/// If `boundary_tag` occurs at or after `from` but strictly before `tag`,
/// the tagged text belongs to a later block and `None` is returned. `None`
/// also when `tag` is absent or no `<` follows it.
pub fn extract_delimited(
    text: &str,
    tag: &str,
    boundary_tag: &str,
    from: usize,
) -> Option<String> {
    let tag_idx = from + text.get(from..)?.find(tag)?;
    if let Some(boundary_idx) = text[from..].find(boundary_tag) {
        if from + boundary_idx < tag_idx {
            return None;
        }
    }
    let body_start = tag_idx + tag.len();
    let end = body_start + text[body_start..].find('<')?;
    Some(text[body_start..end].trim().to_string())
}

/// Locate the anchor of an operation by name and arity.
///
/// Scans every `anchor_prefix + method_name + "("` occurrence in order. An
/// empty parenthesized signature matches only arity 0; otherwise the
/// signature is split on `,` and the piece count must equal `param_count`.
/// The split is naive: a generic parameter type carrying commas inflates the
/// apparent arity, and overloads sharing an arity are indistinguishable —
/// the first occurrence that matches wins.
///
/// Returns the end offset of the matching anchor marker, i.e. the start of
/// that operation's section text.
pub fn locate_operation_anchor(
    text: &str,
    anchor_prefix: &str,
    method_name: &str,
    param_count: usize,
) -> Option<usize> {
    let marker = format!("{}{}(", anchor_prefix, method_name);
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find(&marker) {
        let marker_idx = search_from + rel;
        let sig_start = marker_idx + marker.len();
        let sig_end = sig_start + text[sig_start..].find(')')?;
        let signature = &text[sig_start..sig_end];
        let matched = if signature.is_empty() {
            param_count == 0
        } else {
            signature.split(',').count() == param_count
        };
        if matched {
            return Some(sig_start);
        }
        search_from = sig_start;
    }
    None
}

/// Extract the ordered parameter descriptions from an operation's
/// `Parameters:` region.
///
/// After each `code_close_tag` occurrence, the text up to the next `<` (or
/// end of region) is captured, trimmed, and stripped of one leading `-`.
/// Order follows the source; nothing ties a captured value to a declared
/// parameter name.
pub fn extract_parameter_docs(section: &str, code_close_tag: &str) -> Vec<String> {
    let mut docs = Vec::new();
    let mut idx = match section.find(code_close_tag) {
        Some(i) => i,
        None => return docs,
    };
    loop {
        let body_start = idx + code_close_tag.len();
        let end = match section[body_start..].find('<') {
            Some(rel) => body_start + rel,
            None => section.len(),
        };
        let mut value = section[body_start..end].trim();
        if let Some(rest) = value.strip_prefix('-') {
            value = rest.trim();
        }
        docs.push(value.to_string());
        if end == section.len() {
            break;
        }
        match section[end + 1..].find(code_close_tag) {
            Some(rel) => idx = end + 1 + rel,
            None => break,
        }
    }
    docs
}

/// Extract the return description from an operation's section text.
///
/// `Returns:` must be present and must precede the next operation anchor
/// (if any) — otherwise the heading belongs to a later operation and `None`
/// is returned. The description itself is the `response_tag`-delimited text
/// just past the heading.
pub fn extract_return_doc(
    section: &str,
    response_tag: &str,
    anchor_prefix: &str,
) -> Option<String> {
    let returns_idx = section.get(anchor_prefix.len()..)?.find(RETURNS_HEADING)? + anchor_prefix.len();
    if let Some(next_op) = section.find(anchor_prefix) {
        if next_op < returns_idx {
            return None;
        }
    }
    extract_delimited(
        section,
        response_tag,
        anchor_prefix,
        returns_idx + RETURNS_HEADING.len(),
    )
}
