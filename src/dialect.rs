//! Marker dialects — the literal strings a given generator version emits.
//!
//! Two layouts exist in the wild: the legacy generator wrote upper-case
//! markup (`<P>`, `<A NAME="`), every later version writes lower-case markup
//! with a `<div class="block">` summary container. Nothing in between.

use regex::Regex;
use std::sync::LazyLock;

/// Leading `major[.minor]` of a free-form version string, e.g. "1.6" out of
/// "1.6.0_45" or "17.0" out of "17.0.2+8".
static RE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)?)").unwrap());

/// Version whose generator produced the legacy upper-case layout.
/// Also the fallback when a version string cannot be parsed at all.
pub const LEGACY_VERSION: &str = "1.6";

/// The set of literal markers used to locate regions in a documentation page.
///
/// Immutable; a provider selects one dialect at construction and every
/// extraction for that provider uses it. Reconfiguring means building a new
/// provider, not mutating a shared setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDialect {
    /// Opens the class-level summary block.
    pub class_info_tag: &'static str,
    /// Opens a method-level summary block.
    pub oper_info_tag: &'static str,
    /// Prefix of a method anchor; followed by `name(params)`.
    pub oper_link: &'static str,
    /// Opens the definition under a `Returns:` heading.
    pub response_tag: &'static str,
    /// Closes the `code` element naming a parameter in the parameter list.
    pub code_close_tag: &'static str,
}

impl TagDialect {
    /// Markers emitted by the legacy generator.
    pub fn legacy() -> Self {
        TagDialect {
            class_info_tag: "<P>",
            oper_info_tag: "<DD>",
            oper_link: "<A NAME=\"",
            response_tag: "<DD>",
            code_close_tag: "</CODE>",
        }
    }

    /// Markers emitted by every post-legacy generator.
    pub fn modern() -> Self {
        TagDialect {
            class_info_tag: "<div class=\"block\">",
            oper_info_tag: "<div class=\"block\">",
            oper_link: "<a name=\"",
            response_tag: "<dd>",
            code_close_tag: "</code>",
        }
    }

    /// Select the dialect for a generator version string.
    ///
    /// Exact equality of the leading `major.minor` with [`LEGACY_VERSION`]
    /// selects the legacy markers; any other parseable version is modern.
    /// An unparseable string falls back to [`LEGACY_VERSION`].
    pub fn resolve(version: &str) -> Self {
        let major_minor = RE_VERSION
            .captures(version)
            .map(|caps| caps[1].to_string())
            .unwrap_or_else(|| LEGACY_VERSION.to_string());
        if major_minor == LEGACY_VERSION {
            TagDialect::legacy()
        } else {
            TagDialect::modern()
        }
    }
}
