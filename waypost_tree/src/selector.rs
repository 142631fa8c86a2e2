// Copyright 2025 the Waypost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A deliberately tiny selector language: `#id`, `.class`, `tag`, `[attr]`, `[attr="value"]`.

use alloc::string::{String, ToString};

use crate::dom::Dom;
use crate::types::ElementId;

/// A single simple selector.
///
/// ```
/// use waypost_tree::Selector;
///
/// assert_eq!(Selector::parse("#main-nav"), Some(Selector::Id("main-nav".into())));
/// assert_eq!(
///     Selector::parse("[role=\"menubar\"]"),
///     Some(Selector::Attribute { name: "role".into(), value: Some("menubar".into()) }),
/// );
/// assert_eq!(Selector::parse(""), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Matches the element whose `id` attribute equals the value.
    Id(String),
    /// Matches elements carrying the class.
    Class(String),
    /// Matches elements by (case-insensitive) tag name.
    Tag(String),
    /// Matches elements that carry `name`, optionally with an exact value.
    Attribute {
        /// Attribute name.
        name: String,
        /// Required value, if any.
        value: Option<String>,
    },
}

impl Selector {
    /// Parse a selector, returning `None` for empty or unsupported input.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if let Some(id) = input.strip_prefix('#') {
            return is_ident(id).then(|| Self::Id(id.to_string()));
        }
        if let Some(class) = input.strip_prefix('.') {
            return is_ident(class).then(|| Self::Class(class.to_string()));
        }
        if let Some(body) = input.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            return match body.split_once('=') {
                None => is_ident(body).then(|| Self::Attribute {
                    name: body.to_string(),
                    value: None,
                }),
                Some((name, value)) => {
                    let value = value.trim_matches(|c| c == '"' || c == '\'');
                    is_ident(name).then(|| Self::Attribute {
                        name: name.to_string(),
                        value: Some(value.to_string()),
                    })
                }
            };
        }
        is_ident(input).then(|| Self::Tag(input.to_ascii_lowercase()))
    }

    /// Whether `el` matches this selector.
    pub fn matches<D: Dom + ?Sized>(&self, dom: &D, el: ElementId) -> bool {
        match self {
            Self::Id(id) => dom.attribute(el, "id").as_deref() == Some(id.as_str()),
            Self::Class(class) => dom.has_class(el, class),
            Self::Tag(tag) => dom
                .tag_name(el)
                .is_some_and(|t| t.eq_ignore_ascii_case(tag)),
            Self::Attribute { name, value } => match (dom.attribute(el, name), value) {
                (Some(_), None) => true,
                (Some(actual), Some(expected)) => actual == *expected,
                (None, _) => false,
            },
        }
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
