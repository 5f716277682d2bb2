use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    pub text: String,
    pub attrs: BTreeMap<String, String>,
    // Pre-rendered, already escaped HTML.
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Document {
    elements: BTreeMap<String, Element>,
    body_classes: BTreeSet<String>,
}

impl Document {
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elements: ids
                .into_iter()
                .map(|id| (id.into(), Element::default()))
                .collect(),
            body_classes: BTreeSet::new(),
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|el| el.text.as_str())
    }

    pub fn attr(&self, id: &str, name: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|el| el.attrs.get(name))
            .map(String::as_str)
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.elements
            .get(id)
            .map(|el| el.children.as_slice())
            .unwrap_or_default()
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn set_attr(&mut self, id: &str, name: &str, value: impl Into<String>) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.attrs.insert(name.to_string(), value.into());
                true
            }
            None => false,
        }
    }

    pub fn replace_children(&mut self, id: &str, children: Vec<String>) -> bool {
        match self.elements.get_mut(id) {
            Some(el) => {
                el.children = children;
                true
            }
            None => false,
        }
    }

    pub fn add_body_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_string());
    }

    pub fn remove_body_class(&mut self, class: &str) {
        self.body_classes.remove(class);
    }

    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub fn body_class(&self) -> String {
        self.body_classes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
