// src/core/html.rs

// Thin helpers over `scraper` for walking ccmadmin pages.
// The HTML5 tree builder lowercases tag and attribute names, closes implied end
// tags and keeps `<script>`/`<style>` bodies as raw text. Attribute values compare exactly.

use scraper::{ElementRef, Html};

pub fn parse(doc: &str) -> Html {
    Html::parse_document(doc)
}

/// Every element of the document, in document order.
pub fn elements(doc: &Html) -> impl Iterator<Item = ElementRef<'_>> {
    descendants(doc.root_element())
}

/// Every element below `el` (not `el` itself), in document order.
pub fn descendants(el: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    el.descendants().skip(1).filter_map(ElementRef::wrap)
}

pub fn is_tag(el: &ElementRef<'_>, name: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(name)
}

pub fn is_any_tag(el: &ElementRef<'_>, names: &[&str]) -> bool {
    names.iter().any(|n| is_tag(el, n))
}

/// Attribute value; `None` when absent, `Some("")` for a bare attribute.
pub fn attr<'a>(el: &ElementRef<'a>, key: &str) -> Option<&'a str> {
    el.value().attr(&key.to_ascii_lowercase())
}

/// True when any class token contains `needle`.
pub fn has_class_containing(el: &ElementRef<'_>, needle: &str) -> bool {
    el.value().classes().any(|token| token.contains(needle))
}

/// Text content, surrounding whitespace trimmed. Entities are already decoded.
pub fn text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
