//! Vocabulary terms and their per-term serializations

use serde::Serialize;

use crate::id::fragment_name;
use crate::literal::{escape_html, turtle_term};

/// One predicate definition of a vocabulary
///
/// `parent` and `synonym` refer to other terms by their (normalized)
/// predicate; they are never resolved to the referenced term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    /// "#name" for local terms, or an absolute URI
    pub predicate: String,
    pub label: String,
    pub description: String,
    /// The more general term, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// The preferred term this one is deprecated in favor of
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonym: Option<String>,
}

impl Term {
    pub fn new(
        predicate: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            predicate: predicate.into(),
            label: label.into(),
            description: description.into(),
            parent: None,
            synonym: None,
        }
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_synonym(mut self, synonym: impl Into<String>) -> Self {
        self.synonym = Some(synonym.into());
        self
    }

    /// Name shown in the predicate column: the fragment without '#',
    /// or the full URI
    pub fn display_name(&self) -> &str {
        fragment_name(&self.predicate).unwrap_or(&self.predicate)
    }

    /// Turtle property declaration for this term, terminated by '.'
    pub fn to_turtle(&self) -> String {
        let mut clauses = vec![
            format!("{} a rdf:Property", turtle_term(&self.predicate)),
            format!("rdfs:label {}", turtle_term(&self.label)),
            format!("rdfs:comment {}", turtle_term(&self.description)),
        ];

        if let Some(parent) = &self.parent {
            clauses.push(format!("rdfs:subPropertyOf {}", turtle_term(parent)));
        }

        if let Some(synonym) = &self.synonym {
            clauses.push(format!("owl:equivalentProperty {}", turtle_term(synonym)));
            clauses.push("a owl:DeprecatedProperty".to_string());
        }

        format!("{}.", clauses.join(";\n  "))
    }

    /// HTML table row: predicate, label, description, parent, preferred
    pub fn to_html_row(&self) -> String {
        let mut row = String::new();
        match fragment_name(&self.predicate) {
            Some(anchor) => row.push_str(&format!("<tr id=\"{}\">", escape_html(anchor))),
            None => row.push_str("<tr>"),
        }
        row.push_str(&html_cell("predicate", &escape_html(self.display_name())));
        row.push_str(&html_cell("label", &escape_html(&self.label)));
        row.push_str(&html_cell("description", &escape_html(&self.description)));
        row.push_str(&html_cell("parent", &html_reference(self.parent.as_deref())));
        row.push_str(&html_cell("preferred", &html_reference(self.synonym.as_deref())));
        row.push_str("</tr>");
        row
    }
}

fn html_cell(class: &str, content: &str) -> String {
    format!("<td class=\"{}\">{}</td>", class, content)
}

/// Local references link to the row of the referenced term
fn html_reference(reference: Option<&str>) -> String {
    match reference {
        None => String::new(),
        Some(r) => match fragment_name(r) {
            Some(_) => format!("<a href=\"{0}\">{0}</a>", escape_html(r)),
            None => escape_html(r),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_term_turtle() {
        let term = Term::new("#foo", "Foo", "A foo term");
        assert_eq!(
            term.to_turtle(),
            "<#foo> a rdf:Property;\n  rdfs:label \"Foo\";\n  rdfs:comment \"A foo term\"."
        );
    }

    #[test]
    fn test_child_and_deprecated_turtle() {
        let term = Term::new("#bar", "Bar", "A bar term")
            .with_parent("#foo")
            .with_synonym("#baz");
        let ttl = term.to_turtle();
        assert!(ttl.contains("rdfs:subPropertyOf <#foo>"));
        assert!(ttl.contains("owl:equivalentProperty <#baz>"));
        assert!(ttl.ends_with("a owl:DeprecatedProperty."));
    }

    #[test]
    fn test_absolute_predicate_turtle() {
        let term = Term::new("http://example.org/other#x", "X", "An x");
        assert!(term
            .to_turtle()
            .starts_with("<http://example.org/other#x> a rdf:Property"));
        assert_eq!(term.display_name(), "http://example.org/other#x");
    }

    #[test]
    fn test_multiline_description_turtle() {
        let term = Term::new("#foo", "Foo", "first\nsecond");
        assert!(term.to_turtle().contains("rdfs:comment \"\"\"first\nsecond\"\"\""));
    }

    #[test]
    fn test_html_row_columns() {
        let term = Term::new("#bar", "Bar", "Less <than> & more").with_parent("#foo");
        assert_eq!(
            term.to_html_row(),
            "<tr id=\"bar\"><td class=\"predicate\">bar</td>\
             <td class=\"label\">Bar</td>\
             <td class=\"description\">Less &lt;than&gt; &amp; more</td>\
             <td class=\"parent\"><a href=\"#foo\">#foo</a></td>\
             <td class=\"preferred\"></td></tr>"
        );
    }

    #[test]
    fn test_html_row_external_synonym_not_linked() {
        let term = Term::new("#old", "Old", "Old term").with_synonym("http://example.org/new");
        let row = term.to_html_row();
        assert!(row.contains("<td class=\"preferred\">http://example.org/new</td>"));
    }
}
