//! Turtle ontology document

use crate::config::VocabularyMetadata;
use crate::literal::{turtle_string, turtle_term};
use crate::term::Term;
use crate::vocab::TURTLE_PREFIXES;

/// Annotation properties used on the ontology node
const ANNOTATION_PROPERTIES: [&str; 4] = ["dc:created", "dc:creator", "dc:title", "dc:description"];

/// Serialize a vocabulary to a Turtle document
pub fn to_turtle(meta: &VocabularyMetadata, terms: &[Term]) -> String {
    let mut out = String::with_capacity(1024 + terms.len() * 256);

    out.push_str(&format!("@base {}.\n", turtle_term(&meta.base_uri)));
    out.push_str("@prefix : <#>.\n\n");
    for (prefix, iri) in TURTLE_PREFIXES {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, iri));
    }
    out.push('\n');

    let title = turtle_term(&meta.title);
    out.push_str("<> a owl:Ontology;\n");
    out.push_str(&format!("\tdc:created {};\n", turtle_term(&meta.timestamp)));
    out.push_str(&format!("\tdc:creator {};\n", creators(meta)));
    out.push_str(&format!("\trdfs:label {}@en;\n", title));
    out.push_str(&format!("\tdc:title {}@en;\n", title));
    out.push_str(&format!("\tdc:description {}.\n\n", turtle_term(&meta.description)));

    for property in ANNOTATION_PROPERTIES {
        out.push_str(&format!("{} a owl:AnnotationProperty.\n", property));
    }
    out.push('\n');

    for term in terms {
        out.push_str(&term.to_turtle());
        out.push_str("\n\n");
    }

    out
}

/// One blank node with a foaf:name per author; a single empty name when
/// the authors key is blank
fn creators(meta: &VocabularyMetadata) -> String {
    let mut names = meta.author_names();
    if names.is_empty() {
        names.push("");
    }
    names
        .into_iter()
        .map(|name| format!("[ foaf:name {} ]", turtle_string(name)))
        .collect::<Vec<_>>()
        .join(",\n    ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_meta() -> VocabularyMetadata {
        VocabularyMetadata {
            name: "ex".to_string(),
            base_uri: "http://example.org/ex".to_string(),
            timestamp: "2020-01-01".to_string(),
            title: "Ex".to_string(),
            description: "Example vocab".to_string(),
            authors: "A. One; B. Two".to_string(),
            terms_file: PathBuf::from("ex.terms"),
        }
    }

    #[test]
    fn test_header() {
        let ttl = to_turtle(&sample_meta(), &[]);
        assert!(ttl.starts_with("@base <http://example.org/ex>.\n@prefix : <#>.\n"));
        assert!(ttl.contains("@prefix foaf: <http://xmlns.com/foaf/0.1/> .\n"));
        assert!(ttl.contains("\tdc:created \"2020-01-01\";\n"));
        assert!(ttl.contains("\tdc:creator [ foaf:name \"A. One\" ],\n    [ foaf:name \"B. Two\" ];\n"));
        assert!(ttl.contains("\tdc:title \"Ex\"@en;\n"));
        assert!(ttl.contains("\tdc:description \"Example vocab\".\n"));
        assert!(ttl.contains("dc:creator a owl:AnnotationProperty.\n"));
    }

    #[test]
    fn test_one_declaration_per_term_in_order() {
        let terms = vec![
            Term::new("#foo", "Foo", "A foo term"),
            Term::new("#bar", "Bar", "A bar term").with_parent("#foo"),
            Term::new("#baz", "Baz", "A baz term"),
        ];
        let ttl = to_turtle(&sample_meta(), &terms);

        assert_eq!(ttl.matches("a rdf:Property").count(), 3);
        let foo = ttl.find("<#foo> a rdf:Property").unwrap();
        let bar = ttl.find("<#bar> a rdf:Property").unwrap();
        let baz = ttl.find("<#baz> a rdf:Property").unwrap();
        assert!(foo < bar && bar < baz);
        assert!(ttl.ends_with("rdfs:comment \"A baz term\".\n\n"));
    }

    #[test]
    fn test_blank_authors_keep_creator_valid() {
        for authors in ["", " ; ;"] {
            let mut meta = sample_meta();
            meta.authors = authors.to_string();
            let ttl = to_turtle(&meta, &[]);
            assert!(ttl.contains("\tdc:creator [ foaf:name \"\" ];\n"));
            assert!(!ttl.contains("dc:creator ;"));
        }
    }

    #[test]
    fn test_multiline_description_in_header() {
        let mut meta = sample_meta();
        meta.description = "Line one\nline two".to_string();
        let ttl = to_turtle(&meta, &[]);
        assert!(ttl.contains("dc:description \"\"\"Line one\nline two\"\"\"."));
    }
}
