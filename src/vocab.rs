//! Fixed names used in generated vocabulary artifacts
//!
//! Namespaces, mandatory configuration keys and the file names that make
//! up a published vocabulary release.

/// Dublin Core terms namespace
pub const DC_NS: &str = "http://purl.org/dc/terms/";

/// RDF Schema namespace
pub const RDFS_NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

/// OWL namespace
pub const OWL_NS: &str = "http://www.w3.org/2002/07/owl#";

/// XML Schema datatypes namespace
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// RDF namespace
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// FOAF namespace (used for creator names)
pub const FOAF_NS: &str = "http://xmlns.com/foaf/0.1/";

/// Prefix declarations written at the top of every Turtle document, in order
pub const TURTLE_PREFIXES: &[(&str, &str)] = &[
    ("dc", DC_NS),
    ("rdfs", RDFS_NS),
    ("owl", OWL_NS),
    ("xsd", XSD_NS),
    ("rdf", RDF_NS),
    ("foaf", FOAF_NS),
];

/// Keys every vocabulary section must define
pub const MANDATORY_KEYS: [&str; 5] = ["baseuri", "timestamp", "title", "description", "authors"];

/// Extension of the per-vocabulary terms file (`<name>.terms`)
pub const TERMS_EXTENSION: &str = "terms";

/// Delimiter between columns of a terms file
pub const TERMS_DELIMITER: u8 = b';';

/// Separator between names in the `authors` key
pub const AUTHOR_SEPARATOR: char = ';';

/// The official root under which vocabularies are installed
pub const DEFAULT_INSTALL_ROOT: &str = "http://www.ivoa.net/std/rdf/";

/// Content negotiation rules file, written next to the release directories
pub const HTACCESS_FILE: &str = ".htaccess";

/// Short catalog descriptor, written next to the release directories
pub const META_INF_FILE: &str = "META.INF";

/// Prefix of the HTML page title and heading
pub const HTML_TITLE_PREFIX: &str = "IVOA Vocabulary: ";

/// Column width used when wrapping the META.INF description
pub const META_INF_WIDTH: usize = 70;

/// Release artifact kinds written into `<name>/<timestamp>/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Turtle,
    RdfXml,
    Html,
}

impl Artifact {
    /// File extension of the artifact
    pub fn extension(self) -> &'static str {
        match self {
            Artifact::Turtle => "ttl",
            Artifact::RdfXml => "rdf",
            Artifact::Html => "html",
        }
    }

    /// File name of the artifact for a vocabulary
    pub fn file_name(self, vocab_name: &str) -> String {
        format!("{}.{}", vocab_name, self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_file_names() {
        assert_eq!(Artifact::Turtle.file_name("ex"), "ex.ttl");
        assert_eq!(Artifact::RdfXml.file_name("ex"), "ex.rdf");
        assert_eq!(Artifact::Html.file_name("ex"), "ex.html");
    }

    #[test]
    fn test_prefixes_cover_namespaces() {
        let names: Vec<&str> = TURTLE_PREFIXES.iter().map(|(p, _)| *p).collect();
        assert_eq!(names, vec!["dc", "rdfs", "owl", "xsd", "rdf", "foaf"]);
    }
}
