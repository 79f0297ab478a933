//! Vocabulary Build Library
//!
//! This library turns a small INI configuration and one terms file per
//! vocabulary into the static files needed to publish the vocabulary on a
//! web server.
//!
//! # Overview
//!
//! A vocabulary is a flat, depth-first list of terms where each row states
//! its own nesting level. Building a vocabulary:
//!
//! 1. Reads the vocabulary metadata from its configuration section
//! 2. Rebuilds the term hierarchy from the levels in the terms file
//! 3. Writes a Turtle ontology, an RDF/XML conversion of it and an HTML
//!    page into a directory named after the release timestamp
//! 4. Writes `.htaccess` content negotiation rules and a `META.INF`
//!    descriptor next to the release directories
//!
//! # Output layout
//!
//! ```text
//! <vocab-name>/.htaccess
//! <vocab-name>/META.INF
//! <vocab-name>/<timestamp>/<vocab-name>.ttl
//! <vocab-name>/<timestamp>/<vocab-name>.rdf
//! <vocab-name>/<timestamp>/<vocab-name>.html
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use vocab_build::{build_all, BuildOptions, RapperConverter};
//!
//! let stats = build_all(
//!     Path::new("vocabs.conf"),
//!     &BuildOptions::default(),
//!     &RapperConverter::default(),
//! )?;
//! println!("{} vocabularies written", stats.vocabularies);
//! ```

pub mod build;
pub mod config;
pub mod convert;
pub mod error;
pub mod html;
pub mod id;
pub mod literal;
pub mod logging;
pub mod ontology;
pub mod parse;
pub mod publish;
pub mod term;
pub mod vocab;

// Re-export main types for convenience
pub use crate::build::{
    build_all, build_vocab, normalize_install_root, plan, to_json_string, BuildOptions,
    BuildStats, VocabularyOutputs, VocabularyPlan,
};
pub use crate::config::{read_meta, VocabularyMetadata};
pub use crate::convert::{FormatConverter, RapperConverter, SkipConversion, DEFAULT_CONVERTER};
pub use crate::error::{BuildError, TermsError};
pub use crate::parse::{parse_terms, parse_terms_file};
pub use crate::term::Term;
pub use crate::vocab::DEFAULT_INSTALL_ROOT;
