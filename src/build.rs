//! Vocabulary build orchestration
//!
//! For every configured vocabulary, in configuration order:
//!
//! 1. Parse its terms file
//! 2. Write `<name>.ttl`, `<name>.rdf` and `<name>.html` into
//!    `<output>/<name>/<timestamp>/`
//! 3. Write `.htaccess` and `META.INF` into `<output>/<name>/`
//!
//! The first error aborts the whole run. Files written before the error
//! stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::config::{read_meta, VocabularyMetadata};
use crate::convert::FormatConverter;
use crate::error::BuildError;
use crate::html::to_html;
use crate::ontology::to_turtle;
use crate::parse::parse_terms_file;
use crate::publish::{to_htaccess, to_meta_inf};
use crate::term::Term;
use crate::vocab::{Artifact, DEFAULT_INSTALL_ROOT, HTACCESS_FILE, META_INF_FILE};

/// Options for a build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory receiving one subdirectory per vocabulary
    pub output_dir: PathBuf,
    /// URI of the directory the vocabularies are installed under, ending in '/'
    pub install_root: String,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            install_root: DEFAULT_INSTALL_ROOT.to_string(),
        }
    }
}

/// Files produced for one vocabulary
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyOutputs {
    /// `<output>/<name>`
    pub vocab_dir: PathBuf,
    /// `<output>/<name>/<timestamp>`
    pub release_dir: PathBuf,
    pub turtle: PathBuf,
    pub rdf_xml: PathBuf,
    pub html: PathBuf,
    pub htaccess: PathBuf,
    pub meta_inf: PathBuf,
}

impl VocabularyOutputs {
    /// Output locations for a vocabulary below `output_dir`
    pub fn new(meta: &VocabularyMetadata, output_dir: &Path) -> Self {
        let vocab_dir = output_dir.join(&meta.name);
        let release_dir = vocab_dir.join(&meta.timestamp);
        Self {
            turtle: release_dir.join(Artifact::Turtle.file_name(&meta.name)),
            rdf_xml: release_dir.join(Artifact::RdfXml.file_name(&meta.name)),
            html: release_dir.join(Artifact::Html.file_name(&meta.name)),
            htaccess: vocab_dir.join(HTACCESS_FILE),
            meta_inf: vocab_dir.join(META_INF_FILE),
            vocab_dir,
            release_dir,
        }
    }
}

/// A vocabulary ready to be written
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyPlan {
    pub meta: VocabularyMetadata,
    /// Where the vocabulary will be served from
    pub install_uri: String,
    pub terms: Vec<Term>,
    pub outputs: VocabularyOutputs,
}

/// Statistics from a build
#[derive(Debug, Default)]
pub struct BuildStats {
    /// Number of vocabularies written
    pub vocabularies: usize,
    /// Number of terms written, over all vocabularies
    pub terms: usize,
}

/// Check an install root URI, appending a trailing '/' if missing
///
/// Only the official root is supported: the `.htaccess` rewrite base is
/// taken from each vocabulary's base URI, which is tied to that root.
pub fn normalize_install_root(uri: &str) -> Result<String, BuildError> {
    let root = if uri.ends_with('/') {
        uri.to_string()
    } else {
        format!("{}/", uri)
    };
    Url::parse(&root).map_err(|source| BuildError::InvalidInstallRoot {
        uri: uri.to_string(),
        source,
    })?;
    if root != DEFAULT_INSTALL_ROOT {
        return Err(BuildError::UnsupportedInstallRoot(root));
    }
    Ok(root)
}

/// Load the configuration and parse every terms file without writing
/// anything
pub fn plan(config: &Path, options: &BuildOptions) -> Result<Vec<VocabularyPlan>, BuildError> {
    let root = Url::parse(&options.install_root).map_err(|source| {
        BuildError::InvalidInstallRoot {
            uri: options.install_root.clone(),
            source,
        }
    })?;

    let mut plans = Vec::new();
    for meta in read_meta(config)? {
        let terms = parse_terms_file(&meta.terms_file)?;
        let install_uri = root
            .join(&format!("{}/", meta.name))
            .map_err(|source| BuildError::InvalidInstallRoot {
                uri: options.install_root.clone(),
                source,
            })?
            .to_string();
        let outputs = VocabularyOutputs::new(&meta, &options.output_dir);
        plans.push(VocabularyPlan {
            meta,
            install_uri,
            terms,
            outputs,
        });
    }
    Ok(plans)
}

/// Build every vocabulary of a configuration file
pub fn build_all(
    config: &Path,
    options: &BuildOptions,
    converter: &dyn FormatConverter,
) -> Result<BuildStats, BuildError> {
    let mut stats = BuildStats::default();

    for meta in read_meta(config)? {
        let terms = parse_terms_file(&meta.terms_file)?;
        build_vocab(&meta, &terms, options, converter)?;
        stats.vocabularies += 1;
        stats.terms += terms.len();
    }

    Ok(stats)
}

/// Write all files of one vocabulary
pub fn build_vocab(
    meta: &VocabularyMetadata,
    terms: &[Term],
    options: &BuildOptions,
    converter: &dyn FormatConverter,
) -> Result<VocabularyOutputs, BuildError> {
    let outputs = VocabularyOutputs::new(meta, &options.output_dir);
    info!(
        vocabulary = %meta.name,
        terms = terms.len(),
        dir = %outputs.release_dir.display(),
        "building vocabulary"
    );

    fs::create_dir_all(&outputs.release_dir)?;

    write_file(&outputs.turtle, &to_turtle(meta, terms))?;
    converter.convert(&outputs.turtle, &outputs.rdf_xml)?;
    write_file(&outputs.html, &to_html(meta, terms))?;

    write_file(&outputs.htaccess, &to_htaccess(meta))?;
    write_file(&outputs.meta_inf, &to_meta_inf(meta))?;

    Ok(outputs)
}

/// Serialize build plans to a JSON string
pub fn to_json_string(plans: &[VocabularyPlan], pretty: bool) -> Result<String, BuildError> {
    if pretty {
        Ok(serde_json::to_string_pretty(plans)?)
    } else {
        Ok(serde_json::to_string(plans)?)
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    fs::write(path, content)?;
    debug!(file = %path.display(), bytes = content.len(), "wrote");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::SkipConversion;

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
    fn test_output_layout() {
        let outputs = VocabularyOutputs::new(&sample_meta(), Path::new("out"));
        assert_eq!(outputs.release_dir, Path::new("out/ex/2020-01-01"));
        assert_eq!(outputs.turtle, Path::new("out/ex/2020-01-01/ex.ttl"));
        assert_eq!(outputs.rdf_xml, Path::new("out/ex/2020-01-01/ex.rdf"));
        assert_eq!(outputs.html, Path::new("out/ex/2020-01-01/ex.html"));
        assert_eq!(outputs.htaccess, Path::new("out/ex/.htaccess"));
        assert_eq!(outputs.meta_inf, Path::new("out/ex/META.INF"));
    }

    #[test]
    fn test_normalize_install_root() {
        assert_eq!(
            normalize_install_root("http://www.ivoa.net/std/rdf").unwrap(),
            DEFAULT_INSTALL_ROOT
        );
        assert_eq!(
            normalize_install_root(DEFAULT_INSTALL_ROOT).unwrap(),
            DEFAULT_INSTALL_ROOT
        );
    }

    #[test]
    fn test_other_install_roots_rejected() {
        let err = normalize_install_root("http://localhost/rdf").unwrap_err();
        assert!(matches!(err, BuildError::UnsupportedInstallRoot(ref r) if r == "http://localhost/rdf/"));
        assert!(err.is_reportable());

        let err = normalize_install_root("not a uri").unwrap_err();
        assert!(matches!(err, BuildError::InvalidInstallRoot { .. }));
    }

    #[test]
    fn test_build_vocab_writes_all_files() {
        let dir = tempfile::tempdir().unwrap();
        let options = BuildOptions {
            output_dir: dir.path().to_path_buf(),
            ..BuildOptions::default()
        };
        let terms = vec![Term::new("#foo", "Foo", "A foo term")];

        let outputs = build_vocab(&sample_meta(), &terms, &options, &SkipConversion).unwrap();

        assert!(outputs.turtle.is_file());
        assert!(outputs.html.is_file());
        assert!(outputs.htaccess.is_file());
        assert!(outputs.meta_inf.is_file());
        assert!(!outputs.rdf_xml.exists());
        let ttl = fs::read_to_string(&outputs.turtle).unwrap();
        assert!(ttl.contains("<#foo> a rdf:Property"));
    }

    #[test]
    fn test_to_json_string() {
        let plan = VocabularyPlan {
            meta: sample_meta(),
            install_uri: "http://www.ivoa.net/std/rdf/ex/".to_string(),
            terms: vec![Term::new("#foo", "Foo", "A foo term")],
            outputs: VocabularyOutputs::new(&sample_meta(), Path::new("out")),
        };
        let json = to_json_string(&[plan], false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["meta"]["name"], "ex");
        assert_eq!(value[0]["terms"][0]["predicate"], "#foo");
        assert!(value[0]["terms"][0].get("parent").is_none());
    }
}
