//! Files written next to the release directories of a vocabulary
//!
//! `.htaccess` redirects requests for the vocabulary to the current
//! release based on the Accept header; `META.INF` is a short descriptor
//! picked up by the vocabulary index page.

use textwrap::Options;

use crate::config::VocabularyMetadata;
use crate::vocab::{Artifact, META_INF_WIDTH};

/// Render the content negotiation rules for the current release
///
/// Patterned after Recipe 3 of the W3C note "Best Practice Recipes for
/// Publishing RDF Vocabularies". HTML is the default when no Accept
/// condition matches.
pub fn to_htaccess(meta: &VocabularyMetadata) -> String {
    let redirect = |artifact: Artifact| {
        format!(
            "RewriteRule ^$ {}/{} [R=303]",
            meta.timestamp,
            artifact.file_name(&meta.name)
        )
    };

    format!(
        "# .htaccess for content negotiation

# This file is patterned after Recipe 3 in the W3C document 'Best
# Practice Recipes for Publishing RDF Vocabularies', at
# <http://www.w3.org/TR/swbp-vocab-pub/>

AddType application/rdf+xml .rdf
AddType text/turtle .ttl
AddCharset UTF-8 .ttl
AddCharset UTF-8 .html

RewriteEngine On
RewriteBase {base}/

RewriteCond %{{HTTP_ACCEPT}} application/rdf\\+xml
{rdf}

RewriteCond %{{HTTP_ACCEPT}} text/turtle
{turtle}

# No accept conditions: make the .html version the default
{html}
",
        base = meta.base_uri,
        rdf = redirect(Artifact::RdfXml),
        turtle = redirect(Artifact::Turtle),
        html = redirect(Artifact::Html),
    )
}

/// Render the two-part catalog descriptor: name line, then the wrapped
/// description
pub fn to_meta_inf(meta: &VocabularyMetadata) -> String {
    let description = meta.description.split_whitespace().collect::<Vec<_>>().join(" ");
    let options = Options::new(META_INF_WIDTH)
        .initial_indent("Description: ")
        .subsequent_indent("  ");
    format!(
        "Name: {}\n{}\n",
        meta.title,
        textwrap::fill(&description, options)
    )
}
