//! HTML documentation page

use crate::config::VocabularyMetadata;
use crate::literal::escape_html;
use crate::term::Term;
use crate::vocab::{Artifact, HTML_TITLE_PREFIX};

const CSS_STYLE: &str = "
html {
\tfont-family: sans;
}

h1 {
\tmargin-bottom: 3ex;
\tborder-bottom: 2pt solid #ccc;
}

tr {
\tpadding-top: 2pt;
\tpadding-bottom: 2pt;
\tborder-bottom: 1pt solid #ccc;
}

thead tr {
\tborder-top: 1pt solid black;
\tborder-bottom: 1pt solid black;
}

th {
\tpadding: 4pt;
}

.intro {
\tmax-width: 30em;
\tmargin-bottom: 5ex;
\tmargin-left: 2ex;
}

.outro {
\tmax-width: 30em;
\tmargin-top: 4ex;
}

table {
\tborder-collapse: collapse;
\tborder-bottom: 1pt solid black;
}

td {
\tvertical-align: top;
\tpadding: 2pt;
}

th:nth-child(1),
td:nth-child(1) {
  background: #eef;
}

th:nth-child(3),
td:nth-child(3) {
  background: #eef;
  max-width: 20em;
}
";

/// Table columns: heading and tooltip
const COLUMNS: [(&str, &str); 5] = [
    ("Predicate", "The formal name of the predicate as used in URIs"),
    ("Label", "Suggested label for the predicate in human-facing UIs"),
    ("Description", "Human-readable description of the predicate"),
    (
        "Parent",
        "If the predicate is in a wider-narrower relationship to other predicates: \
         The more general term.",
    ),
    (
        "Preferred",
        "If the predicate has been superseded by another term but is otherwise \
         synonymous with it: The term that should now be preferentially used",
    ),
];

/// Render the documentation page for a vocabulary
pub fn to_html(meta: &VocabularyMetadata, terms: &[Term]) -> String {
    let title = escape_html(&format!("{}{}", HTML_TITLE_PREFIX, meta.title));
    let mut out = String::with_capacity(4096 + terms.len() * 512);

    out.push_str("<!DOCTYPE html>\n");
    out.push_str("<html xmlns=\"http://www.w3.org/1999/xhtml\">\n<head>\n");
    out.push_str(&format!("<title>{}</title>\n", title));
    out.push_str("<meta http-equiv=\"content-type\" content=\"text/html;charset=utf-8\"/>\n");
    out.push_str(&format!("<style type=\"text/css\">{}</style>\n", CSS_STYLE));
    out.push_str("</head>\n<body>\n");

    out.push_str(&format!("<h1>{}</h1>\n", title));
    out.push_str("<div class=\"intro\">\n");
    out.push_str(&format!(
        "<p>This is the description of the namespace <code>{}</code> as of {}.</p>\n",
        escape_html(&meta.base_uri),
        escape_html(&meta.timestamp)
    ));
    out.push_str(&format!(
        "<p class=\"description\">{}</p>\n",
        escape_html(&meta.description)
    ));
    out.push_str("</div>\n");

    out.push_str(&terms_table(terms));

    out.push_str(&format!(
        "<p class=\"outro\">Alternate formats: <a href=\"{}\">RDF</a>, <a href=\"{}\">Turtle</a>.</p>\n",
        escape_html(&Artifact::RdfXml.file_name(&meta.name)),
        escape_html(&Artifact::Turtle.file_name(&meta.name))
    ));
    out.push_str("</body>\n</html>\n");
    out
}

fn terms_table(terms: &[Term]) -> String {
    let mut table = String::from("<table class=\"terms\">\n<thead>\n<tr>");
    for (heading, tooltip) in COLUMNS {
        table.push_str(&format!(
            "<th title=\"{}\">{}</th>",
            escape_html(tooltip),
            heading
        ));
    }
    table.push_str("</tr>\n</thead>\n<tbody>\n");
    for term in terms {
        table.push_str(&term.to_html_row());
        table.push('\n');
    }
    table.push_str("</tbody>\n</table>\n");
    table
}
