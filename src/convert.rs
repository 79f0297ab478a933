//! Conversion of the Turtle document to RDF/XML
//!
//! The conversion is done by an external program; by default `rapper`
//! from the Raptor RDF tools.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::BuildError;

/// Default converter executable
pub const DEFAULT_CONVERTER: &str = "rapper";

/// Trait for turning a written Turtle file into an RDF/XML file
pub trait FormatConverter {
    /// Convert `turtle` into `rdf_xml`
    fn convert(&self, turtle: &Path, rdf_xml: &Path) -> Result<(), BuildError>;
}

/// Runs `<program> -iturtle -ordfxml <turtle>` with stdout going to the
/// RDF/XML file
#[derive(Debug, Clone)]
pub struct RapperConverter {
    pub program: String,
}

impl RapperConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for RapperConverter {
    fn default() -> Self {
        Self::new(DEFAULT_CONVERTER)
    }
}

impl FormatConverter for RapperConverter {
    fn convert(&self, turtle: &Path, rdf_xml: &Path) -> Result<(), BuildError> {
        let out = File::create(rdf_xml)?;

        debug!(program = %self.program, input = %turtle.display(), "running RDF converter");
        let output = Command::new(&self.program)
            .arg("-iturtle")
            .arg("-ordfxml")
            .arg(turtle)
            .stdin(Stdio::null())
            .stdout(Stdio::from(out))
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| BuildError::ConverterUnavailable {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(BuildError::ConversionFailed {
                status: output.status,
                output: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(())
    }
}

/// Converter that writes nothing, for builds without RDF/XML output
pub struct SkipConversion;

impl FormatConverter for SkipConversion {
    fn convert(&self, turtle: &Path, _rdf_xml: &Path) -> Result<(), BuildError> {
        warn!(input = %turtle.display(), "skipping RDF/XML conversion");
        Ok(())
    }
}
