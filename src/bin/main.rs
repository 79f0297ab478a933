//! Vocabulary Build CLI
//!
//! Creates RDF, HTML and Turtle files for a set of vocabularies.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;

use vocab_build::logging::init_logging;
use vocab_build::{
    build_all, normalize_install_root, plan, to_json_string, BuildError, BuildOptions,
    FormatConverter, RapperConverter, SkipConversion, DEFAULT_CONVERTER, DEFAULT_INSTALL_ROOT,
};

#[derive(Parser)]
#[command(name = "vocab-build")]
#[command(about = "Creates RDF, HTML and Turtle files for a set of vocabularies")]
#[command(version)]
struct Cli {
    /// Name of the vocabularies configuration file
    vocab_config: PathBuf,

    /// Use URI instead of the official IVOA location as the root of the
    /// vocabulary hierarchy. This is for test installations.
    #[arg(long, value_name = "URI", default_value = DEFAULT_INSTALL_ROOT)]
    install_root: String,

    /// Directory to write the vocabulary trees into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Program used to convert Turtle to RDF/XML
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_CONVERTER)]
    rapper: String,

    /// Don't write the RDF/XML conversion
    #[arg(long)]
    no_rdf: bool,

    /// Print the parsed vocabularies as JSON instead of writing files
    #[arg(long)]
    plan: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "plan")]
    pretty: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<(), BuildError> {
    let options = BuildOptions {
        output_dir: cli.output_dir,
        install_root: normalize_install_root(&cli.install_root)?,
    };

    if cli.plan {
        let plans = plan(&cli.vocab_config, &options)?;
        println!("{}", to_json_string(&plans, cli.pretty)?);
        return Ok(());
    }

    let converter: Box<dyn FormatConverter> = if cli.no_rdf {
        Box::new(SkipConversion)
    } else {
        Box::new(RapperConverter::new(cli.rapper))
    };

    let stats = build_all(&cli.vocab_config, &options, converter.as_ref())?;
    info!(
        vocabularies = stats.vocabularies,
        terms = stats.terms,
        "build finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_reportable() => {
            eprintln!("*** Fatal: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            if let Some(path) = e.source_file() {
                eprintln!(
                    "The following error was raised from within {}:",
                    path.display()
                );
            }
            eprintln!("Error: {}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            eprintln!("{:#?}", e);
            ExitCode::FAILURE
        }
    }
}
