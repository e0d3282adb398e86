use std::path::PathBuf;

use clap::{Args, CommandFactory, builder::NonEmptyStringValueParser, error::ErrorKind};
use eyre::Result;
use structor_ir::{ConstructorKind, ConstructorRequest};
use structor_source::ParseCache;

use super::{Cli, UnwrapOrExit};
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Name of the struct to generate constructors for
    #[arg(long = "type", value_name = "NAME", value_parser = NonEmptyStringValueParser::new())]
    pub type_name: String,

    /// Output file (defaults to <type>_gen.rs next to the sources)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Comma-separated constructor types: allArgs, builder
    #[arg(
        long = "constructorTypes",
        visible_alias = "constructor-types",
        value_name = "TYPES",
        value_delimiter = ',',
        default_value = "allArgs"
    )]
    pub constructor_types: Vec<ConstructorKind>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Source files, directories or recursive `dir/...` patterns
    #[arg(value_name = "PATTERNS", default_value = ".")]
    pub patterns: Vec<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let request = match ConstructorRequest::new(self.constructor_types.iter().copied()) {
            Ok(request) => request,
            Err(duplicate) => Cli::command()
                .error(ErrorKind::ValueValidation, duplicate)
                .exit(),
        };

        // The banner records the invocation as typed.
        let args: Vec<String> = std::env::args().skip(1).collect();

        let mut cache = ParseCache::new();
        let report = ops::generate(
            GenerateOptions {
                type_name: &self.type_name,
                patterns: &self.patterns,
                request: &request,
                output: self.output.as_deref(),
                args: &args,
                dry_run: self.dry_run,
            },
            &mut cache,
        )
        .unwrap_or_exit();

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
