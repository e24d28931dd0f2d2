use crate::emitter::{write_size_definitions, GeneratorError};
use crate::registry::REGISTERED_TYPES;
use clap::Parser;
use std::ffi::OsString;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;

mod emitter;
mod registry;

/// Exit status when no output filename is supplied.
const EXIT_USAGE: i32 = 1;
/// Exit status when the output file cannot be opened or written.
const EXIT_IO: i32 = 2;

#[derive(Parser)]
struct Options {
    /// Sets the filename of the generated definition file
    output: PathBuf,

    /// Anything after the output filename is accepted and ignored
    #[clap(hide = true)]
    _rest: Vec<OsString>,
}

fn main() {
    let options = match Options::try_parse() {
        Ok(options) => options,
        // --help and --version land here too and are not usage errors
        Err(e) if !e.use_stderr() => {
            let _ = e.print();
            process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            process::exit(EXIT_USAGE);
        }
    };

    eprintln!("size-definer: generating file: {}", options.output.display());

    if let Err(e) = generate(&options.output) {
        eprintln!("size-definer: fatal: {}", e);
        process::exit(EXIT_IO);
    }
}

fn generate(path: &Path) -> Result<(), GeneratorError> {
    let mut file = File::create(path).map_err(|source| GeneratorError::Open {
        path: path.to_owned(),
        source,
    })?;

    write_size_definitions(&REGISTERED_TYPES, &mut file)
        .and_then(|_| file.flush())
        .map_err(|source| GeneratorError::Write {
            path: path.to_owned(),
            source,
        })
}
