use std::fs::File;
use std::io::BufReader;
use std::io::Read;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use glox as lox;

use clap::Parser as ClapParser;

use lox::lox::Lox;

#[derive(ClapParser, Debug)]
#[command(name = "glox", version, about = "Tree-walking interpreter for the Lox language", long_about = None)]
pub struct Cli {
    /// Script to execute; starts a REPL when omitted
    script: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Cli = Cli::parse();

    match args.script.as_slice() {
        [] => run_prompt(),

        [path] => run_file(path),

        _ => {
            println!("Usage: glox [script]");
            Ok(())
        }
    }
}

fn run_file(path: &Path) -> anyhow::Result<()> {
    let mut buf: Vec<u8> = Vec::new();
    let mut reader: BufReader<File> = BufReader::new(File::open(path)?);
    reader.read_to_end(&mut buf)?;

    let source: String = String::from_utf8(buf)?;

    let mut lox = Lox::new();

    if lox.run(&source).is_err() {
        // Diagnostics were already reported to stderr.
        std::process::exit(1);
    }

    Ok(())
}

fn run_prompt() -> anyhow::Result<()> {
    let mut lox = Lox::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // EOF ends the session.
            break;
        }

        // Errors were reported; the prompt keeps going.
        let _ = lox.run(&line);
    }

    Ok(())
}
