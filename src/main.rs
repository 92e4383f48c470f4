//! booklex - word statistics for page-formatted books

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use booklex::export::{ExportFormat, Exporter, TsvExporter};
use booklex::{Book, Error, KnownWords, Reformatter, SourceOptions};

#[derive(Parser)]
#[command(name = "booklex")]
#[command(version, about = "Word frequency and first-page statistics for a book", long_about = None)]
#[command(after_help = "EXAMPLES:
    booklex book.txt                        Print the word table as TSV
    booklex book.txt known.txt names.txt    Mark words from two known-word lists
    booklex book.txt known.txt -o words.json
                                            Write the table as JSON")]
struct Cli {
    /// Book text with printed page numbers on their own lines
    #[arg(value_name = "BOOK")]
    book: PathBuf,

    /// Known-word lists, one word per line
    #[arg(value_name = "KNOWN")]
    known: Vec<PathBuf>,

    /// Write the word table to a file (.json for JSON, otherwise TSV)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = SourceOptions::default();
    let book = Book::open_with(&cli.book, &options, &Reformatter::new())?;
    let known = KnownWords::load_all(&cli.known, &options)?;

    let stats = book.stats(Some(&known));
    eprintln!("{}", stats.summary());

    match &cli.output {
        Some(path) => {
            let write = || -> io::Result<()> {
                let mut file = BufWriter::new(File::create(path)?);
                ExportFormat::from_path(path).export(&stats, &mut file)?;
                file.flush()
            };
            write().map_err(|source| Error::Output {
                path: path.clone(),
                source,
            })?;
        }
        None => {
            let mut stdout = io::stdout().lock();
            TsvExporter::new().export(&stats, &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
