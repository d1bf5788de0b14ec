//! mdfrag - convert a markdown file to a standalone HTML page

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use mdfrag::markdown_to_html;
use mdfrag::reader::read_lines;
use mdfrag::renderer::wrap_document;

#[derive(Parser)]
#[command(name = "mdfrag")]
#[command(version, about = "Convert markdown to HTML", long_about = None)]
#[command(after_help = "EXAMPLES:
    mdfrag -i markdown.md > out.html")]
struct Cli {
    /// Markdown file to convert
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let lines = read_lines(&cli.input)?;
    let html = markdown_to_html(&lines.join("\n"));

    let mut stdout = io::stdout().lock();
    stdout.write_all(wrap_document(&html).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
