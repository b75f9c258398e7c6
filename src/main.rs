use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::time::Instant;
use word_frequency_analyzer::{analyze_text, read_text_document, read_text_from_reader, Error};

fn read_input(path: Option<PathBuf>) -> Result<String, Error> {
    match path {
        Some(path) => {
            info!("Reading {}", path.display());
            read_text_document(&path)
        }
        None => {
            info!("Reading from stdin");
            read_text_from_reader(io::stdin().lock())
        }
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let start = Instant::now();

    // Read the input text from the given path, or from stdin when no path is given
    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let text = match read_input(path) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read input: {}", e);
            std::process::exit(1);
        }
    };

    let report = analyze_text(&text);

    let elapsed_millis = start.elapsed().as_millis();

    print!("{}", report.render(elapsed_millis));
}
