use crate::constants::GZIP_FILE_EXTENSION;
use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text document into memory.
///
/// Files with a `.gz` extension are decompressed on the fly. The decoded
/// bytes must be valid UTF-8.
///
/// # Errors
/// Returns `Error::IoError` if the file cannot be opened, decompressed, or
/// decoded, and `Error::InvalidInput` if the path is a directory.
pub fn read_text_document(path: &Path) -> Result<String, Error> {
    if path.is_dir() {
        return Err(Error::InvalidInput(format!(
            "{} is a directory, not a text document",
            path.display()
        )));
    }

    let file = File::open(path)?;

    let is_gzipped = path
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(GZIP_FILE_EXTENSION));

    let mut text = String::new();
    if is_gzipped {
        GzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        io::BufReader::new(file).read_to_string(&mut text)?;
    }

    Ok(text)
}

/// Reads a whole text document from any reader (e.g. stdin).
pub fn read_text_from_reader<R: Read>(mut reader: R) -> Result<String, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    Ok(text)
}
