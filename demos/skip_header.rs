//! Decode a file of numeric readings, discarding its header line.

use std::fs;

use linecast::{FileDecodeOptions, decode_file};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("readings.txt");
    fs::write(&path, "reading\n12\n34\n56\n")?;

    let options = FileDecodeOptions::new().with_lines_to_skip(1);
    let mut total = 0u32;
    for reading in decode_file::<u32>(&path, &options)? {
        total += reading?;
    }

    println!("total: {total}");
    Ok(())
}
