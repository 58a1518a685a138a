#[path = "shared/lib.rs"]
mod shared;
use shared::constants::{
    COMPRESSED_EXCHANGE_COUNTRY_TABLE_FILE_NAME, EXCHANGE_COUNTRY_TABLE_CSV_FILE_PATH,
};

use flate2::write::GzEncoder;
use flate2::Compression;
use std::env;
use std::fs::File;
use std::io;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Ensure that Cargo re-runs the build script if the input file changes
    println!(
        "cargo:rerun-if-changed={}",
        EXCHANGE_COUNTRY_TABLE_CSV_FILE_PATH.display()
    );

    // Nothing to embed unless the feature asks for it
    if env::var_os("CARGO_FEATURE_EMBED_BYTES").is_none() {
        return Ok(());
    }

    let output_path =
        PathBuf::from(env::var("OUT_DIR")?).join(COMPRESSED_EXCHANGE_COUNTRY_TABLE_FILE_NAME);

    let mut input_file = File::open(&*EXCHANGE_COUNTRY_TABLE_CSV_FILE_PATH)?;
    let output_file = File::create(&output_path)?;

    let mut encoder = GzEncoder::new(output_file, Compression::default());
    io::copy(&mut input_file, &mut encoder)?;
    encoder.finish()?;

    Ok(())
}
