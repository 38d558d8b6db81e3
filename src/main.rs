use std::path::Path;
use std::process::ExitCode;

use devfolio::export::write_site_data;
use devfolio::{DEVELOPER, REPOSITORY};

const OUT_DIR: &str = "data";

fn main() -> ExitCode {
    if let Err(error) = REPOSITORY.validate() {
        eprintln!("Dataset validation failed: {}", error);
        return ExitCode::FAILURE;
    }
    println!(
        "Dataset OK: {} projects, {} featured.",
        REPOSITORY.len(),
        REPOSITORY.featured().len()
    );

    match write_site_data(Path::new(OUT_DIR), REPOSITORY.all(), &DEVELOPER) {
        Ok(manifest) => {
            println!(
                "Site data for {} written to \"{}\" ({}).",
                DEVELOPER.name, OUT_DIR, manifest.generated_at
            );
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Failed to write site data: {}", error);
            ExitCode::FAILURE
        }
    }
}
