//! services/api/src/bin/openapi.rs
//!
//! This binary generates the OpenAPI 3.0 specifications for both REST surfaces
//! and saves them next to each other in the current directory.

use api_lib::web::{ExtractionApiDoc, PreviewApiDoc};
use utoipa::OpenApi;

/// Generates an OpenAPI specification and writes it to a file.
fn generate_spec(
    api_doc: utoipa::openapi::OpenApi,
    path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let spec_json = api_doc.to_pretty_json()?;
    std::fs::write(path, spec_json)?;
    println!("OpenAPI specification generated at {}", path);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    generate_spec(ExtractionApiDoc::openapi(), "extraction-openapi.json")?;
    generate_spec(PreviewApiDoc::openapi(), "preview-openapi.json")?;
    Ok(())
}
