//! Print the OpenAPI document as JSON.

use attendance_backend::ApiDoc;
use utoipa::OpenApi;

#[allow(clippy::print_stdout, reason = "the document is the program's output")]
fn main() -> Result<(), serde_json::Error> {
    println!("{}", ApiDoc::openapi().to_pretty_json()?);
    Ok(())
}
