//! Example command implementation.

/// Print the example request document.
pub fn execute() {
    println!("{}", pdm_client::example_document());
}
