//! `mailmark html`

use std::path::Path;

use mailmark_core::error::Result;
use mailmark_core::html::html_to_markdown;

use super::io::{read_input, write_output};

pub fn execute(input: Option<&Path>) -> Result<()> {
    let html = read_input(input)?;
    write_output(None, &html_to_markdown(&html))
}
