//! Turns the page layout into HTML.

mod output;
mod view;

use serde::Serialize;

use crate::error::Result;

pub use crate::render::output::OutputFile;

/// A sink for rendered markup.
pub trait OutputStream {
    /// Writes a piece of markup.
    fn write(&mut self, data: &str) -> Result<()>;
}

impl OutputStream for String {
    fn write(&mut self, data: &str) -> Result<()> {
        self.push_str(data);
        Ok(())
    }
}

/// Writes an element as HTML.
pub trait Render {
    /// Renders the element into `output`.
    fn render<O>(&self, output: &mut O) -> Result<()>
    where
        O: OutputStream;
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    tinytemplate::escape(text, &mut escaped);
    escaped
}

// JSON embedded in a <script> element must not close the element early.
pub(crate) fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace('<', "\\u003c"))
}
