use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::error::Result;
use crate::render::OutputStream;

const FILE_NAME: &str = "index.html";

/// Writes the page into `index.html` of an output directory.
pub struct OutputFile {
    path: PathBuf,
    file: BufWriter<File>,
}

impl OutputFile {
    /// Creates, or truncates, the `index.html` file in the `path` directory.
    pub fn new(path: &Path) -> Result<OutputFile> {
        let path = path.join(FILE_NAME);
        let file = BufWriter::new(File::create(&path)?);
        Ok(Self { path, file })
    }

    /// The path of the page file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes the buffered markup to disk.
    pub fn finish(mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}

impl OutputStream for OutputFile {
    fn write(&mut self, data: &str) -> Result<()> {
        self.file.write_all(data.as_bytes())?;
        Ok(())
    }
}
