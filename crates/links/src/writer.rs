use crate::error::LinkError;
use logging::{debug_log, info_log};
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Base URL the published pages are served under.
pub const DEFAULT_BASE_URL: &str = "https://joeiddon.github.io/fields/";

/// Default file receiving the appended link lines.
pub const DEFAULT_OUTPUT: &str = "README.md";

/// Appends formatted page links to an output file.
///
/// Each page produces one line of the form `<base-url><relative-path>`
/// followed by a blank line. The output file is opened in append mode once
/// per run and created if absent; existing content is never touched, so
/// repeated runs append the same lines again.
///
/// The relative path is rendered with the platform separator exactly as
/// traversal produced it. No normalization to forward slashes is performed,
/// so URLs emitted on separator-backslash platforms are malformed.
#[derive(Clone, Debug)]
pub struct LinkWriter {
    base_url: String,
    output: PathBuf,
}

impl LinkWriter {
    /// Creates a writer that prefixes pages with `base_url` and appends to
    /// `output`.
    #[must_use]
    pub fn new<S: Into<String>, P: Into<PathBuf>>(base_url: S, output: P) -> Self {
        Self {
            base_url: base_url.into(),
            output: output.into(),
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured output path.
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Formats the link line for a single page.
    #[must_use]
    pub fn format_line(&self, page: &Path) -> String {
        format!("{}{}", self.base_url, page.display())
    }

    /// Writes the link lines for `pages` to an arbitrary writer.
    ///
    /// Used by [`append_links`](Self::append_links) and by dry runs that
    /// render to stdout instead of the output file.
    pub fn write_links<W: Write>(&self, pages: &[PathBuf], writer: &mut W) -> io::Result<()> {
        for page in pages {
            writeln!(writer, "{}\n", self.format_line(page))?;
        }
        Ok(())
    }

    /// Appends the link lines for `pages` to the output file.
    ///
    /// Returns the number of appended links. When `pages` is empty the
    /// output file is left alone and not created.
    pub fn append_links(&self, pages: &[PathBuf]) -> Result<usize, LinkError> {
        if pages.is_empty() {
            debug_log!(
                Walk,
                1,
                "no pages found, leaving {:?} untouched",
                self.output
            );
            return Ok(0);
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output)
            .map_err(|error| LinkError::output(self.output.clone(), error))?;
        let mut writer = BufWriter::new(file);
        self.write_links(pages, &mut writer)
            .map_err(|error| LinkError::output(self.output.clone(), error))?;
        writer
            .flush()
            .map_err(|error| LinkError::output(self.output.clone(), error))?;

        info_log!(
            Stats,
            1,
            "appended {} links to {}",
            pages.len(),
            self.output.display()
        );
        Ok(pages.len())
    }
}
