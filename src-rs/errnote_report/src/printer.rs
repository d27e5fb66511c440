use std::io::{self, Write};

use errnote_error::ErrorObject;

use crate::{config::RenderConfig, render};

/// Writes rendered errors to a writer.
pub struct Printer<'a, W>
where
    W: Write,
{
    config: RenderConfig,
    writer: &'a mut W,
}

impl<'a, W> Printer<'a, W>
where
    W: Write,
{
    /// Creates a printer that writes to `writer` with the given settings.
    pub const fn new(config: RenderConfig, writer: &'a mut W) -> Self {
        Self { config, writer }
    }

    /// Returns the settings used by the printer.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Writes one error, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying writer fails.
    pub fn print_error(&mut self, error: &dyn ErrorObject) -> io::Result<()> {
        let error_string = render::format_error(error, &self.config);
        writeln!(self.writer, "{error_string}")
    }

    /// Writes several errors, separated by blank lines.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the underlying writer fails.
    pub fn print_errors<'e, I>(&mut self, errors: I) -> io::Result<()>
    where
        I: IntoIterator<Item = &'e dyn ErrorObject>,
    {
        for (index, error) in errors.into_iter().enumerate() {
            if index > 0 {
                writeln!(self.writer)?;
            }
            self.print_error(error)?;
        }
        Ok(())
    }
}
