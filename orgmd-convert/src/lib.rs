//! # orgmd-convert
//!
//! The format converter capability.
//!
//! [`FormatConverter`] is the seam between the publish driver and whatever
//! tool translates markup. [`CommandConverter`] drives an external program
//! over stdin/stdout; any `Fn(&str, &MarkupFormat, &MarkupFormat)` closure is
//! also a converter, which is how tests inject fakes.

pub mod command;
pub mod error;

pub use command::CommandConverter;
pub use error::ConvertError;

use orgmd_core::MarkupFormat;

/// Translates text from one markup dialect to another.
pub trait FormatConverter {
    /// Convert `text` from `from` to `to`, returning the converted text.
    fn convert(
        &self,
        text: &str,
        from: &MarkupFormat,
        to: &MarkupFormat,
    ) -> Result<String, ConvertError>;

    /// Human-readable name used in log lines.
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<F> FormatConverter for F
where
    F: Fn(&str, &MarkupFormat, &MarkupFormat) -> Result<String, ConvertError>,
{
    fn convert(
        &self,
        text: &str,
        from: &MarkupFormat,
        to: &MarkupFormat,
    ) -> Result<String, ConvertError> {
        self(text, from, to)
    }

    fn name(&self) -> String {
        "closure".to_string()
    }
}
