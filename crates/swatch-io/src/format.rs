//! Palette format detection.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::gpl::HEADER as GPL_HEADER;
use crate::IoError;

/// Supported palette interchange formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteFormat {
    /// `palette.v1` JSON document.
    #[default]
    Json,
    /// GIMP palette text.
    Gpl,
}

impl PaletteFormat {
    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("json") => Some(PaletteFormat::Json),
            Some("gpl") => Some(PaletteFormat::Gpl),
            _ => None,
        }
    }

    /// Guesses the format from file content.
    ///
    /// Text opening with the GIMP header is GPL, anything else is JSON.
    pub fn sniff(text: &str) -> Self {
        if text.trim_start().starts_with(GPL_HEADER) {
            PaletteFormat::Gpl
        } else {
            PaletteFormat::Json
        }
    }

    /// Detects format by extension, falling back to content sniffing.
    pub fn detect<P: AsRef<Path>>(path: P, text: &str) -> Self {
        Self::from_extension(path).unwrap_or_else(|| Self::sniff(text))
    }

    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            PaletteFormat::Json => "json",
            PaletteFormat::Gpl => "gpl",
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        self.extension()
    }
}

impl FromStr for PaletteFormat {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(PaletteFormat::Json),
            "gpl" | "gimp" => Ok(PaletteFormat::Gpl),
            other => Err(IoError::UnsupportedFormat(format!(
                "'{}'. Options: json, gpl",
                other
            ))),
        }
    }
}

impl fmt::Display for PaletteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(PaletteFormat::from_extension("a.json"), Some(PaletteFormat::Json));
        assert_eq!(PaletteFormat::from_extension("dir/b.GPL"), Some(PaletteFormat::Gpl));
        assert_eq!(PaletteFormat::from_extension("c.txt"), None);
        assert_eq!(PaletteFormat::from_extension("noext"), None);
    }

    #[test]
    fn test_sniff_and_detect() {
        assert_eq!(PaletteFormat::sniff("GIMP Palette\n#\n"), PaletteFormat::Gpl);
        assert_eq!(PaletteFormat::sniff("\n  GIMP Palette"), PaletteFormat::Gpl);
        assert_eq!(PaletteFormat::sniff("{}"), PaletteFormat::Json);
        assert_eq!(PaletteFormat::detect("x.palette", "GIMP Palette"), PaletteFormat::Gpl);
        assert_eq!(PaletteFormat::detect("x.json", "GIMP Palette"), PaletteFormat::Json);
    }

    #[test]
    fn test_parse() {
        assert_eq!("JSON".parse::<PaletteFormat>().ok(), Some(PaletteFormat::Json));
        assert_eq!("gimp".parse::<PaletteFormat>().ok(), Some(PaletteFormat::Gpl));
        assert!("aco".parse::<PaletteFormat>().is_err());
    }
}
