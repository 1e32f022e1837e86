use std::{fmt, str::FromStr};

/// Serialization formats available for talent records in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    #[cfg(feature = "toml")]
    Toml,
}

impl DocumentFormat {
    pub fn available_formats() -> Vec<DocumentFormat> {
        vec![
            DocumentFormat::Json,
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml,
            #[cfg(feature = "toml")]
            DocumentFormat::Toml,
        ]
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            #[cfg(feature = "yaml")]
            DocumentFormat::Yaml => write!(f, "yaml"),
            #[cfg(feature = "toml")]
            DocumentFormat::Toml => write!(f, "toml"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let available: Vec<String> = DocumentFormat::available_formats()
            .iter()
            .map(ToString::to_string)
            .collect();
        write!(
            f,
            "unsupported format '{}' (this build supports: {})",
            self.0,
            available.join(", ")
        )
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for DocumentFormat {
    type Err = UnknownFormat;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        DocumentFormat::available_formats()
            .into_iter()
            .find(|format| match (format, normalized.as_str()) {
                #[cfg(feature = "yaml")]
                (DocumentFormat::Yaml, "yml") => true,
                (format, name) => format.to_string() == name,
            })
            .ok_or_else(|| UnknownFormat(raw.to_string()))
    }
}
