//! Category module - the six fixed "6M" groupings of the fishbone

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six fixed fishbone categories
///
/// The set is closed and ordered; the order matches the bones of the diagram
/// and is used whenever all categories are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// People: awareness, behavior, compliance
    Man,

    /// Procedures and work methods
    Method,

    /// Equipment and tooling
    Machine,

    /// Instruments, inspection and monitoring
    Measurement,

    /// Raw materials, storage and handling
    Material,

    /// Working environment (lighting, noise, weather)
    #[serde(rename = "mothernature")]
    MotherNature,
}

impl Category {
    /// All categories in diagram order
    pub const ALL: [Category; 6] = [
        Category::Man,
        Category::Method,
        Category::Machine,
        Category::Measurement,
        Category::Material,
        Category::MotherNature,
    ];

    /// Get the category key as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Man => "man",
            Category::Method => "method",
            Category::Machine => "machine",
            Category::Measurement => "measurement",
            Category::Material => "material",
            Category::MotherNature => "mothernature",
        }
    }

    /// Parse a category key (case-insensitive, surrounding whitespace ignored)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "man" => Some(Category::Man),
            "method" => Some(Category::Method),
            "machine" => Some(Category::Machine),
            "measurement" => Some(Category::Measurement),
            "material" => Some(Category::Material),
            "mothernature" => Some(Category::MotherNature),
            _ => None,
        }
    }

    /// Human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Man => "Manusia",
            Category::Method => "Metode",
            Category::Machine => "Mesin",
            Category::Measurement => "Pengukuran",
            Category::Material => "Material",
            Category::MotherNature => "Lingkungan",
        }
    }

    /// Hex color used for this category's bone and chart series
    pub fn hex_color(&self) -> &'static str {
        match self {
            Category::Man => "#3498db",
            Category::Method => "#17a2b8",
            Category::Machine => "#ffc107",
            Category::Measurement => "#28a745",
            Category::Material => "#dc3545",
            Category::MotherNature => "#6c757d",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}

/// Format a raw category key for display, falling back to the key itself
pub fn format_category_name(key: &str) -> String {
    Category::parse(key)
        .map(|c| c.display_name().to_string())
        .unwrap_or_else(|| key.to_string())
}
