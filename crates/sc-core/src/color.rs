//! Theme palette: user-editable colours that shift records point into.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{ColorId, ValidationError};

/// Colour used when a record references an id the palette does not contain.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// Text colour for every rendered entry.
pub const TEXT_COLOR: &str = "#000000";

/// Upper bound on palette size enforced by the settings page.
pub const MAX_THEME_COLORS: usize = 10;

/// One palette entry.
///
/// `label` and `is_active` only matter to the picker; aggregation reads `id`
/// and `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColor {
    pub id: ColorId,
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub is_active: bool,
}

impl ThemeColor {
    pub fn new(id: u32, value: impl Into<String>, label: impl Into<String>, is_active: bool) -> Self {
        Self {
            id: ColorId::new(id),
            value: value.into(),
            label: label.into(),
            is_active,
        }
    }

    /// Whether the label names a shift time such as `9-17` or `10:30-15`.
    pub fn is_time_label(&self) -> bool {
        self.label.starts_with(|c: char| c.is_ascii_digit()) && self.label.contains('-')
    }

    /// Minutes after midnight of the label's start time; unparsable parts count as 0.
    fn label_start_minutes(&self) -> u32 {
        let start = self.label.split('-').next().unwrap_or_default().trim();
        let mut parts = start.split(':');
        let hours = parts
            .next()
            .and_then(|h| h.trim().parse::<u32>().ok())
            .unwrap_or(0);
        let minutes = parts
            .next()
            .and_then(|m| m.trim().parse::<u32>().ok())
            .unwrap_or(0);
        hours * 60 + minutes
    }
}

/// Validated, ordered palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ThemeColor>", into = "Vec<ThemeColor>")]
pub struct ColorTable(Vec<ThemeColor>);

impl ColorTable {
    /// Builds a palette, rejecting duplicate ids and oversized tables.
    pub fn new(colors: Vec<ThemeColor>) -> Result<Self, ValidationError> {
        if colors.len() > MAX_THEME_COLORS {
            return Err(ValidationError::TooManyColors {
                count: colors.len(),
                max: MAX_THEME_COLORS,
            });
        }

        let mut seen = HashSet::with_capacity(colors.len());
        for color in &colors {
            if !seen.insert(color.id) {
                return Err(ValidationError::DuplicateColorId { id: color.id });
            }
        }

        Ok(Self(colors))
    }

    pub fn get(&self, id: ColorId) -> Option<&ThemeColor> {
        self.0.iter().find(|c| c.id == id)
    }

    /// Colour value for `id`, or [`DEFAULT_COLOR`] when the id is unknown.
    pub fn resolve(&self, id: ColorId) -> &str {
        self.get(id).map_or(DEFAULT_COLOR, |c| c.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ThemeColor> {
        self.0.iter()
    }

    pub fn active(&self) -> impl Iterator<Item = &ThemeColor> {
        self.0.iter().filter(|c| c.is_active)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Palette in picker order: free-text labels first (alphabetical, ignoring
    /// case), then time labels by start time.
    pub fn sorted_for_picker(&self) -> Vec<&ThemeColor> {
        let mut colors: Vec<&ThemeColor> = self.0.iter().collect();
        colors.sort_by(|a, b| picker_order(a, b));
        colors
    }
}

fn picker_order(a: &ThemeColor, b: &ThemeColor) -> Ordering {
    match (a.is_time_label(), b.is_time_label()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (false, false) => a
            .label
            .to_lowercase()
            .cmp(&b.label.to_lowercase())
            .then_with(|| a.label.cmp(&b.label)),
        (true, true) => a.label_start_minutes().cmp(&b.label_start_minutes()),
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self(vec![
            ThemeColor::new(0, "#f7d186", "9-17", true),
            ThemeColor::new(1, "#95d0f0", "BLUE", false),
            ThemeColor::new(2, "#b9e0ab", "Frei", true),
            ThemeColor::new(3, "#a09fe3", "11-19", true),
            ThemeColor::new(4, "#f79a86", "RED", false),
            ThemeColor::new(5, "#ffccbb", "10-15", true),
        ])
    }
}

impl TryFrom<Vec<ThemeColor>> for ColorTable {
    type Error = ValidationError;

    fn try_from(colors: Vec<ThemeColor>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<ColorTable> for Vec<ThemeColor> {
    fn from(table: ColorTable) -> Self {
        table.0
    }
}
