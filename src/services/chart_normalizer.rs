use crate::models::{AllocationCategory, ChartSlice};

/// Immutable category → color lookup with a single default for anything not
/// listed. Lookup is exact and case-sensitive.
#[derive(Debug, Clone, Copy)]
pub struct ColorTable {
    entries: &'static [(&'static str, &'static str)],
    default: &'static str,
}

pub const DEFAULT_COLOR: &str = "#A0A0A0";

pub const FALLBACK_COLORS: ColorTable = ColorTable {
    entries: &[
        ("Equity", "#8884D8"),
        ("Mutual Funds", "#82CA9D"),
        ("Bonds", "#FFC658"),
        ("Real Estate", "#FF8042"),
        ("Gold ETFs", "#FFBB28"),
    ],
    default: DEFAULT_COLOR,
};

impl ColorTable {
    #[cfg(test)]
    const fn new(
        entries: &'static [(&'static str, &'static str)],
        default: &'static str,
    ) -> Self {
        Self { entries, default }
    }

    pub fn get(&self, category: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == category)
            .map(|(_, color)| *color)
    }

    pub fn resolve(&self, category: &str) -> &'static str {
        self.get(category).unwrap_or(self.default)
    }

    #[cfg(test)]
    fn default_color(&self) -> &'static str {
        self.default
    }
}

/// Map provider categories onto chart slices using the built-in fallback colors.
pub fn normalize(categories: &[AllocationCategory]) -> Vec<ChartSlice> {
    normalize_with(&FALLBACK_COLORS, categories)
}

/// Same length and order as the input. Names and values pass through
/// untouched; percentages are not re-normalized.
pub fn normalize_with(table: &ColorTable, categories: &[AllocationCategory]) -> Vec<ChartSlice> {
    categories
        .iter()
        .map(|c| ChartSlice {
            name: c.category.clone(),
            value: c.percentage,
            color: resolve_color(table, c),
        })
        .collect()
}

fn resolve_color(table: &ColorTable, category: &AllocationCategory) -> String {
    match category.fill.as_deref().map(str::trim) {
        Some(fill) if !fill.is_empty() => fill.to_string(),
        _ => table.resolve(&category.category).to_string(),
    }
}
