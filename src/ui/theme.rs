// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Category color palette keyed by theme.
//!
//! One declarative table covers every place a category is rendered (result
//! text, chart bands, legend); dark mode itself is handled by egui's theme
//! preference machinery.

use eframe::egui::Color32;

use crate::logic::bmi::Category;

struct CategoryStyle {
    category: Category,
    light: Color32,
    dark: Color32,
}

/// Band colors per category. Dark variants are lifted for contrast on dark
/// backgrounds; the hue stays recognizable across themes.
const CATEGORY_STYLES: [CategoryStyle; 4] = [
    CategoryStyle {
        category: Category::Underweight,
        light: Color32::from_rgb(31, 111, 208),
        dark: Color32::from_rgb(106, 169, 240),
    },
    CategoryStyle {
        category: Category::Normal,
        light: Color32::from_rgb(46, 139, 87),
        dark: Color32::from_rgb(102, 200, 138),
    },
    CategoryStyle {
        category: Category::Overweight,
        light: Color32::from_rgb(224, 138, 0),
        dark: Color32::from_rgb(240, 178, 90),
    },
    CategoryStyle {
        category: Category::Obese,
        light: Color32::from_rgb(192, 48, 48),
        dark: Color32::from_rgb(229, 115, 115),
    },
];

/// Color for a category under the current theme.
pub fn category_color(category: Category, dark_mode: bool) -> Color32 {
    let style = CATEGORY_STYLES
        .iter()
        .find(|s| s.category == category)
        .unwrap_or(&CATEGORY_STYLES[0]);
    if dark_mode { style.dark } else { style.light }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::bmi::CATEGORIES;

    #[test]
    fn table_covers_every_category() {
        for category in CATEGORIES {
            assert!(CATEGORY_STYLES.iter().any(|s| s.category == category));
        }
    }

    #[test]
    fn colors_are_distinct_within_each_theme() {
        for dark in [false, true] {
            let mut seen = Vec::new();
            for category in CATEGORIES {
                let color = category_color(category, dark);
                assert!(!seen.contains(&color), "duplicate color for {:?}", category);
                seen.push(color);
            }
        }
    }
}
