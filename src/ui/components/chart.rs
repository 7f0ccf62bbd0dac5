// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Custom-painted horizontal BMI band chart with a value marker.

use eframe::egui;

use crate::logic::bmi::{CATEGORIES, CHART_AXIS_MAX};
use crate::ui::theme::category_color;

/// Fraction of the chart width at which the BMI marker sits.
///
/// Values beyond the axis are clamped to its ends so off-scale BMIs still
/// render a marker.
pub fn marker_fraction(bmi: f64) -> f32 {
    (bmi.clamp(0.0, CHART_AXIS_MAX) / CHART_AXIS_MAX) as f32
}

/// Draw the four category bands over [0, 40] and a vertical marker at `bmi`.
pub fn band_chart(ui: &mut egui::Ui, bmi: f64) -> egui::Response {
    let desired = egui::vec2(ui.available_width().min(480.0), 36.0);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::hover());

    if ui.is_rect_visible(rect) {
        let dark = ui.visuals().dark_mode;
        let painter = ui.painter();

        for category in CATEGORIES {
            let (low, high) = category.bounds();
            let band = egui::Rect::from_min_max(
                egui::pos2(
                    rect.left() + rect.width() * (low / CHART_AXIS_MAX) as f32,
                    rect.top(),
                ),
                egui::pos2(
                    rect.left() + rect.width() * (high / CHART_AXIS_MAX) as f32,
                    rect.bottom(),
                ),
            );
            painter.rect_filled(band, 2.0, category_color(category, dark));
        }

        let marker_x = rect.left() + rect.width() * marker_fraction(bmi);
        let marker_color = ui.visuals().strong_text_color();
        painter.line_segment(
            [
                egui::pos2(marker_x, rect.top() - 4.0),
                egui::pos2(marker_x, rect.bottom() + 4.0),
            ],
            egui::Stroke::new(2.0, marker_color),
        );
    }

    response.on_hover_text(format!("BMI {bmi:.2}"))
}

/// Color-keyed legend row for the band chart.
pub fn legend(ui: &mut egui::Ui) {
    let dark = ui.visuals().dark_mode;
    ui.horizontal(|ui| {
        for category in CATEGORIES {
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), egui::Sense::hover());
            ui.painter()
                .rect_filled(swatch, 2.0, category_color(category, dark));
            ui.label(egui::RichText::new(category.label()).small());
            ui.add_space(6.0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_fraction_maps_the_axis_linearly() {
        assert_eq!(marker_fraction(0.0), 0.0);
        assert_eq!(marker_fraction(20.0), 0.5);
        assert_eq!(marker_fraction(40.0), 1.0);
    }

    #[test]
    fn marker_fraction_clamps_off_scale_values() {
        assert_eq!(marker_fraction(-5.0), 0.0);
        assert_eq!(marker_fraction(80.0), 1.0);
    }
}
