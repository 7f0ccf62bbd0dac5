// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Single-screen BMI calculator.
//!
//! Stateless apart from the two input fields and the last shown result:
//! Calculate parses, computes, classifies, and pops the advice dialog;
//! Clear resets the form. Shares the kernel and validation helpers with
//! the assistant, including the canonical classification table.

use eframe::egui;

use crate::logic::bmi::{Category, compute_bmi};
use crate::models::input::parse_positive_real;
use crate::ui::theme::category_color;

/// Stateful egui application for the calculator window.
#[derive(Default)]
pub struct CalculatorApp {
    weight: String,
    height: String,
    result: Option<(f64, Category)>,
    error: Option<String>,
    show_advice: bool,
}

impl eframe::App for CalculatorApp {
    fn ui(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        #[allow(deprecated)]
        self.update(&ctx, frame);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("BMI Calculator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);
        self.render_advice_modal(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(12.0);

            egui::Grid::new("input_grid")
                .num_columns(2)
                .spacing(egui::vec2(8.0, 10.0))
                .min_col_width(100.0)
                .show(ui, |ui| {
                    ui.label("Weight (kg)");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.weight)
                            .hint_text("e.g. 70")
                            .desired_width(160.0),
                    );
                    ui.end_row();

                    ui.label("Height (m)");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.height)
                            .hint_text("e.g. 1.75")
                            .desired_width(160.0),
                    );
                    ui.end_row();
                });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let calculate = egui::Button::new(format!(
                    "{} Calculate",
                    egui_phosphor::regular::CALCULATOR
                ));
                if ui.add(calculate).clicked() {
                    self.calculate();
                }
                let clear =
                    egui::Button::new(format!("{} Clear", egui_phosphor::regular::ERASER));
                if ui.add(clear).clicked() {
                    self.clear();
                }
            });

            ui.add_space(16.0);
            if let Some((bmi, category)) = self.result {
                let color = category_color(category, ui.visuals().dark_mode);
                ui.label(
                    egui::RichText::new(format!("BMI: {bmi:.2} ({})", category.label()))
                    .size(22.0)
                    .strong()
                    .color(color),
                );
            }
        });
    }
}

impl CalculatorApp {
    /// Parse the inputs and compute the result.
    ///
    /// On any validation failure the previous result stays on screen and
    /// only the error dialog appears.
    fn calculate(&mut self) {
        let weight = match parse_positive_real("weight", &self.weight) {
            Ok(value) => value,
            Err(err) => {
                self.error = Some(err.to_string());
                return;
            }
        };
        let height = match parse_positive_real("height", &self.height) {
            Ok(value) => value,
            Err(err) => {
                self.error = Some(err.to_string());
                return;
            }
        };

        match compute_bmi(weight, height) {
            Ok(bmi) => {
                self.result = Some((bmi, Category::classify(bmi)));
                self.show_advice = true;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Reset both input fields and the shown result.
    fn clear(&mut self) {
        self.weight.clear();
        self.height.clear();
        self.result = None;
        self.show_advice = false;
    }

    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.error.clone() {
            egui::Window::new("Invalid input")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.error = None;
                    }
                });
        }
    }

    /// Informational dialog with the advice text for the computed category.
    fn render_advice_modal(&mut self, ctx: &egui::Context) {
        if !self.show_advice {
            return;
        }
        let Some((_, category)) = self.result else {
            return;
        };

        egui::Window::new(category.label())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(category.advice());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    self.show_advice = false;
                }
            });
    }
}
