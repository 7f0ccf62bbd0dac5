// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui shell for the guided BMI assistant.
//! Handles layout, question navigation, and wiring to report export.

pub mod calculator;
pub mod components;
pub mod theme;

use std::path::PathBuf;

use eframe::egui;

use crate::logic::bmi::{Category, compute_bmi, ideal_weight_range};
use crate::logic::report::REPORT_FILE_NAME;
use crate::models::profile::Gender;
use crate::models::session::{Question, Step};
use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::chart;

/// Stateful egui application driving the wizard flow.
#[derive(Default)]
pub struct AssistantApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl eframe::App for AssistantApp {
    fn ui(&mut self, ui: &mut egui::Ui, frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        #[allow(deprecated)]
        self.update(&ctx, frame);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Process pending messages until exhausted. Commands run inline:
        // the whole suite is single-threaded and event-driven.
        let mut msgs = std::mem::take(&mut self.inbox);
        while let Some(msg) = msgs.pop() {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                msgs.push(mvu::run_command(cmd));
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("BMI Assistant");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            ui.add(
                egui::ProgressBar::new(self.model.session.progress())
                    .show_percentage()
                    .desired_height(8.0),
            );
            ui.add_space(16.0);

            match self.model.session.step() {
                Step::Question(_) => {
                    if let Some(question) = self.model.session.current_question() {
                        self.render_question(ui, question);
                    }
                }
                Step::Result => self.render_result(ui),
            }
        });
    }
}

impl AssistantApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Render the current question with its input and navigation buttons.
    fn render_question(&mut self, ui: &mut egui::Ui, question: Question) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label(egui::RichText::new(question.prompt()).size(20.0));
            ui.add_space(12.0);

            match question {
                Question::Gender => self.render_gender_picker(ui),
                _ => self.render_text_answer(ui, question),
            }

            ui.add_space(20.0);
            ui.horizontal(|ui| {
                // Keep the button pair roughly centered.
                let pair_width = 180.0;
                ui.add_space((ui.available_width() - pair_width).max(0.0) / 2.0);

                let at_first = matches!(self.model.session.step(), Step::Question(0));
                let back = egui::Button::new(format!("{} Back", egui_phosphor::regular::ARROW_LEFT));
                if ui.add_enabled(!at_first, back).clicked() {
                    self.inbox.push(Msg::BackPressed);
                }

                let next =
                    egui::Button::new(format!("Next {}", egui_phosphor::regular::ARROW_RIGHT));
                if ui.add(next).clicked() {
                    self.inbox.push(Msg::NextPressed);
                }
            });
        });
    }

    fn render_text_answer(&mut self, ui: &mut egui::Ui, question: Question) {
        let hint = match question {
            Question::Name => "e.g. Ada",
            Question::Age => "e.g. 36",
            Question::Height => "e.g. 1.75",
            Question::Weight => "e.g. 70",
            Question::Gender => "",
        };

        let mut value = self.model.session.answer(question).to_string();
        let response = ui.add(
            egui::TextEdit::singleline(&mut value)
                .hint_text(hint)
                .desired_width(240.0)
                .horizontal_align(egui::Align::Center),
        );
        if response.changed() {
            self.inbox.push(Msg::AnswerChanged(question, value));
        }
    }

    /// Segmented control for the gender question.
    fn render_gender_picker(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let pair_width = 160.0;
            ui.add_space((ui.available_width() - pair_width).max(0.0) / 2.0);

            for gender in [Gender::Male, Gender::Female] {
                let selected = self.model.session.gender == Some(gender);
                let button = egui::Button::new(gender.label()).selected(selected);
                if ui.add(button).clicked() {
                    self.inbox.push(Msg::GenderPicked(gender));
                }
            }
        });
    }

    /// Terminal results view: BMI, category, advice, ideal range, chart,
    /// and the export action.
    fn render_result(&mut self, ui: &mut egui::Ui) {
        let Ok(profile) = self.model.session.profile() else {
            // Unreachable through the state machine; render something sane
            // rather than panicking if it ever regresses.
            ui.label("Session incomplete.");
            return;
        };
        let Ok(bmi) = compute_bmi(profile.weight_kg, profile.height_m) else {
            ui.label("Session incomplete.");
            return;
        };
        let category = Category::classify(bmi);
        let (low, high) = ideal_weight_range(profile.height_m, profile.gender);
        let color = theme::category_color(category, ui.visuals().dark_mode);

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.heading(format!("Hello {}!", profile.name));
            ui.add_space(12.0);

            ui.label(
                egui::RichText::new(format!("Your BMI is {bmi:.2}"))
                    .size(24.0)
                    .strong()
                    .color(color),
            );
            ui.label(egui::RichText::new(format!("Category: {}", category.label())).color(color));
            ui.add_space(6.0);
            ui.label(format!("Tips: {}", category.advice()));
            ui.label(format!("Ideal Weight Range: {low}kg - {high}kg"));

            ui.add_space(16.0);
            chart::band_chart(ui, bmi);
            ui.add_space(4.0);
            chart::legend(ui);

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                let pair_width = 260.0;
                ui.add_space((ui.available_width() - pair_width).max(0.0) / 2.0);

                let export = egui::Button::new(format!(
                    "{} Export PDF",
                    egui_phosphor::regular::FILE_PDF
                ));
                if ui.add(export).clicked() {
                    self.inbox
                        .push(Msg::ExportRequested(PathBuf::from(REPORT_FILE_NAME)));
                }

                if let Some(path) = self.model.last_report.clone() {
                    let open_button = egui::Button::new(format!(
                        "{} Open report",
                        egui_phosphor::regular::ARROW_SQUARE_OUT
                    ));
                    if ui.add(open_button).clicked() {
                        self.inbox.push(Msg::OpenReportRequested(path));
                    }
                }
            });
        });
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Invalid input")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).weak());
        }
    }
}
