// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic for writing the single-page BMI report PDF.
//!
//! The report recomputes BMI, category, and ideal range through the kernel
//! so the file always matches what the results view shows.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::logic::bmi::{Category, compute_bmi, ideal_weight_range};
use crate::models::profile::Profile;

/// Fixed report filename in the working directory.
pub const REPORT_FILE_NAME: &str = "BMI_Report.pdf";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 10.0;

/// Write the report for a completed profile to `output`.
///
/// Parent directories are created when missing. Fails only on I/O or PDF
/// encoding problems; a profile that passed field validation cannot fail
/// the embedded BMI computation.
pub fn write_report(output: &Path, profile: &Profile) -> Result<()> {
    if let Some(parent) = output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory {:?}", parent))?;
    }

    let bmi = compute_bmi(profile.weight_kg, profile.height_m)
        .context("Profile holds a non-positive height or weight")?;
    let category = Category::classify(bmi);
    let (low, high) = ideal_weight_range(profile.height_m, profile.gender);

    let (doc, page, layer) = PdfDocument::new(
        format!("BMI Report for {}", profile.name),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "report",
    );
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("Failed to register report body font")?;
    let title_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("Failed to register report title font")?;

    let current = doc.get_page(page).get_layer(layer);
    let mut cursor_mm = PAGE_HEIGHT_MM - 30.0;

    current.use_text(
        format!("BMI Report for {}", profile.name),
        18.0,
        Mm(MARGIN_MM),
        Mm(cursor_mm),
        &title_font,
    );
    cursor_mm -= 2.0 * LINE_HEIGHT_MM;

    let lines = [
        format!("BMI: {:.2}", bmi),
        format!("Category: {}", category.label()),
        format!("Tips: {}", category.advice()),
        format!("Ideal Weight Range: {low}kg - {high}kg"),
        format!(
            "Age: {}    Gender: {}    Height: {} m    Weight: {} kg",
            profile.age,
            profile.gender.label(),
            profile.height_m,
            profile.weight_kg
        ),
    ];
    for line in lines {
        current.use_text(line, 12.0, Mm(MARGIN_MM), Mm(cursor_mm), &body_font);
        cursor_mm -= LINE_HEIGHT_MM;
    }

    cursor_mm -= LINE_HEIGHT_MM;
    current.use_text(
        format!("Generated: {}", generated_stamp()),
        10.0,
        Mm(MARGIN_MM),
        Mm(cursor_mm),
        &body_font,
    );

    let file = File::create(output)
        .with_context(|| format!("Failed to write report file {:?}", output))?;
    doc.save(&mut BufWriter::new(file))
        .context("Failed to encode PDF report")?;
    Ok(())
}

/// Human-readable UTC timestamp for the report footer.
fn generated_stamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| "unknown".to_string())
}
