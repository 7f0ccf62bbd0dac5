// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! User profile domain types (UI-agnostic).

/// Gender as used by the ideal-weight formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Validated answers from a completed session.
///
/// Immutable once built; discarded at process exit. BMI is not stored here
/// and is recomputed on demand through the kernel.
#[derive(Clone, Debug, PartialEq)]
pub struct Profile {
    pub name: String,
    pub gender: Gender,
    pub age: u32,
    pub height_m: f64,
    pub weight_kg: f64,
}
