// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pure application logic: BMI kernel and report writing.

pub mod bmi;
pub mod report;
