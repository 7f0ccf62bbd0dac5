// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared library for the BMI desktop suite.
//!
//! Two binaries build on this crate: `bmi-assistant` (guided wizard with
//! chart and PDF export) and `bmi-calculator` (single-screen calculator).
//! Both share the computation kernel in [`logic`] and the validation
//! helpers in [`models`].

pub mod app;
pub mod logic;
pub mod models;
pub mod mvu;
pub mod ui;
