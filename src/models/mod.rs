// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain models shared by both apps (UI-agnostic).

pub mod input;
pub mod profile;
pub mod session;

/// Validation error taxonomy for form fields.
pub use input::FieldError;
/// Immutable user profile built from validated answers.
pub use profile::{Gender, Profile};
/// Wizard question flow state machine.
pub use session::{Question, Session, Step};
