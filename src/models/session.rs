// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Linear question flow for the guided assistant.
//!
//! The session is an explicit context object: it owns the raw answers and
//! the current step, and every transition goes through [`Session::advance`]
//! or [`Session::back`]. Nothing here touches the UI.

use crate::models::input::{FieldError, parse_age, parse_positive_real, require_nonempty};
use crate::models::profile::{Gender, Profile};

/// One question of the flow, in presentation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Question {
    Name,
    Gender,
    Age,
    Height,
    Weight,
}

impl Question {
    /// Fixed question order.
    pub const ALL: [Question; 5] = [
        Question::Name,
        Question::Gender,
        Question::Age,
        Question::Height,
        Question::Weight,
    ];

    /// Prompt shown above the input.
    pub fn prompt(&self) -> &'static str {
        match self {
            Question::Name => "What's your name?",
            Question::Gender => "What's your gender?",
            Question::Age => "What's your age?",
            Question::Height => "Your height in meters (e.g., 1.75):",
            Question::Weight => "Your weight in kg:",
        }
    }

    /// Short field name used in validation messages.
    pub fn field(&self) -> &'static str {
        match self {
            Question::Name => "name",
            Question::Gender => "gender",
            Question::Age => "age",
            Question::Height => "height",
            Question::Weight => "weight",
        }
    }
}

/// Current position in the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Index into [`Question::ALL`].
    Question(usize),
    /// Terminal results view.
    Result,
}

/// Wizard session: raw answers plus the current step.
#[derive(Clone, Debug)]
pub struct Session {
    pub name: String,
    pub gender: Option<Gender>,
    pub age: String,
    pub height: String,
    pub weight: String,
    step: Step,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            name: String::new(),
            gender: None,
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            step: Step::Question(0),
        }
    }
}

impl Session {
    pub fn step(&self) -> Step {
        self.step
    }

    /// Question shown at the current step, `None` once the flow is complete.
    pub fn current_question(&self) -> Option<Question> {
        match self.step {
            Step::Question(index) => Question::ALL.get(index).copied(),
            Step::Result => None,
        }
    }

    /// Raw text answer for a question. Gender is handled via [`Self::gender`].
    pub fn answer(&self, question: Question) -> &str {
        match question {
            Question::Name => &self.name,
            Question::Age => &self.age,
            Question::Height => &self.height,
            Question::Weight => &self.weight,
            Question::Gender => self.gender.map(|g| g.label()).unwrap_or(""),
        }
    }

    /// Replace the raw text answer for a question.
    pub fn set_answer(&mut self, question: Question, value: String) {
        match question {
            Question::Name => self.name = value,
            Question::Age => self.age = value,
            Question::Height => self.height = value,
            Question::Weight => self.weight = value,
            // Gender is picked from a segmented control, not typed.
            Question::Gender => {}
        }
    }

    /// Validate the answer for one question without moving the step.
    pub fn validate(&self, question: Question) -> Result<(), FieldError> {
        match question {
            Question::Name => require_nonempty("name", &self.name).map(|_| ()),
            Question::Gender => match self.gender {
                Some(_) => Ok(()),
                None => Err(FieldError::Empty { field: "gender" }),
            },
            Question::Age => parse_age(&self.age).map(|_| ()),
            Question::Height => parse_positive_real("height", &self.height).map(|_| ()),
            Question::Weight => parse_positive_real("weight", &self.weight).map(|_| ()),
        }
    }

    /// Move one step forward if the current answer validates.
    ///
    /// On failure the step and all answers stay unchanged. Advancing past
    /// the last question enters the terminal [`Step::Result`] exactly once;
    /// advancing from the result view is a no-op.
    pub fn advance(&mut self) -> Result<(), FieldError> {
        let Step::Question(index) = self.step else {
            return Ok(());
        };
        let question = Question::ALL[index];
        self.validate(question)?;

        self.step = if index + 1 < Question::ALL.len() {
            Step::Question(index + 1)
        } else {
            Step::Result
        };
        Ok(())
    }

    /// Move one step back without validation. No-op at the first question
    /// and on the terminal result view.
    pub fn back(&mut self) {
        if let Step::Question(index) = self.step
            && index > 0
        {
            self.step = Step::Question(index - 1);
        }
    }

    /// Completion fraction for the progress bar.
    pub fn progress(&self) -> f32 {
        match self.step {
            Step::Question(index) => (index + 1) as f32 / Question::ALL.len() as f32,
            Step::Result => 1.0,
        }
    }

    /// Parse all answers into an immutable [`Profile`].
    ///
    /// Total once the terminal step has been reached, since every answer
    /// passed validation on the way there.
    pub fn profile(&self) -> Result<Profile, FieldError> {
        let name = require_nonempty("name", &self.name)?;
        let gender = self.gender.ok_or(FieldError::Empty { field: "gender" })?;
        let age = parse_age(&self.age)?;
        let height_m = parse_positive_real("height", &self.height)?;
        let weight_kg = parse_positive_real("weight", &self.weight)?;

        Ok(Profile {
            name,
            gender,
            age,
            height_m,
            weight_kg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_session() -> Session {
        Session {
            name: "Ada".into(),
            gender: Some(Gender::Female),
            age: "36".into(),
            height: "1.70".into(),
            weight: "62".into(),
            ..Default::default()
        }
    }

    #[test]
    fn starts_at_first_question() {
        let session = Session::default();
        assert_eq!(session.step(), Step::Question(0));
        assert_eq!(session.current_question(), Some(Question::Name));
    }

    #[test]
    fn advance_rejects_empty_answer_and_keeps_step() {
        let mut session = Session::default();
        let err = session.advance().unwrap_err();
        assert_eq!(err, FieldError::Empty { field: "name" });
        assert_eq!(session.step(), Step::Question(0));
    }

    #[test]
    fn advance_rejects_unpicked_gender() {
        let mut session = filled_session();
        session.gender = None;
        session.advance().unwrap();

        let err = session.advance().unwrap_err();
        assert_eq!(err, FieldError::Empty { field: "gender" });
        assert_eq!(session.step(), Step::Question(1));
    }

    #[test]
    fn advance_rejects_fractional_age() {
        let mut session = filled_session();
        session.age = "36.5".into();
        session.advance().unwrap();
        session.advance().unwrap();

        let err = session.advance().unwrap_err();
        assert_eq!(err, FieldError::NonIntegerAge);
        assert_eq!(session.step(), Step::Question(2));
    }

    #[test]
    fn advance_rejects_non_numeric_height() {
        let mut session = filled_session();
        session.height = "tall".into();
        for _ in 0..3 {
            session.advance().unwrap();
        }

        let err = session.advance().unwrap_err();
        assert_eq!(err, FieldError::NonNumeric { field: "height" });
        assert_eq!(session.step(), Step::Question(3));
    }

    #[test]
    fn happy_path_reaches_result_exactly_once() {
        let mut session = filled_session();
        for index in 0..Question::ALL.len() {
            assert_eq!(session.step(), Step::Question(index));
            session.advance().unwrap();
        }
        assert_eq!(session.step(), Step::Result);

        // Advancing again stays terminal.
        session.advance().unwrap();
        assert_eq!(session.step(), Step::Result);
    }

    #[test]
    fn back_is_noop_at_first_question_and_result() {
        let mut session = filled_session();
        session.back();
        assert_eq!(session.step(), Step::Question(0));

        for _ in 0..Question::ALL.len() {
            session.advance().unwrap();
        }
        session.back();
        assert_eq!(session.step(), Step::Result);
    }

    #[test]
    fn back_skips_validation() {
        let mut session = filled_session();
        session.advance().unwrap();
        session.name.clear();

        // Invalid earlier answer must not block going back.
        session.back();
        assert_eq!(session.step(), Step::Question(0));
    }

    #[test]
    fn progress_is_monotone_over_the_happy_path() {
        let mut session = filled_session();
        let mut last = 0.0;
        for _ in 0..Question::ALL.len() {
            let progress = session.progress();
            assert!(progress > last);
            last = progress;
            session.advance().unwrap();
        }
        assert_eq!(session.progress(), 1.0);
    }

    #[test]
    fn profile_parses_completed_answers() {
        let mut session = filled_session();
        for _ in 0..Question::ALL.len() {
            session.advance().unwrap();
        }

        let profile = session.profile().unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.age, 36);
        assert_eq!(profile.height_m, 1.70);
        assert_eq!(profile.weight_kg, 62.0);
    }

    #[test]
    fn set_answer_updates_text_fields_only() {
        let mut session = Session::default();
        session.set_answer(Question::Name, "Grace".into());
        session.set_answer(Question::Gender, "ignored".into());

        assert_eq!(session.answer(Question::Name), "Grace");
        assert_eq!(session.gender, None);
    }
}
