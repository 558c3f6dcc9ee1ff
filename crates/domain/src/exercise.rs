use std::slice::Iter;

use crate::{ColorHint, Property};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub name: &'static str,
    pub instructions: &'static str,
    /// Free-text label such as "3 min" or "3 sets of 15 reps".
    pub duration: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] =
            [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Difficulty {
    #[must_use]
    pub fn color(self) -> ColorHint {
        match self {
            Difficulty::Easy => ColorHint::Green,
            Difficulty::Medium => ColorHint::Orange,
            Difficulty::Hard => ColorHint::Red,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ExerciseKind {
    #[default]
    Workout,
    Stretch,
    Massage,
}

impl Property for ExerciseKind {
    fn iter() -> Iter<'static, ExerciseKind> {
        static KIND: [ExerciseKind; 3] = [
            ExerciseKind::Workout,
            ExerciseKind::Stretch,
            ExerciseKind::Massage,
        ];
        KIND.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseKind::Workout => "Workout",
            ExerciseKind::Stretch => "Stretching",
            ExerciseKind::Massage => "Massage",
        }
    }
}

impl ExerciseKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            ExerciseKind::Workout => "Workout Exercise",
            ExerciseKind::Stretch => "Stretching Exercise",
            ExerciseKind::Massage => "Massage Technique",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            ExerciseKind::Workout => "Build strength and endurance",
            ExerciseKind::Stretch => "Improve flexibility and mobility",
            ExerciseKind::Massage => "Relieve tension and pain",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            ExerciseKind::Workout => "💪",
            ExerciseKind::Stretch => "🧘",
            ExerciseKind::Massage => "✋",
        }
    }

    #[must_use]
    pub fn color(self) -> ColorHint {
        match self {
            ExerciseKind::Workout => ColorHint::Red,
            ExerciseKind::Stretch => ColorHint::Green,
            ExerciseKind::Massage => ColorHint::Blue,
        }
    }
}
