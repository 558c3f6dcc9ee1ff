use bodywork_domain::ExerciseKind;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Spin the body model while nothing is selected.
    pub auto_rotate: bool,
    /// Tab shown first when a body part is opened.
    #[serde(with = "ExerciseKindDef")]
    pub default_kind: ExerciseKind,
    /// Read by the host when it handles a tap; nothing in this crate acts on it.
    pub haptic_feedback: bool,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            default_kind: ExerciseKind::Workout,
            haptic_feedback: true,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "ExerciseKind")]
enum ExerciseKindDef {
    Workout,
    Stretch,
    Massage,
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("{}", Settings::default())]
    #[case(
        r#"{"auto_rotate": false}"#,
        Settings { auto_rotate: false, ..Settings::default() }
    )]
    #[case(
        r#"{"default_kind": "Massage", "haptic_feedback": false, "unknown": 1}"#,
        Settings {
            default_kind: ExerciseKind::Massage,
            haptic_feedback: false,
            ..Settings::default()
        }
    )]
    fn test_settings_from_json(#[case] json: &str, #[case] expected: Settings) {
        assert_eq!(Settings::from_json(json).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case(r#"{"default_kind": "Yoga"}"#)]
    #[case(r#"{"auto_rotate": "yes"}"#)]
    fn test_settings_from_json_invalid(#[case] json: &str) {
        assert!(matches!(
            Settings::from_json(json),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_settings_to_json() {
        let settings = Settings {
            default_kind: ExerciseKind::Stretch,
            ..Settings::default()
        };
        assert_eq!(
            Settings::from_json(&settings.to_json().unwrap()).unwrap(),
            settings
        );
    }
}
