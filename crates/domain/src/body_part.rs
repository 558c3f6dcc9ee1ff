use std::{slice::Iter, str::FromStr};

use strum::{EnumCount, EnumIter, IntoStaticStr};

use crate::Property;

#[derive(
    Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, EnumCount, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum BodyPartId {
    // Head & Neck
    Head,
    Forehead,
    Eyes,
    Jaw,
    Ears,
    Neck,
    // Upper body
    LeftShoulder,
    RightShoulder,
    Chest,
    UpperBack,
    LowerBack,
    // Arms
    LeftBicep,
    RightBicep,
    LeftTricep,
    RightTricep,
    LeftForearm,
    RightForearm,
    LeftWrist,
    RightWrist,
    // Hands
    LeftHand,
    RightHand,
    LeftFingers,
    RightFingers,
    // Core
    Abs,
    Obliques,
    Hips,
    // Legs
    LeftThigh,
    RightThigh,
    LeftKnee,
    RightKnee,
    LeftCalf,
    RightCalf,
    LeftAnkle,
    RightAnkle,
    // Feet
    LeftFoot,
    RightFoot,
}

impl Property for BodyPartId {
    fn iter() -> Iter<'static, BodyPartId> {
        static BODY_PARTS: [BodyPartId; BodyPartId::COUNT] = [
            BodyPartId::Head,
            BodyPartId::Forehead,
            BodyPartId::Eyes,
            BodyPartId::Jaw,
            BodyPartId::Ears,
            BodyPartId::Neck,
            BodyPartId::LeftShoulder,
            BodyPartId::RightShoulder,
            BodyPartId::Chest,
            BodyPartId::UpperBack,
            BodyPartId::LowerBack,
            BodyPartId::LeftBicep,
            BodyPartId::RightBicep,
            BodyPartId::LeftTricep,
            BodyPartId::RightTricep,
            BodyPartId::LeftForearm,
            BodyPartId::RightForearm,
            BodyPartId::LeftWrist,
            BodyPartId::RightWrist,
            BodyPartId::LeftHand,
            BodyPartId::RightHand,
            BodyPartId::LeftFingers,
            BodyPartId::RightFingers,
            BodyPartId::Abs,
            BodyPartId::Obliques,
            BodyPartId::Hips,
            BodyPartId::LeftThigh,
            BodyPartId::RightThigh,
            BodyPartId::LeftKnee,
            BodyPartId::RightKnee,
            BodyPartId::LeftCalf,
            BodyPartId::RightCalf,
            BodyPartId::LeftAnkle,
            BodyPartId::RightAnkle,
            BodyPartId::LeftFoot,
            BodyPartId::RightFoot,
        ];
        BODY_PARTS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BodyPartId::Head => "Head",
            BodyPartId::Forehead => "Forehead",
            BodyPartId::Eyes => "Eyes",
            BodyPartId::Jaw => "Jaw",
            BodyPartId::Ears => "Ears",
            BodyPartId::Neck => "Neck",
            BodyPartId::LeftShoulder => "Left Shoulder",
            BodyPartId::RightShoulder => "Right Shoulder",
            BodyPartId::Chest => "Chest",
            BodyPartId::UpperBack => "Upper Back",
            BodyPartId::LowerBack => "Lower Back",
            BodyPartId::LeftBicep => "Left Bicep",
            BodyPartId::RightBicep => "Right Bicep",
            BodyPartId::LeftTricep => "Left Tricep",
            BodyPartId::RightTricep => "Right Tricep",
            BodyPartId::LeftForearm => "Left Forearm",
            BodyPartId::RightForearm => "Right Forearm",
            BodyPartId::LeftWrist => "Left Wrist",
            BodyPartId::RightWrist => "Right Wrist",
            BodyPartId::LeftHand => "Left Hand",
            BodyPartId::RightHand => "Right Hand",
            BodyPartId::LeftFingers => "Left Fingers",
            BodyPartId::RightFingers => "Right Fingers",
            BodyPartId::Abs => "Abs",
            BodyPartId::Obliques => "Obliques",
            BodyPartId::Hips => "Hips",
            BodyPartId::LeftThigh => "Left Thigh",
            BodyPartId::RightThigh => "Right Thigh",
            BodyPartId::LeftKnee => "Left Knee",
            BodyPartId::RightKnee => "Right Knee",
            BodyPartId::LeftCalf => "Left Calf",
            BodyPartId::RightCalf => "Right Calf",
            BodyPartId::LeftAnkle => "Left Ankle",
            BodyPartId::RightAnkle => "Right Ankle",
            BodyPartId::LeftFoot => "Left Foot",
            BodyPartId::RightFoot => "Right Foot",
        }
    }
}

impl BodyPartId {
    /// Stable machine key, e.g. `leftShoulder`.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub fn side(self) -> Side {
        match self {
            BodyPartId::LeftShoulder
            | BodyPartId::LeftBicep
            | BodyPartId::LeftTricep
            | BodyPartId::LeftForearm
            | BodyPartId::LeftWrist
            | BodyPartId::LeftHand
            | BodyPartId::LeftFingers
            | BodyPartId::LeftThigh
            | BodyPartId::LeftKnee
            | BodyPartId::LeftCalf
            | BodyPartId::LeftAnkle
            | BodyPartId::LeftFoot => Side::Left,
            BodyPartId::RightShoulder
            | BodyPartId::RightBicep
            | BodyPartId::RightTricep
            | BodyPartId::RightForearm
            | BodyPartId::RightWrist
            | BodyPartId::RightHand
            | BodyPartId::RightFingers
            | BodyPartId::RightThigh
            | BodyPartId::RightKnee
            | BodyPartId::RightCalf
            | BodyPartId::RightAnkle
            | BodyPartId::RightFoot => Side::Right,
            BodyPartId::Head
            | BodyPartId::Forehead
            | BodyPartId::Eyes
            | BodyPartId::Jaw
            | BodyPartId::Ears
            | BodyPartId::Neck
            | BodyPartId::Chest
            | BodyPartId::UpperBack
            | BodyPartId::LowerBack
            | BodyPartId::Abs
            | BodyPartId::Obliques
            | BodyPartId::Hips => Side::Center,
        }
    }

    #[must_use]
    pub fn region(self) -> Region {
        match self {
            BodyPartId::Head => Region::Head,
            BodyPartId::Forehead => Region::Forehead,
            BodyPartId::Eyes => Region::Eyes,
            BodyPartId::Jaw => Region::Jaw,
            BodyPartId::Ears => Region::Ears,
            BodyPartId::Neck => Region::Neck,
            BodyPartId::LeftShoulder | BodyPartId::RightShoulder => Region::Shoulder,
            BodyPartId::Chest => Region::Chest,
            BodyPartId::UpperBack => Region::UpperBack,
            BodyPartId::LowerBack => Region::LowerBack,
            BodyPartId::LeftBicep | BodyPartId::RightBicep => Region::Bicep,
            BodyPartId::LeftTricep | BodyPartId::RightTricep => Region::Tricep,
            BodyPartId::LeftForearm | BodyPartId::RightForearm => Region::Forearm,
            BodyPartId::LeftWrist | BodyPartId::RightWrist => Region::Wrist,
            BodyPartId::LeftHand | BodyPartId::RightHand => Region::Hand,
            BodyPartId::LeftFingers | BodyPartId::RightFingers => Region::Fingers,
            BodyPartId::Abs => Region::Abs,
            BodyPartId::Obliques => Region::Obliques,
            BodyPartId::Hips => Region::Hips,
            BodyPartId::LeftThigh | BodyPartId::RightThigh => Region::Thigh,
            BodyPartId::LeftKnee | BodyPartId::RightKnee => Region::Knee,
            BodyPartId::LeftCalf | BodyPartId::RightCalf => Region::Calf,
            BodyPartId::LeftAnkle | BodyPartId::RightAnkle => Region::Ankle,
            BodyPartId::LeftFoot | BodyPartId::RightFoot => Region::Foot,
        }
    }

    /// The part on the other side of the body, or the part itself for centered parts.
    #[must_use]
    pub fn mirrored(self) -> BodyPartId {
        match self.side() {
            Side::Center => self,
            side => BodyPartId::iter()
                .copied()
                .find(|id| id.region() == self.region() && id.side() == side.opposite())
                .unwrap_or(self),
        }
    }
}

impl FromStr for BodyPartId {
    type Err = BodyPartIdError;

    /// Accepts either the machine key or the display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyPartId::iter()
            .copied()
            .find(|id| id.key() == s || id.name() == s)
            .ok_or_else(|| BodyPartIdError::Unknown(s.to_string()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum BodyPartIdError {
    #[error("Unknown body part \"{0}\"")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Side {
    Left,
    Right,
    Center,
}

impl Side {
    #[must_use]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
            Side::Center => Side::Center,
        }
    }
}

/// Anatomical region shared by both parts of a left/right pair.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, EnumCount)]
pub enum Region {
    Head,
    Forehead,
    Eyes,
    Jaw,
    Ears,
    Neck,
    Shoulder,
    Chest,
    UpperBack,
    LowerBack,
    Bicep,
    Tricep,
    Forearm,
    Wrist,
    Hand,
    Fingers,
    Abs,
    Obliques,
    Hips,
    Thigh,
    Knee,
    Calf,
    Ankle,
    Foot,
}

impl Region {
    #[must_use]
    pub fn category(self) -> Category {
        match self {
            Region::Head
            | Region::Forehead
            | Region::Eyes
            | Region::Jaw
            | Region::Ears
            | Region::Neck => Category::HeadAndNeck,
            Region::Shoulder | Region::Chest | Region::UpperBack | Region::LowerBack => {
                Category::UpperBody
            }
            Region::Bicep | Region::Tricep | Region::Forearm | Region::Wrist => Category::Arms,
            Region::Hand | Region::Fingers => Category::Hands,
            Region::Abs | Region::Obliques | Region::Hips => Category::Core,
            Region::Thigh | Region::Knee | Region::Calf | Region::Ankle => Category::Legs,
            Region::Foot => Category::Feet,
        }
    }

    #[must_use]
    pub fn color(self) -> ColorHint {
        #[allow(clippy::match_same_arms)]
        match self {
            Region::Head | Region::Forehead | Region::Eyes | Region::Jaw | Region::Ears => {
                ColorHint::Purple
            }
            Region::Neck => ColorHint::Blue,
            Region::Shoulder => ColorHint::Orange,
            Region::Chest => ColorHint::Red,
            Region::UpperBack | Region::LowerBack => ColorHint::Brown,
            Region::Bicep | Region::Tricep => ColorHint::Blue,
            Region::Forearm => ColorHint::Cyan,
            Region::Wrist => ColorHint::Teal,
            Region::Hand | Region::Fingers => ColorHint::Pink,
            Region::Abs | Region::Obliques => ColorHint::Green,
            Region::Hips => ColorHint::Mint,
            Region::Thigh => ColorHint::Indigo,
            Region::Knee => ColorHint::Purple,
            Region::Calf => ColorHint::Cyan,
            Region::Ankle => ColorHint::Teal,
            Region::Foot => ColorHint::Gray,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, EnumCount)]
pub enum Category {
    HeadAndNeck,
    UpperBody,
    Arms,
    Hands,
    Core,
    Legs,
    Feet,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; Category::COUNT] = [
            Category::HeadAndNeck,
            Category::UpperBody,
            Category::Arms,
            Category::Hands,
            Category::Core,
            Category::Legs,
            Category::Feet,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::HeadAndNeck => "Head & Neck",
            Category::UpperBody => "Upper Body",
            Category::Arms => "Arms",
            Category::Hands => "Hands",
            Category::Core => "Core",
            Category::Legs => "Legs",
            Category::Feet => "Feet",
        }
    }
}

impl Category {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Category::HeadAndNeck => "🧠",
            Category::UpperBody | Category::Arms => "💪",
            Category::Hands => "✋",
            Category::Core => "🔥",
            Category::Legs => "🦵",
            Category::Feet => "🦶",
        }
    }
}

/// Named colour used by renderers to tint a body part or badge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColorHint {
    Purple,
    Blue,
    Orange,
    Red,
    Brown,
    Cyan,
    Teal,
    Pink,
    Green,
    Mint,
    Indigo,
    Gray,
}

impl ColorHint {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ColorHint::Purple => "purple",
            ColorHint::Blue => "blue",
            ColorHint::Orange => "orange",
            ColorHint::Red => "red",
            ColorHint::Brown => "brown",
            ColorHint::Cyan => "cyan",
            ColorHint::Teal => "teal",
            ColorHint::Pink => "pink",
            ColorHint::Green => "green",
            ColorHint::Mint => "mint",
            ColorHint::Indigo => "indigo",
            ColorHint::Gray => "gray",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_body_part_id_iter() {
        assert_eq!(
            BodyPartId::iter().copied().collect::<Vec<_>>(),
            <BodyPartId as strum::IntoEnumIterator>::iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_body_part_id_names_unique() {
        let names = BodyPartId::iter()
            .map(|id| id.name())
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), BodyPartId::COUNT);
        let keys = BodyPartId::iter()
            .map(|id| id.key())
            .collect::<HashSet<_>>();
        assert_eq!(keys.len(), BodyPartId::COUNT);
    }

    #[rstest]
    #[case(BodyPartId::Head, "head")]
    #[case(BodyPartId::LeftShoulder, "leftShoulder")]
    #[case(BodyPartId::UpperBack, "upperBack")]
    #[case(BodyPartId::RightFingers, "rightFingers")]
    fn test_body_part_id_key(#[case] id: BodyPartId, #[case] expected: &str) {
        assert_eq!(id.key(), expected);
    }

    #[rstest]
    #[case("leftShoulder", Ok(BodyPartId::LeftShoulder))]
    #[case("Left Shoulder", Ok(BodyPartId::LeftShoulder))]
    #[case("abs", Ok(BodyPartId::Abs))]
    #[case("Abs", Ok(BodyPartId::Abs))]
    #[case("left shoulder", Err(BodyPartIdError::Unknown("left shoulder".to_string())))]
    #[case("", Err(BodyPartIdError::Unknown(String::new())))]
    #[case("Tail", Err(BodyPartIdError::Unknown("Tail".to_string())))]
    fn test_body_part_id_from_str(
        #[case] value: &str,
        #[case] expected: Result<BodyPartId, BodyPartIdError>,
    ) {
        assert_eq!(value.parse::<BodyPartId>(), expected);
    }

    #[test]
    fn test_body_part_id_from_str_round_trip() {
        for id in BodyPartId::iter() {
            assert_eq!(id.key().parse::<BodyPartId>(), Ok(*id));
            assert_eq!(id.name().parse::<BodyPartId>(), Ok(*id));
        }
    }

    #[test]
    fn test_body_part_id_side() {
        for id in BodyPartId::iter() {
            match id.side() {
                Side::Left => assert!(id.name().starts_with("Left ")),
                Side::Right => assert!(id.name().starts_with("Right ")),
                Side::Center => {
                    assert!(!id.name().starts_with("Left ") && !id.name().starts_with("Right "));
                }
            }
        }
    }

    #[rstest]
    #[case(BodyPartId::LeftKnee, BodyPartId::RightKnee)]
    #[case(BodyPartId::RightHand, BodyPartId::LeftHand)]
    #[case(BodyPartId::Chest, BodyPartId::Chest)]
    fn test_body_part_id_mirrored(#[case] id: BodyPartId, #[case] expected: BodyPartId) {
        assert_eq!(id.mirrored(), expected);
    }

    #[test]
    fn test_body_part_id_pairs() {
        for id in BodyPartId::iter() {
            let mirrored = id.mirrored();
            assert_eq!(mirrored.region(), id.region());
            assert_eq!(mirrored.side(), id.side().opposite());
            assert_eq!(mirrored.mirrored(), *id);
        }
    }

    #[test]
    fn test_region_covered() {
        let regions = BodyPartId::iter()
            .map(|id| id.region())
            .collect::<HashSet<_>>();
        assert_eq!(regions.len(), Region::COUNT);
    }

    #[rstest]
    #[case(Category::HeadAndNeck, "Head & Neck")]
    #[case(Category::UpperBody, "Upper Body")]
    #[case(Category::Arms, "Arms")]
    #[case(Category::Hands, "Hands")]
    #[case(Category::Core, "Core")]
    #[case(Category::Legs, "Legs")]
    #[case(Category::Feet, "Feet")]
    fn test_category_name(#[case] category: Category, #[case] expected: &str) {
        assert_eq!(category.name(), expected);
    }

    #[test]
    fn test_categories_ordered_like_body_parts() {
        let categories = BodyPartId::iter()
            .map(|id| id.region().category())
            .collect::<Vec<_>>();
        let mut sorted = categories.clone();
        sorted.sort_unstable();
        assert_eq!(categories, sorted);
    }
}
