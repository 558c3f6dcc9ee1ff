use std::{collections::BTreeMap, sync::LazyLock};

use strum::EnumCount;

use crate::{
    BodyPartId, Category, ColorHint, Difficulty,
    Difficulty::{Easy, Hard, Medium},
    ExerciseEntry, ExerciseKind, Property, Region,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyPartInfo {
    pub id: BodyPartId,
    pub display_name: &'static str,
    pub category: Category,
    pub color: ColorHint,
    pub description: &'static str,
    pub workouts: &'static [ExerciseEntry],
    pub stretches: &'static [ExerciseEntry],
    pub massages: &'static [ExerciseEntry],
}

impl BodyPartInfo {
    #[must_use]
    pub fn exercises(&self, kind: ExerciseKind) -> &'static [ExerciseEntry] {
        match kind {
            ExerciseKind::Workout => self.workouts,
            ExerciseKind::Stretch => self.stretches,
            ExerciseKind::Massage => self.massages,
        }
    }
}

/// Every body part in display order.
#[must_use]
pub fn all() -> &'static [BodyPartId] {
    BodyPartId::iter().as_slice()
}

#[must_use]
pub fn info(id: BodyPartId) -> &'static BodyPartInfo {
    &BODY_PARTS[&id]
}

/// Case-insensitive substring match on the display name. An empty query matches everything.
#[must_use]
pub fn search(query: &str) -> Vec<BodyPartId> {
    let query = query.to_lowercase();
    all()
        .iter()
        .filter(|id| id.name().to_lowercase().contains(&query))
        .copied()
        .collect()
}

#[must_use]
pub fn exercises(id: BodyPartId, kind: ExerciseKind) -> &'static [ExerciseEntry] {
    info(id).exercises(kind)
}

#[must_use]
pub fn categories() -> &'static [Category] {
    Category::iter().as_slice()
}

#[must_use]
pub fn by_category(category: Category) -> Vec<BodyPartId> {
    all()
        .iter()
        .filter(|id| info(**id).category == category)
        .copied()
        .collect()
}

static BODY_PARTS: LazyLock<BTreeMap<BodyPartId, BodyPartInfo>> = LazyLock::new(|| {
    BodyPartId::iter()
        .map(|id| {
            let region = id.region();
            let content = &REGIONS[region as usize];
            debug_assert_eq!(content.region, region);
            (
                *id,
                BodyPartInfo {
                    id: *id,
                    display_name: id.name(),
                    category: region.category(),
                    color: region.color(),
                    description: content.description,
                    workouts: content.workouts,
                    stretches: content.stretches,
                    massages: content.massages,
                },
            )
        })
        .collect::<BTreeMap<_, _>>()
});

struct RegionContent {
    region: Region,
    description: &'static str,
    workouts: &'static [ExerciseEntry],
    stretches: &'static [ExerciseEntry],
    massages: &'static [ExerciseEntry],
}

const fn entry(
    name: &'static str,
    instructions: &'static str,
    duration: &'static str,
    difficulty: Difficulty,
) -> ExerciseEntry {
    ExerciseEntry {
        name,
        instructions,
        duration,
        difficulty,
    }
}

// Ordered like `Region`, indexed by its discriminant.
static REGIONS: [RegionContent; Region::COUNT] = [
    RegionContent {
        region: Region::Head,
        description: "Overall head health and tension relief.",
        workouts: &[entry(
            "Neck Rotations",
            "Slowly rotate your head in circles. 10 rotations clockwise, then 10 counter-clockwise.",
            "2 min",
            Easy,
        )],
        stretches: &[entry(
            "Side Head Tilt",
            "Tilt your head toward one shoulder and let its weight stretch the opposite side. Hold 20 seconds each side.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Scalp Massage",
            "Spread your fingertips over the scalp and move the skin in small circles from front to back.",
            "3 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Forehead,
        description: "Relieve tension headaches and forehead strain.",
        workouts: &[entry(
            "Brow Raises",
            "Raise your eyebrows as high as possible, hold 3 seconds, then relax. Repeat 10 times.",
            "2 min",
            Easy,
        )],
        stretches: &[entry(
            "Forehead Smoothing",
            "Place palms on the forehead and gently draw them apart toward the temples. Repeat 10 times.",
            "1 min",
            Easy,
        )],
        massages: &[
            entry(
                "Forehead Massage",
                "Use fingertips to massage forehead in upward strokes.",
                "3 min",
                Easy,
            ),
            entry(
                "Temple Circles",
                "Press two fingers on each temple and make slow circles. 10 each direction.",
                "2 min",
                Easy,
            ),
        ],
    },
    RegionContent {
        region: Region::Eyes,
        description: "Reduce eye strain and improve focus.",
        workouts: &[
            entry(
                "Eye Circles",
                "Look up, then slowly circle your eyes clockwise 10 times, then counter-clockwise 10 times.",
                "2 min",
                Easy,
            ),
            entry(
                "Focus Shifts",
                "Focus on a near object, then a far object. Repeat 20 times.",
                "3 min",
                Easy,
            ),
        ],
        stretches: &[entry(
            "20-20-20 Break",
            "Every 20 minutes look at something 20 feet away for 20 seconds.",
            "20 sec",
            Easy,
        )],
        massages: &[entry(
            "Palming",
            "Rub your palms until warm and cup them over closed eyes without pressing. Breathe slowly.",
            "2 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Jaw,
        description: "Release jaw tension and TMJ discomfort.",
        workouts: &[entry(
            "Resisted Opening",
            "Place your thumb under the chin and slowly open the mouth against light pressure. 10 reps.",
            "2 min",
            Medium,
        )],
        stretches: &[entry(
            "Jaw Stretches",
            "Open mouth wide, hold for 5 seconds. Close and repeat 10 times.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Jaw Massage",
            "Massage jaw muscles in circular motions.",
            "3 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Ears,
        description: "Improve circulation and relieve ear pressure.",
        workouts: &[entry(
            "Jaw Glides",
            "Slide the lower jaw gently forward and back to open the ear canals. 10 reps.",
            "1 min",
            Easy,
        )],
        stretches: &[entry(
            "Ear Pulls",
            "Hold the top of each ear and pull gently upward, then outward, then down. Hold 5 seconds each.",
            "1 min",
            Easy,
        )],
        massages: &[entry(
            "Ear Massage",
            "Gently massage earlobes and outer ears in circular motions.",
            "2 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Neck,
        description: "Reduce stiffness and improve neck mobility.",
        workouts: &[
            entry(
                "Chin Tucks",
                "Pull chin back towards neck. Hold 5 seconds. Repeat 10 times.",
                "2 min",
                Easy,
            ),
            entry(
                "Isometric Neck Press",
                "Press your palm against your forehead without moving the head. Hold 10 seconds, then repeat to each side.",
                "3 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Neck Tilts",
            "Tilt head left, hold 10 seconds, then right. Repeat 5 times.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Neck Kneading",
            "Squeeze the muscles at the back of the neck between fingers and palm, working from the skull downward.",
            "3 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Shoulder,
        description: "Strengthen and stretch shoulder muscles for better posture.",
        workouts: &[
            entry(
                "Shoulder Rolls",
                "Roll shoulders backward in large circles. Do 15 repetitions.",
                "3 min",
                Easy,
            ),
            entry(
                "Arm Circles",
                "Extend arms out. Make circles. 20 forward, 20 backward.",
                "4 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Cross-Body Stretch",
            "Pull one arm across the chest with the other hand. Hold 30 seconds each side.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Ball Against Wall",
            "Pin a massage ball between the shoulder blade and a wall and roll slowly over tight spots.",
            "5 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Chest,
        description: "Build upper body strength and improve breathing.",
        workouts: &[
            entry(
                "Push-ups",
                "Standard push-up position. Lower and push up. 10-15 reps.",
                "5 min",
                Medium,
            ),
            entry(
                "Incline Push-ups",
                "Hands on a bench or table, body straight. Lower and push up. 12-15 reps.",
                "4 min",
                Easy,
            ),
        ],
        stretches: &[entry(
            "Chest Stretch",
            "Stand in doorway, arms on frame. Lean forward. Hold 30 seconds.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Pec Release",
            "Press fingertips into the muscle below the collarbone and move the arm slowly up and down.",
            "3 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::UpperBack,
        description: "Strengthen upper back muscles and improve posture.",
        workouts: &[
            entry(
                "Rows",
                "Pull elbows back, squeezing shoulder blades together. 15 reps.",
                "5 min",
                Medium,
            ),
            entry(
                "Reverse Snow Angels",
                "Lie face down, lift arms slightly and sweep them from hips to overhead. 10 reps.",
                "4 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Cat-Cow Stretch",
            "On hands and knees, arch and round back. 10 reps.",
            "3 min",
            Easy,
        )],
        massages: &[entry(
            "Foam Rolling",
            "Roll affected area slowly. Pause on tight spots for 20-30 seconds.",
            "5-10 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::LowerBack,
        description: "Relieve lower back pain and strengthen core support.",
        workouts: &[
            entry(
                "Superman",
                "Lie on stomach, lift arms and legs. Hold 10 seconds. 10 reps.",
                "5 min",
                Medium,
            ),
            entry(
                "Bird Dog",
                "On hands and knees, extend opposite arm and leg. Hold 5 seconds. 10 reps each side.",
                "4 min",
                Easy,
            ),
        ],
        stretches: &[
            entry(
                "Lower Back Stretch",
                "Lie on back, pull knees to chest. Hold 30 seconds.",
                "3 min",
                Easy,
            ),
            entry(
                "Child's Pose",
                "Kneel, sit back on heels and reach arms forward on the floor. Hold 30 seconds.",
                "2 min",
                Easy,
            ),
        ],
        massages: &[entry(
            "Tennis Ball Release",
            "Lie on two tennis balls placed either side of the spine and roll slowly up and down.",
            "5 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Bicep,
        description: "Build arm strength and definition.",
        workouts: &[
            entry(
                "Bicep Curls",
                "Curl weights toward shoulders. 12-15 reps.",
                "5 min",
                Medium,
            ),
            entry(
                "Hammer Curls",
                "Curl with palms facing each other. 12-15 reps.",
                "5 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Wall Bicep Stretch",
            "Place palm on a wall at shoulder height, arm straight, and turn the body away. Hold 30 seconds.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Bicep Kneading",
            "Grip the upper arm and squeeze along the muscle from elbow to shoulder.",
            "3 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Tricep,
        description: "Strengthen the back of your arms.",
        workouts: &[
            entry(
                "Tricep Dips",
                "Lower body using chair or bench. 10-15 reps.",
                "5 min",
                Medium,
            ),
            entry(
                "Overhead Extensions",
                "Extend weight overhead. 12 reps.",
                "4 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Overhead Tricep Stretch",
            "Reach one hand down your back and press the elbow gently with the other hand. Hold 30 seconds.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Tricep Rolling",
            "Rest the back of the upper arm on a foam roller and roll from elbow to armpit.",
            "3 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Forearm,
        description: "Improve grip strength and forearm endurance.",
        workouts: &[
            entry(
                "Wrist Curls",
                "Curl wrists up and down with weight. 15 reps.",
                "4 min",
                Easy,
            ),
            entry("Reverse Curls", "Curl with palms down. 12 reps.", "4 min", Medium),
        ],
        stretches: &[entry(
            "Prayer Stretch",
            "Press palms together in front of the chest and lower them until you feel the stretch. Hold 30 seconds.",
            "1 min",
            Easy,
        )],
        massages: &[entry(
            "Forearm Stripping",
            "Press a thumb into the forearm near the wrist and glide slowly toward the elbow.",
            "3 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Wrist,
        description: "Strengthen wrists and prevent strain.",
        workouts: &[entry(
            "Wrist Flexion",
            "Flex wrist up and down. 15 reps.",
            "3 min",
            Easy,
        )],
        stretches: &[entry(
            "Wrist Rotations",
            "Rotate wrists in circles. 10 each direction.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Wrist Circles",
            "Hold the wrist with the other hand and press small circles around the joint.",
            "2 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Hand,
        description: "Improve hand strength and dexterity.",
        workouts: &[entry(
            "Grip Squeezes",
            "Squeeze a ball or grip trainer. 15 reps.",
            "3 min",
            Easy,
        )],
        stretches: &[entry(
            "Hand Stretches",
            "Spread fingers wide, then make a fist. 10 reps.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Palm Press",
            "Press the thumb of the other hand into the palm and work in small circles.",
            "3 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Fingers,
        description: "Increase finger flexibility and strength.",
        workouts: &[entry(
            "Finger Taps",
            "Tap each finger to thumb rapidly. 20 seconds.",
            "2 min",
            Easy,
        )],
        stretches: &[entry(
            "Finger Stretches",
            "Pull each finger back gently. Hold 10 seconds each.",
            "3 min",
            Easy,
        )],
        massages: &[entry(
            "Finger Rolls",
            "Roll each finger between thumb and index finger from base to tip.",
            "2 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Abs,
        description: "Strengthen your core for better stability and posture.",
        workouts: &[
            entry(
                "Crunches",
                "Lie on back, lift shoulders using abs. 15-20 reps.",
                "5 min",
                Medium,
            ),
            entry(
                "Plank",
                "Hold push-up position on forearms. Start with 30 seconds.",
                "3 min",
                Hard,
            ),
        ],
        stretches: &[entry(
            "Cobra Stretch",
            "Lie face down and press the chest up with straight arms, hips on the floor. Hold 20 seconds.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Abdominal Circles",
            "Lie on your back and massage the belly with the flat hand in slow clockwise circles.",
            "3 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Obliques,
        description: "Strengthen side muscles for core stability.",
        workouts: &[
            entry(
                "Side Plank",
                "Hold side plank position. 30 seconds each side.",
                "4 min",
                Medium,
            ),
            entry(
                "Russian Twists",
                "Sit, lean back, rotate torso side to side. 20 reps.",
                "5 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Standing Side Bend",
            "Reach one arm overhead and lean to the opposite side. Hold 20 seconds each side.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Side Rolling",
            "Lie on your side on a foam roller placed below the ribs and roll gently.",
            "3 min",
            Medium,
        )],
    },
    RegionContent {
        region: Region::Hips,
        description: "Improve hip mobility and flexibility.",
        workouts: &[
            entry(
                "Hip Circles",
                "Stand, rotate hips in circles. 10 each direction.",
                "3 min",
                Easy,
            ),
            entry(
                "Glute Bridges",
                "Lie on back, knees bent, lift hips until the body is straight. 15 reps.",
                "4 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Hip Flexor Stretch",
            "Lunge position, push hips forward. Hold 30 seconds.",
            "3 min",
            Easy,
        )],
        massages: &[entry(
            "Glute Ball Release",
            "Sit on a massage ball placed under one buttock and roll slowly over tender spots.",
            "5 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Thigh,
        description: "Build leg strength and muscle endurance.",
        workouts: &[
            entry(
                "Squats",
                "Lower down as if sitting. Return to standing. 15 reps.",
                "5 min",
                Medium,
            ),
            entry(
                "Lunges",
                "Step forward, lower hips to 90°. 10 reps each leg.",
                "6 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Standing Quad Stretch",
            "Stand on one leg and pull the other heel toward the buttock. Hold 30 seconds.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Quad Rolling",
            "Lie face down on a foam roller and roll from hip to just above the knee.",
            "5 min",
            Medium,
        )],
    },
    RegionContent {
        region: Region::Knee,
        description: "Strengthen knees and improve joint health.",
        workouts: &[
            entry(
                "Knee Extensions",
                "Sit, extend leg straight. 15 reps.",
                "4 min",
                Easy,
            ),
            entry(
                "Wall Sits",
                "Sit against wall, knees at 90°. Hold 30 seconds.",
                "3 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Heel Slides",
            "Lie on back and slide one heel toward the buttock, then straighten. 10 reps each leg.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Kneecap Mobilization",
            "With the leg relaxed, move the kneecap gently up, down and side to side with your fingers.",
            "2 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Calf,
        description: "Build calf strength and improve ankle stability.",
        workouts: &[entry(
            "Calf Raises",
            "Rise up on toes. Lower slowly. 20 reps.",
            "4 min",
            Easy,
        )],
        stretches: &[entry(
            "Calf Stretch",
            "Step forward, push back heel down. Hold 30 seconds.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Calf Rolling",
            "Rest the calf on a foam roller, lift the hips and roll from ankle to knee.",
            "4 min",
            Medium,
        )],
    },
    RegionContent {
        region: Region::Ankle,
        description: "Strengthen ankles and improve balance.",
        workouts: &[
            entry(
                "Ankle Flexion",
                "Point and flex foot. 15 reps.",
                "3 min",
                Easy,
            ),
            entry(
                "Single-Leg Balance",
                "Stand on one foot for 30 seconds, then switch. Close your eyes to make it harder.",
                "3 min",
                Medium,
            ),
        ],
        stretches: &[entry(
            "Ankle Rotations",
            "Rotate ankle in circles. 10 each direction.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Achilles Pinch",
            "Pinch the tendon above the heel between thumb and fingers and slide up and down.",
            "2 min",
            Easy,
        )],
    },
    RegionContent {
        region: Region::Foot,
        description: "Improve foot strength and reduce pain.",
        workouts: &[entry(
            "Toe Curls",
            "Curl toes, then spread them. 15 reps.",
            "3 min",
            Easy,
        )],
        stretches: &[entry(
            "Plantar Stretch",
            "Sit, cross one foot over the knee and pull the toes back toward the shin. Hold 30 seconds.",
            "2 min",
            Easy,
        )],
        massages: &[entry(
            "Foot Rolls",
            "Roll foot over ball. 2 minutes each foot.",
            "5 min",
            Easy,
        )],
    },
];
