use std::sync::LazyLock;

use derive_more::{Deref, Display};

use crate::BodyPartId;

/// Identifies one mesh of the body model. Renderers attach it to the node they create
/// for the mesh and hand it back on a hit test.
#[derive(Deref, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct MeshTag(u16);

impl From<u16> for MeshTag {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere {
        radius: f32,
    },
    Cylinder {
        radius: f32,
        height: f32,
    },
    Capsule {
        radius: f32,
        height: f32,
    },
    Box {
        width: f32,
        height: f32,
        length: f32,
        chamfer: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub tag: MeshTag,
    pub part: BodyPartId,
    pub shape: Shape,
    pub position: Position,
}

/// Layout of the tappable body model.
#[derive(Debug)]
pub struct BodyModel {
    meshes: Vec<Mesh>,
}

impl BodyModel {
    #[must_use]
    pub fn standard() -> &'static BodyModel {
        &STANDARD
    }

    fn new(layout: &[(BodyPartId, Shape, Position)]) -> Self {
        Self {
            meshes: (0..)
                .zip(layout)
                .map(|(tag, (part, shape, position))| Mesh {
                    tag: MeshTag(tag),
                    part: *part,
                    shape: *shape,
                    position: *position,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    /// Resolves a hit-test result. Tags not belonging to this model are a miss.
    #[must_use]
    pub fn part(&self, tag: MeshTag) -> Option<BodyPartId> {
        self.meshes.get(usize::from(*tag)).map(|m| m.part)
    }

    pub fn meshes_of(&self, id: BodyPartId) -> impl Iterator<Item = &Mesh> {
        self.meshes.iter().filter(move |m| m.part == id)
    }

    #[must_use]
    pub fn contains(&self, id: BodyPartId) -> bool {
        self.meshes_of(id).next().is_some()
    }
}

static STANDARD: LazyLock<BodyModel> = LazyLock::new(|| BodyModel::new(&LAYOUT));

const fn at(x: f32, y: f32, z: f32) -> Position {
    Position { x, y, z }
}

const LAYOUT: [(BodyPartId, Shape, Position); 19] = [
    (
        BodyPartId::Head,
        Shape::Sphere { radius: 0.6 },
        at(0.0, 5.5, 0.0),
    ),
    (
        BodyPartId::Neck,
        Shape::Cylinder {
            radius: 0.25,
            height: 0.4,
        },
        at(0.0, 4.9, 0.0),
    ),
    (
        BodyPartId::LeftShoulder,
        Shape::Sphere { radius: 0.4 },
        at(-1.2, 4.5, 0.0),
    ),
    (
        BodyPartId::RightShoulder,
        Shape::Sphere { radius: 0.4 },
        at(1.2, 4.5, 0.0),
    ),
    (
        BodyPartId::Chest,
        Shape::Box {
            width: 1.8,
            height: 1.2,
            length: 0.8,
            chamfer: 0.2,
        },
        at(0.0, 3.8, 0.0),
    ),
    (
        BodyPartId::Abs,
        Shape::Box {
            width: 1.6,
            height: 1.0,
            length: 0.7,
            chamfer: 0.2,
        },
        at(0.0, 2.5, 0.0),
    ),
    (
        BodyPartId::Hips,
        Shape::Box {
            width: 1.7,
            height: 0.6,
            length: 0.8,
            chamfer: 0.2,
        },
        at(0.0, 1.7, 0.0),
    ),
    (
        BodyPartId::LeftBicep,
        Shape::Capsule {
            radius: 0.25,
            height: 1.0,
        },
        at(-1.5, 3.7, 0.0),
    ),
    (
        BodyPartId::LeftForearm,
        Shape::Capsule {
            radius: 0.22,
            height: 1.0,
        },
        at(-1.5, 2.4, 0.0),
    ),
    (
        BodyPartId::RightBicep,
        Shape::Capsule {
            radius: 0.25,
            height: 1.0,
        },
        at(1.5, 3.7, 0.0),
    ),
    (
        BodyPartId::RightForearm,
        Shape::Capsule {
            radius: 0.22,
            height: 1.0,
        },
        at(1.5, 2.4, 0.0),
    ),
    (
        BodyPartId::LeftThigh,
        Shape::Capsule {
            radius: 0.35,
            height: 1.5,
        },
        at(-0.5, 0.7, 0.0),
    ),
    (
        BodyPartId::LeftKnee,
        Shape::Sphere { radius: 0.3 },
        at(-0.5, -0.1, 0.0),
    ),
    (
        BodyPartId::LeftCalf,
        Shape::Capsule {
            radius: 0.28,
            height: 1.3,
        },
        at(-0.5, -1.0, 0.0),
    ),
    (
        BodyPartId::LeftFoot,
        Shape::Box {
            width: 0.4,
            height: 0.2,
            length: 0.7,
            chamfer: 0.1,
        },
        at(-0.5, -1.8, 0.2),
    ),
    (
        BodyPartId::RightThigh,
        Shape::Capsule {
            radius: 0.35,
            height: 1.5,
        },
        at(0.5, 0.7, 0.0),
    ),
    (
        BodyPartId::RightKnee,
        Shape::Sphere { radius: 0.3 },
        at(0.5, -0.1, 0.0),
    ),
    (
        BodyPartId::RightCalf,
        Shape::Capsule {
            radius: 0.28,
            height: 1.3,
        },
        at(0.5, -1.0, 0.0),
    ),
    (
        BodyPartId::RightFoot,
        Shape::Box {
            width: 0.4,
            height: 0.2,
            length: 0.7,
            chamfer: 0.1,
        },
        at(0.5, -1.8, 0.2),
    ),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Side;

    #[test]
    fn test_body_model_tags() {
        let model = BodyModel::standard();
        for (i, mesh) in model.meshes().iter().enumerate() {
            assert_eq!(usize::from(*mesh.tag), i);
            assert_eq!(model.part(mesh.tag), Some(mesh.part));
        }
    }

    #[rstest]
    #[case(0, Some(BodyPartId::Head))]
    #[case(4, Some(BodyPartId::Chest))]
    #[case(18, Some(BodyPartId::RightFoot))]
    #[case(19, None)]
    #[case(u16::MAX, None)]
    fn test_body_model_part(#[case] tag: u16, #[case] expected: Option<BodyPartId>) {
        assert_eq!(BodyModel::standard().part(tag.into()), expected);
    }

    #[test]
    fn test_body_model_one_mesh_per_part() {
        let model = BodyModel::standard();
        let parts = model.meshes().iter().map(|m| m.part).collect::<HashSet<_>>();
        assert_eq!(parts.len(), model.meshes().len());
    }

    #[rstest]
    #[case(BodyPartId::Chest, true)]
    #[case(BodyPartId::LeftKnee, true)]
    #[case(BodyPartId::Eyes, false)]
    #[case(BodyPartId::LeftWrist, false)]
    fn test_body_model_contains(#[case] id: BodyPartId, #[case] expected: bool) {
        assert_eq!(BodyModel::standard().contains(id), expected);
    }

    #[test]
    fn test_body_model_symmetric() {
        let model = BodyModel::standard();
        for mesh in model.meshes() {
            let mirrored = model
                .meshes_of(mesh.part.mirrored())
                .next()
                .expect("missing mirrored mesh");
            assert_eq!(mirrored.shape, mesh.shape);
            assert_approx_eq!(mirrored.position.x, -mesh.position.x);
            assert_approx_eq!(mirrored.position.y, mesh.position.y);
            assert_approx_eq!(mirrored.position.z, mesh.position.z);
            match mesh.part.side() {
                Side::Left => assert!(mesh.position.x < 0.0),
                Side::Right => assert!(mesh.position.x > 0.0),
                Side::Center => assert_approx_eq!(mesh.position.x, 0.0),
            }
        }
    }

    #[test]
    fn test_mesh_tag_display() {
        assert_eq!(MeshTag::from(7).to_string(), "7");
    }
}
