use bodywork_domain::{
    BodyModel, BodyPartId, BodyPartInfo, Category, ExerciseEntry, ExerciseKind, MeshTag,
    Property, Selection, SubscriptionId, catalog,
};
use log::{debug, warn};

use crate::Settings;

/// State behind the body model screen: what is selected, what the list shows and which
/// exercise tab is open.
pub struct Explorer {
    model: &'static BodyModel,
    selection: Selection,
    search: String,
    kind: ExerciseKind,
    settings: Settings,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detail {
    pub info: &'static BodyPartInfo,
    pub kind: ExerciseKind,
    pub exercises: &'static [ExerciseEntry],
}

impl Explorer {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            model: BodyModel::standard(),
            selection: Selection::new(),
            search: String::new(),
            kind: settings.default_kind,
            settings,
        }
    }

    #[must_use]
    pub fn model(&self) -> &'static BodyModel {
        self.model
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    #[must_use]
    pub fn selected(&self) -> Option<BodyPartId> {
        self.selection.current()
    }

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(Option<BodyPartId>) + 'static,
    ) -> SubscriptionId {
        self.selection.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.selection.unsubscribe(id)
    }

    /// Handles the result of a hit test on the body model. A miss keeps the current state.
    pub fn tap(&mut self, hit: Option<MeshTag>) -> Option<BodyPartId> {
        let Some(tag) = hit else {
            debug!("tap missed body model");
            return None;
        };
        let Some(id) = self.model.part(tag) else {
            warn!("tap on unknown mesh {tag}");
            return None;
        };
        self.choose(id);
        Some(id)
    }

    /// Selection from the body part list.
    pub fn choose(&mut self, id: BodyPartId) {
        self.kind = self.settings.default_kind;
        self.selection.select(id);
    }

    pub fn dismiss(&mut self) {
        self.selection.clear();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: &str) {
        text.clone_into(&mut self.search);
    }

    #[must_use]
    pub fn visible_parts(&self) -> Vec<BodyPartId> {
        catalog::search(&self.search)
    }

    /// Visible parts grouped by category. Categories without a visible part are left out.
    #[must_use]
    pub fn sections(&self) -> Vec<(Category, Vec<BodyPartId>)> {
        let visible = self.visible_parts();
        catalog::categories()
            .iter()
            .map(|category| {
                (
                    *category,
                    visible
                        .iter()
                        .filter(|id| catalog::info(**id).category == *category)
                        .copied()
                        .collect::<Vec<_>>(),
                )
            })
            .filter(|(_, parts)| !parts.is_empty())
            .collect()
    }

    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ExerciseKind) {
        debug!("show {}", kind.name());
        self.kind = kind;
    }

    #[must_use]
    pub fn detail(&self) -> Option<Detail> {
        self.selection.current().map(|id| Detail {
            info: catalog::info(id),
            kind: self.kind,
            exercises: catalog::exercises(id, self.kind),
        })
    }

    /// The model keeps spinning only while the detail view is closed.
    #[must_use]
    pub fn rotation_active(&self) -> bool {
        self.settings.auto_rotate && self.selection.current().is_none()
    }
}

impl Default for Explorer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn tag_of(id: BodyPartId) -> MeshTag {
        BodyModel::standard()
            .meshes_of(id)
            .next()
            .map(|m| m.tag)
            .unwrap()
    }

    #[test]
    fn test_explorer_tap() {
        let mut explorer = Explorer::default();
        assert_eq!(
            explorer.tap(Some(tag_of(BodyPartId::Chest))),
            Some(BodyPartId::Chest)
        );
        assert_eq!(explorer.selected(), Some(BodyPartId::Chest));

        let detail = explorer.detail().unwrap();
        assert_eq!(
            detail,
            Detail {
                info: catalog::info(BodyPartId::Chest),
                kind: ExerciseKind::Workout,
                exercises: catalog::info(BodyPartId::Chest).workouts,
            }
        );
        assert!(detail.exercises.iter().any(|e| e.name == "Push-ups"));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(MeshTag::from(u16::MAX)))]
    fn test_explorer_tap_miss(#[case] hit: Option<MeshTag>) {
        let mut explorer = Explorer::default();
        explorer.choose(BodyPartId::Abs);
        assert_eq!(explorer.tap(hit), None);
        assert_eq!(explorer.selected(), Some(BodyPartId::Abs));
    }

    #[test]
    fn test_explorer_dismiss() {
        let mut explorer = Explorer::default();
        explorer.choose(BodyPartId::LeftCalf);
        explorer.dismiss();
        assert_eq!(explorer.selected(), None);
        assert!(explorer.detail().is_none());
    }

    #[test]
    fn test_explorer_kind() {
        let mut explorer = Explorer::new(Settings {
            default_kind: ExerciseKind::Stretch,
            ..Settings::default()
        });
        explorer.choose(BodyPartId::Neck);
        assert_eq!(explorer.kind(), ExerciseKind::Stretch);

        explorer.set_kind(ExerciseKind::Massage);
        let detail = explorer.detail().unwrap();
        assert_eq!(detail.kind, ExerciseKind::Massage);
        assert_eq!(detail.exercises, detail.info.massages);

        explorer.choose(BodyPartId::Jaw);
        assert_eq!(explorer.kind(), ExerciseKind::Stretch);
    }

    #[test]
    fn test_explorer_search() {
        let mut explorer = Explorer::default();
        assert_eq!(explorer.visible_parts(), catalog::all().to_vec());

        explorer.set_search("SHOULDER");
        assert_eq!(explorer.search(), "SHOULDER");
        assert_eq!(
            explorer.visible_parts(),
            vec![BodyPartId::LeftShoulder, BodyPartId::RightShoulder]
        );

        explorer.set_search("zzz-no-match");
        assert!(explorer.visible_parts().is_empty());
        assert!(explorer.sections().is_empty());
    }

    #[test]
    fn test_explorer_sections() {
        let mut explorer = Explorer::default();
        assert_eq!(explorer.sections().len(), catalog::categories().len());

        explorer.set_search("hand");
        assert_eq!(
            explorer.sections(),
            vec![(
                Category::Hands,
                vec![BodyPartId::LeftHand, BodyPartId::RightHand]
            )]
        );
    }

    #[rstest]
    #[case(true, None, true)]
    #[case(true, Some(BodyPartId::Hips), false)]
    #[case(false, None, false)]
    fn test_explorer_rotation_active(
        #[case] auto_rotate: bool,
        #[case] selected: Option<BodyPartId>,
        #[case] expected: bool,
    ) {
        let mut explorer = Explorer::new(Settings {
            auto_rotate,
            ..Settings::default()
        });
        if let Some(id) = selected {
            explorer.choose(id);
        }
        assert_eq!(explorer.rotation_active(), expected);
    }

    #[test]
    fn test_explorer_set_settings() {
        let mut explorer = Explorer::default();
        assert!(explorer.rotation_active());

        explorer.set_settings(Settings {
            auto_rotate: false,
            ..Settings::default()
        });
        assert!(!explorer.settings().auto_rotate);
        assert!(!explorer.rotation_active());

        explorer.set_settings(Settings::default());
        assert!(explorer.rotation_active());
    }

    #[test]
    fn test_explorer_subscribe() {
        let events = Rc::new(RefCell::new(vec![]));
        let sink = Rc::clone(&events);
        let mut explorer = Explorer::default();
        let id = explorer.subscribe(move |s| sink.borrow_mut().push(s));

        explorer.tap(Some(tag_of(BodyPartId::RightKnee)));
        explorer.tap(None);
        explorer.dismiss();
        assert!(explorer.unsubscribe(id));
        explorer.choose(BodyPartId::Head);

        assert_eq!(*events.borrow(), vec![Some(BodyPartId::RightKnee), None]);
    }
}
