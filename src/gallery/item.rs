use glam::{Quat, Vec2, Vec3};

use super::descriptor::ItemDescriptor;
use crate::animation::{FocusTarget, Pose, TransitionEngine};
use crate::camera::CameraPose;
use crate::interaction::{Interaction, InteractionState};
use crate::store::PositionStore;

/// One photo pinned to the wall.
#[derive(Debug, Clone)]
pub struct PhotoItem {
    id: String,
    image: String,
    /// Image width / height, known once the host has measured the image.
    aspect: Option<f32>,
    /// Where the photo rests on the wall (parent-local, z = 0).
    rest: Vec3,
    displayed: Pose,
    rotation: Quat,
    interaction: Interaction,
}

impl PhotoItem {
    /// Create a photo from its descriptor, resting where the store last saw
    /// it or else at the descriptor's position.
    #[must_use]
    pub fn new(descriptor: &ItemDescriptor, store: &impl PositionStore) -> Self {
        let rest = store
            .get(&descriptor.id)
            .unwrap_or_else(|| Vec3::from_array(descriptor.position))
            .with_z(0.0);
        Self {
            id: descriptor.id.clone(),
            image: descriptor.image.clone(),
            aspect: None,
            rest,
            displayed: Pose::at(rest),
            rotation: Quat::IDENTITY,
            interaction: Interaction::new(),
        }
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Image reference from the descriptor.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Rest position on the wall.
    #[must_use]
    pub fn rest_position(&self) -> Vec3 {
        self.rest
    }

    /// Currently displayed pose.
    #[must_use]
    pub fn displayed(&self) -> Pose {
        self.displayed
    }

    /// Currently displayed orientation relative to the wall.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Tilt the photo on the wall. Reset while the photo is focused.
    pub fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    /// Interaction state.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    /// Read-only interaction details.
    #[must_use]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub(crate) fn interaction_mut(&mut self) -> &mut Interaction {
        &mut self.interaction
    }

    /// Image aspect ratio, if measured.
    #[must_use]
    pub fn aspect(&self) -> Option<f32> {
        self.aspect
    }

    /// Record the image's intrinsic pixel size. Empty sizes are ignored.
    pub fn set_image_size(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            log::debug!("Ignoring empty image size for '{}'", self.id);
            return false;
        }
        self.aspect = Some(width as f32 / height as f32);
        true
    }

    /// Photo plane size for a photo `photo_height` tall.
    #[must_use]
    pub fn photo_size(&self, photo_height: f32) -> Option<Vec2> {
        self.aspect
            .map(|aspect| Vec2::new(photo_height * aspect, photo_height))
    }

    /// Photo plane plus `border` on each axis.
    #[must_use]
    pub fn frame_size(&self, photo_height: f32, border: f32) -> Option<Vec2> {
        self.photo_size(photo_height).map(|size| size + Vec2::splat(border))
    }

    /// Where this photo should be heading this frame.
    #[must_use]
    pub fn target_pose(
        &self,
        camera: &CameraPose,
        focus: &FocusTarget,
        photo_height: f32,
    ) -> Pose {
        if self.interaction.is_active() {
            focus.pose(camera, self.photo_size(photo_height), self.displayed.scale)
        } else {
            Pose::at(self.rest)
        }
    }

    /// Advance the displayed pose one frame toward `target`.
    pub(crate) fn advance(&mut self, engine: &TransitionEngine, target: &Pose, dt: f32) {
        engine.step(&mut self.displayed, target, dt);
        if self.interaction.is_active() {
            self.rotation = Quat::IDENTITY;
        }
    }

    /// Move the rest position (drag update). z is pinned to 0.
    pub(crate) fn set_rest(&mut self, position: Vec3) {
        self.rest = position.with_z(0.0);
    }

    /// Draw order: `active_order` while focused, else 0.
    #[must_use]
    pub fn render_order(&self, active_order: i32) -> i32 {
        if self.interaction.is_active() {
            active_order
        } else {
            0
        }
    }
}
