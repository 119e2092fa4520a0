//! The photo wall: composes photos from descriptors, dispatches pointer
//! events to them, and advances their displayed transforms each frame.
//!
//! # Frame loop
//!
//! ```ignore
//! // Pointer events, in arrival order:
//! gallery.handle_pointer(event, picked_id.as_deref());
//!
//! // Once per rendered frame:
//! gallery.update(dt, &camera);
//! for t in gallery.transforms() {
//!     renderer.place(t.id, t.position, t.scale, t.rotation, t.render_order);
//! }
//! ```
//!
//! Everything runs on one thread; the host serializes pointer events and
//! frame updates.

mod backdrop;
mod descriptor;
mod item;
mod pick;

use glam::{Quat, Vec2, Vec3};
use rustc_hash::FxHashMap;

pub use backdrop::Backdrop;
pub use descriptor::{GalleryConfig, ItemDescriptor};
pub use item::PhotoItem;

use crate::animation::{FocusTarget, TransitionEngine};
use crate::camera::CameraPose;
use crate::error::PinwallError;
use crate::geometry::{ParentFrame, Ray};
use crate::input::{CursorHint, InputRouter, PointerButton, PointerEvent, PointerId};
use crate::interaction::{PressOutcome, ReleaseOutcome};
use crate::options::{LayoutOptions, Options};
use crate::store::PositionStore;

/// Per-frame output for one photo, consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform<'a> {
    /// Photo id.
    pub id: &'a str,
    /// Displayed position in the container's local space.
    pub position: Vec3,
    /// Displayed uniform scale.
    pub scale: f32,
    /// Displayed orientation relative to the container.
    pub rotation: Quat,
    /// Draw-order hint; focused photos are drawn above the rest.
    pub render_order: i32,
    /// Unscaled photo plane size, once the image is measured.
    pub photo_size: Option<Vec2>,
    /// Unscaled frame (photo plus border) size, once the image is measured.
    pub frame_size: Option<Vec2>,
}

/// The composed wall of photos.
pub struct Gallery<S> {
    items: Vec<PhotoItem>,
    index: FxHashMap<String, usize>,
    store: S,
    router: InputRouter<usize>,
    parent: ParentFrame,
    backdrop: Backdrop,
    engine: TransitionEngine,
    focus: FocusTarget,
    layout: LayoutOptions,
    active_render_order: i32,
    exclusive_focus: bool,
}

impl<S: PositionStore> Gallery<S> {
    /// Build the wall from `config`, restoring positions from `store`.
    pub fn compose(
        config: &GalleryConfig,
        store: S,
        options: &Options,
    ) -> Result<Self, PinwallError> {
        config.validate()?;
        let items: Vec<PhotoItem> = config
            .items
            .iter()
            .map(|descriptor| PhotoItem::new(descriptor, &store))
            .collect();
        let index = items
            .iter()
            .enumerate()
            .map(|(i, item)| (item.id().to_owned(), i))
            .collect();
        log::debug!("Composed gallery with {} photos", items.len());

        Ok(Self {
            items,
            index,
            store,
            router: InputRouter::new(),
            parent: ParentFrame::from_translation(Vec3::from_array(
                options.layout.group_position,
            )),
            backdrop: Backdrop::new(options.layout.backdrop_z),
            engine: TransitionEngine::new(options.transition.rate),
            focus: FocusTarget::from_options(&options.focus),
            layout: options.layout.clone(),
            active_render_order: options.focus.render_order,
            exclusive_focus: options.focus.exclusive,
        })
    }

    /// Photos in descriptor order.
    #[must_use]
    pub fn items(&self) -> &[PhotoItem] {
        &self.items
    }

    /// Photo by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&PhotoItem> {
        self.index.get(id).map(|&i| &self.items[i])
    }

    /// Mutable photo by id (e.g. to tilt it).
    pub fn item_mut(&mut self, id: &str) -> Option<&mut PhotoItem> {
        let i = *self.index.get(id)?;
        Some(&mut self.items[i])
    }

    /// Report a photo's loaded image size. Returns `false` for unknown ids
    /// or empty sizes.
    pub fn set_image_size(&mut self, id: &str, width: u32, height: u32) -> bool {
        self.item_mut(id)
            .is_some_and(|item| item.set_image_size(width, height))
    }

    /// The background plane.
    #[must_use]
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// Mutable background plane (to report its image size).
    pub fn backdrop_mut(&mut self) -> &mut Backdrop {
        &mut self.backdrop
    }

    /// Container transform photos are pinned to.
    #[must_use]
    pub fn parent(&self) -> &ParentFrame {
        &self.parent
    }

    /// Move or reorient the container.
    pub fn set_parent(&mut self, parent: ParentFrame) {
        self.parent = parent;
    }

    /// Position store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable position store (e.g. to flush it).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Ids of focused photos.
    pub fn active_ids(&self) -> impl Iterator<Item = &str> {
        self.items
            .iter()
            .filter(|item| item.interaction().is_active())
            .map(PhotoItem::id)
    }

    /// Strongest cursor hint across all photos.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        self.items
            .iter()
            .map(|item| item.interaction().cursor())
            .max()
            .unwrap_or_default()
    }

    /// Topmost photo under `ray`: focused photos first, then nearest.
    #[must_use]
    pub fn pick(&self, ray: &Ray) -> Option<&str> {
        self.items
            .iter()
            .filter_map(|item| {
                let distance =
                    pick::hit_distance(item, ray, &self.parent, self.layout.photo_height)?;
                Some((item, distance))
            })
            .min_by(|(a, da), (b, db)| {
                let order_a = a.render_order(self.active_render_order);
                let order_b = b.render_order(self.active_render_order);
                order_b.cmp(&order_a).then(da.total_cmp(db))
            })
            .map(|(item, _)| item.id())
    }

    /// Process a pointer event.
    ///
    /// `hit` is the photo under the pointer from the host's hit testing
    /// (or [`pick`](Self::pick)). Events for a captured pointer go to the
    /// capturing photo regardless of `hit`. Returns whether a photo
    /// consumed the event.
    pub fn handle_pointer(&mut self, event: PointerEvent, hit: Option<&str>) -> bool {
        let pointer = event.pointer();
        let captured = self.router.route(pointer);
        let target = captured.or_else(|| hit.and_then(|id| self.index.get(id).copied()));

        match event {
            PointerEvent::Down { button, ray, .. } => {
                let Some(i) = target else { return false };
                self.pointer_down(i, pointer, button, &ray)
            }
            PointerEvent::Move { ray, .. } => {
                let Some(i) = captured else { return false };
                self.pointer_move(i, pointer, &ray)
            }
            PointerEvent::Up { .. } => {
                if captured.is_some() {
                    let _ = self.router.release(pointer);
                }
                let consumed = target.is_some_and(|i| self.pointer_up(i, pointer));
                for item in &mut self.items {
                    item.interaction_mut().forget_press(pointer);
                }
                consumed
            }
            PointerEvent::Enter { .. } => {
                let Some(i) = hit.and_then(|id| self.index.get(id).copied()) else {
                    return false;
                };
                self.items[i].interaction_mut().pointer_enter();
                true
            }
            PointerEvent::Leave { .. } => {
                let Some(i) = hit.and_then(|id| self.index.get(id).copied()) else {
                    return false;
                };
                self.items[i].interaction_mut().pointer_leave();
                true
            }
            PointerEvent::CaptureLost { .. } => {
                let Some(i) = self.router.release(pointer) else {
                    return false;
                };
                let ended = self.items[i].interaction_mut().capture_lost(pointer);
                if ended {
                    log::debug!("Capture lost, drag of '{}' ended", self.items[i].id());
                }
                ended
            }
        }
    }

    fn pointer_down(
        &mut self,
        i: usize,
        pointer: PointerId,
        button: PointerButton,
        ray: &Ray,
    ) -> bool {
        let parent = self.parent;
        let item = &mut self.items[i];
        let rest = item.rest_position();
        match item
            .interaction_mut()
            .pointer_down(pointer, button, rest, ray, &parent)
        {
            PressOutcome::Ignored => {
                log::debug!("Ignored {button:?} press on '{}'", item.id());
                false
            }
            PressOutcome::DragStarted => {
                if !self.router.request_capture(pointer, i) {
                    log::debug!("Pointer {pointer:?} already captured elsewhere");
                }
                log::debug!("Drag started on '{}'", item.id());
                true
            }
            PressOutcome::PressRecorded => true,
        }
    }

    fn pointer_move(&mut self, i: usize, pointer: PointerId, ray: &Ray) -> bool {
        let parent = self.parent;
        let item = &mut self.items[i];
        let rest = item.rest_position();
        let Some(position) = item
            .interaction_mut()
            .pointer_move(pointer, ray, &parent, rest)
        else {
            return false;
        };
        item.set_rest(position);
        self.store.set(item.id(), item.rest_position());
        true
    }

    fn pointer_up(&mut self, i: usize, pointer: PointerId) -> bool {
        match self.items[i].interaction_mut().pointer_up(pointer) {
            ReleaseOutcome::Ignored => false,
            ReleaseOutcome::Dropped => {
                log::debug!(
                    "Dropped '{}' at {}",
                    self.items[i].id(),
                    self.items[i].rest_position()
                );
                true
            }
            ReleaseOutcome::Clicked { active } => {
                log::debug!(
                    "'{}' {}",
                    self.items[i].id(),
                    if active { "focused" } else { "returned to wall" }
                );
                if active && self.exclusive_focus {
                    for (j, other) in self.items.iter_mut().enumerate() {
                        if j != i {
                            let _ = other.interaction_mut().deactivate();
                        }
                    }
                }
                true
            }
        }
    }

    /// Advance every photo's displayed transform by `dt` seconds toward its
    /// target for this camera.
    pub fn update(&mut self, dt: f32, camera: &CameraPose) {
        for item in &mut self.items {
            let target = item.target_pose(camera, &self.focus, self.layout.photo_height);
            item.advance(&self.engine, &target, dt);
        }
    }

    /// Renderer-facing transforms for the current frame.
    pub fn transforms(&self) -> impl Iterator<Item = ItemTransform<'_>> {
        self.items.iter().map(|item| {
            let pose = item.displayed();
            ItemTransform {
                id: item.id(),
                position: pose.position,
                scale: pose.scale,
                rotation: item.rotation(),
                render_order: item.render_order(self.active_render_order),
                photo_size: item.photo_size(self.layout.photo_height),
                frame_size: item
                    .frame_size(self.layout.photo_height, self.layout.frame_border),
            }
        })
    }
}
