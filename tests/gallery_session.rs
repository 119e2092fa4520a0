//! Full pointer sessions against a composed gallery.

use glam::{Quat, Vec2, Vec3};
use pinwall::camera::CameraPose;
use pinwall::gallery::{Gallery, GalleryConfig, ItemDescriptor};
use pinwall::geometry::{visible_extent, ParentFrame, Ray};
use pinwall::input::{PointerButton, PointerEvent, PointerId};
use pinwall::interaction::InteractionState;
use pinwall::options::Options;
use pinwall::store::{JsonFileStore, MemoryStore, PositionStore};

const MOUSE: PointerId = PointerId(1);

fn single(id: &str, position: [f32; 3]) -> GalleryConfig {
    GalleryConfig {
        items: vec![ItemDescriptor {
            id: id.into(),
            image: format!("/photos/{id}"),
            position,
        }],
    }
}

/// Options with the container at the world origin so local == world.
fn flat_options() -> Options {
    let mut options = Options::default();
    options.layout.group_position = [0.0, 0.0, 0.0];
    options
}

fn ray_to(x: f32, y: f32) -> Ray {
    Ray::new(Vec3::new(x, y, 5.0), Vec3::new(0.0, 0.0, -1.0))
}

fn down(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down {
        pointer: MOUSE,
        button: PointerButton::Primary,
        ray: ray_to(x, y),
    }
}

fn drag_to(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move {
        pointer: MOUSE,
        ray: ray_to(x, y),
    }
}

fn up() -> PointerEvent {
    PointerEvent::Up {
        pointer: MOUSE,
        button: PointerButton::Primary,
    }
}

#[test]
fn drag_moves_by_offset_and_does_not_focus() {
    let mut gallery =
        Gallery::compose(&single("1.jpg", [0.0, 0.0, 0.0]), MemoryStore::new(), &flat_options())
            .unwrap();

    assert!(gallery.handle_pointer(down(1.0, 1.0), Some("1.jpg")));
    assert_eq!(gallery.item("1.jpg").unwrap().state(), InteractionState::Dragging);
    assert!(gallery.handle_pointer(drag_to(2.0, 3.0), None));
    assert!(gallery.handle_pointer(up(), None));

    let item = gallery.item("1.jpg").unwrap();
    assert!((item.rest_position() - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-6);
    assert_eq!(item.state(), InteractionState::Idle);
    assert_eq!(gallery.active_ids().count(), 0);
    assert_eq!(gallery.store().get("1.jpg"), Some(item.rest_position()));
}

#[test]
fn click_toggles_focus_on_and_off() {
    let mut gallery =
        Gallery::compose(&single("2.jpg", [0.0, 0.0, 0.0]), MemoryStore::new(), &flat_options())
            .unwrap();

    assert!(gallery.handle_pointer(down(0.0, 0.0), Some("2.jpg")));
    assert!(gallery.handle_pointer(up(), Some("2.jpg")));
    assert_eq!(gallery.item("2.jpg").unwrap().state(), InteractionState::Active);
    assert_eq!(gallery.transforms().next().unwrap().render_order, 1000);

    assert!(gallery.handle_pointer(down(0.0, 0.0), Some("2.jpg")));
    assert!(gallery.handle_pointer(up(), Some("2.jpg")));
    assert_eq!(gallery.item("2.jpg").unwrap().state(), InteractionState::Idle);
    assert_eq!(gallery.transforms().next().unwrap().render_order, 0);
    // A click never writes a position
    assert_eq!(gallery.store().get("2.jpg"), None);
}

#[test]
fn secondary_button_is_ignored() {
    let mut gallery =
        Gallery::compose(&single("3.jpg", [0.0, 0.0, 0.0]), MemoryStore::new(), &flat_options())
            .unwrap();
    let press = PointerEvent::Down {
        pointer: MOUSE,
        button: PointerButton::Secondary,
        ray: ray_to(0.0, 0.0),
    };
    assert!(!gallery.handle_pointer(press, Some("3.jpg")));
    assert!(!gallery.handle_pointer(up(), Some("3.jpg")));
    assert_eq!(gallery.item("3.jpg").unwrap().state(), InteractionState::Idle);
}

#[test]
fn focused_photo_settles_into_reading_pose() {
    let options = Options::default();
    let mut gallery =
        Gallery::compose(&single("4.jpg", [5.5, 4.97, 0.0]), MemoryStore::new(), &options).unwrap();
    assert!(gallery.set_image_size("4.jpg", 1200, 800));
    gallery.item_mut("4.jpg").unwrap().set_rotation(Quat::from_rotation_z(0.1));

    let parent = *gallery.parent();
    let world = parent.local_to_world(Vec3::new(5.5, 4.97, 0.0));
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let click = PointerEvent::Down {
        pointer: MOUSE,
        button: PointerButton::Primary,
        ray: Ray::new(eye, world - eye),
    };
    assert!(gallery.handle_pointer(click, Some("4.jpg")));
    assert!(gallery.handle_pointer(up(), Some("4.jpg")));

    let camera = CameraPose::new(eye, 75.0, 16.0 / 9.0);
    for _ in 0..240 {
        gallery.update(1.0 / 60.0, &camera);
    }

    let t = gallery.transforms().next().unwrap();
    assert!((t.position - Vec3::new(0.0, -1.0, 8.4)).length() < 1e-3);
    assert_eq!(t.rotation, Quat::IDENTITY);

    let extent = visible_extent(75.0, 16.0 / 9.0, 1.5).unwrap() * 0.98;
    let photo = Vec2::new(2.5 * 1.5, 2.5) * t.scale;
    assert!(photo.x <= extent.x + 1e-3);
    assert!(photo.y <= extent.y + 1e-3);
    assert!((photo.x - extent.x).abs() < 1e-3 || (photo.y - extent.y).abs() < 1e-3);
}

#[test]
fn unfocused_photo_returns_to_rest_at_unit_scale() {
    let mut gallery =
        Gallery::compose(&single("5.jpg", [1.0, 1.0, 0.0]), MemoryStore::new(), &flat_options())
            .unwrap();
    assert!(gallery.set_image_size("5.jpg", 800, 800));
    let camera = CameraPose::default();

    assert!(gallery.handle_pointer(down(1.0, 1.0), Some("5.jpg")));
    assert!(gallery.handle_pointer(up(), Some("5.jpg")));
    for _ in 0..30 {
        gallery.update(1.0 / 60.0, &camera);
    }
    assert!(gallery.handle_pointer(down(0.0, 0.0), Some("5.jpg")));
    assert!(gallery.handle_pointer(up(), Some("5.jpg")));
    for _ in 0..240 {
        gallery.update(1.0 / 60.0, &camera);
    }

    let t = gallery.transforms().next().unwrap();
    assert!((t.position - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-3);
    assert!((t.scale - 1.0).abs() < 1e-3);
}

#[test]
fn unmeasured_photo_keeps_scale_while_focused() {
    let mut gallery =
        Gallery::compose(&single("6.jpg", [0.0, 0.0, 0.0]), MemoryStore::new(), &flat_options())
            .unwrap();
    assert!(gallery.handle_pointer(down(0.0, 0.0), Some("6.jpg")));
    assert!(gallery.handle_pointer(up(), Some("6.jpg")));
    for _ in 0..10 {
        gallery.update(1.0 / 60.0, &CameraPose::default());
    }
    let t = gallery.transforms().next().unwrap();
    assert_eq!(t.scale, 1.0);
    assert!(t.position.z > 0.0);
}

#[test]
fn stored_positions_restore_across_sessions() {
    let mut store = MemoryStore::new();
    store.set("7.jpg", Vec3::new(-1.5, 2.25, 0.0));
    let config = GalleryConfig {
        items: vec![
            ItemDescriptor {
                id: "7.jpg".into(),
                image: "/photos/7.jpg".into(),
                position: [1.6, 0.09, 0.0],
            },
            ItemDescriptor {
                id: "8.jpg".into(),
                image: "/photos/8.jpg".into(),
                position: [5.89, 2.0, 0.0],
            },
        ],
    };
    let gallery = Gallery::compose(&config, store, &Options::default()).unwrap();
    assert_eq!(gallery.item("7.jpg").unwrap().rest_position(), Vec3::new(-1.5, 2.25, 0.0));
    assert_eq!(gallery.item("8.jpg").unwrap().rest_position(), Vec3::new(5.89, 2.0, 0.0));
}

#[test]
fn dropped_gallery_keeps_dragged_positions() {
    let path = std::env::temp_dir()
        .join(format!("pinwall-session-{}", std::process::id()))
        .join("positions.json");
    let config = single("10.jpg", [0.0, 0.0, 0.0]);

    let mut gallery =
        Gallery::compose(&config, JsonFileStore::open(&path).unwrap(), &flat_options()).unwrap();
    assert!(gallery.handle_pointer(down(0.0, 0.0), Some("10.jpg")));
    assert!(gallery.handle_pointer(drag_to(2.0, 0.0), None));
    assert!(gallery.handle_pointer(up(), None));
    drop(gallery);

    let store = JsonFileStore::open(&path).unwrap();
    assert_eq!(store.get("10.jpg"), Some(Vec3::new(2.0, 0.0, 0.0)));
    let restored = Gallery::compose(&config, store, &flat_options()).unwrap();
    assert_eq!(restored.item("10.jpg").unwrap().rest_position(), Vec3::new(2.0, 0.0, 0.0));
    drop(restored);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn drag_on_rotated_container_stays_on_its_plane() {
    let mut gallery =
        Gallery::compose(&single("9.jpg", [0.0, 0.0, 0.0]), MemoryStore::new(), &flat_options())
            .unwrap();
    gallery.set_parent(
        ParentFrame::from_translation(Vec3::new(0.0, 0.0, -4.0))
            .with_rotation(Quat::from_rotation_y(0.5)),
    );
    let eye = Vec3::new(0.0, 0.0, 5.0);
    let press = PointerEvent::Down {
        pointer: MOUSE,
        button: PointerButton::Primary,
        ray: Ray::new(eye, Vec3::new(0.0, 0.0, -1.0)),
    };
    assert!(gallery.handle_pointer(press, Some("9.jpg")));
    let moved = PointerEvent::Move {
        pointer: MOUSE,
        ray: Ray::new(eye, Vec3::new(0.1, 0.2, -1.0)),
    };
    assert!(gallery.handle_pointer(moved, None));
    assert!(gallery.handle_pointer(up(), None));

    let rest = gallery.item("9.jpg").unwrap().rest_position();
    assert_eq!(rest.z, 0.0);
    assert!(rest.y > 0.0);
    assert_eq!(gallery.item("9.jpg").unwrap().state(), InteractionState::Idle);
}

#[test]
fn bundled_gallery_parses() {
    let config = GalleryConfig::from_toml_str(include_str!("../assets/gallery.toml")).unwrap();
    assert_eq!(config.items.len(), 14);
    assert!(config.items.iter().all(|item| item.position[2] == 0.0));
}
