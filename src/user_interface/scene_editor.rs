//! Debug menu for live-editing the scene
use super::config_ui::{DEBUG_WINDOW_TITLE, DRAG_INC, MAX_PRIMITIVE_SIZE, MAX_SMOOTHING_FACTOR};
use crate::{
    engine::{
        commands::SceneCommand,
        primitives::{
            cuboid::Cuboid,
            plane::Plane,
            primitive::{Primitive, PrimitiveDescriptor},
            primitive_kind::PrimitiveKind,
            sphere::Sphere,
            torus::Torus,
        },
        scene_table::{SceneTable, SmoothingSettings},
    },
    renderer::shader_program::ShaderProgram,
};
use egui::{CollapsingHeader, ComboBox, DragValue, RichText, TextStyle};
use glam::Vec3;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use std::ops::RangeInclusive;

/// Draws the debug menu window. Returns the edits made this frame, to be passed to
/// [`SceneTable::apply_commands`].
pub fn draw_scene_editor_window<P: ShaderProgram>(
    context: &egui::Context,
    scene: &SceneTable<P>,
) -> Vec<SceneCommand> {
    let mut commands = Vec::<SceneCommand>::new();

    let add_contents = |ui: &mut egui::Ui| {
        commands = layout_scene_editor(ui, scene);
    };
    egui::Window::new(DEBUG_WINDOW_TITLE)
        .resizable(true)
        .vscroll(true)
        .show(context, add_contents);

    commands
}

/// Smoothing controls followed by an editor for each primitive. Edits are made on copies and only
/// entries that actually changed produce a command.
pub fn layout_scene_editor<P: ShaderProgram>(
    ui: &mut egui::Ui,
    scene: &SceneTable<P>,
) -> Vec<SceneCommand> {
    let mut commands = Vec::<SceneCommand>::new();

    let old_smoothing = scene.smoothing();
    let mut new_smoothing = old_smoothing;
    ui.horizontal(|ui_h| {
        ui_h.checkbox(&mut new_smoothing.enabled, "Smoothing");
        edited_drag_value(ui_h, &mut new_smoothing.factor, 0.0..=MAX_SMOOTHING_FACTOR);
    });
    commands.extend(smoothing_command(old_smoothing, new_smoothing));

    ui.separator();
    ui.label(format!(
        "Primitives: {}/{}",
        scene.count(),
        scene.capacity()
    ));

    for (index, descriptor) in scene.objects().iter().enumerate() {
        commands.extend(primitive_section_ui(ui, index, descriptor, false));
    }

    commands
}

/// Collapsible editor for the primitive at `index`
fn primitive_section_ui(
    ui: &mut egui::Ui,
    index: usize,
    descriptor: &PrimitiveDescriptor,
    default_open: bool,
) -> Option<SceneCommand> {
    let mut edited = *descriptor;

    let header_text = RichText::new(format!("{} - {}", index, descriptor.kind()))
        .text_style(TextStyle::Monospace);
    CollapsingHeader::new(header_text)
        .id_source(format!("primitive {}", index))
        .default_open(default_open)
        .show(ui, |ui_c| {
            primitive_editor_ui(ui_c, index, &mut edited);
        });

    object_command(index, descriptor, edited)
}

fn smoothing_command(old: SmoothingSettings, new: SmoothingSettings) -> Option<SceneCommand> {
    if new == old {
        return None;
    }
    Some(SceneCommand::SetSmoothing {
        enabled: new.enabled,
        factor: new.factor,
    })
}

fn object_command(
    index: usize,
    old: &PrimitiveDescriptor,
    edited: PrimitiveDescriptor,
) -> Option<SceneCommand> {
    if edited == *old {
        return None;
    }
    Some(SceneCommand::UpdateObject {
        index,
        descriptor: edited,
    })
}

/// Kind drop down, material and kind specific fields
pub fn primitive_editor_ui(ui: &mut egui::Ui, index: usize, descriptor: &mut PrimitiveDescriptor) {
    let old_kind = descriptor.kind();
    let mut new_kind = old_kind;
    ComboBox::from_id_source(format!("primitive kind drop down {}", index))
        .selected_text(old_kind.name())
        .show_ui(ui, |ui_k| {
            for &kind in PrimitiveKind::variants() {
                ui_k.selectable_value(&mut new_kind, kind, kind.name());
            }
        });
    change_kind(descriptor, new_kind);

    ui.horizontal(|ui_h| {
        ui_h.label("Material:");
        ui_h.add(DragValue::new(&mut descriptor.material));
    });

    match &mut descriptor.primitive {
        Primitive::Sphere(sphere) => sphere_editor_ui(ui, sphere),
        Primitive::Box(cuboid) => cuboid_editor_ui(ui, cuboid),
        Primitive::Torus(torus) => torus_editor_ui(ui, torus),
        Primitive::Plane(plane) => plane_editor_ui(ui, plane),
    }
}

/// Swaps in a default payload of `new_kind` at the same position, keeping the material. Planes
/// have no position so switching away from one starts at the origin.
pub fn change_kind(descriptor: &mut PrimitiveDescriptor, new_kind: PrimitiveKind) {
    if descriptor.kind() == new_kind {
        return;
    }
    let position = descriptor.position().unwrap_or(Vec3::ZERO);
    descriptor.primitive = Primitive::default_of_kind(new_kind, position);
}

pub fn sphere_editor_ui(ui: &mut egui::Ui, sphere: &mut Sphere) {
    vec3_editor_ui(ui, "Position:", &mut sphere.center);
    ui.horizontal(|ui_h| {
        ui_h.label("Radius:");
        edited_drag_value(ui_h, &mut sphere.radius, 0.0..=MAX_PRIMITIVE_SIZE);
    });
}

pub fn cuboid_editor_ui(ui: &mut egui::Ui, cuboid: &mut Cuboid) {
    vec3_editor_ui(ui, "Position:", &mut cuboid.center);
    vec3_editor_ui(ui, "Half extents:", &mut cuboid.half_extents);
}

pub fn torus_editor_ui(ui: &mut egui::Ui, torus: &mut Torus) {
    vec3_editor_ui(ui, "Position:", &mut torus.center);
    ui.horizontal(|ui_h| {
        ui_h.label("Radii:");
        edited_drag_value(ui_h, &mut torus.radii.x, 0.0..=MAX_PRIMITIVE_SIZE);
        edited_drag_value(ui_h, &mut torus.radii.y, 0.0..=MAX_PRIMITIVE_SIZE);
    });
}

pub fn plane_editor_ui(ui: &mut egui::Ui, plane: &mut Plane) {
    vec3_editor_ui(ui, "Normal:", &mut plane.normal);
    ui.horizontal(|ui_h| {
        ui_h.label("Offset:");
        ui_h.add(DragValue::new(&mut plane.offset).speed(DRAG_INC));
    });
}

fn vec3_editor_ui(ui: &mut egui::Ui, label: &str, value: &mut Vec3) {
    ui.horizontal(|ui_h| {
        ui_h.label(label);
        ui_h.add(DragValue::new(&mut value.x).speed(DRAG_INC));
        ui_h.add(DragValue::new(&mut value.y).speed(DRAG_INC));
        ui_h.add(DragValue::new(&mut value.z).speed(DRAG_INC));
    });
}

/// Drag value that only applies `range` to numbers the user entered. Values set outside the debug
/// menu are left as they are when drawn.
fn edited_drag_value(ui: &mut egui::Ui, value: &mut f32, range: RangeInclusive<f32>) {
    let mut edit = *value;
    let response = ui.add(DragValue::new(&mut edit).speed(DRAG_INC));
    if response.changed() {
        *value = edit.clamp(*range.start(), *range.end());
    }
}

// ~~ Tests ~~
