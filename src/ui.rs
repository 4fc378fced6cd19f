//! Egui panels: simulation controls, the live energy pie chart, and the
//! angle-scale labels projected next to the tick marks.

use std::f32::consts::TAU;

use egui::{Align2, Color32, FontId, Pos2, Sense, Shape, Vec2};

use crate::camera::Camera;
use crate::energy::EnergyHistory;
use crate::state::{bob_position, PendulumState};

const KINETIC_COLOR: Color32 = Color32::from_rgb(70, 110, 230);
const POTENTIAL_COLOR: Color32 = Color32::from_rgb(70, 190, 90);
const MECHANICAL_COLOR: Color32 = Color32::from_rgb(220, 60, 60);

/// Degree labels matching the tick marks drawn by the scene pass.
const SCALE_DEGREES: [i32; 5] = [90, 45, 0, -45, -90];

/// How far beyond the rod tip the labels sit, as a factor of the rod length.
const LABEL_RADIUS: f32 = 1.18;

/// Draw all UI for one frame.
pub fn draw(
    ctx: &egui::Context,
    state: &mut PendulumState,
    history: &EnergyHistory,
    camera: &Camera,
    aspect: f32,
    fps: f32,
) {
    controls_window(ctx, state, fps);
    energy_window(ctx, history);
    scale_labels(ctx, camera, aspect);
}

fn controls_window(ctx: &egui::Context, state: &mut PendulumState, fps: f32) {
    egui::Window::new("Pendulum")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let swing_label = if state.is_swinging { "Pause" } else { "Swing" };
                if ui.button(swing_label).clicked() {
                    state.is_swinging = !state.is_swinging;
                }

                let gravity_label = if state.gravity_on {
                    "Gravity off"
                } else {
                    "Gravity on"
                };
                if ui.button(gravity_label).clicked() {
                    state.gravity_on = !state.gravity_on;
                }
            });

            ui.separator();
            ui.label(format!("Angle: {:.1} deg", state.angle.to_degrees()));
            ui.label(format!("Velocity: {:.5} rad/frame", state.angular_velocity));
            ui.label(format!("FPS: {:.0}", fps));

            ui.separator();
            ui.small("Drag the bob to reposition it.");
            ui.small("Space toggles swing, G toggles gravity.");
        });
}

fn energy_window(ctx: &egui::Context, history: &EnergyHistory) {
    let sample = history.latest();

    egui::Window::new("Energy")
        .default_pos([10.0, 220.0])
        .resizable(false)
        .show(ctx, |ui| {
            pie_chart(
                ui,
                &[
                    (sample.kinetic, KINETIC_COLOR),
                    (sample.potential, POTENTIAL_COLOR),
                    (sample.mechanical, MECHANICAL_COLOR),
                ],
            );

            ui.colored_label(KINETIC_COLOR, format!("Kinetic: {:.6}", sample.kinetic));
            ui.colored_label(
                POTENTIAL_COLOR,
                format!("Potential: {:.6}", sample.potential),
            );
            ui.colored_label(
                MECHANICAL_COLOR,
                format!("Mechanical: {:.6}", sample.mechanical),
            );
            ui.small(format!("tick {}", sample.time));
        });
}

/// Pie chart of the given slices, drawn as triangle fans.
///
/// Mechanical energy equals kinetic plus potential, so the total is twice
/// the mechanical term and no slice can exceed half the circle. That keeps
/// every fan convex, which `Shape::convex_polygon` requires.
fn pie_chart(ui: &mut egui::Ui, slices: &[(f32, Color32)]) {
    let (response, painter) = ui.allocate_painter(Vec2::splat(130.0), Sense::hover());
    let rect = response.rect;
    let center = rect.center();
    let radius = rect.width() * 0.45;

    let total: f32 = slices.iter().map(|(v, _)| v.max(0.0)).sum();
    if total <= f32::EPSILON {
        // Nothing to show yet (at rest, or no sample appended).
        painter.circle_stroke(center, radius, (1.0, Color32::GRAY));
        return;
    }

    // Screen y points down, so this sweeps clockwise from 12 o'clock.
    let mut start = -std::f32::consts::FRAC_PI_2;
    for &(value, color) in slices {
        let fraction = value.max(0.0) / total;
        if fraction <= 0.0 {
            continue;
        }
        let sweep = fraction * TAU;

        let steps = ((sweep / TAU * 64.0).ceil() as usize).max(2);
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for i in 0..=steps {
            let angle = start + sweep * i as f32 / steps as f32;
            points.push(center + radius * Vec2::new(angle.cos(), angle.sin()));
        }
        painter.add(Shape::convex_polygon(points, color, egui::Stroke::NONE));

        start += sweep;
    }
}

/// Degree labels projected from world space next to the tick marks.
fn scale_labels(ctx: &egui::Context, camera: &Camera, aspect: f32) {
    let painter = ctx.layer_painter(egui::LayerId::background());
    let screen = ctx.screen_rect();

    for degrees in SCALE_DEGREES {
        let anchor = bob_position((degrees as f32).to_radians()) * LABEL_RADIUS;
        let Some(ndc) = camera.world_to_ndc(anchor, aspect) else {
            continue;
        };
        let pos = Pos2::new(
            screen.left() + (ndc.x * 0.5 + 0.5) * screen.width(),
            screen.top() + (0.5 - ndc.y * 0.5) * screen.height(),
        );
        painter.text(
            pos,
            Align2::CENTER_CENTER,
            format!("{degrees}\u{00b0}"),
            FontId::proportional(12.0),
            Color32::GRAY,
        );
    }
}
