//! Windowed session: builder, event loop, and the per-frame tick.
//!
//! `Session` is the public entry point. It owns nothing GPU-side until the
//! event loop delivers `resumed`, at which point the window, GPU state, and
//! egui glue are created. Each redraw advances the simulation one tick and
//! renders the scene plus UI.

use std::sync::Arc;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use glam::Vec3;

use crate::energy::EnergyHistory;
use crate::error::SessionError;
use crate::gpu::ui_layer::UiLayer;
use crate::gpu::{GpuState, SceneFrame};
use crate::input::{Input, KeyCode};
use crate::integrator::Integrator;
use crate::interaction;
use crate::state::PendulumState;
use crate::time::Time;
use crate::ui;

const BOB_COLOR: Vec3 = Vec3::new(0.95, 0.60, 0.15);
const BOB_DRAG_COLOR: Vec3 = Vec3::new(1.0, 0.85, 0.40);

/// Builder for a pendulum session.
///
/// ```no_run
/// use pendlab::Session;
///
/// Session::new()
///     .with_initial_angle(0.6)
///     .run()
///     .unwrap();
/// ```
pub struct Session {
    initial_angle: f32,
    title: String,
}

impl Session {
    pub fn new() -> Self {
        Self {
            initial_angle: 0.0,
            title: "Pendulum Lab".to_string(),
        }
    }

    /// Start the bob displaced to `angle` radians (0 hangs straight down).
    pub fn with_initial_angle(mut self, angle: f32) -> Self {
        self.initial_angle = angle;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Run the session. Blocks until the window is closed.
    pub fn run(self) -> Result<(), SessionError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App::new(self.title, self.initial_angle);
        event_loop.run_app(&mut app)?;

        match app.startup_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    title: String,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    ui_layer: Option<UiLayer>,
    input: Input,
    time: Time,
    state: PendulumState,
    integrator: Integrator,
    history: EnergyHistory,
    startup_error: Option<SessionError>,
}

impl App {
    fn new(title: String, initial_angle: f32) -> Self {
        let state = PendulumState::with_angle(initial_angle);
        let integrator = Integrator::new(state.gravity_on);
        Self {
            title,
            window: None,
            gpu: None,
            ui_layer: None,
            input: Input::new(),
            time: Time::new(),
            state,
            integrator,
            history: EnergyHistory::new(),
            startup_error: None,
        }
    }

    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(gpu), Some(ui_layer), Some(window)) =
            (self.gpu.as_mut(), self.ui_layer.as_mut(), self.window.as_ref())
        else {
            return;
        };

        self.time.update();

        if self.input.key_pressed(KeyCode::Space) {
            self.state.is_swinging = !self.state.is_swinging;
        }
        if self.input.key_pressed(KeyCode::G) {
            self.state.gravity_on = !self.state.gravity_on;
        }
        if self.input.key_pressed(KeyCode::Escape) {
            event_loop.exit();
        }

        if let Some(sample) = self
            .integrator
            .step(&mut self.state, self.time.elapsed_millis())
        {
            self.history.append(sample);
        }

        let fps = self.time.fps();
        let state = &mut self.state;
        let history = &self.history;
        let camera = &gpu.camera;
        let aspect = gpu.aspect();
        let ui_frame = ui_layer.run(window, |ctx| {
            ui::draw(ctx, state, history, camera, aspect, fps);
        });

        let frame = SceneFrame {
            bob: self.state.bob_position(),
            bob_color: if self.state.is_dragging {
                BOB_DRAG_COLOR
            } else {
                BOB_COLOR
            },
        };

        match gpu.render(&frame, ui_layer, ui_frame) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                width: gpu.config.width,
                height: gpu.config.height,
            }),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => eprintln!("Render error: {:?}", e),
        }

        self.input.begin_frame();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                self.startup_error = Some(SessionError::Window(e));
                event_loop.exit();
                return;
            }
        };

        let gpu = match pollster::block_on(GpuState::new(window.clone())) {
            Ok(gpu) => gpu,
            Err(e) => {
                self.startup_error = Some(SessionError::Gpu(e));
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.input.set_window_size(size.width, size.height);

        self.ui_layer = Some(UiLayer::new(gpu.device(), gpu.surface_format(), &window));
        self.gpu = Some(gpu);
        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // Events egui claims (clicks on the panels, typing) must not reach
        // the drag handlers.
        let consumed = match self.ui_layer.as_mut() {
            Some(ui_layer) => ui_layer.on_window_event(&window, &event),
            None => false,
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                self.input
                    .set_window_size(physical_size.width, physical_size.height);
            }
            WindowEvent::RedrawRequested => {
                self.tick(event_loop);
                window.request_redraw();
            }
            // A release must end a drag no matter what the cursor is over,
            // so it is excluded from this claimed-event guard. Otherwise a
            // drag released over a panel would stick to the pointer.
            _ if consumed && !ends_drag(&event) => {}
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.handle_event(&event);
                if button == WinitMouseButton::Left {
                    match state {
                        ElementState::Pressed => {
                            if let Some(gpu) = &self.gpu {
                                let ray =
                                    gpu.camera.ndc_ray(self.input.mouse_ndc(), gpu.aspect());
                                interaction::pointer_down(&ray, &mut self.state);
                            }
                        }
                        ElementState::Released => {
                            interaction::pointer_up(&mut self.state);
                        }
                    }
                }
            }
            WindowEvent::CursorMoved { .. } => {
                self.input.handle_event(&event);
                if self.state.is_dragging {
                    if let Some(gpu) = &self.gpu {
                        let ray = gpu.camera.ndc_ray(self.input.mouse_ndc(), gpu.aspect());
                        interaction::pointer_move(&ray, &mut self.state);
                    }
                }
            }
            _ => {
                self.input.handle_event(&event);
            }
        }
    }
}

/// True for events that must reach the drag handlers even when egui claims
/// them: a left-button release always ends a drag.
fn ends_drag(event: &WindowEvent) -> bool {
    matches!(
        event,
        WindowEvent::MouseInput {
            state: ElementState::Released,
            button: WinitMouseButton::Left,
            ..
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse_input(state: ElementState, button: WinitMouseButton) -> WindowEvent {
        WindowEvent::MouseInput {
            device_id: unsafe { winit::event::DeviceId::dummy() },
            state,
            button,
        }
    }

    #[test]
    fn test_left_release_bypasses_claimed_event_guard() {
        // Releasing over a panel still has to clear the drag flags.
        assert!(ends_drag(&mouse_input(
            ElementState::Released,
            WinitMouseButton::Left
        )));
    }

    #[test]
    fn test_other_pointer_events_stay_claimable() {
        assert!(!ends_drag(&mouse_input(
            ElementState::Pressed,
            WinitMouseButton::Left
        )));
        assert!(!ends_drag(&mouse_input(
            ElementState::Released,
            WinitMouseButton::Right
        )));
    }
}
