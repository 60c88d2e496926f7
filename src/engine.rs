//! The composition-root context driving the wall.
//!
//! `WallEngine` replaces the scattered module-level state of a typical demo
//! with one explicit object: it owns the options, viewport, derived view
//! volume, instance list, input processor, and template-load status. The
//! host feeds it raw input events as they arrive and ticks [`frame`]
//! (re-armed from the repaint scheduler) once per redraw; everything runs
//! on the host's single logical thread of control, so an event landing
//! between two ticks is simply visible to the next one.
//!
//! [`frame`]: WallEngine::frame

use glam::Vec2;

use crate::camera::{ViewVolume, Viewport};
use crate::error::WallError;
use crate::input::{DeviceCapabilities, InputEvent, InputMode, InputProcessor, WallCommand};
use crate::layout::{layout, GridSpec};
use crate::options::Options;
use crate::scene::{Instance, InstanceId, SceneHost};
use crate::tilt::{apply_smoothing, device_to_world, update_targets};

/// Where the one-time template load stands.
///
/// The load itself is the host's asynchronous operation; the engine only
/// tracks its outcome. Until the template is ready no instances exist and
/// layout never runs. A failed load leaves the wall permanently empty —
/// logged, not fatal, no retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateStatus {
    /// Load in flight (or never started).
    #[default]
    Pending,
    /// Template available; the grid is populated.
    Ready,
    /// Load failed; the wall stays empty.
    Failed,
}

/// The wall's composition-root context.
pub struct WallEngine {
    options: Options,
    viewport: Viewport,
    view_volume: ViewVolume,
    input: InputProcessor,
    instances: Vec<Instance>,
    template: TemplateStatus,
    pointer_world: Option<Vec2>,
    next_instance_id: u32,
}

impl WallEngine {
    /// Create an engine for the given configuration and initial viewport.
    ///
    /// `caps` is the host's startup environment probe; together with
    /// `options.input.mode` it fixes the input mode for the engine's
    /// lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`WallError::Config`] when any option violates the
    /// preconditions checked by [`Options::validate`].
    pub fn new(
        options: Options,
        viewport: Viewport,
        caps: DeviceCapabilities,
    ) -> Result<Self, WallError> {
        options.validate()?;
        let view_volume = ViewVolume::derive(options.camera.projection(), viewport);
        let input = InputProcessor::new(options.input.mode, caps);
        Ok(Self {
            options,
            viewport,
            view_volume,
            input,
            instances: Vec::new(),
            template: TemplateStatus::Pending,
            pointer_world: None,
            next_instance_id: 0,
        })
    }

    // -- Template load callbacks --

    /// The host's loader delivered the template: populate the grid.
    pub fn template_loaded(&mut self, host: &mut dyn SceneHost) {
        if self.template == TemplateStatus::Ready {
            log::warn!("template delivered twice, repopulating");
        }
        self.template = TemplateStatus::Ready;
        self.repopulate(host);
        let spec = self.grid_spec();
        log::info!(
            "wall populated: {} instances ({} columns x {} rows)",
            self.instances.len(),
            spec.columns,
            spec.rows,
        );
    }

    /// Informational load-progress callback. Ignored once the load has
    /// already resolved either way.
    pub fn load_progress(&self, loaded: u64, total: Option<u64>) {
        if self.template != TemplateStatus::Pending {
            return;
        }
        match total {
            Some(total) if total > 0 => {
                log::debug!(
                    "template load: {:.0}%",
                    loaded as f64 / total as f64 * 100.0
                );
            }
            _ => log::debug!("template load: {loaded} bytes"),
        }
    }

    /// The load failed. The wall stays empty; there is no retry path.
    pub fn load_failed(&mut self, error: &str) {
        self.template = TemplateStatus::Failed;
        log::error!("template load failed, wall stays empty: {error}");
    }

    // -- Input --

    /// Feed a raw platform event through the input processor.
    pub fn handle_event(&mut self, event: InputEvent, host: &mut dyn SceneHost) {
        if let Some(cmd) = self.input.handle_event(event, self.viewport) {
            self.handle_command(cmd, host);
        }
    }

    /// Apply an already-interpreted command.
    pub fn handle_command(&mut self, cmd: WallCommand, host: &mut dyn SceneHost) {
        match cmd {
            WallCommand::PointerMoved { device } => {
                let world = device_to_world(device, self.viewport, self.view_volume);
                self.pointer_world = Some(world);
                // Input-event path: retarget immediately so several events
                // between two frames leave only the last one standing.
                self.retarget();
            }
            WallCommand::Resize { viewport } => self.resize(viewport, host),
        }
    }

    /// Adopt a new viewport: re-derive the view volume and rebuild the grid
    /// from scratch. Synchronous and not cheap, but resize is rare next to
    /// per-frame tilt updates.
    fn resize(&mut self, viewport: Viewport, host: &mut dyn SceneHost) {
        self.viewport = viewport;
        self.view_volume = ViewVolume::derive(self.options.camera.projection(), viewport);
        if self.template == TemplateStatus::Ready {
            self.repopulate(host);
        }
    }

    // -- Frame loop --

    /// Per-frame tick: one smoothing step, then push tilts to the host.
    ///
    /// A no-op until the template is ready. The host re-arms this from its
    /// repaint scheduler; skipping ticks freezes motion and nothing else.
    pub fn frame(&mut self, host: &mut dyn SceneHost) {
        if self.template != TemplateStatus::Ready {
            return;
        }
        self.retarget();
        apply_smoothing(&mut self.instances, self.options.tilt.smoothing);
        for instance in &self.instances {
            host.set_tilt(instance.id, instance.tilt);
        }
    }

    /// Recompute tilt targets from the last pointer sample. Without any
    /// pointer input yet, targets stay neutral.
    fn retarget(&mut self) {
        if let Some(pointer) = self.pointer_world {
            update_targets(
                pointer,
                &mut self.instances,
                self.options.tilt.influence_radius,
                self.options.tilt.max_tilt,
            );
        }
    }

    /// Destroy every instance and rebuild the grid for the current view
    /// volume. Stale instances are fully cleared before repopulation, never
    /// patched in place.
    fn repopulate(&mut self, host: &mut dyn SceneHost) {
        host.clear();
        self.instances.clear();
        for cell in layout(self.view_volume, self.options.grid.spacing) {
            let id = InstanceId(self.next_instance_id);
            self.next_instance_id += 1;
            let instance = Instance::at(id, cell);
            host.spawn(id, instance.position);
            self.instances.push(instance);
        }
    }

    // -- Accessors --

    /// The current instance set, column-major.
    #[must_use]
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Grid dimensions for the current view volume and spacing.
    #[must_use]
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::covering(self.view_volume, self.options.grid.spacing)
    }

    /// The current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The current world-space visible extent.
    #[must_use]
    pub fn view_volume(&self) -> ViewVolume {
        self.view_volume
    }

    /// The active input mode.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.input.mode()
    }

    /// Where the template load stands.
    #[must_use]
    pub fn template_status(&self) -> TemplateStatus {
        self.template
    }

    /// The engine's configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Last pointer position in world space, if any input arrived yet.
    #[must_use]
    pub fn pointer_world(&self) -> Option<Vec2> {
        self.pointer_world
    }
}
