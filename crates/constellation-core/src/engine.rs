//! The constellation animation engine.
//!
//! [`Constellation`] owns the dot population and draws one frame per
//! [`Constellation::tick`]. It does not schedule itself: the front-end arms
//! the next tick every `frame_interval_ms()` and forwards resize and pointer
//! events.

use crate::config::{ConfigError, ConstellationConfig};
use crate::connect::{find_connections, SpatialGrid};
use crate::dot::{self, Dot};
use crate::pacing::FramePacer;
use crate::respawn::RespawnQueue;
use crate::scene::Scene;
use crate::surface::{DrawContext, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    Stopped,
    Running,
    Destroyed,
}

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Your browser doesn't support canvas")]
    UnsupportedSurface,
    #[error("engine is already running")]
    AlreadyInitialized,
    #[error("engine has been destroyed")]
    Destroyed,
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// What one tick did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub dots: usize,
    pub respawned: usize,
    pub culled: usize,
    pub connections: usize,
}

type GradientOf<S> = <<S as Surface>::Context as DrawContext>::Gradient;

pub struct Constellation<S: Surface> {
    cfg: ConstellationConfig,
    state: LifecycleState,
    surface: Option<S>,
    ctx: Option<S::Context>,
    scene: Option<Scene<GradientOf<S>>>,
    dots: Vec<Dot>,
    pointer: Option<Vec2>,
    respawns: RespawnQueue,
    rng: StdRng,
    grid: SpatialGrid,
    pacer: FramePacer,
}

impl<S: Surface> Constellation<S> {
    pub fn new(surface: S, cfg: ConstellationConfig) -> Result<Self, EngineError> {
        cfg.validate()?;
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            grid: SpatialGrid::new(cfg.link_distance),
            pacer: FramePacer::new(cfg.target_fps),
            cfg,
            state: LifecycleState::Stopped,
            surface: Some(surface),
            ctx: None,
            scene: None,
            dots: Vec::new(),
            pointer: None,
            respawns: RespawnQueue::new(),
            rng,
        })
    }

    /// Acquire the drawing context, build the scene, seed the dots and draw
    /// the first frame.
    pub fn initialize(&mut self) -> Result<(), EngineError> {
        match self.state {
            LifecycleState::Running => return Err(EngineError::AlreadyInitialized),
            LifecycleState::Destroyed => return Err(EngineError::Destroyed),
            LifecycleState::Stopped => {}
        }
        let surface = self.surface.as_mut().ok_or(EngineError::Destroyed)?;
        let Some(ctx) = surface.context() else {
            log::error!("[engine] 2D context unavailable");
            return Err(EngineError::UnsupportedSurface);
        };
        self.ctx = Some(ctx);
        self.rebuild_scene();

        let (w, h) = self.size_f32();
        self.dots = dot::seed_dots(&mut self.rng, &self.cfg, w, h);

        self.draw_scene();
        self.draw_dots();
        self.connect_dots();

        self.state = LifecycleState::Running;
        log::info!(
            "[engine] running: {} dots on {}x{} at {} fps",
            self.dots.len(),
            w,
            h,
            self.cfg.target_fps
        );
        Ok(())
    }

    /// Advance and draw one frame. `None` unless running, so a tick that
    /// fires after [`Constellation::destroy`] touches nothing.
    pub fn tick(&mut self, now_ms: f64) -> Option<FrameStats> {
        if self.state != LifecycleState::Running {
            return None;
        }
        let respawned = self.spawn_due(now_ms);
        self.draw_scene();
        self.resize_dots();
        let culled = self.animate_dots(now_ms);
        self.draw_dots();
        let connections = self.connect_dots();
        self.pacer.record(now_ms);

        let stats = FrameStats {
            dots: self.dots.len(),
            respawned,
            culled,
            connections,
        };
        if culled > 0 || respawned > 0 {
            log::trace!(
                "[engine] culled={} respawned={} dots={} pending={}",
                culled,
                respawned,
                stats.dots,
                self.respawns.len()
            );
        }
        Some(stats)
    }

    /// Match the surface to its viewport and rebuild the scene for the new size.
    pub fn on_resize(&mut self) {
        if self.state != LifecycleState::Running {
            return;
        }
        self.rebuild_scene();
        if let Some(scene) = &self.scene {
            log::debug!("[engine] resized to {}x{}", scene.width, scene.height);
        }
    }

    /// Track the pointer in surface space; `scroll_y` keeps it aligned when the
    /// page is scrolled.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, scroll_y: f64) {
        if self.state == LifecycleState::Destroyed {
            return;
        }
        self.pointer = Some(Vec2::new(client_x as f32, (client_y + scroll_y) as f32));
    }

    pub fn on_pointer_leave(&mut self) {
        dot::reset_sizes(&mut self.dots, self.cfg.base_radius);
    }

    /// Cancel pending respawns and release every owned resource. Returns
    /// `false` if the engine was already destroyed.
    pub fn destroy(&mut self) -> bool {
        if self.state == LifecycleState::Destroyed {
            return false;
        }
        let cancelled = self.respawns.cancel_all();
        self.dots = Vec::new();
        self.pointer = None;
        self.scene = None;
        self.ctx = None;
        self.surface = None;
        self.state = LifecycleState::Destroyed;
        log::info!("[engine] destroyed ({} respawns cancelled)", cancelled);
        true
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn config(&self) -> &ConstellationConfig {
        &self.cfg
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn dots_mut(&mut self) -> &mut Vec<Dot> {
        &mut self.dots
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn pending_respawns(&self) -> usize {
        self.respawns.len()
    }

    pub fn scene(&self) -> Option<&Scene<GradientOf<S>>> {
        self.scene.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn frame_interval_ms(&self) -> f64 {
        self.pacer.interval_ms()
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    fn size_f32(&self) -> (f32, f32) {
        self.scene
            .as_ref()
            .map_or((0.0, 0.0), |s| (s.width_f32(), s.height_f32()))
    }

    fn rebuild_scene(&mut self) {
        let (Some(surface), Some(ctx)) = (self.surface.as_mut(), self.ctx.as_mut()) else {
            return;
        };
        let (vw, vh) = surface.viewport();
        let width = vw.max(0.0).floor() as u32;
        let height = vh.max(0.0).floor() as u32;
        surface.set_size(width, height);
        self.scene = Some(Scene::build(ctx, width, height, &self.cfg));
    }

    fn draw_scene(&mut self) {
        if let (Some(scene), Some(ctx)) = (&self.scene, self.ctx.as_mut()) {
            scene.draw_background(ctx);
        }
    }

    fn spawn_due(&mut self, now_ms: f64) -> usize {
        let ready = self.respawns.drain_due(now_ms);
        let (w, _) = self.size_f32();
        for _ in 0..ready {
            let d = dot::spawn_offscreen(&mut self.rng, &self.cfg, w);
            self.dots.push(d);
        }
        ready
    }

    fn resize_dots(&mut self) {
        dot::resize_dots(&mut self.dots, self.pointer, &self.cfg);
    }

    fn animate_dots(&mut self, now_ms: f64) -> usize {
        let (w, h) = self.size_f32();
        let culled = dot::advance_and_cull(&mut self.dots, w, h, self.cfg.exit_margin);
        for _ in 0..culled {
            self.respawns
                .schedule(&mut self.rng, now_ms, &self.cfg.respawn_delay_ms);
        }
        culled
    }

    fn draw_dots(&mut self) {
        let (Some(scene), Some(ctx)) = (&self.scene, self.ctx.as_mut()) else {
            return;
        };
        ctx.set_fill_color(&scene.star_color);
        ctx.set_stroke_color(&scene.star_color);
        ctx.set_line_width(scene.line_width);
        for d in &self.dots {
            ctx.begin_path();
            ctx.arc(d.pos.x as f64, d.pos.y as f64, d.size as f64, 0.0, TAU);
            ctx.close_path();
            ctx.fill();
        }
    }

    fn connect_dots(&mut self) -> usize {
        let links = find_connections(&self.dots, &self.cfg, &mut self.grid);
        let (Some(scene), Some(ctx)) = (&self.scene, self.ctx.as_mut()) else {
            return links.len();
        };
        for link in &links {
            let (a, b) = (self.dots[link.a].pos, self.dots[link.b].pos);
            ctx.set_stroke_color(&scene.star_color.with_alpha(link.alpha));
            ctx.begin_path();
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.stroke();
        }
        links.len()
    }
}
