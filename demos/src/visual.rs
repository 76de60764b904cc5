use ggez::{Context, GameError, GameResult};
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, Text};
use ggez::event::{self, EventHandler};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::glam::Vec2 as GVec2;
use light_clock::*;
use std::f64::consts::PI;

use crate::SceneKind;

const SCREEN_WIDTH: f32 = 1000.0;
const SCREEN_HEIGHT: f32 = 600.0;
// Pixels per scene unit.
const UNIT: f64 = 100.0;
// Screen position of the scene origin.
const ORIGIN_X: f64 = 200.0;
const ORIGIN_Y: f64 = 420.0;

const WALL_LENGTH: f64 = 0.6 * UNIT;
const HATCH_SPACING: f64 = 0.08 * UNIT;
const HATCH_LENGTH: f64 = 0.1 * UNIT;
const DIAL_RADIUS: f64 = 0.25 * UNIT;
const GRID_OFFSET: f64 = 0.5 * UNIT;

struct MainState {
    scene: Scene,
    kind: SceneKind,
    beta: f64,
    paused: bool,
}

fn to_game_error(e: ClockError) -> GameError {
    GameError::CustomError(e.to_string())
}

/// Scene coordinates are y-up; ggez is y-down.
fn to_screen(p: Point3) -> GVec2 {
    GVec2::new((ORIGIN_X + p.x) as f32, (ORIGIN_Y - p.y) as f32)
}

fn color_of(style: &ClockStyle) -> Color {
    Color::from(style.color)
}

impl MainState {
    fn new(_ctx: &mut Context, kind: SceneKind, beta: f64) -> GameResult<MainState> {
        let scene = crate::build_scene(kind, beta, UNIT).map_err(to_game_error)?;
        Ok(MainState { scene, kind, beta, paused: false })
    }

    fn restart(&mut self) -> GameResult {
        self.scene = crate::build_scene(self.kind, self.beta, UNIT).map_err(to_game_error)?;
        Ok(())
    }

    fn draw_segment(&self, ctx: &mut Context, canvas: &mut graphics::Canvas, segment: &LineSegment, width: f32, color: Color) -> GameResult {
        let mesh = Mesh::new_line(ctx, &[to_screen(segment.a), to_screen(segment.b)], width, color)?;
        canvas.draw(&mesh, DrawParam::new());
        Ok(())
    }

    fn draw_clock(&self, ctx: &mut Context, canvas: &mut graphics::Canvas, entry: &world::SceneClock, frame: &ClockFrame) -> GameResult {
        let color = color_of(&entry.clock.style);

        // Moving clocks carry a small grid marking their rest frame
        if entry.frame.beta() > 0.0 {
            let center = frame.start + Vec3::xy(-GRID_OFFSET, -GRID_OFFSET);
            let grid = LocalGrid::new(center, 2.0, 1.0, 0.1 * UNIT).map_err(to_game_error)?;
            for line in grid.lines().map_err(to_game_error)? {
                self.draw_segment(ctx, canvas, &line, 1.0, Color::new(color.r, color.g, color.b, 0.35))?;
            }
            let dot = Mesh::new_circle(ctx, DrawMode::fill(), to_screen(grid.dot()), 3.0, 0.1, color)?;
            canvas.draw(&dot, DrawParam::new());
        }

        // Mirrors with hatching on the outside
        let walls = wall_pair(frame.start, frame.end, WALL_LENGTH).map_err(to_game_error)?;
        for (wall, angle) in [(&walls.first, PI * 0.75), (&walls.second, -PI * 0.25)] {
            self.draw_segment(ctx, canvas, wall, 3.0, Color::WHITE)?;
            for stroke in cross_hatch(wall, angle, HATCH_SPACING, HATCH_LENGTH).map_err(to_game_error)? {
                self.draw_segment(ctx, canvas, &stroke, 1.0, Color::new(0.7, 0.7, 0.7, 1.0))?;
            }
        }

        // Photon path
        let points: Vec<GVec2> = entry.trace.points().map(to_screen).collect();
        if points.len() >= 2 {
            let trace = Mesh::new_line(ctx, points.as_slice(), 1.5, Color::new(color.r, color.g, color.b, 0.5))?;
            canvas.draw(&trace, DrawParam::new());
        }

        let photon = Mesh::new_circle(ctx, DrawMode::fill(), to_screen(frame.marker), 6.0, 0.1, color)?;
        canvas.draw(&photon, DrawParam::new());

        // Proper-time readout
        let mut readout = Text::new(entry.indicator.display_text(2));
        readout.set_scale(20.0);
        canvas.draw(&readout, DrawParam::new().dest(to_screen(frame.indicator_position)).color(Color::WHITE));

        if let Some(label) = &entry.clock.style.label {
            let mut caption = Text::new(label.as_str());
            caption.set_scale(16.0);
            let above = frame.end + Vec3::xy(-0.3 * UNIT, 0.6 * UNIT);
            canvas.draw(&caption, DrawParam::new().dest(to_screen(above)).color(color));
        }

        // Analog dial running on the same proper time, one turn per round trip
        let dial_center = frame.end + Vec3::xy(0.0, 1.1 * UNIT);
        let dial = Dial::new(dial_center, DIAL_RADIUS, 2.0 * entry.clock.period()).map_err(to_game_error)?;
        let rim = Mesh::new_circle(ctx, DrawMode::stroke(2.0), to_screen(dial.center), DIAL_RADIUS as f32, 0.1, Color::WHITE)?;
        canvas.draw(&rim, DrawParam::new());
        for tick in dial.tick_marks(12, 0.2 * DIAL_RADIUS) {
            self.draw_segment(ctx, canvas, &tick, 1.0, Color::WHITE)?;
        }
        let tip = dial.hand_tip(frame.proper_time).map_err(to_game_error)?;
        self.draw_segment(ctx, canvas, &LineSegment::new(dial.center, tip), 2.0, color)?;

        Ok(())
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        if self.paused {
            return Ok(());
        }
        // Scene time runs in scene units; one second of wall clock per unit.
        let dt = ctx.time.delta().as_secs_f64();
        self.scene.step(dt, false).map_err(to_game_error)?;

        // Start over once a moving clock leaves the window.
        let off_screen = self
            .scene
            .snapshot()
            .iter()
            .any(|frame| to_screen(frame.start).x > SCREEN_WIDTH);
        if off_screen {
            log::info!("Clock left the window at t = {:.2}, restarting", self.scene.time());
            self.restart()?;
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);

        let frames = self.scene.snapshot();
        for (entry, frame) in self.scene.clocks.iter().zip(frames.iter()) {
            self.draw_clock(ctx, &mut canvas, entry, frame)?;
        }

        let mut status = Text::new(format!(
            "t = {:.2}   beta = {:.2}   [space] pause  [r] restart  [esc] quit",
            self.scene.time(),
            self.beta
        ));
        status.set_scale(16.0);
        canvas.draw(&status, DrawParam::new().dest(GVec2::new(10.0, SCREEN_HEIGHT - 26.0)).color(Color::WHITE));

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::Escape) => ctx.request_quit(),
            Some(KeyCode::Space) => self.paused = !self.paused,
            Some(KeyCode::R) => self.restart()?,
            _ => {}
        }
        Ok(())
    }
}

pub fn run_visual(kind: SceneKind, beta: f64) -> GameResult {
    let cb = ggez::ContextBuilder::new("light_clock_demos", "light_clock")
        .window_setup(ggez::conf::WindowSetup::default().title("Light Clocks"))
        .window_mode(ggez::conf::WindowMode::default().dimensions(SCREEN_WIDTH, SCREEN_HEIGHT));

    let (mut ctx, event_loop) = cb.build()?;
    let state = MainState::new(&mut ctx, kind, beta)?;
    event::run(ctx, event_loop, state)
}
