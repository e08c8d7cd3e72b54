//! lowpoly - a CPU-rendered low-poly castle yard.
//!
//! # Usage
//!
//! ```bash
//! lowpoly
//! lowpoly --width 1280 --height 960 --fov 60
//! lowpoly --screenshot castle.png
//! ```
//!
//! # Controls
//!
//! - Title: SPACE, ENTER or a click continues
//! - File select: A/D or LEFT/RIGHT pick a slot, SPACE or ENTER starts
//! - WASD: walk relative to the camera
//! - Space: jump
//! - Mouse: orbit the camera
//! - F12: save a screenshot
//! - ESC: quit

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use lowpoly::camera::{CameraState, OrbitCameraController};
use lowpoly::colors;
use lowpoly::config::{
    RenderConfig, DEFAULT_FAR_CLIP, DEFAULT_FOV_DEGREES, DEFAULT_HEIGHT, DEFAULT_NEAR_CLIP,
    DEFAULT_WIDTH,
};
use lowpoly::engine::FrameRenderer;
use lowpoly::error::Result;
use lowpoly::game::Avatar;
use lowpoly::menu::{self, FileSlot, GameState, FILE_SLOTS};
use lowpoly::mesh::{avatar_primitives, castle_scene, Scene};
use lowpoly::render::FrameBuffer;
use lowpoly::screenshot;
use lowpoly::window::{FrameLimiter, InputState, Window, WindowEvent};

/// Longest simulation step, in seconds.
const MAX_DELTA_SECONDS: f32 = 0.1;
/// Initial downward tilt so the first frame looks at the avatar.
const START_PITCH: f32 = -0.25;

#[derive(Parser)]
#[command(name = "lowpoly")]
#[command(author, version, about = "Flat-shaded software renderer")]
struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = DEFAULT_FOV_DEGREES)]
    fov: f32,

    /// Near clip distance; triangles touching it are dropped
    #[arg(long, default_value_t = DEFAULT_NEAR_CLIP)]
    near: f32,

    /// Far clip distance
    #[arg(long, default_value_t = DEFAULT_FAR_CLIP)]
    far: f32,

    /// Render a single frame to this PNG file and exit without opening a window
    #[arg(long, value_name = "PATH")]
    screenshot: Option<PathBuf>,

    /// Distance between the orbit camera and the avatar
    #[arg(long, default_value_t = 26.0)]
    camera_distance: f32,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            screen_width: self.width,
            screen_height: self.height,
            field_of_view: self.fov,
            near_clip: self.near,
            far_clip: self.far,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.render_config().validate()?;
    tracing::debug!(?config, "configuration accepted");

    let scene = castle_scene();
    let orbit = OrbitCameraController::new(cli.camera_distance);
    let avatar = Avatar::default();
    let mut camera = CameraState::new(avatar.position(), 0.0, START_PITCH);
    orbit.follow(&mut camera, avatar.position());

    match &cli.screenshot {
        Some(path) => render_still(&config, &scene, &avatar, &camera, path),
        None => run_windowed(config, &scene, avatar, camera, &orbit),
    }
}

/// Renders one frame off-screen and writes it to `path`.
fn render_still(
    config: &RenderConfig,
    scene: &Scene,
    avatar: &Avatar,
    camera: &CameraState,
    path: &Path,
) -> Result<()> {
    let mut renderer = FrameRenderer::new(config);
    let mut frame = FrameBuffer::new(config.screen_width, config.screen_height);

    frame.fill_vertical_gradient(colors::SKY_TOP, colors::SKY_BOTTOM);
    let stats = renderer.render(scene, &avatar_primitives(avatar.position()), camera, &mut frame);
    menu::draw_hud(&mut frame);
    tracing::info!(
        drawn = stats.drawn,
        culled = stats.culled_backface,
        yaw = camera.yaw(),
        pitch = camera.pitch(),
        "rendered still frame"
    );

    screenshot::save_png(&frame, path)?;
    Ok(())
}

fn run_windowed(
    mut config: RenderConfig,
    scene: &Scene,
    mut avatar: Avatar,
    mut camera: CameraState,
    orbit: &OrbitCameraController,
) -> Result<()> {
    let title = format!("lowpoly v{}", env!("CARGO_PKG_VERSION"));
    let mut window = Window::new(&title, config.screen_width, config.screen_height)?;
    let mut frame_limiter = FrameLimiter::new();

    let mut renderer = FrameRenderer::new(&config);
    let mut frame = FrameBuffer::new(config.screen_width, config.screen_height);
    let mut input = InputState::default();
    let mut state = GameState::default();
    let slots = [FileSlot::default(); FILE_SLOTS];
    let mut screenshots = 0u32;

    tracing::info!(
        width = config.screen_width,
        height = config.screen_height,
        triangles = scene.triangle_count(),
        "window open"
    );

    loop {
        match window.poll_events(&mut input) {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) if w > 0 && h > 0 => {
                config = config.resized(w, h);
                renderer = FrameRenderer::new(&config);
                frame = FrameBuffer::new(w, h);
                window.resize(w, h)?;
                let projection = renderer.projection();
                tracing::info!(
                    width = projection.width(),
                    height = projection.height(),
                    fov = projection.fov_degrees(),
                    near = projection.z_near(),
                    "resized"
                );
            }
            _ => {}
        }

        if let Some(action) = input.menu_action {
            let next = state.advance(action);
            if next != state {
                tracing::debug!(from = ?state, to = ?next, "menu transition");
                if next.is_playing() {
                    window.set_mouse_captured(true);
                }
                state = next;
            }
        }

        let delta_time = frame_limiter
            .wait_and_get_delta()
            .as_secs_f32()
            .min(MAX_DELTA_SECONDS);

        match state {
            GameState::Title => menu::draw_title(&mut frame),
            GameState::FileSelect { selected } => menu::draw_file_select(&mut frame, selected, &slots),
            GameState::Playing => {
                avatar.update(&input, &camera, delta_time);
                orbit.update(&mut camera, avatar.position(), &input);

                frame.fill_vertical_gradient(colors::SKY_TOP, colors::SKY_BOTTOM);
                renderer.render(scene, &avatar_primitives(avatar.position()), &camera, &mut frame);
                menu::draw_hud(&mut frame);
            }
        }
        window.present(frame.as_bytes())?;

        if input.screenshot {
            screenshots += 1;
            let path = format!("lowpoly-{screenshots:03}.png");
            if let Err(e) = screenshot::save_png(&frame, &path) {
                tracing::warn!(%path, "screenshot failed: {e}");
            }
        }
    }

    Ok(())
}
