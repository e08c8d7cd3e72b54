use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lowpoly::camera::CameraState;
use lowpoly::colors::{self, Color};
use lowpoly::config::RenderConfig;
use lowpoly::engine::FrameRenderer;
use lowpoly::math::vec2::Vec2;
use lowpoly::math::vec3::Vec3;
use lowpoly::mesh::{avatar_primitives, castle_scene};
use lowpoly::render::{DrawList, FrameBuffer, Surface};

const BUFFER_WIDTH: u32 = 960;
const BUFFER_HEIGHT: u32 = 720;

fn small_triangle() -> [Vec2; 3] {
    [
        Vec2::new(100.0, 100.0),
        Vec2::new(120.0, 100.0),
        Vec2::new(110.0, 120.0),
    ]
}

fn medium_triangle() -> [Vec2; 3] {
    [
        Vec2::new(100.0, 100.0),
        Vec2::new(300.0, 100.0),
        Vec2::new(200.0, 300.0),
    ]
}

fn large_triangle() -> [Vec2; 3] {
    [
        Vec2::new(50.0, 50.0),
        Vec2::new(900.0, 100.0),
        Vec2::new(400.0, 700.0),
    ]
}

fn benchmark_single_polygon(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_polygon");
    let color = Color::new(200, 40, 40);

    for (name, points) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(BenchmarkId::new("fill", name), &points, |b, pts| {
            let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| fb.fill_polygon(black_box(pts), color));
        });

        group.bench_with_input(BenchmarkId::new("outline", name), &points, |b, pts| {
            let mut fb = FrameBuffer::new(BUFFER_WIDTH, BUFFER_HEIGHT);
            b.iter(|| fb.outline_polygon(black_box(pts), color, 1));
        });
    }

    group.finish();
}

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    let config = RenderConfig::default();
    let scene = castle_scene();
    let avatar = avatar_primitives(Vec3::new(0.0, 1.0, 0.0));
    let camera = CameraState::new(Vec3::new(0.0, 8.0, -26.0), 0.0, -0.25);

    group.bench_function("castle_to_framebuffer", |b| {
        let mut renderer = FrameRenderer::new(&config);
        let mut fb = FrameBuffer::new(config.screen_width, config.screen_height);
        b.iter(|| {
            fb.fill_vertical_gradient(colors::SKY_TOP, colors::SKY_BOTTOM);
            renderer.render(black_box(&scene), &avatar, &camera, &mut fb)
        });
    });

    // Geometry only: no pixels are touched.
    group.bench_function("castle_to_draw_list", |b| {
        let mut renderer = FrameRenderer::new(&config);
        let mut list = DrawList::new();
        b.iter(|| {
            list.clear();
            renderer.render(black_box(&scene), &avatar, &camera, &mut list)
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_polygon, benchmark_frame);
criterion_main!(benches);
