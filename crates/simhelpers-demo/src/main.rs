use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Context;
use image::{Rgba, RgbaImage};

use simhelpers::asset::{ImageAsset, MemoryLoader};
use simhelpers::axis::AxisConfig;
use simhelpers::coords::{Vec2, Viewport};
use simhelpers::drawable::{ActorParams, CircleParams, Drawable, LineParams};
use simhelpers::input::{ButtonState, HostEvent, Measurement, MouseButton, PointerButtonEvent};
use simhelpers::logging::{init_logging, LoggingConfig};
use simhelpers::paint::Color;
use simhelpers::scene::DrawCmd;
use simhelpers::store::JsonFileStore;
use simhelpers::surface::RecordingSurface;
use simhelpers::world::{Host, World, WorldConfig};

const FRAMES: u32 = 120;
const DT: f32 = 0.016;

const SKY: &str = "simhelpers/img/oceanSky.jpg";
const PLANE: &str = "simhelpers/img/flugi50.png";
const GLIDER: &str = "simhelpers/img/Segelflieger-100.png";

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let store_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("simhelpers-demo.json"));
    let store = JsonFileStore::open(&store_path)
        .with_context(|| format!("failed to open store {}", store_path.display()))?;

    let mut world = World::new(
        WorldConfig {
            h: Some(200.0),
            unit: "m".into(),
            background_img: Some(SKY.into()),
            ..WorldConfig::default()
        },
        Host::new(RecordingSurface::new(), sprites(), store),
        Measurement::viewport(Viewport::new(1280.0, 720.0)),
    );
    world.create_axis(AxisConfig {
        step: Some(50.0),
        color: Color::from_rgb_u32(0xffffff),
        ..AxisConfig::default()
    });

    let (plane, glider, line) = world.scope(|s| {
        let plane = s.actor(ActorParams { x: -40.0, y: 60.0, w: Some(14.0), ..ActorParams::new(PLANE) });
        let glider = s.actor(ActorParams {
            x: 50.0,
            y: 20.0,
            w: Some(50.0),
            autorotate: false,
            ..ActorParams::new(GLIDER)
        });
        let line = s.line(LineParams {
            color: Color::from_rgb_u32(0xccddee),
            ..LineParams::new(Vec2::new(100.0, 200.0), Vec2::new(200.0, 100.0))
        });
        s.line(LineParams {
            color: Color::from_rgb_u32(0xffddcc),
            ..LineParams::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 200.0))
        });
        s.circle(CircleParams { x: 150.0, y: 100.0, r: 30.0, color: Color::from_rgb_u32(0x440000), ..CircleParams::default() });
        (plane, glider, line)
    });

    if let Some(p) = world.get_mut(plane) {
        p.vx = 35.0;
    }
    if let Some(g) = world.get_mut(glider) {
        g.vx = 0.11;
        g.vy = 0.11;
    }

    let clicks = Rc::new(Cell::new(0u32));
    let counter = clicks.clone();
    world
        .on_click(line, move |_, ev| {
            counter.set(counter.get() + 1);
            log::info!("line clicked at {:?} (unit {:?})", ev.px, ev.unit);
        })
        .context("line vanished before its click handler was registered")?;

    world.add_ticker(move |world, dt| {
        if let Some(p) = world.get_mut(plane) {
            let vx = p.vx;
            p.state_mut().x += vx * dt;
        }
        if let Some(g) = world.get_mut(glider) {
            let (vx, vy) = (g.vx, g.vy);
            let state = g.state_mut();
            state.rotation += 0.01;
            state.x += vx * dt;
            state.y += vy * dt;
        }
    });

    for frame in 0..FRAMES {
        world.advance(DT).context("frame failed")?;

        if frame == FRAMES / 2 {
            world.handle_event(&HostEvent::Resized(Measurement::viewport(Viewport::new(960.0, 720.0))));
            let on_line = world.space().unit_to_px(Vec2::new(150.0, 150.0));
            world.handle_event(&HostEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: ButtonState::Pressed,
                x: on_line.x,
                y: on_line.y,
            }));
        }

        if frame % 30 == 0 {
            log_frame(&world, frame);
        }
    }

    log::info!(
        "done: {} frames presented, {} line clicks, world {}x{} {}, ratio stored in {}",
        world.surface().frames(),
        clicks.get(),
        world.w(),
        world.h(),
        world.unit(),
        store_path.display()
    );
    Ok(())
}

/// Flat-colored stand-ins for the web sprites.
fn sprites() -> MemoryLoader {
    let sky = RgbaImage::from_fn(320, 180, |_, y| Rgba([40, 90, 160 + (y / 3) as u8, 255]));
    // Triangle pointing right; the rest stays transparent.
    let plane = RgbaImage::from_fn(50, 20, |x, y| {
        let half = 10i32 - (y as i32 - 10).abs();
        let opaque = (x as i32) < 50 * half / 10;
        Rgba([220, 220, 230, if opaque { 255 } else { 0 }])
    });
    let glider = RgbaImage::from_fn(100, 30, |_, y| Rgba([250, 250, 250, if (12..18).contains(&y) { 255 } else { 0 }]));

    MemoryLoader::new()
        .with(SKY, ImageAsset::new(sky))
        .with(PLANE, ImageAsset::new(plane))
        .with(GLIDER, ImageAsset::new(glider))
}

fn log_frame(world: &World<RecordingSurface>, frame: u32) {
    let items = world.surface().last_frame();
    let count = |pred: fn(&DrawCmd) -> bool| items.iter().filter(|i| pred(&i.cmd)).count();
    log::info!(
        "frame {frame}: {} sprites, {} lines, {} circles, {} labels at {:.2} px/unit",
        count(|c| matches!(c, DrawCmd::Sprite(_))),
        count(|c| matches!(c, DrawCmd::Line(_))),
        count(|c| matches!(c, DrawCmd::Circle(_))),
        count(|c| matches!(c, DrawCmd::Text(_))),
        world.px_per_unit()
    );
}
