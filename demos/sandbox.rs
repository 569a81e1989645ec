//! Sandbox opens a window, draws a bouncing square and reports fake taskbar progress.
//!
//! Run with `RUST_LOG=debug cargo run --example sandbox` to see what `ggsdl` does natively.
//! Press `Space` to restart progress and `Escape` to quit.
//!

use ggsdl::{
    eventcore::{Event, Keycode, WindowEvent},
    graphicscore::{Renderer, RendererSettings},
    mathcore::{shapes::Rect, Color},
    utils::{ProgressReporter, WindowSettings},
    Engine,
};
use std::time::Duration;

fn main() -> ggsdl::Result<()> {
    env_logger::init();

    let engine = Engine::load()?;
    let events = engine.event_queue()?;
    let window = engine.build_window(
        "GGSDL sandbox",
        800,
        600,
        WindowSettings {
            is_resizable: true,
            ..Default::default()
        },
    )?;
    let renderer = Renderer::from_window(window, RendererSettings::default())?;

    let mut progress = ProgressReporter::new(renderer.window());
    progress.on_completed(|| log::info!("progress has completed"));
    progress.start()?;

    let (mut x, mut velocity) = (0.0_f32, 4.0_f32);
    let mut value = 0.0;
    'running: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit
                | Event::Window {
                    event: WindowEvent::CloseRequested,
                    ..
                } => break 'running,
                Event::Keyboard {
                    keycode, down: true, ..
                } => match keycode {
                    Keycode::ESCAPE => break 'running,
                    Keycode::SPACE if !progress.phase().is_active() => {
                        value = 0.0;
                        progress.start()?;
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        if progress.phase().is_active() {
            value += 0.002;
            let _ = progress.report(value);
        }

        let (width, _) = renderer.output_size()?;
        x += velocity;
        if x < 0.0 || x + 50.0 > width as f32 {
            velocity = -velocity;
        }

        renderer.set_draw_color(Color::BLACK)?;
        renderer.clear()?;
        renderer.set_draw_color(Color::from_hsva(
            ggsdl::mathcore::Angle::from_degrees(x),
            0.8,
            1.0,
            255,
        ))?;
        renderer.fill_rect(Rect::new(x, 275.0, 50.0, 50.0))?;
        renderer.present()?;

        std::thread::sleep(Duration::from_millis(16));
    }

    progress.cancel();
    Ok(())
}
