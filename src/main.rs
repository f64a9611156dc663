use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{InputManager, InputSource, Key};
use engine::renderer::{LogRenderer, Renderer};
use game::Game;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Koalio...");

    let mut game = Game::new()?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Koalio")
        .with_inner_size(winit::dpi::LogicalSize::new(960, 640))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = InputManager::new(window.inner_size().width);
    let mut game_loop = GameLoop::new();
    let mut renderer = LogRenderer::new();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    input.process_keyboard_event(&event);
                    if input.is_key_pressed(Key::Escape) {
                        info!("Escape pressed, shutting down...");
                        elwt.exit();
                    }
                }
                WindowEvent::Touch(touch) => input.process_touch(&touch),
                WindowEvent::CursorMoved { position, .. } => {
                    input.process_cursor_moved(position.x)
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.process_mouse_button(state, button)
                }
                WindowEvent::Resized(size) => {
                    input.set_window_width(size.width);
                    game.resize(size.width, size.height);
                }
                WindowEvent::Focused(false) => {
                    input.reset();
                    game.pause();
                }
                WindowEvent::Focused(true) => game.resume(),
                WindowEvent::RedrawRequested => {
                    let dt = game_loop.begin_frame();
                    game.update(dt, &input);
                    renderer.draw(&game.frame_view());

                    if game_loop.frame_count() % 600 == 0 {
                        info!(
                            "{:.0}s in, {:.0} fps, koala at ({:.1}, {:.1}), camera x {:.1}",
                            game_loop.elapsed().as_secs_f32(),
                            game_loop.fps(),
                            game.koala().position.x,
                            game.koala().position.y,
                            game.camera().position().x
                        );
                    }
                }
                _ => {}
            },
            Event::LoopExiting => {
                info!("Drew {} frames", renderer.frames_drawn());
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
