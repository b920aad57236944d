#![allow(dead_code)]

mod app;
mod catalog;
mod constants;
mod engine;
mod events;
mod notifications;
mod persistence;
mod player;
mod systems;
mod tracker;
mod ui;

use std::rc::Rc;
use std::time::Instant;

use constants::*;
use engine::{Engine, GameMode};
use persistence::{FileStorage, MemoryStorage, StoragePort};

use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App {
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: std::sync::Arc<glow::Context>,
    egui_glow: EguiGlow,

    // Game state
    engine: Engine,
    ui_state: ui::UiState,

    // Profiling (held so the server stays alive)
    puffin_server: Option<puffin_http::Server>,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        // Create window and GL context
        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop);

        // Open the save store; fall back to in-memory if the data dir is
        // unusable so the app still runs.
        let storage: Rc<dyn StoragePort> = match FileStorage::in_data_dir() {
            Ok(store) => Rc::new(store),
            Err(err) => {
                eprintln!("save directory unavailable, progress will not persist: {err}");
                Rc::new(MemoryStorage::new())
            }
        };

        // Optional puffin profiling, enabled via PUFFIN_SERVER_PORT
        let puffin_server = std::env::var("PUFFIN_SERVER_PORT").ok().and_then(|port| {
            match puffin_http::Server::new(&format!("127.0.0.1:{port}")) {
                Ok(server) => {
                    puffin::set_scopes_on(true);
                    Some(server)
                }
                Err(err) => {
                    eprintln!("failed to start puffin server: {err}");
                    None
                }
            }
        });

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            engine: Engine::new(storage),
            ui_state: ui::UiState::new(),
            puffin_server,
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed && event.state.is_pressed() {
                    if let PhysicalKey::Code(KeyCode::Escape) = event.physical_key {
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        puffin::GlobalProfiler::lock().new_frame();

        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt so toast timers don't jump after a long frame
        let dt = raw_dt.min(MAX_ANIMATION_DT);

        self.engine.tick(dt);

        // Run UI, collecting this frame's intents
        let mut actions = ui::UiActions::default();
        {
            let engine = &self.engine;
            let ui_state = &mut self.ui_state;
            let today = engine.today();
            self.egui_glow.run(&self.window, |ctx| {
                match engine.mode {
                    GameMode::RankSelect => {
                        let global_level = persistence::load::<u32>(
                            engine.storage(),
                            persistence::GLOBAL_LEVEL_KEY,
                        )
                        .ok()
                        .flatten()
                        .filter(|level| *level > 1);
                        ui::rank_select::draw_rank_select(ctx, global_level, &mut actions);
                    }
                    GameMode::Playing => {
                        if let Some(state) = &engine.state {
                            ui::draw_game(ctx, state, today, ui_state, &mut actions);
                        }
                    }
                }
                ui::toasts::draw_toasts(ctx, &engine.notifications);
            });
        }

        // Apply them
        self.engine.apply_actions(actions, &mut self.ui_state);

        // Render
        unsafe {
            use glow::HasContext;
            self.gl.clear_color(0.03, 0.05, 0.09, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        // Render egui
        self.egui_glow.paint(&self.window);

        // Swap buffers
        self.gl_surface.swap_buffers(&self.gl_context).unwrap();
    }
}
