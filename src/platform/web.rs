//! Browser frontend
//!
//! Draws onto the `#canvas` element with the 2D context and drives the
//! session from requestAnimationFrame through the tick clock.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

use super::Command;
use crate::consts::*;
use crate::session::Session;
use crate::settings::Settings;
use crate::sim::Snapshot;

const BACKGROUND: &str = "#000000";

fn css((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({r}, {g}, {b})")
}

/// Game instance holding all state
struct Game {
    session: Session,
    snapshot: Snapshot,
    ctx: CanvasRenderingContext2d,
    last_time: f64,
}

impl Game {
    fn new(session: Session, ctx: CanvasRenderingContext2d) -> Self {
        let snapshot = session.snapshot();
        Self {
            session,
            snapshot,
            ctx,
            last_time: 0.0,
        }
    }

    /// Run due simulation ticks
    fn update(&mut self, time: f64) {
        // Cap long gaps (background tab) before they reach the clock
        let dt = if self.last_time > 0.0 {
            (time - self.last_time).min(1000.0)
        } else {
            0.0
        };
        self.last_time = time;

        if let Some(snapshot) = self.session.update(dt) {
            self.snapshot = snapshot;
        }
    }

    /// Render the current frame
    fn render(&self) {
        let board = &self.snapshot.board;
        let (w, h) = (f64::from(board.width), f64::from(board.height));
        let size = f64::from(board.cell_size);
        let ctx = &self.ctx;

        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, w, h);

        if self.snapshot.is_over() {
            ctx.set_fill_style_str(&css(SNAKE_COLOR));
            ctx.set_font("bold 30px Arial");
            let _ = ctx.fill_text("Game Over", w / 2.0 - 100.0, h / 2.0);
            return;
        }

        ctx.set_fill_style_str(&css(SNAKE_COLOR));
        for segment in &self.snapshot.segments {
            ctx.fill_rect(f64::from(segment.x), f64::from(segment.y), size, size);
        }

        let apple = self.snapshot.apple;
        ctx.set_fill_style_str(&css(APPLE_COLOR));
        ctx.fill_rect(f64::from(apple.x), f64::from(apple.y), size, size);
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

    log::info!("Bounce Snake starting...");

    let window = web_sys::window().expect("no window");
    let document = window.document().expect("no document");

    let canvas: HtmlCanvasElement = document
        .get_element_by_id("canvas")
        .expect("no canvas")
        .dyn_into()
        .expect("not a canvas");

    let settings = Settings::load();
    canvas.set_width(settings.board_width as u32);
    canvas.set_height(settings.board_height as u32);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .expect("no 2d context")
        .dyn_into()
        .expect("not a 2d context");

    let seed = settings.seed.unwrap_or(js_sys::Date::now() as u64);
    let game = Rc::new(RefCell::new(Game::new(
        Session::with_seed(&settings, seed),
        ctx,
    )));
    game.borrow().render();

    setup_input_handlers(game.clone());
    request_animation_frame(game);

    log::info!("Bounce Snake running!");
}

fn setup_input_handlers(game: Rc<RefCell<Game>>) {
    let window = web_sys::window().unwrap();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
        let Some(command) = Command::from_key(event.key().as_str()) else {
            return;
        };
        // Arrow keys would otherwise scroll the page
        event.prevent_default();
        // Closing the tab is the only way out in the browser
        if command != Command::Quit {
            command.apply(&mut game.borrow_mut().session);
        }
    });
    let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn request_animation_frame(game: Rc<RefCell<Game>>) {
    let window = web_sys::window().unwrap();
    let closure = Closure::once(move |time: f64| {
        game_loop(game, time);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
    {
        let mut g = game.borrow_mut();
        g.update(time);
        g.render();
    }

    request_animation_frame(game);
}
