//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the zbooks library and
//! the Zellij plugin system. It translates Zellij key presses and pipe
//! messages into library events, executes the resulting actions, and prints
//! the rendered frame.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` events
//! 3. **Update / Pipe**: Map input to events, delegate to `handle_event`
//! 4. **Render**: Record the pane size, print the library's frame
//!
//! # Event Mapping
//!
//! - `Key(..)` → `zbooks::Key` → `map_key(input_context, key)`
//! - pipe `zbooks::navigate` with a path payload → `Event::Navigate(path)`
//!
//! ```sh
//! zellij pipe --name zbooks::navigate -- /books/add
//! ```
//!
//! The plugin only exists on the wasm32 target. Native builds get a stub
//! `main` so the library and its tests build on any host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use zellij_tile::prelude::*;

#[cfg(target_arch = "wasm32")]
use plugin::State;

#[cfg(target_arch = "wasm32")]
register_plugin!(State);

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("zbooks is a Zellij plugin; build it with --target wasm32-wasip1 and load the .wasm in Zellij");
}

#[cfg(target_arch = "wasm32")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use zbooks::{handle_event, map_key, Action, AppState, Config, Event as AppEvent, Key as BookKey};

    /// Pipe message name that routes to the path in its payload.
    const NAVIGATE_PIPE: &str = "zbooks::navigate";

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: zbooks::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, initializes tracing and state, and subscribes
        /// to key events. No permissions are needed.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            zbooks::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(start_path = %config.start_path, theme = ?config.theme_name, "parsed configuration");

            self.app = zbooks::initialize(&config);
            subscribe(&[EventType::Key]);

            tracing::debug!("plugin load complete");
        }

        /// Returns `true` if the plugin UI should re-render.
        fn update(&mut self, event: Event) -> bool {
            let Event::Key(key) = event else {
                return false;
            };
            let _guard = tracing::debug_span!("plugin_update_event", bare_key = ?key.bare_key).entered();

            let Some(app_event) = to_book_key(&key).and_then(|k| map_key(self.app.input_context(), k)) else {
                tracing::trace!("key not bound in this context");
                return false;
            };
            self.dispatch(&app_event)
        }

        fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
            let _guard = tracing::debug_span!("plugin_pipe", name = %pipe_message.name).entered();

            if pipe_message.name != NAVIGATE_PIPE {
                tracing::debug!("ignoring pipe message with unknown name");
                return false;
            }
            let Some(path) = pipe_message.payload else {
                tracing::debug!("navigate pipe without a path payload");
                return false;
            };
            self.dispatch(&AppEvent::Navigate(path.trim().to_string()))
        }

        fn render(&mut self, rows: usize, cols: usize) {
            self.app.set_viewport(rows, cols);
            print!("{}", zbooks::ui::render(&self.app, rows, cols));
        }
    }

    impl State {
        fn dispatch(&mut self, event: &AppEvent) -> bool {
            let (should_render, actions) = handle_event(&mut self.app, event);
            tracing::debug!(action_count = actions.len(), should_render, "event handled");

            for action in &actions {
                execute_action(action);
            }
            should_render
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
        }
    }

    fn to_book_key(key: &KeyWithModifier) -> Option<BookKey> {
        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char(c) => Some(BookKey::Ctrl(c.to_ascii_lowercase())),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => BookKey::BackTab,
            BareKey::Tab => BookKey::Tab,
            BareKey::Char(c) => BookKey::Char(c),
            BareKey::Enter => BookKey::Enter,
            BareKey::Esc => BookKey::Esc,
            BareKey::Backspace => BookKey::Backspace,
            BareKey::Delete => BookKey::Delete,
            BareKey::Up => BookKey::Up,
            BareKey::Down => BookKey::Down,
            BareKey::Left => BookKey::Left,
            BareKey::Right => BookKey::Right,
            _ => return None,
        })
    }
}
