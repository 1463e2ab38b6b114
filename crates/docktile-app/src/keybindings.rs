mod parsing;

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use docktile_config::KeybindingsConfig;

use crate::command::{command_description, Command, InputMode};

pub use parsing::parse_key_string;
use parsing::{format_key_display, normalize_key_event};

/// Action names shown in the status bar, in order.
const HINT_ACTIONS: &[&str] = &["filter", "sort", "next_view", "refresh", "quit"];

pub struct KeybindingDispatcher {
    mode: InputMode,
    global_bindings: HashMap<KeyEvent, Command>,
    navigation_bindings: HashMap<KeyEvent, Command>,
    /// `(action, key string, description)` for every binding that parsed.
    reverse: Vec<(String, String, &'static str)>,
}

impl KeybindingDispatcher {
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        let mut reverse = Vec::new();
        let global_bindings = bind_group(config.global.iter(), &mut reverse);
        let navigation_bindings = bind_group(config.navigation.iter(), &mut reverse);
        Self { mode: InputMode::Normal, global_bindings, navigation_bindings, reverse }
    }

    pub fn dispatch(&self, key: KeyEvent) -> Option<Command> {
        let key = normalize_key_event(key);

        if self.mode == InputMode::FilterInput {
            return match key.code {
                KeyCode::Esc => Some(Command::FilterCancel),
                KeyCode::Enter => Some(Command::FilterConfirm),
                KeyCode::Backspace => Some(Command::FilterBackspace),
                KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                    self.global_bindings.get(&key).cloned()
                }
                KeyCode::Char(c) => Some(Command::FilterInput(c)),
                _ => None,
            };
        }

        self.global_bindings
            .get(&key)
            .or_else(|| self.navigation_bindings.get(&key))
            .cloned()
            .or_else(|| fallback_navigation(key))
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// `(key, description)` pairs for the status bar.
    pub fn hints(&self) -> Vec<(String, String)> {
        if self.mode == InputMode::FilterInput {
            return vec![("Enter".into(), "Apply".into()), ("Esc".into(), "Cancel".into())];
        }
        HINT_ACTIONS
            .iter()
            .filter_map(|action| self.reverse.iter().find(|(name, _, _)| name == action))
            .map(|(_, key_str, desc)| (format_key_display(key_str), desc.to_string()))
            .collect()
    }
}

fn bind_group<'a>(
    entries: impl Iterator<Item = (&'a String, &'a String)>,
    reverse: &mut Vec<(String, String, &'static str)>,
) -> HashMap<KeyEvent, Command> {
    let mut bindings = HashMap::new();
    for (name, key_str) in entries {
        let (Some(cmd), Some(key)) = (Command::from_name(name), parse_key_string(key_str)) else {
            tracing::warn!(action = %name, key = %key_str, "ignoring keybinding");
            continue;
        };
        bindings.insert(key, cmd);
        reverse.push((name.clone(), key_str.clone(), command_description(name)));
    }
    bindings
}

// Arrow and home/end keys work even when the config rebinds everything else.
fn fallback_navigation(key: KeyEvent) -> Option<Command> {
    if !key.modifiers.is_empty() {
        return None;
    }
    match key.code {
        KeyCode::Down => Some(Command::SelectNext),
        KeyCode::Up => Some(Command::SelectPrev),
        KeyCode::Home => Some(Command::SelectFirst),
        KeyCode::End => Some(Command::SelectLast),
        KeyCode::PageDown => Some(Command::PageDown),
        KeyCode::PageUp => Some(Command::PageUp),
        _ => None,
    }
}
