use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const MODIFIERS: &[&str] = &["ctrl", "alt", "shift"];

const NAMED_KEYS: &[&str] = &[
    "tab", "backtab", "enter", "esc", "backspace", "delete", "up", "down", "left", "right", "home", "end", "pageup",
    "pagedown", "space",
];

/// Action name to key string, per group. Global actions are available in every input mode;
/// navigation actions only while browsing a list.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct KeybindingsConfig {
    #[serde(default)]
    pub global: IndexMap<String, String>,
    #[serde(default)]
    pub navigation: IndexMap<String, String>,
}

impl KeybindingsConfig {
    /// `(group, action, key)` in declaration order, global first.
    pub fn bindings(&self) -> impl Iterator<Item = (&'static str, &str, &str)> {
        let global = self.global.iter().map(|(a, k)| ("global", a.as_str(), k.as_str()));
        let navigation = self.navigation.iter().map(|(a, k)| ("navigation", a.as_str(), k.as_str()));
        global.chain(navigation)
    }

    /// Rebinds every action named in `other`; the rest keep their current key.
    pub fn overlay(&mut self, other: KeybindingsConfig) {
        self.global.extend(other.global);
        self.navigation.extend(other.navigation);
    }
}

/// Returns `(group, action, reason)` for every unparseable key string.
pub fn validate_keybindings(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    config
        .bindings()
        .filter_map(|(group, action, key)| {
            check_chord(key).err().map(|reason| (group.to_string(), action.to_string(), reason))
        })
        .collect()
}

/// Returns `(key, first_group, second_group)` for every key bound twice.
pub fn check_collisions(config: &KeybindingsConfig) -> Vec<(String, String, String)> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut collisions = Vec::new();
    for (group, _, key) in config.bindings() {
        match owners.get(&canonical(key)) {
            Some(first) => collisions.push((key.to_string(), first.to_string(), group.to_string())),
            None => {
                owners.insert(canonical(key), group);
            }
        }
    }
    collisions
}

// Single characters keep their case: "g" and "G" are different keys, "Ctrl+R" and "ctrl+R" are not.
fn canonical(key: &str) -> String {
    key.trim()
        .split('+')
        .map(|part| if part.chars().count() == 1 { part.to_string() } else { part.to_ascii_lowercase() })
        .collect::<Vec<_>>()
        .join("+")
}

fn check_chord(key: &str) -> Result<(), String> {
    let key = key.trim();
    if key.is_empty() {
        return Err("empty key string".to_string());
    }
    // "+" on its own, or as the final part of "ctrl++", is the plus key
    let (mods, code) = match key.rsplit_once('+') {
        Some((mods, "")) if mods.is_empty() || mods.ends_with('+') => (mods.trim_end_matches('+'), "+"),
        Some((mods, code)) => (mods, code),
        None => ("", key),
    };
    if !mods.is_empty() {
        if let Some(bad) = mods.split('+').find(|m| !MODIFIERS.contains(&m.to_ascii_lowercase().as_str())) {
            return Err(format!("unknown modifier: {bad}"));
        }
    }
    check_code(code)
}

fn check_code(code: &str) -> Result<(), String> {
    let lower = code.to_ascii_lowercase();
    if NAMED_KEYS.contains(&lower.as_str()) || code.chars().count() == 1 {
        return Ok(());
    }
    match lower.strip_prefix('f').map(str::parse::<u8>) {
        Some(Ok(n)) if (1..=24).contains(&n) => Ok(()),
        Some(_) => Err(format!("invalid function key: {code}")),
        None => Err(format!("unrecognized key: {code}")),
    }
}
