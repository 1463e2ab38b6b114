use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Canonical form used as the lookup key: `BackTab` never carries SHIFT, `Ctrl+letter` is lowercase
/// without SHIFT, and any other letter carries SHIFT exactly when it is uppercase.
pub(super) fn normalize_key_event(key: KeyEvent) -> KeyEvent {
    let mut modifiers = key.modifiers;
    let code = match key.code {
        KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => {
            modifiers -= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        KeyCode::BackTab => {
            modifiers -= KeyModifiers::SHIFT;
            KeyCode::BackTab
        }
        KeyCode::Char(c) if c.is_ascii_alphabetic() && modifiers.contains(KeyModifiers::CONTROL) => {
            modifiers -= KeyModifiers::SHIFT;
            KeyCode::Char(c.to_ascii_lowercase())
        }
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            if c.is_ascii_uppercase() || modifiers.contains(KeyModifiers::SHIFT) {
                modifiers |= KeyModifiers::SHIFT;
                KeyCode::Char(c.to_ascii_uppercase())
            } else {
                KeyCode::Char(c)
            }
        }
        other => other,
    };
    KeyEvent::new(code, modifiers)
}

/// Parses `"ctrl+r"`, `"shift+tab"`, `"G"`, `"pagedown"`, `"f5"` and the like.
pub fn parse_key_string(s: &str) -> Option<KeyEvent> {
    let s = s.trim();
    let (mods, key) = match s.rsplit_once('+') {
        Some((mods, "")) if mods.is_empty() || mods.ends_with('+') => (mods.trim_end_matches('+'), "+"),
        Some((_, "")) => return None,
        Some(split) => split,
        None => ("", s),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods.split('+').filter(|m| !m.is_empty()) {
        modifiers |= parse_modifier(part)?;
    }
    let code = parse_code(key)?;
    Some(normalize_key_event(KeyEvent::new(code, modifiers)))
}

fn parse_modifier(s: &str) -> Option<KeyModifiers> {
    match s.to_ascii_lowercase().as_str() {
        "ctrl" => Some(KeyModifiers::CONTROL),
        "alt" => Some(KeyModifiers::ALT),
        "shift" => Some(KeyModifiers::SHIFT),
        _ => None,
    }
}

fn parse_code(s: &str) -> Option<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    let code = match s.to_ascii_lowercase().as_str() {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        f => KeyCode::F(f.strip_prefix('f')?.parse().ok()?),
    };
    Some(code)
}

/// `"shift+tab"` becomes `"Shift+Tab"`, `"pagedown"` becomes `"PgDn"`. Single characters are kept as typed.
pub(super) fn format_key_display(key_str: &str) -> String {
    key_str
        .split('+')
        .map(|part| match part.to_ascii_lowercase().as_str() {
            "pagedown" => "PgDn".to_string(),
            "pageup" => "PgUp".to_string(),
            "esc" => "Esc".to_string(),
            _ if part.chars().count() == 1 => part.to_string(),
            _ => {
                let mut chars = part.chars();
                chars.next().map(|c| c.to_uppercase().chain(chars).collect()).unwrap_or_default()
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}
