use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use std::sync::LazyLock;

use super::input::KeyAction;

macro_rules! keymap_source {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/keymap/default.keymap.json"
        ))
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum KeymapContext {
    Global,
    Login,
    Dashboard,
    Talent,
}

impl KeymapContext {
    fn from_str(raw: &str) -> Option<Self> {
        match raw {
            "global" => Some(KeymapContext::Global),
            "login" => Some(KeymapContext::Login),
            "dashboard" => Some(KeymapContext::Dashboard),
            "talent" => Some(KeymapContext::Talent),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    description: String,
    contexts: Vec<String>,
    action: RawAction,
    combos: Vec<String>,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawAction {
    Quit,
    Submit,
    ResetForm,
    ResetStatus,
    Back,
    Activate,
    FocusStep { delta: i32 },
}

struct KeyBinding {
    action: KeyAction,
    contexts: Vec<KeymapContext>,
    combos: Vec<KeyPattern>,
    snippet: String,
}

impl KeyBinding {
    fn from_raw(raw: RawEntry) -> Self {
        let contexts = raw
            .contexts
            .iter()
            .filter_map(|ctx| KeymapContext::from_str(ctx))
            .collect::<Vec<_>>();
        assert!(
            !contexts.is_empty(),
            "keymap entry {} must declare at least one context",
            raw.id
        );
        let action = raw.action.into_action();
        let combos = raw
            .combos
            .iter()
            .map(|combo| {
                KeyPattern::parse(combo).unwrap_or_else(|err| {
                    panic!("failed to parse combo '{combo}' for {}: {err}", raw.id)
                })
            })
            .collect::<Vec<_>>();
        assert!(
            !combos.is_empty(),
            "keymap entry {} must declare combos",
            raw.id
        );
        let combos_display = combos
            .iter()
            .map(|pattern| pattern.display.clone())
            .collect::<Vec<_>>()
            .join("/");
        let snippet = format!("{combos_display} {}", raw.description);
        Self {
            action,
            contexts,
            combos,
            snippet,
        }
    }

    fn applies_to(&self, context: KeymapContext) -> bool {
        self.contexts.contains(&KeymapContext::Global) || self.contexts.contains(&context)
    }

    fn matches(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.combos
            .iter()
            .find(|pattern| pattern.matches(key))
            .map(|_| self.action)
    }
}

struct KeyPattern {
    code: KeyCode,
    required: KeyModifiers,
    display: String,
}

impl KeyPattern {
    fn parse(spec: &str) -> Result<Self, String> {
        let display = spec.trim().to_string();
        let mut tokens = display
            .split('+')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        let Some(key_token) = tokens.pop() else {
            return Err("combo must contain key".into());
        };
        let code = code_from_token(key_token)?;
        let mut required = KeyModifiers::empty();
        for token in tokens {
            match token.to_lowercase().as_str() {
                "ctrl" | "control" => required |= KeyModifiers::CONTROL,
                "alt" => required |= KeyModifiers::ALT,
                other => return Err(format!("unsupported modifier '{other}'")),
            }
        }
        Ok(Self {
            code,
            required,
            display,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        let code_matches = match (self.code, key.code) {
            (KeyCode::Char(expected), KeyCode::Char(actual)) => {
                actual.to_ascii_lowercase() == expected
            }
            (expected, actual) => expected == actual,
        };
        // Shift is tolerated so BackTab and upper-case letters still match.
        let extra = key.modifiers.difference(self.required) - KeyModifiers::SHIFT;
        code_matches && key.modifiers.contains(self.required) && extra.is_empty()
    }
}

fn code_from_token(token: &str) -> Result<KeyCode, String> {
    let normalized = token.to_lowercase();
    let code = match normalized.as_str() {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => KeyCode::Char(ch),
                _ => return Err(format!("unsupported key '{token}'")),
            }
        }
    };
    Ok(code)
}

impl RawAction {
    fn into_action(self) -> KeyAction {
        match self {
            RawAction::Quit => KeyAction::Quit,
            RawAction::Submit => KeyAction::Submit,
            RawAction::ResetForm => KeyAction::ResetForm,
            RawAction::ResetStatus => KeyAction::ResetStatus,
            RawAction::Back => KeyAction::Back,
            RawAction::Activate => KeyAction::Activate,
            RawAction::FocusStep { delta } => KeyAction::FocusStep(delta),
        }
    }
}

static KEYMAP: LazyLock<Vec<KeyBinding>> = LazyLock::new(|| {
    let raw_entries: Vec<RawEntry> =
        serde_json::from_str(keymap_source!()).expect("invalid keymap/default.keymap.json");
    raw_entries.into_iter().map(KeyBinding::from_raw).collect()
});

pub(crate) fn classify_key(context: KeymapContext, key: &KeyEvent) -> Option<KeyAction> {
    KEYMAP
        .iter()
        .filter(|binding| binding.applies_to(context))
        .find_map(|binding| binding.matches(key))
}

pub(crate) fn help_text(context: KeymapContext) -> Option<String> {
    let snippets = KEYMAP
        .iter()
        .filter(|binding| binding.applies_to(context))
        .map(|binding| binding.snippet.clone())
        .collect::<Vec<_>>();
    if snippets.is_empty() {
        None
    } else {
        Some(snippets.join(" • "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn esc_depends_on_context() {
        let esc = key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(
            classify_key(KeymapContext::Talent, &esc),
            Some(KeyAction::Back)
        );
        assert_eq!(
            classify_key(KeymapContext::Login, &esc),
            Some(KeyAction::ResetStatus)
        );
    }

    #[test]
    fn submit_only_bound_on_talent_screen() {
        let ctrl_s = key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            classify_key(KeymapContext::Talent, &ctrl_s),
            Some(KeyAction::Submit)
        );
        assert_eq!(classify_key(KeymapContext::Dashboard, &ctrl_s), None);
    }

    #[test]
    fn plain_letters_fall_through() {
        let s = key(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(classify_key(KeymapContext::Talent, &s), None);
        let back_tab = key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(
            classify_key(KeymapContext::Login, &back_tab),
            Some(KeyAction::FocusStep(-1))
        );
    }

    #[test]
    fn help_lists_context_bindings() {
        let help = help_text(KeymapContext::Talent).unwrap();
        assert!(help.contains("Ctrl+S add talent"));
        assert!(help.contains("Esc back to dashboard"));
        let login = help_text(KeymapContext::Login).unwrap();
        assert!(!login.contains("add talent"));
    }
}
