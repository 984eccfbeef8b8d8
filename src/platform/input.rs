//! Input translation
//!
//! Raw device events are reduced to intents, and a frame's intents are folded
//! into one `TickInput`.

use crate::sim::{CharacterKind, TickInput};

/// Device event as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// `KeyboardEvent.key` value
    Key(String),
    PointerDown,
    TouchStart,
}

/// Device-independent input signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Start, confirm, restart or flap
    Activate,
    OpenSelector,
    CancelSelector,
    Select(CharacterKind),
    /// Debug: let the bird fly itself
    ToggleAutopilot,
}

/// Map a raw event to an intent, None for unbound keys
pub fn translate(raw: &RawInput) -> Option<Intent> {
    match raw {
        RawInput::PointerDown | RawInput::TouchStart => Some(Intent::Activate),
        RawInput::Key(key) => match key.as_str() {
            " " | "Spacebar" => Some(Intent::Activate),
            "c" | "C" => Some(Intent::OpenSelector),
            "Escape" => Some(Intent::CancelSelector),
            "a" | "A" => Some(Intent::ToggleAutopilot),
            "1" => Some(Intent::Select(CharacterKind::Red)),
            "2" => Some(Intent::Select(CharacterKind::Blue)),
            "3" => Some(Intent::Select(CharacterKind::Yellow)),
            "4" => Some(Intent::Select(CharacterKind::Black)),
            _ => None,
        },
    }
}

/// Fold one intent into the pending tick input.
///
/// Flags latch until the tick consumes them; a later selection replaces an
/// earlier one. Autopilot is sticky and toggles.
pub fn apply_intent(input: &mut TickInput, intent: Intent) {
    match intent {
        Intent::Activate => input.activate = true,
        Intent::OpenSelector => input.open_selector = true,
        Intent::CancelSelector => input.cancel_selector = true,
        Intent::Select(kind) => input.select = Some(kind),
        Intent::ToggleAutopilot => {
            input.autopilot = !input.autopilot;
            log::info!("Autopilot: {}", input.autopilot);
        }
    }
}

/// Clear the one-shot flags after a tick, keeping sticky modes
pub fn consume(input: &mut TickInput) {
    *input = TickInput {
        autopilot: input.autopilot,
        ..Default::default()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: &str) -> RawInput {
        RawInput::Key(k.to_string())
    }

    #[test]
    fn test_translate_bindings() {
        assert_eq!(translate(&key(" ")), Some(Intent::Activate));
        assert_eq!(translate(&RawInput::PointerDown), Some(Intent::Activate));
        assert_eq!(translate(&RawInput::TouchStart), Some(Intent::Activate));
        assert_eq!(translate(&key("C")), Some(Intent::OpenSelector));
        assert_eq!(translate(&key("Escape")), Some(Intent::CancelSelector));
        assert_eq!(translate(&key("3")), Some(Intent::Select(CharacterKind::Yellow)));
        assert_eq!(translate(&key("5")), None);
        assert_eq!(translate(&key("Enter")), None);
    }

    #[test]
    fn test_apply_and_consume() {
        let mut input = TickInput::default();
        apply_intent(&mut input, Intent::Activate);
        apply_intent(&mut input, Intent::Select(CharacterKind::Blue));
        apply_intent(&mut input, Intent::Select(CharacterKind::Black));
        apply_intent(&mut input, Intent::ToggleAutopilot);
        assert!(input.activate);
        assert_eq!(input.select, Some(CharacterKind::Black));
        assert!(input.autopilot);

        consume(&mut input);
        assert!(!input.activate);
        assert_eq!(input.select, None);
        assert!(input.autopilot);

        apply_intent(&mut input, Intent::ToggleAutopilot);
        assert!(!input.autopilot);
    }
}
