use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{PacingDraft, StartPolicy};
use crate::tui::app::PacingField;

/// Fields reachable for the current start policy, in focus order. The
/// date and time rows only exist while a scheduled start is chosen.
pub fn pacing_fields(draft: &PacingDraft) -> &'static [PacingField] {
    match draft.start {
        StartPolicy::Immediate => &[
            PacingField::Min,
            PacingField::Max,
            PacingField::Unit,
            PacingField::Start,
        ],
        StartPolicy::Scheduled => &[
            PacingField::Min,
            PacingField::Max,
            PacingField::Unit,
            PacingField::Start,
            PacingField::Date,
            PacingField::Time,
        ],
    }
}

/// Pacing form keys. Consumes every character so stray letters never
/// fall through to wizard shortcuts; Enter and Esc bubble to the caller.
pub(super) fn handle_pacing_key(
    draft: &mut PacingDraft,
    focus: &mut PacingField,
    key: KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            *focus = neighbor(draft, *focus, true);
            true
        }
        KeyCode::BackTab | KeyCode::Up => {
            *focus = neighbor(draft, *focus, false);
            true
        }
        KeyCode::Char(' ') => {
            match *focus {
                PacingField::Unit => draft.unit = draft.unit.cycle(),
                PacingField::Start => {
                    draft.start = match draft.start {
                        StartPolicy::Immediate => StartPolicy::Scheduled,
                        StartPolicy::Scheduled => StartPolicy::Immediate,
                    };
                }
                _ => {}
            }
            true
        }
        KeyCode::Backspace => {
            if let Some(text) = field_text(draft, *focus) {
                text.pop();
            }
            true
        }
        KeyCode::Char(c) => {
            if admits_char(*focus, c)
                && let Some(text) = field_text(draft, *focus)
            {
                text.push(c);
            }
            true
        }
        _ => false,
    }
}

fn neighbor(draft: &PacingDraft, focus: PacingField, forward: bool) -> PacingField {
    let fields = pacing_fields(draft);
    let pos = fields.iter().position(|f| *f == focus).unwrap_or(0);
    let len = fields.len();
    if forward {
        fields[(pos + 1) % len]
    } else {
        fields[(pos + len - 1) % len]
    }
}

fn field_text(draft: &mut PacingDraft, focus: PacingField) -> Option<&mut String> {
    match focus {
        PacingField::Min => Some(&mut draft.min_pause),
        PacingField::Max => Some(&mut draft.max_pause),
        PacingField::Date => Some(&mut draft.date),
        PacingField::Time => Some(&mut draft.time),
        PacingField::Unit | PacingField::Start => None,
    }
}

fn admits_char(focus: PacingField, c: char) -> bool {
    match focus {
        PacingField::Min | PacingField::Max => c.is_ascii_digit(),
        PacingField::Date => c.is_ascii_digit() || c == '-',
        PacingField::Time => c.is_ascii_digit() || c == ':',
        PacingField::Unit | PacingField::Start => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PauseUnit;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_cycles_only_reachable_fields() {
        let mut draft = PacingDraft::new("30", "60");
        let mut focus = PacingField::Min;

        let mut seen = vec![focus];
        for _ in 0..4 {
            handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Tab));
            seen.push(focus);
        }
        assert_eq!(
            seen,
            vec![
                PacingField::Min,
                PacingField::Max,
                PacingField::Unit,
                PacingField::Start,
                PacingField::Min,
            ]
        );
    }

    #[test]
    fn scheduling_exposes_date_and_time_fields() {
        let mut draft = PacingDraft::new("30", "60");
        let mut focus = PacingField::Start;

        handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Char(' ')));
        assert_eq!(draft.start, StartPolicy::Scheduled);

        handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Tab));
        assert_eq!(focus, PacingField::Date);
        for c in "2025-10-21".chars() {
            handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Char(c)));
        }
        assert_eq!(draft.date, "2025-10-21");

        handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Tab));
        assert_eq!(focus, PacingField::Time);
        for c in "14:30".chars() {
            handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Char(c)));
        }
        assert_eq!(draft.time, "14:30");
    }

    #[test]
    fn numeric_fields_reject_letters() {
        let mut draft = PacingDraft::new("", "");
        let mut focus = PacingField::Min;

        for c in "4x5".chars() {
            handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Char(c)));
        }
        assert_eq!(draft.min_pause, "45");
        handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Backspace));
        assert_eq!(draft.min_pause, "4");
    }

    #[test]
    fn space_on_the_unit_row_cycles_units() {
        let mut draft = PacingDraft::new("30", "60");
        let mut focus = PacingField::Unit;

        handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Char(' ')));
        assert_eq!(draft.unit, PauseUnit::Minutes);
        handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Char(' ')));
        assert_eq!(draft.unit, PauseUnit::Hours);
        handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Char(' ')));
        assert_eq!(draft.unit, PauseUnit::Seconds);
    }

    #[test]
    fn enter_bubbles_to_the_wizard() {
        let mut draft = PacingDraft::new("30", "60");
        let mut focus = PacingField::Min;
        assert!(!handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Enter)));
        assert!(!handle_pacing_key(&mut draft, &mut focus, press(KeyCode::Esc)));
    }
}
