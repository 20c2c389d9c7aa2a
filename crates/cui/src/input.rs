use crossterm::event::{KeyCode, KeyEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Quit,
    ToggleHelp,
    CloseHelp,
    TogglePlay,
    DealOne,
    FastForward,
    Reset,
    SpeedSlow,
    SpeedNormal,
    SpeedTurbo,
    NextTab,
    PrevTab,
}

pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => InputAction::CloseHelp,
        KeyCode::Tab => InputAction::NextTab,
        KeyCode::BackTab => InputAction::PrevTab,
        KeyCode::Enter => InputAction::DealOne,
        KeyCode::Char('q') => InputAction::Quit,
        KeyCode::Char('?') => InputAction::ToggleHelp,
        KeyCode::Char(' ') => InputAction::TogglePlay,
        KeyCode::Char('d') => InputAction::DealOne,
        KeyCode::Char('f') => InputAction::FastForward,
        KeyCode::Char('r') => InputAction::Reset,
        KeyCode::Char('1') => InputAction::SpeedSlow,
        KeyCode::Char('2') => InputAction::SpeedNormal,
        KeyCode::Char('3') => InputAction::SpeedTurbo,
        _ => InputAction::None,
    }
}
