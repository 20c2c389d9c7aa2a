use crate::app::App;
use crate::input::InputAction;
use d5sim_session::Speed;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::CloseHelp => app.show_help = false,
        InputAction::TogglePlay => app.toggle_play(),
        InputAction::DealOne => app.deal_one(),
        InputAction::FastForward => app.fast_forward(),
        InputAction::Reset => app.reset(),
        InputAction::SpeedSlow => app.set_speed(Speed::Slow),
        InputAction::SpeedNormal => app.set_speed(Speed::Normal),
        InputAction::SpeedTurbo => app.set_speed(Speed::Turbo),
        InputAction::NextTab => app.cycle_tab(true),
        InputAction::PrevTab => app.cycle_tab(false),
    }
}
