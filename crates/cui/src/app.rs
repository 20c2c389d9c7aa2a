use anyhow::{Context, Result};
use d5sim_core::{Event, SimConfig};
use d5sim_session::{Session, SessionConfig, Speed};
use std::collections::VecDeque;
use std::time::Instant;
use tracing::info;

const MAX_EVENT_LOG: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Perf,
    Road,
    Log,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Perf, Tab::Road, Tab::Log];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Perf => "Performance",
            Tab::Road => "Big Road",
            Tab::Log => "Hand Log",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Perf => 0,
            Tab::Road => 1,
            Tab::Log => 2,
        }
    }
}

pub struct App {
    pub session: Session,
    pub tab: Tab,
    pub active: bool,
    pub last_deal: Option<Instant>,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn bootstrap(sim: SimConfig) -> Result<Self> {
        let session = Session::new(SessionConfig::new(sim)).context("start session")?;
        let mut app = Self {
            session,
            tab: Tab::Perf,
            active: false,
            last_deal: None,
            event_log: VecDeque::new(),
            status_line: "Paused. Space to play, ? for help.".to_string(),
            show_help: false,
            should_quit: false,
        };
        app.flush_events();
        Ok(app)
    }

    pub fn speed(&self) -> Speed {
        self.session.config.speed
    }

    pub fn toggle_play(&mut self) {
        if self.session.is_finished() {
            self.active = false;
            self.status_line = "Shoe finished. Press r for a new shoe.".to_string();
            return;
        }
        self.active = !self.active;
        self.last_deal = None;
        self.status_line = if self.active {
            format!("Playing at {} speed.", self.speed().label())
        } else {
            "Paused.".to_string()
        };
    }

    pub fn deal_one(&mut self) {
        let line = self.session.step().map(|hand| {
            format!(
                "Hand {}: {} {}-{} | {} | balance {:+}",
                hand.id,
                hand.winner.short(),
                hand.player_score,
                hand.banker_score,
                hand.outcome.label(),
                hand.running_balance
            )
        });
        match line {
            Some(line) => self.status_line = line,
            None => {
                self.active = false;
                self.status_line = "Cut card reached. Press r for a new shoe.".to_string();
            }
        }
        self.flush_events();
    }

    pub fn fast_forward(&mut self) {
        let dealt = self.session.fast_forward();
        self.active = false;
        self.status_line = format!(
            "Dealt {dealt} hands to the cut card. Balance {:+}.",
            self.session.balance()
        );
        self.flush_events();
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.active = false;
        self.last_deal = None;
        self.status_line = format!("Shoe {} ready.", self.session.shoe_number());
        info!(shoe = self.session.shoe_number(), "shoe reset from ui");
        self.flush_events();
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.session.config.speed = speed;
        self.status_line = format!("Speed set to {}.", speed.label());
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let len = Tab::ALL.len();
        let idx = self.tab.index();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.tab = Tab::ALL[next];
    }

    /// Deals the next hand when playing and the speed delay has passed.
    pub fn on_tick(&mut self, now: Instant) {
        if !self.active {
            return;
        }
        if let Some(last) = self.last_deal {
            if now.saturating_duration_since(last) < self.speed().delay() {
                return;
            }
        }
        self.last_deal = Some(now);
        self.deal_one();
    }

    fn flush_events(&mut self) {
        for event in self.session.drain_events() {
            self.push_event_line(format_event(&event));
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

fn format_event(event: &Event) -> String {
    match event {
        Event::ShoeShuffled { seed, cards } => {
            format!("shuffled {cards} cards (seed {seed:#x})")
        }
        Event::CardsBurned {
            indicator,
            burned,
            remaining,
        } => format!("burn {indicator}: {burned} cards burned, {remaining} left"),
        Event::HandSettled {
            id,
            winner,
            bet,
            outcome,
            running_balance,
            ..
        } => format!(
            "#{id} {} bet {} {} ({running_balance:+})",
            winner.short(),
            bet.map(|side| side.short()).unwrap_or("-"),
            outcome.label()
        ),
        Event::CutCardReached { remaining } => {
            format!("cut card reached with {remaining} cards left")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn seeded_app(seed: u64) -> App {
        App::bootstrap(SimConfig {
            seed: Some(seed),
            ..SimConfig::default()
        })
        .expect("app")
    }

    #[test]
    fn bootstrap_logs_shuffle_and_burn() {
        let app = seeded_app(7);
        assert!(!app.active);
        assert_eq!(app.event_log.len(), 2);
        assert!(app.event_log[0].starts_with("shuffled 416 cards"));
        assert!(app.event_log[1].starts_with("burn "));
    }

    #[test]
    fn tick_respects_speed_delay() {
        let mut app = seeded_app(11);
        app.set_speed(Speed::Slow);
        let start = Instant::now();

        app.on_tick(start);
        assert!(app.session.history().is_empty());

        app.toggle_play();
        app.on_tick(start);
        assert_eq!(app.session.history().len(), 1);

        app.on_tick(start + Duration::from_millis(200));
        assert_eq!(app.session.history().len(), 1);

        app.on_tick(start + Duration::from_millis(1500));
        assert_eq!(app.session.history().len(), 2);
    }

    #[test]
    fn fast_forward_stops_play_at_cut_card() {
        let mut app = seeded_app(12);
        app.toggle_play();
        app.fast_forward();
        assert!(!app.active);
        assert!(app.session.is_finished());
        assert!(app.event_log.iter().any(|line| line.starts_with("cut card")));

        app.toggle_play();
        assert!(!app.active);
        assert!(app.status_line.contains("Press r"));
    }

    #[test]
    fn reset_starts_next_shoe_paused() {
        let mut app = seeded_app(13);
        app.fast_forward();
        app.reset();
        assert!(!app.active);
        assert!(app.session.history().is_empty());
        assert_eq!(app.session.shoe_number(), 2);
        assert!(app
            .event_log
            .back()
            .is_some_and(|line| line.starts_with("burn ")));
    }

    #[test]
    fn tabs_cycle_both_ways() {
        let mut app = seeded_app(1);
        app.cycle_tab(true);
        assert_eq!(app.tab, Tab::Road);
        app.cycle_tab(true);
        app.cycle_tab(true);
        assert_eq!(app.tab, Tab::Perf);
        app.cycle_tab(false);
        assert_eq!(app.tab, Tab::Log);
    }
}
