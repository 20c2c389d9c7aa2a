use crate::app::{App, Tab};
use d5sim_core::{RoadGrid, Side};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Line, Modifier, Span, Style, Stylize};
use ratatui::symbols;
use ratatui::widgets::{
    Axis, Block, Borders, Cell, Chart, Clear, Dataset, GraphType, List, ListItem, Paragraph, Row,
    Table, Tabs, Wrap,
};
use ratatui::Frame;

const PLAYER_COLOR: Color = Color::Blue;
const BANKER_COLOR: Color = Color::Red;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);
    draw_tabs(frame, root[1], app);
    match app.tab {
        Tab::Perf => draw_perf(frame, root[2], app),
        Tab::Road => draw_road(frame, root[2], app),
        Tab::Log => draw_log(frame, root[2], app),
    }
    draw_footer(frame, root[3], app);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = &app.session;
    let balance = session.balance();
    let balance_color = if balance >= 0 {
        Color::Green
    } else {
        Color::Red
    };
    let state = if session.is_finished() {
        Span::styled("FINISHED", Style::default().fg(Color::Yellow))
    } else if app.active {
        Span::styled("PLAYING", Style::default().fg(Color::Green))
    } else {
        Span::styled("PAUSED", Style::default().fg(Color::DarkGray))
    };
    let lines = vec![
        Line::from(vec![
            "D5 Baccarat".bold(),
            Span::raw(format!(
                " | shoe {} | seed {:#x}",
                session.shoe_number(),
                session.seed()
            )),
        ]),
        Line::from(vec![
            Span::raw("Balance "),
            Span::styled(
                format!("{balance:+}"),
                Style::default()
                    .fg(balance_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " | Hands {} | Cards left {} | Speed {} | ",
                session.history().len(),
                session.cards_remaining(),
                app.speed().label()
            )),
            state,
        ]),
        Line::from(format!("Status: {}", app.status_line)),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(pane_block("Overview"));
    frame.render_widget(paragraph, area);
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<&str> = Tab::ALL.iter().map(|tab| tab.label()).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

fn draw_perf(frame: &mut Frame, area: Rect, app: &App) {
    let split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let points: Vec<(f64, f64)> = app
        .session
        .curve()
        .into_iter()
        .map(|(hand, balance)| (hand as f64, balance as f64))
        .collect();
    let x_max = points
        .last()
        .map(|(hand, _)| *hand)
        .unwrap_or(0.0)
        .max(10.0);
    let (y_min, y_max) = points
        .iter()
        .fold((-5.0_f64, 5.0_f64), |(lo, hi), (_, y)| (lo.min(*y), hi.max(*y)));
    let baseline = [(0.0, 0.0), (x_max, 0.0)];

    let datasets = vec![
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&baseline),
        Dataset::default()
            .name("D5 balance")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&points),
    ];
    let chart = Chart::new(datasets)
        .block(pane_block("Balance by decisive hand"))
        .x_axis(
            Axis::default()
                .title("hand")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max])
                .labels(vec!["0".to_string(), format!("{x_max:.0}")]),
        )
        .y_axis(
            Axis::default()
                .title("units")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![
                    format!("{y_min:.0}"),
                    "0".to_string(),
                    format!("{y_max:.0}"),
                ]),
        );
    frame.render_widget(chart, split[0]);

    let visible = split[1].height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = app
        .event_log
        .iter()
        .rev()
        .take(visible)
        .map(|line| ListItem::new(line.as_str()))
        .collect();
    frame.render_widget(List::new(items).block(pane_block("Events")), split[1]);
}

fn draw_road(frame: &mut Frame, area: Rect, app: &App) {
    let grid = app.session.grid();
    let block = pane_block("Big Road");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible_cols = (inner.width / 2) as usize;
    let mut lines = road_grid_lines(&grid, visible_cols);
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(PLAYER_COLOR)),
        Span::raw("Player  "),
        Span::styled("● ", Style::default().fg(BANKER_COLOR)),
        Span::raw("Banker  "),
        Span::raw("◉ tie before bead"),
    ]));
    let mut notes = Vec::new();
    if grid.trailing_ties > 0 {
        notes.push(format!("{} trailing tie(s) pending", grid.trailing_ties));
    }
    if grid.dropped > 0 {
        notes.push(format!("{} bead(s) off the grid", grid.dropped));
    }
    if !notes.is_empty() {
        lines.push(Line::from(notes.join(" | ")).fg(Color::Yellow));
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Renders the road two terminal cells per column, scrolled so the newest
/// column stays in view.
fn road_grid_lines(grid: &RoadGrid, visible_cols: usize) -> Vec<Line<'static>> {
    let end = grid.occupied_columns().max(visible_cols.min(grid.cols()));
    let start = end.saturating_sub(visible_cols);
    (0..grid.rows())
        .map(|row| {
            let spans: Vec<Span> = (start..end)
                .map(|col| match grid.get(row, col) {
                    Some(bead) => {
                        let color = match bead.winner {
                            Side::Player => PLAYER_COLOR,
                            Side::Banker => BANKER_COLOR,
                        };
                        let mark = if bead.tie_count > 0 { "◉ " } else { "● " };
                        Span::styled(mark, Style::default().fg(color))
                    }
                    None => Span::styled("· ", Style::default().fg(Color::DarkGray)),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App) {
    let visible = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = app
        .session
        .history()
        .iter()
        .rev()
        .take(visible)
        .map(|hand| {
            let winner_color = match hand.winner.side() {
                Some(Side::Player) => PLAYER_COLOR,
                Some(Side::Banker) => BANKER_COLOR,
                None => Color::Green,
            };
            let pnl_color = match hand.pnl {
                pnl if pnl > 0 => Color::Green,
                pnl if pnl < 0 => Color::Red,
                _ => Color::Gray,
            };
            Row::new(vec![
                Cell::from(hand.id.to_string()),
                Cell::from(Span::styled(
                    hand.winner.short(),
                    Style::default().fg(winner_color),
                )),
                Cell::from(format!("{}-{}", hand.player_score, hand.banker_score)),
                Cell::from(hand.delta().to_string()),
                Cell::from(hand.bet_placed.map(Side::short).unwrap_or("-")),
                Cell::from(Span::styled(
                    hand.outcome.label(),
                    Style::default().fg(pnl_color),
                )),
                Cell::from(format!("{:+}", hand.running_balance)),
            ])
        })
        .collect();
    let header = Row::new(vec!["#", "Win", "P-B", "Δ", "Bet", "Result", "Balance"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let table = Table::new(
        rows,
        [
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(pane_block("Hand Log"));
    frame.render_widget(table, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let stats = app.session.stats();
    let win_rate = stats
        .win_rate()
        .map(|rate| format!("{:.1}%", rate * 100.0))
        .unwrap_or_else(|| "-".to_string());
    let line = Line::from(vec![
        Span::styled("Banker wins ", Style::default().fg(BANKER_COLOR)),
        Span::raw(format!("{}  ", stats.banker_wins)),
        Span::styled("Player wins ", Style::default().fg(PLAYER_COLOR)),
        Span::raw(format!("{}  ", stats.player_wins)),
        Span::raw(format!("Ties {}  ", stats.ties)),
        Span::raw(format!("D5 win rate {win_rate}  ")),
        Span::raw(format!("Max drawdown {}", stats.max_drawdown)),
    ]);
    frame.render_widget(Paragraph::new(line).block(pane_block("Stats")), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("space  play / pause"),
        Line::from("d      deal one hand"),
        Line::from("f      deal to the cut card"),
        Line::from("r      new shoe"),
        Line::from("1 2 3  slow / normal / turbo"),
        Line::from("tab    next view (shift+tab back)"),
        Line::from("?      toggle help"),
        Line::from("q      quit"),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(pane_block("Help"));
    frame.render_widget(paragraph, area);
}

fn pane_block(title: &str) -> Block<'_> {
    Block::default().title(title).borders(Borders::ALL)
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
