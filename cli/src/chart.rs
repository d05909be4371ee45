use std::{io, time::Duration};

use anyhow::{anyhow, Result};
use coophours_core::FamilyData;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, Paragraph},
};

const MUTED: Color = Color::DarkGray;
const PRIMARY: Color = Color::Cyan;

/// Chart-ready points: x is days since the start of the period.
struct SeriesLine {
    label: String,
    color: Color,
    points: Vec<(f64, f64)>,
}

struct ChartApp<'a> {
    data: &'a FamilyData,
    lines: Vec<SeriesLine>,
    max_x: f64,
    max_y: f64,
}

impl<'a> ChartApp<'a> {
    fn new(data: &'a FamilyData) -> Self {
        let origin = data.start_of_period.date();
        let lines: Vec<SeriesLine> = data
            .history
            .iter()
            .map(|(_, series)| SeriesLine {
                label: series.label.clone(),
                color: series.color.parse().unwrap_or(PRIMARY),
                points: series
                    .data
                    .iter()
                    .map(|p| ((p.x - origin).num_days() as f64, p.y))
                    .collect(),
            })
            .collect();

        let max_x = (data.end_of_period.date() - origin).num_days().max(1) as f64;
        let max_y = lines
            .iter()
            .flat_map(|l| l.points.iter().map(|(_, y)| *y))
            .fold(1.0_f64, f64::max)
            .ceil();

        Self { data, lines, max_x, max_y }
    }
}

pub fn run(data: &FamilyData) -> Result<()> {
    let app = ChartApp::new(data);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        disable_raw_mode()?;
        return Err(err.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(err) => {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            return Err(err.into());
        }
    };

    session(&mut terminal, &app, poll_event, restore)
}

fn poll_event() -> io::Result<Option<Event>> {
    if event::poll(Duration::from_millis(100))? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Runs the draw loop, then hands the terminal to `restore` whatever the
/// loop returned.
fn session<B, E, R>(terminal: &mut Terminal<B>, app: &ChartApp, next_event: E, restore: R) -> Result<()>
where
    B: Backend,
    E: FnMut() -> io::Result<Option<Event>>,
    R: FnOnce(&mut Terminal<B>) -> Result<()>,
{
    let res = run_app(terminal, app, next_event);
    let restored = restore(terminal);
    res.and(restored)
}

fn run_app<B, E>(terminal: &mut Terminal<B>, app: &ChartApp, mut next_event: E) -> Result<()>
where
    B: Backend,
    E: FnMut() -> io::Result<Option<Event>>,
{
    loop {
        terminal.draw(|f| ui(f, app)).map_err(|e| anyhow!("draw failed: {e}"))?;

        if let Some(Event::Key(key)) = next_event()? {
            if key.kind == KeyEventKind::Press && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(());
            }
        }
    }
}

fn restore(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn ui(frame: &mut Frame, app: &ChartApp) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(10),   // Chart
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    let data = app.data;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(data.family_name.to_uppercase(), Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(
                "  booked {:.2}h / goal {:.2}h, done {:.2}h",
                data.hours_booked, data.hours_goal, data.hours_done
            ),
            Style::default().fg(Color::White),
        ),
    ]));
    frame.render_widget(header, layout[0]);

    draw_chart(frame, app, layout[1]);

    let footer = Paragraph::new(Span::styled("QUIT: q", Style::default().fg(MUTED))).alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

fn draw_chart(frame: &mut Frame, app: &ChartApp, area: Rect) {
    let datasets: Vec<Dataset> = app
        .lines
        .iter()
        .map(|line| {
            Dataset::default()
                .name(line.label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(line.color))
                .data(&line.points)
        })
        .collect();

    let start = app.data.start_of_period.format("%b %d").to_string();
    let end = app.data.end_of_period.format("%b %d").to_string();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUTED))
                .title(" Hours History "),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(MUTED))
                .bounds([0.0, app.max_x])
                .labels(vec![start, end]),
        )
        .y_axis(
            Axis::default()
                .title("h")
                .style(Style::default().fg(MUTED))
                .bounds([0.0, app.max_y])
                .labels(vec!["0".to_string(), format!("{:.0}", app.max_y)]),
        );

    frame.render_widget(chart, area);
}
