//! TUI module - Terminal dashboard with ratatui
//!
//! Three screens: the stored plan with its day list, a live session with
//! per-set tracking and the rest countdown, and the completed-session
//! history. The engine owns all state transitions; this module only maps
//! keys to engine calls and paints snapshots.

use anyhow::{Result, anyhow, bail};
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};
use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use crate::catalog::Exercise;
use crate::db::{Database, StoredPlan};
use crate::error::SessionError;
use crate::plan::generator::{eligible_exercises, volume_params};
use crate::progression::{self, CompletedSession, Rating};
use crate::session::ActiveSession;

type Tui = Terminal<CrosstermBackend<Stdout>>;

const TICK_INTERVAL: Duration = Duration::from_secs(1);
const REST_STEP_SECONDS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum View {
    Plan,
    Session,
    History,
}

enum Overlay {
    RatingPrompt,
    Picker {
        items: Vec<&'static Exercise>,
        selected: usize,
    },
}

/// App state for TUI
pub struct App {
    db: Database,
    plan: Option<StoredPlan>,
    history: Vec<CompletedSession>,
    next_cursor: Option<u32>,
    view: View,
    overlay: Option<Overlay>,
    session: Option<ActiveSession>,
    selected_day: usize,
    selected_exercise: usize,
    status: Option<String>,
    should_quit: bool,
    last_tick: Instant,
}

impl App {
    pub fn new(db: Database) -> Result<Self> {
        let mut app = Self {
            db,
            plan: None,
            history: Vec::new(),
            next_cursor: None,
            view: View::Plan,
            overlay: None,
            session: None,
            selected_day: 0,
            selected_exercise: 0,
            status: None,
            should_quit: false,
            last_tick: Instant::now(),
        };
        app.reload()?;
        Ok(app)
    }

    fn reload(&mut self) -> Result<()> {
        self.plan = self.db.load_plan()?;
        self.history = self.db.get_sessions()?;
        self.next_cursor = self
            .plan
            .as_ref()
            .and_then(|stored| progression::next_day_index(&stored.plan, &self.history));
        if let Some(cursor) = self.next_cursor {
            self.selected_day = cursor as usize;
        }
        Ok(())
    }

    /// Jump straight into a session before the first draw: an explicit day,
    /// the round-robin next day, or the freestyle circuit.
    pub fn open_session(&mut self, day_index: Option<u32>, freestyle: bool) -> Result<()> {
        if freestyle {
            self.start_session(ActiveSession::freestyle());
            return Ok(());
        }
        let Some(stored) = &self.plan else {
            bail!("no plan stored yet, generate one first");
        };
        let day = match day_index {
            Some(n) => stored
                .plan
                .day(n)
                .ok_or_else(|| anyhow!("plan has no day {n}"))?,
            None => progression::next_day(&stored.plan, &self.history)
                .ok_or_else(|| anyhow!("plan has no days"))?,
        };
        let session = ActiveSession::start(day);
        self.start_session(session);
        Ok(())
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal()?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
            if self.last_tick.elapsed() >= TICK_INTERVAL {
                if let Some(session) = &mut self.session {
                    session.tick();
                }
                self.last_tick = Instant::now();
            }
        }
        Ok(())
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            self.status = None;
            if let Some(overlay) = self.overlay.take() {
                self.handle_overlay_key(overlay, key.code)?;
            } else {
                match self.view {
                    View::Plan => self.handle_plan_key(key.code)?,
                    View::Session => self.handle_session_key(key.code),
                    View::History => self.handle_history_key(key.code),
                }
            }
        }
        Ok(())
    }

    fn handle_plan_key(&mut self, code: KeyCode) -> Result<()> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('h') => self.view = View::History,
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_day = self.selected_day.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(stored) = &self.plan {
                    let last = stored.plan.days.len().saturating_sub(1);
                    self.selected_day = (self.selected_day + 1).min(last);
                }
            }
            KeyCode::Enter => {
                if let Some(stored) = &self.plan {
                    if let Some(day) = stored.plan.days.get(self.selected_day) {
                        self.start_session(ActiveSession::start(day));
                    }
                } else {
                    self.status = Some("no plan yet - generate one with the plan command".to_string());
                }
            }
            KeyCode::Char('f') => self.start_session(ActiveSession::freestyle()),
            _ => {}
        }
        Ok(())
    }

    fn handle_history_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Char('h') => self.view = View::Plan,
            _ => {}
        }
    }

    fn handle_session_key(&mut self, code: KeyCode) {
        let Some(session) = &mut self.session else {
            self.view = View::Plan;
            return;
        };
        match code {
            KeyCode::Esc | KeyCode::Char('q') => {
                // Cancel: throw the working copy away, nothing is recorded.
                self.session = None;
                self.view = View::Plan;
                self.status = Some("session discarded".to_string());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_exercise = self.selected_exercise.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = session.exercises().len().saturating_sub(1);
                self.selected_exercise = (self.selected_exercise + 1).min(last);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let set_index = c as usize - '1' as usize;
                self.with_selected(|session, id| session.toggle_set(id, set_index));
            }
            KeyCode::Char(' ') => self.toggle_next_set(),
            KeyCode::Char('+') => session.extend_rest(),
            KeyCode::Char('c') => session.cancel_rest(),
            KeyCode::Char('e') => session.toggle_edit_mode(),
            KeyCode::Char(']') => self.adjust_sets(1),
            KeyCode::Char('[') => self.adjust_sets(-1),
            KeyCode::Char('}') => self.adjust_rest(REST_STEP_SECONDS as i64),
            KeyCode::Char('{') => self.adjust_rest(-(REST_STEP_SECONDS as i64)),
            KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Char('a') => self.open_picker(),
            KeyCode::Char('f') => {
                if session.completed_sets() == 0 {
                    self.status = Some(SessionError::NothingCompleted.to_string());
                } else {
                    self.overlay = Some(Overlay::RatingPrompt);
                }
            }
            _ => {}
        }
    }

    fn handle_overlay_key(&mut self, overlay: Overlay, code: KeyCode) -> Result<()> {
        match overlay {
            Overlay::RatingPrompt => match code {
                KeyCode::Char('1') => self.finish_session(Rating::Light)?,
                KeyCode::Char('2') => self.finish_session(Rating::JustRight)?,
                KeyCode::Char('3') => self.finish_session(Rating::Hard)?,
                KeyCode::Esc => {}
                _ => self.overlay = Some(Overlay::RatingPrompt),
            },
            Overlay::Picker { items, mut selected } => match code {
                KeyCode::Up | KeyCode::Char('k') => {
                    selected = selected.saturating_sub(1);
                    self.overlay = Some(Overlay::Picker { items, selected });
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    selected = (selected + 1).min(items.len().saturating_sub(1));
                    self.overlay = Some(Overlay::Picker { items, selected });
                }
                KeyCode::Enter => {
                    if let Some(exercise) = items.get(selected).copied() {
                        self.add_from_catalog(exercise);
                    }
                }
                KeyCode::Esc => {}
                _ => self.overlay = Some(Overlay::Picker { items, selected }),
            },
        }
        Ok(())
    }

    fn start_session(&mut self, session: ActiveSession) {
        self.session = Some(session);
        self.selected_exercise = 0;
        self.view = View::Session;
        self.last_tick = Instant::now();
    }

    fn finish_session(&mut self, rating: Rating) -> Result<()> {
        let Some(session) = &self.session else {
            return Ok(());
        };
        let record = match session.finish(rating) {
            Ok(record) => record,
            Err(e) => {
                self.status = Some(e.to_string());
                return Ok(());
            }
        };
        // A failed write keeps the working copy, so finishing can be retried.
        match self.db.add_session(&record) {
            Ok(_) => {
                self.session = None;
                self.reload()?;
                self.view = View::History;
                self.status = Some(format!("session saved, felt {}", rating.label()));
            }
            Err(e) => self.status = Some(format!("save failed: {e}")),
        }
        Ok(())
    }

    fn selected_exercise_id(&self) -> Option<u32> {
        let session = self.session.as_ref()?;
        session
            .exercises()
            .get(self.selected_exercise)
            .map(|e| e.planned.id)
    }

    /// Run one engine call against the selected exercise, routing any
    /// engine error to the status line.
    fn with_selected(
        &mut self,
        op: impl FnOnce(&mut ActiveSession, u32) -> Result<(), SessionError>,
    ) {
        let Some(id) = self.selected_exercise_id() else {
            return;
        };
        let Some(session) = &mut self.session else {
            return;
        };
        if let Err(e) = op(session, id) {
            self.status = Some(e.to_string());
        }
    }

    fn toggle_next_set(&mut self) {
        let Some(id) = self.selected_exercise_id() else {
            return;
        };
        let Some(session) = &mut self.session else {
            return;
        };
        let next = session
            .exercises()
            .iter()
            .find(|e| e.planned.id == id)
            .and_then(|e| e.done.iter().position(|d| !*d));
        match next {
            Some(set_index) => {
                if let Err(e) = session.toggle_set(id, set_index) {
                    self.status = Some(e.to_string());
                }
            }
            None => self.status = Some("all sets already complete".to_string()),
        }
    }

    fn adjust_sets(&mut self, delta: i64) {
        let Some(id) = self.selected_exercise_id() else {
            return;
        };
        let Some(session) = &mut self.session else {
            return;
        };
        let Some(current) = session
            .exercises()
            .iter()
            .find(|e| e.planned.id == id)
            .map(|e| e.planned.sets)
        else {
            return;
        };
        let target = (current as i64 + delta).max(0) as u32;
        if let Err(e) = session.set_sets(id, target) {
            self.status = Some(e.to_string());
        }
    }

    fn adjust_rest(&mut self, delta: i64) {
        let Some(id) = self.selected_exercise_id() else {
            return;
        };
        let Some(session) = &mut self.session else {
            return;
        };
        let Some(current) = session
            .exercises()
            .iter()
            .find(|e| e.planned.id == id)
            .map(|e| e.planned.rest_seconds)
        else {
            return;
        };
        let target = (current as i64 + delta).max(0) as u32;
        if let Err(e) = session.set_rest(id, target) {
            self.status = Some(e.to_string());
        }
    }

    fn remove_selected(&mut self) {
        let Some(id) = self.selected_exercise_id() else {
            return;
        };
        let Some(session) = &mut self.session else {
            return;
        };
        match session.remove_exercise(id) {
            Ok(()) => {
                let last = session.exercises().len().saturating_sub(1);
                self.selected_exercise = self.selected_exercise.min(last);
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn open_picker(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        if !session.edit_mode() {
            self.status = Some(SessionError::EditModeOff.to_string());
            return;
        }
        let items = match &self.plan {
            Some(stored) => eligible_exercises(&stored.answers),
            None => crate::catalog::all_exercises().iter().collect(),
        };
        if items.is_empty() {
            self.status = Some("no eligible exercises to add".to_string());
            return;
        }
        self.overlay = Some(Overlay::Picker { items, selected: 0 });
    }

    fn add_from_catalog(&mut self, exercise: &'static Exercise) {
        let volume = match &self.plan {
            Some(stored) => volume_params(stored.answers.goal, stored.answers.body_type),
            None => volume_params(
                crate::questionnaire::Goal::Maintain,
                crate::questionnaire::BodyType::Meso,
            ),
        };
        let Some(session) = &mut self.session else {
            return;
        };
        match session.add_exercise(
            exercise.name,
            volume.sets,
            volume.reps,
            volume.rest_seconds,
            Some(exercise.id),
        ) {
            Ok(_) => self.status = Some(format!("added {}", exercise.name)),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    // === Rendering ===

    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        match self.view {
            View::Plan => self.render_plan(frame, chunks[1]),
            View::Session => self.render_session(frame, chunks[1]),
            View::History => self.render_history(frame, chunks[1]),
        }
        self.render_footer(frame, chunks[2]);

        match &self.overlay {
            Some(Overlay::RatingPrompt) => self.render_rating_prompt(frame, chunks[1]),
            Some(Overlay::Picker { items, selected }) => {
                self.render_picker(frame, chunks[1], items, *selected);
            }
            None => {}
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let title = match self.view {
            View::Plan => "repforge - training plan".to_string(),
            View::History => "repforge - session history".to_string(),
            View::Session => match &self.session {
                Some(session) => {
                    let edit = if session.edit_mode() { " [EDIT]" } else { "" };
                    format!("repforge - {}{}", session.focus(), edit)
                }
                None => "repforge".to_string(),
            },
        };
        let header = Paragraph::new(title)
            .style(Style::default().fg(Color::Cyan).bold())
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, area);
    }

    fn render_plan(&self, frame: &mut Frame, area: Rect) {
        let Some(stored) = &self.plan else {
            let empty = Paragraph::new("No plan yet.\n\nGenerate one from the command line, then come back.")
                .block(Block::default().borders(Borders::ALL).title("Plan"));
            frame.render_widget(empty, area);
            return;
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(area);

        let items: Vec<ListItem> = stored
            .plan
            .days
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let next = if self.next_cursor == Some(i as u32) {
                    "  (next)"
                } else {
                    ""
                };
                ListItem::new(format!(
                    "Day {} - {} ({} min){}",
                    day.day_index, day.focus, day.estimated_minutes, next
                ))
            })
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Week"))
            .highlight_style(Style::default().bg(Color::DarkGray).bold());
        let mut list_state = ListState::default();
        list_state.select(Some(self.selected_day));
        frame.render_stateful_widget(list, columns[0], &mut list_state);

        let detail = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(columns[1]);

        let day = stored.plan.days.get(self.selected_day);
        let rows: Vec<Row> = day
            .map(|day| {
                day.exercises
                    .iter()
                    .map(|e| {
                        Row::new(vec![
                            Cell::from(e.name.clone()),
                            Cell::from(format!("{}", e.sets)),
                            Cell::from(e.reps.clone()),
                            Cell::from(format!("{}s", e.rest_seconds)),
                        ])
                    })
                    .collect()
            })
            .unwrap_or_default();
        let title = day.map(|d| d.focus.clone()).unwrap_or_else(|| "Day".to_string());
        let table = Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(6),
                Constraint::Length(8),
                Constraint::Length(6),
            ],
        )
        .header(Row::new(vec!["Exercise", "Sets", "Reps", "Rest"]).style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(table, detail[0]);

        let coverage = stored
            .plan
            .muscle_coverage()
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(muscle, count)| format!("{} {}", muscle.label(), count))
            .collect::<Vec<_>>()
            .join(" | ");
        let coverage = Paragraph::new(coverage)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Weekly coverage"));
        frame.render_widget(coverage, detail[1]);
    }

    fn render_session(&self, frame: &mut Frame, area: Rect) {
        let Some(session) = &self.session else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let rest_title = match session.rest_seconds() {
            Some(seconds) => format!("Rest: {seconds}s"),
            None => "Progress".to_string(),
        };
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(rest_title))
            .gauge_style(Style::default().fg(Color::Green))
            .percent(session.progress_percent() as u16)
            .label(format!(
                "{}% ({} of {} sets)",
                session.progress_percent(),
                session.completed_sets(),
                session.total_sets()
            ));
        frame.render_widget(gauge, chunks[0]);

        let rows: Vec<Row> = session
            .exercises()
            .iter()
            .map(|e| {
                let boxes: String = e.done.iter().map(|d| if *d { "[x]" } else { "[ ]" }).collect();
                let row = Row::new(vec![
                    Cell::from(e.planned.name.clone()),
                    Cell::from(boxes),
                    Cell::from(e.planned.reps.clone()),
                    Cell::from(format!("{}s", e.planned.rest_seconds)),
                ]);
                if e.is_complete() {
                    row.style(Style::default().fg(Color::Green))
                } else {
                    row
                }
            })
            .collect();
        let title = if session.edit_mode() {
            "Exercises [edit mode]"
        } else {
            "Exercises"
        };
        let table = Table::new(
            rows,
            [
                Constraint::Min(24),
                Constraint::Length(24),
                Constraint::Length(8),
                Constraint::Length(6),
            ],
        )
        .header(Row::new(vec!["Exercise", "Sets", "Reps", "Rest"]).style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().bg(Color::DarkGray).bold());
        let mut table_state = TableState::default();
        table_state.select(Some(self.selected_exercise));
        frame.render_stateful_widget(table, chunks[1], &mut table_state);
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let counts = progression::rating_counts(&self.history);
        let summary = format!(
            "{} sessions | light {} | just right {} | hard {}",
            self.history.len(),
            counts.light,
            counts.just_right,
            counts.hard
        );
        let summary = Paragraph::new(summary)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Summary"));
        frame.render_widget(summary, chunks[0]);

        // Newest on top.
        let rows: Vec<Row> = self
            .history
            .iter()
            .rev()
            .map(|record| {
                let day = match record.day_index {
                    Some(day_index) => format!("Day {day_index}"),
                    None => "Freestyle".to_string(),
                };
                Row::new(vec![
                    Cell::from(record.id.map(|id| id.to_string()).unwrap_or_default()),
                    Cell::from(record.date.format("%Y-%m-%d %H:%M").to_string()),
                    Cell::from(day),
                    Cell::from(record.rating.label()),
                ])
            })
            .collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(5),
                Constraint::Length(18),
                Constraint::Length(10),
                Constraint::Min(10),
            ],
        )
        .header(Row::new(vec!["#", "Date", "Day", "Rating"]).style(Style::default().bold()))
        .block(Block::default().borders(Borders::ALL).title("Completed sessions"));
        frame.render_widget(table, chunks[1]);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let hints = if let Some(status) = &self.status {
            status.clone()
        } else {
            match (&self.overlay, self.view) {
                (Some(Overlay::RatingPrompt), _) => {
                    "1: light | 2: just right | 3: hard | esc: back".to_string()
                }
                (Some(Overlay::Picker { .. }), _) => {
                    "up/down: select | enter: add | esc: close".to_string()
                }
                (None, View::Plan) => {
                    "up/down: day | enter: start | f: freestyle | h: history | q: quit".to_string()
                }
                (None, View::History) => "esc: back | q: quit".to_string(),
                (None, View::Session) => {
                    let session_hints = match self.session.as_ref().map(|s| s.edit_mode()) {
                        Some(true) => "]/[: sets | }/{: rest | a: add | d: remove | e: leave edit",
                        _ => "1-9/space: sets | +: more rest | c: cancel rest | e: edit | f: finish",
                    };
                    format!("{session_hints} | esc: discard")
                }
            }
        };
        let style = if self.status.is_some() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let footer = Paragraph::new(hints)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, area);
    }

    fn render_rating_prompt(&self, frame: &mut Frame, area: Rect) {
        let popup = centered_rect(40, 30, area);
        frame.render_widget(Clear, popup);
        let prompt = Paragraph::new("1 - light\n2 - just right\n3 - hard")
            .block(Block::default().borders(Borders::ALL).title("How did it feel?"));
        frame.render_widget(prompt, popup);
    }

    fn render_picker(&self, frame: &mut Frame, area: Rect, items: &[&'static Exercise], selected: usize) {
        let popup = centered_rect(60, 70, area);
        frame.render_widget(Clear, popup);
        let rows: Vec<ListItem> = items
            .iter()
            .map(|e| ListItem::new(format!("{} ({})", e.name, e.equipment.label())))
            .collect();
        let list = List::new(rows)
            .block(Block::default().borders(Borders::ALL).title("Add exercise"))
            .highlight_style(Style::default().bg(Color::DarkGray).bold());
        let mut state = ListState::default();
        state.select(Some(selected));
        frame.render_stateful_widget(list, popup, &mut state);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    fn start_freestyle_with_one_set(app: &mut App) {
        app.start_session(ActiveSession::freestyle());
        let first = app.session.as_ref().unwrap().exercises()[0].planned.id;
        app.session.as_mut().unwrap().toggle_set(first, 0).unwrap();
    }

    #[test]
    fn test_saved_session_lands_in_history() {
        let db = Database::open_in_memory().unwrap();
        let mut app = App::new(db).unwrap();
        start_freestyle_with_one_set(&mut app);

        app.finish_session(Rating::JustRight).unwrap();
        assert!(app.session.is_none());
        assert_eq!(app.view, View::History);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].rating, Rating::JustRight);
    }

    #[test]
    fn test_failed_save_keeps_session_for_retry() {
        // Two handles on one shared in-memory database: the first plants a
        // sessions table that rejects every insert, the second is the app's.
        let uri = "file:repforge_failed_save?mode=memory&cache=shared";
        let setup = Connection::open(uri).unwrap();
        setup
            .execute_batch(
                "CREATE TABLE sessions (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    date TEXT NOT NULL,
                    day_index INTEGER,
                    rating TEXT NOT NULL CHECK (rating = 'never')
                )",
            )
            .unwrap();

        let mut app = App::new(Database::open(uri).unwrap()).unwrap();
        start_freestyle_with_one_set(&mut app);

        app.finish_session(Rating::Hard).unwrap();
        let session = app
            .session
            .as_ref()
            .expect("working copy dropped on a failed save");
        assert_eq!(session.completed_sets(), 1);
        assert_eq!(app.view, View::Session);
        let status = app.status.as_deref().expect("failure missing from the status line");
        assert!(status.contains("save failed"), "unexpected status: {status}");

        // Once the table accepts inserts again, the same session finishes.
        setup
            .execute_batch(
                "DROP TABLE sessions;
                 CREATE TABLE sessions (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    date TEXT NOT NULL,
                    day_index INTEGER,
                    rating TEXT NOT NULL
                )",
            )
            .unwrap();
        app.finish_session(Rating::Hard).unwrap();
        assert!(app.session.is_none());
        assert_eq!(app.view, View::History);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].rating, Rating::Hard);
    }
}
