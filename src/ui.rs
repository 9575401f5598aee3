use crate::journal::{Action, Journal, Outcome};
use crate::models::Category;
use crate::render::{GalleryView, ProgressListView, TableView};
use crate::view::Tab;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Progress,
    Budget,
    Wish,
}

impl FormKind {
    fn for_tab(tab: Tab) -> Option<Self> {
        match tab {
            Tab::Progress => Some(FormKind::Progress),
            Tab::Budget => Some(FormKind::Budget),
            Tab::WishList => Some(FormKind::Wish),
            _ => None,
        }
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            FormKind::Progress => &["Date", "Title", "Description", "Image URL"],
            FormKind::Budget => &["Category", "Item", "Cost"],
            FormKind::Wish => &["Category", "Item", "Estimated cost"],
        }
    }

    fn title(&self) -> &'static str {
        match self {
            FormKind::Progress => " Add Progress Update ",
            FormKind::Budget => " Add Budget Item ",
            FormKind::Wish => " Add Wish List Item ",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    HeroUrl,
    Story,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Form { kind: FormKind, field: usize },
    Text(TextTarget),
}

pub struct App {
    pub journal: Journal,
    pub mode: Mode,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            mode: Mode::Browse,
            notice: None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Form { kind, field } => self.handle_form_key(key, kind, field),
            Mode::Text(target) => self.handle_text_key(key, target),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let tab = self.journal.tabs.active();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.journal.tabs.next(),
            KeyCode::BackTab => self.journal.tabs.previous(),
            KeyCode::Char('a') => {
                if let Some(kind) = FormKind::for_tab(tab) {
                    self.notice = None;
                    self.mode = Mode::Form { kind, field: 0 };
                }
            }
            KeyCode::Char('e') if tab == Tab::Home => self.mode = Mode::Text(TextTarget::HeroUrl),
            KeyCode::Char('e') if tab == Tab::BuildStory => {
                self.mode = Mode::Text(TextTarget::Story)
            }
            KeyCode::Char('r') if tab == Tab::Home => self.apply(Action::ResetHero),
            KeyCode::Char('x') if tab == Tab::Home => self.apply(Action::RemoveHero),
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, kind: FormKind, field: usize) {
        let count = kind.labels().len();
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Tab | KeyCode::Down => {
                self.mode = Mode::Form {
                    kind,
                    field: (field + 1) % count,
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.mode = Mode::Form {
                    kind,
                    field: (field + count - 1) % count,
                }
            }
            KeyCode::Left | KeyCode::Right if kind != FormKind::Progress && field == 0 => {
                let form = match kind {
                    FormKind::Budget => &mut self.journal.budget_form,
                    _ => &mut self.journal.wish_form,
                };
                let current: Category = form.category.parse().unwrap_or_default();
                let next = if key.code == KeyCode::Left {
                    current.previous()
                } else {
                    current.next()
                };
                form.category = next.label().to_string();
            }
            KeyCode::Enter => self.submit_form(kind),
            KeyCode::Backspace => {
                if let Some(value) = self.form_field(kind, field) {
                    value.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(value) = self.form_field(kind, field) {
                    value.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent, target: TextTarget) {
        let value = match target {
            TextTarget::HeroUrl => &mut self.journal.hero.input,
            TextTarget::Story => &mut self.journal.story.draft,
        };

        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Backspace => {
                value.pop();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => value.clear(),
            KeyCode::Char(c) => value.push(c),
            KeyCode::Enter => {
                let text = value.clone();
                let action = match target {
                    TextTarget::HeroUrl => Action::UpdateHero(text),
                    TextTarget::Story => Action::UpdateStory(text),
                };
                self.apply(action);
                if self.notice.is_none() {
                    self.mode = Mode::Browse;
                }
            }
            _ => {}
        }
    }

    /// Editable text behind a form field; the category picker has none
    fn form_field(&mut self, kind: FormKind, field: usize) -> Option<&mut String> {
        match kind {
            FormKind::Progress => {
                let form = &mut self.journal.progress_form;
                match field {
                    0 => Some(&mut form.date),
                    1 => Some(&mut form.title),
                    2 => Some(&mut form.description),
                    3 => Some(&mut form.image_url),
                    _ => None,
                }
            }
            FormKind::Budget | FormKind::Wish => {
                let form = if kind == FormKind::Budget {
                    &mut self.journal.budget_form
                } else {
                    &mut self.journal.wish_form
                };
                match field {
                    1 => Some(&mut form.item),
                    2 => Some(&mut form.cost),
                    _ => None,
                }
            }
        }
    }

    fn submit_form(&mut self, kind: FormKind) {
        let action = match kind {
            FormKind::Progress => Action::AddProgress(self.journal.progress_form.clone()),
            FormKind::Budget => Action::AddBudget(self.journal.budget_form.clone()),
            FormKind::Wish => Action::AddWish(self.journal.wish_form.clone()),
        };
        self.apply(action);
        if self.notice.is_none() {
            self.mode = Mode::Browse;
        }
    }

    fn apply(&mut self, action: Action) {
        let outcome = self.journal.apply(action);
        self.notice = match outcome {
            Outcome::Applied(_) => None,
            rejected => rejected.notice(),
        };
    }

    fn form_values(&self, kind: FormKind) -> Vec<String> {
        match kind {
            FormKind::Progress => {
                let form = &self.journal.progress_form;
                vec![
                    form.date.clone(),
                    form.title.clone(),
                    form.description.clone(),
                    form.image_url.clone(),
                ]
            }
            FormKind::Budget | FormKind::Wish => {
                let form = if kind == FormKind::Budget {
                    &self.journal.budget_form
                } else {
                    &self.journal.wish_form
                };
                vec![
                    format!("◀ {} ▶", form.category),
                    form.item.clone(),
                    form.cost.clone(),
                ]
            }
        }
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "ui loop failed");
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Active section
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    let content = match app.mode {
        Mode::Form { kind, field } => {
            let split = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[1]);
            render_form(f, split[1], app, kind, field);
            split[0]
        }
        _ => chunks[1],
    };

    match app.journal.tabs.active() {
        Tab::Home => render_home(f, content, app),
        Tab::BuildStory => render_story(f, content, app),
        Tab::Progress => render_progress(f, content, app),
        Tab::Budget => render_budget(f, content, app),
        Tab::WishList => render_table(f, content, &app.journal.wish_table(), " Wish List ", "Estimated Cost"),
        Tab::Gallery => render_gallery(f, content, app),
    }

    render_status_bar(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let mut tab_spans = vec![];
    for (i, tab) in Tab::ALL.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }

        let style = if app.journal.tabs.is_active(*tab) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        tab_spans.push(Span::styled(tab.title(), style));
    }

    let header = Paragraph::new(vec![Line::from(tab_spans)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Build Journal "),
    );

    f.render_widget(header, area);
}

fn editing_line(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(Color::Yellow)),
        Span::raw(value.to_string()),
        Span::styled("▏", Style::default().fg(Color::Yellow)),
    ])
}

fn render_home(f: &mut Frame, area: Rect, app: &App) {
    let hero = &app.journal.hero;
    let mut lines = vec![match hero.src() {
        Some(src) => Line::from(vec![
            Span::styled("Hero image: ", Style::default().fg(Color::Cyan)),
            Span::raw(src.to_string()),
        ]),
        None => Line::from(Span::styled(
            "Hero image removed",
            Style::default().fg(Color::DarkGray),
        )),
    }];
    lines.push(Line::from(""));

    if app.mode == Mode::Text(TextTarget::HeroUrl) {
        lines.push(editing_line("Image URL", &hero.input));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Home "))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_story(f: &mut Frame, area: Rect, app: &App) {
    let story = &app.journal.story;
    let mut lines = vec![Line::from(story.text().to_string()), Line::from("")];

    if app.mode == Mode::Text(TextTarget::Story) {
        lines.push(editing_line("New text", &story.draft));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Build Story "))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_progress(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = match app.journal.progress_list() {
        ProgressListView::Placeholder { message } => vec![Line::from(message)],
        ProgressListView::Cards { cards } => {
            let mut lines = Vec::new();
            for card in cards {
                lines.push(Line::from(Span::styled(
                    card.title,
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                )));
                lines.push(Line::from(Span::styled(
                    card.date_line,
                    Style::default().fg(Color::DarkGray),
                )));
                if let Some(image) = card.image {
                    lines.push(Line::from(Span::styled(
                        format!("📷 {}", image.src),
                        Style::default().fg(Color::Cyan),
                    )));
                }
                lines.push(Line::from(card.description));
                lines.push(Line::from(""));
            }
            lines
        }
    };

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Progress (newest first) "))
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

fn render_budget(f: &mut Frame, area: Rect, app: &App) {
    let totals = app.journal.budget_totals();
    let lines = totals.lines();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(lines.len() as u16 + 2)])
        .split(area);

    render_table(f, chunks[0], &app.journal.budget_table(), " Budget ", "Cost");

    let last = lines.len() - 1;
    let total_lines: Vec<Line> = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == last && !totals.is_empty() {
                Line::from(Span::styled(line, Style::default().add_modifier(Modifier::BOLD)))
            } else {
                Line::from(line)
            }
        })
        .collect();

    let widget = Paragraph::new(total_lines).block(Block::default().borders(Borders::ALL).title(" Totals "));
    f.render_widget(widget, chunks[1]);
}

fn render_table(f: &mut Frame, area: Rect, view: &TableView, title: &str, cost_header: &str) {
    let header_cells = ["Category", "Item", cost_header].into_iter().map(|h| {
        Cell::from(h.to_string()).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    });

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows: Vec<Row> = match view {
        TableView::Placeholder { message, .. } => {
            vec![Row::new(vec![Cell::from(*message).style(Style::default().fg(Color::DarkGray))])]
        }
        TableView::Rows { rows } => rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.category.clone()),
                    Cell::from(truncate(&row.item, 40)),
                    Cell::from(row.cost.clone()).style(Style::default().fg(Color::Green)),
                ])
            })
            .collect(),
    };

    let table = Table::new(
        rows,
        [Constraint::Length(16), Constraint::Min(20), Constraint::Length(16)],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(title.to_string()),
    );

    f.render_widget(table, area);
}

fn render_gallery(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = match app.journal.gallery() {
        GalleryView::Placeholder { message } => vec![Line::from(message)],
        GalleryView::Images { images } => images
            .into_iter()
            .map(|img| Line::from(format!("🖼  {}", img.src)))
            .collect(),
    };

    let widget = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Gallery "));
    f.render_widget(widget, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App, kind: FormKind, field: usize) {
    let values = app.form_values(kind);
    let mut lines = Vec::new();

    for (i, (label, value)) in kind.labels().iter().zip(values.iter()).enumerate() {
        if i == field {
            lines.push(editing_line(label, value));
        } else {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(Color::DarkGray)),
                Span::raw(value.clone()),
            ]));
        }
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(kind.title()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if let Some(notice) = &app.notice {
        status_spans.push(Span::styled(
            format!(" {} ", notice),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
        status_spans.push(Span::raw(" | "));
    }

    let hints: &[(&str, &str)] = match app.mode {
        Mode::Browse => match app.journal.tabs.active() {
            Tab::Home => &[("Tab", "Section"), ("e", "Set URL"), ("r", "Reset"), ("x", "Remove"), ("q", "Quit")],
            Tab::BuildStory => &[("Tab", "Section"), ("e", "Edit"), ("q", "Quit")],
            Tab::Progress | Tab::Budget | Tab::WishList => &[("Tab", "Section"), ("a", "Add"), ("q", "Quit")],
            Tab::Gallery => &[("Tab", "Section"), ("q", "Quit")],
        },
        Mode::Form { .. } => &[("Tab/↓", "Next field"), ("←/→", "Category"), ("Enter", "Save"), ("Esc", "Cancel")],
        Mode::Text(_) => &[("Enter", "Save"), ("Ctrl-U", "Clear"), ("Esc", "Cancel")],
    };

    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            status_spans.push(Span::raw(" | "));
        }
        status_spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(format!(" {}", label)));
    }

    let status = Paragraph::new(Line::from(status_spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));

    f.render_widget(status, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
