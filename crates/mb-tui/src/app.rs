//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use mb_core::birth::{
    BirthFlow, CharacterSheet, ChoiceKind, FlowStatus, Screen, StatOrder, choices,
};
use mb_core::data::{self, stat_display, Stat};
use mb_core::{GameRng, MAX_NAME_LEN};

use crate::input::key_to_event;
use crate::session::{MetaLine, ServerEntry, ServerList, parse_manual_server, random_name};
use crate::theme::Theme;
use crate::widgets::{ClassDetail, MenuColumn, PointCostDetail, RaceDetail};

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Picking a game server from the metaserver list (or typing one)
    ServerSelect,
    /// Entering the account name
    EnterName,
    /// Entering the account password
    EnterPassword,
    /// The birth flow proper
    Birth,
    /// Birth options sub-screen, overlaid on the birth flow
    BirthOptions,
    /// Character accepted; waiting for the final keypress
    Done,
}

/// Entries in the birth options overlay
const OPTION_COUNT: usize = 2;

/// Application state
pub struct App {
    /// Birth flow controller
    flow: BirthFlow,

    /// Current UI mode
    mode: UiMode,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,

    /// UI-side randomness (random names); the flow owns its own stream
    rng: GameRng,

    /// Should quit
    should_quit: bool,

    /// Metaserver response, when one was fetched
    servers: Option<ServerList>,
    server_cursor: usize,
    /// Manual host[:port] entry when no list is available
    manual_server: String,
    /// The selected server
    server: Option<ServerEntry>,

    name: String,
    password: String,

    /// Finalized character, set once the flow completes
    sheet: Option<CharacterSheet>,

    options_cursor: usize,
}

impl App {
    pub fn new(
        flow: BirthFlow,
        theme: Theme,
        rng: GameRng,
        servers: Option<ServerList>,
        server: Option<ServerEntry>,
        name: Option<String>,
    ) -> Self {
        let mode = if server.is_none() {
            UiMode::ServerSelect
        } else if name.is_none() {
            UiMode::EnterName
        } else {
            UiMode::EnterPassword
        };
        Self {
            flow,
            mode,
            theme,
            rng,
            should_quit: false,
            servers,
            server_cursor: 0,
            manual_server: String::new(),
            server,
            name: name.unwrap_or_default(),
            password: String::new(),
            sheet: None,
            options_cursor: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn sheet(&self) -> Option<&CharacterSheet> {
        self.sheet.as_ref()
    }

    pub fn server(&self) -> Option<&ServerEntry> {
        self.server.as_ref()
    }

    pub fn account_name(&self) -> &str {
        &self.name
    }

    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else { return };
        if key.kind != crossterm::event::KeyEventKind::Press {
            return;
        }

        // Ctrl-X tears the session down from anywhere
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('x') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            UiMode::ServerSelect => self.handle_server_select(key),
            UiMode::EnterName => self.handle_enter_name(key),
            UiMode::EnterPassword => self.handle_enter_password(key),
            UiMode::Birth => self.handle_birth(key),
            UiMode::BirthOptions => self.handle_birth_options(key),
            UiMode::Done => self.should_quit = true,
        }
    }

    fn handle_server_select(&mut self, key: crossterm::event::KeyEvent) {
        let count = self.servers.as_ref().map_or(0, |l| l.servers.len());
        if count > 0 {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.server_cursor = (self.server_cursor + count - 1) % count;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.server_cursor = (self.server_cursor + 1) % count;
                }
                KeyCode::Enter => {
                    if let Some(list) = &self.servers {
                        self.server = Some(list.servers[self.server_cursor].clone());
                        self.mode = UiMode::EnterName;
                    }
                }
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
        } else {
            // No metaserver list; fall back to typing host:port
            match key.code {
                KeyCode::Char(c) if !c.is_control() => self.manual_server.push(c),
                KeyCode::Backspace => {
                    self.manual_server.pop();
                }
                KeyCode::Enter if !self.manual_server.is_empty() => {
                    self.server = Some(parse_manual_server(&self.manual_server));
                    self.mode = UiMode::EnterName;
                }
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
        }
    }

    fn handle_enter_name(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Char('*') => self.name = random_name(&mut self.rng),
            KeyCode::Char(c) if c.is_ascii_graphic() && self.name.len() < MAX_NAME_LEN => {
                self.name.push(c);
            }
            KeyCode::Backspace => {
                self.name.pop();
            }
            KeyCode::Enter if !self.name.is_empty() => self.mode = UiMode::EnterPassword,
            KeyCode::Esc => self.mode = UiMode::ServerSelect,
            _ => {}
        }
    }

    fn handle_enter_password(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Char(c) if c.is_ascii_graphic() && self.password.len() < MAX_NAME_LEN => {
                self.password.push(c);
            }
            KeyCode::Backspace => {
                self.password.pop();
            }
            // The server rejects the historical default outright
            KeyCode::Enter if !self.password.is_empty() && self.password != "passwd" => {
                self.mode = UiMode::Birth;
            }
            KeyCode::Esc => {
                self.password.clear();
                self.mode = UiMode::EnterName;
            }
            _ => {}
        }
    }

    fn handle_birth(&mut self, key: crossterm::event::KeyEvent) {
        let Some(event) = key_to_event(key) else { return };
        match self.flow.step(event) {
            FlowStatus::Running => {}
            FlowStatus::OpenOptions => {
                self.options_cursor = 0;
                self.mode = UiMode::BirthOptions;
            }
            FlowStatus::Complete(sheet) => {
                self.sheet = Some(sheet);
                self.mode = UiMode::Done;
            }
            FlowStatus::Quit => self.should_quit = true,
        }
    }

    fn handle_birth_options(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.options_cursor = (self.options_cursor + OPTION_COUNT - 1) % OPTION_COUNT;
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.options_cursor = (self.options_cursor + 1) % OPTION_COUNT;
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.options_cursor == 0 {
                    self.theme = if self.theme.is_dark() {
                        Theme::light()
                    } else {
                        Theme::dark()
                    };
                }
                // Cursor 1 is the close action
                if self.options_cursor == 1 {
                    self.mode = UiMode::Birth;
                }
            }
            KeyCode::Esc | KeyCode::Char('=') => self.mode = UiMode::Birth,
            _ => {}
        }
    }

    /// Render the current screen
    pub fn render(&self, frame: &mut Frame) {
        match self.mode {
            UiMode::ServerSelect => self.render_server_select(frame),
            UiMode::EnterName => self.render_text_prompt(
                frame,
                "Enter your account name",
                &self.name,
                "Type your name, '*' for a random one, Enter to continue, Esc to go back",
                false,
            ),
            UiMode::EnterPassword => self.render_text_prompt(
                frame,
                "Enter your password",
                &self.password,
                "Enter to continue, Esc to go back, Ctrl-X to quit",
                true,
            ),
            UiMode::Birth => self.render_birth(frame),
            UiMode::BirthOptions => {
                self.render_birth(frame);
                self.render_birth_options(frame);
            }
            UiMode::Done => self.render_done(frame),
        }
    }

    fn render_server_select(&self, frame: &mut Frame) {
        let area = centered_rect(60, 70, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title("Choose a server")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        match &self.servers {
            Some(list) => {
                let mut server_row = 0usize;
                let items: Vec<ListItem> = list
                    .lines
                    .iter()
                    .map(|line| match line {
                        MetaLine::Notice(text) => ListItem::new(Line::from(Span::styled(
                            text.clone(),
                            Style::default().fg(self.theme.text_dim),
                        ))),
                        MetaLine::Server(i) => {
                            let entry = &list.servers[*i];
                            let style = if server_row == self.server_cursor {
                                Style::default()
                                    .fg(self.theme.cursor_fg)
                                    .bg(self.theme.cursor_bg)
                            } else {
                                Style::default().fg(self.theme.text)
                            };
                            let prefix = if server_row == self.server_cursor {
                                "> "
                            } else {
                                "  "
                            };
                            server_row += 1;
                            ListItem::new(Line::from(Span::styled(
                                format!("{prefix}{} (port {})", entry.name, entry.port),
                                style,
                            )))
                        }
                    })
                    .collect();
                frame.render_widget(List::new(items), chunks[0]);
                let footer = Paragraph::new("arrows to move, Enter to select, Esc to quit")
                    .style(Style::default().fg(self.theme.text_dim));
                frame.render_widget(footer, chunks[1]);
            }
            None => {
                let lines = vec![
                    Line::from("The metaserver could not be reached."),
                    Line::from(""),
                    Line::from(format!("Server (host:port): {}_", self.manual_server)),
                ];
                frame.render_widget(
                    Paragraph::new(lines).style(Style::default().fg(self.theme.text)),
                    chunks[0],
                );
                let footer = Paragraph::new("Type an address, Enter to continue, Esc to quit")
                    .style(Style::default().fg(self.theme.text_dim));
                frame.render_widget(footer, chunks[1]);
            }
        }
    }

    fn render_text_prompt(
        &self,
        frame: &mut Frame,
        title: &str,
        value: &str,
        footer: &str,
        mask: bool,
    ) {
        let area = centered_rect(50, 25, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let shown = if mask {
            "*".repeat(value.len())
        } else {
            value.to_string()
        };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(format!("{shown}_")).style(Style::default().fg(self.theme.value)),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(footer).style(Style::default().fg(self.theme.text_dim)),
            chunks[1],
        );
    }

    fn render_birth(&self, frame: &mut Frame) {
        match self.flow.screen() {
            Screen::QuickAsk => self.render_quick_ask(frame),
            Screen::QuickConfirm => self.render_quick_confirm(frame),
            Screen::FinalConfirm => self.render_final_confirm(frame),
            Screen::Choice(..) | Screen::PointBuy(_) | Screen::StatOrder(_) => {
                self.render_birth_main(frame);
            }
        }
    }

    /// The main birth layout: instruction header, the four choice columns
    /// (earlier ones reduced to their chosen entry), and a detail pane.
    fn render_birth_main(&self, frame: &mut Frame) {
        let draft = self.flow.draft();

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(2),
            ])
            .split(frame.area());

        let hint = match self.flow.screen() {
            Screen::Choice(_, model) => model.hint(),
            Screen::PointBuy(_) => {
                "Spend birth points on your stats. Left/Right adjust the current stat."
            }
            Screen::StatOrder(_) => "Choose the order of your stats, best roll first.",
            _ => "",
        };
        let header = vec![
            Line::from(Span::styled(
                "Please select your character traits from the menus below:",
                Style::default().fg(self.theme.header),
            )),
            Line::from(Span::styled(hint, Style::default().fg(self.theme.question))),
        ];
        frame.render_widget(Paragraph::new(header), outer[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14),
                Constraint::Length(16),
                Constraint::Length(18),
                Constraint::Length(20),
                Constraint::Min(30),
            ])
            .split(outer[1]);

        let active_kind = match self.flow.screen() {
            Screen::Choice(kind, _) => Some(*kind),
            _ => None,
        };

        for (slot, kind) in [
            ChoiceKind::Sex,
            ChoiceKind::Race,
            ChoiceKind::Class,
            ChoiceKind::Roller,
        ]
        .into_iter()
        .enumerate()
        {
            let title = match kind {
                ChoiceKind::Sex => "Sex",
                ChoiceKind::Race => "Race",
                ChoiceKind::Class => "Class",
                ChoiceKind::Roller => "Stat roller",
            };
            if active_kind == Some(kind) {
                if let Screen::Choice(_, model) = self.flow.screen() {
                    frame.render_widget(
                        MenuColumn::new(title, model, &self.theme),
                        columns[slot],
                    );
                }
            } else if let Some(chosen) = choices::chosen(kind, draft) {
                let model = choices::build(kind, draft);
                frame.render_widget(
                    MenuColumn::new(title, &model, &self.theme).inactive(Some(chosen)),
                    columns[slot],
                );
            }
        }

        self.render_detail_pane(frame, columns[4]);

        let keys = "arrows to move, Enter to select, '*' random, Esc to step back, \
                    '=' birth options, Ctrl-X to quit";
        frame.render_widget(
            Paragraph::new(keys).style(Style::default().fg(self.theme.text_dim)),
            outer[2],
        );
    }

    fn render_detail_pane(&self, frame: &mut Frame, area: Rect) {
        let draft = self.flow.draft();
        match self.flow.screen() {
            Screen::Choice(ChoiceKind::Race, model) => {
                if let Some(race) = data::race(model.cursor()) {
                    frame.render_widget(RaceDetail::new(race, &self.theme), area);
                }
            }
            Screen::Choice(ChoiceKind::Class, model) => {
                let offered = choices::class_choices(draft);
                if let (Some(race), Some(class)) = (draft.race, offered.get(model.cursor())) {
                    frame.render_widget(ClassDetail::new(race, class, &self.theme), area);
                }
            }
            Screen::Choice(ChoiceKind::Roller, _) => {
                let lines = vec![
                    Line::from("Point-based: distribute a fixed pool of"),
                    Line::from("points across your stats."),
                    Line::from(""),
                    Line::from("Standard roller: roll random stats and"),
                    Line::from("assign them to an order of your choice."),
                ];
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.border));
                let inner = block.inner(area);
                frame.render_widget(block, area);
                frame.render_widget(
                    Paragraph::new(lines).style(Style::default().fg(self.theme.text)),
                    inner,
                );
            }
            Screen::PointBuy(engine) => {
                if let (Some(race), Some(class)) = (draft.race, draft.class) {
                    frame.render_widget(
                        PointCostDetail::new(engine, race, class, &self.theme),
                        area,
                    );
                }
            }
            Screen::StatOrder(order) => self.render_stat_order(frame, order, area),
            _ => {}
        }
    }

    fn render_stat_order(&self, frame: &mut Frame, order: &StatOrder, area: Rect) {
        let block = Block::default()
            .title("Stat order")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        for (i, slot) in order.slots().iter().enumerate() {
            let name = slot.map_or("-", |s| s.name());
            let style = if i == order.filled() {
                Style::default().fg(self.theme.value)
            } else {
                Style::default().fg(self.theme.text)
            };
            lines.push(Line::from(Span::styled(
                format!("{}) {name}", i + 1),
                style,
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Remaining:",
            Style::default().fg(self.theme.header),
        )));
        for (letter, stat) in order.available() {
            lines.push(Line::from(Span::styled(
                format!("{letter}) {}", stat.name()),
                Style::default().fg(self.theme.text),
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_quick_ask(&self, frame: &mut Frame) {
        let area = centered_rect(50, 30, frame.area());
        frame.render_widget(Clear, area);
        let block = Block::default()
            .title("Quick-start")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let lines = vec![
            Line::from("Quick-start character based on previous one (y/n)?"),
            Line::from(""),
            Line::from(Span::styled(
                "y to reuse your previous character, n to choose anew",
                Style::default().fg(self.theme.text_dim),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().fg(self.theme.question)),
            inner,
        );
    }

    fn render_quick_confirm(&self, frame: &mut Frame) {
        let area = centered_rect(50, 30, frame.area());
        frame.render_widget(Clear, area);
        let block = Block::default()
            .title("Quick-start")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let lines = vec![
            Line::from("Reuse your previous character?"),
            Line::from(""),
            Line::from(Span::styled(
                "Any key to accept, Esc to choose anew, Ctrl-X to quit",
                Style::default().fg(self.theme.text_dim),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().fg(self.theme.question)),
            inner,
        );
    }

    fn render_final_confirm(&self, frame: &mut Frame) {
        let area = centered_rect(50, 50, frame.area());
        frame.render_widget(Clear, area);
        let block = Block::default()
            .title("Your character")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let draft = self.flow.draft();
        let mut lines = vec![Line::from(Span::styled(
            format!(
                "{} {} {}",
                draft.sex.map_or("?", |s| s.title()),
                draft.race.map_or("?", |r| r.name),
                draft.class.map_or("?", |c| c.name),
            ),
            Style::default().fg(self.theme.header),
        ))];
        if let Some(stats) = draft.stats {
            let mut row = String::new();
            for stat in Stat::ALL {
                row.push_str(&format!(
                    "{}:{} ",
                    stat.abbr(),
                    stat_display(stats[stat.index()])
                ));
            }
            lines.push(Line::from(Span::styled(
                row,
                Style::default().fg(self.theme.value),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Any key to accept, Esc to re-roll, 'S' to start over, Ctrl-X to quit",
            Style::default().fg(self.theme.text_dim),
        )));
        frame.render_widget(
            Paragraph::new(lines).style(Style::default().fg(self.theme.text)),
            inner,
        );
    }

    fn render_birth_options(&self, frame: &mut Frame) {
        let area = centered_rect(40, 30, frame.area());
        frame.render_widget(Clear, area);
        let block = Block::default()
            .title("Birth options")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let theme_label = if self.theme.is_dark() {
            "Terminal theme: dark"
        } else {
            "Terminal theme: light"
        };
        let items = [theme_label, "Back to birth"];
        let list_items: Vec<ListItem> = items
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let style = if i == self.options_cursor {
                    Style::default()
                        .fg(self.theme.cursor_fg)
                        .bg(self.theme.cursor_bg)
                } else {
                    Style::default().fg(self.theme.text)
                };
                let prefix = if i == self.options_cursor { "> " } else { "  " };
                ListItem::new(Line::from(Span::styled(format!("{prefix}{label}"), style)))
            })
            .collect();
        frame.render_widget(List::new(list_items), inner);
    }

    fn render_done(&self, frame: &mut Frame) {
        let area = centered_rect(50, 30, frame.area());
        frame.render_widget(Clear, area);
        let block = Block::default()
            .title("Character created")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        if let Some(sheet) = &self.sheet {
            lines.push(Line::from(Span::styled(
                format!(
                    "{}, {} {} {}",
                    self.name,
                    sheet.sex.title(),
                    sheet.race.name,
                    sheet.class.name
                ),
                Style::default().fg(self.theme.header),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Press any key to enter the game",
            Style::default().fg(self.theme.text_dim),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Center a percent-sized rect inside another
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
