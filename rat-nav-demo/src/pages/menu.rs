use super::ACCENT;
use crate::component::{Action, Component, Context, Event};
use crate::destinations::Destination;
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

/// Root screen listing every navigation pattern.
pub struct Menu {
    selected: usize,
    // None is the exit entry.
    options: Vec<(&'static str, &'static str, Option<Destination>)>,
}

impl Menu {
    pub fn new() -> Self {
        let mut options: Vec<_> = Destination::MENU
            .iter()
            .map(|destination| (destination.label(), destination.summary(), Some(*destination)))
            .collect();
        options.push(("Exit", "Quit application", None));

        Self { selected: 0, options }
    }

    pub fn selected(&self) -> Option<Destination> {
        self.options.get(self.selected).and_then(|(_, _, destination)| *destination)
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Menu {
    fn title(&self) -> String {
        "Playground".to_string()
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Body
                Constraint::Length(1), // Footer
            ])
            .split(cx.area);

        // Body: Menu + Info panel
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[0]);

        let items: Vec<ListItem> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, (label, desc, _))| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "▶ " } else { "  " };

                let lines = vec![
                    Line::from(vec![
                        Span::styled(
                            prefix,
                            Style::default().fg(if is_selected { ACCENT } else { Color::DarkGray }),
                        ),
                        Span::styled(
                            *label,
                            Style::default()
                                .fg(if is_selected { ACCENT } else { Color::White })
                                .add_modifier(if is_selected {
                                    Modifier::BOLD
                                } else {
                                    Modifier::empty()
                                }),
                        ),
                    ]),
                    Line::from(vec![
                        Span::raw("    "),
                        Span::styled(
                            *desc,
                            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                        ),
                    ]),
                ];
                ListItem::new(lines)
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Navigation Patterns ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT)),
        );
        frame.render_widget(list, body_chunks[0]);

        let key = self
            .selected()
            .map(|destination| destination.as_str())
            .unwrap_or("-");
        let info_lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                " Every pattern is a registered destination",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::styled(
                " Selecting an entry resolves its key",
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                " through the router, like a deep link.",
                Style::default().fg(Color::DarkGray),
            ),
            Line::from(""),
            Line::from(vec![
                Span::styled(" Key: ", Style::default().fg(Color::DarkGray)),
                Span::styled(key, Style::default().fg(ACCENT)),
            ]),
            Line::from(vec![
                Span::styled(" Try: ", Style::default().fg(Color::DarkGray)),
                Span::raw(format!("--deep-link {key}")),
            ]),
        ];

        let info = Paragraph::new(info_lines).block(
            Block::default()
                .title(" About ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(ACCENT)),
        );
        frame.render_widget(info, body_chunks[1]);

        let footer = Paragraph::new(" ↑/↓ Navigate │ Enter Select │ q Quit ")
            .style(Style::default().bg(ACCENT).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut Context) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    } else {
                        self.selected = self.options.len() - 1;
                    }
                    Some(Action::Noop)
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected < self.options.len() - 1 {
                        self.selected += 1;
                    } else {
                        self.selected = 0;
                    }
                    Some(Action::Noop)
                }
                KeyCode::Enter => match self.selected() {
                    Some(destination) => Some(Action::Navigate(destination.key())),
                    None => Some(Action::Quit),
                },
                _ => None,
            },
            _ => None,
        }
    }
}
