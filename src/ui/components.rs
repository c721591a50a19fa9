//! Panels for the terminal browser

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::schema::{Language, UiText};
use crate::view::{GroupView, MaterialTotals, ShipCard, StatusMarker};

/// Title, language and material totals
pub struct HeaderPanel<'a> {
    pub text: &'a UiText,
    pub language: Language,
    pub totals: MaterialTotals,
    pub show_incomplete_only: bool,
}

impl HeaderPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let bold = Style::default().add_modifier(Modifier::BOLD);

        let mut totals = vec![
            Span::raw("   BP "),
            Span::styled(self.totals.blueprint.to_string(), bold.fg(Color::Blue)),
            Span::raw("  │  Report "),
            Span::styled(self.totals.report.to_string(), bold.fg(Color::Yellow)),
        ];
        if self.totals.catapult > 0 {
            totals.push(Span::raw("  │  Catapult "));
            totals.push(Span::styled(
                self.totals.catapult.to_string(),
                bold.fg(Color::Magenta),
            ));
        }

        let filter = if self.show_incomplete_only {
            self.text.view_incomplete
        } else {
            self.text.view_all
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", self.text.title), bold.fg(Color::White)),
                Span::styled(
                    format!("  [{}]  [{}]", self.language.label(), filter),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(totals),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Grouped ship list with the selected card highlighted
pub struct ShipListPanel<'a> {
    pub groups: &'a [GroupView<'a>],
    pub text: &'a UiText,
    pub language: Language,
    pub selected: Option<usize>,
}

impl ShipListPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut items = Vec::new();
        let mut selected_row = None;
        let mut card_index = 0;

        for group in self.groups {
            items.push(ListItem::new(Line::from(Span::styled(
                format!(" {} ", group.group.title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ))));

            for card in &group.cards {
                if self.selected == Some(card_index) {
                    selected_row = Some(items.len());
                }
                items.push(ListItem::new(self.card_line(card)));
                card_index += 1;
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue));

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray))
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(selected_row);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn card_line(&self, card: &ShipCard<'_>) -> Line<'static> {
        let done = card.flags.remodel_done;
        let name_style = if done {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let marker_style = match card.marker() {
            StatusMarker::RemodelDone => Style::default().fg(Color::Green),
            StatusMarker::NotOwned => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            StatusMarker::LevelingDone => Style::default().fg(Color::Blue),
            StatusMarker::None => Style::default(),
        };

        let mut spans = vec![
            Span::styled(format!("{} ", card.marker().symbol()), marker_style),
            Span::styled(
                format!("{:<16}", card.ship.display_name(self.language)),
                name_style,
            ),
        ];

        if card.ship.remodel_level > 0 {
            let level_style = if card.flags.leveling_done {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(
                format!(" Lv.{:<4}", card.ship.remodel_level),
                level_style,
            ));
        } else {
            spans.push(Span::raw("        "));
        }

        let material_style = if done {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        for (material, count) in card.ship.materials.required() {
            spans.push(Span::styled(
                format!(" {}×{}", material.short_label(), count),
                material_style,
            ));
        }

        if card.flags.not_owned {
            spans.push(Span::styled(
                format!("  [{}]", self.text.not_owned),
                Style::default().fg(Color::Red),
            ));
        }
        if card.flags.leveling_done {
            spans.push(Span::styled(
                format!("  [{}]", self.text.leveling_done),
                Style::default().fg(Color::Green),
            ));
        }

        Line::from(spans)
    }
}

/// Key help, guide text and the last status message
pub struct FooterPanel<'a> {
    pub text: &'a UiText,
    pub status: &'a str,
}

impl FooterPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let keys = Style::default().fg(Color::Cyan);
        let lines = vec![
            Line::from(Span::styled(
                format!(" {}", self.text.guide),
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                Span::styled(" ↑↓", keys),
                Span::raw(" move  "),
                Span::styled("Enter", keys),
                Span::raw(format!(" {}  ", self.text.remodel_done)),
                Span::styled("o", keys),
                Span::raw(format!(" {}  ", self.text.not_owned)),
                Span::styled("l", keys),
                Span::raw(format!(" {}  ", self.text.leveling_done)),
                Span::styled("f", keys),
                Span::raw(" filter  "),
                Span::styled("g", keys),
                Span::raw(" lang  "),
                Span::styled("e", keys),
                Span::raw(" export  "),
                Span::styled("q", keys),
                Span::raw(" quit"),
            ]),
            Line::from(Span::styled(
                format!(" {}", self.status),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                format!(" {}", self.text.disclaimer),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.text.server_notice))
            .border_style(Style::default().fg(Color::Blue));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
