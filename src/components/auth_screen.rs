// ABOUTME: Login and signup screen rendering
// Centered card with credential inputs, submit button and a link to the other screen

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::auth::{AuthFocus, AuthMode, AuthScreenState};
use crate::components::theme::Palette;
use crate::widgets::button::Button;
use crate::widgets::text_input::{render_input, InputKind};

const CARD_WIDTH: u16 = 56;

/// Horizontal offsets cycled while the card shakes
const SHAKE_OFFSETS: [i16; 4] = [-2, 2, -1, 1];

pub struct AuthScreenComponent;

impl AuthScreenComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        auth: &AuthScreenState,
        palette: &Palette,
        tick: usize,
        now: Instant,
    ) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(palette.background)), area);

        let shaking = auth.is_shaking(now);
        let offset = if shaking {
            SHAKE_OFFSETS[tick % SHAKE_OFFSETS.len()]
        } else {
            0
        };
        let card = card_area(area, card_height(auth.mode), offset);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if shaking { palette.error } else { palette.primary }))
            .style(Style::default().bg(palette.panel))
            .title(Span::styled(
                format!(" {} ", auth.mode.title()),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let mut constraints = vec![
            Constraint::Length(1), // Subtitle
            Constraint::Length(3), // Email
            Constraint::Length(3), // Password
        ];
        if auth.mode == AuthMode::Signup {
            constraints.push(Constraint::Length(3)); // Confirm
        }
        constraints.extend([
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Submit
            Constraint::Length(1), // Switch link
        ]);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints(constraints)
            .split(inner);

        let subtitle = match auth.mode {
            AuthMode::Login => "Welcome back. Sign in to manage your business.",
            AuthMode::Signup => "Join the network and start receiving jobs.",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(subtitle, Style::default().fg(palette.muted))).alignment(Alignment::Center),
            rows[0],
        );

        let mut row = 1;
        let mut fields = vec![
            (AuthFocus::Email, "Email", "you@business.com", InputKind::Email),
            (AuthFocus::Password, "Password", "••••••••", InputKind::Password),
        ];
        if auth.mode == AuthMode::Signup {
            fields.push((AuthFocus::Confirm, "Confirm Password", "••••••••", InputKind::Password));
        }
        for (focus, label, placeholder, kind) in fields {
            let input = (auth.focus == focus).then_some(&auth.input);
            let value = auth.field(focus).unwrap_or_default();
            render_input(frame, rows[row], palette, label, value, placeholder, input, kind);
            row += 1;
        }

        // Skip spacer
        row += 1;
        let label = if auth.loading {
            auth.mode.loading_label()
        } else {
            auth.mode.submit_label()
        };
        Button::new(label)
            .loading(auth.loading)
            .focused(auth.focus == AuthFocus::Submit)
            .render(frame, rows[row], palette, tick);
        row += 1;

        let link_style = if auth.focus == AuthFocus::SwitchLink {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.primary)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(auth.mode.switch_label(), link_style)).alignment(Alignment::Center),
            rows[row],
        );
    }
}

impl Default for AuthScreenComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn card_height(mode: AuthMode) -> u16 {
    match mode {
        AuthMode::Login => 15,
        AuthMode::Signup => 18,
    }
}

/// Centered card, shifted horizontally by `offset` and clipped to `area`
fn card_area(area: Rect, height: u16, offset: i16) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let max_x = area.x + area.width - width;
    let shifted = x.saturating_add_signed(offset).clamp(area.x, max_x);
    Rect::new(shifted, y, width, height)
}
