// ABOUTME: Main layout component: routes to the active screen, draws the status bar and notifications

use std::time::Instant;

use ratatui::{
    prelude::*,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{AuthScreenComponent, OnboardingComponent};
use crate::app::events::key_hints;
use crate::app::router::Route;
use crate::app::state::NotificationType;
use crate::app::AppState;
use crate::components::theme::Palette;

pub struct LayoutComponent {
    auth_screen: AuthScreenComponent,
    onboarding: OnboardingComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            auth_screen: AuthScreenComponent::new(),
            onboarding: OnboardingComponent::new(),
        }
    }

    pub fn render(&mut self, frame: &mut Frame, state: &mut AppState) {
        let palette = state.theme.palette();
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Active screen
                Constraint::Length(1), // Status bar
            ])
            .split(frame.size());

        let tick = state.tick_count;
        match state.route {
            Route::Login | Route::Signup => {
                if let Some(auth) = state.active_auth() {
                    self.auth_screen
                        .render(frame, main_layout[0], auth, &palette, tick, Instant::now());
                }
            }
            Route::Onboarding => {
                self.onboarding
                    .render(frame, main_layout[0], &mut state.onboarding, &palette, tick);
            }
        }

        self.render_status_bar(frame, main_layout[1], state, &palette);
        self.render_notifications(frame, frame.size(), state, &palette);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let hints = match state.route {
            Route::Onboarding => key_hints(&state.onboarding),
            Route::Login | Route::Signup => "Tab next field · Enter submit",
        };
        let account = state
            .session
            .as_ref()
            .map(|s| s.email.as_str())
            .unwrap_or("not signed in");

        let separator = Span::styled(" │ ", Style::default().fg(palette.border));
        let spans = vec![
            Span::styled(" Genie Vendor ", Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)),
            separator.clone(),
            Span::styled(state.route.path(), Style::default().fg(palette.primary)),
            separator.clone(),
            Span::styled(account, Style::default().fg(palette.text)),
            separator.clone(),
            Span::styled(hints, Style::default().fg(palette.muted)),
            separator,
            Span::styled("^T", Style::default().fg(palette.accent)),
            Span::styled(" theme ", Style::default().fg(palette.muted)),
            Span::styled("^Q", Style::default().fg(palette.accent)),
            Span::styled(" quit", Style::default().fg(palette.muted)),
        ];
        let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(palette.panel));
        frame.render_widget(bar, area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect, state: &AppState, palette: &Palette) {
        let notifications: Vec<_> = state.notifications.iter().filter(|n| !n.is_expired()).collect();
        if notifications.is_empty() {
            return;
        }

        // Position notifications in the top-right corner
        let notification_width = 50.min(area.width);
        let notification_height = notifications.len() as u16 * 3; // 3 lines per notification

        let notification_area = Rect {
            x: area.width.saturating_sub(notification_width + 2),
            y: 1,
            width: notification_width,
            height: notification_height.min(area.height.saturating_sub(2)),
        };

        for (i, notification) in notifications.iter().enumerate() {
            let y_offset = i as u16 * 3;
            if y_offset >= notification_area.height {
                break;
            }

            let single_notification_area = Rect {
                x: notification_area.x,
                y: notification_area.y + y_offset,
                width: notification_area.width,
                height: 3.min(notification_area.height - y_offset),
            };

            let (icon, color) = match notification.notification_type {
                NotificationType::Success => ("✓ ", palette.success),
                NotificationType::Error => ("✗ ", palette.error),
                NotificationType::Warning => ("⚠ ", palette.warning),
                NotificationType::Info => ("ℹ ", palette.primary),
            };

            let notification_line = Line::from(vec![
                Span::styled(icon, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(notification.message.as_str(), Style::default().fg(color)),
            ]);

            let notification_widget = Paragraph::new(notification_line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(color))
                        .style(Style::default().bg(palette.panel)),
                )
                .wrap(ratatui::widgets::Wrap { trim: true });

            frame.render_widget(notification_widget, single_notification_area);
        }
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}
