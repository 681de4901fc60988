// ABOUTME: Main onboarding wizard component
// Header with step counter and progress, step content, navigation buttons and file prompts

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use super::state::{Control, OnboardingScreenState};
use super::steps::render_step;
use crate::components::theme::Palette;
use crate::widgets::button::{Button, ButtonVariant};
use crate::widgets::file_prompt::render_file_prompt;
use crate::wizard::{Step, WizardState};

/// The main onboarding wizard component
pub struct OnboardingComponent;

impl OnboardingComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        screen: &mut OnboardingScreenState,
        palette: &Palette,
        tick: usize,
    ) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(palette.background)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with progress
                Constraint::Min(10),   // Step content
                Constraint::Length(3), // Navigation buttons
            ])
            .split(area);

        self.render_header(frame, layout[0], &screen.wizard, palette);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .horizontal_margin(2)
            .constraints([Constraint::Min(0)])
            .split(layout[1])[0];
        render_step(frame, content, palette, screen, tick);

        if screen.step() != Step::Complete {
            self.render_navigation(frame, layout[2], screen, palette, tick);
        }

        // Prompts are modal and centered on the whole screen
        render_file_prompt(frame, palette, "Add Photo", &mut screen.photos.prompt);
        let slot = screen.documents.selected_slot();
        render_file_prompt(frame, palette, slot.label(), &mut screen.documents.prompt);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, wizard: &WizardState, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.primary))
            .style(Style::default().bg(palette.panel));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Step counter
                Constraint::Length(1), // Title
                Constraint::Length(1), // Description
                Constraint::Length(1), // Progress
            ])
            .split(inner);

        let step = wizard.step;
        let counter = if step.is_terminal() {
            "COMPLETE".to_string()
        } else {
            format!("STEP {} / {}", step.number(), Step::total())
        };
        frame.render_widget(
            Paragraph::new(Span::styled(counter, Style::default().fg(palette.muted))).alignment(Alignment::Center),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                step.title(),
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(step.description(), Style::default().fg(palette.text)))
                .alignment(Alignment::Center),
            rows[2],
        );

        let progress = Gauge::default()
            .gauge_style(Style::default().fg(palette.primary).bg(palette.background))
            .ratio(progress_ratio(step))
            .label("");
        frame.render_widget(progress, rows[3]);
    }

    fn render_navigation(
        &self,
        frame: &mut Frame,
        area: Rect,
        screen: &OnboardingScreenState,
        palette: &Palette,
        tick: usize,
    ) {
        let wizard = &screen.wizard;
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .horizontal_margin(2)
            .constraints([Constraint::Length(12), Constraint::Min(0), Constraint::Length(28)])
            .split(area);

        if wizard.can_retreat() {
            Button::new("Back")
                .variant(ButtonVariant::Secondary)
                .disabled(wizard.submitting)
                .focused(screen.is_focused(Control::Back))
                .render(frame, columns[0], palette, tick);
        }

        let (label, enabled) = if wizard.step == Step::Review {
            let label = if wizard.submitting {
                "Submitting..."
            } else {
                wizard.step.next_label()
            };
            (label, wizard.can_submit() || wizard.submitting)
        } else {
            (wizard.step.next_label(), wizard.can_advance())
        };
        Button::new(label)
            .disabled(!enabled)
            .loading(wizard.submitting)
            .focused(screen.is_focused(Control::Next))
            .render(frame, columns[2], palette, tick);

        let hint = Paragraph::new(Line::from(vec![
            Span::styled("PgUp", Style::default().fg(palette.accent)),
            Span::styled(" back  ", Style::default().fg(palette.muted)),
            Span::styled("PgDn", Style::default().fg(palette.accent)),
            Span::styled(" next", Style::default().fg(palette.muted)),
        ]))
        .alignment(Alignment::Center);
        let hint_row = Rect {
            y: columns[1].y + columns[1].height / 2,
            height: 1.min(columns[1].height),
            ..columns[1]
        };
        frame.render_widget(hint, hint_row);
    }
}

/// Share of the progress bar filled on `step`
pub fn progress_ratio(step: Step) -> f64 {
    let total = f64::from(Step::total());
    (f64::from(step.number()) / total).min(1.0)
}

impl Default for OnboardingComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_progress_ratio() {
        assert!((progress_ratio(Step::BusinessBasics) - 1.0 / 7.0).abs() < f64::EPSILON);
        assert_eq!(progress_ratio(Step::Review), 1.0);
        assert_eq!(progress_ratio(Step::Complete), 1.0);
    }

    #[test]
    fn test_renders_step_counter_and_title() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut screen = OnboardingScreenState::new();
        let component = OnboardingComponent::new();
        terminal
            .draw(|frame| {
                let area = frame.size();
                component.render(frame, area, &mut screen, &Palette::dark(), 0);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("STEP 1 / 7"));
        assert!(text.contains("Business Basics"));
        assert!(text.contains("Continue to Services"));
    }
}
