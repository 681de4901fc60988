// ABOUTME: Content views for each wizard step
// Each view reads the wizard form and draws the widgets for that step's controls

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Wrap},
};

use super::state::{Control, OnboardingScreenState};
use crate::app::events::{RADIUS_SLIDER, SERVICE_GRID_COLUMNS};
use crate::app::state::SUPPORT_EMAIL;
use crate::components::theme::Palette;
use crate::widgets::availability_picker::render_availability;
use crate::widgets::button::{Button, ButtonVariant};
use crate::widgets::document_upload::render_document_upload;
use crate::widgets::photo_upload::render_photo_upload;
use crate::widgets::select::{label_for, render_select};
use crate::widgets::slider::render_slider;
use crate::widgets::text_input::render_input;
use crate::widgets::time_picker::display_value;
use crate::wizard::locations::{countries, us_states};
use crate::wizard::{ContactMethod, DocumentSlot, SelectField, Service, Step, TextField, WizardFormState};

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    screen: &OnboardingScreenState,
    field: TextField,
) {
    let input = screen
        .is_focused(Control::Text(field))
        .then_some(&screen.text_input);
    render_input(
        frame,
        area,
        palette,
        field.label(),
        screen.wizard.form.text(field),
        field.placeholder(),
        input,
        Control::input_kind(field),
    );
}

fn split_columns(area: Rect, count: u32) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)).collect::<Vec<_>>())
        .split(area)
}

pub fn render_business_basics(frame: &mut Frame, area: Rect, palette: &Palette, screen: &mut OnboardingScreenState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    render_text_field(frame, rows[0], palette, screen, TextField::BusinessName);

    let contact = split_columns(rows[1], 2);
    render_text_field(frame, contact[0], palette, screen, TextField::Website);
    render_text_field(frame, contact[1], palette, screen, TextField::Email);

    let place = split_columns(rows[2], 2);
    render_text_field(frame, place[0], palette, screen, TextField::Phone);
    render_text_field(frame, place[1], palette, screen, TextField::City);

    let region = split_columns(rows[3], 3);
    render_text_field(frame, region[1], palette, screen, TextField::ZipCode);

    let radius_focused = screen.is_focused(Control::Radius);
    let radius = screen.wizard.form.radius;
    let radius_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(rows[4]);
    let label = Paragraph::new(Line::from(vec![
        Span::styled("Service Radius  ", Style::default().fg(palette.text)),
        Span::styled(
            format!("{radius} miles"),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(label, radius_rows[0]);
    render_slider(frame, radius_rows[1], palette, &RADIUS_SLIDER, radius, radius_focused);

    // Selects last so an open list draws over the fields below it
    let state_focused = screen.is_focused(Control::Select(SelectField::State));
    let country_focused = screen.is_focused(Control::Select(SelectField::Country));
    render_select(
        frame,
        region[0],
        palette,
        SelectField::State.label(),
        &screen.wizard.form.state,
        &us_states(),
        &mut screen.state_select,
        state_focused,
    );
    render_select(
        frame,
        region[2],
        palette,
        SelectField::Country.label(),
        &screen.wizard.form.country,
        &countries(),
        &mut screen.country_select,
        country_focused,
    );
}

pub fn render_services(frame: &mut Frame, area: Rect, palette: &Palette, screen: &OnboardingScreenState) {
    let focused = screen.is_focused(Control::ServiceGrid);
    let form = &screen.wizard.form;
    let mut lines: Vec<Line> = Vec::new();

    for (row, chunk) in Service::all().chunks(SERVICE_GRID_COLUMNS).enumerate() {
        let mut spans = Vec::new();
        for (col, service) in chunk.iter().enumerate() {
            let index = row * SERVICE_GRID_COLUMNS + col;
            let selected = form.is_selected(*service);
            let marker = if selected { "[✓]" } else { "[ ]" };
            let mut style = if selected {
                Style::default().fg(palette.success).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            if focused && index == screen.service_cursor {
                style = style.bg(palette.panel).add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(
                format!(" {marker} {} {:<28}", service.glyph(), service.label()),
                style,
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let count = form.services.len();
    lines.push(Line::from(Span::styled(
        match count {
            0 => "Select at least one service to continue".to_string(),
            1 => "1 service selected".to_string(),
            n => format!("{n} services selected"),
        },
        Style::default().fg(if count == 0 { palette.warning } else { palette.muted }),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { palette.primary } else { palette.border }));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_availability_step(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    screen: &mut OnboardingScreenState,
) {
    let Some(service) = screen.wizard.active_service() else {
        let empty = Paragraph::new("No services selected. Go back and pick at least one service.")
            .style(Style::default().fg(palette.warning));
        frame.render_widget(empty, area);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let tabs_focused = screen.is_focused(Control::ServiceTabs);
    let titles: Vec<String> = screen
        .wizard
        .form
        .services
        .iter()
        .map(|s| format!(" {} {} ", s.glyph(), s.label()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(screen.wizard.active_service)
        .style(Style::default().fg(palette.muted))
        .highlight_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .divider(Span::styled("│", Style::default().fg(palette.border)))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if tabs_focused { palette.primary } else { palette.border })),
        );
    frame.render_widget(tabs, layout[0]);

    let schedule = screen.wizard.form.schedule_for(service);
    let grid_focused = screen.is_focused(Control::AvailabilityGrid);
    render_availability(frame, layout[1], palette, &schedule, &mut screen.availability, grid_focused);
}

pub fn render_photos(frame: &mut Frame, area: Rect, palette: &Palette, screen: &OnboardingScreenState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let missing = screen.wizard.form.missing_photos();
    let status = if missing == 0 {
        Span::styled(
            format!("{} photos added. The first photo is your cover.", screen.wizard.form.photos.len()),
            Style::default().fg(palette.success),
        )
    } else {
        Span::styled(
            format!("Add {missing} more photo{} to continue", if missing == 1 { "" } else { "s" }),
            Style::default().fg(palette.warning),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(status)), layout[0]);

    render_photo_upload(
        frame,
        layout[1],
        palette,
        &screen.wizard.form.photos,
        &screen.photos,
        screen.is_focused(Control::PhotoGallery),
    );
}

pub fn render_documents(frame: &mut Frame, area: Rect, palette: &Palette, screen: &OnboardingScreenState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);

    let hint = if screen.wizard.form.documents.required_filled() {
        Span::styled("Required documents attached", Style::default().fg(palette.success))
    } else {
        Span::styled(
            "Insurance certificate and EIN / Tax ID are required",
            Style::default().fg(palette.warning),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(hint)), layout[0]);

    render_document_upload(
        frame,
        layout[1],
        palette,
        &screen.wizard.form.documents,
        &screen.documents,
        screen.is_focused(Control::DocumentSlots),
    );
}

pub fn render_preferences(frame: &mut Frame, area: Rect, palette: &Palette, screen: &OnboardingScreenState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);
    let form = &screen.wizard.form;

    let contact_focused = screen.is_focused(Control::ContactMethod);
    let mut spans = Vec::new();
    for method in ContactMethod::all() {
        let chosen = *method == form.contact_method;
        let style = if chosen {
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        spans.push(Span::styled(
            format!(" {} {}  ", if chosen { "◉" } else { "○" }, method.label()),
            style,
        ));
    }
    let contact = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if contact_focused { palette.primary } else { palette.border }))
            .title(Span::styled(" Preferred Contact Method ", Style::default().fg(palette.text))),
    );
    frame.render_widget(contact, rows[0]);

    render_text_field(frame, rows[1], palette, screen, TextField::MaxJobs);

    let auto_focused = screen.is_focused(Control::AutoAccept);
    let checkbox = Paragraph::new(Line::from(vec![
        Span::styled(
            if form.auto_accept { " [✓] " } else { " [ ] " },
            Style::default().fg(if form.auto_accept { palette.success } else { palette.muted }),
        ),
        Span::styled("Automatically accept matching jobs", Style::default().fg(palette.text)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(if auto_focused { palette.primary } else { palette.border })),
    );
    frame.render_widget(checkbox, rows[2]);
}

fn section<'a>(palette: &Palette, title: &'a str) -> Line<'a> {
    Line::from(Span::styled(
        title,
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
    ))
}

fn entry<'a>(palette: &Palette, label: &'a str, value: String) -> Line<'a> {
    let shown = if value.is_empty() { "-".to_string() } else { value };
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(palette.muted)),
        Span::styled(shown, Style::default().fg(palette.text)),
    ])
}

/// Summary lines of the whole application, grouped by step
pub fn review_lines<'a>(palette: &Palette, form: &'a WizardFormState) -> Vec<Line<'a>> {
    let state_label = label_for(&us_states(), &form.state)
        .map(str::to_string)
        .unwrap_or_else(|| form.state.clone());
    let country_label = label_for(&countries(), &form.country)
        .map(str::to_string)
        .unwrap_or_else(|| form.country.clone());

    let mut lines = vec![
        section(palette, "Business"),
        entry(palette, "Name", form.business_name.clone()),
        entry(palette, "Website", form.website.clone()),
        entry(palette, "Email", form.email.clone()),
        entry(palette, "Phone", form.phone.clone()),
        entry(
            palette,
            "Location",
            format!("{}, {} {}, {}", form.city, state_label, form.zip_code, country_label),
        ),
        entry(palette, "Service radius", format!("{} miles", form.radius)),
        Line::from(""),
        section(palette, "Services & Availability"),
    ];

    if form.services.is_empty() {
        lines.push(entry(palette, "Services", String::new()));
    }
    for service in &form.services {
        let schedule = form.schedule_for(*service);
        let days: Vec<String> = schedule
            .days()
            .iter()
            .filter(|d| d.available)
            .map(|d| {
                format!(
                    "{} {}-{}",
                    d.day.label(),
                    display_value(&d.start),
                    display_value(&d.end)
                )
            })
            .collect();
        let summary = if days.is_empty() {
            "no available days".to_string()
        } else {
            days.join(", ")
        };
        lines.push(entry(palette, service.label(), summary));
    }

    lines.push(Line::from(""));
    lines.push(section(palette, "Photos"));
    let cover = form
        .photos
        .first()
        .map(|p| format!(", cover {}", p.file_name))
        .unwrap_or_default();
    lines.push(entry(palette, "Uploaded", format!("{}{}", form.photos.len(), cover)));

    lines.push(Line::from(""));
    lines.push(section(palette, "Documents"));
    for slot in DocumentSlot::all() {
        let value = match form.documents.get(*slot) {
            Some(name) => name.to_string(),
            None if slot.is_required() => "missing".to_string(),
            None => "not provided".to_string(),
        };
        lines.push(entry(palette, slot.review_label(), value));
    }

    lines.push(Line::from(""));
    lines.push(section(palette, "Preferences"));
    lines.push(entry(palette, "Contact method", form.contact_method.label().to_string()));
    lines.push(entry(palette, "Max jobs per day", form.max_jobs.clone()));
    lines.push(entry(
        palette,
        "Auto-accept",
        if form.auto_accept { "yes" } else { "no" }.to_string(),
    ));
    lines
}

pub fn render_review(frame: &mut Frame, area: Rect, palette: &Palette, screen: &OnboardingScreenState, tick: usize) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let summary = Paragraph::new(review_lines(palette, &screen.wizard.form))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(summary, layout[0]);

    let edit_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(22), Constraint::Min(0)])
        .split(layout[1])[0];
    Button::new("Edit Application")
        .variant(ButtonVariant::Ghost)
        .disabled(screen.wizard.submitting)
        .focused(screen.is_focused(Control::EditApplication))
        .render(frame, edit_area, palette, tick);
}

pub fn render_complete(frame: &mut Frame, area: Rect, palette: &Palette, screen: &OnboardingScreenState, tick: usize) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Application Submitted",
            Style::default().fg(palette.success).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Thanks for applying. Our team will review your application within 2-3 business days.",
            Style::default().fg(palette.text),
        )),
    ];
    if let Some(receipt) = &screen.wizard.receipt {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Reference: ", Style::default().fg(palette.muted)),
            Span::styled(receipt.reference.to_string(), Style::default().fg(palette.accent)),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        layout[0],
    );

    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(20), Constraint::Min(0)])
        .split(layout[1])[1];
    Button::new("Get in Touch")
        .variant(ButtonVariant::Secondary)
        .focused(screen.is_focused(Control::GetInTouch))
        .render(frame, button_area, palette, tick);

    let contact = Paragraph::new(Span::styled(
        format!("Questions? {SUPPORT_EMAIL}"),
        Style::default().fg(palette.muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(contact, layout[2]);
}

/// Draw the content of the current step
pub fn render_step(frame: &mut Frame, area: Rect, palette: &Palette, screen: &mut OnboardingScreenState, tick: usize) {
    match screen.step() {
        Step::BusinessBasics => render_business_basics(frame, area, palette, screen),
        Step::Services => render_services(frame, area, palette, screen),
        Step::Availability => render_availability_step(frame, area, palette, screen),
        Step::Photos => render_photos(frame, area, palette, screen),
        Step::Documents => render_documents(frame, area, palette, screen),
        Step::Preferences => render_preferences(frame, area, palette, screen),
        Step::Review => render_review(frame, area, palette, screen, tick),
        Step::Complete => render_complete(frame, area, palette, screen, tick),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::FieldUpdate;

    fn flatten(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_review_lists_missing_required_documents() {
        let form = WizardFormState::new();
        let text = flatten(&review_lines(&Palette::dark(), &form));
        assert!(text.contains("missing"));
        assert!(text.contains("not provided"));
    }

    #[test]
    fn test_review_shows_service_hours() {
        let mut form = WizardFormState::new();
        form.toggle_service(Service::Plumber);
        form.apply(FieldUpdate::State("NY".into()));
        let text = flatten(&review_lines(&Palette::dark(), &form));
        assert!(text.contains(Service::Plumber.label()));
        assert!(text.contains("09:00 AM"));
        assert!(text.contains("New York"));
    }
}
