use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::routes::Route;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::form::{FormField, FormMode, FormState};
use crate::ui::layout::{body_rect, card_rect, footer_rect};
use crate::ui::theme::{
    ACCENT, BANNER_ERROR, FIELD_ERROR, GLOBAL_BORDER, MUTED, STATUS_OK, TEXT,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let body = body_rect(area);

    match app.route() {
        Route::Dashboard => draw_dashboard(frame, app, body),
        Route::Login | Route::Register => draw_form(frame, app, body),
    }

    let footer_area = footer_rect(area);
    frame.render_widget(Footer::new().widget(footer_area), footer_area);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let form = app.form();
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(tabs_line(form.mode));
    lines.push(Line::default());

    if let Some(message) = &form.submission_error {
        lines.push(Line::from(Span::styled(
            format!(" ✗ {}", message),
            Style::default().fg(BANNER_ERROR),
        )));
        lines.push(Line::default());
    }

    for field in form.mode.fields() {
        push_field_lines(&mut lines, form, *field);
    }

    lines.push(submit_line(form));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{:─^1$}", " OR ", 44),
        Style::default().fg(MUTED),
    )));
    lines.push(Line::from(vec![
        Span::styled(" Continue with Google: ", Style::default().fg(TEXT)),
        Span::styled(app.oauth_url(), Style::default().fg(MUTED)),
    ]));

    // Lines plus top/bottom border.
    let height = lines.len() as u16 + 2;
    let card = card_rect(body, height);
    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" authgate ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        card,
    );
}

fn tabs_line(mode: FormMode) -> Line<'static> {
    let active = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(MUTED);
    let (login_style, register_style) = match mode {
        FormMode::Login => (active, inactive),
        FormMode::Register => (inactive, active),
    };

    Line::from(vec![
        Span::raw(" "),
        Span::styled("Login", login_style),
        Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
        Span::styled("Register", register_style),
    ])
}

fn push_field_lines(lines: &mut Vec<Line<'static>>, form: &FormState, field: FormField) {
    let focused = form.focused == field;
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT)
    };
    let marker = if focused { "› " } else { "  " };
    lines.push(Line::from(Span::styled(
        format!("{}{}", marker, field.label()),
        label_style,
    )));

    let mut value = match field {
        FormField::Password => "•".repeat(form.password.chars().count()),
        _ => form.field(field).to_string(),
    };
    if focused && !form.is_loading {
        value.push('▏');
    }
    lines.push(Line::from(Span::styled(
        format!("  {}", value),
        Style::default().fg(TEXT),
    )));

    if let Some(message) = form.validation_errors.get(field) {
        lines.push(Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(FIELD_ERROR),
        )));
    }
    lines.push(Line::default());
}

fn submit_line(form: &FormState) -> Line<'static> {
    if form.is_loading {
        Line::from(Span::styled(
            " Please wait...",
            Style::default().fg(MUTED).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            format!(" [ Enter ] {}", form.mode.label()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    }
}

fn draw_dashboard(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let token = app
        .session_token()
        .map(|token| token.as_str().to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled(
            " ✓ Signed in",
            Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(" Bearer token: ", Style::default().fg(TEXT)),
            Span::styled(token, Style::default().fg(MUTED)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            " Press q to quit",
            Style::default().fg(MUTED),
        )),
    ];

    let height = lines.len() as u16 + 2;
    let card = card_rect(body, height);
    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(" authgate ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        card,
    );
}
