//! Terminal rendering - draws a `RenderState` snapshot with ratatui

use ratatui::{prelude::*, widgets::*};

use crate::app::book_form::FormMessage;
use crate::app::book_list::ListStatus;
use crate::constants::{APP_NAME, APP_VERSION, EMPTY_LIST_MESSAGE, LOADING_MESSAGE};
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{Book, FormField};

/// Width of the label column in the form, in characters
const LABEL_WIDTH: usize = 19;
/// Width of the focus marker in front of each form row
const MARKER_WIDTH: usize = 2;

/// Screen regions: heading, list, form, status bar
struct ScreenLayout {
    heading: Rect,
    list: Rect,
    form: Rect,
    status: Rect,
}

fn screen_layout(area: Rect) -> ScreenLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    ScreenLayout {
        heading: main_chunks[0],
        list: content[0],
        form: content[1],
        status: main_chunks[2],
    }
}

/// Text area of the book list panel (inside its borders) for a terminal of size `area`
pub fn list_viewport(area: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .inner(screen_layout(area).list)
}

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();
    let layout = screen_layout(area);

    draw_heading(f, state, layout.heading);
    draw_book_list(f, state, layout.list);
    draw_form(f, state, layout.form);
    draw_status_bar(f, state, layout.status);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_heading(f: &mut Frame, state: &RenderState, area: Rect) {
    let heading = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::styled(
            format!(" v{}  {}", APP_VERSION, state.api_url),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(heading), area);
}

fn border_style(focused: bool, editing: bool) -> Style {
    if focused && editing {
        Style::default().fg(Color::Yellow)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_book_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Books;

    let mut title = String::from(" Livros da Biblioteca ");
    if let ListStatus::Loaded(books) = &state.list_status {
        title = format!(" Livros da Biblioteca ({}) ", books.len());
    }
    let updated = state
        .loaded_at
        .as_ref()
        .map(|t| format!(" atualizado às {} ", t))
        .unwrap_or_default();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused, false))
        .title(title)
        .title_bottom(Line::from(updated).right_aligned());

    let list = Paragraph::new(book_list_lines(&state.list_status))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.list_scroll, 0));
    f.render_widget(list, area);
}

/// Rendered height of the list content once wrapped to `width` columns
pub fn book_list_height(status: &ListStatus, width: u16) -> usize {
    Paragraph::new(book_list_lines(status))
        .wrap(Wrap { trim: false })
        .line_count(width)
}

/// Lines for the list panel. Loading, error, empty and loaded are exclusive.
pub fn book_list_lines(status: &ListStatus) -> Vec<Line<'static>> {
    match status {
        ListStatus::Loading => vec![Line::from(Span::styled(
            LOADING_MESSAGE,
            Style::default().fg(Color::Yellow),
        ))],
        ListStatus::Failed(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        ))],
        ListStatus::Loaded(books) if books.is_empty() => vec![Line::from(Span::styled(
            EMPTY_LIST_MESSAGE,
            Style::default().fg(Color::DarkGray),
        ))],
        ListStatus::Loaded(books) => books.iter().flat_map(book_lines).collect(),
    }
}

fn book_lines(book: &Book) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Cyan);
    vec![
        Line::from(vec![
            Span::styled(book.titulo.clone(), Style::default().bold()),
            Span::raw(format!(" (Ano: {})", book.year_display())),
        ]),
        Line::from(vec![
            Span::styled("  Autor: ", label),
            Span::raw(book.author_display().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Editora: ", label),
            Span::raw(book.publisher_display().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Tipo: ", label),
            Span::raw(book.type_display().to_string()),
        ]),
        Line::default(),
    ]
}

fn draw_form(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_focused = state.active_panel == Panel::Form;
    let editing = is_focused && state.input_mode == InputMode::Editing;

    let title = if state.is_submitting {
        " Cadastro de Livro [...] "
    } else {
        " Cadastro de Livro "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_focused, editing))
        .title(title);

    let form = Paragraph::new(form_lines(state, is_focused)).block(block);
    f.render_widget(form, area);

    if editing {
        let row = FormField::ALL
            .iter()
            .position(|field| *field == state.active_field)
            .unwrap_or(0) as u16;
        let value = state.form_value(state.active_field);
        let typed = value
            .get(..state.cursor_position)
            .map(|s| s.chars().count())
            .unwrap_or(0);
        let max_x = area.x + area.width.saturating_sub(2);
        let cursor_x = (area.x + 1 + (MARKER_WIDTH + LABEL_WIDTH + typed) as u16).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1 + row));
    }
}

/// Lines for the form panel: one row per field, the submit hint, then the message
pub fn form_lines(state: &RenderState, is_focused: bool) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = FormField::ALL
        .iter()
        .map(|field| {
            let selected = is_focused && *field == state.active_field;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(
                    format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH),
                    style,
                ),
                Span::raw(state.form_value(*field).to_string()),
            ])
        })
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        if state.is_submitting {
            "  Cadastrando..."
        } else {
            "  [s] Cadastrar"
        },
        Style::default().fg(Color::DarkGray),
    )));

    if let Some(message) = &state.form_message {
        let color = match message {
            FormMessage::Success(_) => Color::Green,
            FormMessage::Error(_) => Color::Red,
        };
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            message.text().to_string(),
            Style::default().fg(color),
        )));
    }

    lines
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = if state.input_mode == InputMode::Editing {
        " ESC:parar edição | Tab:próximo campo | Enter:cadastrar "
    } else {
        match state.active_panel {
            Panel::Books => " Tab:painel | ↑/↓:rolar | r:recarregar | ?:ajuda | q:sair ",
            Panel::Form => " Tab:painel | ↑/↓:campo | e:editar | s:cadastrar | ?:ajuda | q:sair ",
        }
    };

    let activity = match (&state.list_status, state.is_submitting) {
        (_, true) => " Cadastrando... ",
        (ListStatus::Loading, false) => " Carregando... ",
        _ => "",
    };

    let timing = state
        .last_time_ms
        .map(|ms| format!("{}ms ", ms))
        .unwrap_or_default();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(activity.chars().count() as u16),
            Constraint::Min(0),
            Constraint::Length(timing.chars().count() as u16),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(activity).style(Style::default().fg(Color::Black).bg(Color::Yellow)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
    f.render_widget(
        Paragraph::new(timing).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 BIBLIOTECA - Atalhos

 GERAL
   Tab / Shift+Tab    Alternar painel
   ?                  Mostrar/ocultar ajuda
   q / Ctrl+C         Sair

 LIVROS
   ↑ / ↓              Rolar a lista
   r                  Recarregar a lista

 CADASTRO
   ↑ / ↓              Selecionar campo
   e / Enter          Editar campo
   s                  Cadastrar livro

 EDIÇÃO
   Tab / ↓            Próximo campo
   Enter              Cadastrar
   Esc                Parar edição

 Pressione qualquer tecla para fechar...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Ajuda ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

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

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    fn dune() -> Book {
        Book {
            id: 1,
            titulo: "Dune".into(),
            ano_publicacao: Some(1965),
            autor_nome: Some("Frank Herbert".into()),
            editora_nome: Some("Ace".into()),
            tipo_nome: Some("Ficção".into()),
        }
    }

    fn screen(state: &RenderState) -> Vec<String> {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_loading_shows_only_indicator() {
        let lines = texts(&book_list_lines(&ListStatus::Loading));
        assert_eq!(lines, vec!["Carregando livros..."]);
    }

    #[test]
    fn test_error_shows_only_message() {
        let lines = texts(&book_list_lines(&ListStatus::Failed(
            "Erro ao carregar livros".into(),
        )));
        assert_eq!(lines, vec!["Erro ao carregar livros"]);
    }

    #[test]
    fn test_empty_list_message() {
        let lines = texts(&book_list_lines(&ListStatus::Loaded(vec![])));
        assert_eq!(lines, vec!["Nenhum livro encontrado."]);
    }

    #[test]
    fn test_dune_entry() {
        let lines = texts(&book_list_lines(&ListStatus::Loaded(vec![dune()])));
        assert_eq!(
            lines,
            vec![
                "Dune (Ano: 1965)",
                "  Autor: Frank Herbert",
                "  Editora: Ace",
                "  Tipo: Ficção",
                "",
            ]
        );
    }

    #[test]
    fn test_one_entry_per_book_in_order() {
        let mut second = dune();
        second.id = 2;
        second.titulo = "Neuromancer".into();
        let lines = texts(&book_list_lines(&ListStatus::Loaded(vec![dune(), second])));
        let titles: Vec<&String> = lines.iter().filter(|l| l.contains("(Ano:")).collect();
        assert_eq!(titles, vec!["Dune (Ano: 1965)", "Neuromancer (Ano: 1965)"]);
    }

    #[test]
    fn test_form_rows_and_message() {
        let mut state = RenderState::default();
        state.form_values[0] = "Foo".into();
        state.form_message = Some(FormMessage::Success(
            "Livro \"Foo\" cadastrado com sucesso!".into(),
        ));
        let lines = texts(&form_lines(&state, true));
        assert_eq!(lines[0], "> Título:            Foo");
        assert_eq!(lines[1], "  Ano de Publicação: ");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("Livro \"Foo\" cadastrado com sucesso!")
        );
    }

    #[test]
    fn test_full_screen_render() {
        let mut state = RenderState::default();
        state.list_status = ListStatus::Loaded(vec![dune()]);
        state.loaded_at = Some("10:00:00".into());
        let rows = screen(&state);

        let joined = rows.join("\n");
        for expected in ["Dune", "1965", "Frank Herbert", "Ace", "Ficção", "Cadastro de Livro"] {
            assert!(joined.contains(expected), "missing {expected:?} in\n{joined}");
        }
        assert!(!joined.contains(LOADING_MESSAGE));
        assert!(!joined.contains(EMPTY_LIST_MESSAGE));
    }

    #[test]
    fn test_error_render_hides_list() {
        let mut state = RenderState::default();
        state.list_status = ListStatus::Failed("Erro ao carregar livros".into());
        let joined = screen(&state).join("\n");
        assert!(joined.contains("Erro ao carregar livros"));
        assert!(!joined.contains(EMPTY_LIST_MESSAGE));
        assert!(!joined.contains("(Ano:"));
    }

    #[test]
    fn test_status_bar_shows_activity() {
        let rows = screen(&RenderState::default());
        assert!(rows.last().unwrap().contains("Carregando..."));

        let state = RenderState {
            list_status: ListStatus::Loaded(vec![dune()]),
            is_submitting: true,
            ..RenderState::default()
        };
        let rows = screen(&state);
        assert!(rows.last().unwrap().contains("Cadastrando..."));

        let idle = RenderState {
            list_status: ListStatus::Loaded(vec![dune()]),
            ..RenderState::default()
        };
        let rows = screen(&idle);
        let status = rows.last().unwrap();
        assert!(!status.contains("Carregando...") && !status.contains("Cadastrando..."));
    }

    #[test]
    fn test_wrapped_titles_grow_list_height() {
        let mut long = dune();
        long.titulo = "Memorias Postumas de Bras Cubas volume numero um".into();
        let status = ListStatus::Loaded(vec![long]);
        assert_eq!(book_list_height(&status, 200), 5);
        assert!(book_list_height(&status, 30) > 5);
    }

    #[test]
    fn test_last_long_title_reachable_by_scrolling() {
        use crate::app::BookListView;

        let books: Vec<Book> = (1..=40)
            .map(|n| Book {
                id: n,
                titulo: format!("Memorias Postumas de Bras Cubas volume numero {n:02}"),
                ano_publicacao: Some(1881),
                autor_nome: Some("Machado de Assis".into()),
                editora_nome: Some(format!("Editora {n:02}")),
                tipo_nome: Some("Romance".into()),
            })
            .collect();

        let area = Rect::new(0, 0, 80, 24);
        let viewport = list_viewport(area);
        let mut list = BookListView::new();
        list.refresh(1);
        list.handle_loaded(1, books);
        list.set_viewport(viewport.width, viewport.height);
        for _ in 0..10_000 {
            list.scroll_down();
        }

        let state = RenderState {
            list_status: list.status.clone(),
            list_scroll: list.scroll,
            ..RenderState::default()
        };
        let backend = TestBackend::new(area.width, area.height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, &state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let joined: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(joined.contains("Editora 40"), "last book unreachable:\n{joined}");
        assert!(!joined.contains("Editora 01"));
    }

    #[test]
    fn test_help_popup_renders() {
        let state = RenderState {
            show_help: true,
            ..RenderState::default()
        };
        let joined = screen(&state).join("\n");
        assert!(joined.contains("Atalhos"));
    }
}
