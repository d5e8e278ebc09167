use crate::game::{Board, Cell, GameOutcome, GameState, Player, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const HUMAN_COLOR: Color = Color::Yellow;
const COMPUTER_COLOR: Color = Color::Red;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    opponent: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, opponent, chunks[0]);
    render_board(frame, game_state, selected_column, chunks[1]);
    render_message(frame, game_state, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => HUMAN_COLOR,
        Player::Computer => COMPUTER_COLOR,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, opponent: &str, area: Rect) {
    let current_player = game_state.current_player();

    let status = match game_state.outcome() {
        Some(_) => format!("Game Over  |  vs {opponent}"),
        None if current_player == Player::Human => format!("Your turn  |  vs {opponent}"),
        None => format!("Computer is thinking...  |  vs {opponent}"),
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game_state: &GameState, selected_column: usize, area: Rect) {
    let board: &Board = game_state.board();
    let show_cursor = !game_state.is_terminal() && game_state.current_player() == Player::Human;
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if show_cursor && col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(HUMAN_COLOR)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔═════════════════════╗"));

    // Top row first
    for row in (0..ROWS).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Human => (" ● ", HUMAN_COLOR),
                Cell::Computer => (" ● ", COMPUTER_COLOR),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚═════════════════════╝"));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if show_cursor && col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(HUMAN_COLOR)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, game_state: &GameState, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let color = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => player_color(player),
        Some(GameOutcome::Draw) | None => Color::White,
    };
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit   "),
        Span::styled("●", Style::default().fg(HUMAN_COLOR)),
        Span::raw(" You  "),
        Span::styled("●", Style::default().fg(COMPUTER_COLOR)),
        Span::raw(" Computer"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
