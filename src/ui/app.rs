use crate::billing::{calculate_breakdown, CostBreakdown, PricingTable};
use crate::core::{is_valid_input, parse_input, INVALID_INPUT_MESSAGE};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Logs,
    Users,
}

/// Interactive calculator form state
struct App {
    logs: String,
    users: String,
    focus: Field,
    costs: CostBreakdown,
    has_result: bool,
}

impl App {
    fn new() -> Self {
        Self {
            logs: String::new(),
            users: String::new(),
            focus: Field::Logs,
            costs: CostBreakdown::default(),
            has_result: false,
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Logs => &mut self.logs,
            Field::Users => &mut self.users,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Logs => Field::Users,
            Field::Users => Field::Logs,
        };
    }

    fn is_valid(&self) -> bool {
        is_valid_input(&self.logs) && is_valid_input(&self.users)
    }

    /// Run the calculation if both fields pass validation
    fn calculate(&mut self, table: &PricingTable, user_price: f64) {
        let (Ok(log_count), Ok(user_count)) = (parse_input(&self.logs), parse_input(&self.users))
        else {
            return;
        };
        self.costs = calculate_breakdown(log_count, user_count, table, user_price);
        self.has_result = true;
    }
}

/// Run the full-screen calculator until the user quits with Esc
pub fn run_calculator(
    table: &PricingTable,
    user_price: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_event_loop(&mut terminal, table, user_price);

    // Restore terminal state even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    table: &PricingTable,
    user_price: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new();

    loop {
        terminal.draw(|f| render(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(())
                }
                KeyCode::Tab | KeyCode::Up | KeyCode::Down => app.toggle_focus(),
                KeyCode::Enter => {
                    if app.is_valid() {
                        app.calculate(table, user_price);
                    }
                }
                KeyCode::Backspace => {
                    app.focused_field_mut().pop();
                }
                KeyCode::Char(c) => {
                    app.focused_field_mut().push(c);
                }
                _ => {}
            }
        }
    }
}

fn render(f: &mut Frame, app: &App) {
    let area = centered_form(60, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Logs input
            Constraint::Length(1), // Logs error
            Constraint::Length(3), // Users input
            Constraint::Length(1), // Users error
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Results
            Constraint::Length(2), // Help
        ])
        .split(area);

    let title = Paragraph::new("Monthly Cost Calculator")
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    render_input(
        f,
        chunks[1],
        chunks[2],
        "Monthly Log Events",
        &app.logs,
        app.focus == Field::Logs,
    );
    render_input(
        f,
        chunks[3],
        chunks[4],
        "Number of Users",
        &app.users,
        app.focus == Field::Users,
    );

    render_results(f, chunks[6], app);

    let help_text = if app.is_valid() {
        "Enter: Calculate  Tab: Switch field  Esc: Quit"
    } else {
        "Fix invalid input to calculate  Tab: Switch field  Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, chunks[7]);
}

fn render_input(
    f: &mut Frame,
    input_area: Rect,
    error_area: Rect,
    label: &str,
    value: &str,
    focused: bool,
) {
    let valid = is_valid_input(value);

    let border_style = if !valid {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display = if focused {
        format!("{}█", value)
    } else {
        value.to_string()
    };

    let input = Paragraph::new(display).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label)
            .border_style(border_style),
    );
    f.render_widget(input, input_area);

    if !valid {
        let error =
            Paragraph::new(INVALID_INPUT_MESSAGE).style(Style::default().fg(Color::Red));
        f.render_widget(error, error_area);
    }
}

fn render_results(f: &mut Frame, area: Rect, app: &App) {
    let lines = if app.has_result {
        vec![
            Line::from(format!("Log Cost: ${:.2}", app.costs.log_cost)),
            Line::from(format!("User Cost: ${:.2}", app.costs.user_cost)),
            Line::from(Span::styled(
                format!("Total Monthly Cost: ${:.2}", app.costs.total_cost),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ]
    } else {
        vec![Line::from(Span::styled(
            "Enter quantities and press Enter",
            Style::default().fg(Color::DarkGray),
        ))]
    };

    let results = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    f.render_widget(results, area);
}

/// Helper function to create a centered column for the form
fn centered_form(percent_x: u16, r: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(r)[1]
}
