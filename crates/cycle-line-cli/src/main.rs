use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use cycle_line_config::Config;
use cycle_line_engine::{Command, Cursor, Editor, LineBuffer, run_command};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

struct App {
    path: PathBuf,
    buffer: LineBuffer,
    config: Config,
    config_path: PathBuf,
    status: String,
    /// Buffer version last written to disk.
    saved_version: u64,
    quit_armed: bool,
    scroll: usize,
}

impl App {
    fn new(path: PathBuf, text: &str, config: Config, config_path: PathBuf) -> Self {
        Self {
            path,
            buffer: LineBuffer::from_text(text),
            config,
            config_path,
            status: String::new(),
            saved_version: 0,
            quit_armed: false,
            scroll: 0,
        }
    }

    fn is_dirty(&self) -> bool {
        self.buffer.version() != self.saved_version
    }

    fn move_cursor(&mut self, lines: isize, cols: isize) {
        let Cursor { line, ch } = self.buffer.cursor();
        let line = line.saturating_add_signed(lines);
        self.buffer.set_cursor(Cursor {
            line,
            ch: ch + cols,
        });
    }

    fn cycle(&mut self, command: Command) {
        let auto_increment = self.config.auto_increment_ordered_list;
        match run_command(&mut self.buffer, command, auto_increment) {
            Some(outcome) => {
                self.status = format!("{}: {}", command.name(), outcome.content.trim_start());
            }
            None => self.status = "Nothing to cycle here".to_string(),
        }
    }

    fn toggle_auto_increment(&mut self) {
        let enabled = self.config.toggle_auto_increment();
        let state = if enabled { "on" } else { "off" };
        self.status = match self.config.save_to_path(&self.config_path) {
            Ok(()) => format!("Auto-increment {state}"),
            Err(e) => {
                log::warn!("Failed to save config: {e}");
                format!("Auto-increment {state} (not saved: {e})")
            }
        };
    }

    fn write(&mut self) -> Result<()> {
        std::fs::write(&self.path, self.buffer.text())?;
        self.saved_version = self.buffer.version();
        self.status = format!("Wrote {}", self.path.display());
        Ok(())
    }

    /// Returns true when the app should exit. Quitting with unsaved changes
    /// takes a second `q`.
    fn request_quit(&mut self) -> bool {
        if self.is_dirty() && !self.quit_armed {
            self.quit_armed = true;
            self.status = "Unsaved changes: w to write, q again to discard".to_string();
            return false;
        }
        true
    }

    /// Keeps the cursor line inside a viewport of `height` rows.
    fn scroll_to_cursor(&mut self, height: usize) {
        let line = self.buffer.cursor().line;
        if line < self.scroll {
            self.scroll = line;
        } else if height > 0 && line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <markdown-file>", args[0]);
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: Failed to read '{}': {e}", path.display());
            process::exit(1);
        }
    };

    let config_path = Config::config_path();
    let config = match Config::load_from_path(&config_path) {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Warning: {e}; using default settings");
            Config::default()
        }
    };
    log::info!("Auto-increment ordered lists: {}", config.auto_increment_ordered_list);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(path, &text, config, config_path);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if key.code != KeyCode::Char('q') {
                app.quit_armed = false;
            }
            match key.code {
                KeyCode::Char('q') => {
                    if app.request_quit() {
                        return Ok(());
                    }
                }
                KeyCode::Tab => app.cycle(Command::CycleForwards),
                KeyCode::BackTab => app.cycle(Command::CycleBackwards),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1, 0),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1, 0),
                KeyCode::Left | KeyCode::Char('h') => app.move_cursor(0, -1),
                KeyCode::Right | KeyCode::Char('l') => app.move_cursor(0, 1),
                KeyCode::Char('a') => app.toggle_auto_increment(),
                KeyCode::Char('w') => {
                    if let Err(e) = app.write() {
                        app.status = format!("Write failed: {e}");
                    }
                }
                _ => {}
            }
        }
    }
}

/// Display column of char offset `ch` on `line`, kept inside a pane
/// `inner_width` cells wide.
fn cursor_column(line: &str, ch: isize, inner_width: u16) -> u16 {
    let before: String = line.chars().take(ch.max(0) as usize).collect();
    let width = before.width().min(inner_width.saturating_sub(1) as usize);
    width as u16
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)].as_ref())
        .split(f.area());

    let inner_height = chunks[0].height.saturating_sub(2) as usize;
    app.scroll_to_cursor(inner_height);

    let cursor = app.buffer.cursor();
    let lines: Vec<Line> = (app.scroll..app.buffer.line_count())
        .take(inner_height)
        .map(|n| {
            let text = app.buffer.line(n).unwrap_or_default().into_owned();
            if n == cursor.line {
                Line::from(Span::styled(
                    text,
                    Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray),
                ))
            } else {
                Line::from(Span::raw(text))
            }
        })
        .collect();

    let title = format!(
        "{}{}",
        app.path.display(),
        if app.is_dirty() { " [modified]" } else { "" }
    );
    let content = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(content, chunks[0]);

    let cursor_text = app.buffer.line(cursor.line).unwrap_or_default();
    let x = chunks[0].x + 1 + cursor_column(&cursor_text, cursor.ch, chunks[0].width.saturating_sub(2));
    let y = chunks[0].y + 1 + (cursor.line - app.scroll) as u16;
    f.set_cursor_position((x, y));

    let auto = if app.config.auto_increment_ordered_list {
        "on"
    } else {
        "off"
    };
    let status = Line::from(vec![
        Span::styled(
            format!(" auto-increment: {auto} "),
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
        Span::raw(" "),
        Span::raw(app.status.clone()),
    ]);
    f.render_widget(Paragraph::new(status), chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("Tab: Cycle forwards | "),
        Span::raw("Shift+Tab: Cycle backwards | "),
        Span::raw("↑↓←→/hjkl: Move | "),
        Span::raw("a: Toggle auto-increment | w: Write"),
    ]);
    f.render_widget(Paragraph::new(help_text), chunks[2]);
}
