//! Directory browser used as the wizard's picker
//!
//! Runs as its own full-screen loop. The wizard hands the terminal over while
//! it is open and redraws from scratch afterwards.

use std::io::{self, stdout, Stdout};
use std::path::{Path, PathBuf};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::wizard::DirectoryPicker;

/// Label of the entry that picks the directory being shown
const USE_THIS_DIRECTORY: &str = "[ use this directory ]";

/// [`DirectoryPicker`] backed by the full-screen browser
#[derive(Debug, Default, Clone, Copy)]
pub struct TuiDirectoryPicker;

impl DirectoryPicker for TuiDirectoryPicker {
    fn pick_directory(&mut self, initial: &Path) -> io::Result<Option<PathBuf>> {
        super::wizard::teardown_terminal();
        let result = run_directory_selector(initial);
        super::wizard::restore_terminal()?;
        result
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum EntryKind {
    Current,
    Parent,
    Child,
}

#[derive(Debug, Clone)]
struct DirEntry {
    name: String,
    path: PathBuf,
    kind: EntryKind,
}

/// What Enter on the highlighted entry does
#[derive(Debug, PartialEq, Eq)]
enum Activation {
    Choose(PathBuf),
    Open(PathBuf),
    Nothing,
}

struct DirectorySelectorState {
    current_dir: PathBuf,
    entries: Vec<DirEntry>,
    selected: usize,
    search: String,
    filtered: Vec<usize>,
}

impl DirectorySelectorState {
    fn new(start_dir: PathBuf) -> Self {
        let entries = list_directories(&start_dir);
        let filtered: Vec<usize> = (0..entries.len()).collect();
        Self {
            current_dir: start_dir,
            entries,
            selected: 0,
            search: String::new(),
            filtered,
        }
    }

    fn refresh(&mut self) {
        self.entries = list_directories(&self.current_dir);
        self.search.clear();
        self.filtered = (0..self.entries.len()).collect();
        self.selected = 0;
    }

    fn navigate_to(&mut self, path: PathBuf) {
        self.current_dir = path;
        self.refresh();
    }

    fn update_filter(&mut self) {
        let search_lower = self.search.to_lowercase();
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| {
                entry.kind != EntryKind::Child || entry.name.to_lowercase().contains(&search_lower)
            })
            .map(|(i, _)| i)
            .collect();
        self.selected = 0;
    }

    fn activate(&self) -> Activation {
        let Some(&idx) = self.filtered.get(self.selected) else {
            return Activation::Nothing;
        };
        let entry = &self.entries[idx];
        match entry.kind {
            EntryKind::Current => Activation::Choose(entry.path.clone()),
            EntryKind::Parent | EntryKind::Child => Activation::Open(entry.path.clone()),
        }
    }
}

/// Run the interactive directory browser starting at `initial`
pub fn run_directory_selector(initial: &Path) -> io::Result<Option<PathBuf>> {
    let start_dir = if initial.is_dir() {
        initial.to_path_buf()
    } else {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    };

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = run_directory_selector_loop(&mut terminal, start_dir);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run_directory_selector_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    start_dir: PathBuf,
) -> io::Result<Option<PathBuf>> {
    let mut state = DirectorySelectorState::new(start_dir);

    loop {
        terminal.draw(|frame| draw_directory_selector(frame, &state))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Enter => match state.activate() {
                    Activation::Choose(path) => return Ok(Some(path)),
                    Activation::Open(path) => state.navigate_to(path),
                    Activation::Nothing => {}
                },
                KeyCode::Tab => return Ok(Some(state.current_dir.clone())),
                KeyCode::Backspace => {
                    if state.search.is_empty() {
                        if let Some(parent) = state.current_dir.parent() {
                            state.navigate_to(parent.to_path_buf());
                        }
                    } else {
                        state.search.pop();
                        state.update_filter();
                    }
                }
                KeyCode::Esc => {
                    if state.search.is_empty() {
                        return Ok(None);
                    }
                    state.search.clear();
                    state.update_filter();
                }
                KeyCode::Up => {
                    state.selected = state.selected.saturating_sub(1);
                }
                KeyCode::Down => {
                    if state.selected + 1 < state.filtered.len() {
                        state.selected += 1;
                    }
                }
                KeyCode::PageUp => {
                    state.selected = state.selected.saturating_sub(10);
                }
                KeyCode::PageDown => {
                    state.selected =
                        (state.selected + 10).min(state.filtered.len().saturating_sub(1));
                }
                KeyCode::Home => state.selected = 0,
                KeyCode::End => state.selected = state.filtered.len().saturating_sub(1),
                KeyCode::Char(c) if !c.is_control() => {
                    state.search.push(c);
                    state.update_filter();
                }
                _ => {}
            }
        }
    }
}

/// List subdirectories of `path`, after the "use this" and parent entries
fn list_directories(path: &Path) -> Vec<DirEntry> {
    let mut entries = vec![DirEntry {
        name: USE_THIS_DIRECTORY.to_string(),
        path: path.to_path_buf(),
        kind: EntryKind::Current,
    }];

    if let Some(parent) = path.parent() {
        if parent != path {
            entries.push(DirEntry {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                kind: EntryKind::Parent,
            });
        }
    }

    let mut children: Vec<DirEntry> = std::fs::read_dir(path)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .map(|entry| DirEntry {
                    name: entry.file_name().to_string_lossy().to_string(),
                    path: entry.path(),
                    kind: EntryKind::Child,
                })
                .collect()
        })
        .unwrap_or_default();

    children.sort_by_key(|entry| entry.name.to_lowercase());
    entries.extend(children);
    entries
}

/// Truncate a path string from the start to fit within max_len characters
fn truncate_path_start(path: &str, max_len: usize) -> String {
    let count = path.chars().count();
    if count <= max_len {
        return path.to_string();
    }
    if max_len <= 3 {
        return "...".to_string();
    }
    let tail: String = path.chars().skip(count - (max_len - 3)).collect();
    format!("...{}", tail)
}

fn draw_directory_selector(frame: &mut Frame, state: &DirectorySelectorState) {
    let area = frame.area();

    let popup_width = 66u16;
    let popup_height = 22u16;
    let x = area.width.saturating_sub(popup_width) / 2;
    let y = area.height.saturating_sub(popup_height) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height.saturating_sub(y)),
    );

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Select a Directory ")
        .title_style(Style::default().fg(Color::Cyan).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Current path
            Constraint::Length(3), // Search box
            Constraint::Min(1),    // Directory list
            Constraint::Length(2), // Help text
        ])
        .split(inner);

    let path_str = state.current_dir.display().to_string();
    let max_path_len = (chunks[0].width as usize).saturating_sub(12);
    let path_line = Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("Current: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            truncate_path_start(&path_str, max_path_len),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(path_line), chunks[0]);

    let search_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Filter ")
        .title_style(Style::default().fg(Color::DarkGray));
    let search_content = if state.search.is_empty() {
        Line::from(vec![
            Span::styled("Type to filter...", Style::default().fg(Color::DarkGray)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    } else {
        Line::from(vec![
            Span::styled(&state.search, Style::default().fg(Color::White)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ])
    };
    frame.render_widget(Paragraph::new(search_content).block(search_block), chunks[1]);

    let list_height = chunks[2].height as usize;
    let start_idx = (state.selected + 1).saturating_sub(list_height);

    let items: Vec<ListItem> = state
        .filtered
        .iter()
        .enumerate()
        .skip(start_idx)
        .take(list_height)
        .map(|(display_idx, &entry_idx)| {
            let entry = &state.entries[entry_idx];
            let (label, base) = match entry.kind {
                EntryKind::Current => (format!("  {}", entry.name), Color::Green),
                EntryKind::Parent => (format!("  ▸ {}", entry.name), Color::Cyan),
                EntryKind::Child => (format!("  ▸ {}/", entry.name), Color::Cyan),
            };
            let style = if display_idx == state.selected {
                Style::default().fg(Color::Black).bg(base).bold()
            } else {
                Style::default().fg(base)
            };
            ListItem::new(label).style(style)
        })
        .collect();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.saturating_sub(start_idx)));
    frame.render_stateful_widget(List::new(items), chunks[2], &mut list_state);

    let help_text = Line::from(vec![
        Span::styled("  Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" open  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" use current  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Backspace", Style::default().fg(Color::Cyan)),
        Span::styled(" up  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(help_text), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("beta")).unwrap();
        std::fs::create_dir(dir.path().join("Alpha")).unwrap();
        std::fs::write(dir.path().join("file.txt"), "").unwrap();
        dir
    }

    #[test]
    fn test_list_directories_skips_files_and_sorts() {
        let dir = fixture();
        let entries = list_directories(dir.path());
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec![USE_THIS_DIRECTORY, "..", "Alpha", "beta"]);
    }

    #[test]
    fn test_first_entry_chooses_current_directory() {
        let dir = fixture();
        let state = DirectorySelectorState::new(dir.path().to_path_buf());
        assert_eq!(state.activate(), Activation::Choose(dir.path().to_path_buf()));
    }

    #[test]
    fn test_filter_keeps_navigation_entries() {
        let dir = fixture();
        let mut state = DirectorySelectorState::new(dir.path().to_path_buf());
        state.search = "alp".to_string();
        state.update_filter();
        assert_eq!(state.filtered.len(), 3);
        state.selected = 2;
        assert_eq!(state.activate(), Activation::Open(dir.path().join("Alpha")));
    }

    #[test]
    fn test_truncate_path_start() {
        assert_eq!(truncate_path_start("/a/b", 10), "/a/b");
        assert_eq!(truncate_path_start("/home/user/projects", 10), "...rojects");
    }
}
