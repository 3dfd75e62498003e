// src/ui/file_picker.rs

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem browser restricted to directories and PNG/JPEG files, used to
/// pick the site photo to inspect.
pub struct FilePicker {
    pub root_path: PathBuf,
    pub selected_path: PathBuf,
    pub expanded: HashSet<PathBuf>,
    pub visible_nodes: Vec<PathBuf>,
    pub selected_index: usize,
}

pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            e == "png" || e == "jpg" || e == "jpeg"
        })
        .unwrap_or(false)
}

impl FilePicker {
    pub fn new(root_path: PathBuf) -> Self {
        let mut picker = FilePicker {
            root_path: root_path.clone(),
            selected_path: root_path,
            expanded: HashSet::new(),
            visible_nodes: Vec::new(),
            selected_index: 0,
        };
        picker.update_visible_nodes();
        picker
    }

    pub fn toggle_expand(&mut self, path: &Path) {
        if self.expanded.contains(path) {
            self.expanded.remove(path);
        } else {
            self.expanded.insert(path.to_path_buf());
        }
        self.update_visible_nodes();
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.selected_path = self.visible_nodes[self.selected_index].clone();
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_nodes.len() {
            self.selected_index += 1;
            self.selected_path = self.visible_nodes[self.selected_index].clone();
        }
    }

    /// The selected node, but only when it is an image file.
    pub fn selected_image(&self) -> Option<PathBuf> {
        if self.selected_path.is_file() && is_image_file(&self.selected_path) {
            Some(self.selected_path.clone())
        } else {
            None
        }
    }

    pub fn update_visible_nodes(&mut self) {
        self.visible_nodes = Vec::new();
        let root_path_clone = self.root_path.clone();
        self.traverse(&root_path_clone);
        if self.selected_index >= self.visible_nodes.len() && !self.visible_nodes.is_empty() {
            self.selected_index = self.visible_nodes.len() - 1;
            self.selected_path = self.visible_nodes[self.selected_index].clone();
        }
    }

    fn traverse(&mut self, path: &Path) {
        self.visible_nodes.push(path.to_path_buf());

        if self.expanded.contains(path) {
            if let Ok(entries) = fs::read_dir(path) {
                let mut children: Vec<PathBuf> = entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.path())
                    .filter(|p| p.is_dir() || is_image_file(p))
                    .collect();
                // Directories first, then files, both alphabetical
                children.sort_by_key(|p| (p.is_file(), p.clone()));

                for child in children {
                    if child.is_dir() {
                        self.traverse(&child);
                    } else {
                        self.visible_nodes.push(child);
                    }
                }
            }
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, error: Option<&str>) {
        let items: Vec<ListItem> = self
            .visible_nodes
            .iter()
            .map(|path| {
                let depth = path
                    .strip_prefix(&self.root_path)
                    .map(|rel| rel.components().count())
                    .unwrap_or(0);
                let icon = if path.is_dir() {
                    if self.expanded.contains(path) {
                        "▾ "
                    } else {
                        "▸ "
                    }
                } else {
                    "🖼 "
                };
                let name = if path == &self.root_path {
                    path.display().to_string()
                } else {
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string())
                };
                let display = format!("{}{}{}", "  ".repeat(depth), icon, name);
                let style = if path == &self.selected_path {
                    Style::default()
                        .bg(Color::LightMagenta)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else if path.is_dir() {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::LightGreen)
                };
                ListItem::new(display).style(style)
            })
            .collect();

        let title = match error {
            Some(e) => format!("Select Site Photo — {}", e),
            None => "Select Site Photo (PNG/JPEG)".to_string(),
        };

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(
                Style::default()
                    .bg(Color::LightMagenta)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        f.render_widget(list, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_png_and_jpeg_count_as_images() {
        assert!(is_image_file(Path::new("a/site.png")));
        assert!(is_image_file(Path::new("b/SITE.JPG")));
        assert!(is_image_file(Path::new("c.jpeg")));
        assert!(!is_image_file(Path::new("d.gif")));
        assert!(!is_image_file(Path::new("notes.txt")));
        assert!(!is_image_file(Path::new("no_extension")));
    }

    #[test]
    fn expanding_a_directory_reveals_its_images() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("photo.png"), b"x").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"x").unwrap();

        let mut picker = FilePicker::new(dir.path().to_path_buf());
        assert_eq!(picker.visible_nodes.len(), 1);

        let root = picker.root_path.clone();
        picker.toggle_expand(&root);
        assert_eq!(picker.visible_nodes.len(), 2);
        assert!(picker.visible_nodes[1].ends_with("photo.png"));

        picker.move_selection_down();
        assert!(picker.selected_image().is_some());
    }
}
