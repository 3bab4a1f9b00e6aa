//! Help dialog contents
//!
//! The dialog is plain text: a title line followed by one line per shortcut.

use crate::models::Key;
use crate::routes::RouteTable;

/// Title line of the help dialog
pub const HELP_TITLE: &str = "Горячие клавиши:";

/// Width of the key column in the rendered help text
const KEY_COLUMN_WIDTH: usize = 5;

/// A group of shortcuts
pub struct ShortcutCategory {
    pub name: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

/// A single keyboard shortcut for display
pub struct Shortcut {
    pub keys: String,
    pub description: String,
}

impl Shortcut {
    fn new(keys: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            keys: keys.into(),
            description: description.into(),
        }
    }
}

/// Returns categorized shortcuts for the help dialog
pub fn shortcuts_help(routes: &RouteTable) -> Vec<ShortcutCategory> {
    vec![
        ShortcutCategory {
            name: "Переходы",
            shortcuts: routes
                .iter()
                .map(|route| {
                    Shortcut::new(
                        format!("{} {}", Key::CHORD_LEADER, route.key),
                        route.label.clone(),
                    )
                })
                .collect(),
        },
        ShortcutCategory {
            name: "Действия",
            shortcuts: vec![
                Shortcut::new(Key::FOCUS_SEARCH, "Фокус на поиске (на главной)"),
                Shortcut::new(Key::NEW_ITEM, "Новое объявление (где доступно)"),
                Shortcut::new(
                    Key::SETTINGS,
                    "Открыть настройки профиля (если открыт профиль)",
                ),
                Shortcut::new(Key::HELP, "Показать это окно"),
            ],
        },
    ]
}

/// Render categories into the dialog text
pub fn render_help(categories: &[ShortcutCategory]) -> String {
    let mut lines = vec![HELP_TITLE.to_string()];
    for shortcut in categories.iter().flat_map(|c| c.shortcuts.iter()) {
        lines.push(format!(
            "{:<width$}— {}",
            shortcut.keys,
            shortcut.description,
            width = KEY_COLUMN_WIDTH
        ));
    }
    lines.join("\n")
}

/// Full help text for a route table
pub fn help_text(routes: &RouteTable) -> String {
    render_help(&shortcuts_help(routes))
}
