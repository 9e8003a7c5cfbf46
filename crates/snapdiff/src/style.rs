//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use snapdiff_core::view::CellStyleClass;

/// Diff color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;

    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Diff status colors
    pub const ADDED: Color = Color::Green;
    pub const DELETED: Color = Color::Red;

    // Tab colors
    pub const TAB_ACTIVE: Color = Color::Cyan;
    pub const TAB_INACTIVE: Color = Color::DarkGray;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Active table tab style.
    pub fn tab_active() -> Style {
        Style::default()
            .fg(Theme::TAB_ACTIVE)
            .add_modifier(Modifier::BOLD)
    }

    /// Inactive table tab style.
    pub fn tab_inactive() -> Style {
        Style::default().fg(Theme::TAB_INACTIVE)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help text style.
    pub fn help() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help line).
    pub fn help_key() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Maps a UI-agnostic [`CellStyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: CellStyleClass) -> Style {
        match class {
            CellStyleClass::Stay => Self::default(),
            CellStyleClass::Added => Style::default().fg(Theme::ADDED),
            CellStyleClass::Deleted => Style::default().fg(Theme::DELETED),
            CellStyleClass::None => Self::dim(),
        }
    }

    /// The reserved `<null>` display value gets italics on top of its
    /// status color.
    pub fn null_value(class: CellStyleClass) -> Style {
        Self::from_class(class).add_modifier(Modifier::ITALIC)
    }
}
