use crate::ui::core::style::{Color, Mod, Style};

/// Semantic color slots for the autocomplete widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Border,
    FocusBorder,
    InputFg,
    PlaceholderFg,
    ItemFg,
    SelectedBg,
    SelectedFg,
    MatchFg,
    StatusFg,
    ErrorFg,
    FooterFg,
}

#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Color,
    pub focus_border: Color,
    pub input_fg: Color,
    pub placeholder_fg: Color,
    pub item_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub match_fg: Color,
    pub status_fg: Color,
    pub error_fg: Color,
    pub footer_fg: Color,
}

impl Theme {
    pub fn color(&self, token: Token) -> Color {
        match token {
            Token::Border => self.border,
            Token::FocusBorder => self.focus_border,
            Token::InputFg => self.input_fg,
            Token::PlaceholderFg => self.placeholder_fg,
            Token::ItemFg => self.item_fg,
            Token::SelectedBg => self.selected_bg,
            Token::SelectedFg => self.selected_fg,
            Token::MatchFg => self.match_fg,
            Token::StatusFg => self.status_fg,
            Token::ErrorFg => self.error_fg,
            Token::FooterFg => self.footer_fg,
        }
    }

    pub fn fg(&self, token: Token) -> Style {
        Style::default().fg(self.color(token))
    }

    /// Style for the matched part of an item label.
    pub fn match_style(&self) -> Style {
        self.fg(Token::MatchFg).add_mod(Mod::BOLD | Mod::UNDERLINE)
    }

    pub fn selected_row(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::Indexed(8),          // DarkGray
            focus_border: Color::Indexed(6),    // Cyan
            input_fg: Color::Indexed(15),       // White
            placeholder_fg: Color::Indexed(8),  // DarkGray
            item_fg: Color::Reset,
            selected_bg: Color::Indexed(8),     // DarkGray
            selected_fg: Color::Indexed(15),    // White
            match_fg: Color::Indexed(3),        // Yellow
            status_fg: Color::Indexed(8),       // DarkGray
            error_fg: Color::Indexed(1),        // Red
            footer_fg: Color::Indexed(6),       // Cyan
        }
    }
}
