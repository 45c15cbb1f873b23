//! Autocomplete view: pure rendering plus hit-testing over the last painted layout.

use crate::kernel::services::ports::WidgetConfig;
use crate::kernel::{split_text, AutocompleteItem, SearchPhase, SearchState};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::Painter;
use crate::ui::core::style::Mod;
use crate::ui::core::theme::{Theme, Token};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const INPUT_BOX_HEIGHT: u16 = 3;
const ROW_MARKER: &str = "> ";

#[derive(Debug)]
pub struct AutocompleteView {
    input_area: Option<Rect>,
    list_area: Option<Rect>,
    /// Item indices painted into `list_area`, top to bottom.
    painted_rows: Range<usize>,
    scroll_offset: usize,
    focused: bool,
}

impl AutocompleteView {
    pub fn new() -> Self {
        Self {
            input_area: None,
            list_area: None,
            painted_rows: 0..0,
            scroll_offset: 0,
            focused: true,
        }
    }

    pub fn set_focused(&mut self, focused: bool) -> bool {
        let changed = self.focused != focused;
        self.focused = focused;
        changed
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Item index under a terminal cell, if a result row was painted there.
    pub fn hit_test_row(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.list_area?;
        if !area.contains(Pos::new(column, row)) {
            return None;
        }
        let index = self.painted_rows.start + (row - area.y) as usize;
        self.painted_rows.contains(&index).then_some(index)
    }

    /// Where the terminal cursor belongs inside the input row.
    pub fn cursor_position<T>(&self, state: &SearchState<T>) -> Option<Pos> {
        let area = self.input_area?;
        if area.is_empty() || !self.focused {
            return None;
        }
        let cursor = state.cursor.min(state.raw_query.len());
        let start = query_window_start(&state.raw_query, cursor, area.w);
        let prefix = UnicodeWidthStr::width(&state.raw_query[start..cursor]) as u16;
        Some(Pos::new(
            area.x.saturating_add(prefix).min(area.right().saturating_sub(1)),
            area.y,
        ))
    }

    pub fn paint<T: AutocompleteItem>(
        &mut self,
        painter: &mut Painter,
        area: Rect,
        state: &SearchState<T>,
        config: &WidgetConfig,
        theme: &Theme,
    ) {
        self.input_area = None;
        self.list_area = None;
        self.painted_rows = 0..0;
        if area.is_empty() {
            return;
        }

        let (input_box, list_area) = area.split_top(INPUT_BOX_HEIGHT);
        let input_area = if input_box.h == INPUT_BOX_HEIGHT && input_box.w > 4 {
            let border = if self.focused {
                Token::FocusBorder
            } else {
                Token::Border
            };
            painter.border(input_box, theme.fg(border));
            let inner = input_box.inset(1);
            Rect::new(inner.x + 1, inner.y, inner.w - 2, 1)
        } else {
            Rect::new(input_box.x, input_box.y, input_box.w, 1)
        };
        self.input_area = Some(input_area);
        self.paint_input(painter, input_area, state, config, theme);

        if list_area.is_empty() {
            return;
        }
        self.list_area = Some(list_area);
        // Status lines sit under the input text, not under the border.
        let Some(status_row) = list_area.row(0) else {
            return;
        };
        let status_pos = Pos::new(input_area.x, status_row.y);

        match state.phase() {
            SearchPhase::Loading => painter.text_clipped(
                status_pos,
                config.loading_text.as_str(),
                theme.fg(Token::StatusFg).add_mod(Mod::ITALIC),
                status_row,
            ),
            SearchPhase::Error => {
                let message = state.error.as_deref().unwrap_or_default();
                painter.text_clipped(status_pos, message, theme.fg(Token::ErrorFg), status_row);
            }
            SearchPhase::Empty => painter.text_clipped(
                status_pos,
                config.no_items_text.as_str(),
                theme.fg(Token::StatusFg),
                status_row,
            ),
            SearchPhase::Success => self.paint_items(painter, list_area, state, theme),
            SearchPhase::Idle => {}
        }
    }

    fn paint_input<T>(
        &self,
        painter: &mut Painter,
        area: Rect,
        state: &SearchState<T>,
        config: &WidgetConfig,
        theme: &Theme,
    ) {
        if area.is_empty() {
            return;
        }
        let pos = Pos::new(area.x, area.y);
        if state.raw_query.is_empty() {
            painter.text_clipped(
                pos,
                config.placeholder.as_str(),
                theme.fg(Token::PlaceholderFg),
                area,
            );
            return;
        }
        let start = query_window_start(&state.raw_query, state.cursor, area.w);
        painter.text_clipped(
            pos,
            &state.raw_query[start..],
            theme.fg(Token::InputFg),
            area,
        );
    }

    fn paint_items<T: AutocompleteItem>(
        &mut self,
        painter: &mut Painter,
        area: Rect,
        state: &SearchState<T>,
        theme: &Theme,
    ) {
        let len = state.items.len();
        let height = area.h as usize;
        let selected = state.selected_index.min(len.saturating_sub(1));

        // Keep the highlighted row on screen.
        if selected < self.scroll_offset {
            self.scroll_offset = selected;
        } else if selected >= self.scroll_offset + height {
            self.scroll_offset = selected + 1 - height;
        }
        self.scroll_offset = self.scroll_offset.min(len.saturating_sub(height));

        let end = (self.scroll_offset + height).min(len);
        self.painted_rows = self.scroll_offset..end;

        for (offset, index) in self.painted_rows.clone().enumerate() {
            let Some(row) = area.row(offset as u16) else {
                break;
            };
            let item = &state.items[index];
            let is_selected = index == selected;
            let base = if is_selected {
                theme.selected_row()
            } else {
                theme.fg(Token::ItemFg)
            };
            painter.fill_rect(row, base);

            let mut x = row.x;
            if is_selected {
                painter.text_clipped(Pos::new(x, row.y), ROW_MARKER, base, row);
            }
            x = x.saturating_add(ROW_MARKER.len() as u16);

            let label = item.name();
            for chunk in split_text(&label, &state.settled_query) {
                let style = if chunk.highlighted {
                    base.patch(theme.match_style())
                } else {
                    base
                };
                painter.text_clipped(Pos::new(x, row.y), chunk.text, style, row);
                x = x.saturating_add(UnicodeWidthStr::width(chunk.text) as u16);
            }
        }
    }
}

impl Default for AutocompleteView {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset where the visible part of `query` starts so the cursor stays
/// inside a field `width` cells wide, with one cell left for the cursor itself.
fn query_window_start(query: &str, cursor: usize, width: u16) -> usize {
    let cursor = cursor.min(query.len());
    let budget = (width as usize).saturating_sub(1);
    let mut start = cursor;
    let mut used = 0usize;
    for (i, g) in query[..cursor].grapheme_indices(true).rev() {
        used += UnicodeWidthStr::width(g);
        if used > budget {
            break;
        }
        start = i;
    }
    start
}

#[cfg(test)]
#[path = "../../tests/unit/views/autocomplete.rs"]
mod tests;
