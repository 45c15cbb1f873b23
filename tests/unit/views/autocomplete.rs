use super::*;
use crate::kernel::SimpleItem;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;

fn shows(names: &[&str]) -> Vec<SimpleItem> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| SimpleItem::new(i as i64, *name))
        .collect()
}

fn settled(query: &str, items: Vec<SimpleItem>) -> SearchState<SimpleItem> {
    let mut state = SearchState::default();
    state.set_query(query.to_string());
    state.settled_query = query.to_string();
    state.apply_items(items);
    state
}

fn render(
    view: &mut AutocompleteView,
    state: &SearchState<SimpleItem>,
    config: &WidgetConfig,
    w: u16,
    h: u16,
) -> TestBackend {
    let mut backend = TestBackend::new(w, h);
    let mut painter = Painter::new();
    view.paint(&mut painter, backend.area(), state, config, &Theme::default());
    backend.draw(backend.area(), painter.cmds());
    backend.set_cursor(view.cursor_position(state));
    backend
}

#[test]
fn test_idle_shows_placeholder_and_nothing_else() {
    let mut view = AutocompleteView::new();
    let state = SearchState::<SimpleItem>::default();
    let backend = render(&mut view, &state, &WidgetConfig::default(), 20, 6);

    let lines = backend.buffer().lines();
    assert_eq!(lines[0], "┌──────────────────┐");
    assert_eq!(lines[1], "│ Search...        │");
    assert!(lines[3..].iter().all(|line| line.is_empty()));
    assert_eq!(backend.cursor(), Some(Pos::new(2, 1)));
}

#[test]
fn test_custom_placeholder() {
    let mut view = AutocompleteView::new();
    let config = WidgetConfig {
        placeholder: "Search Shows..".to_string(),
        ..WidgetConfig::default()
    };
    let backend = render(&mut view, &SearchState::default(), &config, 24, 4);
    assert!(backend.buffer().row_text(1).contains("Search Shows.."));
}

#[test]
fn test_loading_text_wins_over_stale_items() {
    let mut view = AutocompleteView::new();
    let mut state = settled("Te", shows(&["Test"]));
    state.begin_loading();
    let backend = render(&mut view, &state, &WidgetConfig::default(), 20, 6);

    assert_eq!(backend.buffer().row_text(3), "  Loading...");
    assert!(backend.buffer().find("Test").is_none());
    assert_eq!(view.hit_test_row(4, 3), None);
}

#[test]
fn test_error_message_is_shown() {
    let mut view = AutocompleteView::new();
    let mut state = SearchState::<SimpleItem>::default();
    state.set_query("x".to_string());
    state.apply_error("Custom error".to_string());
    let backend = render(&mut view, &state, &WidgetConfig::default(), 20, 6);

    let pos = backend.buffer().find("Custom error").unwrap();
    assert_eq!(pos.y, 3);
    let style = backend.buffer().cell(pos.x, pos.y).unwrap().style;
    assert_eq!(style.fg, Some(Theme::default().error_fg));
}

#[test]
fn test_no_items_text_after_empty_result() {
    let mut view = AutocompleteView::new();
    let config = WidgetConfig {
        no_items_text: "Nothing here".to_string(),
        ..WidgetConfig::default()
    };
    let state = settled("zzz", Vec::new());
    let backend = render(&mut view, &state, &config, 20, 6);
    assert_eq!(backend.buffer().row_text(3), "  Nothing here");
}

#[test]
fn test_items_render_with_highlighted_match() {
    let mut view = AutocompleteView::new();
    let state = settled("test", shows(&["Test", "Testing", "The Testaments"]));
    let backend = render(&mut view, &state, &WidgetConfig::default(), 24, 8);
    let buf = backend.buffer();

    assert_eq!(buf.row_text(3), "> Test");
    assert_eq!(buf.row_text(4), "  Testing");
    assert_eq!(buf.row_text(5), "  The Testaments");

    let theme = Theme::default();
    // "Test" in "Testing" keeps its casing and carries the match style.
    let hit = buf.cell(2, 4).unwrap();
    assert_eq!(hit.symbol, "T");
    assert_eq!(hit.style.fg, Some(theme.match_fg));
    assert!(hit.style.mods.contains(Mod::BOLD | Mod::UNDERLINE));
    let rest = buf.cell(6, 4).unwrap();
    assert_eq!(rest.symbol, "i");
    assert_eq!(rest.style.fg, Some(theme.item_fg));

    let before = buf.cell(2, 5).unwrap();
    assert_eq!(before.symbol, "T");
    assert!(!before.style.mods.contains(Mod::UNDERLINE));
}

#[test]
fn test_selected_row_uses_selection_background() {
    let mut view = AutocompleteView::new();
    let mut state = settled("a", shows(&["Big Ang", "Mad Men"]));
    state.move_selection(1);
    let backend = render(&mut view, &state, &WidgetConfig::default(), 20, 6);
    let buf = backend.buffer();

    assert_eq!(buf.row_text(4), "> Mad Men");
    let theme = Theme::default();
    assert_eq!(buf.cell(15, 4).unwrap().style.bg, Some(theme.selected_bg));
    assert_eq!(buf.cell(15, 3).unwrap().style.bg, None);
}

#[test]
fn test_hit_test_maps_rows_to_item_indices() {
    let mut view = AutocompleteView::new();
    let state = settled("a", shows(&["a1", "a2"]));
    render(&mut view, &state, &WidgetConfig::default(), 20, 8);

    assert_eq!(view.hit_test_row(5, 3), Some(0));
    assert_eq!(view.hit_test_row(0, 4), Some(1));
    // Below the last item, and inside the input box.
    assert_eq!(view.hit_test_row(5, 5), None);
    assert_eq!(view.hit_test_row(5, 1), None);
}

#[test]
fn test_list_scrolls_to_keep_selection_visible() {
    let mut view = AutocompleteView::new();
    let mut state = settled("s", shows(&["s0", "s1", "s2", "s3", "s4"]));
    state.selected_index = 4;
    let backend = render(&mut view, &state, &WidgetConfig::default(), 20, 5);

    assert_eq!(view.scroll_offset(), 3);
    assert_eq!(backend.buffer().row_text(3), "  s3");
    assert_eq!(backend.buffer().row_text(4), "> s4");
    assert_eq!(view.hit_test_row(2, 4), Some(4));

    state.selected_index = 0;
    render(&mut view, &state, &WidgetConfig::default(), 20, 5);
    assert_eq!(view.scroll_offset(), 0);
}

#[test]
fn test_long_query_scrolls_to_cursor() {
    let mut view = AutocompleteView::new();
    let mut state = SearchState::<SimpleItem>::default();
    state.set_query("abcdefghijkl".to_string());
    // Input field is 10 - 4 = 6 cells wide.
    let backend = render(&mut view, &state, &WidgetConfig::default(), 10, 3);

    assert_eq!(backend.buffer().row_text(1), "│ hijkl  │");
    assert_eq!(backend.cursor(), Some(Pos::new(7, 1)));
}

#[test]
fn test_cursor_follows_wide_chars() {
    let mut view = AutocompleteView::new();
    let mut state = SearchState::<SimpleItem>::default();
    state.set_query("日本".to_string());
    let backend = render(&mut view, &state, &WidgetConfig::default(), 20, 3);
    assert_eq!(backend.cursor(), Some(Pos::new(6, 1)));
}

#[test]
fn test_unfocused_view_hides_cursor() {
    let mut view = AutocompleteView::new();
    assert!(view.set_focused(false));
    assert!(!view.set_focused(false));
    let backend = render(&mut view, &SearchState::default(), &WidgetConfig::default(), 20, 3);
    assert_eq!(backend.cursor(), None);
    let border = backend.buffer().cell(0, 0).unwrap();
    assert_eq!(border.style.fg, Some(Theme::default().border));
}

#[test]
fn test_single_row_area_draws_bare_input() {
    let mut view = AutocompleteView::new();
    let backend = render(&mut view, &SearchState::default(), &WidgetConfig::default(), 12, 1);
    assert_eq!(backend.buffer().row_text(0), "Search...");
    assert_eq!(view.hit_test_row(0, 0), None);
}

#[test]
fn test_query_window_start() {
    assert_eq!(query_window_start("abc", 3, 10), 0);
    assert_eq!(query_window_start("abcdef", 6, 4), 3);
    assert_eq!(query_window_start("abc", 3, 0), 3);
    assert_eq!(query_window_start("日本語", 9, 5), 3);
}
