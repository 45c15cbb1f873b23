use super::*;

#[test]
fn test_modifiers_combine_and_contain() {
    let mut mods = KeyModifiers::SHIFT;
    mods |= KeyModifiers::CONTROL;
    assert!(mods.contains(KeyModifiers::SHIFT));
    assert!(mods.contains(KeyModifiers::CONTROL));
    assert!(!mods.contains(KeyModifiers::ALT));
    assert!(mods.contains(KeyModifiers::NONE));
    assert!(KeyModifiers::NONE.is_empty());
    assert_eq!(
        KeyModifiers::SHIFT | KeyModifiers::ALT,
        KeyModifiers::ALT | KeyModifiers::SHIFT
    );
}

#[test]
fn test_typed_char_accepts_shifted_letters() {
    let key = KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT);
    assert_eq!(key.typed_char(), Some('T'));
    assert_eq!(KeyEvent::plain(KeyCode::Char('e')).typed_char(), Some('e'));
}

#[test]
fn test_typed_char_rejects_chords_and_non_chars() {
    assert_eq!(KeyEvent::ctrl(KeyCode::Char('c')).typed_char(), None);
    let alt = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT);
    assert_eq!(alt.typed_char(), None);
    assert_eq!(KeyEvent::plain(KeyCode::Enter).typed_char(), None);
}

#[test]
fn test_key_event_defaults_to_press() {
    let key = KeyEvent::plain(KeyCode::Down);
    assert_eq!(key.kind, KeyEventKind::Press);
    assert!(!key.is_release());
    assert_eq!(InputEvent::Key(key).as_key(), Some(&key));
    assert_eq!(InputEvent::Paste("x".into()).as_key(), None);
}

#[test]
fn test_left_click_helper() {
    let click = MouseEvent::left_click(4, 2);
    assert_eq!(click.kind, MouseEventKind::Down(MouseButton::Left));
    assert_eq!((click.column, click.row), (4, 2));
}
