use tui_match3::core::PlaySession;
use tui_match3::term::{tile_glyph, AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use tui_match3::types::Coord;

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = PlaySession::new(1, 1).snapshot();
    let view = GameView::default();

    // 8 tiles * 3 columns + border = 26 wide; 8 rows + border = 10 tall.
    assert_eq!(view.frame_size(&snap), (26, 10));
    let fb = view.render(&snap, Viewport::new(26, 10));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 9).unwrap().ch, '└');
    assert_eq!(fb.get(25, 9).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_cursor_brackets_around_tile() {
    let snap = PlaySession::new(1, 1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(26, 10));

    // Cursor starts at (0, 0): the first tile spans columns 1..=3 of row 1.
    assert_eq!(fb.get(1, 1).unwrap().ch, '[');
    assert_eq!(fb.get(3, 1).unwrap().ch, ']');

    let tile = snap.cell(0, 0).unwrap();
    let (glyph, _) = tile_glyph(tile, Rgb::default());
    assert_eq!(fb.get(2, 1).unwrap().ch, glyph);

    // Second tile has no brackets.
    assert_eq!(fb.get(4, 1).unwrap().ch, ' ');
}

#[test]
fn term_view_renders_empty_cell_as_dot() {
    let mut snap = PlaySession::new(1, 1).snapshot();
    snap.board[7][7] = None;
    let fb = GameView::default().render(&snap, Viewport::new(26, 10));

    assert_eq!(fb.get(1 + 7 * 3 + 1, 8).unwrap().ch, '·');
}

#[test]
fn term_view_highlights_selection() {
    let mut snap = PlaySession::new(1, 1).snapshot();
    snap.selected = Some(Coord::new(1, 0));
    let fb = GameView::default().render(&snap, Viewport::new(26, 10));

    let selected_bg = fb.get(5, 1).unwrap().style.bg;
    let plain_bg = fb.get(8, 1).unwrap().style.bg;
    assert_ne!(selected_bg, plain_bg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = PlaySession::new(1, 1).snapshot();
    let view = GameView::default();

    let fb = view.render(&snap, Viewport::new(60, 20));
    let all = screen_text(&fb);
    assert!(all.contains("LEVEL"));
    assert!(all.contains("SCORE"));
    assert!(all.contains("GOAL"));
    assert!(all.contains("250"));
    assert!(all.contains("TIME"));
    assert!(all.contains("60"));

    // No room for the panel next to a bare board.
    let narrow = screen_text(&view.render(&snap, Viewport::new(26, 10)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_shows_game_over_without_cursor() {
    let mut snap = PlaySession::new(1, 1).snapshot();
    snap.game_over = true;
    let fb = GameView::default().render(&snap, Viewport::new(26, 10));

    let all = screen_text(&fb);
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains('['));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = PlaySession::new(1, 1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(26, 20));

    // start_y = (20 - 10) / 2 = 5
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = PlaySession::new(1, 1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(26, 20));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
