use cube_solver_tui::core::{SessionSnapshot, SolveController};
use cube_solver_tui::term::{color_rgb, AnchorY, CubeView, FrameBuffer, Viewport};
use cube_solver_tui::types::{Color, Face, Move};

fn find_row(fb: &FrameBuffer, needle: &str) -> Option<u16> {
    (0..fb.height()).find(|&y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = SessionSnapshot::default();
    let view = CubeView::default().with_anchor_y(AnchorY::Top);

    // Net: 4 faces of 6 columns plus 3 gaps = 27, framed with 2 columns of
    // padding per side. 3 face rows of (label + 3 stickers) plus border.
    let fb = view.render(&snap, Viewport::new(31, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(30, 13).unwrap().ch, '┘');
}

#[test]
fn term_view_lays_out_cross_net() {
    let view = CubeView::default();
    let layout = view.layout(Viewport::new(80, 24));
    assert_eq!((layout.frame_x, layout.frame_y), (3, 5));

    // U sits above F, D below F; L F R B share a row.
    let up = view.sticker_origin(&layout, Face::Up, 0);
    let front = view.sticker_origin(&layout, Face::Front, 0);
    let down = view.sticker_origin(&layout, Face::Down, 0);
    let left = view.sticker_origin(&layout, Face::Left, 0);
    let back = view.sticker_origin(&layout, Face::Back, 0);
    assert_eq!(up.0, front.0);
    assert_eq!(down.0, front.0);
    assert!(up.1 < front.1 && front.1 < down.1);
    assert_eq!(left.1, front.1);
    assert_eq!(back.1, front.1);
    assert!(left.0 < front.0 && front.0 < back.0);
    assert_eq!(up, (12, 7));
}

#[test]
fn term_view_draws_sticker_two_columns_wide_in_face_color() {
    let snap = SessionSnapshot::default();
    let view = CubeView::default();
    let vp = Viewport::new(80, 24);
    let fb = view.render(&snap, vp);
    let layout = view.layout(vp);

    let (x, y) = view.sticker_origin(&layout, Face::Front, 4);
    for dx in 0..2 {
        let cell = fb.get(x + dx, y).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, color_rgb(Color::Green));
    }

    let (lx, ly) = view.label_origin(&layout, Face::Right);
    assert_eq!(fb.get(lx, ly).unwrap().ch, 'R');
}

#[test]
fn term_view_draws_unknown_sticker_as_neutral_fallback() {
    let mut snap = SessionSnapshot::default();
    let view = CubeView::default();
    let vp = Viewport::new(80, 24);
    let layout = view.layout(vp);

    let mut cube = snap.cube;
    let mut patch = cube_solver_tui::core::CubePatch::new();
    let mut up = *cube.face(Face::Up);
    up[8] = None;
    patch.set(Face::Up, up);
    cube.replace(&patch);
    snap.cube = cube;

    let fb = view.render(&snap, vp);
    let (x, y) = view.sticker_origin(&layout, Face::Up, 8);
    assert_eq!(fb.get(x, y).unwrap().ch, '░');
    let (x0, y0) = view.sticker_origin(&layout, Face::Up, 0);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
}

#[test]
fn term_view_side_panel_shows_session() {
    let mut c = SolveController::new(1);
    c.add_move(Move::cw(Face::Right));
    c.add_move(Move::ccw(Face::Up));
    let ticket = c.solve().unwrap();
    let snap = c.snapshot();

    let fb = CubeView::default().render(&snap, Viewport::new(80, 30));
    assert!(find_row(&fb, "CUBE SOLVER").is_some());
    assert!(find_row(&fb, "SOLVING...").is_some());
    let scramble_header = find_row(&fb, "SCRAMBLE (2)").expect("scramble header");
    assert!(fb.row_text(scramble_header + 1).contains(&ticket.scramble));

    c.complete(
        ticket.session,
        Err(cube_solver_tui::core::SolveError::Service(
            "Invalid move sequence".into(),
        )),
    );
    let fb = CubeView::default().render(&c.snapshot(), Viewport::new(80, 30));
    assert!(find_row(&fb, "ERROR").is_some());
    assert!(find_row(&fb, "Invalid move sequence").is_some());
    assert!(find_row(&fb, "Idle").is_some());
}

#[test]
fn term_view_hides_panel_when_narrow() {
    let snap = SessionSnapshot::default();
    let fb = CubeView::default().render(&snap, Viewport::new(40, 20));
    assert!(find_row(&fb, "SCRAMBLE").is_none());
    assert!(find_row(&fb, "┌").is_some());
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let snap = SessionSnapshot::default();
    let view = CubeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    view.render_into(&snap, Viewport::new(100, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (100, 30));
    assert_eq!(fb, view.render(&snap, Viewport::new(100, 30)));
}
