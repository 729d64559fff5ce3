//! Pointer-event handlers: translate pointer input into polygon mutations
//!
//! Pointer-down dispatches on the current mode, pointer-move advances an
//! active drag, pointer-up ends it. Hit-test misses are defined no-ops, not
//! errors.

use crate::domain::{Point, PolygonError};
use crate::render::style::{LINE_CLICK_TOLERANCE, POINT_RADIUS};
use crate::session::messages::{EditMode, Notice, PointerEvent};
use crate::session::state::EditorSession;

/// Feed one pointer event into the session
pub fn handle_pointer(session: &mut EditorSession, event: PointerEvent) {
    match event {
        PointerEvent::Down(pos) => handle_down(session, pos),
        PointerEvent::Moved(pos) => handle_moved(session, pos),
        PointerEvent::Up => session.dragging = None,
    }
}

fn handle_down(session: &mut EditorSession, pos: Point) {
    match session.mode() {
        EditMode::Select => {
            // Grab only; the vertex first moves on pointer-move
            session.dragging = session.polygon().find_vertex_near(pos, POINT_RADIUS);
        }
        EditMode::Add => {
            if let Some(edge) = session.polygon().find_edge_near(pos, LINE_CLICK_TOLERANCE) {
                session.polygon_mut().insert_after(edge, pos);
                session.request_redraw();
            }
        }
        EditMode::Remove => {
            if let Some(index) = session.polygon().find_vertex_near(pos, POINT_RADIUS) {
                match session.polygon_mut().remove_at(index) {
                    Ok(()) => session.request_redraw(),
                    Err(PolygonError::MinimumVertices) => {
                        log::debug!("removal of vertex {index} rejected at the vertex floor");
                        session.push_notice(Notice::MinimumVertices);
                    }
                }
            }
        }
    }
}

fn handle_moved(session: &mut EditorSession, pos: Point) {
    if session.mode() == EditMode::Select
        && let Some(index) = session.dragging
    {
        session.polygon_mut().move_vertex(index, pos);
        session.request_redraw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Polygon;
    use crate::loader::LoadedImage;
    use image::RgbaImage;

    /// Session with the default octagon: 550x500 surface centers it so that
    /// vertex 0 sits at (200, 200) and vertex 1 at (250, 180).
    fn octagon_session() -> EditorSession {
        let mut session = EditorSession::new();
        session.install_image(LoadedImage {
            rgba: RgbaImage::new(550, 500),
        });
        assert!(session.take_redraw_request());
        session
    }

    fn down(session: &mut EditorSession, x: f32, y: f32) {
        handle_pointer(session, PointerEvent::Down(Point::new(x, y)));
    }

    #[test]
    fn add_on_an_edge_midpoint_inserts_after_it() {
        let mut session = octagon_session();
        session.set_mode(EditMode::Add);

        // Exactly on the midpoint of edge 0, from (200, 200) to (250, 180)
        down(&mut session, 225.0, 190.0);

        assert_eq!(session.polygon().len(), 9);
        assert_eq!(session.polygon().vertices()[1], Point::new(225.0, 190.0));
        assert!(session.take_redraw_request());
    }

    #[test]
    fn add_away_from_every_edge_is_a_no_op() {
        let mut session = octagon_session();
        session.set_mode(EditMode::Add);

        down(&mut session, 10.0, 10.0);

        assert_eq!(session.polygon().len(), 8);
        assert!(!session.take_redraw_request());
        assert_eq!(session.take_notice(), None);
    }

    #[test]
    fn remove_deletes_the_clicked_vertex() {
        let mut session = octagon_session();
        session.set_mode(EditMode::Remove);

        down(&mut session, 250.0, 180.0);

        assert_eq!(session.polygon().len(), 7);
        assert_eq!(session.polygon().vertices()[1], Point::new(300.0, 190.0));
        assert!(session.take_redraw_request());
    }

    #[test]
    fn remove_at_the_floor_surfaces_a_notice_and_changes_nothing() {
        let mut session = octagon_session();
        *session.polygon_mut() = Polygon::from_vertices(vec![
            Point::new(100.0, 100.0),
            Point::new(300.0, 100.0),
            Point::new(200.0, 300.0),
        ])
        .unwrap();
        session.set_mode(EditMode::Remove);
        let before = session.polygon().clone();

        down(&mut session, 300.0, 100.0);

        assert_eq!(*session.polygon(), before);
        assert_eq!(session.take_notice(), Some(Notice::MinimumVertices));
        assert!(!session.take_redraw_request());
    }

    #[test]
    fn select_drags_only_the_pressed_vertex() {
        let mut session = octagon_session();
        let before: Vec<_> = session.polygon().vertices().to_vec();

        // Press on vertex 2 at (300, 190), drag to (500, 500), release
        down(&mut session, 300.0, 190.0);
        assert_eq!(session.polygon().vertices(), before);
        handle_pointer(&mut session, PointerEvent::Moved(Point::new(500.0, 500.0)));
        handle_pointer(&mut session, PointerEvent::Up);

        let after = session.polygon().vertices();
        assert_eq!(after[2], Point::new(500.0, 500.0));
        for (i, v) in before.iter().enumerate() {
            if i != 2 {
                assert_eq!(after[i], *v);
            }
        }
        assert!(session.take_redraw_request());
    }

    #[test]
    fn select_press_on_empty_space_starts_no_drag() {
        let mut session = octagon_session();

        down(&mut session, 10.0, 10.0);
        handle_pointer(&mut session, PointerEvent::Moved(Point::new(500.0, 500.0)));

        assert!(!session.take_redraw_request());
    }

    #[test]
    fn mode_change_cancels_an_inflight_drag() {
        let mut session = octagon_session();
        let before: Vec<_> = session.polygon().vertices().to_vec();

        down(&mut session, 200.0, 200.0);
        session.set_mode(EditMode::Add);
        handle_pointer(&mut session, PointerEvent::Moved(Point::new(500.0, 500.0)));

        assert_eq!(session.polygon().vertices(), before);
    }

    #[test]
    fn pointer_up_is_idempotent() {
        let mut session = octagon_session();
        handle_pointer(&mut session, PointerEvent::Up);
        handle_pointer(&mut session, PointerEvent::Up);
        assert!(!session.take_redraw_request());
    }
}
