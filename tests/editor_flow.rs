//! End-to-end flow: load an image, edit the polygon, export the clip

use image::{Rgba, RgbaImage};
use polysnip::config::OverlayColor;
use polysnip::domain::Point;
use polysnip::export;
use polysnip::loader;
use polysnip::render;
use polysnip::session::handlers::handle_pointer;
use polysnip::session::{CursorHint, EditMode, EditorSession, Notice, PointerEvent};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[tokio::test]
async fn load_edit_export() {
    init_logging();

    // Write a source image to disk and load it through the async boundary
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("source.png");
    let source = RgbaImage::from_pixel(550, 500, Rgba([120, 80, 40, 255]));
    let mut file = std::fs::File::create(&source_path).unwrap();
    export::write_png(&mut file, &source).unwrap();
    drop(file);

    let mut session = EditorSession::new();

    // Before decode completion nothing renders or exports
    assert!(render::image::render_scene(&session, OverlayColor::default()).is_none());
    assert!(export::export_clip_to(&session, dir.path()).is_err());

    let loaded = loader::load_image(&source_path).await.unwrap();
    session.install_image(loaded);
    assert!(session.take_redraw_request());
    assert_eq!(session.polygon().len(), 8);

    // Add a vertex on the first edge's midpoint
    session.set_mode(EditMode::Add);
    handle_pointer(&mut session, PointerEvent::Down(Point::new(225.0, 190.0)));
    assert_eq!(session.polygon().len(), 9);
    assert!(session.take_redraw_request());

    // Drag the fresh vertex somewhere else
    session.set_mode(EditMode::Select);
    handle_pointer(&mut session, PointerEvent::Down(Point::new(225.0, 190.0)));
    handle_pointer(&mut session, PointerEvent::Moved(Point::new(260.0, 120.0)));
    handle_pointer(&mut session, PointerEvent::Up);
    assert_eq!(session.polygon().vertices()[1], Point::new(260.0, 120.0));
    assert!(session.take_redraw_request());

    // Remove it again
    session.set_mode(EditMode::Remove);
    handle_pointer(&mut session, PointerEvent::Down(Point::new(260.0, 120.0)));
    assert_eq!(session.polygon().len(), 8);
    assert_eq!(session.take_notice(), None);

    // The rendered scene matches the surface
    let scene = render::image::render_scene(&session, OverlayColor::default()).unwrap();
    assert_eq!((scene.width(), scene.height()), (550, 500));

    // Export: interior keeps source pixels, exterior is transparent
    let out_path = export::export_clip_to(&session, dir.path()).unwrap();
    let clipped = image::open(&out_path).unwrap().to_rgba8();
    assert_eq!(clipped.dimensions(), (550, 500));
    assert_eq!(clipped.get_pixel(275, 250), &Rgba([120, 80, 40, 255]));
    assert_eq!(clipped.get_pixel(5, 5).0[3], 0);
}

#[tokio::test]
async fn vertex_floor_is_surfaced_as_a_notice() {
    init_logging();

    let mut session = EditorSession::new();
    session.install_image(polysnip::loader::LoadedImage {
        rgba: RgbaImage::new(550, 500),
    });

    // Trim the octagon down to a triangle, clicking vertex 0 each time
    session.set_mode(EditMode::Remove);
    assert_eq!(session.mode().cursor_hint(), CursorHint::NotAllowed);
    for target in [
        Point::new(200.0, 200.0),
        Point::new(250.0, 180.0),
        Point::new(300.0, 190.0),
        Point::new(350.0, 220.0),
        Point::new(340.0, 300.0),
    ] {
        handle_pointer(&mut session, PointerEvent::Down(target));
    }
    assert_eq!(session.polygon().len(), 3);

    // One more removal is rejected and the polygon survives intact
    let before = session.polygon().clone();
    handle_pointer(&mut session, PointerEvent::Down(Point::new(300.0, 320.0)));
    assert_eq!(*session.polygon(), before);
    let notice = session.take_notice().unwrap();
    assert_eq!(notice, Notice::MinimumVertices);
    assert!(notice.text().contains("3 vertices"));
}
