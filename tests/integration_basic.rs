use wiredeck::config::UiConfig;
use wiredeck::event::{InputEvent, PointerButton};
use wiredeck::geometry::{Color, Rect};
use wiredeck::render::DrawCommand;
use wiredeck::runner::Runtime;
use wiredeck::window::WindowManager;

const RED: Color = Color::rgb(255, 0, 0);
const GREEN: Color = Color::rgb(0, 255, 0);

fn click(x: i32, y: i32) -> [InputEvent; 2] {
    [
        InputEvent::PointerMove { x, y },
        InputEvent::PointerButtonDown(PointerButton::Left),
    ]
}

#[test]
fn press_promotes_window_and_paints_it_last() {
    let mut wm = WindowManager::new(UiConfig::default());
    let a = wm.add_window(Rect::new(0, 0, 200, 100), RED);
    let b = wm.add_window(Rect::new(100, 100, 100, 200), GREEN);
    let mut rt = Runtime::new(wm);

    let before = rt.run_frame(std::iter::empty(), (400, 400));
    assert_eq!(rt.windows().window_order(), &[a, b]);

    let after = rt.run_frame(click(150, 150), (400, 400));
    assert_eq!(rt.windows().window_order(), &[b, a]);

    let body_position = |commands: &[DrawCommand], color: Color| {
        commands
            .iter()
            .position(|cmd| matches!(cmd, DrawCommand::FillRect { color: c, .. } if *c == color))
            .unwrap()
    };
    assert!(body_position(before.commands(), GREEN) < body_position(before.commands(), RED));
    assert!(body_position(after.commands(), RED) < body_position(after.commands(), GREEN));
}

#[test]
fn press_before_any_motion_hits_nothing() {
    let mut wm = WindowManager::new(UiConfig::default());
    let a = wm.add_window(Rect::new(0, 0, 20, 20), RED);
    let b = wm.add_window(Rect::new(5, 5, 20, 20), GREEN);
    let mut rt = Runtime::new(wm);
    let _ = rt.run_frame(
        [InputEvent::PointerButtonDown(PointerButton::Left)],
        (80, 24),
    );
    assert_eq!(rt.input().cursor(), (-1, -1));
    assert_eq!(rt.windows().window_order(), &[a, b]);
    assert!(rt.windows().windows().all(|w| !w.is_dragged()));
}
