use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Program};
use iced::widget::text;
use iced::{Color, Element, Point, Rectangle, Renderer, Size, Theme};

use crate::state::rotation::Affordance;
use crate::Message;

/// Height of the load progress bar
const PROGRESS_HEIGHT: f32 = 5.0;

/// Progress bar color (#53B8D4)
const PROGRESS_COLOR: Color = Color {
    r: 0.325,
    g: 0.722,
    b: 0.831,
    a: 1.0,
};

/// Drag hint color (#7BC7C7)
const HINT_COLOR: Color = Color {
    r: 0.482,
    g: 0.780,
    b: 0.780,
    a: 1.0,
};

/// Input layer laid over the current frame
///
/// Starts drags on pointer-down, picks the grab cursor and draws the load
/// progress bar. Moves and releases are not handled here: they are picked up
/// window-wide by the application subscription while a drag is open.
pub struct SpinnerOverlay {
    pub affordance: Affordance,
    /// Progress bar width in percent, None when hidden
    pub progress: Option<f32>,
}

impl Program<Message> for SpinnerOverlay {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let Some(percent) = self.progress else {
            return vec![];
        };

        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let width = bounds.width * (percent / 100.0).clamp(0.0, 1.0);
        frame.fill_rectangle(Point::ORIGIN, Size::new(width, PROGRESS_HEIGHT), PROGRESS_COLOR);

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_over(bounds) {
                return (
                    canvas::event::Status::Captured,
                    Some(Message::DragStarted(position.x)),
                );
            }
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        match self.affordance {
            Affordance::Dragging => mouse::Interaction::Grabbing,
            Affordance::Idle if cursor.is_over(bounds) => mouse::Interaction::Grab,
            Affordance::Idle => mouse::Interaction::default(),
        }
    }
}

/// "‹ Drag to Rotate ›" hint shown under the product
pub fn drag_hint<'a>() -> Element<'a, Message> {
    text("‹  Drag to Rotate  ›").size(16).color(HINT_COLOR).into()
}
