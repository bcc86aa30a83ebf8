pub mod help;
pub mod markup;
pub mod presenting;
pub mod results;
pub mod screen;

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::{app::App, clock::Clock};
use screen::Screen;

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

impl<C: Clock> Widget for &App<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let screen = screen::current_screen::<C>(self.phase());
        screen.render(self, area, buf);
        if self.show_help {
            help::HelpOverlay.render(area, buf);
        }
    }
}
