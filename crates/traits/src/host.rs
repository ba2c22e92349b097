//! The boundary to the host view system.

use std::cell::RefCell;
use std::rc::Rc;
use trellis_types::{Color, FontSpec, Rect};

/// A native view that mirrors one layout node.
///
/// Only touched when a layout pass commits its results.
pub trait HostView {
    fn commit_frame(&mut self, frame: Rect);
    fn set_hidden(&mut self, hidden: bool);
    fn set_background_color(&mut self, color: Color);

    /// Static text of a text or button leaf, pushed once when the box is built.
    fn set_text(&mut self, _text: &str, _font: &FontSpec, _color: Option<Color>) {}

    /// Named image of an image leaf, pushed once when the box is built.
    fn set_image(&mut self, _name: &str) {}
}

pub type SharedHostView = Rc<RefCell<dyn HostView>>;

/// Creates host views for inflated boxes.
pub trait ViewFactory {
    /// `tag` is the markup tag the box was created from.
    fn create_view(&self, tag: &str) -> SharedHostView;
}

/// A host view that only remembers what was committed to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingView {
    pub tag: String,
    pub frame: Rect,
    pub hidden: bool,
    pub background: Option<Color>,
    pub text: Option<String>,
    pub text_color: Option<Color>,
    pub font: Option<FontSpec>,
    pub image: Option<String>,
    pub commits: usize,
}

impl HostView for RecordingView {
    fn commit_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.commits += 1;
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn set_background_color(&mut self, color: Color) {
        self.background = Some(color);
    }

    fn set_text(&mut self, text: &str, font: &FontSpec, color: Option<Color>) {
        self.text = Some(text.to_string());
        self.font = Some(font.clone());
        self.text_color = color;
    }

    fn set_image(&mut self, name: &str) {
        self.image = Some(name.to_string());
    }
}

/// Hands out [`RecordingView`]s and keeps them for later inspection.
#[derive(Debug, Default)]
pub struct RecordingViewFactory {
    views: RefCell<Vec<Rc<RefCell<RecordingView>>>>,
}

impl RecordingViewFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every view created so far, in creation order.
    pub fn views(&self) -> Vec<Rc<RefCell<RecordingView>>> {
        self.views.borrow().clone()
    }
}

impl ViewFactory for RecordingViewFactory {
    fn create_view(&self, tag: &str) -> SharedHostView {
        let view = Rc::new(RefCell::new(RecordingView {
            tag: tag.to_string(),
            ..Default::default()
        }));
        self.views.borrow_mut().push(Rc::clone(&view));
        view
    }
}
