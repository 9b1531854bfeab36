//! The widget registry: an insertion-ordered collection of live widgets.
//!
//! Insertion order is z-order — later-added widgets draw on top and get
//! first claim on input. Each tick the registry dispatches input in reverse
//! order (topmost first), stopping at the first widget that consumes it,
//! then renders in forward order (topmost last).

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Canvas, InputState, Widget};

/// Handle returned by [`WidgetManager::add`], used for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

/// Shared widget handle. The registry and the caller may both hold one; the
/// widget is dropped when the last reference goes away.
pub type WidgetHandle = Rc<RefCell<dyn Widget>>;

#[derive(Default)]
pub struct WidgetManager {
    widgets: Vec<(WidgetId, WidgetHandle)>,
    next_id: u64,
}

impl WidgetManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget on top of the stack.
    pub fn add(&mut self, widget: WidgetHandle) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.widgets.push((id, widget));
        id
    }

    /// Deregister. Unknown ids are ignored.
    pub fn remove(&mut self, id: WidgetId) {
        self.widgets.retain(|(wid, _)| *wid != id);
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Offer this frame's input to widgets from topmost down. The first
    /// widget that consumes it ends dispatch; widgets below never see the
    /// frame's input.
    pub fn dispatch_input(&mut self, input: &InputState) {
        for (_, widget) in self.widgets.iter().rev() {
            if widget.borrow_mut().handle_input(input) {
                break;
            }
        }
    }

    /// Render every widget bottom-up, so the topmost visually wins.
    pub fn render_all(&self, canvas: &mut Canvas) {
        for (_, widget) in &self.widgets {
            widget.borrow().render(canvas);
        }
    }
}
