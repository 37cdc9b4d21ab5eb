use std::cell::RefCell;

use crate::event::EditorEvent;

/// Callback receiving every event the editor publishes
pub type EventHandler = Box<dyn FnMut(&EditorEvent)>;

/// Delivers editor events to subscribed callbacks in subscription order.
///
/// Handlers run on the thread that owns the editor and need not be `Send`.
/// A handler may subscribe further handlers while an event is being
/// delivered; those start receiving from the next event.
#[derive(Default)]
pub struct EventBus {
    handlers: RefCell<Vec<EventHandler>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl FnMut(&EditorEvent) + 'static) {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    pub fn emit(&self, event: EditorEvent) {
        // Handlers subscribed during delivery land in the emptied list
        let mut delivering = self.handlers.take();
        for handler in &mut delivering {
            handler(&event);
        }

        let added = self.handlers.replace(delivering);
        self.handlers.borrow_mut().extend(added);
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::color::Color;

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let seen = Rc::clone(&seen);
            bus.subscribe(move |_: &EditorEvent| seen.borrow_mut().push(id));
        }

        bus.emit(EditorEvent::Undone);
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_subscribe_while_emitting() {
        let bus = Rc::new(EventBus::new());
        let late = Rc::new(RefCell::new(Vec::new()));

        let inner_bus = Rc::clone(&bus);
        let inner_late = Rc::clone(&late);
        bus.subscribe(move |event: &EditorEvent| {
            if *event == EditorEvent::Cleared {
                let late = Rc::clone(&inner_late);
                inner_bus.subscribe(move |event: &EditorEvent| {
                    late.borrow_mut().push(event.clone())
                });
            }
        });

        bus.emit(EditorEvent::Cleared);
        assert!(late.borrow().is_empty());

        bus.emit(EditorEvent::ColorChanged(Color::RED));
        assert_eq!(*late.borrow(), vec![EditorEvent::ColorChanged(Color::RED)]);
    }
}
