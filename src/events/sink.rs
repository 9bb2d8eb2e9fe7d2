use crossbeam::channel::Sender;

use super::Event;

/// Receiver of interaction events published by [`crate::StarMapView`].
pub trait EventSink {
    fn send(&self, event: Event);
}

impl EventSink for Sender<Event> {
    fn send(&self, event: Event) {
        // A dropped receiver only means nobody listens anymore.
        let _ = Sender::send(self, event);
    }
}

impl<F: Fn(Event)> EventSink for F {
    fn send(&self, event: Event) {
        self(event);
    }
}
