mod event;
mod sink;

pub use event::{
    Event, PayloadCenter, PayloadFiltersChanged, PayloadObjectDeselect, PayloadObjectHoverEnter,
    PayloadObjectHoverLeave, PayloadObjectSelect, PayloadPan,
};

pub use sink::EventSink;
