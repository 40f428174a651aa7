//! Plain data row types written by output backends.

/// Which state transition a row records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Dispatched,
    Arrived,
    DoorsOpening,
    DoorsClosed,
    ButtonDisabled,
    ButtonEnabled,
}

impl EventKind {
    /// Stable wire name used in the `event` column.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Dispatched => "dispatched",
            EventKind::Arrived => "arrived",
            EventKind::DoorsOpening => "doors_opening",
            EventKind::DoorsClosed => "doors_closed",
            EventKind::ButtonDisabled => "button_disabled",
            EventKind::ButtonEnabled => "button_enabled",
        }
    }
}

/// One outbound event at a given tick.
///
/// Not every event carries every field: button events have no lift, door
/// events have no direction.  Absent fields become empty CSV cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventRow {
    pub tick:      u64,
    pub event:     EventKind,
    pub lift:      Option<u16>,
    pub floor:     Option<u16>,
    /// `"up"` / `"down"` for button events.
    pub direction: Option<&'static str>,
}
