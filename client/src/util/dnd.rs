//! Drag data transfer glue between DOM drag events and board payloads.
//!
//! Only the card's payload text crosses the browser boundary; decoding and
//! validation happen in `board::drag` against the current board.

use board::DragPayload;
#[cfg(feature = "csr")]
use board::drag::DRAG_FORMAT;
use leptos::ev::DragEvent;

/// Store `payload` on the event's data transfer as a move operation.
pub fn write_payload(ev: &DragEvent, payload: &DragPayload) {
    #[cfg(feature = "csr")]
    {
        let Some(transfer) = ev.data_transfer() else {
            log::warn!("dragstart without data transfer for case {}", payload.id);
            return;
        };
        transfer.set_effect_allowed("move");
        if transfer.set_data(DRAG_FORMAT, &payload.encode()).is_err() {
            log::warn!("could not attach drag payload for case {}", payload.id);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (ev, payload);
    }
}

/// Raw payload text carried by a drop, empty when the drag came from
/// somewhere else.
pub fn read_payload(ev: &DragEvent) -> String {
    #[cfg(feature = "csr")]
    {
        ev.data_transfer()
            .and_then(|transfer| transfer.get_data(DRAG_FORMAT).ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        String::new()
    }
}

/// Mark the column as a valid move target for the dragged data.
pub fn allow_move(ev: &DragEvent) {
    ev.prevent_default();
    #[cfg(feature = "csr")]
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_drop_effect("move");
    }
}
