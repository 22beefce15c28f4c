use chrono::{DateTime, Utc};

use crate::domain::models::event::{Event, EventType, TicketPricing};

/// Why registration is (or is not) currently possible. The boolean collapses
/// "sold out" and "event passed" into one closed state; the reason only ever
/// shows up in message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EligibilityReason {
    Open,
    SoldOut,
    EventStarted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EligibilityResult {
    pub closed: bool,
    pub reason: EligibilityReason,
}

impl EligibilityResult {
    fn open() -> Self {
        Self {
            closed: false,
            reason: EligibilityReason::Open,
        }
    }

    fn closed(reason: EligibilityReason) -> Self {
        Self {
            closed: true,
            reason,
        }
    }
}

/// Decides whether registration/purchase is currently allowed for `event`.
///
/// The clock is injected so callers (and tests) control "now". Malformed
/// events degrade to permissive defaults instead of erroring: a missing
/// ticket tier or an unrecognized event type leaves registration open.
pub fn evaluate(event: &Event, now: DateTime<Utc>) -> EligibilityResult {
    match event.event_type {
        EventType::PaidLimited | EventType::FreeLimited => {
            let Some(tier) = event.primary_tier() else {
                return EligibilityResult::open();
            };
            // A limited event with no quantity is a schema violation; treat
            // it as sold out rather than selling tickets that may not exist.
            match tier.ticket_quantity {
                Some(quantity) if quantity > 0 => {}
                _ => return EligibilityResult::closed(EligibilityReason::SoldOut),
            }
            if event.start_date_time < now {
                return EligibilityResult::closed(EligibilityReason::EventStarted);
            }
            EligibilityResult::open()
        }
        EventType::FreeUnlimited => {
            if event.start_date_time < now {
                EligibilityResult::closed(EligibilityReason::EventStarted)
            } else {
                EligibilityResult::open()
            }
        }
        // Fail-open, preserving observed behavior for unrecognized types.
        EventType::Unknown => EligibilityResult::open(),
    }
}

/// Human-readable status line shown next to the registration action.
pub fn status_message(event: &Event, result: &EligibilityResult) -> String {
    if result.closed {
        return "Registrations closed".to_string();
    }
    match event.primary_tier() {
        Some(tier) if tier.ticket_price_details == TicketPricing::Paid => {
            match tier.ticket_quantity {
                Some(quantity) => format!(
                    "{} tickets available for ${} each",
                    quantity, tier.ticket_price
                ),
                None => format!("Tickets available for ${} each", tier.ticket_price),
            }
        }
        _ => "Free and open to register".to_string(),
    }
}
