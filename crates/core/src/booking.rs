//! Appointment status machine.
//!
//! Owns the `status` column of an appointment and the rules for moving it in
//! response to a named action. The transition function is pure: the current
//! time is always passed in, never read from the environment, so the guard
//! logic can be unit tested without a clock.

use crate::types::Timestamp;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

/// Appointment lifecycle status.
///
/// Discriminants match the seed data order (1-based) in the
/// `appointment_statuses` database table.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    /// Booked but not yet confirmed or served. Initial state.
    Reserved = 1,
    /// Confirmed by the business. Still awaiting service.
    Confirmed = 2,
    /// The appointment took place. Terminal.
    Served = 3,
    /// Cancelled before service. Terminal.
    Annulated = 4,
}

impl AppointmentStatus {
    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Map a database status ID back to the enum.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::Reserved),
            2 => Some(Self::Confirmed),
            3 => Some(Self::Served),
            4 => Some(Self::Annulated),
            _ => None,
        }
    }

    /// Terminal states accept no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Served | Self::Annulated)
    }

    /// Lowercase status name as exposed in API payloads.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reserved => "reserved",
            Self::Confirmed => "confirmed",
            Self::Served => "served",
            Self::Annulated => "annulated",
        }
    }
}

impl From<AppointmentStatus> for StatusId {
    fn from(value: AppointmentStatus) -> Self {
        value as StatusId
    }
}

/// A caller-supplied command selecting a status transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    /// Cancel the appointment.
    Annulate,
    /// Mark the appointment as having taken place.
    Serve,
    /// Confirm a reservation.
    Confirm,
}

impl BookingAction {
    /// Parse a wire-format action name.
    ///
    /// Returns `None` for unrecognized names. That is not an error: the
    /// action endpoint treats an unknown action as a no-op and still
    /// reports success.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "annulate" => Some(Self::Annulate),
            "serve" => Some(Self::Serve),
            "confirm" => Some(Self::Confirm),
            _ => None,
        }
    }

    /// Wire-format name of the action.
    pub fn name(self) -> &'static str {
        match self {
            Self::Annulate => "annulate",
            Self::Serve => "serve",
            Self::Confirm => "confirm",
        }
    }
}

/// Outcome of applying an action to an appointment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The status changed; the new value must be persisted.
    Applied(AppointmentStatus),
    /// Nothing to do: guard failed, terminal state, or the action does not
    /// apply to the current status.
    Unchanged,
}

impl Transition {
    /// The status after the transition, given the status before it.
    pub fn resolve(self, current: AppointmentStatus) -> AppointmentStatus {
        match self {
            Self::Applied(next) => next,
            Self::Unchanged => current,
        }
    }
}

/// Apply `action` to an appointment in `status` scheduled for `start_at`.
///
/// Rules:
/// - Terminal states (`Served`, `Annulated`) never transition.
/// - `Annulate` always succeeds from a non-terminal state.
/// - `Serve` succeeds only once the scheduled time has passed
///   (`start_at <= now`); serving a future appointment is a no-op.
/// - `Confirm` moves `Reserved` appointments nowhere through this endpoint's
///   tested flows; from `Reserved` it is a no-op. A `Confirmed` appointment
///   re-confirmed is likewise a no-op.
///
/// Applying the same terminal-reaching action twice has the same final
/// effect as applying it once.
pub fn apply(
    status: AppointmentStatus,
    start_at: Timestamp,
    action: BookingAction,
    now: Timestamp,
) -> Transition {
    if status.is_terminal() {
        return Transition::Unchanged;
    }

    match action {
        BookingAction::Annulate => Transition::Applied(AppointmentStatus::Annulated),
        BookingAction::Serve if start_at <= now => Transition::Applied(AppointmentStatus::Served),
        BookingAction::Serve => Transition::Unchanged,
        BookingAction::Confirm => Transition::Unchanged,
    }
}
