//! Step-gating rules for the booking create/edit wizard.
//!
//! Three ordered tabs; create mode walks them forward behind completion
//! gates, edit mode collapses to the review tab once the booking has
//! progressed past intake. Pure functions; the view-model owns the signals.

use crate::enums::BookingStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    Create,
    Edit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    CustomerDetails,
    BookingDetails,
    Review,
}

impl WizardStep {
    pub fn index(&self) -> usize {
        match self {
            WizardStep::CustomerDetails => 0,
            WizardStep::BookingDetails => 1,
            WizardStep::Review => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        match index {
            0 => Some(WizardStep::CustomerDetails),
            1 => Some(WizardStep::BookingDetails),
            2 => Some(WizardStep::Review),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::CustomerDetails => "Customer Details",
            WizardStep::BookingDetails => "Booking Details",
            WizardStep::Review => "Review & Confirm",
        }
    }

    pub fn all() -> Vec<WizardStep> {
        vec![WizardStep::CustomerDetails, WizardStep::BookingDetails, WizardStep::Review]
    }

    pub fn next(&self) -> WizardStep {
        WizardStep::from_index(self.index() + 1).unwrap_or(WizardStep::Review)
    }

    pub fn back(&self) -> WizardStep {
        match self.index().checked_sub(1) {
            Some(i) => WizardStep::from_index(i).unwrap_or(WizardStep::CustomerDetails),
            None => WizardStep::CustomerDetails,
        }
    }
}

/// Once a booking has moved past intake, the full edit surface closes and
/// only the review tab (discount adjustment + confirm) stays reachable.
pub fn is_locked_for_full_edit(status: &str) -> bool {
    matches!(
        BookingStatus::from_code(status),
        Some(
            BookingStatus::SampleCollected
                | BookingStatus::PaymentCollected
                | BookingStatus::ReportUploaded
                | BookingStatus::HealthManager
                | BookingStatus::Dietitian
                | BookingStatus::Completed
                | BookingStatus::Cancelled
        )
    )
}

/// Where the wizard lands when it opens.
pub fn initial_step(mode: WizardMode, status: &str) -> WizardStep {
    match mode {
        WizardMode::Create => WizardStep::CustomerDetails,
        WizardMode::Edit if is_locked_for_full_edit(status) => WizardStep::Review,
        WizardMode::Edit => WizardStep::CustomerDetails,
    }
}

/// Whether a tab button is navigable at all in the current mode/status.
pub fn can_open_step(mode: WizardMode, status: &str, step: WizardStep) -> bool {
    match mode {
        WizardMode::Create => true,
        WizardMode::Edit => !is_locked_for_full_edit(status) || step == WizardStep::Review,
    }
}

/// Forward gate for the "Continue" button of each step.
pub fn can_continue(
    step: WizardStep,
    has_customer: bool,
    has_address: bool,
    item_count: usize,
    has_date: bool,
    has_slot: bool,
) -> bool {
    match step {
        WizardStep::CustomerDetails => has_customer && has_address,
        WizardStep::BookingDetails => item_count > 0 && has_date && has_slot,
        WizardStep::Review => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_walk_in_order() {
        assert_eq!(WizardStep::CustomerDetails.next(), WizardStep::BookingDetails);
        assert_eq!(WizardStep::BookingDetails.next(), WizardStep::Review);
        assert_eq!(WizardStep::Review.next(), WizardStep::Review);
        assert_eq!(WizardStep::Review.back(), WizardStep::BookingDetails);
        assert_eq!(WizardStep::CustomerDetails.back(), WizardStep::CustomerDetails);
    }

    #[test]
    fn lock_set_matches_post_intake_statuses() {
        for status in [
            "sample_collected",
            "payment_collected",
            "report_uploaded",
            "health_manager",
            "dietitian",
            "completed",
            "cancelled",
        ] {
            assert!(is_locked_for_full_edit(status), "{status}");
        }
        for status in ["open", "verified", "root_manager", "phlebo", "unknown_code"] {
            assert!(!is_locked_for_full_edit(status), "{status}");
        }
    }

    #[test]
    fn locked_edit_opens_on_review_and_stays_there() {
        assert_eq!(initial_step(WizardMode::Edit, "sample_collected"), WizardStep::Review);
        assert!(!can_open_step(WizardMode::Edit, "sample_collected", WizardStep::CustomerDetails));
        assert!(!can_open_step(WizardMode::Edit, "completed", WizardStep::BookingDetails));
        assert!(can_open_step(WizardMode::Edit, "completed", WizardStep::Review));
    }

    #[test]
    fn unlocked_edit_and_create_navigate_freely() {
        assert_eq!(initial_step(WizardMode::Create, ""), WizardStep::CustomerDetails);
        assert_eq!(initial_step(WizardMode::Edit, "open"), WizardStep::CustomerDetails);
        for step in WizardStep::all() {
            assert!(can_open_step(WizardMode::Create, "", step));
            assert!(can_open_step(WizardMode::Edit, "verified", step));
        }
    }

    #[test]
    fn customer_step_needs_customer_and_address() {
        assert!(!can_continue(WizardStep::CustomerDetails, false, false, 0, false, false));
        assert!(!can_continue(WizardStep::CustomerDetails, true, false, 0, false, false));
        assert!(can_continue(WizardStep::CustomerDetails, true, true, 0, false, false));
    }

    #[test]
    fn details_step_needs_items_date_and_slot() {
        assert!(!can_continue(WizardStep::BookingDetails, true, true, 0, true, true));
        assert!(!can_continue(WizardStep::BookingDetails, true, true, 2, false, true));
        assert!(!can_continue(WizardStep::BookingDetails, true, true, 2, true, false));
        assert!(can_continue(WizardStep::BookingDetails, true, true, 1, true, true));
    }
}
