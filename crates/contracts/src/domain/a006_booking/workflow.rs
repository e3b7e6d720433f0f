//! Role/status authorization table for the booking action drawer.
//!
//! One data table, version-controlled here, with every cell pinned by the
//! tests below — the drawer, the list page and the wizard all read this
//! module instead of carrying their own copies of the rules. The server
//! enforces the same rules authoritatively; this table only decides what
//! the UI offers.

use crate::domain::a006_booking::roles;
use crate::enums::{ActionType, BookingStatus};

/// Permitted drawer actions for `(role, status)`, in display order.
///
/// Admin always gets the full set. Every other role falls back to
/// remark-only unless the current status names it — annotation is the one
/// action nobody loses. Unknown status codes (server-side drift) also fall
/// back to remark-only.
pub fn action_options(role: &str, status: &str) -> Vec<ActionType> {
    use ActionType::*;

    if role == roles::ADMIN {
        return ActionType::all();
    }

    let Some(status) = BookingStatus::from_code(status) else {
        return vec![AddRemark];
    };

    // (roles allowed beyond remark-only; empty slice = any role, actions)
    let (eligible, actions): (&[&str], Vec<ActionType>) = match status {
        BookingStatus::Open => (&[], vec![UpdateStatus, UpdateAgent, AddRemark]),
        BookingStatus::Verified => (&[roles::VERIFIER], vec![UpdateStatus, UpdateAgent, AddRemark]),
        BookingStatus::RootManager => {
            (&[roles::ROOT_MANAGER], vec![UpdateStatus, UpdateAgent, AddRemark])
        }
        BookingStatus::Phlebo => (
            &[roles::ROOT_MANAGER, roles::PHLEBO],
            vec![UpdateStatus, UpdateAgent, AddRemark],
        ),
        BookingStatus::SampleCollected => (
            &[roles::PHLEBO, roles::ROOT_MANAGER, roles::VERIFIER, roles::REPORT_UPLOADER],
            vec![UpdatePayment, AddRemark],
        ),
        BookingStatus::PaymentCollected => (
            &[roles::REPORT_UPLOADER],
            vec![UpdateStatus, UploadDocument, AddRemark],
        ),
        BookingStatus::ReportUploaded => {
            (&[roles::REPORT_UPLOADER], vec![UpdateAgent, AddRemark])
        }
        BookingStatus::HealthManager => {
            (&[roles::HEALTH_MANAGER], vec![UpdateAgent, AddRemark])
        }
        BookingStatus::Dietitian => (
            &[roles::DIETITIAN],
            vec![UpdateStatus, UploadDocument, AddRemark],
        ),
        BookingStatus::Completed => (&[], vec![AddRemark]),
        BookingStatus::Cancelled => (&[], vec![UpdateStatus, AddRemark]),
    };

    if eligible.is_empty() || eligible.contains(&role) {
        actions
    } else {
        vec![AddRemark]
    }
}

/// Candidate next statuses for `(role, status)`, in display order.
///
/// Directional and status-specific: no status reaches itself, and there is
/// no universal edge outside the Admin override. Admin gets the whole
/// enumeration unconditionally.
pub fn status_options(role: &str, status: &str) -> Vec<BookingStatus> {
    use BookingStatus::*;

    if role == roles::ADMIN {
        return BookingStatus::all();
    }

    let Some(status) = BookingStatus::from_code(status) else {
        return vec![];
    };

    let collector = role == roles::PHLEBO || role == roles::ROOT_MANAGER;

    match status {
        Open if role == roles::VERIFIER => vec![Verified, Cancelled],
        Open => vec![Cancelled],
        Verified => vec![Open, Cancelled],
        Phlebo if collector => vec![SampleCollected, Cancelled],
        SampleCollected if collector => vec![Completed, Cancelled],
        PaymentCollected => vec![ReportUploaded],
        ReportUploaded => vec![Completed, Cancelled],
        Dietitian => vec![Completed],
        Cancelled => vec![Open],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ActionType::*;
    use BookingStatus::*;

    const ALL_ROLES: [&str; 6] = [
        roles::VERIFIER,
        roles::ROOT_MANAGER,
        roles::PHLEBO,
        roles::REPORT_UPLOADER,
        roles::HEALTH_MANAGER,
        roles::DIETITIAN,
    ];

    // Admin override: full action and status sets for every status value,
    // including codes this client has never heard of.
    #[test]
    fn admin_gets_everything_everywhere() {
        for status in BookingStatus::all() {
            assert_eq!(action_options(roles::ADMIN, status.code()), ActionType::all());
            assert_eq!(status_options(roles::ADMIN, status.code()), BookingStatus::all());
        }
        assert_eq!(action_options(roles::ADMIN, "rescheduled"), ActionType::all());
        assert_eq!(status_options(roles::ADMIN, "rescheduled"), BookingStatus::all());
    }

    // Unlisted (role, status) pairs degrade to remark-only, never empty.
    #[test]
    fn default_is_remark_only() {
        assert_eq!(action_options(roles::DIETITIAN, "verified"), vec![AddRemark]);
        assert_eq!(action_options("Team Lead", "phlebo"), vec![AddRemark]);
        assert_eq!(action_options(roles::VERIFIER, "rescheduled"), vec![AddRemark]);
        assert_eq!(action_options("", "open"), vec![UpdateStatus, UpdateAgent, AddRemark]);
    }

    #[test]
    fn open_allows_triage_for_everyone() {
        for role in ALL_ROLES {
            assert_eq!(
                action_options(role, "open"),
                vec![UpdateStatus, UpdateAgent, AddRemark],
                "role {role}"
            );
        }
    }

    #[test]
    fn verifier_verifies_or_cancels_open_bookings() {
        assert_eq!(
            action_options(roles::VERIFIER, "open"),
            vec![UpdateStatus, UpdateAgent, AddRemark]
        );
        assert_eq!(status_options(roles::VERIFIER, "open"), vec![Verified, Cancelled]);
        // Everyone else can only cancel from open.
        assert_eq!(status_options(roles::PHLEBO, "open"), vec![Cancelled]);
    }

    #[test]
    fn verified_belongs_to_the_verifier() {
        assert_eq!(
            action_options(roles::VERIFIER, "verified"),
            vec![UpdateStatus, UpdateAgent, AddRemark]
        );
        for role in [roles::ROOT_MANAGER, roles::PHLEBO, roles::REPORT_UPLOADER] {
            assert_eq!(action_options(role, "verified"), vec![AddRemark], "role {role}");
        }
        // Verified can only fall back to open or cancel; forward motion is
        // the server's call.
        assert_eq!(status_options(roles::VERIFIER, "verified"), vec![Open, Cancelled]);
    }

    #[test]
    fn root_manager_stage_belongs_to_root_manager() {
        assert_eq!(
            action_options(roles::ROOT_MANAGER, "root_manager"),
            vec![UpdateStatus, UpdateAgent, AddRemark]
        );
        assert_eq!(action_options(roles::PHLEBO, "root_manager"), vec![AddRemark]);
    }

    #[test]
    fn phlebo_stage_allows_collectors() {
        for role in [roles::ROOT_MANAGER, roles::PHLEBO] {
            assert_eq!(
                action_options(role, "phlebo"),
                vec![UpdateStatus, UpdateAgent, AddRemark],
                "role {role}"
            );
            assert_eq!(status_options(role, "phlebo"), vec![SampleCollected, Cancelled]);
        }
        assert_eq!(action_options(roles::VERIFIER, "phlebo"), vec![AddRemark]);
        assert_eq!(status_options(roles::VERIFIER, "phlebo"), vec![]);
    }

    // Collectors (Phlebo included) capture payment at this stage.
    #[test]
    fn sample_collected_is_payment_capture_time() {
        for role in [roles::PHLEBO, roles::ROOT_MANAGER, roles::VERIFIER, roles::REPORT_UPLOADER] {
            assert_eq!(
                action_options(role, "sample_collected"),
                vec![UpdatePayment, AddRemark],
                "role {role}"
            );
        }
        assert_eq!(action_options(roles::DIETITIAN, "sample_collected"), vec![AddRemark]);
        // Only collectors may close or cancel from here.
        assert_eq!(
            status_options(roles::PHLEBO, "sample_collected"),
            vec![Completed, Cancelled]
        );
        assert_eq!(status_options(roles::VERIFIER, "sample_collected"), vec![]);
    }

    #[test]
    fn payment_collected_hands_over_to_report_uploader() {
        assert_eq!(
            action_options(roles::REPORT_UPLOADER, "payment_collected"),
            vec![UpdateStatus, UploadDocument, AddRemark]
        );
        assert_eq!(action_options(roles::PHLEBO, "payment_collected"), vec![AddRemark]);
        // The only exit is forward; cancellation is closed at this point.
        for role in ALL_ROLES {
            assert_eq!(
                status_options(role, "payment_collected"),
                vec![ReportUploaded],
                "role {role}"
            );
        }
    }

    #[test]
    fn report_uploaded_allows_reassignment_only() {
        assert_eq!(
            action_options(roles::REPORT_UPLOADER, "report_uploaded"),
            vec![UpdateAgent, AddRemark]
        );
        assert_eq!(action_options(roles::HEALTH_MANAGER, "report_uploaded"), vec![AddRemark]);
        for role in ALL_ROLES {
            assert_eq!(
                status_options(role, "report_uploaded"),
                vec![Completed, Cancelled],
                "role {role}"
            );
        }
    }

    #[test]
    fn health_manager_stage_is_reassignment_only() {
        assert_eq!(
            action_options(roles::HEALTH_MANAGER, "health_manager"),
            vec![UpdateAgent, AddRemark]
        );
        assert_eq!(action_options(roles::DIETITIAN, "health_manager"), vec![AddRemark]);
        // No status edges at all outside the Admin override.
        assert_eq!(status_options(roles::HEALTH_MANAGER, "health_manager"), vec![]);
    }

    #[test]
    fn dietitian_stage_closes_with_a_report() {
        assert_eq!(
            action_options(roles::DIETITIAN, "dietitian"),
            vec![UpdateStatus, UploadDocument, AddRemark]
        );
        assert_eq!(action_options(roles::VERIFIER, "dietitian"), vec![AddRemark]);
        for role in ALL_ROLES {
            assert_eq!(status_options(role, "dietitian"), vec![Completed], "role {role}");
        }
    }

    #[test]
    fn completed_is_annotation_only() {
        for role in ALL_ROLES {
            assert_eq!(action_options(role, "completed"), vec![AddRemark], "role {role}");
            assert_eq!(status_options(role, "completed"), vec![], "role {role}");
        }
    }

    #[test]
    fn cancelled_can_only_reopen() {
        for role in ALL_ROLES {
            assert_eq!(
                action_options(role, "cancelled"),
                vec![UpdateStatus, AddRemark],
                "role {role}"
            );
            assert_eq!(status_options(role, "cancelled"), vec![Open], "role {role}");
        }
    }

    #[test]
    fn no_non_admin_status_reaches_itself() {
        for status in BookingStatus::all() {
            for role in ALL_ROLES {
                assert!(
                    !status_options(role, status.code()).contains(&status),
                    "{role} at {status} offered a self-transition"
                );
            }
        }
    }
}
