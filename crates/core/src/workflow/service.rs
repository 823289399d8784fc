//! Engagement status workflow.
//!
//! Role-gated state machine over engagement review statuses. The permission
//! check is a pure function of the acting role and the target status; the
//! current status is deliberately not consulted, so managers and partners
//! may move an engagement to any status their role allows.

use uuid::Uuid;

use crate::workflow::error::WorkflowError;
use crate::workflow::types::{Engagement, EngagementRole, EngagementStatus, EngagementType};

/// Stateless service for engagement lifecycle decisions.
///
/// The role is always an explicit parameter, never read from ambient
/// session state, which keeps every check deterministic and unit-testable.
pub struct WorkflowService;

impl WorkflowService {
    /// Returns true if the role may create engagements.
    ///
    /// Engagements are drafted by juniors; reviewers never originate them.
    #[must_use]
    pub fn can_create(role: EngagementRole) -> bool {
        matches!(role, EngagementRole::Junior)
    }

    /// Creates a new engagement in `Draft` on behalf of `role`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::CreationNotAllowed`] for any role other
    /// than `Junior`.
    pub fn create(
        role: EngagementRole,
        client_id: Uuid,
        year: String,
        engagement_type: EngagementType,
    ) -> Result<Engagement, WorkflowError> {
        if !Self::can_create(role) {
            return Err(WorkflowError::CreationNotAllowed { role });
        }
        Ok(Engagement::draft(client_id, year, engagement_type))
    }

    /// Returns true if `role` may set an engagement to `target`.
    ///
    /// Purely a function of role and target status.
    #[must_use]
    pub fn can_transition(role: EngagementRole, target: EngagementStatus) -> bool {
        role.allowed_targets().contains(&target)
    }

    /// Applies a status transition on behalf of `role`.
    ///
    /// On success the engagement's status and `updated_at` are replaced.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::PermissionDenied`] when the role may not
    /// set `target`; the engagement is left untouched.
    pub fn transition(
        engagement: &mut Engagement,
        role: EngagementRole,
        target: EngagementStatus,
    ) -> Result<(), WorkflowError> {
        if !Self::can_transition(role, target) {
            return Err(WorkflowError::PermissionDenied { role, target });
        }
        engagement.status = target;
        engagement.updated_at = chrono::Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    use super::EngagementRole::{Junior, Manager, Partner};
    use super::EngagementStatus::{Approved, Completed, Draft, PendingReview, UnderReview};

    fn engagement() -> Engagement {
        Engagement::draft(
            Uuid::new_v4(),
            "2025".to_string(),
            EngagementType::Statutory,
        )
    }

    #[rstest]
    // Juniors may only submit.
    #[case(Junior, Draft, false)]
    #[case(Junior, PendingReview, true)]
    #[case(Junior, UnderReview, false)]
    #[case(Junior, Approved, false)]
    #[case(Junior, Completed, false)]
    // Managers review and approve but never complete.
    #[case(Manager, Draft, false)]
    #[case(Manager, PendingReview, true)]
    #[case(Manager, UnderReview, true)]
    #[case(Manager, Approved, true)]
    #[case(Manager, Completed, false)]
    // Partners may set everything except Draft.
    #[case(Partner, Draft, false)]
    #[case(Partner, PendingReview, true)]
    #[case(Partner, UnderReview, true)]
    #[case(Partner, Approved, true)]
    #[case(Partner, Completed, true)]
    fn test_permission_matrix(
        #[case] role: EngagementRole,
        #[case] target: EngagementStatus,
        #[case] allowed: bool,
    ) {
        assert_eq!(WorkflowService::can_transition(role, target), allowed);
    }

    #[test]
    fn test_transition_updates_status_and_timestamp() {
        let mut engagement = engagement();
        let created_at = engagement.created_at;

        WorkflowService::transition(&mut engagement, Junior, PendingReview)
            .expect("junior submits a draft");

        assert_eq!(engagement.status, PendingReview);
        assert_eq!(engagement.created_at, created_at);
        assert!(engagement.updated_at >= created_at);
    }

    #[test]
    fn test_denied_transition_leaves_engagement_untouched() {
        let mut engagement = engagement();
        let before = engagement.clone();

        let err = WorkflowService::transition(&mut engagement, Junior, Completed)
            .expect_err("junior cannot complete");

        assert!(matches!(err, WorkflowError::PermissionDenied { .. }));
        assert_eq!(engagement.status, before.status);
        assert_eq!(engagement.updated_at, before.updated_at);
    }

    #[test]
    fn test_permission_check_ignores_current_status() {
        // A partner may re-target even a completed engagement; the check
        // is role and target only.
        let mut engagement = engagement();
        WorkflowService::transition(&mut engagement, Partner, Completed).expect("partner completes");
        WorkflowService::transition(&mut engagement, Manager, UnderReview)
            .expect("manager re-targets regardless of current status");
        assert_eq!(engagement.status, UnderReview);
    }

    #[test]
    fn test_only_juniors_create() {
        assert!(WorkflowService::can_create(Junior));
        assert!(!WorkflowService::can_create(Manager));
        assert!(!WorkflowService::can_create(Partner));

        let engagement =
            WorkflowService::create(Junior, Uuid::new_v4(), "2024".to_string(), EngagementType::Ngo)
                .expect("junior creates");
        assert_eq!(engagement.status, Draft);

        let err = WorkflowService::create(
            Partner,
            Uuid::new_v4(),
            "2024".to_string(),
            EngagementType::Ngo,
        )
        .expect_err("partner cannot create");
        assert!(matches!(err, WorkflowError::CreationNotAllowed { .. }));
    }
}
