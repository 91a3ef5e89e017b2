//! Policy Administration Integration Tests
//!
//! Drives the composition root end to end: registration, login,
//! quoting, policy creation with cross-policy discounting, renewal,
//! cancellation, and removal.

use app_service::{PolicyAdministration, ServiceError};
use core_kernel::UserId;
use domain_party::{InMemoryCredentialStore, PartyError};
use domain_policy::{PolicyError, PolicyKind};
use rust_decimal_macros::dec;
use test_utils::{AutoRiskBuilder, HomeRiskBuilder};

fn service() -> PolicyAdministration {
    PolicyAdministration::new(Box::new(InMemoryCredentialStore::new()))
}

fn service_with_user() -> (PolicyAdministration, UserId) {
    let mut admin = service();
    let account = admin.register("taylor", "hunter2").unwrap();
    (admin, account.id())
}

mod identity_tests {
    use super::*;

    #[test]
    fn test_register_login_roundtrip() {
        let mut admin = service();
        let registered = admin.register("taylor", "hunter2").unwrap();
        let logged_in = admin.login("taylor", "hunter2").unwrap();

        assert_eq!(registered.id(), logged_in.id());
        assert!(admin.list_policies(registered.id()).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_registration_surfaces() {
        let mut admin = service();
        admin.register("taylor", "first").unwrap();

        let err = admin.register("taylor", "second").unwrap_err();
        assert_eq!(
            err,
            ServiceError::Party(PartyError::DuplicateUsername("taylor".to_string()))
        );
    }

    #[test]
    fn test_bad_login_surfaces() {
        let mut admin = service();
        admin.register("taylor", "hunter2").unwrap();

        let err = admin.login("taylor", "wrong").unwrap_err();
        assert_eq!(err, ServiceError::Party(PartyError::AuthenticationFailed));
    }

    #[test]
    fn test_unknown_user_is_rejected() {
        let mut admin = service();
        let ghost = UserId::new();

        let err = admin
            .start_policy(ghost, AutoRiskBuilder::new().build_risk())
            .unwrap_err();
        assert_eq!(err, ServiceError::UnknownUser(ghost));
        assert!(matches!(
            admin.list_policies(ghost),
            Err(ServiceError::UnknownUser(_))
        ));
    }
}

mod quoting_tests {
    use super::*;

    /// Quotes are ownerless, so cross-policy discounts never apply
    #[test]
    fn test_quote_matches_undiscounted_rate() {
        let admin = service();
        let quote = admin.quote(&AutoRiskBuilder::new().build_risk());

        assert_eq!(quote.total.amount(), dec!(862.50));
    }

    /// Quoting persists nothing, even for a registered user
    #[test]
    fn test_quote_is_stateless() {
        let (admin, user) = service_with_user();
        admin.quote(&HomeRiskBuilder::new().build_risk());

        assert!(admin.list_policies(user).unwrap().is_empty());
    }
}

mod creation_tests {
    use super::*;

    #[test]
    fn test_first_policy_gets_no_discount() {
        let (mut admin, user) = service_with_user();
        let policy = admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();

        assert!(policy.is_active());
        assert_eq!(policy.total_premium().unwrap().amount(), dec!(862.50));
    }

    /// An active Home policy earns exactly 0.9x on a subsequent Auto
    /// policy relative to the ownerless quote.
    #[test]
    fn test_cross_policy_discount_against_quote() {
        let (mut admin, user) = service_with_user();
        let auto_risk = AutoRiskBuilder::new().build_risk();
        let quote_total = admin.quote(&auto_risk).total;

        admin
            .start_policy(user, HomeRiskBuilder::new().build_risk())
            .unwrap();
        let auto = admin.start_policy(user, auto_risk).unwrap();

        assert_eq!(
            auto.total_premium().unwrap().amount(),
            quote_total.amount() * dec!(0.9)
        );
    }

    #[test]
    fn test_home_discounts_against_existing_auto() {
        let (mut admin, user) = service_with_user();
        admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();
        let home = admin
            .start_policy(user, HomeRiskBuilder::new().build_risk())
            .unwrap();

        assert_eq!(home.total_premium().unwrap().amount(), dec!(517.50));
    }

    /// A canceled policy no longer counts toward the discount
    #[test]
    fn test_canceled_policy_earns_no_discount() {
        let (mut admin, user) = service_with_user();
        admin
            .start_policy(user, HomeRiskBuilder::new().build_risk())
            .unwrap();
        admin.cancel_policy(user, 0).unwrap();

        let auto = admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();
        assert_eq!(auto.total_premium().unwrap().amount(), dec!(862.50));
    }

    /// A second policy of the same line neither earns nor grants a
    /// discount for that line.
    #[test]
    fn test_same_line_stacking_gets_no_discount() {
        let (mut admin, user) = service_with_user();
        admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();
        let second = admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();

        assert_eq!(second.total_premium().unwrap().amount(), dec!(862.50));
    }

    #[test]
    fn test_listing_preserves_insertion_order() {
        let (mut admin, user) = service_with_user();
        admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();
        admin
            .start_policy(user, HomeRiskBuilder::new().build_risk())
            .unwrap();
        admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();

        let kinds: Vec<PolicyKind> = admin
            .list_policies(user)
            .unwrap()
            .iter()
            .map(|p| p.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![PolicyKind::Auto, PolicyKind::Home, PolicyKind::Auto]
        );
    }
}

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_cancel_is_idempotent_through_the_service() {
        let (mut admin, user) = service_with_user();
        admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();

        admin.cancel_policy(user, 0).unwrap();
        admin.cancel_policy(user, 0).unwrap();

        let policies = admin.list_policies(user).unwrap();
        assert!(!policies[0].is_active());
        assert_eq!(policies.len(), 1);
    }

    #[test]
    fn test_renew_resets_term_without_touching_premium() {
        let (mut admin, user) = service_with_user();
        admin
            .start_policy(user, HomeRiskBuilder::new().build_risk())
            .unwrap();
        let before = admin.list_policies(user).unwrap()[0].clone();

        admin.renew_policy(user, 0).unwrap();

        let after = &admin.list_policies(user).unwrap()[0];
        assert_eq!(after.total_premium(), before.total_premium());
        assert_eq!(
            after.term().end(),
            core_kernel::PolicyTerm::annual(after.term().start()).end()
        );
    }

    #[test]
    fn test_renew_does_not_reactivate_canceled_policy() {
        let (mut admin, user) = service_with_user();
        admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();
        admin.cancel_policy(user, 0).unwrap();
        admin.renew_policy(user, 0).unwrap();

        assert!(!admin.list_policies(user).unwrap()[0].is_active());
    }

    #[test]
    fn test_cancel_and_remove() {
        let (mut admin, user) = service_with_user();
        admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();
        admin
            .start_policy(user, HomeRiskBuilder::new().build_risk())
            .unwrap();

        let removed = admin.cancel_and_remove(user, 0).unwrap();
        assert_eq!(removed.kind(), PolicyKind::Auto);
        assert!(!removed.is_active());

        let remaining = admin.list_policies(user).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].kind(), PolicyKind::Home);
    }

    #[test]
    fn test_out_of_range_selection_surfaces_and_preserves_book() {
        let (mut admin, user) = service_with_user();
        admin
            .start_policy(user, AutoRiskBuilder::new().build_risk())
            .unwrap();

        let err = admin.cancel_and_remove(user, 5).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Policy(PolicyError::IndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(admin.list_policies(user).unwrap().len(), 1);

        let err = admin.renew_policy(user, 1).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Policy(PolicyError::IndexOutOfRange { index: 1, len: 1 })
        );
    }
}
