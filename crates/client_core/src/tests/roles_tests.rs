use super::*;

fn ghost() -> Role {
    Role::Unrecognized("ghost".into())
}

#[test]
fn ranks_follow_fixed_hierarchy() {
    assert_eq!(rank_of(&Role::Citizen), 1);
    assert_eq!(rank_of(&Role::Worker), 2);
    assert_eq!(rank_of(&Role::GreenChampion), 2);
    assert_eq!(rank_of(&Role::Admin), 3);
    assert_eq!(rank_of(&Role::Superadmin), 4);
    assert_eq!(rank_of(&ghost()), 0);
}

#[test]
fn every_known_role_satisfies_itself() {
    for role in Role::KNOWN {
        assert!(has_permission(&role, &role), "{role} should satisfy itself");
    }
}

#[test]
fn permission_matches_rank_comparison_for_known_roles() {
    for actual in Role::KNOWN {
        for required in Role::KNOWN {
            assert_eq!(
                has_permission(&actual, &required),
                rank_of(&actual) >= rank_of(&required),
                "{actual} vs {required}"
            );
        }
    }
}

#[test]
fn worker_and_green_champion_satisfy_each_other() {
    assert!(has_permission(&Role::Worker, &Role::GreenChampion));
    assert!(has_permission(&Role::GreenChampion, &Role::Worker));
}

#[test]
fn unrecognized_required_role_is_always_denied() {
    for actual in Role::KNOWN {
        assert!(!has_permission(&actual, &ghost()));
    }
    assert!(!has_permission(&ghost(), &ghost()));
}

#[test]
fn unrecognized_actual_role_satisfies_nothing_known() {
    for required in Role::KNOWN {
        assert!(!has_permission(&ghost(), &required));
    }
}

#[test]
fn citizen_cannot_reach_admin_actions() {
    assert!(!has_permission(&Role::Citizen, &Role::Admin));
    assert!(has_permission(&Role::Superadmin, &Role::Admin));
}
