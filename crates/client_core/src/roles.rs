//! Static role ranking and the permission predicate every gated action uses.

use shared::domain::Role;

/// Rank given to a required role nobody can satisfy.
pub const UNSATISFIABLE_RANK: u8 = 99;

/// Rank of a role the hierarchy does not know. Lowest possible.
pub const UNRANKED: u8 = 0;

pub fn rank_of(role: &Role) -> u8 {
    match role {
        Role::Citizen => 1,
        Role::Worker | Role::GreenChampion => 2,
        Role::Admin => 3,
        Role::Superadmin => 4,
        Role::Unrecognized(_) => UNRANKED,
    }
}

fn required_rank(role: &Role) -> u8 {
    match role {
        Role::Unrecognized(_) => UNSATISFIABLE_RANK,
        known => rank_of(known),
    }
}

/// Whether `actual` may perform an action gated on `required`.
///
/// An unrecognized actual role ranks lowest; an unrecognized required role
/// can never be satisfied.
pub fn has_permission(actual: &Role, required: &Role) -> bool {
    rank_of(actual) >= required_rank(required)
}

#[cfg(test)]
#[path = "tests/roles_tests.rs"]
mod tests;
