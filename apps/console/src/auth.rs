//! Account-list credential check used by the console front end.

use async_trait::async_trait;
use client_core::AuthSystem;
use shared::domain::Role;
use tracing::{debug, info};

use crate::config::Account;

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !email.chars().any(char::is_whitespace)
        && !local.is_empty()
        && !host.is_empty()
        && !tld.is_empty()
        && !domain.contains('@')
}

pub struct ConfiguredAuth {
    accounts: Vec<Account>,
}

impl ConfiguredAuth {
    pub fn new(accounts: Vec<Account>) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl AuthSystem for ConfiguredAuth {
    async fn login(&self, email: &str, password: &str, role: &Role) -> bool {
        let email = email.trim();
        if !is_valid_email(email) {
            debug!(email, "rejecting malformed email");
            return false;
        }
        self.accounts.iter().any(|account| {
            account.email.eq_ignore_ascii_case(email)
                && account.password == password
                && account.role == role.as_str()
        })
    }

    async fn logout(&self) {
        info!("auth session ended");
    }
}

#[cfg(test)]
#[path = "tests/auth_tests.rs"]
mod tests;
