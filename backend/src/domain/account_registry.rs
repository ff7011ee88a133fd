//! Account registry service.
//!
//! Implements registration, login and the employee listing on top of an
//! [`AccountRepository`]. Every mutation is a full read-modify-write of the
//! collection, serialised through an async mutex so two requests in this
//! process cannot overwrite each other's accounts. Writers in other processes
//! sharing the same store are not coordinated.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::domain::ports::{
    AccountRepository, EmployeesQuery, LoginError, LoginService, RecordStoreError,
    RegistrationError, RegistrationService,
};
use crate::domain::{
    Account, AuthenticatedAccount, EmployeeSummary, Error, LoginCredentials, Registration, Role,
};

/// Account registry implementing the account-facing driving ports.
pub struct AccountRegistry<R> {
    accounts: Arc<R>,
    write_lock: Mutex<()>,
}

impl<R> AccountRegistry<R> {
    /// Create a registry over the given repository.
    pub fn new(accounts: Arc<R>) -> Self {
        Self {
            accounts,
            write_lock: Mutex::new(()),
        }
    }
}

impl<R> AccountRegistry<R>
where
    R: AccountRepository,
{
    fn map_store_error(err: RecordStoreError) -> Error {
        error!(error = %err, "account store failure");
        Error::internal(format!("account store failure: {err}"))
    }

    async fn load(&self) -> Result<Vec<Account>, Error> {
        self.accounts.load_all().await.map_err(Self::map_store_error)
    }

    /// Apply the uniqueness rules in the order clients have always observed:
    /// accounts are scanned in insertion order and the first one clashing on
    /// email, or on wallet and role, decides the error. The role itself is
    /// validated only after the scan.
    fn check(accounts: &[Account], registration: &Registration) -> Result<Role, RegistrationError> {
        for account in accounts {
            if account.email() == registration.email() {
                return Err(RegistrationError::DuplicateEmail);
            }
            if account.holds_wallet_as(registration.wallet(), registration.role()) {
                return Err(RegistrationError::DuplicateWalletRole {
                    role: account.role(),
                });
            }
        }
        registration
            .role()
            .parse::<Role>()
            .map_err(|_| RegistrationError::InvalidRole)
    }
}

#[async_trait]
impl<R> RegistrationService for AccountRegistry<R>
where
    R: AccountRepository,
{
    async fn register(&self, registration: Registration) -> Result<(), RegistrationError> {
        let _guard = self.write_lock.lock().await;
        let mut accounts = self.load().await?;
        let role = match Self::check(&accounts, &registration) {
            Ok(role) => role,
            Err(rejection) => {
                info!(reason = %rejection, "registration rejected");
                return Err(rejection);
            }
        };

        accounts.push(registration.into_account(role));
        self.accounts
            .replace_all(accounts)
            .await
            .map_err(Self::map_store_error)?;
        info!(%role, "account registered");
        Ok(())
    }
}

#[async_trait]
impl<R> LoginService for AccountRegistry<R>
where
    R: AccountRepository,
{
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AuthenticatedAccount, LoginError> {
        let accounts = self.load().await?;
        let Some(account) = accounts
            .iter()
            .find(|account| account.email() == credentials.email())
        else {
            info!("login rejected: unknown account");
            return Err(LoginError::UserNotFound);
        };

        if !account.password_matches(credentials.password()) {
            info!("login rejected: password mismatch");
            return Err(LoginError::InvalidPassword);
        }

        Ok(AuthenticatedAccount {
            role: account.role(),
            wallet: account.wallet().to_owned(),
        })
    }
}

#[async_trait]
impl<R> EmployeesQuery for AccountRegistry<R>
where
    R: AccountRepository,
{
    async fn list_employees(&self) -> Result<Vec<EmployeeSummary>, Error> {
        let accounts = self.load().await?;
        Ok(accounts
            .iter()
            .filter(|account| account.role() == Role::Employee)
            .map(EmployeeSummary::from)
            .collect())
    }
}

#[cfg(test)]
mod tests;
