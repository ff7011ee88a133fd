//! Unit coverage for the account registry service.

use std::sync::Mutex as StdMutex;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockAccountRepository;
use rstest::{fixture, rstest};

/// Minimal in-memory repository recording every write.
#[derive(Default)]
struct MemoryAccounts {
    accounts: StdMutex<Vec<Account>>,
    writes: StdMutex<usize>,
}

impl MemoryAccounts {
    fn snapshot(&self) -> Vec<Account> {
        self.accounts.lock().expect("accounts lock").clone()
    }

    fn writes(&self) -> usize {
        *self.writes.lock().expect("writes lock")
    }
}

#[async_trait]
impl AccountRepository for MemoryAccounts {
    async fn load_all(&self) -> Result<Vec<Account>, RecordStoreError> {
        Ok(self.snapshot())
    }

    async fn replace_all(&self, accounts: Vec<Account>) -> Result<(), RecordStoreError> {
        *self.accounts.lock().expect("accounts lock") = accounts;
        *self.writes.lock().expect("writes lock") += 1;
        Ok(())
    }
}

#[fixture]
fn store() -> Arc<MemoryAccounts> {
    Arc::new(MemoryAccounts::default())
}

fn registry(store: &Arc<MemoryAccounts>) -> AccountRegistry<MemoryAccounts> {
    AccountRegistry::new(Arc::clone(store))
}

async fn register(
    registry: &AccountRegistry<MemoryAccounts>,
    email: &str,
    password: &str,
    role: &str,
    wallet: &str,
) -> Result<(), RegistrationError> {
    registry
        .register(Registration::new(email, password, role, wallet))
        .await
}

#[rstest]
#[tokio::test]
async fn registration_appends_and_persists(store: Arc<MemoryAccounts>) {
    let registry = registry(&store);
    register(&registry, "a@x.com", "pw1", "employee", "0xAAA")
        .await
        .expect("first registration succeeds");

    assert_eq!(
        store.snapshot(),
        vec![Account::new("a@x.com", "pw1", Role::Employee, "0xAAA")]
    );
    assert_eq!(store.writes(), 1);
}

#[rstest]
#[case("pw2", "admin", "0xBBB")]
#[case("pw1", "employee", "0xAAA")]
#[case("other", "manager", "0xCCC")]
#[tokio::test]
async fn duplicate_email_wins_regardless_of_other_fields(
    store: Arc<MemoryAccounts>,
    #[case] password: &str,
    #[case] role: &str,
    #[case] wallet: &str,
) {
    let registry = registry(&store);
    register(&registry, "a@x.com", "pw1", "employee", "0xAAA")
        .await
        .expect("seed account");

    let result = register(&registry, "a@x.com", password, role, wallet).await;
    assert_eq!(result, Err(RegistrationError::DuplicateEmail));
    assert_eq!(store.snapshot().len(), 1);
    assert_eq!(store.writes(), 1);
}

#[rstest]
#[tokio::test]
async fn wallet_cannot_be_reused_for_the_same_role(store: Arc<MemoryAccounts>) {
    let registry = registry(&store);
    register(&registry, "a@x.com", "pw1", "employee", "0xAAA")
        .await
        .expect("seed account");

    let result = register(&registry, "b@x.com", "pw2", "employee", "0xAAA").await;
    assert_eq!(
        result,
        Err(RegistrationError::DuplicateWalletRole {
            role: Role::Employee
        })
    );
    assert_eq!(
        result.map_err(|err| err.to_string()),
        Err("This wallet already has a employee account".to_owned())
    );
}

#[rstest]
#[tokio::test]
async fn wallet_can_be_reused_for_a_different_role(store: Arc<MemoryAccounts>) {
    let registry = registry(&store);
    register(&registry, "a@x.com", "pw1", "employee", "0xAAA")
        .await
        .expect("seed account");

    register(&registry, "boss@x.com", "pw2", "admin", "0xAAA")
        .await
        .expect("same wallet under another role is accepted");
    assert_eq!(store.snapshot().len(), 2);
}

#[rstest]
#[case("manager")]
#[case("Admin")]
#[case("")]
#[tokio::test]
async fn unknown_roles_are_rejected_without_persisting(
    store: Arc<MemoryAccounts>,
    #[case] role: &str,
) {
    let registry = registry(&store);
    let result = register(&registry, "a@x.com", "pw1", role, "0xAAA").await;
    assert_eq!(result, Err(RegistrationError::InvalidRole));
    assert!(store.snapshot().is_empty());
    assert_eq!(store.writes(), 0);
}

#[rstest]
#[tokio::test]
async fn email_matching_is_case_sensitive(store: Arc<MemoryAccounts>) {
    // Known defect: emails differing only in case are distinct accounts.
    let registry = registry(&store);
    register(&registry, "A@x.com", "pw1", "employee", "0xAAA")
        .await
        .expect("seed account");
    register(&registry, "a@x.com", "pw1", "admin", "0xBBB")
        .await
        .expect("case-variant email is a different account");
    assert_eq!(store.snapshot().len(), 2);
}

#[rstest]
#[tokio::test]
async fn login_returns_stored_role_and_wallet(store: Arc<MemoryAccounts>) {
    let registry = registry(&store);
    register(&registry, "a@x.com", "pw1", "employee", "0xAAA")
        .await
        .expect("seed account");

    let account = registry
        .authenticate(&LoginCredentials::new("a@x.com", "pw1"))
        .await
        .expect("valid credentials");
    assert_eq!(
        account,
        AuthenticatedAccount {
            role: Role::Employee,
            wallet: "0xAAA".to_owned(),
        }
    );
}

#[rstest]
#[case("a@x.com", "wrong", LoginError::InvalidPassword)]
#[case("a@x.com", "PW1", LoginError::InvalidPassword)]
#[case("nobody@x.com", "pw1", LoginError::UserNotFound)]
#[case("A@x.com", "pw1", LoginError::UserNotFound)]
#[tokio::test]
async fn login_failures_are_distinguished(
    store: Arc<MemoryAccounts>,
    #[case] email: &str,
    #[case] password: &str,
    #[case] expected: LoginError,
) {
    let registry = registry(&store);
    register(&registry, "a@x.com", "pw1", "employee", "0xAAA")
        .await
        .expect("seed account");

    let result = registry
        .authenticate(&LoginCredentials::new(email, password))
        .await;
    assert_eq!(result, Err(expected));
}

#[rstest]
#[tokio::test]
async fn employee_listing_excludes_admins(store: Arc<MemoryAccounts>) {
    let registry = registry(&store);
    for (email, role, wallet) in [
        ("e1@x.com", "employee", "0x1"),
        ("boss@x.com", "admin", "0x1"),
        ("e2@x.com", "employee", "0x2"),
    ] {
        register(&registry, email, "pw", role, wallet)
            .await
            .expect("seed account");
    }

    let employees = registry.list_employees().await.expect("listing");
    assert_eq!(
        employees,
        vec![
            EmployeeSummary {
                email: "e1@x.com".to_owned(),
                wallet: "0x1".to_owned(),
            },
            EmployeeSummary {
                email: "e2@x.com".to_owned(),
                wallet: "0x2".to_owned(),
            },
        ]
    );
}

#[rstest]
#[tokio::test]
async fn concurrent_registrations_do_not_lose_accounts(store: Arc<MemoryAccounts>) {
    let registry = Arc::new(registry(&store));
    let tasks = (0..16).map(|index| {
        let registry = Arc::clone(&registry);
        tokio::spawn(async move {
            registry
                .register(Registration::new(
                    format!("user{index}@x.com"),
                    "pw",
                    "employee",
                    format!("0x{index}"),
                ))
                .await
        })
    });
    for task in tasks.collect::<Vec<_>>() {
        task.await.expect("task joins").expect("registration succeeds");
    }
    assert_eq!(store.snapshot().len(), 16);
}

#[rstest]
#[tokio::test]
async fn storage_failures_surface_as_internal_errors() {
    let mut repo = MockAccountRepository::new();
    repo.expect_load_all()
        .times(1)
        .return_once(|| Err(RecordStoreError::io("users.json", "permission denied")));
    repo.expect_replace_all().never();
    let registry = AccountRegistry::new(Arc::new(repo));

    let result = registry
        .register(Registration::new("a@x.com", "pw1", "employee", "0xAAA"))
        .await;
    match result {
        Err(RegistrationError::Internal(err)) => {
            assert_eq!(err.code(), ErrorCode::InternalError);
            assert!(err.message().contains("permission denied"));
        }
        other => panic!("expected internal error, got {other:?}"),
    }
}

#[rstest]
#[tokio::test]
async fn failed_writes_are_reported() {
    let mut repo = MockAccountRepository::new();
    repo.expect_load_all().times(1).return_once(|| Ok(Vec::new()));
    repo.expect_replace_all()
        .times(1)
        .return_once(|_| Err(RecordStoreError::io("users.json", "disk full")));
    let registry = AccountRegistry::new(Arc::new(repo));

    let result = registry
        .register(Registration::new("a@x.com", "pw1", "employee", "0xAAA"))
        .await;
    assert!(matches!(result, Err(RegistrationError::Internal(_))));
}
