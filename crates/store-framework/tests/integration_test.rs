use store_framework::{Reducer, Store, StoreError};

// --- Test Reducer ---

#[derive(Clone, Debug, PartialEq)]
struct Account {
    owner: String,
    balance: i64,
}

#[derive(Debug)]
enum AccountAction {
    Deposit(i64),
    Withdraw(i64),
    Rename(String),
}

#[derive(Debug, thiserror::Error)]
enum AccountRejection {
    #[error("amount must be positive, got {0}")]
    NonPositive(i64),
    #[error("insufficient funds: requested {requested}, available {available}")]
    Insufficient { requested: i64, available: i64 },
}

struct Ledger;

impl Reducer for Ledger {
    type State = Account;
    type Action = AccountAction;
    type Rejection = AccountRejection;

    fn reduce(state: &Account, action: AccountAction) -> Result<Account, AccountRejection> {
        let mut next = state.clone();
        match action {
            AccountAction::Deposit(amount) if amount <= 0 => {
                return Err(AccountRejection::NonPositive(amount))
            }
            AccountAction::Deposit(amount) => next.balance += amount,
            AccountAction::Withdraw(amount) if amount > state.balance => {
                return Err(AccountRejection::Insufficient {
                    requested: amount,
                    available: state.balance,
                })
            }
            AccountAction::Withdraw(amount) => next.balance -= amount,
            AccountAction::Rename(owner) => next.owner = owner,
        }
        Ok(next)
    }
}

fn alice() -> Account {
    Account {
        owner: "Alice".into(),
        balance: 100,
    }
}

// --- Tests ---

#[test]
fn test_store_full_lifecycle() {
    let mut store = Store::<Ledger>::new(alice());

    // 1. Apply
    assert_eq!(store.dispatch(AccountAction::Deposit(50)).balance, 150);

    // 2. Rejected action leaves state alone
    assert_eq!(store.dispatch(AccountAction::Withdraw(1_000)).balance, 150);
    assert_eq!(store.version(), 1);

    // 3. try_dispatch surfaces the reason
    let err = store.try_dispatch(AccountAction::Deposit(-5)).unwrap_err();
    assert_eq!(err.to_string(), "amount must be positive, got -5");

    // 4. Rename
    store.dispatch(AccountAction::Rename("Bob".into()));
    assert_eq!(
        store.state(),
        &Account {
            owner: "Bob".into(),
            balance: 150
        }
    );
    assert_eq!(store.version(), 2);
}

#[tokio::test]
async fn test_subscription_waits_for_next_transition() {
    let mut store = Store::<Ledger>::new(alice());
    let mut view = store.subscribe();

    store.dispatch(AccountAction::Withdraw(30));
    let seen = view.changed().await.unwrap();
    assert_eq!(seen.balance, 70);
    assert!(!view.has_changed());
}

#[tokio::test]
async fn test_subscription_coalesces_and_reports_close() {
    let mut store = Store::<Ledger>::new(alice());
    let mut view = store.subscribe();

    store.dispatch(AccountAction::Deposit(1));
    store.dispatch(AccountAction::Deposit(2));
    assert_eq!(view.take_change().map(|a| a.balance), Some(103));

    drop(store);
    assert_eq!(view.changed().await, Err(StoreError::Closed));
    assert_eq!(view.current().balance, 103);
}

#[test]
fn test_unchanged_result_is_not_published() {
    let mut store = Store::<Ledger>::new(alice());
    let view = store.subscribe();

    store.dispatch(AccountAction::Rename("Alice".into()));
    assert_eq!(store.version(), 0);
    assert!(!view.has_changed());
}
