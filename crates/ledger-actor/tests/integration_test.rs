use ledger_actor::mock::MockLedger;
use ledger_actor::{FrameworkError, Ledger, LedgerActor, Record, Table, Transactional};

// --- Test Ledger ---

#[derive(Clone, Debug, PartialEq)]
struct Account {
    id: u32,
    balance: i64,
}

impl Record for Account {
    type Id = u32;
    fn id(&self) -> u32 {
        self.id
    }
}

#[derive(Default)]
struct Bank {
    accounts: Table<Account>,
}

impl Transactional for Bank {
    fn begin(&mut self) {
        self.accounts.begin();
    }
    fn commit(&mut self) {
        self.accounts.commit();
    }
    fn rollback(&mut self) {
        self.accounts.rollback();
    }
}

#[derive(Debug)]
enum BankCommand {
    Open(i64),
    Transfer { from: u32, to: u32, amount: i64 },
}

#[derive(Debug, PartialEq)]
enum BankOutcome {
    Opened(u32),
    Transferred,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum BankError {
    #[error("no account {0}")]
    NoAccount(u32),
    #[error("overdrawn")]
    Overdrawn,
    #[error(transparent)]
    Framework(#[from] FrameworkError),
}

impl Ledger for Bank {
    type Command = BankCommand;
    type Outcome = BankOutcome;
    type Query = u32;
    type Answer = i64;
    type Context = i64; // overdraft limit
    type Error = BankError;

    fn execute(&mut self, command: BankCommand, limit: &i64) -> Result<BankOutcome, BankError> {
        match command {
            BankCommand::Open(balance) => Ok(BankOutcome::Opened(
                self.accounts.insert_with(|id| Account { id, balance }),
            )),
            // Debits first and checks afterwards, so a rejection relies on rollback.
            BankCommand::Transfer { from, to, amount } => {
                let left = self
                    .accounts
                    .update(from, |a| {
                        a.balance -= amount;
                        a.balance
                    })
                    .ok_or(BankError::NoAccount(from))?;
                self.accounts
                    .update(to, |a| a.balance += amount)
                    .ok_or(BankError::NoAccount(to))?;
                if left < -limit {
                    return Err(BankError::Overdrawn);
                }
                Ok(BankOutcome::Transferred)
            }
        }
    }

    fn query(&self, id: u32, _: &i64) -> Result<i64, BankError> {
        self.accounts
            .get(id)
            .map(|a| a.balance)
            .ok_or(BankError::NoAccount(id))
    }
}

// --- Tests ---

#[tokio::test]
async fn test_commands_commit_and_failures_roll_back() {
    let (actor, client) = LedgerActor::new(10, Bank::default());
    let handle = tokio::spawn(actor.run(0));

    let BankOutcome::Opened(alice) = client.execute(BankCommand::Open(100)).await.unwrap() else {
        panic!("expected Opened");
    };
    let BankOutcome::Opened(bob) = client.execute(BankCommand::Open(0)).await.unwrap() else {
        panic!("expected Opened");
    };

    let ok = client
        .execute(BankCommand::Transfer {
            from: alice,
            to: bob,
            amount: 60,
        })
        .await;
    assert_eq!(ok, Ok(BankOutcome::Transferred));

    let overdrawn = client
        .execute(BankCommand::Transfer {
            from: alice,
            to: bob,
            amount: 60,
        })
        .await;
    assert_eq!(overdrawn, Err(BankError::Overdrawn));
    assert_eq!(client.query(alice).await, Ok(40));
    assert_eq!(client.query(bob).await, Ok(60));

    // Debit applied, credit target missing: both sides must be undone.
    let missing = client
        .execute(BankCommand::Transfer {
            from: alice,
            to: 99,
            amount: 10,
        })
        .await;
    assert_eq!(missing, Err(BankError::NoAccount(99)));
    assert_eq!(client.query(alice).await, Ok(40));

    drop(client);
    let bank = handle.await.unwrap();
    assert_eq!(bank.accounts.len(), 2);
    assert!(!bank.accounts.in_transaction());
}

#[tokio::test]
async fn test_concurrent_transfers_never_overdraw() {
    let (actor, client) = LedgerActor::new(4, Bank::default());
    tokio::spawn(actor.run(0));

    client.execute(BankCommand::Open(50)).await.unwrap();
    client.execute(BankCommand::Open(0)).await.unwrap();

    let mut handles = vec![];
    for _ in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .execute(BankCommand::Transfer {
                    from: 1,
                    to: 2,
                    amount: 10,
                })
                .await
        }));
    }

    let mut ok = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            ok += 1;
        }
    }

    assert_eq!(ok, 5);
    assert_eq!(client.query(1).await, Ok(0));
    assert_eq!(client.query(2).await, Ok(50));
}

#[tokio::test]
async fn test_closed_actor_surfaces_as_ledger_error() {
    let (actor, client) = LedgerActor::new(1, Bank::default());
    drop(actor);

    assert!(client.is_closed());
    assert_eq!(
        client.query(1).await,
        Err(BankError::Framework(FrameworkError::ActorClosed))
    );
}

#[tokio::test]
async fn test_mock_ledger_replays_expectations() {
    let mut mock = MockLedger::<Bank>::new();
    mock.expect_execute().return_ok(BankOutcome::Opened(7));
    mock.expect_query().return_err(BankError::NoAccount(8));

    let client = mock.client();
    assert_eq!(
        client.execute(BankCommand::Open(1)).await,
        Ok(BankOutcome::Opened(7))
    );
    assert_eq!(client.query(8).await, Err(BankError::NoAccount(8)));

    mock.verify();
}
