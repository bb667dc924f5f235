//! # Mock Ledger & Testing Guide
//!
//! `MockLedger<L>` hands out a real [`LedgerClient<L>`] whose requests are answered from a
//! queue of scripted expectations instead of a running [`LedgerActor`](crate::LedgerActor).
//! Use it to test the logic *around* a client (reply unpacking, error mapping) without
//! building any ledger state.
//!
//! | | MockLedger | Real actor |
//! |---|---|---|
//! | **State** | none, replies are scripted | real tables and transactions |
//! | **Error injection** | `return_err(..)` | requires arranging the state |
//! | **Use case** | domain client wrappers | ledger rules, full-system flows |
//!
//! ```rust,ignore
//! let mut mock = MockLedger::<CounterLedger>::new();
//! mock.expect_execute()
//!     .return_err(CounterError::OrderNotReady(OrderId(3)));
//!
//! let client = OrderClient::new(mock.client());
//! assert!(client.complete_order(OrderId(3)).await.is_err());
//! mock.verify();
//! ```
//!
//! When the test needs to look at the command that was sent, use [`create_mock_client`]
//! together with [`expect_execute`] / [`expect_query`] and answer by hand.

use crate::client::LedgerClient;
use crate::ledger::Ledger;
use crate::message::{LedgerRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<L: Ledger> {
    Execute {
        response: Result<L::Outcome, L::Error>,
    },
    Query {
        response: Result<L::Answer, L::Error>,
    },
}

/// A mock ledger with expectation tracking.
pub struct MockLedger<L: Ledger> {
    client: LedgerClient<L>,
    expectations: Arc<Mutex<VecDeque<Expectation<L>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<L: Ledger> Default for MockLedger<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Ledger> MockLedger<L> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<LedgerRequest<L>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        LedgerRequest::Execute { respond_to, .. },
                        Some(Expectation::Execute { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        LedgerRequest::Query { respond_to, .. },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (LedgerRequest::Execute { command, .. }, _) => {
                        panic!("Unexpected command or expectation mismatch: {command:?}");
                    }
                    (LedgerRequest::Query { query, .. }, _) => {
                        panic!("Unexpected query or expectation mismatch: {query:?}");
                    }
                }
            }
        });

        Self {
            client: LedgerClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> LedgerClient<L> {
        self.client.clone()
    }

    /// Expects a command.
    pub fn expect_execute(&mut self) -> ExecuteExpectationBuilder<L> {
        ExecuteExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a query.
    pub fn expect_query(&mut self) -> QueryExpectationBuilder<L> {
        QueryExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder for command expectations.
pub struct ExecuteExpectationBuilder<L: Ledger> {
    expectations: Arc<Mutex<VecDeque<Expectation<L>>>>,
}

impl<L: Ledger> ExecuteExpectationBuilder<L> {
    pub fn return_ok(self, outcome: L::Outcome) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Execute {
                response: Ok(outcome),
            });
    }

    pub fn return_err(self, error: L::Error) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Execute {
                response: Err(error),
            });
    }
}

/// Builder for query expectations.
pub struct QueryExpectationBuilder<L: Ledger> {
    expectations: Arc<Mutex<VecDeque<Expectation<L>>>>,
}

impl<L: Ledger> QueryExpectationBuilder<L> {
    pub fn return_ok(self, answer: L::Answer) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query {
                response: Ok(answer),
            });
    }

    pub fn return_err(self, error: L::Error) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Query {
                response: Err(error),
            });
    }
}

/// Creates a client and the raw receiver its requests land on.
pub fn create_mock_client<L: Ledger>(
    buffer_size: usize,
) -> (LedgerClient<L>, mpsc::Receiver<LedgerRequest<L>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (LedgerClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a command.
pub async fn expect_execute<L: Ledger>(
    receiver: &mut mpsc::Receiver<LedgerRequest<L>>,
) -> Option<(L::Command, Response<L::Outcome, L::Error>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Execute {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a query.
pub async fn expect_query<L: Ledger>(
    receiver: &mut mpsc::Receiver<LedgerRequest<L>>,
) -> Option<(L::Query, Response<L::Answer, L::Error>)> {
    match receiver.recv().await {
        Some(LedgerRequest::Query { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}
