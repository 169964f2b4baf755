//! Shared helpers for the crate's test modules

use async_std::channel::{unbounded, Receiver};

use crate::database::{Database, MemoryDb};
use crate::models::OtpRegistry;
use crate::{Eduflux, EdufluxEvent};

/// Eduflux state over a seeded in-memory store, with the event
/// channel attached so tests can observe issued passcodes
pub async fn for_test() -> (Eduflux, Receiver<EdufluxEvent>) {
    let (sender, receiver) = unbounded();

    (
        Eduflux {
            config: Default::default(),
            database: Database::Memory(MemoryDb::seeded().expect("seeded store")),
            event_channel: Some(sender),
        },
        receiver,
    )
}

/// Drain the event channel and return the last passcode issued to the
/// given registry
pub fn issued_code(receiver: &Receiver<EdufluxEvent>, registry: OtpRegistry) -> String {
    let mut found = None;

    while let Ok(event) = receiver.try_recv() {
        if let EdufluxEvent::OtpIssued {
            registry: issued,
            code,
            ..
        } = event
        {
            if issued == registry {
                found = Some(code);
            }
        }
    }

    found.expect("an OtpIssued event")
}
