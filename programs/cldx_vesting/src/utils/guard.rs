//! Scoped re-entrancy guard over a persisted `locked` flag.

use anchor_lang::prelude::*;

use crate::error::CldxError;

/// Implemented by instruction account sets whose ledger carries a lock flag.
pub trait ReentrancyLock {
    fn lock_flag(&mut self) -> &mut bool;

    /// Write the guarded account back to its data so a nested invocation
    /// deserializes the current flag.
    fn persist_lock(&self) -> Result<()>;
}

/// Run `body` with the lock held. The flag is stored as set before `body`
/// runs and stored as clear afterwards, whether `body` succeeds or fails; a
/// call that finds it already set fails immediately.
pub fn non_reentrant<A, T, F>(accounts: &mut A, body: F) -> Result<T>
where
    A: ReentrancyLock,
    F: FnOnce(&mut A) -> Result<T>,
{
    let flag = accounts.lock_flag();
    require!(!*flag, CldxError::ReentrantCall);
    *flag = true;
    accounts.persist_lock()?;

    let out = body(accounts);

    *accounts.lock_flag() = false;
    accounts.persist_lock()?;
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;

    #[derive(Default)]
    struct Ledger {
        locked: bool,
        calls: u32,
        stored: RefCell<Vec<bool>>,
    }

    impl ReentrancyLock for Ledger {
        fn lock_flag(&mut self) -> &mut bool {
            &mut self.locked
        }

        fn persist_lock(&self) -> Result<()> {
            self.stored.borrow_mut().push(self.locked);
            Ok(())
        }
    }

    #[test]
    fn releases_lock_after_success_and_error() {
        let mut l = Ledger::default();

        let v = non_reentrant(&mut l, |l| {
            assert!(l.locked);
            l.calls += 1;
            Ok(7u8)
        })
        .unwrap();
        assert_eq!(v, 7);
        assert!(!l.locked);

        let r: Result<()> = non_reentrant(&mut l, |_| err!(CldxError::InsufficientTokens));
        assert!(r.is_err());
        assert!(!l.locked);
    }

    #[test]
    fn nested_entry_is_rejected() {
        let mut l = Ledger::default();
        let r = non_reentrant(&mut l, |l| {
            non_reentrant(l, |inner| {
                inner.calls += 1;
                Ok(())
            })
        });
        assert_eq!(r.unwrap_err(), error!(CldxError::ReentrantCall));
        assert_eq!(l.calls, 0);
        assert!(!l.locked);
    }

    #[test]
    fn flag_is_stored_before_body_and_cleared_after() {
        let mut l = Ledger::default();
        non_reentrant(&mut l, |l| {
            // What a nested invocation would read from account data.
            assert_eq!(l.stored.borrow().last(), Some(&true));
            Ok(())
        })
        .unwrap();
        assert_eq!(*l.stored.borrow(), vec![true, false]);

        let r: Result<()> = non_reentrant(&mut l, |_| err!(CldxError::InsufficientTokens));
        assert!(r.is_err());
        assert_eq!(*l.stored.borrow(), vec![true, false, true, false]);
    }

    #[test]
    fn stored_lock_rejects_fresh_entry() {
        // A second invocation starts from the stored bytes, not this copy.
        let mut l = Ledger::default();
        non_reentrant(&mut l, |outer| {
            let mut nested = Ledger {
                locked: *outer.stored.borrow().last().unwrap(),
                ..Ledger::default()
            };
            let r = non_reentrant(&mut nested, |_| Ok(()));
            assert_eq!(r.unwrap_err(), error!(CldxError::ReentrantCall));
            Ok(())
        })
        .unwrap();
    }
}
