//! Generic CRUD repository over one keyed record collection.

use std::{marker::PhantomData, sync::Arc};

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use pocketmint_domain::{
    Expense, ExpensePatch, Identifiable, Investment, InvestmentPatch, NewExpense, NewInvestment,
    NewReminder, Reminder, ReminderPatch,
};

use crate::{
    store::{self, KeyValueStore},
    CoreError,
};

/// Where newly created records land in the stored sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Head,
    Tail,
}

/// A record type that lives in a keyed collection of the store.
pub trait CollectionRecord: Identifiable + Clone + Serialize + DeserializeOwned {
    /// Input shape for creation: the record without its identifier.
    type Input;
    /// Partial update with every field optional except the identifier.
    type Patch;
    /// Storage key of the record's collection.
    const COLLECTION: &'static str;
    const PLACEMENT: Placement;

    /// Builds a record from its input, assigning a fresh identifier.
    fn create(input: Self::Input) -> Self;
    /// Merges a patch over the record; the identifier stays untouched.
    fn apply(&mut self, patch: Self::Patch);
}

impl CollectionRecord for Expense {
    type Input = NewExpense;
    type Patch = ExpensePatch;
    const COLLECTION: &'static str = "expenses";
    // Ad-hoc log: newest entries go first.
    const PLACEMENT: Placement = Placement::Head;

    fn create(input: NewExpense) -> Self {
        Expense::create(input)
    }

    fn apply(&mut self, patch: ExpensePatch) {
        Expense::apply(self, patch);
    }
}

impl CollectionRecord for Reminder {
    type Input = NewReminder;
    type Patch = ReminderPatch;
    const COLLECTION: &'static str = "reminders";
    const PLACEMENT: Placement = Placement::Tail;

    fn create(input: NewReminder) -> Self {
        Reminder::create(input)
    }

    fn apply(&mut self, patch: ReminderPatch) {
        Reminder::apply(self, patch);
    }
}

impl CollectionRecord for Investment {
    type Input = NewInvestment;
    type Patch = InvestmentPatch;
    const COLLECTION: &'static str = "investments";
    const PLACEMENT: Placement = Placement::Head;

    fn create(input: NewInvestment) -> Self {
        Investment::create(input)
    }

    fn apply(&mut self, patch: InvestmentPatch) {
        Investment::apply(self, patch);
    }
}

/// CRUD operations over one record collection, read-modify-write against a
/// shared [`KeyValueStore`]. Construct one per record type at startup and
/// hand it to consumers; repositories hold no state of their own.
///
/// The repository performs no input validation; callers vet user input
/// before it reaches this layer.
pub struct Repository<T, S> {
    store: Arc<S>,
    _record: PhantomData<T>,
}

pub type ExpenseRepository<S> = Repository<Expense, S>;
pub type ReminderRepository<S> = Repository<Reminder, S>;
pub type InvestmentRepository<S> = Repository<Investment, S>;

impl<T, S> Repository<T, S>
where
    T: CollectionRecord,
    S: KeyValueStore,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Creates a record from `input`, persists the grown collection, and
    /// returns the stored record. A persistence failure surfaces as `Err`
    /// so user-initiated flows can report it.
    pub fn create(&self, input: T::Input) -> Result<T, CoreError> {
        let record = T::create(input);
        let mut records = self.all();
        match T::PLACEMENT {
            Placement::Head => records.insert(0, record.clone()),
            Placement::Tail => records.push(record.clone()),
        }
        store::write_collection(self.store.as_ref(), T::COLLECTION, &records)?;
        Ok(record)
    }

    /// Returns the stored collection verbatim, empty if never initialized.
    pub fn all(&self) -> Vec<T> {
        store::read_collection(self.store.as_ref(), T::COLLECTION)
    }

    /// Finds a record by identifier.
    pub fn find(&self, id: Uuid) -> Option<T> {
        self.all().into_iter().find(|record| record.id() == id)
    }

    /// Merges `patch` over the record with `id` and writes the collection
    /// back. A missing identifier is reported as
    /// [`CoreError::RecordNotFound`], distinct from storage failures.
    pub fn update(&self, id: Uuid, patch: T::Patch) -> Result<T, CoreError> {
        let mut records = self.all();
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or(CoreError::RecordNotFound(id))?;
        record.apply(patch);
        let updated = record.clone();
        store::write_collection(self.store.as_ref(), T::COLLECTION, &records)?;
        Ok(updated)
    }

    /// Removes the record with `id`. Deleting an absent identifier is a
    /// no-op, and the collection is only rewritten when something changed.
    pub fn delete(&self, id: Uuid) -> Result<(), CoreError> {
        let mut records = self.all();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Ok(());
        }
        store::write_collection(self.store.as_ref(), T::COLLECTION, &records)
    }
}

impl<S: KeyValueStore> Repository<Reminder, S> {
    /// Flips the paid flag, leaving every other field untouched.
    pub fn set_paid(&self, id: Uuid, is_paid: bool) -> Result<Reminder, CoreError> {
        self.update(
            id,
            ReminderPatch {
                is_paid: Some(is_paid),
                ..ReminderPatch::default()
            },
        )
    }

    /// Reminders ordered by ascending due date, for display.
    pub fn upcoming(&self) -> Vec<Reminder> {
        let mut reminders = self.all();
        reminders.sort_by_key(|reminder| reminder.due_date);
        reminders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;
    use pocketmint_domain::{ExpenseCategory, Frequency};

    fn expense_repo() -> ExpenseRepository<MemoryStore> {
        Repository::new(Arc::new(MemoryStore::new()))
    }

    fn lunch_input() -> NewExpense {
        NewExpense {
            amount: 45.5,
            category: ExpenseCategory::Food,
            description: "Lunch".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        }
    }

    fn phone_bill() -> NewReminder {
        NewReminder {
            title: "Phone bill".into(),
            amount: 40.0,
            due_date: NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
            is_recurring: true,
            frequency: Some(Frequency::Monthly),
            description: Some("Prepaid plan".into()),
        }
    }

    #[test]
    fn create_grows_collection_by_one_and_preserves_fields() {
        let repo = expense_repo();
        assert!(repo.all().is_empty());

        let created = repo.create(lunch_input()).expect("create expense");
        let stored = repo.all();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], created);
        assert!(!created.id.is_nil());
        assert_eq!(created.amount, 45.5);
        assert_eq!(created.category, ExpenseCategory::Food);
        assert_eq!(created.description, "Lunch");
        assert_eq!(
            created.date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn expenses_are_placed_at_the_head() {
        let repo = expense_repo();
        let first = repo.create(lunch_input()).unwrap();
        let second = repo.create(lunch_input()).unwrap();
        let stored = repo.all();
        assert_eq!(stored[0].id, second.id);
        assert_eq!(stored[1].id, first.id);
    }

    #[test]
    fn reminders_are_placed_at_the_tail() {
        let store = Arc::new(MemoryStore::new());
        let repo: ReminderRepository<_> = Repository::new(store);
        let first = repo.create(phone_bill()).unwrap();
        let second = repo.create(phone_bill()).unwrap();
        let stored = repo.all();
        assert_eq!(stored[0].id, first.id);
        assert_eq!(stored[1].id, second.id);
    }

    #[test]
    fn update_touches_only_patched_fields() {
        let repo = expense_repo();
        let created = repo.create(lunch_input()).unwrap();

        let updated = repo
            .update(
                created.id,
                ExpensePatch {
                    amount: Some(50.25),
                    ..ExpensePatch::default()
                },
            )
            .expect("update expense");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.amount, 50.25);
        assert_eq!(updated.category, created.category);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.date, created.date);
        assert_eq!(repo.find(created.id), Some(updated));
    }

    #[test]
    fn update_of_missing_id_reports_not_found() {
        let repo = expense_repo();
        repo.create(lunch_input()).unwrap();

        let missing = Uuid::new_v4();
        let err = repo
            .update(missing, ExpensePatch::default())
            .expect_err("update must fail for unknown id");
        assert!(matches!(err, CoreError::RecordNotFound(id) if id == missing));
        // The no-op must not have created anything.
        assert_eq!(repo.all().len(), 1);
    }

    #[test]
    fn delete_is_idempotent() {
        let repo = expense_repo();
        let keep = repo.create(lunch_input()).unwrap();
        let gone = repo.create(lunch_input()).unwrap();

        repo.delete(gone.id).expect("first delete");
        let after_first = repo.all();
        repo.delete(gone.id).expect("second delete");
        assert_eq!(repo.all(), after_first);
        assert_eq!(repo.all(), vec![keep]);
    }

    #[test]
    fn paid_toggle_round_trip_leaves_other_fields_unchanged() {
        let store = Arc::new(MemoryStore::new());
        let repo: ReminderRepository<_> = Repository::new(store);
        let created = repo.create(phone_bill()).unwrap();
        assert!(!created.is_paid);

        let paid = repo.set_paid(created.id, true).expect("mark paid");
        assert!(paid.is_paid);

        let unpaid = repo.set_paid(created.id, false).expect("mark unpaid");
        assert_eq!(unpaid, created);
    }

    #[test]
    fn upcoming_sorts_by_due_date() {
        let store = Arc::new(MemoryStore::new());
        let repo: ReminderRepository<_> = Repository::new(store);
        let mut later = phone_bill();
        later.due_date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let late = repo.create(later).unwrap();
        let early = repo.create(phone_bill()).unwrap();

        let ordered = repo.upcoming();
        assert_eq!(ordered[0].id, early.id);
        assert_eq!(ordered[1].id, late.id);
        // Stored order is untouched by the display helper.
        assert_eq!(repo.all()[0].id, late.id);
    }

    #[test]
    fn create_surfaces_write_failures() {
        struct RejectingStore;

        impl KeyValueStore for RejectingStore {
            fn read(&self, _key: &str) -> Result<Option<String>, CoreError> {
                Ok(None)
            }
            fn write(&self, _key: &str, _payload: &str) -> Result<(), CoreError> {
                Err(CoreError::Storage("quota exceeded".into()))
            }
            fn remove(&self, _key: &str) -> Result<(), CoreError> {
                Ok(())
            }
        }

        let repo: ExpenseRepository<_> = Repository::new(Arc::new(RejectingStore));
        let err = repo.create(lunch_input()).expect_err("write must fail");
        assert!(matches!(err, CoreError::Storage(_)));
    }
}
