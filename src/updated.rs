//! Plumbing that applies update methods to values as time passes.
//!
//! An [`UpdatedValue`](struct.UpdatedValue.html) binds a value to an
//! [`UpdateMethod`](../trait.UpdateMethod.html); an
//! [`UpdatedList`](struct.UpdatedList.html) forwards time to many updated
//! objects at once. Both can be paused.

use std::fmt;

use tracing::debug;

use crate::method::{Scalar, UpdateMethod};

/// Anything that receives regular time updates, and ignores them while it is
/// paused.
pub trait Updated<E> {
    fn is_paused(&self) -> bool;

    fn set_paused(&mut self, paused: bool);

    /// Respond to `elapsed` time. Only called while not paused.
    fn on_time(&mut self, elapsed: E);

    /// Add `elapsed` time, unless paused.
    fn add_time(&mut self, elapsed: E) {
        if !self.is_paused() {
            self.on_time(elapsed);
        }
    }
}

impl<E, U> Updated<E> for Box<U>
where
    U: Updated<E> + ?Sized,
{
    fn is_paused(&self) -> bool {
        (**self).is_paused()
    }

    fn set_paused(&mut self, paused: bool) {
        (**self).set_paused(paused)
    }

    fn on_time(&mut self, elapsed: E) {
        (**self).on_time(elapsed)
    }

    fn add_time(&mut self, elapsed: E) {
        (**self).add_time(elapsed)
    }
}

/// Where an `UpdatedValue` reads and writes its value.
pub trait Slot<T> {
    fn get(&self) -> T;

    fn set(&mut self, value: T);
}

/// A slot that stores its own copy of the value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Owned<T>(pub T);

impl<T: Copy> Slot<T> for Owned<T> {
    fn get(&self) -> T {
        self.0
    }

    fn set(&mut self, value: T) {
        self.0 = value;
    }
}

/// Updates a variable that lives elsewhere, for as long as it is borrowed.
impl<'a, T: Copy> Slot<T> for &'a mut T {
    fn get(&self) -> T {
        **self
    }

    fn set(&mut self, value: T) {
        **self = value;
    }
}

/// A slot made of a getter and a setter, for values that can be neither owned
/// nor borrowed for the lifetime of the `UpdatedValue`, e.g. a field behind
/// an `Rc<Cell<_>>`.
///
/// # Example
/// ```
/// use std::{cell::Cell, rc::Rc};
///
/// use rated::{Accessor, Direction, Linear, Updated, UpdatedValue};
///
/// let shared = Rc::new(Cell::new(1));
/// let (get, set) = (shared.clone(), shared.clone());
///
/// let method = Linear::moving(2, Direction::Increasing);
/// let mut value = UpdatedValue::new(Accessor::new(move || get.get(), move |v| set.set(v)));
/// value.set_method(Some(&method));
/// value.add_time(3);
///
/// assert_eq!(shared.get(), 7);
/// ```
pub struct Accessor<G, S> {
    getter: G,
    setter: S,
}

impl<G, S> Accessor<G, S> {
    pub fn new(getter: G, setter: S) -> Self {
        Accessor { getter, setter }
    }
}

impl<T, G, S> Slot<T> for Accessor<G, S>
where
    G: Fn() -> T,
    S: FnMut(T),
{
    fn get(&self) -> T {
        (self.getter)()
    }

    fn set(&mut self, value: T) {
        (self.setter)(value)
    }
}

impl<G, S> fmt::Debug for Accessor<G, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").finish_non_exhaustive()
    }
}

/// A value that changes over time according to an update method.
///
/// Nothing happens until a method is installed with
/// [`set_method`](#method.set_method). The method is borrowed, so the same
/// method can drive many values.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use rated::{Direction, Linear, Updated, UpdatedValue};
///
/// let increaser = Linear::moving(0.5f64, Direction::Increasing);
///
/// let mut value = UpdatedValue::owned(1.0f64);
/// value.add_time(50.0);
/// assert_approx_eq!(value.value(), 1.0);
///
/// value.set_method(Some(&increaser));
/// value.add_time(5.0);
/// assert_approx_eq!(value.value(), 3.5);
/// ```
pub struct UpdatedValue<'m, T: Scalar, S = Owned<T>> {
    slot: S,
    method: Option<&'m dyn UpdateMethod<T>>,
    paused: bool,
}

impl<'m, T: Scalar> UpdatedValue<'m, T> {
    /// An updated value that stores its own copy, starting at `value`.
    pub fn owned(value: T) -> Self {
        Self::new(Owned(value))
    }
}

impl<'m, T, S> UpdatedValue<'m, T, S>
where
    T: Scalar,
    S: Slot<T>,
{
    pub fn new(slot: S) -> Self {
        UpdatedValue {
            slot,
            method: None,
            paused: false,
        }
    }

    pub fn value(&self) -> T {
        self.slot.get()
    }

    pub fn set_value(&mut self, value: T) {
        self.slot.set(value);
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Install the method that decides how the value changes, or detach the
    /// current one with `None`.
    ///
    /// The new method is applied once with zero elapsed time, which brings a
    /// value that is illegal for the method (e.g. outside of a looped range)
    /// back into its domain. This happens even while paused.
    pub fn set_method(&mut self, method: Option<&'m dyn UpdateMethod<T>>) {
        debug!(attached = method.is_some(), value = ?self.value(), "set update method");

        self.method = method;
        self.on_time(T::zero());
    }

    pub fn method(&self) -> Option<&'m dyn UpdateMethod<T>> {
        self.method
    }

    /// Whether a method is installed and has not reached its target yet.
    pub fn is_updating(&self) -> bool {
        self.method
            .is_some_and(|method| !method.is_finished(self.value()))
    }
}

impl<'m, T, S> Updated<T> for UpdatedValue<'m, T, S>
where
    T: Scalar,
    S: Slot<T>,
{
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn on_time(&mut self, elapsed: T) {
        if let Some(method) = self.method {
            let value = self.value();

            if !method.is_finished(value) {
                self.slot.set(method.advance(value, elapsed));
            }
        }
    }
}

impl<'m, T, S> fmt::Debug for UpdatedValue<'m, T, S>
where
    T: Scalar,
    S: Slot<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdatedValue")
            .field("value", &self.value())
            .field("has_method", &self.method.is_some())
            .field("paused", &self.paused)
            .finish()
    }
}

/// Identifies an item in an [`UpdatedList`](struct.UpdatedList.html).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Handle(u64);

/// Forwards time to many updated objects in one shot.
///
/// The list is itself [`Updated`](trait.Updated.html): pausing it stops time
/// for all of its items, while each item can still be paused on its own.
/// Mixed item types can be stored as `Box<dyn Updated<E>>`.
///
/// # Example
/// ```
/// # use assert_approx_eq::assert_approx_eq;
/// use rated::{Direction, Linear, Updated, UpdatedList, UpdatedValue};
///
/// let increaser = Linear::moving(1.0f64, Direction::Increasing);
///
/// let mut list = UpdatedList::new();
/// let a = list.add(UpdatedValue::owned(0.0f64));
/// let b = list.add(UpdatedValue::owned(10.0f64));
///
/// for item in list.iter_mut() {
///     item.set_method(Some(&increaser));
/// }
/// list.get_mut(b).unwrap().set_paused(true);
/// list.add_time(2.0);
///
/// assert_approx_eq!(list.get(a).unwrap().value(), 2.0);
/// assert_approx_eq!(list.get(b).unwrap().value(), 10.0);
/// ```
#[derive(Debug)]
pub struct UpdatedList<U> {
    items: Vec<(Handle, U)>,
    next_id: u64,
    paused: bool,
}

impl<U> Default for UpdatedList<U> {
    fn default() -> Self {
        UpdatedList {
            items: Vec::new(),
            next_id: 0,
            paused: false,
        }
    }
}

impl<U> UpdatedList<U> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item`, returning the handle to refer to it later.
    pub fn add(&mut self, item: U) -> Handle {
        let handle = Handle(self.next_id);
        self.next_id += 1;
        self.items.push((handle, item));

        handle
    }

    /// Remove an item, handing it back. Returns `None` if it is not in the
    /// list.
    pub fn remove(&mut self, handle: Handle) -> Option<U> {
        let index = self.items.iter().position(|(h, _)| *h == handle)?;

        Some(self.items.swap_remove(index).1)
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.items.iter().any(|(h, _)| *h == handle)
    }

    pub fn get(&self, handle: Handle) -> Option<&U> {
        self.items
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, item)| item)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut U> {
        self.items
            .iter_mut()
            .find(|(h, _)| *h == handle)
            .map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item. Handles that were handed out are never reused.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &U> {
        self.items.iter().map(|(_, item)| item)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut U> {
        self.items.iter_mut().map(|(_, item)| item)
    }
}

impl<E, U> Updated<E> for UpdatedList<U>
where
    E: Copy,
    U: Updated<E>,
{
    fn is_paused(&self) -> bool {
        self.paused
    }

    fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn on_time(&mut self, elapsed: E) {
        for item in self.iter_mut() {
            item.add_time(elapsed);
        }
    }
}
