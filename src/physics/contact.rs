use crate::math::Vector2;
use crate::physics::ColliderHandle;

/// An index into the contact arena for the current sub-step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(u32);

/// The geometric description of one overlapping pair.
///
/// Immutable once created; both bodies of the pair hold the same `ContactId`
/// so each side observes identical contact data.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// The first body of the pair, in broad-phase order
    pub first: ColliderHandle,

    /// The second body of the pair
    pub second: ColliderHandle,

    /// Unit vector pointing from `first` toward `second`
    pub normal: Vector2,

    /// The contact point, placed at the midpoint of the overlap along the normal
    pub point: Vector2,

    /// Penetration depth, always positive
    pub penetration: f32,
}

/// Per-sub-step arena of contact records.
///
/// Bodies store `ContactId`s rather than owning contact objects; the arena is
/// reset at the start of every sub-step, which discards all records at once.
#[derive(Debug, Default)]
pub struct ContactArena {
    contacts: Vec<Contact>,
}

impl ContactArena {
    /// Creates a new empty arena
    pub fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Discards all contacts from the previous sub-step, keeping the allocation
    pub fn reset(&mut self) {
        self.contacts.clear();
    }

    /// Stores a contact and returns its id
    pub fn insert(&mut self, contact: Contact) -> ContactId {
        let id = ContactId(self.contacts.len() as u32);
        self.contacts.push(contact);
        id
    }

    /// Gets a contact by id.
    ///
    /// Ids are only valid for the sub-step that created them.
    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.get(id.0 as usize)
    }

    /// Returns the number of contacts recorded this sub-step
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns whether any contacts were recorded this sub-step
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns an iterator over all contacts of the current sub-step
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }
}
