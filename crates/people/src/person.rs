use serde::{Deserialize, Serialize};

use rollcall_core::{Entity, IdSequence, sequential_id};

/// Person identifier, unique among all people created in the process lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(u64);

sequential_id!(PersonId, "PersonId");

/// Process-wide registry backing [`Person::new`].
static GLOBAL: PersonRegistry = PersonRegistry::new();

/// Entity registry: creates people and assigns their identifiers.
///
/// There is exactly one registry per process, reached through
/// [`PersonRegistry::global`]. Identifiers come from an atomic
/// fetch-and-increment, so concurrent calls to [`PersonRegistry::create`]
/// never observe the same id. Ids start at 0 and are never reset or reused.
#[derive(Debug)]
pub struct PersonRegistry {
    ids: IdSequence,
}

impl PersonRegistry {
    /// Fresh sequence starting at 0. Only the process-wide static and unit
    /// tests construct one.
    pub(crate) const fn new() -> Self {
        Self {
            ids: IdSequence::new(),
        }
    }

    /// The process-wide registry, initialized once at startup.
    pub fn global() -> &'static PersonRegistry {
        &GLOBAL
    }

    /// Create a person. A missing `age` defaults to 0.
    pub fn create(&self, name: impl Into<String>, age: Option<u32>) -> Person {
        let id = PersonId(self.ids.allocate());
        let person = Person {
            id,
            name: name.into(),
            age: age.unwrap_or(0),
        };

        tracing::debug!(person_id = %id, name = %person.name, age = person.age, "person created");
        person
    }

    /// Number of people created so far.
    pub fn issued(&self) -> u64 {
        self.ids.issued()
    }
}

/// Entity: a named, aged person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    id: PersonId,
    name: String,
    age: u32,
}

impl Person {
    /// Create a person through the process-wide registry.
    pub fn new(name: impl Into<String>, age: Option<u32>) -> Self {
        PersonRegistry::global().create(name, age)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Replace the name in place. Any string is accepted, including "".
    pub fn rename(&mut self, new_name: impl Into<String>) {
        let new_name = new_name.into();
        tracing::debug!(person_id = %self.id, from = %self.name, to = %new_name, "person renamed");
        self.name = new_name;
    }

    /// `"{name} [{age}]"`, or just the name when age is 0.
    ///
    /// An age of 0 is indistinguishable from "not given" here.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.age != 0 {
            write!(f, "{} [{}]", self.name, self.age)
        } else {
            f.write_str(&self.name)
        }
    }
}
