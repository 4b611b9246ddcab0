use store_framework::{Repository, ResourceStore, StoreEntity, StoreError};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct SimpleUser {
    id: u32,
    name: String,
    is_admin: bool,
}

#[derive(Debug)]
struct SimpleUserCreate {
    name: String,
}

#[derive(Debug)]
struct SimpleUserUpdate {
    name: Option<String>,
    is_admin: Option<bool>,
}

impl StoreEntity for SimpleUser {
    type Id = u32;
    type Create = SimpleUserCreate;
    type Update = SimpleUserUpdate;

    fn id(&self) -> u32 {
        self.id
    }

    fn from_create_params(id: u32, params: SimpleUserCreate) -> Self {
        Self {
            id,
            name: params.name,
            is_admin: false,
        }
    }

    fn on_update(&mut self, update: SimpleUserUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(is_admin) = update.is_admin {
            self.is_admin = is_admin;
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Simple user error: {0}")]
struct SimpleUserError(#[from] StoreError);

struct SimpleUserRepository {
    inner: ResourceStore<SimpleUser>,
}

impl Repository<SimpleUser> for SimpleUserRepository {
    type Error = SimpleUserError;

    fn inner(&self) -> &ResourceStore<SimpleUser> {
        &self.inner
    }

    fn inner_mut(&mut self) -> &mut ResourceStore<SimpleUser> {
        &mut self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        SimpleUserError(e)
    }
}

fn create(store: &mut ResourceStore<SimpleUser>, name: &str) -> SimpleUser {
    store
        .create(SimpleUserCreate { name: name.into() })
        .expect("Failed to create user")
}

// --- Tests ---

#[test]
fn test_store_full_lifecycle() {
    let mut store = ResourceStore::new();

    // 1. Create
    let user = create(&mut store, "Alice");
    assert_eq!(user.id, 0); // First ID should be 0
    assert!(!user.is_admin);

    // 2. Get
    assert_eq!(store.get(user.id), Some(user.clone()));

    // 3. Update
    let update = SimpleUserUpdate {
        name: Some("Bob".into()),
        is_admin: Some(true),
    };
    let updated = store.update(user.id, update).unwrap();
    assert_eq!(updated.id, user.id);
    assert_eq!(updated.name, "Bob");
    assert!(updated.is_admin);

    // 4. Delete
    let deleted = store.delete(user.id).unwrap();
    assert_eq!(deleted, updated);
    assert!(store.get(user.id).is_none());
    assert!(store.is_empty());
}

#[test]
fn test_ids_are_sequential_and_never_reused() {
    let mut store = ResourceStore::with_capacity(4);
    let a = create(&mut store, "a");
    let b = create(&mut store, "b");
    store.delete(b.id).unwrap();
    let c = create(&mut store, "c");

    assert_eq!((a.id, b.id, c.id), (0, 1, 2));
    let ids: Vec<u32> = store.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn test_list_preserves_insertion_order_after_delete() {
    let mut store = ResourceStore::new();
    for name in ["first", "second", "third"] {
        create(&mut store, name);
    }
    store.delete(1).unwrap();

    let names: Vec<String> = store.list().into_iter().map(|u| u.name).collect();
    assert_eq!(names, vec!["first", "third"]);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_missing_id_is_not_found_and_leaves_store_untouched() {
    let mut store = ResourceStore::new();
    create(&mut store, "Alice");
    let before = store.list();

    let update = SimpleUserUpdate {
        name: Some("Mallory".into()),
        is_admin: None,
    };
    assert_eq!(
        store.update(42, update).unwrap_err(),
        StoreError::NotFound("42".into())
    );
    assert_eq!(
        store.delete(42).unwrap_err(),
        StoreError::NotFound("42".into())
    );
    assert_eq!(store.list(), before);
}

#[test]
fn test_returned_records_are_copies() {
    let mut store = ResourceStore::new();
    let user = create(&mut store, "Alice");

    let mut fetched = store.get(user.id).unwrap();
    fetched.name = "Eve".into();
    let mut listed = store.list();
    listed[0].is_admin = true;

    assert_eq!(store.get(user.id), Some(user));
}

#[test]
fn test_repository_provided_methods() {
    let mut repo = SimpleUserRepository {
        inner: ResourceStore::new(),
    };
    assert!(repo.list().is_empty());

    let user = create(repo.inner_mut(), "Alice");
    assert_eq!(repo.get(user.id), Some(user.clone()));
    assert_eq!(repo.list(), vec![user.clone()]);

    let deleted = repo.delete(user.id).unwrap();
    assert_eq!(deleted, user);

    let err = repo.delete(user.id).unwrap_err();
    assert_eq!(err.to_string(), "Simple user error: Item not found: 0");
}
