//! # Actor Repository Demo
//!
//! Seeds a repository, runs a few queries and mutations, and logs what happens.
//!
//! ```bash
//! RUST_LOG=info cargo run -p actor-repository
//! RUST_LOG=debug cargo run -p actor-repository   # full payloads
//! ```

use actor_repository::actor_store::{self, ActorError};
use actor_repository::model::{ActorCreate, ActorQuery, ActorUpdate, SortBy};
use actor_repository::Repository;
use store_framework::tracing::setup_tracing;
use tracing::{info, info_span, warn};

fn main() -> Result<(), ActorError> {
    setup_tracing();

    info!("Starting actor repository demo");
    let mut actors = actor_store::new_with_capacity(8);

    let seed_span = info_span!("seed").entered();
    for (name, birth_year) in [
        ("Meryl Streep", 1949),
        ("Denzel Washington", 1954),
        ("Cate Blanchett", 1969),
        ("Mahershala Ali", 1974),
        ("Alicia Vikander", 1988),
    ] {
        let actor = actors.add_actor(ActorCreate::new(name, birth_year))?;
        info!(id = actor.id, name = %actor.name, "Actor added");
    }
    drop(seed_span);

    let born_after_1960 = actors.query(
        &ActorQuery::new()
            .born_after(1960)
            .sorted_by(SortBy::BirthYear, true),
    );
    info!(count = born_after_1960.len(), "Born after 1960, youngest first");
    for actor in &born_after_1960 {
        info!(id = actor.id, name = %actor.name, birth_year = actor.birth_year);
    }

    let ali = actors.query(&ActorQuery::new().name_contains("ali"));
    info!(matches = ?ali.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), "Name contains \"ali\"");

    let updated = actors.update_actor(2, ActorUpdate::new("Cate Blanchett", 1970))?;
    info!(id = updated.id, birth_year = updated.birth_year, "Actor updated");

    let removed = actors.delete_actor(0)?;
    info!(id = removed.id, name = %removed.name, "Actor deleted");

    match actors.delete_actor(0) {
        Ok(_) => warn!("Deleted the same actor twice"),
        Err(e) => info!(error = %e, "Second delete rejected"),
    }

    info!(remaining = actors.list().len(), "Demo completed successfully");
    Ok(())
}
