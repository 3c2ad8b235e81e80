use anyhow::Context;

use rollcall_core::Entity;
use rollcall_movies::{Movie, parse_catalog};
use rollcall_people::{Human, Person, greet, judge_age, or_no_input};

/// Env var pointing at a JSON array of movies.
const CATALOG_VAR: &str = "ROLLCALL_CATALOG";

fn main() -> anyhow::Result<()> {
    rollcall_observability::init();

    let mut alice = Person::new("Alice", Some(30));
    let baby = Person::new("Bea", Some(2));
    let anon = Person::new("Anon", None);

    for person in [&alice, &baby, &anon] {
        tracing::info!(
            person_id = %person.id(),
            display = %person.display(),
            greeting = %greet(person.name()),
            remark = judge_age(person.age()),
            "person"
        );
    }

    alice.rename("Bob");
    tracing::info!(person_id = %alice.id(), display = %alice.display(), "after rename");

    tracing::info!(
        legs = Human::default().legs,
        input = or_no_input(None),
        "defaults"
    );

    for movie in load_catalog()? {
        tracing::info!(
            title = %movie.title,
            year = movie.release_year,
            rating = %movie.rating,
            sequel = or_no_input(movie.sequel.as_deref()),
            "movie"
        );
    }

    Ok(())
}

fn load_catalog() -> anyhow::Result<Vec<Movie>> {
    let path = match std::env::var(CATALOG_VAR) {
        Ok(path) => path,
        Err(_) => {
            tracing::warn!("{CATALOG_VAR} not set; using built-in sample");
            return Ok(vec![Movie::sample()]);
        }
    };

    let raw = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let movies = parse_catalog(&raw).with_context(|| format!("parsing {path}"))?;
    Ok(movies)
}
