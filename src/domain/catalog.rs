//! Static sample content: the outgoing links each destination offers.

use super::models::{DetailKind, Route, Tab};

/// A selectable entry on a screen that leads to a detail destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub kind: DetailKind,
    pub content_id: &'static str,
}

const fn link(label: &'static str, kind: DetailKind, content_id: &'static str) -> Link {
    Link { label, kind, content_id }
}

const HOME: &[Link] = &[
    link("Featured movie", DetailKind::Movie, "movie-123"),
    link("Featured TV show", DetailKind::Show, "tvshow-456"),
];

const SEARCH: &[Link] = &[
    link("Movie result", DetailKind::Movie, "search-movie-789"),
    link("TV show result", DetailKind::Show, "search-tvshow-101"),
    link("Person result", DetailKind::Person, "person-111"),
];

const MY_LIST: &[Link] = &[
    link("Saved movie", DetailKind::Movie, "mylist-movie-222"),
    link("Saved TV show", DetailKind::Show, "mylist-tvshow-333"),
];

const DOWNLOADS: &[Link] = &[
    link("Downloaded movie", DetailKind::Movie, "download-movie-444"),
    link("Downloaded TV show", DetailKind::Show, "download-tvshow-555"),
];

const MOVIE: &[Link] = &[
    link("Actor", DetailKind::Person, "actor-001"),
    link("Director", DetailKind::Person, "director-002"),
    link("Similar movie 1", DetailKind::Movie, "similar-movie-001"),
    link("Similar movie 2", DetailKind::Movie, "similar-movie-002"),
    link("Similar TV show", DetailKind::Show, "similar-tv-001"),
];

const SHOW: &[Link] = &[
    link("Actor", DetailKind::Person, "actor-003"),
    link("Creator", DetailKind::Person, "creator-004"),
    link("Similar TV show 1", DetailKind::Show, "similar-tv-001"),
    link("Similar TV show 2", DetailKind::Show, "similar-tv-002"),
    link("Similar movie", DetailKind::Movie, "similar-movie-001"),
];

const PERSON: &[Link] = &[
    link("Movie from filmography", DetailKind::Movie, "person-movie-777"),
    link("TV show from filmography", DetailKind::Show, "person-tvshow-888"),
];

pub fn links_for(route: &Route) -> &'static [Link] {
    match route {
        Route::Tab(Tab::Home) => HOME,
        Route::Tab(Tab::Search) => SEARCH,
        Route::Tab(Tab::MyList) => MY_LIST,
        Route::Tab(Tab::Downloads) => DOWNLOADS,
        Route::Tab(Tab::Profile) => &[],
        Route::Movie(_) => MOVIE,
        Route::Show(_) => SHOW,
        Route::Person(_) => PERSON,
    }
}
