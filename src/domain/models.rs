use std::fmt;
use serde::{Deserialize, Serialize};

use super::ids::IdSource;

/// Top-level destinations, one independent back stack each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tab {
    Home,
    Search,
    MyList,
    Downloads,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Search, Tab::MyList, Tab::Downloads, Tab::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::MyList => "My List",
            Tab::Downloads => "Downloads",
            Tab::Profile => "Profile",
        }
    }

    /// Number key that selects this tab in the terminal front-end.
    pub fn shortcut(self) -> char {
        match self {
            Tab::Home => '1',
            Tab::Search => '2',
            Tab::MyList => '3',
            Tab::Downloads => '4',
            Tab::Profile => '5',
        }
    }

    pub fn from_shortcut(key: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.shortcut() == key)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The kind of a detail destination, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetailKind {
    Movie,
    Show,
    Person,
}

impl DetailKind {
    pub fn label(self) -> &'static str {
        match self {
            DetailKind::Movie => "Movie",
            DetailKind::Show => "TV Show",
            DetailKind::Person => "Person",
        }
    }
}

/// Token unique per navigation event. Two routes to the same content never
/// share one, so observers keyed on route identity see a fresh navigation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload carried by every detail route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Detail {
    pub content_id: String,
    pub instance_id: InstanceId,
}

/// A navigation destination.
///
/// Equality covers the instance token, so `Route::movie("a", ..)` built twice
/// yields two unequal routes. Use [`Route::same_content`] to compare payloads
/// only.
///
/// # Examples
///
/// ```
/// use panestack::domain::{Route, SequentialIds, Tab};
///
/// let mut ids = SequentialIds::default();
/// let first = Route::movie("movie-123", &mut ids);
/// let again = Route::movie("movie-123", &mut ids);
/// assert_ne!(first, again);
/// assert!(first.same_content(&again));
/// assert!(Route::Tab(Tab::Home).is_tab_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Tab(Tab),
    Movie(Detail),
    Show(Detail),
    Person(Detail),
}

impl Route {
    pub fn movie(content_id: impl Into<String>, ids: &mut dyn IdSource) -> Route {
        Route::detail(DetailKind::Movie, content_id, ids)
    }

    pub fn show(content_id: impl Into<String>, ids: &mut dyn IdSource) -> Route {
        Route::detail(DetailKind::Show, content_id, ids)
    }

    pub fn person(content_id: impl Into<String>, ids: &mut dyn IdSource) -> Route {
        Route::detail(DetailKind::Person, content_id, ids)
    }

    /// Builds a detail route, drawing a fresh instance token from `ids`.
    pub fn detail(kind: DetailKind, content_id: impl Into<String>, ids: &mut dyn IdSource) -> Route {
        let detail = Detail {
            content_id: content_id.into(),
            instance_id: ids.next_id(),
        };
        match kind {
            DetailKind::Movie => Route::Movie(detail),
            DetailKind::Show => Route::Show(detail),
            DetailKind::Person => Route::Person(detail),
        }
    }

    pub fn tab(&self) -> Option<Tab> {
        match self {
            Route::Tab(tab) => Some(*tab),
            _ => None,
        }
    }

    pub fn detail_kind(&self) -> Option<DetailKind> {
        match self {
            Route::Tab(_) => None,
            Route::Movie(_) => Some(DetailKind::Movie),
            Route::Show(_) => Some(DetailKind::Show),
            Route::Person(_) => Some(DetailKind::Person),
        }
    }

    pub fn payload(&self) -> Option<&Detail> {
        match self {
            Route::Tab(_) => None,
            Route::Movie(detail) | Route::Show(detail) | Route::Person(detail) => Some(detail),
        }
    }

    pub fn content_id(&self) -> Option<&str> {
        self.payload().map(|detail| detail.content_id.as_str())
    }

    pub fn instance_id(&self) -> Option<&InstanceId> {
        self.payload().map(|detail| &detail.instance_id)
    }

    pub fn is_tab_root(&self) -> bool {
        matches!(self, Route::Tab(_))
    }

    /// Movie or show: occupies the detail pane.
    pub fn is_primary_detail(&self) -> bool {
        matches!(self, Route::Movie(_) | Route::Show(_))
    }

    /// Person: occupies the extra pane.
    pub fn is_contextual(&self) -> bool {
        matches!(self, Route::Person(_))
    }

    /// Same variant and content, ignoring the instance token.
    pub fn same_content(&self, other: &Route) -> bool {
        match (self, other) {
            (Route::Tab(a), Route::Tab(b)) => a == b,
            _ => self.detail_kind() == other.detail_kind() && self.content_id() == other.content_id(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Route::Tab(tab) => tab.label().to_string(),
            Route::Movie(detail) => format!("Movie: {}", detail.content_id),
            Route::Show(detail) => format!("TV Show: {}", detail.content_id),
            Route::Person(detail) => format!("Person: {}", detail.content_id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Some(detail) => write!(f, "{}#{}", self.title(), detail.instance_id),
            None => f.write_str(&self.title()),
        }
    }
}
