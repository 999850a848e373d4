use std::collections::HashSet;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Screen registry needs at least one navigable screen")]
    Empty,
    #[error("Duplicate screen name: {0}")]
    DuplicateName(String),
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),
}

/// A screen in a [`ScreenRegistry`], by position.
///
/// Index 0 is the [`Screen::NONE`] sentinel; navigable screens start at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Screen(usize);

impl Screen {
    /// No screen shown yet. Never a navigation target.
    pub const NONE: Screen = Screen(0);

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

#[derive(Clone, Debug)]
struct ScreenEntry {
    name: String,
    resource: String,
}

/// Fixed, ordered set of screens and the content resource each one loads.
///
/// An empty resource name marks a blank screen with nothing to load.
#[derive(Clone, Debug)]
pub struct ScreenRegistry {
    /// entries[0] is the NONE sentinel
    entries: Vec<ScreenEntry>,
}

impl ScreenRegistry {
    /// Build from `(name, resource)` pairs in navigation order
    pub fn new<I, N, R>(screens: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (N, R)>,
        N: Into<String>,
        R: Into<String>,
    {
        let mut entries = vec![ScreenEntry {
            name: String::new(),
            resource: String::new(),
        }];
        let mut seen = HashSet::new();

        for (name, resource) in screens {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(RegistryError::DuplicateName(name));
            }
            entries.push(ScreenEntry {
                name,
                resource: resource.into(),
            });
        }

        if entries.len() < 2 {
            return Err(RegistryError::Empty);
        }
        Ok(Self { entries })
    }

    /// Build from resource names, using each resource as its screen name
    pub fn from_resources<I, R>(resources: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self::new(resources.into_iter().map(|r| {
            let resource = r.into();
            (resource.clone(), resource)
        }))
    }

    /// Number of screens including the sentinel
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no navigable screen follows the sentinel
    pub fn is_empty(&self) -> bool {
        self.entries.len() < 2
    }

    /// Screen at `index`, if in range. Index 0 yields [`Screen::NONE`].
    pub fn screen(&self, index: usize) -> Option<Screen> {
        (index < self.entries.len()).then_some(Screen(index))
    }

    pub fn screen_by_name(&self, name: &str) -> Option<Screen> {
        self.entries
            .iter()
            .skip(1)
            .position(|entry| entry.name == name)
            .map(|i| Screen(i + 1))
    }

    /// Like [`screen_by_name`](Self::screen_by_name) but reports the missing name
    pub fn screen_by_name_checked(&self, name: &str) -> Result<Screen, RegistryError> {
        self.screen_by_name(name)
            .ok_or_else(|| RegistryError::UnknownScreen(name.to_string()))
    }

    /// Navigable screens in order
    pub fn screens(&self) -> impl Iterator<Item = Screen> + '_ {
        (1..self.entries.len()).map(Screen)
    }

    pub fn contains(&self, screen: Screen) -> bool {
        screen.0 < self.entries.len()
    }

    /// Resource to load for `screen`; empty for NONE, blank or unknown screens
    pub fn resource(&self, screen: Screen) -> &str {
        self.entries
            .get(screen.0)
            .map(|entry| entry.resource.as_str())
            .unwrap_or("")
    }

    pub fn name(&self, screen: Screen) -> &str {
        self.entries
            .get(screen.0)
            .map(|entry| entry.name.as_str())
            .unwrap_or("")
    }

    /// Screen after `screen`, wrapping from the last back to the first
    /// navigable screen
    pub fn next(&self, screen: Screen) -> Screen {
        let index = screen.0 + 1;
        if index >= self.entries.len() {
            Screen(1)
        } else {
            Screen(index)
        }
    }

    /// Screen before `screen`, wrapping from the first navigable screen to
    /// the last
    pub fn previous(&self, screen: Screen) -> Screen {
        if screen.0 <= 1 || screen.0 > self.entries.len() {
            Screen(self.entries.len() - 1)
        } else {
            Screen(screen.0 - 1)
        }
    }
}
