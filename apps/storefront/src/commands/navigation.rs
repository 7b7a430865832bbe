//! # Navigation Commands
//!
//! Page switching. A page change never touches the store.

use tracing::debug;

use crate::state::{NavigationState, Page};

/// Shows `page` and returns it.
pub fn navigate_to(navigation: &NavigationState, page: Page) -> Page {
    let previous = navigation.navigate_to(page);
    debug!(from = %previous, to = %page, "navigate_to command");
    page
}

/// Gets the page currently showing.
pub fn current_page(navigation: &NavigationState) -> Page {
    navigation.current()
}
