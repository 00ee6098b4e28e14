//! Navigation dispatcher
//!
//! Resolves a clicked menu item into an external-link open or a route
//! transition.

use crate::domain::entities::MenuItem;
use crate::domain::ports::{Navigator, RouteTransition};
use crate::domain::value_objects::LinkTarget;

use super::menu_store::MenuStore;

/// Outcome of activating a menu item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// An external link was opened; the in-app selection is unchanged
    External { href: String, target: LinkTarget },
    /// The selection moved and the router was asked to navigate
    Route(RouteTransition),
    /// The selection moved but the item has nowhere to navigate to
    Selected,
}

/// Activate `item` (registered under `key`)
pub fn activate(
    menu: &mut MenuStore,
    navigator: &dyn Navigator,
    key: &str,
    item: &MenuItem,
) -> Activation {
    if let Some(href) = item.href.as_deref() {
        let target = item.target.unwrap_or_default();
        navigator.open_external(href, target);
        // The menu widget highlights the clicked item; put the active one back.
        menu.restore_highlight();
        return Activation::External {
            href: href.to_string(),
            target,
        };
    }

    menu.select_key(key);

    match item.route_path.as_deref() {
        Some(path) => {
            let transition =
                RouteTransition::new(path).with_query(item.query.clone().unwrap_or_default());
            navigator.push(transition.clone());
            Activation::Route(transition)
        }
        None => Activation::Selected,
    }
}
