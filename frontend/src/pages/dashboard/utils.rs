use crate::{
    api::Role,
    components::layout::{nav_links, NavLink},
};

pub fn greeting(name: &str) -> String {
    format!("Welcome, {}", name)
}

/// Shortcut tiles: every page the role may open except the dashboard itself.
pub fn quick_links(role: Role) -> Vec<NavLink> {
    nav_links(role)
        .into_iter()
        .filter(|link| link.href != "/")
        .collect()
}
