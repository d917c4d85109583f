use dioxus::prelude::*;
use ui::{AppSidebar, NavTarget};

use crate::Route;

fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::Notes => Route::Notes {},
        NavTarget::Upload => Route::Upload {},
        NavTarget::Dashboard => Route::Dashboard {},
        NavTarget::MyDocs => Route::MyDocs {},
        NavTarget::Admin => Route::Admin {},
        NavTarget::Login => Route::Login {},
        NavTarget::Register => Route::Register {},
    }
}

fn target_for(route: &Route) -> Option<NavTarget> {
    match route {
        Route::Notes {} | Route::NoteDetail { .. } => Some(NavTarget::Notes),
        Route::Upload {} => Some(NavTarget::Upload),
        Route::Dashboard {} => Some(NavTarget::Dashboard),
        Route::MyDocs {} => Some(NavTarget::MyDocs),
        Route::Admin {} => Some(NavTarget::Admin),
        _ => None,
    }
}

/// Shell for every page that shows the sidebar.
#[component]
pub fn SidebarLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        div {
            class: "relative min-h-screen bg-slate-950 text-slate-100",
            AppSidebar {
                active: target_for(&route),
                on_navigate: move |target| {
                    nav.push(route_for(target));
                },
            }
            main {
                class: "mx-auto w-full max-w-6xl px-4 py-10 md:pl-72",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_page_highlights_feed() {
        let route = Route::NoteDetail { id: "n1".into() };
        assert_eq!(target_for(&route), Some(NavTarget::Notes));
        assert_eq!(target_for(&Route::Login {}), None);
        assert_eq!(route_for(NavTarget::MyDocs), Route::MyDocs {});
    }
}
