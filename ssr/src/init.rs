use leptos::prelude::*;
use leptos_axum::AxumRouteListing;
use state::server::AppState;

pub struct AppStateBuilder {
    leptos_options: LeptosOptions,
    routes: Vec<AxumRouteListing>,
}

impl AppStateBuilder {
    pub fn new(leptos_options: LeptosOptions, routes: Vec<AxumRouteListing>) -> Self {
        Self {
            leptos_options,
            routes,
        }
    }

    pub fn build(self) -> AppState {
        tracing::debug!(
            routes = self.routes.len(),
            site_root = %self.leptos_options.site_root,
            "building app state"
        );
        AppState {
            leptos_options: self.leptos_options,
            routes: self.routes,
        }
    }
}
